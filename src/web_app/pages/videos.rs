// web_app/pages/videos.rs - Video demo player and playlist
//
// The playlist is filtered by category and search text. The player keeps
// showing the selected video even when it is filtered out of the playlist.

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::web_app::components::{CategoryTabs, NoResults, PageHero, SearchInput};
use crate::web_app::content::{VIDEOS, VIDEO_CATEGORIES};
use crate::web_app::model::{ListFilter, Route, Selection, Video};

/// Video demos page
#[component]
pub fn VideosPage() -> impl IntoView {
    let defaults = ListFilter::default();
    let active_category = RwSignal::new(defaults.category);
    let search_query = RwSignal::new(defaults.query);
    let selection = RwSignal::new(
        Selection::first_of(VIDEOS, |v| v.id).unwrap_or_else(|| Selection::new("")),
    );

    let filtered_videos = Memo::new(move |_| {
        ListFilter::new(active_category.get(), search_query.get())
            .apply(VIDEOS)
            .into_iter()
            .copied()
            .collect::<Vec<Video>>()
    });
    let on_clear_filters = Callback::new(move |_: ()| {
        let cleared = ListFilter::default();
        active_category.set(cleared.category);
        search_query.set(cleared.query);
    });
    let selected_video = Memo::new(move |_| {
        selection.with(|s| s.find(VIDEOS, |v| v.id).copied())
    });

    view! {
        <Title text=Route::Videos.title()/>
        <Meta name="description" content=Route::Videos.description()/>

        <PageHero
            title="Video Demonstrations"
            subtitle="Watch how HRGPTAI transforms the recruitment process with our AI-powered tools."
        />

        <section class="py-12">
            <div class="container space-y-6">
                <SearchInput query=search_query placeholder="Search videos..."/>
                <CategoryTabs categories=VIDEO_CATEGORIES active=active_category/>
            </div>
        </section>

        <section class="pb-16">
            <div class="container grid lg:grid-cols-3 gap-8">
                // Player
                <div class="lg:col-span-2">
                    {move || selected_video.get().map(|video| view! {
                        <div class="bg-white rounded-lg shadow-lg overflow-hidden">
                            <div class="aspect-video">
                                <iframe
                                    class="w-full h-full"
                                    src=video.video_url
                                    title=video.title
                                    allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture"
                                    allowfullscreen=true
                                ></iframe>
                            </div>
                            <div class="p-6">
                                <h2 class="text-2xl font-bold mb-2 text-gray-900">{video.title}</h2>
                                <p class="text-gray-600">{video.description}</p>
                            </div>
                        </div>
                    })}
                </div>

                // Playlist
                <div>
                    <h3 class="text-xl font-semibold mb-4 text-gray-900">"Video Playlist"</h3>
                    <Show
                        when=move || !filtered_videos.with(Vec::is_empty)
                        fallback=move || view! {
                            <NoResults message="No videos match your search." on_clear=on_clear_filters/>
                        }
                    >
                        <div class="space-y-4 max-h-[600px] overflow-y-auto pr-2">
                            <For
                                each=move || filtered_videos.get()
                                key=|video| video.id
                                children=move |video: Video| {
                                    let id = video.id;
                                    view! {
                                        <button
                                            type="button"
                                            class=move || if selection.with(|s| s.is_selected(id)) {
                                                "w-full text-left rounded-lg overflow-hidden bg-white border border-gray-100 ring-2 ring-primary"
                                            } else {
                                                "w-full text-left rounded-lg overflow-hidden bg-white border border-gray-100 hover:shadow-md transition-all"
                                            }
                                            on:click=move |_| selection.update(|s| s.select(id))
                                        >
                                            <img src=video.thumbnail alt=video.title class="w-full h-32 object-cover"/>
                                            <div class="p-3">
                                                <h4 class="font-medium text-sm line-clamp-1 text-gray-900">{video.title}</h4>
                                            </div>
                                        </button>
                                    }
                                }
                            />
                        </div>
                    </Show>
                </div>
            </div>
        </section>
    }
}
