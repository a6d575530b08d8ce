// web_app/pages/features.rs - Feature explorer
//
// A tab list of features on the left and the selected feature's detail
// panel on the right. The first feature is selected on load.

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::web_app::components::{CtaBanner, LinkButton, PageHero};
use crate::web_app::content::FEATURES;
use crate::web_app::model::{Feature, Route, Selection};

/// Features page
#[component]
pub fn FeaturesPage() -> impl IntoView {
    let selection = RwSignal::new(
        Selection::first_of(FEATURES, |f| f.id).unwrap_or_else(|| Selection::new("")),
    );
    let active_feature = Memo::new(move |_| {
        selection.with(|s| s.find(FEATURES, |f| f.id).copied())
    });

    view! {
        <Title text=Route::Features.title()/>
        <Meta name="description" content=Route::Features.description()/>

        <PageHero
            title="Our Features"
            subtitle="Discover how our AI-powered tools can transform your recruitment process from job posting to offer letter."
        />

        <section class="py-16">
            <div class="container grid lg:grid-cols-3 gap-8">
                // Feature tabs
                <div class="bg-white rounded-lg shadow-md overflow-hidden border border-gray-100 self-start">
                    {FEATURES.iter().map(|feature| {
                        let id = feature.id;
                        let is_active = move || selection.with(|s| s.is_selected(id));
                        view! {
                            <button
                                type="button"
                                class=move || if is_active() {
                                    "w-full px-6 py-4 text-left flex items-center gap-4 transition-colors bg-primary text-white"
                                } else {
                                    "w-full px-6 py-4 text-left flex items-center gap-4 transition-colors hover:bg-gray-50"
                                }
                                aria-selected=move || is_active().to_string()
                                on:click=move |_| selection.update(|s| s.select(id))
                            >
                                <span class="text-2xl">{feature.icon}</span>
                                <h3 class="font-semibold">{feature.title}</h3>
                            </button>
                        }
                    }).collect_view()}
                </div>

                // Detail panel
                <div class="lg:col-span-2">
                    {move || active_feature.get().map(|feature| view! { <FeatureDetail feature=feature/> })}
                </div>
            </div>
        </section>

        <CtaBanner
            title="Ready to transform your hiring?"
            subtitle="Get started with a free trial today."
        >
            <LinkButton href="/signup" variant="light">"Start Free Trial"</LinkButton>
        </CtaBanner>
    }
}

#[component]
fn FeatureDetail(feature: Feature) -> impl IntoView {
    view! {
        <div class="bg-white rounded-lg shadow-lg p-8 border border-gray-100 fade-in">
            <div class="flex items-center mb-6">
                <span class="text-5xl mr-4">{feature.icon}</span>
                <h2 class="text-2xl md:text-3xl font-bold text-gray-900">{feature.title}</h2>
            </div>
            <p class="text-gray-600 text-lg mb-6">{feature.description}</p>
            <div class="mb-8">
                <h3 class="font-semibold text-lg mb-3 text-gray-900">"Key Benefits:"</h3>
                <ul class="space-y-2">
                    {feature.details.iter().map(|detail| view! {
                        <li class="flex items-start">
                            <span class="text-primary mr-2">"✓"</span>
                            <span>{*detail}</span>
                        </li>
                    }).collect_view()}
                </ul>
            </div>
            <LinkButton href="/signup">"Try This Feature"</LinkButton>
        </div>
    }
}
