// web_app/pages/blog.rs - Blog article listing

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::web_app::components::{CategoryTabs, NoResults, PageHero, SearchInput};
use crate::web_app::content::{BLOG_CATEGORIES, BLOG_POSTS};
use crate::web_app::model::{category_name, BlogPost, ListFilter, Route};

/// Article detail links have no page of their own and land on the home page
pub fn article_href(post: &BlogPost) -> String {
    format!("/blog/{}", post.id)
}

/// Blog page
#[component]
pub fn BlogPage() -> impl IntoView {
    let defaults = ListFilter::default();
    let active_category = RwSignal::new(defaults.category);
    let search_query = RwSignal::new(defaults.query);

    let filtered_posts = Memo::new(move |_| {
        ListFilter::new(active_category.get(), search_query.get())
            .apply(BLOG_POSTS)
            .into_iter()
            .copied()
            .collect::<Vec<BlogPost>>()
    });

    let on_clear_filters = Callback::new(move |_: ()| {
        let cleared = ListFilter::default();
        active_category.set(cleared.category);
        search_query.set(cleared.query);
    });

    view! {
        <Title text=Route::Blog.title()/>
        <Meta name="description" content=Route::Blog.description()/>

        <PageHero
            title="The HRGPTAI Blog"
            subtitle="Insights and updates about AI-powered recruitment and HR technologies."
        />

        <section class="py-12">
            <div class="container space-y-6">
                <SearchInput query=search_query placeholder="Search articles..."/>
                <CategoryTabs categories=BLOG_CATEGORIES active=active_category/>
            </div>
        </section>

        <section class="pb-16">
            <div class="container">
                <Show
                    when=move || !filtered_posts.with(Vec::is_empty)
                    fallback=move || view! {
                        <NoResults
                            message="No articles match your search criteria."
                            on_clear=on_clear_filters
                        />
                    }
                >
                    <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                        <For
                            each=move || filtered_posts.get()
                            key=|post| post.id
                            children=move |post: BlogPost| view! { <PostCard post=post/> }
                        />
                    </div>
                </Show>
            </div>
        </section>

        <NewsletterSignup/>
    }
}

#[component]
fn PostCard(post: BlogPost) -> impl IntoView {
    view! {
        <article class="bg-white rounded-xl shadow-md overflow-hidden border border-gray-100 flex flex-col hover:-translate-y-1 transition-transform">
            <div class="h-48 overflow-hidden">
                <img src=post.image alt=post.title class="w-full h-full object-cover"/>
            </div>
            <div class="p-6 flex-grow flex flex-col">
                <div class="flex items-center justify-between mb-3">
                    <span class="text-xs text-primary font-semibold px-2 py-1 bg-primary/10 rounded-full">
                        {category_name(BLOG_CATEGORIES, post.category)}
                    </span>
                    <span class="text-xs text-gray-500">{post.reading_time}</span>
                </div>
                <h3 class="font-bold text-xl mb-2 text-gray-900">{post.title}</h3>
                <p class="text-gray-600 mb-4">{post.summary}</p>
                <div class="mt-auto flex items-center justify-between text-sm text-gray-500">
                    <span>{format!("By {} • {}", post.author, post.date)}</span>
                    <a href=article_href(&post) class="text-primary font-medium">
                        "Read full article" <span class="ml-1">"→"</span>
                    </a>
                </div>
            </div>
        </article>
    }
}

/// Newsletter panel. Subscriptions are not collected.
#[component]
fn NewsletterSignup() -> impl IntoView {
    view! {
        <section class="pb-16">
            <div class="container">
                <div class="bg-gradient-to-r from-primary to-secondary rounded-2xl p-8 md:p-12 text-white grid md:grid-cols-2 gap-8 items-center">
                    <div>
                        <h2 class="text-2xl md:text-3xl font-bold mb-4">"Subscribe to Our Newsletter"</h2>
                        <p class="text-white/80 mb-6 md:mb-0">
                            "Get the latest insights on AI recruitment technologies delivered straight to your inbox."
                        </p>
                    </div>
                    <div>
                        <form class="flex flex-col sm:flex-row gap-3" on:submit=|ev| ev.prevent_default()>
                            <input
                                type="email"
                                placeholder="Your email address"
                                class="flex-grow px-4 py-3 rounded-lg text-gray-900 focus:outline-none"
                            />
                            <button type="submit" class="px-6 py-3 bg-white text-primary rounded-lg font-medium hover:bg-gray-100">
                                "Subscribe"
                            </button>
                        </form>
                        <p class="text-white/60 text-sm mt-3">"We respect your privacy. Unsubscribe at any time."</p>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_article_href() {
        let post = BLOG_POSTS[0];
        assert_eq!(article_href(&post), format!("/blog/{}", post.id));
        // Article pages are not routed, so their links resolve to home
        assert_eq!(Route::resolve(&article_href(&post)), Route::Home);
    }
}
