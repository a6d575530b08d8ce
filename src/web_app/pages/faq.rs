// web_app/pages/faq.rs - Frequently asked questions
//
// Category tabs and a search box narrow the question list; each question
// expands in place and at most one answer is open at a time.

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::web_app::components::{CategoryTabs, LinkButton, NoResults, PageHero, SearchInput};
use crate::web_app::content::{FAQS, FAQ_CATEGORIES};
use crate::web_app::model::{Accordion, FaqEntry, ListFilter, Route};

/// FAQ page
#[component]
pub fn FaqPage() -> impl IntoView {
    let defaults = ListFilter::default();
    let active_category = RwSignal::new(defaults.category);
    let search_query = RwSignal::new(defaults.query);
    let accordion = RwSignal::new(Accordion::<&'static str>::default());

    let filtered_faqs = Memo::new(move |_| {
        ListFilter::new(active_category.get(), search_query.get())
            .apply(FAQS)
            .into_iter()
            .copied()
            .collect::<Vec<FaqEntry>>()
    });

    let on_clear_filters = Callback::new(move |_: ()| {
        let cleared = ListFilter::default();
        active_category.set(cleared.category);
        search_query.set(cleared.query);
    });

    view! {
        <Title text=Route::Faq.title()/>
        <Meta name="description" content=Route::Faq.description()/>

        <PageHero
            title="Frequently Asked Questions"
            subtitle="Find answers to common questions about our AI-powered recruitment platform."
        />

        <section class="py-12">
            <div class="container space-y-6">
                <SearchInput query=search_query placeholder="Search questions..."/>
                <CategoryTabs categories=FAQ_CATEGORIES active=active_category/>
            </div>
        </section>

        <section class="pb-16">
            <div class="container max-w-4xl mx-auto">
                <Show
                    when=move || !filtered_faqs.with(Vec::is_empty)
                    fallback=move || view! {
                        <NoResults
                            message="No questions match your search criteria."
                            on_clear=on_clear_filters
                        />
                    }
                >
                    <div class="space-y-4">
                        <For
                            each=move || filtered_faqs.get()
                            key=|faq| faq.id
                            children=move |faq: FaqEntry| {
                                let id = faq.id;
                                let is_open = move || accordion.with(|a| a.is_expanded(id));
                                view! {
                                    <div class="bg-white rounded-lg shadow-md overflow-hidden border border-gray-100">
                                        <button
                                            type="button"
                                            class="w-full px-6 py-4 text-left flex justify-between items-center"
                                            aria-expanded=move || is_open().to_string()
                                            on:click=move |_| accordion.update(|a| a.toggle(id))
                                        >
                                            <h3 class="text-lg font-semibold text-gray-900">{faq.question}</h3>
                                            <span class=move || if is_open() {
                                                "text-primary transition-transform rotate-180"
                                            } else {
                                                "text-primary transition-transform"
                                            }>"▾"</span>
                                        </button>
                                        <Show when=is_open>
                                            <div class="px-6 pb-4 text-gray-600 fade-in">{faq.answer}</div>
                                        </Show>
                                    </div>
                                }
                            }
                        />
                    </div>
                </Show>
            </div>
        </section>

        <section class="pb-16">
            <div class="container">
                <div class="bg-gradient-to-r from-primary to-secondary rounded-2xl p-8 md:p-12 text-white text-center">
                    <h2 class="text-2xl md:text-3xl font-bold mb-4">"Still have questions?"</h2>
                    <p class="text-white/80 mb-6 max-w-2xl mx-auto">
                        "Our team is here to help. Contact us for personalized assistance with your specific recruitment needs."
                    </p>
                    <LinkButton href="/contact" variant="light">"Contact Support"</LinkButton>
                </div>
            </div>
        </section>
    }
}
