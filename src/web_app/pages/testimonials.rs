// web_app/pages/testimonials.rs - Customer success stories
//
// A spotlight of the selected testimonial with its results, industry tabs
// filtering the card grid, and cards that move themselves into the
// spotlight when clicked.

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::web_app::components::{CategoryTabs, CtaBanner, LinkButton, PageHero};
use crate::web_app::content::testimonials::company;
use crate::web_app::content::{COMPANY_CATEGORIES, TESTIMONIALS};
use crate::web_app::model::{ListFilter, Route, Selection, Testimonial};

/// Testimonials page
#[component]
pub fn TestimonialsPage() -> impl IntoView {
    let active_company = RwSignal::new(ListFilter::default().category);
    let spotlight = RwSignal::new(
        Selection::first_of(TESTIMONIALS, |t| t.id).unwrap_or_else(|| Selection::new("")),
    );

    let filtered = Memo::new(move |_| {
        ListFilter::new(active_company.get(), "")
            .apply(TESTIMONIALS)
            .into_iter()
            .copied()
            .collect::<Vec<Testimonial>>()
    });
    let highlighted = Memo::new(move |_| {
        spotlight.with(|s| s.find(TESTIMONIALS, |t| t.id).copied())
    });
    let on_select = Callback::new(move |id: &'static str| {
        spotlight.update(|s| s.select(id));
    });

    view! {
        <Title text=Route::Testimonials.title()/>
        <Meta name="description" content=Route::Testimonials.description()/>

        <PageHero
            title="Customer Success Stories"
            subtitle="Discover how organizations are transforming their hiring process with HRGPTAI."
        />

        // Spotlight
        <section class="py-16 bg-white">
            <div class="container">
                {move || highlighted.get().map(|testimonial| view! { <Spotlight testimonial=testimonial/> })}
            </div>
        </section>

        // Industry filter
        <section class="py-12 bg-gray-50">
            <div class="container">
                <h2 class="text-2xl font-bold mb-8 text-center text-gray-900">"Filter by Industry"</h2>
                <CategoryTabs categories=COMPANY_CATEGORIES active=active_company/>
            </div>
        </section>

        <section class="py-16 bg-white">
            <div class="container grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                <For
                    each=move || filtered.get()
                    key=|testimonial| testimonial.id
                    children=move |testimonial: Testimonial| {
                        view! { <TestimonialCard testimonial=testimonial on_select=on_select/> }
                    }
                />
            </div>
        </section>

        <CtaBanner
            title="Ready to Transform Your Hiring Process?"
            subtitle="Join these successful companies and experience the future of recruitment."
        >
            <LinkButton href="/signup" variant="light">"Start Free Trial"</LinkButton>
        </CtaBanner>
    }
}

#[component]
fn Spotlight(testimonial: Testimonial) -> impl IntoView {
    let employer = company(testimonial.company_id);

    view! {
        <div class="bg-gray-50 rounded-2xl overflow-hidden shadow-xl p-8 md:p-12 fade-in">
            <div class="flex flex-col md:flex-row gap-8">
                <div class="md:w-1/3">
                    {employer.map(|c| view! {
                        <img src=c.logo alt=c.name class="h-12 object-contain mb-6"/>
                    })}
                    <div class="flex items-center mb-4">
                        <img src=testimonial.avatar alt=testimonial.name class="w-16 h-16 rounded-full mr-4"/>
                        <div>
                            <h3 class="font-bold text-lg text-gray-900">{testimonial.name}</h3>
                            <p class="text-gray-600">{testimonial.position}</p>
                        </div>
                    </div>
                    <div class="bg-white p-6 rounded-xl shadow-sm w-full mt-6">
                        <h4 class="font-semibold mb-4 text-gray-900">"Results Achieved"</h4>
                        <div class="space-y-4">
                            {testimonial.metrics.iter().map(|metric| view! {
                                <div>
                                    <p class="text-sm text-gray-600">{metric.label}</p>
                                    <p class="text-lg font-bold text-primary">{metric.value}</p>
                                </div>
                            }).collect_view()}
                        </div>
                    </div>
                </div>
                <div class="md:w-2/3">
                    <span class="block text-6xl text-gray-300 leading-none mb-4">"\u{201c}"</span>
                    <p class="text-xl md:text-2xl leading-relaxed text-gray-800 mb-8">{testimonial.quote}</p>
                    <LinkButton href="/contact">"Get Similar Results →"</LinkButton>
                </div>
            </div>
        </div>
    }
}

#[component]
fn TestimonialCard(testimonial: Testimonial, on_select: Callback<&'static str>) -> impl IntoView {
    let employer = company(testimonial.company_id);
    let accent = employer.map(|c| c.color).unwrap_or("#0066FF");
    let id = testimonial.id;

    view! {
        <div
            class="bg-white rounded-xl shadow-md overflow-hidden border border-gray-100 h-full flex flex-col cursor-pointer hover:-translate-y-1 transition-transform"
            on:click=move |_| on_select.run(id)
        >
            <div class="h-2" style=format!("background-color: {}", accent)></div>
            <div class="p-6 flex-grow">
                <div class="flex items-center mb-4">
                    <img src=testimonial.avatar alt=testimonial.name class="w-12 h-12 rounded-full mr-4"/>
                    <div>
                        <h3 class="font-semibold text-gray-900">{testimonial.name}</h3>
                        <p class="text-sm text-gray-600">{testimonial.position}</p>
                    </div>
                </div>
                <p class="text-gray-700 mb-4 line-clamp-4">{testimonial.quote}</p>
                {employer.map(|c| view! { <img src=c.logo alt=c.name class="h-8 object-contain"/> })}
            </div>
            <div class="p-4 bg-gray-50 border-t border-gray-100">
                <button type="button" class="text-primary font-medium flex items-center text-sm">
                    "Read full story"
                    <span class="ml-1">"→"</span>
                </button>
            </div>
        </div>
    }
}
