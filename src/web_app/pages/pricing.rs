// web_app/pages/pricing.rs - Plans and ROI
//
// Monthly/annual toggle over the plan cards, trust badges, a stepper over
// customer success stories, the traditional-vs-HRGPTAI comparison table and
// pricing questions.

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::web_app::components::{Badge, CtaBanner, LinkButton, MetricGrid, SectionHeading};
use crate::web_app::content::pricing::{
    COMPARISON, PRICING_PLANS, PRICING_QUESTIONS, SUCCESS_STORIES, TRUST_BADGES,
};
use crate::web_app::model::pricing::plan_price_label;
use crate::web_app::model::{BillingPeriod, Carousel, PricingPlan, Route};

/// Pricing page
#[component]
pub fn PricingPage() -> impl IntoView {
    let billing_period = RwSignal::new(BillingPeriod::default());

    view! {
        <Title text=Route::Pricing.title()/>
        <Meta name="description" content=Route::Pricing.description()/>

        <section class="bg-gradient-to-r from-primary/10 to-secondary/10 py-16">
            <div class="container text-center">
                <span class="inline-block px-4 py-1 rounded-full bg-primary/10 text-primary font-medium text-sm mb-4">
                    "PRICING PLANS"
                </span>
                <h1 class="text-4xl md:text-5xl font-bold mb-6 bg-gradient-to-r from-primary to-secondary bg-clip-text text-transparent">
                    "Simple, Transparent Pricing"
                </h1>
                <p class="text-xl text-gray-600 mb-8 max-w-3xl mx-auto">
                    "Choose the plan that works best for your recruitment needs. No hidden fees. Cancel anytime."
                </p>
                <BillingToggle period=billing_period/>
            </div>
        </section>

        // Trust badges
        <section class="py-8 bg-white border-b border-gray-100">
            <div class="container flex flex-wrap justify-center gap-6">
                {TRUST_BADGES.iter().map(|badge| view! {
                    <div class="flex items-center gap-2 text-gray-700">
                        <span class="text-xl">{badge.icon}</span>
                        <span class="font-medium">{badge.name}</span>
                    </div>
                }).collect_view()}
            </div>
        </section>

        <section class="py-16">
            <div class="container grid md:grid-cols-3 gap-8 items-start">
                {PRICING_PLANS.iter().map(|plan| view! {
                    <PlanCard plan=*plan period=billing_period/>
                }).collect_view()}
            </div>
        </section>

        <SuccessStories/>
        <ComparisonTable/>

        <section class="py-16 bg-white">
            <div class="container">
                <SectionHeading
                    eyebrow="FAQ"
                    title="Frequently Asked Questions"
                    subtitle="Everything you need to know about our pricing and plans"
                />
                <div class="grid md:grid-cols-2 gap-8 max-w-5xl mx-auto">
                    {PRICING_QUESTIONS.iter().map(|(question, answer)| view! {
                        <div class="bg-gray-50 rounded-xl p-6">
                            <h3 class="text-xl font-bold mb-4 text-gray-900">{*question}</h3>
                            <p class="text-gray-600">{*answer}</p>
                        </div>
                    }).collect_view()}
                </div>
            </div>
        </section>

        <CtaBanner
            title="Ready to Transform Your Hiring Process?"
            subtitle="Start your free trial today. No credit card required. Cancel anytime."
        >
            <LinkButton href="/signup" variant="light">"Start Free Trial"</LinkButton>
            <LinkButton href="/contact" variant="outline">"Schedule Demo"</LinkButton>
        </CtaBanner>
    }
}

/// Monthly / annual switch
#[component]
fn BillingToggle(period: RwSignal<BillingPeriod>) -> impl IntoView {
    view! {
        <div class="inline-flex w-full max-w-md p-1 bg-white rounded-full shadow-md">
            {[BillingPeriod::Monthly, BillingPeriod::Annual].into_iter().map(|option| view! {
                <button
                    type="button"
                    class=move || if period.get() == option {
                        "flex-1 py-2 px-4 rounded-full font-medium transition-all bg-gradient-to-r from-primary to-secondary text-white shadow-md"
                    } else {
                        "flex-1 py-2 px-4 rounded-full font-medium transition-all text-gray-700"
                    }
                    aria-pressed=move || (period.get() == option).to_string()
                    on:click=move |_| period.set(option)
                >
                    {option.to_string()}
                </button>
            }).collect_view()}
        </div>
    }
}

#[component]
fn PlanCard(plan: PricingPlan, period: RwSignal<BillingPeriod>) -> impl IntoView {
    let price = move || plan_price_label(&plan, period.get());
    let card_class = if plan.popular {
        "relative bg-white rounded-2xl shadow-xl p-8 border-2 border-primary md:scale-105 z-10"
    } else {
        "relative bg-white rounded-2xl shadow-md p-8 border border-gray-200"
    };
    let cta_variant = if plan.popular { "primary" } else { "muted" };

    view! {
        <div class=card_class>
            {plan.popular.then(|| view! {
                <div class="absolute -top-4 left-1/2 -translate-x-1/2">
                    <Badge variant="popular">"MOST POPULAR"</Badge>
                </div>
            })}
            <h3 class="text-2xl font-bold mb-2 text-gray-900">{plan.name}</h3>
            <p class="text-gray-600 mb-6 h-12">{plan.description}</p>
            <div class="mb-6">
                <span class="text-5xl font-bold text-gray-900">{move || price().0}</span>
                <span class="text-gray-500 ml-1 text-xl">{move || price().1}</span>
            </div>
            <ul class="space-y-3 mb-8">
                {plan.features.iter().map(|feature| view! {
                    <li class="flex items-start">
                        <span class="bg-primary/10 text-primary px-1 rounded-full mr-3">"✓"</span>
                        <span>{*feature}</span>
                    </li>
                }).collect_view()}
            </ul>
            <LinkButton href=plan.cta_link variant=cta_variant class="w-full text-center">
                {plan.cta}
            </LinkButton>
        </div>
    }
}

/// Success-story stepper; prev/next stop at the ends
#[component]
fn SuccessStories() -> impl IntoView {
    let stepper = RwSignal::new(Carousel::new(SUCCESS_STORIES.len()));
    let active_story = move || SUCCESS_STORIES.get(stepper.with(Carousel::index));

    view! {
        <section class="py-16 bg-gray-50">
            <div class="container">
                <SectionHeading
                    eyebrow="SUCCESS STORIES"
                    title="Real Results from Real Companies"
                    subtitle="See how organizations across India are transforming their hiring processes with HRGPTAI"
                />

                <div class="flex justify-center gap-2 mb-8">
                    {(0..SUCCESS_STORIES.len()).map(|index| view! {
                        <button
                            type="button"
                            class=move || if stepper.with(|s| s.index() == index) {
                                "w-3 h-3 rounded-full bg-primary"
                            } else {
                                "w-3 h-3 rounded-full bg-gray-300"
                            }
                            aria-label=format!("Show story {}", index + 1)
                            on:click=move |_| stepper.update(|s| s.go_to(index))
                        ></button>
                    }).collect_view()}
                </div>

                <div class="max-w-4xl mx-auto">
                    {move || active_story().map(|story| view! {
                        <div class="bg-white rounded-2xl shadow-lg p-8 fade-in">
                            <div class="flex items-center gap-4 mb-6">
                                <img src=story.logo alt=story.company class="w-16 h-16 rounded-lg"/>
                                <h3 class="text-2xl font-bold text-gray-900">{story.company}</h3>
                            </div>
                            <p class="text-xl text-gray-700 mb-6 italic">{format!("\"{}\"", story.quote)}</p>
                            <div class="mb-6">
                                <MetricGrid metrics=story.stats/>
                            </div>
                            <div class="flex items-center gap-3">
                                <img src=story.photo alt=story.person class="w-12 h-12 rounded-full"/>
                                <div>
                                    <div class="font-medium text-gray-900">{story.person}</div>
                                    <div class="text-sm text-gray-600">{story.position}</div>
                                </div>
                            </div>
                        </div>
                    })}
                </div>

                <div class="flex justify-center gap-4 mt-8">
                    <button
                        type="button"
                        class="p-2 w-10 h-10 rounded-full bg-gray-200 text-gray-700 disabled:opacity-50"
                        aria-label="Previous story"
                        disabled=move || !stepper.with(Carousel::has_prev)
                        on:click=move |_| stepper.update(Carousel::prev)
                    >
                        "‹"
                    </button>
                    <button
                        type="button"
                        class="p-2 w-10 h-10 rounded-full bg-gray-200 text-gray-700 disabled:opacity-50"
                        aria-label="Next story"
                        disabled=move || !stepper.with(Carousel::has_next)
                        on:click=move |_| stepper.update(Carousel::next)
                    >
                        "›"
                    </button>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ComparisonTable() -> impl IntoView {
    view! {
        <section class="py-16 bg-white">
            <div class="container">
                <SectionHeading
                    eyebrow="ROI COMPARISON"
                    title="HRGPTAI vs. Traditional Hiring"
                    subtitle="See how our AI-powered platform can revolutionize your recruitment process with significant time and cost savings."
                />
                <div class="overflow-x-auto rounded-2xl shadow-lg">
                    <table class="w-full">
                        <thead class="bg-gradient-to-r from-primary to-secondary text-white">
                            <tr>
                                <th class="py-5 px-6 text-left font-bold text-lg">"Category"</th>
                                <th class="py-5 px-6 text-left font-bold text-lg">"Traditional Hiring"</th>
                                <th class="py-5 px-6 text-left font-bold text-lg">"HRGPTAI"</th>
                                <th class="py-5 px-6 text-left font-bold text-lg">"Your Savings"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {COMPARISON.iter().map(|row| view! {
                                <tr class="border-b border-gray-100 even:bg-gray-50">
                                    <td class="py-5 px-6 font-medium text-gray-900 text-lg">{row.category}</td>
                                    <td class="py-5 px-6 text-gray-600">{row.traditional}</td>
                                    <td class="py-5 px-6 text-primary font-medium">{row.hrgptai}</td>
                                    <td class="py-5 px-6 text-green-600 font-bold">{row.savings}</td>
                                </tr>
                            }).collect_view()}
                        </tbody>
                    </table>
                </div>
            </div>
        </section>
    }
}
