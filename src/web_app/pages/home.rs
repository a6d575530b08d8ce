// web_app/pages/home.rs - Landing page
//
// Hero, feature grid, benefits, how-it-works steps, rotating customer
// quotes, animated stats, integration partners and a closing CTA.

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::web_app::components::{AnimatedCounter, CtaBanner, LinkButton, SectionHeading};
use crate::web_app::content::home::{
    BENEFITS, HERO_HIGHLIGHTS, HOME_FEATURES, PARTNERS, QUOTES, QUOTE_ROTATION, STATS, STEPS,
};
use crate::web_app::model::{Carousel, Route};

/// Home page
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text=Route::Home.title()/>
        <Meta name="description" content=Route::Home.description()/>

        <div class="overflow-hidden">
            <HeroSection/>
            <FeaturesSection/>
            <BenefitsSection/>
            <HowItWorks/>
            <QuoteCarousel/>
            <StatsSection/>
            <PartnersSection/>

            <CtaBanner
                title="Ready to Transform Your Hiring Process?"
                subtitle="Join thousands of companies using HRGPTAI to find better candidates faster."
            >
                <LinkButton href="/signup" variant="light">"Start Free Trial"</LinkButton>
                <LinkButton href="/contact" variant="outline">"Request Demo"</LinkButton>
            </CtaBanner>
        </div>
    }
}

#[component]
fn HeroSection() -> impl IntoView {
    view! {
        <section class="py-20 bg-gradient-to-br from-primary/5 to-secondary/5">
            <div class="container grid md:grid-cols-2 gap-12 items-center">
                <div class="fade-in">
                    <h1 class="text-4xl md:text-5xl lg:text-6xl font-bold mb-6 bg-gradient-to-r from-primary to-secondary bg-clip-text text-transparent">
                        "Transform Your Hiring Process with AI"
                    </h1>
                    <p class="text-lg md:text-xl text-gray-600 mb-8">
                        "Streamline recruitment, eliminate bias, and find the perfect candidates using our advanced AI-powered platform."
                    </p>
                    <div class="flex flex-col sm:flex-row gap-4 mb-8">
                        <LinkButton href="/signup">"Get Started Free"</LinkButton>
                        <LinkButton href="/videos" variant="muted">"Watch Demo"</LinkButton>
                    </div>
                    <p class="text-gray-600">
                        "Trusted by " <span class="font-bold text-primary">"1000+"</span> " companies"
                    </p>
                </div>

                // Product preview card
                <div class="relative bg-white rounded-2xl shadow-xl p-6 border border-gray-200">
                    <div class="flex items-center justify-between mb-6">
                        <h3 class="text-xl font-semibold">"AI Interview Assistant"</h3>
                        <span class="px-3 py-1 bg-green-100 text-green-600 rounded-full text-sm">"Live"</span>
                    </div>
                    <div class="space-y-4">
                        {HERO_HIGHLIGHTS.iter().map(|item| view! {
                            <div class="flex items-center gap-4 p-4 bg-gray-50 rounded-lg">
                                <div class="w-10 h-10 rounded-full bg-primary/10 flex items-center justify-center text-primary">
                                    {item.icon}
                                </div>
                                <div>
                                    <h4 class="font-medium">{item.title}</h4>
                                    <p class="text-sm text-gray-500">{item.description}</p>
                                </div>
                            </div>
                        }).collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeaturesSection() -> impl IntoView {
    view! {
        <section class="py-20 bg-white">
            <div class="container">
                <SectionHeading
                    title="Powerful Features for Modern Recruitment"
                    subtitle="Everything you need to streamline your hiring process and find the best talent."
                />
                <div class="grid md:grid-cols-2 lg:grid-cols-5 gap-6">
                    {HOME_FEATURES.iter().map(|feature| view! {
                        <div class="p-6 rounded-xl bg-gray-50 hover:shadow-lg transition-shadow">
                            <div class="w-12 h-12 rounded-lg bg-primary/10 flex items-center justify-center mb-4">
                                <span class="text-2xl">{feature.icon}</span>
                            </div>
                            <h3 class="text-xl font-semibold mb-3">{feature.title}</h3>
                            <p class="text-gray-600">{feature.description}</p>
                        </div>
                    }).collect_view()}
                </div>
                <div class="text-center mt-12">
                    <a href="/features" class="inline-flex items-center gap-2 bg-primary/10 text-primary px-4 py-2 rounded-full hover:bg-primary/20 transition-colors">
                        <span class="text-sm font-medium">"Want to learn more?"</span>
                        <span class="text-xl">"→"</span>
                    </a>
                </div>
            </div>
        </section>
    }
}

#[component]
fn BenefitsSection() -> impl IntoView {
    view! {
        <section class="py-16 bg-white">
            <div class="container grid sm:grid-cols-2 lg:grid-cols-4 gap-8">
                {BENEFITS.iter().map(|benefit| view! {
                    <div class="text-center p-6">
                        <p class="text-4xl font-bold text-primary mb-2">{benefit.count}</p>
                        <h3 class="text-lg font-semibold mb-2">{benefit.title}</h3>
                        <p class="text-gray-600">{benefit.description}</p>
                    </div>
                }).collect_view()}
            </div>
        </section>
    }
}

#[component]
fn HowItWorks() -> impl IntoView {
    view! {
        <section class="py-20 bg-gray-50">
            <div class="container">
                <SectionHeading
                    title="How HRGPTAI Works"
                    subtitle="Our streamlined process makes implementing AI-powered recruitment simple and effective"
                />
                <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-8">
                    {STEPS.iter().map(|step| view! {
                        <div class="relative bg-white rounded-xl p-6 shadow-md">
                            <span class="absolute -top-4 -left-4 w-12 h-12 rounded-full bg-gradient-to-r from-primary to-secondary text-white font-bold flex items-center justify-center">
                                {step.number}
                            </span>
                            <div class="text-3xl mt-2">{step.icon}</div>
                            <h3 class="text-xl font-bold mt-4 mb-3 text-gray-900">{step.title}</h3>
                            <p class="text-gray-600">{step.description}</p>
                        </div>
                    }).collect_view()}
                </div>
                <div class="mt-12 text-center">
                    <a href="/videos" class="inline-flex items-center text-primary font-medium hover:underline">
                        <span>"Watch demo videos"</span>
                        <span class="ml-2">"→"</span>
                    </a>
                </div>
            </div>
        </section>
    }
}

/// Customer quotes rotating every QUOTE_ROTATION, with dot navigation
#[component]
fn QuoteCarousel() -> impl IntoView {
    let carousel = RwSignal::new(Carousel::new(QUOTES.len()));

    Effect::new(move |_| {
        let rotate = move || {
            carousel.try_update(Carousel::advance);
        };
        match set_interval_with_handle(rotate, QUOTE_ROTATION) {
            Ok(handle) => on_cleanup(move || handle.clear()),
            Err(err) => tracing::warn!("Could not start quote rotation: {:?}", err),
        }
    });

    let current = move || QUOTES.get(carousel.with(Carousel::index));

    view! {
        <section class="py-20 bg-white">
            <div class="container">
                <SectionHeading
                    title="What Our Customers Say"
                    subtitle="Hear from HR professionals who have transformed their hiring with HRGPTAI"
                />
                <div class="max-w-4xl mx-auto text-center min-h-64">
                    {move || current().map(|quote| view! {
                        <div class="fade-in">
                            <p class="text-xl md:text-2xl text-gray-700 italic mb-8">
                                {format!("\u{201c}{}\u{201d}", quote.quote)}
                            </p>
                            <div class="flex items-center justify-center gap-4">
                                <img src=quote.image alt=quote.name class="w-14 h-14 rounded-full object-cover"/>
                                <div class="text-left">
                                    <h4 class="font-bold text-gray-900">{quote.name}</h4>
                                    <p class="text-gray-600">{quote.position}</p>
                                </div>
                            </div>
                        </div>
                    })}
                </div>
                <div class="flex justify-center gap-2 mt-8">
                    {(0..QUOTES.len()).map(|index| view! {
                        <button
                            type="button"
                            class=move || if carousel.with(|c| c.index() == index) {
                                "w-3 h-3 rounded-full bg-primary"
                            } else {
                                "w-3 h-3 rounded-full bg-gray-300"
                            }
                            aria-label=format!("Go to testimonial {}", index + 1)
                            on:click=move |_| carousel.update(|c| c.go_to(index))
                        ></button>
                    }).collect_view()}
                </div>
                <div class="mt-12 text-center">
                    <a href="/testimonials" class="inline-flex items-center text-primary font-medium hover:underline">
                        <span>"View all success stories"</span>
                        <span class="ml-2">"→"</span>
                    </a>
                </div>
            </div>
        </section>
    }
}

#[component]
fn StatsSection() -> impl IntoView {
    view! {
        <section class="py-20 bg-gradient-to-br from-primary/5 to-secondary/5">
            <div class="container">
                <div class="grid grid-cols-2 md:grid-cols-4 gap-8">
                    {STATS.iter().map(|stat| view! {
                        <div class="text-center">
                            <div class="mb-4">
                                <h3 class="text-4xl md:text-5xl font-bold text-primary">
                                    <AnimatedCounter target=stat.number suffix=stat.suffix/>
                                </h3>
                                <p class="text-xl font-semibold mt-2">{stat.label}</p>
                            </div>
                            <p class="text-gray-600">{stat.description}</p>
                        </div>
                    }).collect_view()}
                </div>
                <div class="mt-12 flex justify-center">
                    <p class="text-sm font-medium px-6 py-3 bg-white rounded-full shadow">
                        "⭐⭐⭐⭐⭐ Rated 4.9/5 from over 1000+ reviews"
                    </p>
                </div>
            </div>
        </section>
    }
}

#[component]
fn PartnersSection() -> impl IntoView {
    view! {
        <section class="py-20 bg-gray-50">
            <div class="container">
                <SectionHeading
                    title="Seamless Integrations"
                    subtitle="HRGPTAI works with your existing HR and recruitment systems"
                />
                <div class="grid grid-cols-2 md:grid-cols-3 lg:grid-cols-6 gap-8 items-center">
                    {PARTNERS.iter().map(|partner| view! {
                        <div class="flex justify-center">
                            <img
                                src=partner.logo
                                alt=partner.name
                                class="max-h-12 opacity-80 hover:opacity-100 transition-opacity duration-300"
                            />
                        </div>
                    }).collect_view()}
                </div>
            </div>
        </section>
    }
}
