// web_app/pages/privacy.rs - Privacy policy

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::web_app::components::PageHero;
use crate::web_app::content::privacy::{POLICY_LAST_UPDATED, PRIVACY_POLICY};
use crate::web_app::model::{PolicySection, Route};

/// Privacy policy page
#[component]
pub fn PrivacyPage() -> impl IntoView {
    view! {
        <Title text=Route::Privacy.title()/>
        <Meta name="description" content=Route::Privacy.description()/>

        <PageHero
            title="Privacy Policy"
            subtitle="How we collect, use, and protect your information."
        />

        <section class="py-16 bg-white">
            <div class="container max-w-4xl mx-auto">
                <p class="text-gray-500 mb-8">{format!("Last updated: {}", POLICY_LAST_UPDATED)}</p>
                {PRIVACY_POLICY.iter().map(|section| view! { <PolicyBlock section=*section/> }).collect_view()}
            </div>
        </section>
    }
}

#[component]
fn PolicyBlock(section: PolicySection) -> impl IntoView {
    view! {
        <div class="mb-10">
            <h2 class="text-2xl font-bold mb-4 text-gray-900">{section.heading}</h2>
            {section.paragraphs.iter().map(|text| view! {
                <p class="text-gray-600 mb-4">{*text}</p>
            }).collect_view()}
            {section.subsections.iter().map(|(title, text)| view! {
                <h3 class="text-xl font-semibold mb-2 mt-6 text-gray-900">{*title}</h3>
                <p class="text-gray-600 mb-4">{*text}</p>
            }).collect_view()}
            {(!section.bullets.is_empty()).then(|| view! {
                <ul class="list-disc pl-6 mb-4 space-y-2 text-gray-600">
                    {section.bullets.iter().map(|item| view! { <li>{*item}</li> }).collect_view()}
                </ul>
            })}
            {section.closing.iter().map(|text| view! {
                <p class="text-gray-600 mb-4">{*text}</p>
            }).collect_view()}
        </div>
    }
}
