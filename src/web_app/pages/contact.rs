// web_app/pages/contact.rs - Contact form and support details
//
// The form validates inline, then simulates a submission: after
// SUBMIT_DELAY the success panel replaces the form and the fields reset.

use leptos::prelude::*;
use leptos::web_sys::SubmitEvent;
use leptos_meta::{Meta, Title};

use crate::web_app::components::{
    use_notifications, Button, FormInput, FormTextArea, LinkButton, PageHero, Spinner,
};
use crate::web_app::content::SOCIAL_LINKS;
use crate::web_app::model::forms::SUBMIT_DELAY;
use crate::web_app::model::{ContactForm, FieldErrors, FormField, NotificationKind, Route};

pub const SUPPORT_EMAIL: &str = "support@hrgptai.com";
pub const SUPPORT_PHONE: &str = "+1-800-HR-GPTAI";

/// Contact page
#[component]
pub fn ContactPage() -> impl IntoView {
    let is_submitted = RwSignal::new(false);

    view! {
        <Title text=Route::Contact.title()/>
        <Meta name="description" content=Route::Contact.description()/>

        <PageHero
            title="Contact & Support"
            subtitle="Have questions or need assistance? We're here to help."
        />

        <section class="py-16 bg-white">
            <div class="container grid grid-cols-1 md:grid-cols-2 gap-12">
                <div class="slide-in-right">
                    <h2 class="text-2xl font-bold mb-6 text-gray-900">"Send Us a Message"</h2>
                    <Show
                        when=move || is_submitted.get()
                        fallback=move || view! { <ContactFormPanel is_submitted=is_submitted/> }
                    >
                        <div class="bg-green-50 border border-green-200 rounded-lg p-6 text-center fade-in">
                            <div class="text-3xl mb-4">"✅"</div>
                            <h3 class="text-xl font-semibold mb-2 text-gray-900">"Thank You!"</h3>
                            <p class="text-gray-600 mb-4">
                                "Your message has been received. We'll get back to you as soon as possible."
                            </p>
                            <Button on_click=Callback::new(move |_: ()| is_submitted.set(false))>
                                "Send Another Message"
                            </Button>
                        </div>
                    </Show>
                </div>

                <ContactDetails/>
            </div>
        </section>

        <section class="bg-gray-50 py-16">
            <div class="container">
                <div class="bg-gradient-to-r from-primary to-primary/80 rounded-xl p-8 md:p-12 text-white shadow-xl text-center">
                    <h2 class="text-2xl md:text-3xl font-bold mb-4">"Frequently Asked Questions"</h2>
                    <p class="text-white/80 mb-6 max-w-3xl mx-auto">
                        "Visit our comprehensive FAQ section to find quick answers to common questions."
                    </p>
                    <LinkButton href="/faq" variant="light">"Visit FAQ"</LinkButton>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactFormPanel(is_submitted: RwSignal<bool>) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let subject = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::default());
    let is_submitting = RwSignal::new(false);
    let notifications = use_notifications();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if is_submitting.get_untracked() {
            return;
        }

        let form = ContactForm {
            name: name.get_untracked(),
            email: email.get_untracked(),
            subject: subject.get_untracked(),
            message: message.get_untracked(),
        };
        if let Err(field_errors) = form.validate() {
            tracing::debug!("Contact form rejected: {} invalid field(s)", field_errors.len());
            errors.set(field_errors);
            return;
        }

        errors.set(FieldErrors::default());
        is_submitting.set(true);
        set_timeout(
            move || {
                tracing::info!("Contact form submitted: {} <{}>", form.name, form.email);
                for field in [name, email, subject, message] {
                    field.try_set(String::new());
                }
                is_submitting.try_set(false);
                // try_set hands the value back if the page is already gone
                if is_submitted.try_set(true).is_none() {
                    notifications.notify("Message sent successfully!", NotificationKind::Success);
                }
            },
            SUBMIT_DELAY,
        );
    };

    view! {
        <form class="space-y-6" novalidate=true on:submit=on_submit>
            <FormInput field=FormField::Name label="Name" value=name errors=errors placeholder="Your name"/>
            <FormInput
                field=FormField::Email
                label="Email"
                value=email
                errors=errors
                input_type="email"
                placeholder="Your email address"
            />
            <FormInput
                field=FormField::Subject
                label="Subject"
                value=subject
                errors=errors
                placeholder="Subject of your inquiry"
            />
            <FormTextArea field=FormField::Message label="Message" value=message errors=errors/>
            <Button button_type="submit" disabled=is_submitting class="w-full flex justify-center items-center">
                {move || if is_submitting.get() {
                    view! { <Spinner message="Sending..."/> }.into_any()
                } else {
                    "Send Message".into_any()
                }}
            </Button>
        </form>
    }
}

#[component]
fn ContactDetails() -> impl IntoView {
    view! {
        <div>
            <h2 class="text-2xl font-bold mb-6 text-gray-900">"Get In Touch"</h2>
            <div class="bg-gray-50 rounded-lg p-6 mb-8 border border-gray-100">
                <div class="mb-6">
                    <h3 class="text-lg font-semibold mb-2 text-gray-900">"Email Us"</h3>
                    <a href=format!("mailto:{}", SUPPORT_EMAIL) class="text-primary hover:underline">
                        {SUPPORT_EMAIL}
                    </a>
                </div>
                <div class="mb-6">
                    <h3 class="text-lg font-semibold mb-2 text-gray-900">"Call Us"</h3>
                    <a href=format!("tel:{}", SUPPORT_PHONE) class="text-gray-600 hover:underline">
                        {SUPPORT_PHONE}
                    </a>
                </div>
                <div>
                    <h3 class="text-lg font-semibold mb-2 text-gray-900">"Office Hours"</h3>
                    <p class="text-gray-600 mb-1">"Monday - Friday: 9AM - 6PM EST"</p>
                    <p class="text-gray-600">"Saturday - Sunday: Closed"</p>
                </div>
            </div>

            <h3 class="text-xl font-semibold mb-4 text-gray-900">"Follow Us"</h3>
            <div class="flex flex-wrap gap-4">
                {SOCIAL_LINKS.iter().map(|(label, href)| view! {
                    <a
                        href=*href
                        target="_blank"
                        rel="noopener noreferrer"
                        class="bg-primary text-white px-4 py-3 rounded-full hover:bg-primary/90 transition-colors"
                    >
                        {*label}
                    </a>
                }).collect_view()}
            </div>
        </div>
    }
}
