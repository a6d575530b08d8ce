// web_app/pages/signup.rs - Free-trial sign-up card

use leptos::prelude::*;
use leptos::web_sys::SubmitEvent;
use leptos_meta::{Meta, Title};

use crate::web_app::components::{Button, CheckboxField, FormInput, LinkButton, Spinner};
use crate::web_app::model::forms::SUBMIT_DELAY;
use crate::web_app::model::{FieldErrors, FormField, Route, SignupForm};

/// Signup page
///
/// A valid form is "submitted" after SUBMIT_DELAY and replaced by a welcome
/// panel; no account is created.
#[component]
pub fn SignupPage() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let accept_terms = RwSignal::new(false);
    let errors = RwSignal::new(FieldErrors::default());
    let is_submitting = RwSignal::new(false);
    let welcome_name = RwSignal::new(None::<String>);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if is_submitting.get_untracked() {
            return;
        }

        let form = SignupForm {
            name: name.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
            confirm_password: confirm_password.get_untracked(),
            accept_terms: accept_terms.get_untracked(),
        };
        if let Err(field_errors) = form.validate() {
            tracing::debug!("Signup form rejected: {} invalid field(s)", field_errors.len());
            errors.set(field_errors);
            return;
        }

        errors.set(FieldErrors::default());
        is_submitting.set(true);
        set_timeout(
            move || {
                tracing::info!("Signup submitted: {} <{}>", form.name, form.email);
                is_submitting.try_set(false);
                welcome_name.try_set(Some(form.name.trim().to_string()));
            },
            SUBMIT_DELAY,
        );
    };

    view! {
        <Title text=Route::Signup.title()/>
        <Meta name="description" content=Route::Signup.description()/>

        <div class="bg-white rounded-2xl shadow-xl p-8 border border-gray-100">
            <Show
                when=move || welcome_name.with(Option::is_some)
                fallback=move || view! {
                    <div class="text-center mb-8">
                        <h1 class="text-3xl font-bold text-gray-900 mb-2">"Create Your Account"</h1>
                        <p class="text-gray-600">"Start your free trial. No credit card required."</p>
                    </div>

                    <form class="space-y-5" novalidate=true on:submit=on_submit>
                        <FormInput field=FormField::Name label="Full Name" value=name errors=errors placeholder="Your full name"/>
                        <FormInput
                            field=FormField::Email
                            label="Work Email"
                            value=email
                            errors=errors
                            input_type="email"
                            placeholder="you@company.com"
                        />
                        <FormInput
                            field=FormField::Password
                            label="Password"
                            value=password
                            errors=errors
                            input_type="password"
                            placeholder="At least 8 characters"
                        />
                        <FormInput
                            field=FormField::ConfirmPassword
                            label="Confirm Password"
                            value=confirm_password
                            errors=errors
                            input_type="password"
                            placeholder="Repeat your password"
                        />
                        <CheckboxField field=FormField::Terms checked=accept_terms errors=errors>
                            "I agree to the "
                            <a href="/privacy" class="text-primary hover:underline">"Terms of Service"</a>
                            " and "
                            <a href="/privacy" class="text-primary hover:underline">"Privacy Policy"</a>
                        </CheckboxField>
                        <Button button_type="submit" disabled=is_submitting class="w-full flex justify-center items-center">
                            {move || if is_submitting.get() {
                                view! { <Spinner message="Creating account..."/> }.into_any()
                            } else {
                                "Sign Up Free".into_any()
                            }}
                        </Button>
                    </form>

                    <p class="mt-8 text-center text-gray-600">
                        "Already have an account? "
                        <a href=Route::Login.path() class="text-primary font-medium hover:underline">"Log in"</a>
                    </p>
                }
            >
                <div class="text-center fade-in">
                    <div class="text-4xl mb-4">"🎉"</div>
                    <h1 class="text-2xl font-bold text-gray-900 mb-2">
                        {move || format!("Welcome, {}!", welcome_name.get().unwrap_or_default())}
                    </h1>
                    <p class="text-gray-600 mb-6">
                        "Your free trial request has been received. Our team will be in touch shortly."
                    </p>
                    <LinkButton href="/features">"Explore Features"</LinkButton>
                </div>
            </Show>
        </div>
    }
}
