// web_app/pages/login.rs - Log-in card
//
// No account backend exists: a valid form waits SUBMIT_DELAY and then
// shows a confirmation in place of the form.

use leptos::prelude::*;
use leptos::web_sys::SubmitEvent;
use leptos_meta::{Meta, Title};

use crate::web_app::components::{Button, FormInput, Spinner};
use crate::web_app::model::forms::SUBMIT_DELAY;
use crate::web_app::model::{FieldErrors, FormField, LoginForm, Route};

/// Login page
#[component]
pub fn LoginPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let remember_me = RwSignal::new(false);
    let errors = RwSignal::new(FieldErrors::default());
    let is_submitting = RwSignal::new(false);
    let signed_in_as = RwSignal::new(None::<String>);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if is_submitting.get_untracked() {
            return;
        }

        let form = LoginForm {
            email: email.get_untracked(),
            password: password.get_untracked(),
            remember_me: remember_me.get_untracked(),
        };
        if let Err(field_errors) = form.validate() {
            errors.set(field_errors);
            return;
        }

        errors.set(FieldErrors::default());
        is_submitting.set(true);
        set_timeout(
            move || {
                tracing::info!("Login submitted for {} (remember: {})", form.email, form.remember_me);
                is_submitting.try_set(false);
                password.try_set(String::new());
                signed_in_as.try_set(Some(form.email));
            },
            SUBMIT_DELAY,
        );
    };

    view! {
        <Title text=Route::Login.title()/>
        <Meta name="description" content=Route::Login.description()/>

        <div class="bg-white rounded-2xl shadow-xl p-8 border border-gray-100">
            <div class="text-center mb-8">
                <h1 class="text-3xl font-bold text-gray-900 mb-2">"Welcome Back"</h1>
                <p class="text-gray-600">"Log in to your HRGPTAI account"</p>
            </div>

            {move || signed_in_as.get().map(|address| view! {
                <div class="bg-green-50 border border-green-200 rounded-lg p-4 mb-6 text-center text-green-700 fade-in">
                    {format!("Signed in as {}", address)}
                </div>
            })}

            <form class="space-y-6" novalidate=true on:submit=on_submit>
                <FormInput
                    field=FormField::Email
                    label="Email"
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
                    placeholder="Your password"
                />
                <div class="flex items-center justify-between">
                    <label class="flex items-center gap-2 text-sm text-gray-700 cursor-pointer">
                        <input
                            type="checkbox"
                            name="remember_me"
                            class="rounded border-gray-300 text-primary focus:ring-primary h-4 w-4"
                            prop:checked=move || remember_me.get()
                            on:change=move |ev| remember_me.set(event_target_checked(&ev))
                        />
                        "Remember me"
                    </label>
                    <a href="/contact" class="text-sm text-primary hover:underline">"Forgot password?"</a>
                </div>
                <Button button_type="submit" disabled=is_submitting class="w-full flex justify-center items-center">
                    {move || if is_submitting.get() {
                        view! { <Spinner message="Logging in..."/> }.into_any()
                    } else {
                        "Log In".into_any()
                    }}
                </Button>
            </form>

            <p class="mt-8 text-center text-gray-600">
                "Don't have an account? "
                <a href=Route::Signup.path() class="text-primary font-medium hover:underline">"Sign up"</a>
            </p>
        </div>
    }
}
