// web_app/components/forms.rs - Form inputs with inline validation messages
//
// Each input reads its error from the form's FieldErrors signal and shows
// it directly under the field.

use leptos::prelude::*;

use crate::web_app::model::{FieldErrors, FormField};

fn input_class(has_error: bool) -> &'static str {
    if has_error {
        "w-full px-4 py-2 border border-red-500 rounded-lg \
         focus:ring-2 focus:ring-red-500 focus:border-transparent outline-none"
    } else {
        "w-full px-4 py-2 border border-gray-300 rounded-lg \
         focus:ring-2 focus:ring-primary focus:border-transparent outline-none"
    }
}

/// Inline error line for one field
#[component]
pub fn FieldError(field: FormField, errors: RwSignal<FieldErrors>) -> impl IntoView {
    move || {
        errors.with(|e| e.message(field)).map(|message| view! {
            <p class="mt-1 text-sm text-red-500" id=format!("{}-error", field.as_str())>
                {message}
            </p>
        })
    }
}

/// Labelled text input
#[component]
pub fn FormInput(
    field: FormField,
    label: &'static str,
    value: RwSignal<String>,
    errors: RwSignal<FieldErrors>,
    /// Input type (text, email, password)
    #[prop(default = "text")]
    input_type: &'static str,
    #[prop(default = "")]
    placeholder: &'static str,
) -> impl IntoView {
    let has_error = move || errors.with(|e| e.get(field).is_some());

    view! {
        <div>
            <label for=field.as_str() class="block text-sm font-medium text-gray-700 mb-1">
                {label}
            </label>
            <input
                id=field.as_str()
                name=field.as_str()
                type=input_type
                placeholder=placeholder
                class=move || input_class(has_error())
                aria-invalid=move || has_error().to_string()
                prop:value=move || value.get()
                on:input=move |ev| {
                    value.set(event_target_value(&ev));
                }
            />
            <FieldError field=field errors=errors/>
        </div>
    }
}

/// Labelled multi-line input
#[component]
pub fn FormTextArea(
    field: FormField,
    label: &'static str,
    value: RwSignal<String>,
    errors: RwSignal<FieldErrors>,
    #[prop(default = 5)]
    rows: u32,
) -> impl IntoView {
    let has_error = move || errors.with(|e| e.get(field).is_some());

    view! {
        <div>
            <label for=field.as_str() class="block text-sm font-medium text-gray-700 mb-1">
                {label}
            </label>
            <textarea
                id=field.as_str()
                name=field.as_str()
                rows=rows
                class=move || input_class(has_error())
                aria-invalid=move || has_error().to_string()
                prop:value=move || value.get()
                on:input=move |ev| {
                    value.set(event_target_value(&ev));
                }
            ></textarea>
            <FieldError field=field errors=errors/>
        </div>
    }
}

/// Checkbox with a rich label
#[component]
pub fn CheckboxField(
    field: FormField,
    checked: RwSignal<bool>,
    errors: RwSignal<FieldErrors>,
    /// Label content
    children: Children,
) -> impl IntoView {
    view! {
        <div>
            <label class="flex items-center gap-3 cursor-pointer group">
                <input
                    id=field.as_str()
                    name=field.as_str()
                    type="checkbox"
                    class="rounded border-gray-300 text-primary focus:ring-primary h-4 w-4"
                    prop:checked=move || checked.get()
                    on:change=move |ev| {
                        checked.set(event_target_checked(&ev));
                    }
                />
                <span class="text-sm text-gray-700 group-hover:text-gray-900 transition-colors">
                    {children()}
                </span>
            </label>
            <FieldError field=field errors=errors/>
        </div>
    }
}
