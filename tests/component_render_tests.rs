// Component render tests for coverage
// These tests build the interactive components inside a reactive owner and
// check the signal wiring they rely on. Full SSR rendering of routed pages
// needs the router and meta contexts and is left to the server.

use hrgptai_site::web_app::components::counter::*;
use hrgptai_site::web_app::components::forms::*;
use hrgptai_site::web_app::components::layout::{copyright_line, SEARCH_PENDING_MESSAGE};
use hrgptai_site::web_app::components::notifications::*;
use hrgptai_site::web_app::components::search::*;
use hrgptai_site::web_app::content::{FAQ_CATEGORIES, SEARCH_SUGGESTIONS};
use hrgptai_site::web_app::model::{ContactForm, FieldErrors, FormField, ALL_CATEGORY};
use leptos::prelude::*;

fn with_runtime<F>(f: F)
where
    F: FnOnce(),
{
    let owner = Owner::new();
    owner.with(f);
}

// ===== Search =====

#[test]
fn test_submitted_query() {
    assert_eq!(submitted_query(""), None);
    assert_eq!(submitted_query("   "), None);
    assert_eq!(submitted_query(" pricing "), Some(" pricing ".to_string()));
}

#[test]
fn test_search_components_instantiation() {
    with_runtime(|| {
        let query = RwSignal::new(String::new());
        let active = RwSignal::new(ALL_CATEGORY.to_string());

        let _ = SearchInput(SearchInputProps {
            query,
            placeholder: "Search questions...",
        });
        let _ = CategoryTabs(CategoryTabsProps {
            categories: FAQ_CATEGORIES,
            active,
        });
        let _ = NoResults(NoResultsProps {
            message: "No questions match your search criteria.",
            on_clear: Some(Callback::new(move |_: ()| {
                query.set(String::new());
                active.set(ALL_CATEGORY.to_string());
            })),
        });
    });
}

#[test]
fn test_header_search_instantiation() {
    with_runtime(|| {
        let searched = RwSignal::new(Vec::<String>::new());
        let _ = HeaderSearch(HeaderSearchProps {
            suggestions: SEARCH_SUGGESTIONS,
            on_search: Callback::new(move |q: String| searched.update(|s| s.push(q))),
        });
        assert!(searched.get_untracked().is_empty());
    });
}

// ===== Forms =====

#[test]
fn test_form_inputs_instantiation() {
    with_runtime(|| {
        let name = RwSignal::new(String::new());
        let message = RwSignal::new(String::new());
        let terms = RwSignal::new(false);
        let errors = RwSignal::new(FieldErrors::default());

        let _ = FormInput(FormInputProps {
            field: FormField::Name,
            label: "Name",
            value: name,
            errors,
            input_type: "text",
            placeholder: "Your name",
        });
        let _ = FormTextArea(FormTextAreaProps {
            field: FormField::Message,
            label: "Message",
            value: message,
            errors,
            rows: 5,
        });
        let _ = CheckboxField(CheckboxFieldProps {
            field: FormField::Terms,
            checked: terms,
            errors,
            children: Box::new(move || view! { "I agree to the terms" }.into_any()),
        });
        let _ = FieldError(FieldErrorProps {
            field: FormField::Name,
            errors,
        });
    });
}

#[test]
fn test_failed_validation_populates_error_signal() {
    with_runtime(|| {
        let errors = RwSignal::new(FieldErrors::default());
        let form = ContactForm {
            name: String::new(),
            email: "priya@example.com".to_string(),
            subject: "Demo".to_string(),
            message: "Please schedule a demo for us.".to_string(),
        };

        if let Err(field_errors) = form.validate() {
            errors.set(field_errors);
        }

        assert_eq!(
            errors.with_untracked(|e| e.message(FormField::Name)).as_deref(),
            Some("Name is required")
        );
        assert!(errors.with_untracked(|e| e.get(FormField::Email).is_none()));
    });
}

// ===== Notifications =====

#[test]
fn test_notification_center_context() {
    with_runtime(|| {
        let provided = provide_notification_center();
        let found = use_notifications();
        assert!(provided.entries().is_empty());
        assert!(found.entries().is_empty());

        let _ = NotificationStack();
    });
}

#[test]
fn test_dismiss_unknown_notification_is_noop() {
    with_runtime(|| {
        let center = NotificationCenter::new();
        center.dismiss(hrgptai_site::web_app::model::NotificationId(42));
        assert!(center.entries().is_empty());
    });
}

#[test]
fn test_owner_cleanup_releases_notification_timers() {
    let owner = Owner::new();
    let center = owner.with(provide_notification_center);
    assert_eq!(center.cancel_timers(), 0);

    // Cleanup runs the registered cancellation; the queue is gone afterwards
    owner.cleanup();
    assert_eq!(center.cancel_timers(), 0);
    assert_eq!(center.notify("late", hrgptai_site::web_app::model::NotificationKind::Info), None);
}

// ===== Counter & layout helpers =====

#[test]
fn test_animated_counter_instantiation() {
    with_runtime(|| {
        let _ = AnimatedCounter(AnimatedCounterProps {
            target: 50_000,
            duration_ms: 2000.0,
            suffix: "+",
        });
    });
}

#[test]
fn test_layout_copy() {
    assert_eq!(SEARCH_PENDING_MESSAGE, "Search functionality coming soon!");
    assert_eq!(copyright_line(2024), "© 2024 HRGPTAI. All rights reserved.");
}
