// web_app/components/search.rs - Search and filter components
//
// Free-text inputs, category tab bars and the empty-result panel used by
// the filterable list pages, plus the collapsible header search box.

use leptos::prelude::*;
use leptos::web_sys::KeyboardEvent;

use crate::web_app::components::common::SecondaryButton;
use crate::web_app::model::{filter::filter_suggestions, Category};

/// Query that a search form should submit, or `None` when it is blank.
/// The query is passed on untrimmed.
pub fn submitted_query(query: &str) -> Option<String> {
    if query.trim().is_empty() {
        None
    } else {
        Some(query.to_string())
    }
}

/// Search input bound to a page-local query signal
///
/// Updates on every keystroke; filtering has no debounce.
#[component]
pub fn SearchInput(
    query: RwSignal<String>,
    #[prop(default = "Search...")]
    placeholder: &'static str,
) -> impl IntoView {
    view! {
        <div class="relative max-w-xl mx-auto">
            <input
                type="text"
                class="w-full px-5 py-3 pl-12 rounded-full border border-gray-300 \
                       focus:outline-none focus:ring-2 focus:ring-primary shadow-sm"
                placeholder=placeholder
                prop:value=move || query.get()
                on:input=move |ev| query.set(event_target_value(&ev))
            />
            <span class="absolute left-4 top-1/2 -translate-y-1/2 text-gray-400">"🔍"</span>
        </div>
    }
}

/// Category tab bar
///
/// Exactly one tab is active at a time; the active id lives in the page's
/// signal so clicking a tab re-runs the page's filter memo.
#[component]
pub fn CategoryTabs(
    categories: &'static [Category],
    active: RwSignal<String>,
) -> impl IntoView {
    view! {
        <div class="flex flex-wrap justify-center gap-2">
            {categories.iter().map(|category| {
                let id = category.id;
                let is_active = move || active.with(|current| current == id);
                view! {
                    <button
                        type="button"
                        class=move || if is_active() {
                            "px-4 py-2 rounded-full text-sm font-medium transition-colors bg-primary text-white"
                        } else {
                            "px-4 py-2 rounded-full text-sm font-medium transition-colors bg-gray-100 text-gray-700 hover:bg-gray-200"
                        }
                        aria-pressed=move || is_active().to_string()
                        on:click=move |_| active.set(id.to_string())
                    >
                        {category.name}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}

/// Empty-result panel
#[component]
pub fn NoResults(
    message: &'static str,
    /// Resets the page filter; omitted when the page offers no reset
    #[prop(optional)]
    on_clear: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <div class="text-center py-12">
            <p class="text-xl text-gray-600">{message}</p>
            {on_clear.map(|clear| view! {
                <div class="mt-4">
                    <SecondaryButton on_click=clear>"Clear filters"</SecondaryButton>
                </div>
            })}
        </div>
    }
}

/// Collapsible search box in the site header
///
/// Typing narrows the suggestion list; submitting a non-blank query or
/// picking a suggestion calls `on_search` and collapses the box.
#[component]
pub fn HeaderSearch(
    suggestions: &'static [&'static str],
    on_search: Callback<String>,
) -> impl IntoView {
    let is_open = RwSignal::new(false);
    let query = RwSignal::new(String::new());

    let visible_suggestions = Memo::new(move |_| {
        query.with(|q| filter_suggestions(suggestions, q))
    });

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if let Some(q) = submitted_query(&query.get()) {
            tracing::debug!("Submitting header search: {}", q);
            on_search.run(q);
            is_open.set(false);
        }
    };

    let on_keydown = move |ev: KeyboardEvent| {
        if ev.key() == "Escape" {
            is_open.set(false);
        }
    };

    view! {
        <div class="relative" on:keydown=on_keydown>
            <form on:submit=on_submit class="relative">
                <input
                    type="text"
                    class=move || if is_open.get() {
                        "w-72 bg-gray-100 rounded-full py-2 pl-10 pr-4 focus:outline-none focus:ring-2 focus:ring-primary transition-all"
                    } else {
                        "w-10 opacity-0 pointer-events-none rounded-full py-2 pl-10 transition-all"
                    }
                    placeholder=move || if is_open.get() { "Search..." } else { "" }
                    prop:value=move || query.get()
                    on:input=move |ev| query.set(event_target_value(&ev))
                    on:focus=move |_| is_open.set(true)
                />
                <button
                    type="button"
                    aria-label="Toggle search"
                    class="absolute left-3 top-1/2 -translate-y-1/2 z-10 text-gray-500 hover:text-primary transition-colors"
                    on:click=move |_| is_open.update(|open| *open = !*open)
                >
                    "🔍"
                </button>
            </form>

            <Show when=move || is_open.get() && !visible_suggestions.with(Vec::is_empty)>
                <ul class="absolute top-full left-0 right-0 mt-2 py-2 bg-white rounded-lg shadow-lg overflow-hidden z-50">
                    <For
                        each=move || visible_suggestions.get()
                        key=|suggestion| *suggestion
                        children=move |suggestion: &'static str| {
                            view! {
                                <li>
                                    <button
                                        type="button"
                                        class="w-full px-4 py-2 text-left hover:bg-gray-100 transition-colors text-gray-800"
                                        on:click=move |_| {
                                            query.set(suggestion.to_string());
                                            on_search.run(suggestion.to_string());
                                            is_open.set(false);
                                        }
                                    >
                                        {suggestion}
                                    </button>
                                </li>
                            }
                        }
                    />
                </ul>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_query_is_not_submitted() {
        assert_eq!(submitted_query(""), None);
        assert_eq!(submitted_query("   "), None);
    }

    #[test]
    fn test_query_is_submitted_untrimmed() {
        assert_eq!(submitted_query(" pricing "), Some(" pricing ".to_string()));
        assert_eq!(submitted_query("FAQ"), Some("FAQ".to_string()));
    }
}
