// web_app/components/common.rs - Reusable UI components
//
// Small, stateless building blocks shared by every page: buttons, badges,
// hero banners, section headings and call-to-action panels.

use leptos::prelude::*;

use crate::web_app::model::Metric;

/// Inline spinner
///
/// Shown inside buttons while a simulated submission is pending.
#[component]
pub fn Spinner(
    /// Text rendered next to the spinner
    #[prop(default = "Loading...")]
    message: &'static str,
) -> impl IntoView {
    view! {
        <span class="inline-flex items-center gap-2">
            <span class="inline-block animate-spin rounded-full h-4 w-4 border-2 border-white/40 border-t-white"></span>
            <span>{message}</span>
        </span>
    }
}

/// Primary button component
#[component]
pub fn Button(
    /// Button label
    children: Children,
    #[prop(optional)]
    on_click: Option<Callback<()>>,
    #[prop(into, default = false.into())]
    disabled: Signal<bool>,
    /// Button type (submit, button, reset)
    #[prop(default = "button")]
    button_type: &'static str,
    /// Additional CSS classes
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let base_class = "px-6 py-3 bg-gradient-to-r from-primary to-secondary text-white rounded-lg \
                      hover:shadow-lg transition-all disabled:opacity-60 disabled:cursor-not-allowed \
                      font-medium active:scale-95";

    view! {
        <button
            type=button_type
            disabled=move || disabled.get()
            class=format!("{} {}", base_class, class)
            on:click=move |_| {
                if let Some(handler) = on_click {
                    handler.run(());
                }
            }
        >
            {children()}
        </button>
    }
}

/// Secondary button component
///
/// Text-style button for low-emphasis actions such as "Clear filters".
#[component]
pub fn SecondaryButton(
    children: Children,
    #[prop(optional)]
    on_click: Option<Callback<()>>,
    #[prop(default = false)]
    disabled: bool,
) -> impl IntoView {
    let class = "px-4 py-2 text-primary rounded-lg hover:underline \
                 transition-colors disabled:opacity-50 font-medium";

    view! {
        <button
            type="button"
            disabled=disabled
            class=class
            on:click=move |_| {
                if let Some(handler) = on_click {
                    handler.run(());
                }
            }
        >
            {children()}
        </button>
    }
}

/// Styled anchor that looks like a button
///
/// Internal hrefs are picked up by the router for client-side navigation.
#[component]
pub fn LinkButton(
    href: &'static str,
    children: Children,
    /// "primary", "light", "outline" or "muted"
    #[prop(default = "primary")]
    variant: &'static str,
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <a href=href class=format!("{} {}", link_button_class(variant), class)>
            {children()}
        </a>
    }
}

pub fn link_button_class(variant: &str) -> &'static str {
    match variant {
        "light" => "inline-block px-6 py-3 rounded-lg font-medium bg-white text-primary hover:bg-gray-100 transition-colors",
        "outline" => "inline-block px-6 py-3 rounded-lg font-medium border-2 border-white text-white hover:bg-white/10 transition-colors",
        "muted" => "inline-block px-6 py-3 rounded-lg font-medium bg-gray-100 text-gray-800 hover:bg-gray-200 transition-colors",
        _ => "inline-block px-6 py-3 rounded-lg font-medium bg-gradient-to-r from-primary to-secondary text-white hover:shadow-lg transition-all",
    }
}

/// Badge component
///
/// Small pill used for categories, "MOST POPULAR" and similar labels.
#[component]
pub fn Badge(
    children: Children,
    /// Badge color variant
    #[prop(default = "primary")]
    variant: &'static str,
) -> impl IntoView {
    view! {
        <span class=badge_class(variant)>
            {children()}
        </span>
    }
}

pub fn badge_class(variant: &str) -> &'static str {
    match variant {
        "green" => "px-3 py-1 text-xs font-semibold rounded-full bg-green-100 text-green-700",
        "popular" => "px-4 py-1 text-xs font-bold rounded-full bg-gradient-to-r from-primary to-secondary text-white",
        "gray" => "px-3 py-1 text-xs font-semibold rounded-full bg-gray-100 text-gray-700",
        _ => "px-3 py-1 text-xs font-semibold rounded-full bg-primary/10 text-primary",
    }
}

/// Gradient banner at the top of each content page
#[component]
pub fn PageHero(
    title: &'static str,
    subtitle: &'static str,
    /// Small uppercase label above the title
    #[prop(optional)]
    eyebrow: Option<&'static str>,
) -> impl IntoView {
    view! {
        <section class="bg-gradient-to-r from-primary/10 to-secondary/10 py-16">
            <div class="container text-center fade-in">
                {eyebrow.map(|label| view! {
                    <span class="inline-block px-4 py-1 rounded-full bg-primary/10 text-primary font-medium text-sm mb-4">
                        {label}
                    </span>
                })}
                <h1 class="text-4xl md:text-5xl font-bold mb-6 text-gray-900">{title}</h1>
                <p class="text-xl text-gray-600 mb-8 max-w-3xl mx-auto">{subtitle}</p>
            </div>
        </section>
    }
}

/// Centered heading block for a page section
#[component]
pub fn SectionHeading(
    title: &'static str,
    #[prop(optional)]
    subtitle: Option<&'static str>,
    #[prop(optional)]
    eyebrow: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="text-center mb-12">
            {eyebrow.map(|label| view! {
                <span class="inline-block px-4 py-1 rounded-full bg-primary/10 text-primary font-medium text-sm mb-4">
                    {label}
                </span>
            })}
            <h2 class="text-3xl md:text-4xl font-bold mb-4 text-gray-900">{title}</h2>
            {subtitle.map(|text| view! {
                <p class="text-xl text-gray-600 max-w-3xl mx-auto">{text}</p>
            })}
        </div>
    }
}

/// Full-width call-to-action panel
#[component]
pub fn CtaBanner(
    title: &'static str,
    subtitle: &'static str,
    /// Action links
    children: Children,
) -> impl IntoView {
    view! {
        <section class="py-16 bg-gradient-to-r from-primary to-secondary text-white">
            <div class="container text-center max-w-3xl mx-auto">
                <h2 class="text-3xl md:text-4xl font-bold mb-6">{title}</h2>
                <p class="text-xl mb-8 opacity-90">{subtitle}</p>
                <div class="flex flex-col sm:flex-row justify-center gap-4">
                    {children()}
                </div>
            </div>
        </section>
    }
}

/// Grid of label/value outcome figures
#[component]
pub fn MetricGrid(metrics: &'static [Metric]) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 sm:grid-cols-3 gap-4">
            {metrics.iter().map(|metric| view! {
                <div class="bg-gray-50 rounded-lg p-4 text-center">
                    <p class="text-lg font-bold text-primary">{metric.value}</p>
                    <p class="text-sm text-gray-600">{metric.label}</p>
                </div>
            }).collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_variants() {
        assert!(badge_class("green").contains("bg-green-100"));
        assert!(badge_class("popular").contains("from-primary"));
        assert!(badge_class("gray").contains("bg-gray-100"));
        // Unknown variants fall back to the primary style
        assert_eq!(badge_class("nope"), badge_class("primary"));
    }

    #[test]
    fn test_link_button_variants() {
        assert!(link_button_class("light").contains("bg-white"));
        assert!(link_button_class("outline").contains("border-white"));
        assert!(link_button_class("muted").contains("bg-gray-100"));
        assert_eq!(link_button_class("other"), link_button_class("primary"));
    }
}
