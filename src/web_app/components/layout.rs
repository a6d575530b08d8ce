// web_app/components/layout.rs - Page chrome
//
// MainLayout wraps the public pages with the header, navigation, header
// search, mobile menu, footer and notification stack. AuthLayout wraps the
// login and signup cards.

use chrono::Datelike;
use leptos::prelude::*;
use leptos::web_sys::KeyboardEvent;
use leptos_router::components::Outlet;
use leptos_router::hooks::use_location;

use crate::web_app::components::notifications::{provide_notification_center, NotificationStack};
use crate::web_app::components::search::HeaderSearch;
use crate::web_app::content::{FOOTER_TAGLINE, SEARCH_SUGGESTIONS, SOCIAL_LINKS};
use crate::web_app::model::{NotificationKind, Route};

pub const SEARCH_PENDING_MESSAGE: &str = "Search functionality coming soon!";

/// Footer copyright notice for `year`
pub fn copyright_line(year: i32) -> String {
    format!("© {} HRGPTAI. All rights reserved.", year)
}

fn current_year() -> i32 {
    chrono::Utc::now().year()
}

pub fn nav_link_class(active: bool) -> &'static str {
    if active {
        "px-3 py-2 rounded-md text-sm font-medium text-primary"
    } else {
        "px-3 py-2 rounded-md text-sm font-medium text-gray-700 hover:text-primary transition-colors"
    }
}

/// Gradient logo linking home
#[component]
fn Logo() -> impl IntoView {
    view! {
        <a href="/" class="text-2xl font-bold text-primary flex items-center gap-2">
            <span class="w-10 h-10 flex items-center justify-center bg-gradient-to-br from-primary to-secondary rounded-lg shadow-md text-white">
                "H"
            </span>
            <span class="font-extrabold tracking-tight">"HRGPTAI"</span>
        </a>
    }
}

/// MainLayout
///
/// Owns the notification center for the public pages and closes the
/// mobile menu whenever the path changes.
#[component]
pub fn MainLayout() -> impl IntoView {
    let notifications = provide_notification_center();
    let pathname = use_location().pathname;
    let menu_open = RwSignal::new(false);

    Effect::new(move |_| {
        pathname.track();
        menu_open.set(false);
    });

    let on_search = Callback::new(move |term: String| {
        tracing::info!("Header search: {}", term);
        notifications.notify(SEARCH_PENDING_MESSAGE, NotificationKind::Info);
    });

    view! {
        <div class="min-h-screen flex flex-col bg-white">
            <header class="bg-white/90 shadow-sm sticky top-0 z-40 backdrop-blur-sm border-b border-gray-100">
                <div class="container flex items-center justify-between py-4">
                    <Logo/>

                    // Desktop navigation
                    <nav class="hidden md:flex items-center gap-1" aria-label="Main">
                        {Route::HEADER_NAV.into_iter().map(|route| view! {
                            <a
                                href=route.path()
                                class=move || nav_link_class(pathname.with(|p| route.is_active(p)))
                            >
                                {route.nav_label()}
                            </a>
                        }).collect_view()}
                    </nav>

                    <div class="hidden md:flex items-center gap-4">
                        <HeaderSearch suggestions=SEARCH_SUGGESTIONS on_search=on_search/>
                        <a
                            href=Route::Signup.path()
                            class="px-4 py-2 rounded-lg bg-gradient-to-r from-primary to-secondary text-white font-medium hover:shadow-lg transition-all"
                        >
                            {Route::Signup.nav_label()}
                        </a>
                    </div>

                    // Hamburger
                    <button
                        type="button"
                        class="md:hidden p-2 rounded-md text-gray-700 hover:bg-gray-100"
                        aria-label="Open menu"
                        aria-expanded=move || menu_open.get().to_string()
                        on:click=move |_| menu_open.set(true)
                    >
                        "☰"
                    </button>
                </div>
            </header>

            <MobileMenu open=menu_open pathname=pathname on_search=on_search/>

            <main class="flex-grow">
                <Outlet/>
            </main>

            <Footer/>
            <NotificationStack/>
        </div>
    }
}

/// Slide-out navigation for small screens
///
/// Closes on Escape, on a backdrop click and on the close button.
#[component]
pub fn MobileMenu(
    open: RwSignal<bool>,
    pathname: Memo<String>,
    on_search: Callback<String>,
) -> impl IntoView {
    let handle_keydown = move |ev: KeyboardEvent| {
        if ev.key() == "Escape" {
            open.set(false);
        }
    };

    view! {
        <Show when=move || open.get()>
            <div class="fixed inset-0 z-50 md:hidden" on:keydown=handle_keydown>
                // Backdrop
                <div class="absolute inset-0 bg-black/50" on:click=move |_| open.set(false)></div>

                <div class="absolute right-0 top-0 h-full w-64 bg-white shadow-lg overflow-y-auto slide-in-right">
                    <div class="flex justify-between items-center p-4 border-b border-gray-200">
                        <span class="font-bold text-lg">"Menu"</span>
                        <button
                            type="button"
                            class="p-2 rounded-full text-gray-500 hover:bg-gray-100"
                            aria-label="Close menu"
                            on:click=move |_| open.set(false)
                        >
                            "×"
                        </button>
                    </div>
                    <nav class="p-4" aria-label="Mobile">
                        <ul class="space-y-4">
                            {Route::MOBILE_NAV.into_iter().map(|route| view! {
                                <li>
                                    <a
                                        href=route.path()
                                        class=move || if pathname.with(|p| route.is_active(p)) {
                                            "block p-2 rounded-lg hover:bg-gray-100 transition-colors text-primary font-medium"
                                        } else {
                                            "block p-2 rounded-lg hover:bg-gray-100 transition-colors"
                                        }
                                        on:click=move |_| open.set(false)
                                    >
                                        {route.nav_label()}
                                    </a>
                                </li>
                            }).collect_view()}
                            <li class="pt-4 border-t border-gray-200 mt-4 space-y-2">
                                <a
                                    href=Route::Login.path()
                                    class="block w-full p-3 text-center rounded-lg border border-primary text-primary font-medium"
                                    on:click=move |_| open.set(false)
                                >
                                    {Route::Login.nav_label()}
                                </a>
                                <a
                                    href=Route::Signup.path()
                                    class="block w-full p-3 text-center rounded-lg bg-gradient-to-r from-primary to-secondary text-white font-medium"
                                    on:click=move |_| open.set(false)
                                >
                                    {Route::Signup.nav_label()}
                                </a>
                            </li>
                            <li class="mt-2">
                                <HeaderSearch suggestions=SEARCH_SUGGESTIONS on_search=on_search/>
                            </li>
                        </ul>
                    </nav>
                </div>
            </div>
        </Show>
    }
}

fn footer_column(title: &'static str, routes: &'static [Route]) -> impl IntoView {
    view! {
        <div>
            <h3 class="text-lg font-semibold mb-4">{title}</h3>
            <ul class="space-y-2">
                {routes.iter().map(|route| {
                    // The contact page is listed as support in the footer
                    let label = if *route == Route::Contact { "Support" } else { route.nav_label() };
                    view! {
                        <li>
                            <a href=route.path() class="text-gray-300 hover:text-white transition-colors">
                                {label}
                            </a>
                        </li>
                    }
                }).collect_view()}
            </ul>
        </div>
    }
}

/// Site footer
#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-gray-900 text-white pt-12 pb-6">
            <div class="container">
                <div class="grid grid-cols-1 md:grid-cols-4 gap-8 mb-8">
                    <div>
                        <span class="text-xl font-bold">"HRGPTAI"</span>
                        <p class="text-gray-400 mt-4">{FOOTER_TAGLINE}</p>
                    </div>
                    {footer_column("Quick Links", &Route::FOOTER_QUICK_LINKS)}
                    {footer_column("Resources", &Route::FOOTER_RESOURCES)}
                    <div>
                        <h3 class="text-lg font-semibold mb-4">"Connect"</h3>
                        <div class="flex gap-4">
                            {SOCIAL_LINKS.iter().map(|(network, url)| view! {
                                <a href=*url aria-label=*network class="text-gray-400 hover:text-white transition-colors">
                                    {*network}
                                </a>
                            }).collect_view()}
                        </div>
                    </div>
                </div>
                <div class="border-t border-gray-800 pt-6 text-center text-gray-400 text-sm">
                    <p>{copyright_line(current_year())}</p>
                </div>
            </div>
        </footer>
    }
}

/// AuthLayout
///
/// Logo header, a centered card for the form and the copyright footer.
#[component]
pub fn AuthLayout() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-50 flex flex-col">
            <header class="relative z-10 p-4 flex justify-between items-center">
                <Logo/>
            </header>

            <main class="flex-grow relative z-10 flex items-center justify-center p-4">
                <div class="w-full max-w-md fade-in">
                    <Outlet/>
                </div>
            </main>

            <footer class="relative z-10 p-4 text-center text-sm text-gray-600">
                <p>{copyright_line(current_year())}</p>
            </footer>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copyright_line() {
        assert_eq!(copyright_line(2025), "© 2025 HRGPTAI. All rights reserved.");
    }

    #[test]
    fn test_current_year_is_plausible() {
        assert!(current_year() >= 2024);
    }

    #[test]
    fn test_nav_link_class() {
        assert!(nav_link_class(true).contains("text-primary"));
        assert!(!nav_link_class(false).ends_with("text-primary"));
    }
}
