// web_app/model/routes.rs - Site map
//
// The router in app.rs declares the same paths; this enum is the single
// place that knows each page's path, chrome, nav label and head metadata.

use serde::Serialize;

/// Chrome wrapped around a page
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Layout {
    /// Header, navigation, footer and notification stack
    Main,
    /// Logo header and a centered card
    Auth,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Route {
    Home,
    Features,
    Videos,
    Pricing,
    Contact,
    Faq,
    Testimonials,
    Privacy,
    Blog,
    Login,
    Signup,
}

impl Route {
    pub const ALL: [Route; 11] = [
        Route::Home,
        Route::Features,
        Route::Videos,
        Route::Pricing,
        Route::Contact,
        Route::Faq,
        Route::Testimonials,
        Route::Privacy,
        Route::Blog,
        Route::Login,
        Route::Signup,
    ];

    /// Desktop header navigation, in display order
    pub const HEADER_NAV: [Route; 8] = [
        Route::Home,
        Route::Features,
        Route::Videos,
        Route::Testimonials,
        Route::Blog,
        Route::Pricing,
        Route::Faq,
        Route::Contact,
    ];

    /// Slide-out menu links: the header navigation plus the privacy policy
    pub const MOBILE_NAV: [Route; 9] = [
        Route::Home,
        Route::Features,
        Route::Videos,
        Route::Testimonials,
        Route::Blog,
        Route::Pricing,
        Route::Faq,
        Route::Contact,
        Route::Privacy,
    ];

    /// Footer "Quick Links" column
    pub const FOOTER_QUICK_LINKS: [Route; 4] =
        [Route::Home, Route::Features, Route::Videos, Route::Testimonials];

    /// Footer "Resources" column
    pub const FOOTER_RESOURCES: [Route; 4] =
        [Route::Pricing, Route::Faq, Route::Contact, Route::Privacy];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Features => "/features",
            Route::Videos => "/videos",
            Route::Pricing => "/pricing",
            Route::Contact => "/contact",
            Route::Faq => "/faq",
            Route::Testimonials => "/testimonials",
            Route::Privacy => "/privacy",
            Route::Blog => "/blog",
            Route::Login => "/login",
            Route::Signup => "/signup",
        }
    }

    /// Map a URL path to its page. Unknown paths resolve to the home page.
    pub fn resolve(path: &str) -> Route {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        let normalized = if trimmed.is_empty() { "/" } else { trimmed };

        let route = Route::ALL
            .into_iter()
            .find(|route| route.path() == normalized)
            .unwrap_or(Route::Home);
        tracing::debug!("Resolved path '{}' to {:?}", path, route);
        route
    }

    pub fn layout(&self) -> Layout {
        match self {
            Route::Login | Route::Signup => Layout::Auth,
            _ => Layout::Main,
        }
    }

    pub fn nav_label(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Features => "Features",
            Route::Videos => "Video Demos",
            Route::Pricing => "Pricing",
            Route::Contact => "Contact",
            Route::Faq => "FAQ",
            Route::Testimonials => "Success Stories",
            Route::Privacy => "Privacy Policy",
            Route::Blog => "Blog",
            Route::Login => "Log In",
            Route::Signup => "Sign Up Free",
        }
    }

    /// Document title
    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "HRGPTAI - AI-Powered Recruitment Platform",
            Route::Features => "Features - HRGPTAI",
            Route::Videos => "Video Demos - HRGPTAI",
            Route::Pricing => "Pricing - HRGPTAI",
            Route::Contact => "Contact Us - HRGPTAI",
            Route::Faq => "Frequently Asked Questions - HRGPTAI",
            Route::Testimonials => "Customer Testimonials - HRGPTAI",
            Route::Privacy => "Privacy Policy - HRGPTAI",
            Route::Blog => "Blog - HRGPTAI",
            Route::Login => "Log In - HRGPTAI",
            Route::Signup => "Sign Up - HRGPTAI",
        }
    }

    /// Meta description
    pub fn description(&self) -> &'static str {
        match self {
            Route::Home => "HRGPTAI streamlines recruitment with AI resume screening, chatbot interviews, and psychoanalytical testing.",
            Route::Features => "Explore HRGPTAI's AI-powered recruitment features.",
            Route::Videos => "Watch demos of HRGPTAI's AI-powered recruitment platform.",
            Route::Pricing => "Explore HRGPTAI's flexible pricing plans for AI-powered recruitment solutions.",
            Route::Contact => "Get in touch with HRGPTAI for questions, support, or feedback.",
            Route::Faq => "Find answers to common questions about HRGPTAI's AI-powered recruitment platform.",
            Route::Testimonials => "See what our customers say about HRGPTAI's AI-powered recruitment solutions.",
            Route::Privacy => "HRGPTAI's privacy policy details how we handle and protect your personal information.",
            Route::Blog => "Insights and updates about AI-powered recruitment and HR technologies.",
            Route::Login => "Log in to your HRGPTAI account.",
            Route::Signup => "Create your free HRGPTAI account.",
        }
    }

    /// Whether a nav link for `self` is the active one at `current_path`
    pub fn is_active(&self, current_path: &str) -> bool {
        Route::resolve(current_path) == *self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_route_resolves_to_itself() {
        for route in Route::ALL {
            assert_eq!(Route::resolve(route.path()), route, "{:?}", route);
        }
    }

    #[test]
    fn test_unknown_paths_fall_back_to_home() {
        assert_eq!(Route::resolve("/does-not-exist"), Route::Home);
        assert_eq!(Route::resolve("/blog/some-post"), Route::Home);
        assert_eq!(Route::resolve(""), Route::Home);
    }

    #[test]
    fn test_trailing_slash_and_query_are_ignored() {
        assert_eq!(Route::resolve("/faq/"), Route::Faq);
        assert_eq!(Route::resolve("/pricing?plan=pro"), Route::Pricing);
        assert_eq!(Route::resolve("/contact#form"), Route::Contact);
    }

    #[test]
    fn test_layouts() {
        assert_eq!(Route::Login.layout(), Layout::Auth);
        assert_eq!(Route::Signup.layout(), Layout::Auth);
        for route in Route::HEADER_NAV {
            assert_eq!(route.layout(), Layout::Main);
        }
    }

    #[test]
    fn test_paths_are_unique() {
        let mut paths: Vec<_> = Route::ALL.iter().map(|r| r.path()).collect();
        paths.sort_unstable();
        paths.dedup();
        assert_eq!(paths.len(), Route::ALL.len());
    }

    #[test]
    fn test_active_link() {
        assert!(Route::Faq.is_active("/faq"));
        assert!(!Route::Home.is_active("/faq"));
        assert!(Route::Home.is_active("/nowhere"));
    }
}
