// web_app/app.rs - Root application component
//
// Sets up document metadata and the router. Public pages share MainLayout,
// login and signup share AuthLayout, and any other path renders the home
// page inside MainLayout.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::web_app::components::{AuthLayout, MainLayout};
use crate::web_app::model::Route as SiteRoute;
use crate::web_app::pages::{
    BlogPage, ContactPage, FaqPage, FeaturesPage, HomePage, LoginPage, PricingPage, PrivacyPage,
    SignupPage, TestimonialsPage, VideosPage,
};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide meta context for <Title>, <Meta>, etc.
    provide_meta_context();

    view! {
        <Title text=SiteRoute::Home.title() />
        <Meta name="description" content=SiteRoute::Home.description() />
        <Meta name="viewport" content="width=device-width, initial-scale=1" />

        // Stylesheet link (Tailwind CSS)
        <Stylesheet id="leptos" href="/pkg/hrgptai_site.css" />

        <Router>
            <Routes fallback=|| view! { <HomePage /> }>
                <ParentRoute path=path!("") view=AuthLayout>
                    <Route path=path!("/login") view=LoginPage />
                    <Route path=path!("/signup") view=SignupPage />
                </ParentRoute>
                <ParentRoute path=path!("") view=MainLayout>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/features") view=FeaturesPage />
                    <Route path=path!("/videos") view=VideosPage />
                    <Route path=path!("/pricing") view=PricingPage />
                    <Route path=path!("/contact") view=ContactPage />
                    <Route path=path!("/faq") view=FaqPage />
                    <Route path=path!("/testimonials") view=TestimonialsPage />
                    <Route path=path!("/privacy") view=PrivacyPage />
                    <Route path=path!("/blog") view=BlogPage />
                    <Route path=path!("/*any") view=HomePage />
                </ParentRoute>
            </Routes>
        </Router>
    }
}
