// web_app/mod.rs - Root module for the Leptos web application
//
// Architecture:
// - model/: Page state, filtering, validation and routing logic (all targets)
// - content/: Compiled-in site content (all targets)
// - assets.rs: Root-level static files mounted by the server (all targets)
// - components/: Reusable UI components (both SSR and hydrate)
// - pages/: Page-level components (both SSR and hydrate)
// - app.rs: Root application component with routing (both SSR and hydrate)

pub mod assets;
pub mod content;
pub mod model;

// Components, pages, and app are used by both server and client
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod components;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod pages;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;

// Re-export main app component for convenience
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub use app::App;
