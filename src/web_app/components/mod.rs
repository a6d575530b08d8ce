// web_app/components/mod.rs - UI components module
//
// Structure:
// - common.rs: Stateless building blocks (Button, Badge, PageHero, ...)
// - search.rs: Search inputs, category tabs and the empty-result panel
// - forms.rs: Form inputs with inline validation errors
// - notifications.rs: NotificationCenter context and the toast stack
// - counter.rs: AnimatedCounter
// - layout.rs: MainLayout, AuthLayout, MobileMenu and Footer

pub mod common;
pub mod counter;
pub mod forms;
pub mod layout;
pub mod notifications;
pub mod search;

// Re-export commonly used components for convenience
pub use common::*;
pub use counter::AnimatedCounter;
pub use forms::*;
pub use layout::{AuthLayout, Footer, MainLayout, MobileMenu};
pub use notifications::{use_notifications, NotificationCenter, NotificationStack};
pub use search::*;
