// web_app/pages/mod.rs - Page components module
//
// One module per routed page. Public pages render inside MainLayout,
// login and signup inside AuthLayout.

pub mod blog;
pub mod contact;
pub mod faq;
pub mod features;
pub mod home;
pub mod login;
pub mod pricing;
pub mod privacy;
pub mod signup;
pub mod testimonials;
pub mod videos;

// Re-export page components
pub use blog::BlogPage;
pub use contact::ContactPage;
pub use faq::FaqPage;
pub use features::FeaturesPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use pricing::PricingPage;
pub use privacy::PrivacyPage;
pub use signup::SignupPage;
pub use testimonials::TestimonialsPage;
pub use videos::VideosPage;
