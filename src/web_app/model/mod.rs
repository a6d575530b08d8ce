// web_app/model/mod.rs - Shared data models for client and server
//
// These types describe the compiled-in site content and the page-local UI
// state. Nothing here depends on Leptos, so the logic is testable on any
// target.

use serde::Serialize;

pub mod counter;
pub mod filter;
pub mod forms;
pub mod notifications;
pub mod pricing;
pub mod routes;
pub mod selection;

pub use counter::CounterAnimation;
pub use filter::{filter_items, ListFilter, Searchable};
pub use forms::{ContactForm, FieldErrors, FormField, LoginForm, SignupForm, ValidationError};
pub use notifications::{Notification, NotificationId, NotificationKind, NotificationQueue};
pub use pricing::BillingPeriod;
pub use routes::{Layout, Route};
pub use selection::{Accordion, Carousel, Selection};

/// Sentinel category id meaning "no category restriction"
pub const ALL_CATEGORY: &str = "all";

/// One entry of a category tab bar
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Category {
    pub id: &'static str,
    pub name: &'static str,
}

impl Category {
    pub const fn new(id: &'static str, name: &'static str) -> Self {
        Self { id, name }
    }

    pub fn is_all(&self) -> bool {
        self.id == ALL_CATEGORY
    }
}

/// Look up the display name of a category id, falling back to the id itself
pub fn category_name(categories: &[Category], id: &str) -> String {
    categories
        .iter()
        .find(|c| c.id == id)
        .map(|c| c.name.to_string())
        .unwrap_or_else(|| id.to_string())
}

/// Frequently asked question
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct FaqEntry {
    pub id: &'static str,
    pub question: &'static str,
    pub answer: &'static str,
    pub category: &'static str,
}

/// Blog article teaser
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct BlogPost {
    pub id: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub author: &'static str,
    pub date: &'static str,
    pub category: &'static str,
    pub image: &'static str,
    pub reading_time: &'static str,
}

/// Video demo in the playlist
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Video {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub thumbnail: &'static str,
    pub category: &'static str,
    pub video_url: &'static str,
}

/// Customer company shown on the testimonials page
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Company {
    pub id: &'static str,
    pub name: &'static str,
    pub industry: &'static str,
    pub logo: &'static str,
    pub color: &'static str,
}

/// Label/value pair used for customer outcome figures
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Metric {
    pub label: &'static str,
    pub value: &'static str,
}

/// Customer testimonial, grouped by company
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Testimonial {
    pub id: &'static str,
    pub company_id: &'static str,
    pub name: &'static str,
    pub position: &'static str,
    pub avatar: &'static str,
    pub quote: &'static str,
    pub metrics: &'static [Metric],
}

/// Product feature with its detail bullet list
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Feature {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub details: &'static [&'static str],
}

/// Subscription plan card
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PricingPlan {
    pub name: &'static str,
    /// Monthly price in rupees; `None` for the free tier
    pub monthly_price: Option<u32>,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub popular: bool,
    pub cta: &'static str,
    pub cta_link: &'static str,
}

/// Row of the "traditional vs. HRGPTAI" comparison table
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ComparisonRow {
    pub category: &'static str,
    pub traditional: &'static str,
    pub hrgptai: &'static str,
    pub savings: &'static str,
}

/// Customer case study on the pricing page
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SuccessStory {
    pub company: &'static str,
    pub logo: &'static str,
    pub quote: &'static str,
    pub stats: &'static [Metric],
    pub person: &'static str,
    pub position: &'static str,
    pub photo: &'static str,
}

/// Animated headline figure (e.g. "1000+ Companies")
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Stat {
    pub number: u64,
    pub suffix: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

/// Short title/description/icon card used on the home page
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Highlight {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

/// Headline outcome figure ("75%" faster hiring)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Benefit {
    pub title: &'static str,
    pub description: &'static str,
    pub count: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Partner {
    pub name: &'static str,
    pub logo: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct TrustBadge {
    pub name: &'static str,
    pub icon: &'static str,
}

/// Numbered "how it works" step
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Step {
    pub number: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

/// Quote shown in the home page testimonial carousel
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Quote {
    pub quote: &'static str,
    pub name: &'static str,
    pub position: &'static str,
    pub image: &'static str,
}

/// Headed block of the privacy policy
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PolicySection {
    pub heading: &'static str,
    pub paragraphs: &'static [&'static str],
    /// `(h3 heading, body)` pairs rendered after the paragraphs
    pub subsections: &'static [(&'static str, &'static str)],
    pub bullets: &'static [&'static str],
    /// Paragraphs rendered after the bullet list
    pub closing: &'static [&'static str],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_is_all() {
        assert!(Category::new("all", "All").is_all());
        assert!(!Category::new("billing", "Billing").is_all());
    }

    #[test]
    fn test_category_name_lookup() {
        let categories = [
            Category::new("all", "All Categories"),
            Category::new("trends", "Industry Trends"),
        ];
        assert_eq!(category_name(&categories, "trends"), "Industry Trends");
        // Unknown ids fall back to the raw id
        assert_eq!(category_name(&categories, "misc"), "misc");
    }

    #[test]
    fn test_records_serialize() {
        let entry = FaqEntry {
            id: "free-trial",
            question: "How does the free trial work?",
            answer: "14 days.",
            category: "billing",
        };
        let json = serde_json::to_value(entry).unwrap();
        assert_eq!(json["category"], "billing");
        assert_eq!(json["question"], "How does the free trial work?");
    }
}
