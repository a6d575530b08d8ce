// web_app/content/mod.rs - Compiled-in site content
//
// Every page renders from these read-only slices. Categorised lists declare
// their category set next to the records, with the "all" tab first.

pub mod blog;
pub mod faq;
pub mod features;
pub mod home;
pub mod pricing;
pub mod privacy;
pub mod testimonials;
pub mod videos;

pub use blog::{BLOG_CATEGORIES, BLOG_POSTS};
pub use faq::{FAQS, FAQ_CATEGORIES};
pub use features::FEATURES;
pub use testimonials::{COMPANIES, COMPANY_CATEGORIES, TESTIMONIALS};
pub use videos::{VIDEOS, VIDEO_CATEGORIES};

/// Header search suggestions
pub const SEARCH_SUGGESTIONS: &[&str] = &[
    "Features",
    "Pricing",
    "FAQ",
    "Contact",
    "AI Recruitment",
    "Video Interview",
];

pub const FOOTER_TAGLINE: &str = "Revolutionizing hiring with AI-powered solutions.";

/// Footer "Connect" column: (network, url)
pub const SOCIAL_LINKS: &[(&str, &str)] = &[
    ("LinkedIn", "#"),
    ("Instagram", "#"),
    ("Twitter", "#"),
    ("YouTube", "#"),
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::web_app::model::{filter_items, Category, Searchable};

    fn assert_unique<'a>(ids: impl IntoIterator<Item = &'a str>, list: &str) {
        let mut seen = HashSet::new();
        for id in ids {
            assert!(seen.insert(id), "duplicate id '{}' in {}", id, list);
        }
    }

    fn assert_categories_declared<T: Searchable>(items: &[T], categories: &[Category], list: &str) {
        assert!(categories[0].is_all(), "{} must list 'all' first", list);
        assert_unique(categories.iter().map(|c| c.id), list);
        for item in items {
            assert!(
                categories.iter().any(|c| !c.is_all() && c.id == item.category()),
                "{}: undeclared category '{}'",
                list,
                item.category()
            );
        }
    }

    #[test]
    fn test_ids_are_unique() {
        assert_unique(FAQS.iter().map(|f| f.id), "FAQS");
        assert_unique(BLOG_POSTS.iter().map(|p| p.id), "BLOG_POSTS");
        assert_unique(VIDEOS.iter().map(|v| v.id), "VIDEOS");
        assert_unique(TESTIMONIALS.iter().map(|t| t.id), "TESTIMONIALS");
        assert_unique(FEATURES.iter().map(|f| f.id), "FEATURES");
        assert_unique(COMPANIES.iter().map(|c| c.id), "COMPANIES");
    }

    #[test]
    fn test_categories_are_declared() {
        assert_categories_declared(FAQS, FAQ_CATEGORIES, "FAQS");
        assert_categories_declared(BLOG_POSTS, BLOG_CATEGORIES, "BLOG_POSTS");
        assert_categories_declared(VIDEOS, VIDEO_CATEGORIES, "VIDEOS");
        assert_categories_declared(TESTIMONIALS, COMPANY_CATEGORIES, "TESTIMONIALS");
    }

    #[test]
    fn test_every_testimonial_has_a_company() {
        for testimonial in TESTIMONIALS {
            assert!(testimonials::company(testimonial.company_id).is_some());
        }
    }

    #[test]
    fn test_faq_shape() {
        assert_eq!(FAQS.len(), 12);
        let used: HashSet<_> = FAQS.iter().map(|f| f.category).collect();
        assert_eq!(used.len(), 7);
    }

    #[test]
    fn test_billing_trial_search() {
        let result = filter_items(FAQS, "billing", "trial");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].question, "How does the free trial work?");
    }
}
