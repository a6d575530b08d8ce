// web_app/model/filter.rs - Client-side category + text filtering
//
// Every list page (FAQ, blog, videos, testimonials) narrows a static slice
// by an optional category and a free-text query. The result keeps the
// original order and is recomputed in full on each change.

use super::{BlogPost, FaqEntry, Feature, Testimonial, Video, ALL_CATEGORY};

/// A record that can be narrowed by category and searched by text
pub trait Searchable {
    /// Category key compared against the selected tab
    fn category(&self) -> &str;

    /// Text fields matched against the query
    fn search_fields(&self) -> Vec<&str>;

    /// Case-insensitive substring match against any searchable field.
    /// `needle` must already be lowercase.
    fn matches_query(&self, needle: &str) -> bool {
        needle.is_empty()
            || self
                .search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(needle))
    }
}

/// Return the records visible for `category` and `query`, in original order
pub fn filter_items<'a, T: Searchable>(items: &'a [T], category: &str, query: &str) -> Vec<&'a T> {
    let needle = query.to_lowercase();
    items
        .iter()
        .filter(|item| category == ALL_CATEGORY || item.category() == category)
        .filter(|item| item.matches_query(&needle))
        .collect()
}

/// Page-local filter state: selected category tab plus search text
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListFilter {
    pub category: String,
    pub query: String,
}

impl Default for ListFilter {
    fn default() -> Self {
        Self {
            category: ALL_CATEGORY.to_string(),
            query: String::new(),
        }
    }
}

impl ListFilter {
    pub fn new(category: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            query: query.into(),
        }
    }

    /// Whether both category and query are at their defaults
    pub fn is_default(&self) -> bool {
        self.category == ALL_CATEGORY && self.query.is_empty()
    }

    /// Reset to the "all" category and an empty query
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn apply<'a, T: Searchable>(&self, items: &'a [T]) -> Vec<&'a T> {
        filter_items(items, &self.category, &self.query)
    }
}

impl Searchable for FaqEntry {
    fn category(&self) -> &str {
        self.category
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.question, self.answer]
    }
}

impl Searchable for BlogPost {
    fn category(&self) -> &str {
        self.category
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.title, self.summary]
    }
}

impl Searchable for Video {
    fn category(&self) -> &str {
        self.category
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.title, self.description]
    }
}

impl Searchable for Testimonial {
    fn category(&self) -> &str {
        self.company_id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name, self.quote]
    }
}

// Features have no category tabs; they only ever see "all".
impl Searchable for Feature {
    fn category(&self) -> &str {
        ALL_CATEGORY
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.title, self.description]
    }
}

/// Case-insensitive substring filter over plain strings (header suggestions).
/// An empty query yields no suggestions.
pub fn filter_suggestions<'a>(suggestions: &[&'a str], query: &str) -> Vec<&'a str> {
    if query.is_empty() {
        return Vec::new();
    }
    let needle = query.to_lowercase();
    suggestions
        .iter()
        .copied()
        .filter(|s| s.to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Item {
        category: &'static str,
        title: &'static str,
        body: &'static str,
    }

    impl Searchable for Item {
        fn category(&self) -> &str {
            self.category
        }

        fn search_fields(&self) -> Vec<&str> {
            vec![self.title, self.body]
        }
    }

    fn items() -> Vec<Item> {
        vec![
            Item { category: "a", title: "Resume Screening", body: "ranks candidates" },
            Item { category: "b", title: "Chatbot", body: "Interviews RESUME holders" },
            Item { category: "a", title: "Analytics", body: "dashboards" },
        ]
    }

    #[test]
    fn test_all_and_empty_query_is_identity() {
        let items = items();
        let result = filter_items(&items, "all", "");
        assert_eq!(result.len(), 3);
        assert!(result.iter().zip(items.iter()).all(|(a, b)| std::ptr::eq(*a, b)));
    }

    #[test]
    fn test_category_only() {
        let items = items();
        let result = filter_items(&items, "a", "");
        let titles: Vec<_> = result.iter().map(|i| i.title).collect();
        assert_eq!(titles, vec!["Resume Screening", "Analytics"]);
    }

    #[test]
    fn test_query_is_case_insensitive_across_fields() {
        let items = items();
        let result = filter_items(&items, "all", "resume");
        let titles: Vec<_> = result.iter().map(|i| i.title).collect();
        // Matches the title of the first and the body of the second
        assert_eq!(titles, vec!["Resume Screening", "Chatbot"]);
    }

    #[test]
    fn test_category_and_query_combined() {
        let items = items();
        let result = filter_items(&items, "b", "resume");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].title, "Chatbot");
    }

    #[test]
    fn test_unknown_category_yields_nothing() {
        let items = items();
        assert!(filter_items(&items, "zzz", "").is_empty());
    }

    #[test]
    fn test_query_is_not_trimmed() {
        let items = items();
        // A trailing space must be part of the needle
        assert!(filter_items(&items, "all", "chatbot ").is_empty());
    }

    #[test]
    fn test_list_filter_clear() {
        let mut filter = ListFilter::new("a", "nothing matches this");
        assert!(!filter.is_default());
        assert!(filter.apply(&items()).is_empty());

        filter.clear();
        assert!(filter.is_default());
        assert_eq!(filter.apply(&items()).len(), 3);
    }

    #[test]
    fn test_filter_suggestions() {
        let suggestions = ["Features", "Pricing", "FAQ", "AI Recruitment"];
        assert_eq!(filter_suggestions(&suggestions, "f"), vec!["Features", "FAQ"]);
        assert_eq!(filter_suggestions(&suggestions, "RECRUIT"), vec!["AI Recruitment"]);
        assert!(filter_suggestions(&suggestions, "").is_empty());
    }
}
