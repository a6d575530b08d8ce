// Filter/search tests over the compiled-in content
// Exercises category + text filtering the way the list pages use it.

use hrgptai_site::web_app::content::{
    BLOG_CATEGORIES, BLOG_POSTS, FAQS, FAQ_CATEGORIES, TESTIMONIALS, VIDEOS, VIDEO_CATEGORIES,
};
use hrgptai_site::web_app::model::filter::filter_suggestions;
use hrgptai_site::web_app::model::{filter_items, Category, ListFilter, Searchable, ALL_CATEGORY};

fn ids<T, F: Fn(&T) -> &'static str>(items: &[&T], id_of: F) -> Vec<&'static str> {
    items.iter().map(|item| id_of(*item)).collect()
}

/// Subsequence check preserving order
fn is_subsequence<T: PartialEq>(sub: &[T], full: &[T]) -> bool {
    let mut rest = full.iter();
    sub.iter().all(|wanted| rest.any(|item| item == wanted))
}

#[test]
fn test_all_and_empty_query_is_identity() {
    assert_eq!(filter_items(FAQS, ALL_CATEGORY, "").len(), FAQS.len());
    assert_eq!(filter_items(BLOG_POSTS, ALL_CATEGORY, "").len(), BLOG_POSTS.len());
    assert_eq!(filter_items(VIDEOS, ALL_CATEGORY, "").len(), VIDEOS.len());

    let all = filter_items(FAQS, ALL_CATEGORY, "");
    for (filtered, original) in all.iter().zip(FAQS) {
        assert_eq!(*filtered, original);
    }
}

#[test]
fn test_query_narrows_to_subsequence_of_category() {
    let queries = ["ai", "the", "interview", "zzz", ""];
    let categories: Vec<&Category> = FAQ_CATEGORIES.iter().collect();

    for category in categories {
        let base = ids(&filter_items(FAQS, category.id, ""), |f| f.id);
        for query in queries {
            let narrowed = ids(&filter_items(FAQS, category.id, query), |f| f.id);
            assert!(
                is_subsequence(&narrowed, &base),
                "category '{}' query '{}' is not a subsequence",
                category.id,
                query
            );
        }
    }
}

#[test]
fn test_every_category_result_matches_its_key() {
    for category in BLOG_CATEGORIES.iter().filter(|c| !c.is_all()) {
        for post in filter_items(BLOG_POSTS, category.id, "") {
            assert_eq!(post.category, category.id);
        }
    }
    for category in VIDEO_CATEGORIES.iter().filter(|c| !c.is_all()) {
        for video in filter_items(VIDEOS, category.id, "") {
            assert_eq!(video.category, category.id);
        }
    }
}

#[test]
fn test_search_is_case_insensitive() {
    let lower = filter_items(FAQS, ALL_CATEGORY, "trial");
    let upper = filter_items(FAQS, ALL_CATEGORY, "TRIAL");
    let mixed = filter_items(FAQS, ALL_CATEGORY, "TrIaL");
    assert!(!lower.is_empty());
    assert_eq!(lower, upper);
    assert_eq!(lower, mixed);
}

#[test]
fn test_search_only_reads_searchable_fields() {
    // FAQ ids and categories are not searched
    assert!(filter_items(FAQS, ALL_CATEGORY, "implementation-time").is_empty());
    for faq in filter_items(FAQS, ALL_CATEGORY, "secure") {
        assert!(faq
            .search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains("secure")));
    }
}

#[test]
fn test_billing_trial_finds_free_trial_question() {
    let results = filter_items(FAQS, "billing", "trial");
    let questions: Vec<&str> = results.iter().map(|f| f.question).collect();
    assert_eq!(questions, vec!["How does the free trial work?"]);
}

#[test]
fn test_clearing_filters_restores_full_list_in_order() {
    let mut filter = ListFilter::new("security", "no such phrase anywhere");
    assert!(filter.apply(FAQS).is_empty());
    assert!(!filter.is_default());

    filter.clear();
    assert!(filter.is_default());
    let restored = ids(&filter.apply(FAQS), |f| f.id);
    let original: Vec<&str> = FAQS.iter().map(|f| f.id).collect();
    assert_eq!(restored, original);
}

#[test]
fn test_video_and_blog_lists_clear_back_to_full_order() {
    let mut videos = ListFilter::new("features", "zzz-not-a-title");
    assert!(videos.apply(VIDEOS).is_empty());
    videos.clear();
    assert_eq!(
        ids(&videos.apply(VIDEOS), |v| v.id),
        VIDEOS.iter().map(|v| v.id).collect::<Vec<_>>()
    );

    let mut posts = ListFilter::new(BLOG_POSTS[0].category, "");
    let narrowed = ids(&posts.apply(BLOG_POSTS), |p| p.id);
    assert!(narrowed.contains(&BLOG_POSTS[0].id));
    posts.clear();
    assert_eq!(posts.apply(BLOG_POSTS).len(), BLOG_POSTS.len());
}

#[test]
fn test_unknown_category_yields_nothing() {
    assert!(filter_items(BLOG_POSTS, "gardening", "").is_empty());
}

#[test]
fn test_testimonials_filter_by_company() {
    let first_company = TESTIMONIALS[0].company_id;
    let results = filter_items(TESTIMONIALS, first_company, "");
    assert!(!results.is_empty());
    assert!(results.iter().all(|t| t.company_id == first_company));
}

#[test]
fn test_header_suggestions() {
    let suggestions = ["Features", "Pricing", "FAQ", "Contact", "AI Recruitment", "Video Interview"];
    assert_eq!(filter_suggestions(&suggestions, "in"), vec!["Pricing", "Video Interview"]);
    assert_eq!(filter_suggestions(&suggestions, "FAQ"), vec!["FAQ"]);
    assert!(filter_suggestions(&suggestions, "").is_empty());
    assert!(filter_suggestions(&suggestions, "payroll").is_empty());
}
