// web_app/content/videos.rs - Video demo playlist
//
// Every embed currently points at the same placeholder video.

use crate::web_app::model::{Category, Video};

const PLACEHOLDER_EMBED: &str = "https://www.youtube.com/embed/dQw4w9WgXcQ";

pub const VIDEO_CATEGORIES: &[Category] = &[
    Category::new("all", "All Videos"),
    Category::new("features", "Feature Demos"),
    Category::new("overview", "Platform Overview"),
    Category::new("testimonials", "Customer Stories"),
    Category::new("tutorials", "Tutorials"),
];

pub const VIDEOS: &[Video] = &[
    Video {
        id: "resume-screening",
        title: "AI Resume Screening Demo",
        description: "See how our AI automatically analyzes and ranks candidate resumes.",
        thumbnail: "https://placehold.co/800x450/EEE/31343C?text=Resume+Screening+Demo&font=montserrat",
        category: "features",
        video_url: PLACEHOLDER_EMBED,
    },
    Video {
        id: "chatbot-interview",
        title: "AI Chatbot Interview Process",
        description: "Watch how our chatbot conducts pre-screening interviews with candidates.",
        thumbnail: "https://placehold.co/800x450/EEE/31343C?text=Chatbot+Interview&font=montserrat",
        category: "features",
        video_url: PLACEHOLDER_EMBED,
    },
    Video {
        id: "psycho-testing",
        title: "Psychoanalytical Testing Walkthrough",
        description: "Learn how our AI evaluates candidate personality traits and skills.",
        thumbnail: "https://placehold.co/800x450/EEE/31343C?text=Psychoanalytical+Testing&font=montserrat",
        category: "features",
        video_url: PLACEHOLDER_EMBED,
    },
    Video {
        id: "platform-overview",
        title: "HRGPTAI Platform Overview",
        description: "A complete tour of our AI recruitment platform and its benefits.",
        thumbnail: "https://placehold.co/800x450/EEE/31343C?text=Platform+Overview&font=montserrat",
        category: "overview",
        video_url: PLACEHOLDER_EMBED,
    },
    Video {
        id: "customer-testimonial",
        title: "Customer Success Story: TechCorp",
        description: "How TechCorp reduced hiring time by 70% using HRGPTAI.",
        thumbnail: "https://placehold.co/800x450/EEE/31343C?text=Customer+Story&font=montserrat",
        category: "testimonials",
        video_url: PLACEHOLDER_EMBED,
    },
    Video {
        id: "getting-started",
        title: "Getting Started with HRGPTAI",
        description: "A step-by-step guide for setting up your account and first job posting.",
        thumbnail: "https://placehold.co/800x450/EEE/31343C?text=Getting+Started&font=montserrat",
        category: "tutorials",
        video_url: PLACEHOLDER_EMBED,
    },
];
