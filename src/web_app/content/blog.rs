// web_app/content/blog.rs - Blog article teasers

use crate::web_app::model::{BlogPost, Category};

pub const BLOG_CATEGORIES: &[Category] = &[
    Category::new("all", "All Categories"),
    Category::new("trends", "Industry Trends"),
    Category::new("diversity", "Diversity & Inclusion"),
    Category::new("experience", "Candidate Experience"),
    Category::new("technology", "Technology"),
    Category::new("remote-work", "Remote Work"),
    Category::new("automation", "Automation"),
];

pub const BLOG_POSTS: &[BlogPost] = &[
    BlogPost {
        id: "ai-recruiting-trends-2023",
        title: "Top 10 AI Recruiting Trends to Watch in 2023",
        summary: "Explore the latest AI innovations transforming the recruitment landscape, from predictive analytics to conversational AI interviews.",
        author: "Sarah Johnson",
        date: "August 15, 2023",
        category: "trends",
        image: "https://placehold.co/800x400/007BFF/FFFFFF?text=AI+Trends+2023",
        reading_time: "6 min read",
    },
    BlogPost {
        id: "unbiased-hiring",
        title: "How AI is Eliminating Bias in the Hiring Process",
        summary: "Learn how advanced algorithms help companies build more diverse and inclusive workplaces by reducing unconscious bias in recruitment.",
        author: "Michael Chen",
        date: "July 28, 2023",
        category: "diversity",
        image: "https://placehold.co/800x400/6F42C1/FFFFFF?text=Unbiased+Hiring",
        reading_time: "9 min read",
    },
    BlogPost {
        id: "candidate-experience",
        title: "Enhancing Candidate Experience with AI Chatbots",
        summary: "Discover how AI-powered chatbots improve the candidate experience with instant feedback and personalized interactions.",
        author: "Jessica Patel",
        date: "June 12, 2023",
        category: "experience",
        image: "https://placehold.co/800x400/28A745/FFFFFF?text=AI+Chatbots",
        reading_time: "5 min read",
    },
    BlogPost {
        id: "skills-assessment",
        title: "The Science Behind AI Skills Assessment",
        summary: "An in-depth look at how artificial intelligence evaluates candidate skills more effectively than traditional methods.",
        author: "Dr. Robert Smith",
        date: "May 30, 2023",
        category: "technology",
        image: "https://placehold.co/800x400/FD7E14/FFFFFF?text=Skills+Assessment",
        reading_time: "12 min read",
    },
    BlogPost {
        id: "remote-hiring",
        title: "Remote Hiring Made Simple with AI",
        summary: "How companies use AI to streamline remote hiring and find the best global talent regardless of location.",
        author: "Anna Martinez",
        date: "April 22, 2023",
        category: "remote-work",
        image: "https://placehold.co/800x400/20C997/FFFFFF?text=Remote+Hiring",
        reading_time: "7 min read",
    },
    BlogPost {
        id: "hr-automation",
        title: "Beyond Recruitment: AI Applications in HR Automation",
        summary: "Exploring how AI is expanding beyond recruitment to transform every aspect of human resources management.",
        author: "James Wilson",
        date: "March 15, 2023",
        category: "automation",
        image: "https://placehold.co/800x400/DC3545/FFFFFF?text=HR+Automation",
        reading_time: "8 min read",
    },
];
