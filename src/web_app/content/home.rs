// web_app/content/home.rs - Landing page sections

use std::time::Duration;

use crate::web_app::model::{Benefit, Highlight, Partner, Quote, Stat, Step};

/// Interval of the customer quote rotation
pub const QUOTE_ROTATION: Duration = Duration::from_secs(5);

/// Mini feature list inside the hero card
pub const HERO_HIGHLIGHTS: &[Highlight] = &[
    Highlight {
        title: "Smart Candidate Matching",
        description: "Find the perfect fit instantly",
        icon: "🎯",
    },
    Highlight {
        title: "AI-Powered Interviews",
        description: "Conduct bias-free interviews",
        icon: "🤖",
    },
    Highlight {
        title: "Real-time Analytics",
        description: "Track hiring metrics effortlessly",
        icon: "📊",
    },
];

pub const HOME_FEATURES: &[Highlight] = &[
    Highlight {
        title: "Smart Matching",
        description: "Matches candidates with the right roles based on skills, experience and culture fit, reducing time-to-hire by up to 70%.",
        icon: "🎯",
    },
    Highlight {
        title: "AI Interviews",
        description: "Automated first-round interviews with natural language processing, in multiple languages and with custom question sets.",
        icon: "🤖",
    },
    Highlight {
        title: "Analytics Dashboard",
        description: "Real-time insight into time-to-fill, cost-per-hire and candidate quality scores.",
        icon: "📊",
    },
    Highlight {
        title: "Resume Parsing",
        description: "Extracts key information from PDF, DOCX and LinkedIn profiles with high accuracy.",
        icon: "🔍",
    },
    Highlight {
        title: "Mobile-First",
        description: "Review candidates and make hiring decisions on the go with instant notifications.",
        icon: "📱",
    },
    Highlight {
        title: "Secure & Compliant",
        description: "Enterprise-grade security, encrypted storage and compliance with GDPR, CCPA and other regulations.",
        icon: "🔒",
    },
    Highlight {
        title: "Candidate Engagement",
        description: "Automated, personalized communication keeps candidates informed throughout the process.",
        icon: "💬",
    },
    Highlight {
        title: "Psychometric Analysis",
        description: "Assess personality traits, work styles and team compatibility for long-term retention.",
        icon: "🧠",
    },
    Highlight {
        title: "Intelligent Scheduling",
        description: "Synchronizes with calendars to find interview times that work for everyone.",
        icon: "📅",
    },
    Highlight {
        title: "Global Talent Search",
        description: "Source candidates worldwide with multilingual support and regional compliance awareness.",
        icon: "🌐",
    },
];

pub const BENEFITS: &[Benefit] = &[
    Benefit {
        title: "Faster Hiring Process",
        description: "Reduce time-to-hire by up to 75% with automated screening and interviewing.",
        count: "75%",
    },
    Benefit {
        title: "Cost-Effective Recruitment",
        description: "Save on recruitment costs by automating time-consuming manual processes.",
        count: "60%",
    },
    Benefit {
        title: "AI-Driven Decision Making",
        description: "Make data-backed hiring decisions with AI analytics and insights.",
        count: "90%",
    },
    Benefit {
        title: "Improved Candidate Experience",
        description: "Provide faster feedback and a streamlined application process.",
        count: "4.8/5",
    },
];

pub const STEPS: &[Step] = &[
    Step {
        number: "01",
        title: "Set Up Your Job Profile",
        description: "Define job requirements, desired skills and company culture attributes.",
        icon: "🎯",
    },
    Step {
        number: "02",
        title: "AI Screens Applicants",
        description: "Resumes are evaluated automatically and candidates ranked by job fit.",
        icon: "🤖",
    },
    Step {
        number: "03",
        title: "Conduct Automated Interviews",
        description: "AI chatbots interview shortlisted candidates and evaluate their responses and soft skills.",
        icon: "💬",
    },
    Step {
        number: "04",
        title: "Review AI Insights",
        description: "Comprehensive candidate reports support data-driven hiring decisions.",
        icon: "📊",
    },
];

pub const QUOTES: &[Quote] = &[
    Quote {
        quote: "HRGPTAI has transformed our hiring process completely. We've cut our time-to-hire by 70% while improving the quality of candidates we bring on board.",
        name: "Ananya Sharma",
        position: "VP of Talent Acquisition, TechMahindra",
        image: "https://placehold.co/100x100/EEE/31343C?text=AS&font=montserrat",
    },
    Quote {
        quote: "The AI chatbot interviews have been a game-changer for our high-volume recruitment. We screen thousands of candidates efficiently without losing the personal touch.",
        name: "Rajiv Kapoor",
        position: "Chief People Officer, Infosys HR Solutions",
        image: "https://placehold.co/100x100/EEE/31343C?text=RK&font=montserrat",
    },
    Quote {
        quote: "I was skeptical about AI recruitment tools, but HRGPTAI proved me wrong. The psychoanalytical testing has helped us build more cohesive teams.",
        name: "Priya Malhotra",
        position: "Director of Operations, QuickHire India",
        image: "https://placehold.co/100x100/EEE/31343C?text=PM&font=montserrat",
    },
];

pub const STATS: &[Stat] = &[
    Stat {
        number: 1000,
        suffix: "+",
        label: "Companies",
        description: "Trust our platform",
    },
    Stat {
        number: 50000,
        suffix: "+",
        label: "Interviews",
        description: "Conducted monthly",
    },
    Stat {
        number: 95,
        suffix: "%",
        label: "Satisfaction",
        description: "From our clients",
    },
    Stat {
        number: 24,
        suffix: "/7",
        label: "Support",
        description: "Always available",
    },
];

pub const PARTNERS: &[Partner] = &[
    Partner { name: "Zoho People", logo: "https://placehold.co/200x80/EEE/31343C?text=Zoho&font=montserrat" },
    Partner { name: "TalentRecruit", logo: "https://placehold.co/200x80/EEE/31343C?text=TalentRecruit&font=montserrat" },
    Partner { name: "Darwinbox", logo: "https://placehold.co/200x80/EEE/31343C?text=Darwinbox&font=montserrat" },
    Partner { name: "PeopleStrong", logo: "https://placehold.co/200x80/EEE/31343C?text=PeopleStrong&font=montserrat" },
    Partner { name: "Keka HR", logo: "https://placehold.co/200x80/EEE/31343C?text=Keka&font=montserrat" },
    Partner { name: "greytHR", logo: "https://placehold.co/200x80/EEE/31343C?text=greytHR&font=montserrat" },
];
