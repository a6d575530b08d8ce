// web_app/content/pricing.rs - Plans, ROI comparison and case studies

use crate::web_app::model::{ComparisonRow, Metric, PricingPlan, SuccessStory, TrustBadge};

pub const PRICING_PLANS: &[PricingPlan] = &[
    PricingPlan {
        name: "Basic",
        monthly_price: None,
        description: "Essential AI tools for small businesses",
        features: &[
            "Resume Screening (10/month)",
            "Job Description Generator",
            "Email Support",
            "1 User Account",
        ],
        popular: false,
        cta: "Sign Up Free",
        cta_link: "/signup",
    },
    PricingPlan {
        name: "Pro",
        monthly_price: Some(2499),
        description: "Advanced tools for growing companies",
        features: &[
            "Resume Screening (100/month)",
            "AI Chatbot Interviews",
            "Psychoanalytical Testing",
            "Job Description Generator",
            "Priority Support",
            "3 User Accounts",
        ],
        popular: true,
        cta: "Start Free Trial",
        cta_link: "/signup",
    },
    PricingPlan {
        name: "Enterprise",
        monthly_price: Some(8499),
        description: "Complete AI suite for large organizations",
        features: &[
            "Unlimited Resume Screening",
            "Advanced AI Chatbot Interviews",
            "Comprehensive Psychoanalytical Testing",
            "Offer Letter Automation",
            "Custom Integrations",
            "Dedicated Account Manager",
            "Unlimited User Accounts",
        ],
        popular: false,
        cta: "Contact Sales",
        cta_link: "/contact",
    },
];

pub const COMPARISON: &[ComparisonRow] = &[
    ComparisonRow {
        category: "Time Savings",
        traditional: "40+ hours per hire",
        hrgptai: "10 hours per hire",
        savings: "75% less time",
    },
    ComparisonRow {
        category: "Cost Per Hire",
        traditional: "₹30,000 - ₹1,50,000",
        hrgptai: "₹8,000 - ₹40,000",
        savings: "75% cost reduction",
    },
    ComparisonRow {
        category: "Candidate Experience",
        traditional: "Slow feedback, lengthy process",
        hrgptai: "Instant feedback, streamlined",
        savings: "Higher satisfaction",
    },
    ComparisonRow {
        category: "Quality of Hire",
        traditional: "Subjective evaluation",
        hrgptai: "Data-driven decisions",
        savings: "Better fit candidates",
    },
];

pub const SUCCESS_STORIES: &[SuccessStory] = &[
    SuccessStory {
        company: "Reliance Tech Solutions",
        logo: "https://placehold.co/100x100/EEE/31343C?text=RTS&font=montserrat",
        quote: "After implementing HRGPTAI, our time-to-hire decreased by 65%. We now process over 500 applications per month with just 2 HR team members.",
        stats: &[
            Metric { label: "Faster Hiring", value: "65%" },
            Metric { label: "Cost Reduction", value: "40%" },
            Metric { label: "Candidate Quality", value: "3x" },
        ],
        person: "Vikram Mehta",
        position: "Chief HR Officer",
        photo: "https://placehold.co/60x60/EEE/31343C?text=VM&font=montserrat",
    },
    SuccessStory {
        company: "Tata Consultancy Services",
        logo: "https://placehold.co/100x100/EEE/31343C?text=TCS&font=montserrat",
        quote: "HRGPTAI's psychoanalytical testing has been a game-changer for our organization. Our retention rates have improved by 45% with better culture fits.",
        stats: &[
            Metric { label: "Better Retention", value: "45%" },
            Metric { label: "Faster Screening", value: "70%" },
            Metric { label: "Annual Savings", value: "₹1.2Cr" },
        ],
        person: "Priya Singh",
        position: "Head of Talent Acquisition",
        photo: "https://placehold.co/60x60/EEE/31343C?text=PS&font=montserrat",
    },
    SuccessStory {
        company: "Infosys HR Solutions",
        logo: "https://placehold.co/100x100/EEE/31343C?text=IHR&font=montserrat",
        quote: "We've scaled our recruitment operations across 12 cities without adding HR staff, all thanks to HRGPTAI's automation capabilities.",
        stats: &[
            Metric { label: "Efficiency Gain", value: "300%" },
            Metric { label: "Cities Covered", value: "12" },
            Metric { label: "New HR Hires", value: "0" },
        ],
        person: "Rajiv Kapoor",
        position: "Director of Operations",
        photo: "https://placehold.co/60x60/EEE/31343C?text=RK&font=montserrat",
    },
];

pub const TRUST_BADGES: &[TrustBadge] = &[
    TrustBadge { name: "ISO 27001 Certified", icon: "🔒" },
    TrustBadge { name: "GDPR Compliant", icon: "🛡️" },
    TrustBadge { name: "99.9% Uptime", icon: "⚡" },
    TrustBadge { name: "256-bit Encryption", icon: "🔐" },
    TrustBadge { name: "SOC 2 Compliant", icon: "✅" },
];

/// Short billing questions answered below the plans
pub const PRICING_QUESTIONS: &[(&str, &str)] = &[
    (
        "Can I switch plans later?",
        "Yes, you can upgrade or downgrade at any time. Changes take effect at the start of your next billing cycle.",
    ),
    (
        "Do you offer custom plans?",
        "Yes, larger organizations with specific needs can get a custom enterprise solution. Contact our sales team for details.",
    ),
    (
        "Is there a free trial?",
        "Yes, all paid plans include a 14-day free trial so you can experience HRGPTAI before committing.",
    ),
    (
        "What payment methods do you accept?",
        "We accept all major credit cards, UPI, NetBanking and PayTM, and offer invoicing for annual Enterprise plans.",
    ),
];
