// web_app/content/faq.rs - Frequently asked questions

use crate::web_app::model::{Category, FaqEntry};

pub const FAQ_CATEGORIES: &[Category] = &[
    Category::new("all", "All Questions"),
    Category::new("general", "General"),
    Category::new("features", "Features"),
    Category::new("technical", "Technical"),
    Category::new("security", "Security"),
    Category::new("implementation", "Implementation"),
    Category::new("support", "Support"),
    Category::new("billing", "Billing"),
];

pub const FAQS: &[FaqEntry] = &[
    FaqEntry {
        id: "what-makes-hrgptai-different",
        question: "What makes HRGPTAI different from traditional recruitment software?",
        answer: "HRGPTAI uses artificial intelligence to automate and enhance every step of the recruitment process. Instead of simply digitizing manual work, it generates job descriptions, screens resumes with human-like comprehension, runs pre-screening interviews, performs psychoanalytical testing and drafts offer letters, learning from each interaction along the way.",
        category: "general",
    },
    FaqEntry {
        id: "resume-screening-accuracy",
        question: "How accurate is the AI resume screening?",
        answer: "Our resume screening achieves over 95% accuracy compared to expert human recruiters. Natural language processing lets the system understand context, identify relevant skills and rank candidates against the job requirements, surfacing qualified people that keyword-based screening tends to overlook.",
        category: "features",
    },
    FaqEntry {
        id: "data-security",
        question: "Is my company's data secure with HRGPTAI?",
        answer: "Absolutely. We use enterprise-grade security including end-to-end encryption, regular security audits and strict access controls. Data is stored in compliance with GDPR and other regional data protection regulations, is never shared with third parties, and remains entirely yours.",
        category: "security",
    },
    FaqEntry {
        id: "hr-system-integration",
        question: "Can HRGPTAI integrate with our existing HR systems?",
        answer: "Yes. HRGPTAI connects to popular HRIS, ATS and other HR tools through standard APIs, including Workday, SAP SuccessFactors and BambooHR. Our team also builds custom integrations for enterprise clients with specific requirements.",
        category: "technical",
    },
    FaqEntry {
        id: "implementation-time",
        question: "How long does it take to implement HRGPTAI?",
        answer: "Most companies are up and running in less than a week. Standard implementation covers account setup, basic customization and integration with your existing systems. Enterprise rollouts with custom integrations and tailored workflows usually take 2-4 weeks.",
        category: "implementation",
    },
    FaqEntry {
        id: "support-options",
        question: "What kind of support does HRGPTAI provide?",
        answer: "All plans include email support with 24-hour response times. Pro plans add phone support during business hours, and Enterprise clients receive 24/7 priority support with a dedicated account manager. Documentation, video tutorials and regular webinars are available to everyone.",
        category: "support",
    },
    FaqEntry {
        id: "custom-chatbot-questions",
        question: "Can I customize the AI chatbot's questions for specific roles?",
        answer: "Yes. You can define technical questions, behavioral assessments and job-specific scenarios for each position. The chatbot adapts its follow-up questions to candidate responses, producing a conversational and revealing interview.",
        category: "features",
    },
    FaqEntry {
        id: "free-trial",
        question: "How does the free trial work?",
        answer: "Our 14-day free trial gives you full access to all features of your selected plan. No credit card is required to start, and you can process up to 25 candidates during the trial period. When it ends you can move to a paid subscription without losing any data.",
        category: "billing",
    },
    FaqEntry {
        id: "small-businesses",
        question: "Is HRGPTAI suitable for small businesses?",
        answer: "Yes. HRGPTAI scales with businesses of all sizes, and the Basic plan is built specifically for small teams. The interface needs minimal training, so it works well even without dedicated HR staff.",
        category: "general",
    },
    FaqEntry {
        id: "data-after-cancellation",
        question: "What happens to my data if I cancel my subscription?",
        answer: "After cancelling you have 30 days to export all your data in standard formats such as CSV and JSON. After that period your data is scheduled for deletion. Retention extensions are available on request, and enterprise clients can use our data escrow service.",
        category: "billing",
    },
    FaqEntry {
        id: "release-cadence",
        question: "How often is HRGPTAI updated with new features?",
        answer: "Major feature updates ship quarterly, with minor improvements and bug fixes deployed continuously. Customer feedback shapes the roadmap, and all updates are applied automatically with zero downtime.",
        category: "technical",
    },
    FaqEntry {
        id: "multiple-languages",
        question: "Can HRGPTAI handle recruitment in multiple languages?",
        answer: "Yes. HRGPTAI supports 12 languages including English, Spanish, French, German, Chinese, Japanese, Portuguese, Italian, Dutch, Russian, Arabic and Hindi. Resume screening, interviews and generated documents all work in every supported language.",
        category: "features",
    },
];
