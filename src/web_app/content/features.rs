// web_app/content/features.rs - Product features for the tabbed detail panel

use crate::web_app::model::Feature;

pub const FEATURES: &[Feature] = &[
    Feature {
        id: "job-description",
        title: "Job Description & KRA Generator",
        description: "Our AI creates detailed job descriptions and Key Responsibility Areas based on your requirements, saving HR teams hours of manual work.",
        icon: "📝",
        details: &[
            "Save hours of manual writing with AI-generated job descriptions",
            "Ensure consistency across all job postings",
            "Include industry-specific skills and requirements automatically",
            "Generate KRAs that align with your company goals",
            "Optimize job descriptions for better candidate engagement",
            "Reduce unconscious bias with inclusive language recommendations",
        ],
    },
    Feature {
        id: "resume-screening",
        title: "Resume Screening AI",
        description: "Automatically filter and rank candidates based on skills, experience, and job fit with our machine learning models.",
        icon: "📄",
        details: &[
            "Analyze hundreds of resumes in minutes",
            "Identify top candidates with skill-matching algorithms",
            "Reduce bias in the screening process",
            "Track candidate qualifications with detailed scoring",
            "Support for PDF, DOCX and LinkedIn profiles",
            "Create custom screening criteria for your specific requirements",
        ],
    },
    Feature {
        id: "chatbot",
        title: "Pre-Screening AI Chatbot",
        description: "Conduct real-time interviews and assess candidates before the human interview stage with conversational AI that adapts to each response.",
        icon: "💬",
        details: &[
            "Ask job-specific questions that evaluate technical knowledge",
            "Assess communication skills and problem-solving abilities",
            "Available 24/7 for candidate convenience",
            "Generate comprehensive interview reports",
            "Support for multiple languages and regionalized content",
            "Dynamic questioning that adapts to candidate responses",
        ],
    },
    Feature {
        id: "testing",
        title: "Psychoanalytical Testing",
        description: "Evaluate emotional intelligence, leadership skills, and cultural fit with scientifically validated assessment tools.",
        icon: "🧠",
        details: &[
            "Assess personality traits relevant to specific roles",
            "Evaluate cultural fit with your organization",
            "Identify leadership and growth potential",
            "Generate detailed reports with actionable insights",
            "Benchmark candidates against high performers in similar roles",
            "Customize assessments around your company values",
        ],
    },
    Feature {
        id: "offers",
        title: "Offer Letter Automation",
        description: "Generate professional offer letters instantly for selected candidates with customizable templates that match your brand.",
        icon: "📨",
        details: &[
            "Create customized offer letters with all relevant details",
            "Maintain consistent branding across all communications",
            "Track offer acceptance and follow-ups",
            "Integrate with your HRIS system for seamless onboarding",
            "Legal compliance checks for different regions",
            "Digital signing for a faster acceptance process",
        ],
    },
    Feature {
        id: "analytics",
        title: "Advanced Recruitment Analytics",
        description: "Gain deep insight into your hiring process with analytics and reporting that track every stage of recruitment.",
        icon: "📊",
        details: &[
            "Track time-to-fill, cost-per-hire and quality of hire",
            "Create custom dashboards for different stakeholders",
            "Forecast hiring needs from historical data",
            "Identify bottlenecks in your recruitment funnel",
            "Compare performance across teams and locations",
            "Export reports for executive presentations",
        ],
    },
    Feature {
        id: "scheduling",
        title: "Intelligent Interview Scheduling",
        description: "Eliminate scheduling headaches with AI-powered calendar coordination that finds the best interview times for everyone.",
        icon: "📅",
        details: &[
            "Find available time slots across multiple calendars",
            "Send smart reminders to reduce no-shows",
            "Support for multiple time zones",
            "Integration with Google Calendar, Outlook and other platforms",
            "Route candidates to custom interview panels",
            "Generate virtual meeting links for remote interviews",
        ],
    },
    Feature {
        id: "talent-pipeline",
        title: "Talent Pipeline Management",
        description: "Build and maintain a robust talent pipeline with AI-powered candidate relationship management.",
        icon: "🌟",
        details: &[
            "Organize candidates for future opportunities",
            "Run automated nurture campaigns to keep candidates engaged",
            "Get AI recommendations from past candidates when new positions open",
            "Track candidate engagement with your communications",
            "Stay compliant with data retention regulations",
            "Create talent pools by skills, experience and potential",
        ],
    },
];
