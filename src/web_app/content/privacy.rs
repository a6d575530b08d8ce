// web_app/content/privacy.rs - Privacy policy text

use crate::web_app::model::PolicySection;

pub const POLICY_LAST_UPDATED: &str = "June 15, 2023";

pub const PRIVACY_POLICY: &[PolicySection] = &[
    PolicySection {
        heading: "Introduction",
        paragraphs: &[
            "At HRGPTAI, we take your privacy seriously. This Privacy Policy explains how we collect, use, disclose, and safeguard your information when you use our AI-powered recruitment platform. If you do not agree with its terms, please do not access the platform.",
            "We may change this Privacy Policy at any time. We will alert you about changes by updating the \"Last updated\" date, and encourage you to review it periodically.",
        ],
        subsections: &[],
        bullets: &[],
        closing: &[],
    },
    PolicySection {
        heading: "Collection of Your Information",
        paragraphs: &["We may collect information about you in a variety of ways. The information we may collect via the Platform includes:"],
        subsections: &[
            (
                "Personal Data",
                "When you register we collect personally identifiable information such as your name, email address and company information. If you are a candidate assessed through our platform, we may collect your professional skills, work history, education and assessment results.",
            ),
            (
                "Derivative Data",
                "Our servers automatically collect information when you access the Platform, such as your IP address, browser type, operating system, access times and the pages viewed before and after. This is needed to keep the platform secure and operational.",
            ),
            (
                "AI-Generated Data",
                "When you use our AI recruitment tools we collect data on those interactions, including resume screening results, chatbot interview responses and psychoanalytical test results. It is used to deliver our services and improve the AI's performance.",
            ),
        ],
        bullets: &[],
        closing: &[],
    },
    PolicySection {
        heading: "Use of Your Information",
        paragraphs: &["Accurate information lets us provide a smooth, efficient, and customized experience. We may use information collected about you via the Platform to:"],
        subsections: &[],
        bullets: &[
            "Provide and deliver the recruitment services you request",
            "Create and manage your account",
            "Increase the efficiency and operation of the Platform",
            "Monitor and analyze usage and trends to improve your experience",
            "Notify you of updates to the Platform",
            "Offer new products, services, and recommendations",
            "Process payments and refunds",
            "Resolve disputes and troubleshoot problems",
            "Prevent fraudulent transactions and protect against criminal activity",
            "Train and improve our AI recruitment tools",
        ],
        closing: &[],
    },
    PolicySection {
        heading: "Disclosure of Your Information",
        paragraphs: &["We may share information we have collected about you in certain situations:"],
        subsections: &[
            (
                "By Law or to Protect Rights",
                "If release of your information is necessary to respond to legal process, to investigate or remedy potential violations of our policies, or to protect the rights, property, and safety of others, we may share it as permitted or required by applicable law.",
            ),
            (
                "Third-Party Service Providers",
                "We may share your information with third parties that perform services for us, including payment processing, data analysis, email delivery, hosting, customer service, and marketing assistance.",
            ),
            (
                "Business Transfers",
                "If we are involved in a merger, acquisition, or asset sale, your information may be transferred. We will give notice before it becomes subject to a different Privacy Policy.",
            ),
            (
                "Interactions with Other Users",
                "Other users of the Platform you interact with may see your profile, work activity, and anything you share in collaborative features.",
            ),
        ],
        bullets: &[],
        closing: &[],
    },
    PolicySection {
        heading: "Security of Your Information",
        paragraphs: &[
            "We use administrative, technical, and physical security measures to help protect your personal information. No security measure is perfect or impenetrable, and no method of data transmission can be guaranteed against interception or misuse.",
            "Any information disclosed online is vulnerable to interception by unauthorized parties, so we cannot guarantee complete security of personal information you provide.",
        ],
        subsections: &[],
        bullets: &[],
        closing: &[],
    },
    PolicySection {
        heading: "Data Retention",
        paragraphs: &["We retain your information for as long as your account is active or as needed to provide services. You can delete your account at any time; we will retain information only as necessary to comply with legal obligations, resolve disputes, and enforce our agreements."],
        subsections: &[],
        bullets: &[],
        closing: &[],
    },
    PolicySection {
        heading: "Cross-Border Data Transfers",
        paragraphs: &[
            "Your information, including personal data, may be transferred to and maintained on computers located outside your jurisdiction, where data protection laws may differ.",
            "If you are located outside the United States, we transfer your data to the United States and process it there. Submitting information under this Privacy Policy represents your agreement to that transfer.",
        ],
        subsections: &[],
        bullets: &[],
        closing: &[],
    },
    PolicySection {
        heading: "Your Rights Regarding Your Data",
        paragraphs: &["Depending on your location, you may have certain rights regarding your personal information, such as:"],
        subsections: &[],
        bullets: &[
            "The right to access personal information we hold about you",
            "The right to request correction of inaccurate personal information",
            "The right to request deletion of your personal information",
            "The right to object to processing of your personal information",
            "The right to data portability",
            "The right to withdraw consent",
        ],
        closing: &["To exercise these rights, please contact us at privacy@hrgptai.com."],
    },
    PolicySection {
        heading: "Contact Us",
        paragraphs: &["If you have questions or comments about this Privacy Policy, please contact us at:"],
        subsections: &[],
        bullets: &[],
        closing: &[
            "HRGPTAI, Inc.",
            "123 AI Boulevard",
            "San Francisco, CA 94105",
            "Email: privacy@hrgptai.com",
            "Phone: (800) HR-GPTAI",
        ],
    },
];
