// web_app/content/testimonials.rs - Customer companies and their testimonials
//
// Testimonials are filtered by company; the tab bar labels each company by
// its industry.

use crate::web_app::model::{Category, Company, Metric, Testimonial};

pub const COMPANIES: &[Company] = &[
    Company {
        id: "techcorp",
        name: "TechCorp",
        industry: "Software Development",
        logo: "https://placehold.co/200x80/0066FF/FFFFFF?text=TechCorp&font=montserrat",
        color: "#0066FF",
    },
    Company {
        id: "globalhr",
        name: "Global HR Solutions",
        industry: "HR Consulting",
        logo: "https://placehold.co/200x80/8800CC/FFFFFF?text=GlobalHR&font=montserrat",
        color: "#8800CC",
    },
    Company {
        id: "quickhire",
        name: "QuickHire Staffing",
        industry: "Staffing & Recruitment",
        logo: "https://placehold.co/200x80/FF6600/FFFFFF?text=QuickHire&font=montserrat",
        color: "#FF6600",
    },
    Company {
        id: "medtech",
        name: "MedTech Innovations",
        industry: "Healthcare Technology",
        logo: "https://placehold.co/200x80/00AA88/FFFFFF?text=MedTech&font=montserrat",
        color: "#00AA88",
    },
    Company {
        id: "retailmax",
        name: "RetailMax",
        industry: "Retail",
        logo: "https://placehold.co/200x80/DD0000/FFFFFF?text=RetailMax&font=montserrat",
        color: "#DD0000",
    },
    Company {
        id: "finedge",
        name: "FinEdge Capital",
        industry: "Financial Services",
        logo: "https://placehold.co/200x80/004488/FFFFFF?text=FinEdge&font=montserrat",
        color: "#004488",
    },
];

/// Company tabs, labelled by industry
pub const COMPANY_CATEGORIES: &[Category] = &[
    Category::new("all", "All Industries"),
    Category::new("techcorp", "Software Development"),
    Category::new("globalhr", "HR Consulting"),
    Category::new("quickhire", "Staffing & Recruitment"),
    Category::new("medtech", "Healthcare Technology"),
    Category::new("retailmax", "Retail"),
    Category::new("finedge", "Financial Services"),
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        id: "1",
        company_id: "techcorp",
        name: "Jennifer Lee",
        position: "VP of Talent Acquisition",
        avatar: "https://placehold.co/100x100/EEE/31343C?text=JL&font=montserrat",
        quote: "HRGPTAI has transformed our hiring process completely. We were spending 40+ hours screening candidates for each technical position. Now the AI does the heavy lifting and we only focus on the top 5 candidates for each role. Our time-to-hire has decreased by 70%, and the quality of hires has actually improved.",
        metrics: &[
            Metric { label: "Time to Hire", value: "70% Decrease" },
            Metric { label: "Candidate Quality", value: "35% Increase" },
            Metric { label: "HR Team Productivity", value: "60% Improvement" },
        ],
    },
    Testimonial {
        id: "2",
        company_id: "globalhr",
        name: "Marcus Johnson",
        position: "Chief People Officer",
        avatar: "https://placehold.co/100x100/EEE/31343C?text=MJ&font=montserrat",
        quote: "As a consulting firm, we've implemented HRGPTAI with dozens of our clients and the results have been consistently impressive. Screening resumes without human bias has led to more diverse hiring outcomes. One client increased their workforce diversity by 40% while reducing their recruitment costs.",
        metrics: &[
            Metric { label: "Cost per Hire", value: "65% Reduction" },
            Metric { label: "Diversity Hiring", value: "40% Increase" },
            Metric { label: "Client Satisfaction", value: "92% Positive" },
        ],
    },
    Testimonial {
        id: "3",
        company_id: "quickhire",
        name: "Sophia Rodriguez",
        position: "Director of Operations",
        avatar: "https://placehold.co/100x100/EEE/31343C?text=SR&font=montserrat",
        quote: "Our staffing agency handles thousands of candidates every month. Before HRGPTAI we had a team of 12 people just screening resumes; now 9 of them work on more valuable tasks. Candidates consistently rate the chatbot pre-screening as a positive experience, which reflects well on us and our clients.",
        metrics: &[
            Metric { label: "Staff Efficiency", value: "300% Improvement" },
            Metric { label: "Candidate Experience", value: "4.8/5 Rating" },
            Metric { label: "Monthly Placements", value: "45% More" },
        ],
    },
    Testimonial {
        id: "4",
        company_id: "medtech",
        name: "Dr. Robert Chen",
        position: "Head of Talent",
        avatar: "https://placehold.co/100x100/EEE/31343C?text=RC&font=montserrat",
        quote: "Healthcare technology needs candidates with both technical skills and healthcare knowledge. HRGPTAI identifies that rare combination better than human recruiters, and the psychological testing has been particularly valuable for ensuring cultural fit in our high-pressure environment.",
        metrics: &[
            Metric { label: "Specialized Talent Discovery", value: "85% Faster" },
            Metric { label: "Employee Retention", value: "38% Longer" },
            Metric { label: "Onboarding Success", value: "90% Rate" },
        ],
    },
    Testimonial {
        id: "5",
        company_id: "retailmax",
        name: "Aisha Patel",
        position: "Regional HR Manager",
        avatar: "https://placehold.co/100x100/EEE/31343C?text=AP&font=montserrat",
        quote: "With over 200 stores and constant hiring needs, RetailMax needed a solution that could scale. HRGPTAI handles thousands of applications for us each month, ranking candidates and scheduling interviews automatically. Our store managers spend 60% less time on hiring while making better hires that stay longer.",
        metrics: &[
            Metric { label: "Application Processing", value: "1000s Monthly" },
            Metric { label: "Manager Time Saved", value: "60% Reduction" },
            Metric { label: "Employee Turnover", value: "42% Lower" },
        ],
    },
    Testimonial {
        id: "6",
        company_id: "finedge",
        name: "Thomas Grant",
        position: "Senior VP of Human Resources",
        avatar: "https://placehold.co/100x100/EEE/31343C?text=TG&font=montserrat",
        quote: "In financial services, compliance is critical. HRGPTAI screens for required certifications and credentials automatically, reducing compliance risk. Offer letters are generated with all our legal requirements, so what used to take our legal team days to review now happens in minutes.",
        metrics: &[
            Metric { label: "Compliance Accuracy", value: "99.8%" },
            Metric { label: "Offer Generation Time", value: "Minutes vs Days" },
            Metric { label: "Legal Review Costs", value: "80% Savings" },
        ],
    },
];

pub fn company(id: &str) -> Option<&'static Company> {
    COMPANIES.iter().find(|c| c.id == id)
}
