use hrgptai_site::web_app::components::common::*;
use hrgptai_site::web_app::content::testimonials::TESTIMONIALS;
use leptos::prelude::*;

// Helper to create a runtime for tests
fn with_runtime<F>(f: F)
where
    F: FnOnce(),
{
    let owner = Owner::new();
    owner.with(f);
}

#[test]
fn test_spinner_instantiation() {
    with_runtime(|| {
        let _ = Spinner(SpinnerProps {
            message: "Loading...",
        });
        let _ = Spinner(SpinnerProps {
            message: "Sending...",
        });
    });
}

#[test]
fn test_button_instantiation() {
    with_runtime(|| {
        let pending = RwSignal::new(true);
        let _ = Button(ButtonProps {
            children: Box::new(move || view! { "Send Message" }.into_any()),
            on_click: None,
            disabled: pending.into(),
            button_type: "submit",
            class: "w-full",
        });
    });
}

#[test]
fn test_secondary_button_instantiation() {
    with_runtime(|| {
        let clicked = RwSignal::new(false);
        let _ = SecondaryButton(SecondaryButtonProps {
            children: Box::new(move || view! { "Clear filters" }.into_any()),
            on_click: Some(Callback::new(move |_: ()| clicked.set(true))),
            disabled: false,
        });
    });
}

#[test]
fn test_link_button_instantiation() {
    with_runtime(|| {
        for variant in ["primary", "light", "outline", "muted"] {
            let _ = LinkButton(LinkButtonProps {
                href: "/signup",
                children: Box::new(move || view! { "Start Free Trial" }.into_any()),
                variant,
                class: "",
            });
        }
    });
}

#[test]
fn test_badge_instantiation() {
    with_runtime(|| {
        let _ = Badge(BadgeProps {
            children: Box::new(move || view! { "MOST POPULAR" }.into_any()),
            variant: "popular",
        });
    });
}

#[test]
fn test_headings_instantiation() {
    with_runtime(|| {
        let _ = PageHero(PageHeroProps {
            title: "Frequently Asked Questions",
            subtitle: "Find answers to common questions.",
            eyebrow: None,
        });
        let _ = SectionHeading(SectionHeadingProps {
            title: "Real Results from Real Companies",
            subtitle: Some("See how organizations are transforming their hiring"),
            eyebrow: Some("SUCCESS STORIES"),
        });
    });
}

#[test]
fn test_cta_banner_instantiation() {
    with_runtime(|| {
        let _ = CtaBanner(CtaBannerProps {
            title: "Ready to Transform Your Hiring Process?",
            subtitle: "Start your free trial today.",
            children: Box::new(move || view! { <a href="/signup">"Start Free Trial"</a> }.into_any()),
        });
    });
}

#[test]
fn test_metric_grid_instantiation() {
    with_runtime(|| {
        let _ = MetricGrid(MetricGridProps {
            metrics: TESTIMONIALS[0].metrics,
        });
    });
}

#[test]
fn test_class_helpers() {
    assert!(badge_class("popular").contains("text-white"));
    assert!(link_button_class("primary").contains("from-primary"));
}
