// web_app/model/pricing.rs - Plan price display
//
// Plans are priced monthly in rupees. Annual billing shows a 20% discount
// per month, rounded down to the rupee.

use serde::{Deserialize, Serialize};

use super::PricingPlan;

/// Discount applied to annual billing, in percent
pub const ANNUAL_DISCOUNT_PERCENT: u32 = 20;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BillingPeriod {
    #[default]
    Monthly,
    Annual,
}

impl std::fmt::Display for BillingPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BillingPeriod::Monthly => write!(f, "Monthly"),
            BillingPeriod::Annual => write!(f, "Annual (Save {}%)", ANNUAL_DISCOUNT_PERCENT),
        }
    }
}

impl BillingPeriod {
    /// Effective monthly price for this billing period
    pub fn monthly_price(&self, monthly: u32) -> u32 {
        match self {
            BillingPeriod::Monthly => monthly,
            BillingPeriod::Annual => monthly * (100 - ANNUAL_DISCOUNT_PERCENT) / 100,
        }
    }

    /// Suffix shown after a paid price
    pub fn price_suffix(&self) -> &'static str {
        match self {
            BillingPeriod::Monthly => "/month",
            BillingPeriod::Annual => "/month, billed annually",
        }
    }
}

/// Price label and suffix of a plan card ("Free" has no suffix)
pub fn plan_price_label(plan: &PricingPlan, period: BillingPeriod) -> (String, &'static str) {
    match plan.monthly_price {
        None => ("Free".to_string(), ""),
        Some(monthly) => (format_inr(period.monthly_price(monthly)), period.price_suffix()),
    }
}

/// Format rupees with Indian digit grouping ("150000" -> "₹1,50,000")
pub fn format_inr(amount: u32) -> String {
    let digits = amount.to_string();
    if digits.len() <= 3 {
        return format!("₹{}", digits);
    }

    let (head, last_three) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 2 {
        groups.push(&head[end - 2..end]);
        end -= 2;
    }
    groups.push(&head[..end]);
    groups.reverse();

    format!("₹{},{}", groups.join(","), last_three)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_annual_discount_rounds_down() {
        assert_eq!(BillingPeriod::Annual.monthly_price(2499), 1999);
        assert_eq!(BillingPeriod::Annual.monthly_price(8499), 6799);
        assert_eq!(BillingPeriod::Monthly.monthly_price(2499), 2499);
    }

    #[test]
    fn test_format_inr_grouping() {
        assert_eq!(format_inr(0), "₹0");
        assert_eq!(format_inr(999), "₹999");
        assert_eq!(format_inr(2499), "₹2,499");
        assert_eq!(format_inr(30_000), "₹30,000");
        assert_eq!(format_inr(150_000), "₹1,50,000");
        assert_eq!(format_inr(12_000_000), "₹1,20,00,000");
    }

    #[test]
    fn test_plan_price_label() {
        let free = PricingPlan {
            name: "Basic",
            monthly_price: None,
            description: "",
            features: &[],
            popular: false,
            cta: "Sign Up Free",
            cta_link: "/signup",
        };
        assert_eq!(plan_price_label(&free, BillingPeriod::Annual), ("Free".to_string(), ""));

        let pro = PricingPlan {
            name: "Pro",
            monthly_price: Some(2499),
            ..free
        };
        assert_eq!(
            plan_price_label(&pro, BillingPeriod::Monthly),
            ("₹2,499".to_string(), "/month")
        );
        assert_eq!(
            plan_price_label(&pro, BillingPeriod::Annual),
            ("₹1,999".to_string(), "/month, billed annually")
        );
    }

    #[test]
    fn test_billing_period_display() {
        assert_eq!(BillingPeriod::Monthly.to_string(), "Monthly");
        assert_eq!(BillingPeriod::Annual.to_string(), "Annual (Save 20%)");
        assert_eq!(BillingPeriod::default(), BillingPeriod::Monthly);
    }
}
