use crate::error::Result;
use crate::normalizer::{amount_for_period, try_amount_for_period};
use crate::schema::{Budget, ReportingPeriod, Subscription};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const UNCATEGORIZED: &str = "Uncategorized";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: String,
    pub total: f64,
    pub subscription_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetStatus {
    pub budget: Budget,
    /// Normalized spend in the budget's own period
    pub spent: f64,
    /// `limit - spent`; negative once the budget is exceeded
    pub remaining: f64,
    pub percent_used: f64,
    pub over_budget: bool,
}

/// Sums every subscription's normalized amount, in input order, starting from zero.
///
/// Float addition is order sensitive in the last bits, so compare results
/// with a tolerance.
pub fn total_for_period(subscriptions: &[Subscription], target: ReportingPeriod) -> f64 {
    subscriptions
        .iter()
        .fold(0.0, |acc, sub| acc + amount_for_period(sub, target))
}

/// Strict variant of [`total_for_period`]: the first unsupported record aborts the sum.
pub fn try_total_for_period(subscriptions: &[Subscription], target: ReportingPeriod) -> Result<f64> {
    subscriptions.iter().try_fold(0.0, |acc, sub| {
        try_amount_for_period(sub, target).map(|amount| acc + amount)
    })
}

/// The category a subscription is grouped and budgeted under. Missing or
/// blank categories fall under [`UNCATEGORIZED`].
pub fn category_key(subscription: &Subscription) -> &str {
    subscription
        .category
        .as_deref()
        .filter(|c| !c.trim().is_empty())
        .unwrap_or(UNCATEGORIZED)
}

/// Groups normalized spend by category, largest first.
///
/// Categories with equal totals keep the order in which they first appear.
pub fn totals_by_category(
    subscriptions: &[Subscription],
    target: ReportingPeriod,
) -> Vec<CategoryTotal> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut totals: Vec<CategoryTotal> = Vec::new();

    for sub in subscriptions {
        let category = category_key(sub);

        let slot = *index.entry(category).or_insert_with(|| {
            totals.push(CategoryTotal {
                category: category.to_string(),
                total: 0.0,
                subscription_count: 0,
            });
            totals.len() - 1
        });

        totals[slot].total += amount_for_period(sub, target);
        totals[slot].subscription_count += 1;
    }

    totals.sort_by(|a, b| b.total.total_cmp(&a.total));
    totals
}

/// Compares a budget's limit against the subscriptions that count toward it.
pub fn budget_status(budget: &Budget, subscriptions: &[Subscription]) -> BudgetStatus {
    let (spent, count) = subscriptions
        .iter()
        .filter(|s| {
            budget
                .category
                .as_deref()
                .map_or(true, |category| category_key(s) == category)
        })
        .fold((0.0, 0usize), |(spent, count), s| {
            (spent + amount_for_period(s, budget.period), count + 1)
        });

    let percent_used = if budget.limit > 0.0 {
        spent / budget.limit * 100.0
    } else {
        0.0
    };
    let over_budget = spent > budget.limit;

    debug!(
        "Budget '{}': {:.2} of {:.2} ({} subscriptions)",
        budget.name,
        spent,
        budget.limit,
        count
    );

    BudgetStatus {
        budget: budget.clone(),
        spent,
        remaining: budget.limit - spent,
        percent_used,
        over_budget,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::BillingCycle;
    use crate::SpendError;

    fn portfolio() -> Vec<Subscription> {
        vec![
            Subscription::new("1", "Netflix", 15.0, BillingCycle::Monthly).with_category("Streaming"),
            Subscription::new("2", "Domain", 24.0, BillingCycle::Yearly).with_category("Web"),
            Subscription::new("3", "Spotify", 10.0, BillingCycle::Monthly).with_category("Streaming"),
            Subscription::new("4", "Backup", 30.0, BillingCycle::Quarterly),
        ]
    }

    #[test]
    fn test_empty_total_is_zero() {
        assert_eq!(total_for_period(&[], ReportingPeriod::Monthly), 0.0);
        assert_eq!(try_total_for_period(&[], ReportingPeriod::Yearly).unwrap(), 0.0);
    }

    #[test]
    fn test_total_matches_sum_of_parts() {
        let subs = portfolio();
        for period in [
            ReportingPeriod::Monthly,
            ReportingPeriod::Quarterly,
            ReportingPeriod::Yearly,
        ] {
            let expected: f64 = subs.iter().map(|s| amount_for_period(s, period)).sum();
            let total = total_for_period(&subs, period);
            assert!((total - expected).abs() < 1e-9);
        }

        // 15 + 2 + 10 + 10
        assert!((total_for_period(&subs, ReportingPeriod::Monthly) - 37.0).abs() < 1e-9);
    }

    #[test]
    fn test_lenient_total_skips_weekly_but_strict_fails() {
        let mut subs = portfolio();
        subs.push(Subscription::new("5", "Meal kit", 60.0, BillingCycle::Weekly));

        assert!((total_for_period(&subs, ReportingPeriod::Monthly) - 37.0).abs() < 1e-9);

        let err = try_total_for_period(&subs, ReportingPeriod::Monthly).unwrap_err();
        assert!(matches!(err, SpendError::UnsupportedCycle { .. }));
    }

    #[test]
    fn test_totals_by_category() {
        let subs = portfolio();
        let categories = totals_by_category(&subs, ReportingPeriod::Monthly);

        assert_eq!(categories.len(), 3);
        assert_eq!(categories[0].category, "Streaming");
        assert!((categories[0].total - 25.0).abs() < 1e-9);
        assert_eq!(categories[0].subscription_count, 2);
        assert_eq!(categories[1].category, UNCATEGORIZED);
        assert_eq!(categories[2].category, "Web");

        let sum: f64 = categories.iter().map(|c| c.total).sum();
        assert!((sum - total_for_period(&subs, ReportingPeriod::Monthly)).abs() < 1e-9);
    }

    #[test]
    fn test_category_ties_keep_first_seen_order() {
        let subs = vec![
            Subscription::new("1", "A", 5.0, BillingCycle::Monthly).with_category("Zeta"),
            Subscription::new("2", "B", 5.0, BillingCycle::Monthly).with_category("Alpha"),
        ];
        let categories = totals_by_category(&subs, ReportingPeriod::Monthly);
        assert_eq!(categories[0].category, "Zeta");
        assert_eq!(categories[1].category, "Alpha");
    }

    #[test]
    fn test_budget_status_by_category() {
        let subs = portfolio();
        let budget = Budget {
            name: "Streaming".to_string(),
            limit: 20.0,
            period: ReportingPeriod::Monthly,
            category: Some("Streaming".to_string()),
        };

        let status = budget_status(&budget, &subs);
        assert!((status.spent - 25.0).abs() < 1e-9);
        assert!((status.remaining + 5.0).abs() < 1e-9);
        assert!((status.percent_used - 125.0).abs() < 1e-9);
        assert!(status.over_budget);
    }

    #[test]
    fn test_budget_status_uses_budget_period() {
        let subs = portfolio();
        let budget = Budget {
            name: "Everything".to_string(),
            limit: 500.0,
            period: ReportingPeriod::Yearly,
            category: None,
        };

        let status = budget_status(&budget, &subs);
        assert!((status.spent - 444.0).abs() < 1e-9);
        assert!(!status.over_budget);
    }

    #[test]
    fn test_budget_on_uncategorized_matches_category_totals() {
        let subs = vec![
            Subscription::new("1", "Backup", 30.0, BillingCycle::Monthly),
            Subscription::new("2", "VPN", 5.0, BillingCycle::Monthly).with_category("  "),
            Subscription::new("3", "Netflix", 15.0, BillingCycle::Monthly).with_category("Streaming"),
        ];
        let categories = totals_by_category(&subs, ReportingPeriod::Monthly);
        assert_eq!(categories[0].category, UNCATEGORIZED);

        let budget = Budget {
            name: "Misc".to_string(),
            limit: 50.0,
            period: ReportingPeriod::Monthly,
            category: Some(UNCATEGORIZED.to_string()),
        };

        let status = budget_status(&budget, &subs);
        assert!((status.spent - categories[0].total).abs() < 1e-9);
        assert!((status.spent - 35.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_limit_budget() {
        let budget = Budget {
            name: "Nothing".to_string(),
            limit: 0.0,
            period: ReportingPeriod::Monthly,
            category: None,
        };

        let status = budget_status(&budget, &portfolio());
        assert_eq!(status.percent_used, 0.0);
        assert!(status.over_budget);

        let status = budget_status(&budget, &[]);
        assert!(!status.over_budget);
    }
}
