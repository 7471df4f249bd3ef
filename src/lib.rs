//! # Subscription Spend Engine
//!
//! A library for turning a list of recurring subscriptions with mixed billing
//! cycles into comparable spend totals and proportional chart geometry.
//!
//! ## Core Concepts
//!
//! - **Billing cycle**: how often a subscription charges (monthly, quarterly, yearly)
//! - **Reporting period**: the unit every amount is normalized into for one report
//! - **Sector**: one wedge of the spend chart, with its share and start/end angle
//! - **Arc path**: move + arc drawing commands for a sector, renderable as SVG
//! - **Fail-soft**: unsupported cycles and periods contribute `0` unless `strict` is set
//!
//! ## Example
//!
//! ```rust
//! use subscription_spend_engine::*;
//!
//! let subscriptions = vec![
//!     Subscription::new("1", "Streaming", 20.0, BillingCycle::Monthly),
//!     Subscription::new("2", "Cloud storage", 120.0, BillingCycle::Yearly),
//! ];
//!
//! assert_eq!(total_for_period(&subscriptions, ReportingPeriod::Monthly), 30.0);
//!
//! let report = build_spend_report(&subscriptions, &ReportConfig::default()).unwrap();
//! assert_eq!(report.chart.sectors.len(), 2);
//! assert_eq!(report.chart.sectors[0].subscription.name, "Streaming");
//! ```

pub mod aggregator;
pub mod arc;
pub mod chart;
pub mod config;
pub mod error;
pub mod ingestion;
pub mod normalizer;
pub mod renewals;
pub mod schema;
pub mod utils;

pub use aggregator::{
    budget_status, category_key, total_for_period, totals_by_category, try_total_for_period,
    BudgetStatus, CategoryTotal, UNCATEGORIZED,
};
pub use arc::{describe_arc, polar_to_cartesian, sector_paths, ArcPath, PathCommand, Point, SectorPath};
pub use chart::{build_chart_data, ChartData, ChartSector, CHART_START_ANGLE};
pub use config::{ChartGeometry, ReportConfig};
pub use error::{Result, SpendError};
pub use ingestion::{convert_rows_to_subscriptions, SubscriptionRow};
pub use normalizer::{amount_for_period, try_amount_for_period};
pub use renewals::{next_renewal, upcoming_renewals, RenewalReminder};
pub use schema::*;

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

/// Everything the spend views need for one reporting period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpendReport {
    pub period: ReportingPeriod,
    pub total_for_period: f64,
    pub chart: ChartData,
    pub sector_paths: Vec<SectorPath>,
    pub categories: Vec<CategoryTotal>,
    pub budgets: Vec<BudgetStatus>,
    pub renewals: Vec<RenewalReminder>,
}

pub struct SpendReportProcessor;

impl SpendReportProcessor {
    pub fn process(subscriptions: &[Subscription], config: &ReportConfig) -> Result<SpendReport> {
        config.validate()?;

        info!(
            "Building {} spend report for {} subscriptions",
            config.period,
            subscriptions.len()
        );

        if config.strict {
            let total = try_total_for_period(subscriptions, config.period)?;
            debug!("Strict check passed, {} total {:.2}", config.period, total);
        } else {
            let skipped = subscriptions
                .iter()
                .filter(|s| try_amount_for_period(s, config.period).is_err())
                .count();
            if skipped > 0 {
                warn!(
                    "{} subscriptions contribute 0 to the {} total (unsupported period or billing cycle)",
                    skipped, config.period
                );
            }
        }

        let chart = build_chart_data(subscriptions, config.period);
        let ChartGeometry {
            center_x,
            center_y,
            radius,
        } = config.chart;
        let sector_paths = sector_paths(&chart, center_x, center_y, radius);

        let categories = totals_by_category(subscriptions, config.period);

        let budgets: Vec<BudgetStatus> = config
            .budgets
            .iter()
            .map(|budget| budget_status(budget, subscriptions))
            .collect();
        for status in budgets.iter().filter(|s| s.over_budget) {
            info!(
                "Budget '{}' exceeded: {:.2} spent of {:.2}",
                status.budget.name, status.spent, status.budget.limit
            );
        }

        let renewals = match config.today {
            Some(today) => upcoming_renewals(subscriptions, today, config.renewal_window_days),
            None => Vec::new(),
        };

        Ok(SpendReport {
            period: config.period,
            total_for_period: chart.total_for_period,
            chart,
            sector_paths,
            categories,
            budgets,
            renewals,
        })
    }
}

pub fn build_spend_report(subscriptions: &[Subscription], config: &ReportConfig) -> Result<SpendReport> {
    SpendReportProcessor::process(subscriptions, config)
}
