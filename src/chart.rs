//! Proportional sector geometry for pie and donut charts.
//!
//! Sectors are laid out clockwise starting at 12 o'clock (`-90` degrees),
//! largest first. Each sector's share is taken against the total of the
//! *unfiltered* input, so zero and negative subscriptions dilute the visible
//! sectors even though they never get one of their own.

use crate::aggregator::total_for_period;
use crate::normalizer::amount_for_period;
use crate::schema::{ReportingPeriod, Subscription};
use log::debug;
use serde::{Deserialize, Serialize};

/// Angle, in degrees, at which the first sector starts.
pub const CHART_START_ANGLE: f64 = -90.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSector {
    pub subscription: Subscription,
    pub period_amount: f64,
    pub percentage: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    pub angle: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartData {
    pub sectors: Vec<ChartSector>,
    pub total_for_period: f64,
}

impl ChartData {
    pub fn is_empty(&self) -> bool {
        self.sectors.is_empty()
    }

    /// Sum of every sector's angle. `360` whenever all subscriptions are positive.
    pub fn swept_angle(&self) -> f64 {
        self.sectors.iter().map(|s| s.angle).sum()
    }
}

pub fn build_chart_data(subscriptions: &[Subscription], target: ReportingPeriod) -> ChartData {
    let total = total_for_period(subscriptions, target);

    if subscriptions.is_empty() || total == 0.0 {
        return ChartData::default();
    }

    let mut annotated: Vec<(&Subscription, f64)> = subscriptions
        .iter()
        .filter(|s| s.amount > 0.0)
        .map(|s| (s, amount_for_period(s, target)))
        .collect();

    // `sort_by` is stable: equal amounts keep their input order.
    annotated.sort_by(|a, b| b.1.total_cmp(&a.1));

    let (_, sectors) = annotated.into_iter().fold(
        (CHART_START_ANGLE, Vec::with_capacity(subscriptions.len())),
        |(cursor, mut sectors), (subscription, period_amount)| {
            let percentage = period_amount / total * 100.0;
            let angle = percentage / 100.0 * 360.0;
            let end_angle = cursor + angle;

            sectors.push(ChartSector {
                subscription: subscription.clone(),
                period_amount,
                percentage,
                start_angle: cursor,
                end_angle,
                angle,
            });

            (end_angle, sectors)
        },
    );

    debug!(
        "Built {} chart sectors from {} subscriptions ({} total {:.2})",
        sectors.len(),
        subscriptions.len(),
        target,
        total
    );

    ChartData {
        sectors,
        total_for_period: total,
    }
}
