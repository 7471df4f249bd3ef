use crate::error::{Result, SpendError};
use crate::schema::{BillingCycle, ReportingPeriod, Subscription};

/// Expresses a subscription's per-cycle charge as a charge per `target` period.
///
/// Unsupported targets and unsupported billing cycles (weekly, unknown)
/// contribute `0.0` so that a single odd record never aborts an aggregation.
/// Use [`try_amount_for_period`] to surface those cases as errors instead.
pub fn amount_for_period(subscription: &Subscription, target: ReportingPeriod) -> f64 {
    try_amount_for_period(subscription, target).unwrap_or(0.0)
}

/// Strict variant of [`amount_for_period`].
pub fn try_amount_for_period(subscription: &Subscription, target: ReportingPeriod) -> Result<f64> {
    let amount = subscription.amount;

    let converted = match (target, subscription.billing_cycle) {
        (ReportingPeriod::Unsupported, _) => return Err(SpendError::UnsupportedPeriod),

        (_, cycle @ (BillingCycle::Weekly | BillingCycle::Unknown)) => {
            return Err(SpendError::UnsupportedCycle {
                subscription: subscription.name.clone(),
                cycle: cycle.to_string(),
            })
        }

        (ReportingPeriod::Monthly, BillingCycle::Yearly) => amount / 12.0,
        (ReportingPeriod::Monthly, BillingCycle::Quarterly) => amount / 3.0,
        (ReportingPeriod::Monthly, BillingCycle::Monthly) => amount,

        (ReportingPeriod::Quarterly, BillingCycle::Yearly) => amount / 4.0,
        (ReportingPeriod::Quarterly, BillingCycle::Monthly) => amount * 3.0,
        (ReportingPeriod::Quarterly, BillingCycle::Quarterly) => amount,

        (ReportingPeriod::Yearly, BillingCycle::Monthly) => amount * 12.0,
        (ReportingPeriod::Yearly, BillingCycle::Quarterly) => amount * 4.0,
        (ReportingPeriod::Yearly, BillingCycle::Yearly) => amount,
    };

    Ok(converted)
}
