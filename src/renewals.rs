use crate::schema::{BillingCycle, Subscription};
use crate::utils::{advance_by_cycles, cycle_months, months_between};
use chrono::NaiveDate;
use log::debug;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenewalReminder {
    pub subscription_id: String,
    pub name: String,
    pub renewal_date: NaiveDate,
    pub days_until: i64,
    /// Charge per billing cycle, i.e. what will be billed on `renewal_date`
    pub amount: f64,
    pub billing_cycle: BillingCycle,
}

/// The first billing date on or after `today`.
///
/// Counted from `next_billing_date`, falling back to `start_date`. Returns
/// `None` when the subscription has neither or an unknown cycle.
pub fn next_renewal(subscription: &Subscription, today: NaiveDate) -> Option<NaiveDate> {
    let anchor = subscription
        .next_billing_date
        .or(subscription.start_date)?;

    if anchor >= today {
        return Some(anchor);
    }

    let cycle = subscription.billing_cycle;
    let first_guess = match cycle {
        BillingCycle::Weekly => (today - anchor).num_days() / 7,
        BillingCycle::Unknown => return None,
        _ => i64::from(months_between(anchor, today)) / i64::from(cycle_months(cycle)?),
    };
    let first_guess = u32::try_from(first_guess.max(0)).ok()?;

    (first_guess..)
        .map(|count| advance_by_cycles(anchor, cycle, count))
        .take_while(Option::is_some)
        .flatten()
        .find(|date| *date >= today)
}

/// Renewals due within `within_days` of `today`, soonest first.
pub fn upcoming_renewals(
    subscriptions: &[Subscription],
    today: NaiveDate,
    within_days: u32,
) -> Vec<RenewalReminder> {
    let mut reminders: Vec<RenewalReminder> = subscriptions
        .iter()
        .filter_map(|sub| {
            let renewal_date = next_renewal(sub, today)?;
            let days_until = (renewal_date - today).num_days();
            (days_until <= i64::from(within_days)).then(|| RenewalReminder {
                subscription_id: sub.id.clone(),
                name: sub.name.clone(),
                renewal_date,
                days_until,
                amount: sub.amount,
                billing_cycle: sub.billing_cycle,
            })
        })
        .collect();

    reminders.sort_by_key(|r| r.renewal_date);

    debug!(
        "{} of {} subscriptions renew within {} days of {}",
        reminders.len(),
        subscriptions.len(),
        within_days,
        today
    );

    reminders
}
