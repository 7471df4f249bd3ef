use crate::error::{Result, SpendError};
use crate::schema::BillingCycle;
use chrono::{Datelike, Days, Months, NaiveDate};

/// Calendar months between two dates, ignoring the day of month.
pub fn months_between(start: NaiveDate, end: NaiveDate) -> i32 {
    let year_diff = end.year() - start.year();
    let month_diff = end.month() as i32 - start.month() as i32;
    year_diff * 12 + month_diff
}

/// Length of one billing cycle in calendar months. `None` for cycles that are
/// not month based.
pub fn cycle_months(cycle: BillingCycle) -> Option<u32> {
    match cycle {
        BillingCycle::Monthly => Some(1),
        BillingCycle::Quarterly => Some(3),
        BillingCycle::Yearly => Some(12),
        BillingCycle::Weekly | BillingCycle::Unknown => None,
    }
}

/// The date `count` billing cycles after `anchor`.
///
/// Month based cycles are always measured from the anchor, so a charge on the
/// 31st lands on the last day of shorter months without drifting afterwards.
pub fn advance_by_cycles(anchor: NaiveDate, cycle: BillingCycle, count: u32) -> Option<NaiveDate> {
    match cycle {
        BillingCycle::Weekly => anchor.checked_add_days(Days::new(7 * u64::from(count))),
        BillingCycle::Unknown => None,
        _ => {
            let step = cycle_months(cycle)?;
            anchor.checked_add_months(Months::new(step.checked_mul(count)?))
        }
    }
}

/// Parses a `YYYY-MM-DD` date string.
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| {
        SpendError::DateError(format!(
            "Invalid date '{}'. Expected YYYY-MM-DD",
            value.trim()
        ))
    })
}
