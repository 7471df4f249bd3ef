use crate::error::{Result, SpendError};
use crate::schema::{BillingCycle, Subscription};
use crate::utils::parse_date;
use log::warn;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A subscription as handed over by a CSV export or a loosely typed API payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubscriptionRow {
    pub id: String,
    pub name: String,
    pub amount: f64,
    pub billing_cycle: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub logo: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub next_billing_date: String,
}

impl FromStr for BillingCycle {
    type Err = SpendError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "weekly" => Ok(Self::Weekly),
            "monthly" => Ok(Self::Monthly),
            "quarterly" => Ok(Self::Quarterly),
            "yearly" | "annual" | "annually" => Ok(Self::Yearly),
            _ => Err(SpendError::InvalidBillingCycle(s.to_string())),
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn optional_date(value: &str) -> Result<Option<chrono::NaiveDate>> {
    non_empty(value).map(|v| parse_date(&v)).transpose()
}

/// Converts raw rows into subscriptions.
///
/// Unrecognized billing cycles become [`BillingCycle::Unknown`] so the row
/// still shows up in listings; malformed dates are rejected.
pub fn convert_rows_to_subscriptions(rows: &[SubscriptionRow]) -> Result<Vec<Subscription>> {
    rows.iter()
        .map(|row| {
            let billing_cycle = row.billing_cycle.parse::<BillingCycle>().unwrap_or_else(|e| {
                warn!("Subscription '{}' ({}): {}", row.name, row.id, e);
                BillingCycle::Unknown
            });

            Ok(Subscription {
                id: row.id.trim().to_string(),
                name: row.name.trim().to_string(),
                amount: row.amount,
                billing_cycle,
                category: non_empty(&row.category),
                color: non_empty(&row.color),
                logo: non_empty(&row.logo),
                start_date: optional_date(&row.start_date)?,
                next_billing_date: optional_date(&row.next_billing_date)?,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn row(cycle: &str) -> SubscriptionRow {
        SubscriptionRow {
            id: "sub-1".to_string(),
            name: " Spotify ".to_string(),
            amount: 9.99,
            billing_cycle: cycle.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_parse_billing_cycle() {
        assert_eq!("Monthly".parse::<BillingCycle>().unwrap(), BillingCycle::Monthly);
        assert_eq!(" QUARTERLY ".parse::<BillingCycle>().unwrap(), BillingCycle::Quarterly);
        assert_eq!("annual".parse::<BillingCycle>().unwrap(), BillingCycle::Yearly);
        assert_eq!("weekly".parse::<BillingCycle>().unwrap(), BillingCycle::Weekly);
        assert!(matches!(
            "biweekly".parse::<BillingCycle>(),
            Err(SpendError::InvalidBillingCycle(_))
        ));
    }

    #[test]
    fn test_convert_rows() {
        let mut full = row("yearly");
        full.category = "Music".to_string();
        full.next_billing_date = "2024-09-01".to_string();

        let subs = convert_rows_to_subscriptions(&[full, row("every other tuesday")]).unwrap();

        assert_eq!(subs.len(), 2);
        assert_eq!(subs[0].name, "Spotify");
        assert_eq!(subs[0].billing_cycle, BillingCycle::Yearly);
        assert_eq!(subs[0].category.as_deref(), Some("Music"));
        assert_eq!(subs[0].color, None);
        assert_eq!(subs[0].next_billing_date, NaiveDate::from_ymd_opt(2024, 9, 1));
        assert_eq!(subs[1].billing_cycle, BillingCycle::Unknown);
    }

    #[test]
    fn test_malformed_date_is_rejected() {
        let mut bad = row("monthly");
        bad.start_date = "last spring".to_string();
        assert!(matches!(
            convert_rows_to_subscriptions(&[bad]),
            Err(SpendError::DateError(_))
        ));
    }
}
