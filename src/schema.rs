use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum BillingCycle {
    #[schemars(
        description = "Charged every 7 days. Accepted by the data model but not converted by the period normalizer (contributes 0)."
    )]
    Weekly,

    #[schemars(description = "Charged once per calendar month")]
    Monthly,

    #[schemars(description = "Charged once every three calendar months")]
    Quarterly,

    #[schemars(description = "Charged once per year")]
    Yearly,

    /// Any cycle string the engine does not recognize.
    #[serde(other)]
    #[schemars(description = "Unrecognized billing cycle; contributes 0 to every total")]
    Unknown,
}

impl fmt::Display for BillingCycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Quarterly => "quarterly",
            Self::Yearly => "yearly",
            Self::Unknown => "unknown",
        };
        f.write_str(label)
    }
}

/// The unit every amount is normalized into for one aggregation call.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ReportingPeriod {
    #[schemars(description = "Express every subscription as a per-month cost")]
    Monthly,

    #[schemars(description = "Express every subscription as a per-quarter cost")]
    Quarterly,

    #[schemars(description = "Express every subscription as a per-year cost")]
    Yearly,

    /// Any other period selector coming from UI state. Normalizes to zero.
    #[serde(other)]
    #[schemars(description = "Unrecognized reporting period; every amount normalizes to 0")]
    Unsupported,
}

impl Default for ReportingPeriod {
    fn default() -> Self {
        Self::Monthly
    }
}

impl fmt::Display for ReportingPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Monthly => "monthly",
            Self::Quarterly => "quarterly",
            Self::Yearly => "yearly",
            Self::Unsupported => "unsupported",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    #[schemars(description = "Stable unique identifier of the subscription")]
    pub id: String,

    #[schemars(description = "Display label, e.g. 'Netflix' or 'Cloud Storage'")]
    pub name: String,

    #[schemars(
        description = "Charge per billing cycle. Zero is allowed and is excluded from chart sectors; negative values pass through arithmetic unchanged."
    )]
    pub amount: f64,

    #[schemars(description = "How often the amount is charged")]
    pub billing_cycle: BillingCycle,

    #[serde(default)]
    #[schemars(description = "Free-form grouping such as 'Streaming' or 'Utilities'")]
    pub category: Option<String>,

    #[serde(default)]
    #[schemars(description = "Display colour, passed through untouched")]
    pub color: Option<String>,

    #[serde(default)]
    #[schemars(description = "Logo URL or asset key, passed through untouched")]
    pub logo: Option<String>,

    #[serde(default)]
    #[schemars(description = "Date of the first charge in YYYY-MM-DD format")]
    pub start_date: Option<NaiveDate>,

    #[serde(default)]
    #[schemars(description = "Date of the next scheduled charge in YYYY-MM-DD format")]
    pub next_billing_date: Option<NaiveDate>,
}

impl Subscription {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        amount: f64,
        billing_cycle: BillingCycle,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            amount,
            billing_cycle,
            category: None,
            color: None,
            logo: None,
            start_date: None,
            next_billing_date: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_next_billing_date(mut self, date: NaiveDate) -> Self {
        self.next_billing_date = Some(date);
        self
    }

    pub fn with_start_date(mut self, date: NaiveDate) -> Self {
        self.start_date = Some(date);
        self
    }

    pub fn generate_json_schema() -> schemars::schema::RootSchema {
        schemars::schema_for!(Vec<Subscription>)
    }

    pub fn schema_as_json() -> Result<String, serde_json::Error> {
        let schema = Self::generate_json_schema();
        serde_json::to_string_pretty(&schema)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Budget {
    #[schemars(description = "Label shown next to the budget, e.g. 'Entertainment'")]
    pub name: String,

    #[schemars(description = "Spending ceiling for one reporting period")]
    pub limit: f64,

    #[serde(default)]
    #[schemars(description = "The period the limit applies to. Defaults to monthly.")]
    pub period: ReportingPeriod,

    #[serde(default)]
    #[schemars(
        description = "Only subscriptions in this category count against the budget. When absent, every subscription counts."
    )]
    pub category: Option<String>,
}
