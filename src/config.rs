use crate::error::{Result, SpendError};
use crate::schema::{Budget, ReportingPeriod};
use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ChartGeometry {
    #[schemars(description = "X coordinate of the chart center in drawing units")]
    pub center_x: f64,

    #[schemars(description = "Y coordinate of the chart center in drawing units")]
    pub center_y: f64,

    #[schemars(description = "Outer radius of the chart. Must be positive.")]
    pub radius: f64,
}

impl Default for ChartGeometry {
    fn default() -> Self {
        Self {
            center_x: 100.0,
            center_y: 100.0,
            radius: 80.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ReportConfig {
    #[schemars(description = "Unit every amount is normalized into. Defaults to monthly.")]
    pub period: ReportingPeriod,

    #[schemars(
        description = "When true, unsupported periods and billing cycles fail the report instead of contributing 0."
    )]
    pub strict: bool,

    #[schemars(description = "Where and how large the spend chart is drawn")]
    pub chart: ChartGeometry,

    #[schemars(description = "Budgets to evaluate against the subscriptions")]
    pub budgets: Vec<Budget>,

    #[schemars(description = "How many days ahead renewal reminders look")]
    pub renewal_window_days: u32,

    #[schemars(
        description = "Reference date for renewal reminders in YYYY-MM-DD format. Reminders are skipped when absent."
    )]
    pub today: Option<NaiveDate>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            period: ReportingPeriod::Monthly,
            strict: false,
            chart: ChartGeometry::default(),
            budgets: Vec::new(),
            renewal_window_days: 7,
            today: None,
        }
    }
}

impl ReportConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn validate(&self) -> Result<()> {
        let ChartGeometry {
            center_x,
            center_y,
            radius,
        } = self.chart;

        if !center_x.is_finite() || !center_y.is_finite() {
            return Err(SpendError::InvalidChartGeometry(format!(
                "center ({}, {}) must be finite",
                center_x, center_y
            )));
        }

        if !radius.is_finite() || radius <= 0.0 {
            return Err(SpendError::InvalidChartGeometry(format!(
                "radius {} must be a positive number",
                radius
            )));
        }

        if self.strict && self.period == ReportingPeriod::Unsupported {
            return Err(SpendError::UnsupportedPeriod);
        }

        for budget in &self.budgets {
            if !budget.limit.is_finite() || budget.limit < 0.0 {
                return Err(SpendError::InvalidConfig(format!(
                    "budget '{}' has invalid limit {}",
                    budget.name, budget.limit
                )));
            }
        }

        Ok(())
    }
}
