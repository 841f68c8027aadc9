//! Weekly sales comparison for one adviser.
//!
//! The generate endpoint returns a loosely-shaped document; older backend
//! builds used `percentageChange` where newer ones use `growthPercentage`.
//! The mapping below accepts both, exactly like the consuming UI always has.

use serde::{Deserialize, Serialize};

/// Raw document from `POST /api/v1/weekly-comparisons/generate/adviser/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyComparisonResponse {
    #[serde(default)]
    pub adviser_id: Option<i64>,
    #[serde(default)]
    pub adviser_name: Option<String>,
    #[serde(default)]
    pub week_number: Option<u32>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub month: Option<u32>,
    #[serde(default)]
    pub current_week_sales: Option<f64>,
    #[serde(default)]
    pub previous_week_sales: Option<f64>,
    #[serde(default)]
    pub growth_percentage: Option<f64>,
    #[serde(default)]
    pub percentage_change: Option<f64>,
}

/// View-facing comparison, normalized from the raw response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyComparison {
    pub week_number: u32,
    pub current_week_sales: f64,
    pub previous_week_sales: f64,
    pub percentage_change: f64,
    pub is_positive: bool,
}

impl WeeklyComparisonResponse {
    pub fn into_comparison(self) -> WeeklyComparison {
        let percentage_change = self
            .growth_percentage
            .or(self.percentage_change)
            .unwrap_or(0.0);

        WeeklyComparison {
            week_number: self.week_number.unwrap_or(1),
            current_week_sales: self.current_week_sales.unwrap_or(0.0),
            previous_week_sales: self.previous_week_sales.unwrap_or(0.0),
            percentage_change,
            is_positive: percentage_change >= 0.0,
        }
    }
}

/// Body for the current-week and previous-week edit endpoints.
/// The backend reads the `currentWeekSales` key on both of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyComparisonUpdate {
    pub current_week_sales: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn growth_percentage_wins_over_percentage_change() {
        let raw = WeeklyComparisonResponse {
            growth_percentage: Some(12.5),
            percentage_change: Some(-3.0),
            ..Default::default()
        };
        let c = raw.into_comparison();
        assert_eq!(c.percentage_change, 12.5);
        assert!(c.is_positive);
    }

    #[test]
    fn falls_back_to_percentage_change_then_zero() {
        let raw = WeeklyComparisonResponse {
            percentage_change: Some(-3.0),
            ..Default::default()
        };
        let c = raw.into_comparison();
        assert_eq!(c.percentage_change, -3.0);
        assert!(!c.is_positive);

        let empty = WeeklyComparisonResponse::default().into_comparison();
        assert_eq!(empty.percentage_change, 0.0);
        // Zero change counts as positive, matching the badge the UI shows.
        assert!(empty.is_positive);
        assert_eq!(empty.week_number, 1);
    }
}
