use serde::{Deserialize, Serialize};

/// Aggregated store-wide figures for one (year, month), computed by the
/// backend. Read-only on the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMetrics {
    pub total_sales: f64,
    pub total_goal: f64,
    pub active_advisers: u32,
    /// Store-level goal achievement, percent. Not capped.
    pub goal_achievement: f64,
    pub average_sales: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub best_adviser: Option<BestAdviser>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub best_upt_adviser: Option<BestAdviser>,
}

/// The adviser leading the period, by sales or by UPT.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BestAdviser {
    pub adviser_id: i64,
    pub adviser_name: String,
    pub total_sales: f64,
    pub total_goal: f64,
    pub goal_achievement: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upt: Option<f64>,
}
