use serde::{Deserialize, Serialize};

use super::aggregate::AdviserId;

/// Body for `PUT /goals/{adviserId}` and `PUT /goals/all`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalRequest {
    pub year: i32,
    pub month: u32,
    pub goal: f64,
}

/// Body for `POST /sales/add`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddSaleRequest {
    pub adviser_id: AdviserId,
    pub amount: f64,
    /// Local wall-clock timestamp with a literal `Z` suffix; see
    /// `date_utils::format_sale_timestamp` in the frontend.
    pub sale_date: String,
}

/// Body for `PUT /monthly-summary/by-adviser/{adviserId}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlySalesRequest {
    pub year: i32,
    pub month: u32,
    pub total_sales: f64,
}
