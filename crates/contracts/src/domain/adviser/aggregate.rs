use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

// ============================================================================
// ID Type
// ============================================================================

/// Backend-assigned adviser identifier.
///
/// The REST backend hands out numeric ids; the client never generates one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AdviserId(pub i64);

impl AdviserId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }

    /// Parse an id from user-facing input (route segment, form field).
    ///
    /// Blank or non-numeric input is rejected here, so every use case can
    /// rely on receiving a well-formed id.
    pub fn parse(s: &str) -> AppResult<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(AppError::validation("El ID del asesor es requerido!"));
        }
        trimmed
            .parse::<i64>()
            .map(AdviserId::new)
            .map_err(|_| AppError::validation("El ID del asesor es requerido!"))
    }
}

impl std::fmt::Display for AdviserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

// ============================================================================
// Entities
// ============================================================================

/// One month of accumulated sales for a single adviser.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlySummary {
    pub id: i64,
    pub year: i32,
    pub month: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal: Option<f64>,
    pub total_sales: f64,
}

/// A salesperson tracked by the system.
///
/// `sales` is the cumulative figure the backend maintains;
/// `current_month_sales` and `upt` only appear on endpoints that compute
/// them. `upt` arrives already formatted for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Adviser {
    pub id: AdviserId,
    pub name: String,
    pub last_name: String,
    pub sales: f64,
    pub goal_value: f64,
    pub active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_month_sales: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_summaries: Option<Vec<MonthlySummary>>,
}

impl Adviser {
    /// Display name used in tables, cards and toasts.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.name, self.last_name)
    }
}

/// Payload for creating an adviser; the backend assigns the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAdviser {
    pub name: String,
    pub last_name: String,
    pub sales: f64,
    pub goal_value: f64,
    pub active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_rejects_blank_id() {
        let err = AdviserId::parse("   ").unwrap_err();
        assert_eq!(
            err,
            AppError::Validation("El ID del asesor es requerido!".into())
        );
    }

    #[test]
    fn parse_rejects_non_numeric_id() {
        assert!(AdviserId::parse("abc").is_err());
    }

    #[test]
    fn parse_accepts_numeric_id() {
        assert_eq!(AdviserId::parse("42").unwrap(), AdviserId::new(42));
        assert_eq!(AdviserId::parse(" 7 ").unwrap(), AdviserId::new(7));
    }

    #[test]
    fn adviser_deserializes_backend_shape() {
        let json = r#"{
            "id": 3,
            "name": "Laura",
            "lastName": "Gómez",
            "sales": 2500000.0,
            "goalValue": 4000000.0,
            "active": true,
            "currentMonthSales": 1200000.0,
            "upt": "1.8"
        }"#;
        let adviser: Adviser = serde_json::from_str(json).unwrap();
        assert_eq!(adviser.id, AdviserId::new(3));
        assert_eq!(adviser.last_name, "Gómez");
        assert_eq!(adviser.current_month_sales, Some(1_200_000.0));
        assert_eq!(adviser.upt.as_deref(), Some("1.8"));
        assert!(adviser.monthly_summaries.is_none());
        assert_eq!(adviser.full_name(), "Laura Gómez");
    }
}
