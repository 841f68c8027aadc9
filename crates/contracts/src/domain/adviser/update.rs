use serde::Serialize;

/// Partial update for an adviser.
///
/// Exactly one optional slot per field the backend accepts on
/// `PUT /advisers/{id}`; absent fields are left out of the JSON body so
/// the backend keeps their current values. Built through the fluent
/// methods, so a caller can only ever express legal field combinations.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdviserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sales: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal_value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upt: Option<String>,
}

impl AdviserUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = Some(last_name.into());
        self
    }

    pub fn sales(mut self, sales: f64) -> Self {
        self.sales = Some(sales);
        self
    }

    pub fn goal_value(mut self, goal_value: f64) -> Self {
        self.goal_value = Some(goal_value);
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = Some(active);
        self
    }

    pub fn upt(mut self, upt: impl Into<String>) -> Self {
        self.upt = Some(upt.into());
        self
    }

    /// True when no field was set; the update would be a no-op.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.last_name.is_none()
            && self.sales.is_none()
            && self.goal_value.is_none()
            && self.active.is_none()
            && self.upt.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_fields_stay_off_the_wire() {
        let update = AdviserUpdate::new().goal_value(3_000_000.0);
        let body = serde_json::to_string(&update).unwrap();
        assert_eq!(body, r#"{"goalValue":3000000.0}"#);
    }

    #[test]
    fn empty_update_is_detectable() {
        assert!(AdviserUpdate::new().is_empty());
        assert!(!AdviserUpdate::new().name("Ana").is_empty());
    }
}
