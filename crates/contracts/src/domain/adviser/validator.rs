use super::aggregate::{Adviser, AdviserId, NewAdviser};
use super::update::AdviserUpdate;
use crate::error::{AppError, AppResult};

/// Stateless field validation for adviser data.
///
/// Stops at the first violated rule. Messages are exactly what the UI
/// shows in toasts.
#[derive(Debug, Clone, Copy, Default)]
pub struct AdviserValidator;

impl AdviserValidator {
    pub fn new() -> Self {
        Self
    }

    /// Full validation of a creation payload.
    pub fn validate_new_adviser(&self, adviser: &NewAdviser) -> AppResult<()> {
        if adviser.name.trim().is_empty() {
            return Err(AppError::validation("El nombre es requerido"));
        }
        if adviser.last_name.trim().is_empty() {
            return Err(AppError::validation("El apellido es requerido"));
        }
        Self::check_name_length(&adviser.name, &adviser.last_name)?;
        Self::check_sales(adviser.sales)?;
        Self::check_goal(adviser.goal_value)?;
        Ok(())
    }

    /// Partial validation: only the fields present in the update are checked,
    /// so callers never have to resupply untouched fields.
    pub fn validate_update(&self, update: &AdviserUpdate) -> AppResult<()> {
        if let Some(name) = &update.name {
            if name.trim().is_empty() {
                return Err(AppError::validation("El nombre es requerido"));
            }
        }
        if let Some(last_name) = &update.last_name {
            if last_name.trim().is_empty() {
                return Err(AppError::validation("El apellido es requerido"));
            }
        }
        if let Some(sales) = update.sales {
            Self::check_sales(sales)?;
        }
        if let Some(goal_value) = update.goal_value {
            Self::check_goal(goal_value)?;
        }
        if let Some(name) = &update.name {
            if name.chars().count() <= 2 {
                return Err(AppError::validation(
                    "El nombre debe tener al menos 2 caracteres",
                ));
            }
        }
        if let Some(last_name) = &update.last_name {
            if last_name.chars().count() <= 2 {
                return Err(AppError::validation(
                    "El apellido debe tener al menos 2 caracteres",
                ));
            }
        }
        Ok(())
    }

    /// Case-insensitive duplicate check of the (name, last name) pair
    /// against the given list, skipping `exclude_id` (the adviser being
    /// edited). The list must be freshly fetched by the caller; validating
    /// against a stale list defeats the check.
    pub fn validate_duplicate(
        &self,
        name: Option<&str>,
        last_name: Option<&str>,
        existing: &[Adviser],
        exclude_id: Option<AdviserId>,
    ) -> AppResult<()> {
        let (Some(name), Some(last_name)) = (name, last_name) else {
            return Ok(());
        };

        let name = name.to_lowercase();
        let last_name = last_name.to_lowercase();
        let duplicate = existing.iter().any(|a| {
            Some(a.id) != exclude_id
                && a.name.to_lowercase() == name
                && a.last_name.to_lowercase() == last_name
        });

        if duplicate {
            return Err(AppError::conflict(
                "Ya existe un asesor con ese nombre y apellido",
            ));
        }
        Ok(())
    }

    fn check_name_length(name: &str, last_name: &str) -> AppResult<()> {
        if name.chars().count() <= 2 {
            return Err(AppError::validation(
                "El nombre debe tener al menos 2 caracteres",
            ));
        }
        if last_name.chars().count() <= 2 {
            return Err(AppError::validation(
                "El apellido debe tener al menos 2 caracteres",
            ));
        }
        Ok(())
    }

    fn check_sales(sales: f64) -> AppResult<()> {
        if sales.is_nan() || sales < 0.0 {
            return Err(AppError::validation(
                "Las ventas deben ser un número positivo",
            ));
        }
        Ok(())
    }

    fn check_goal(goal_value: f64) -> AppResult<()> {
        if goal_value.is_nan() || goal_value <= 0.0 {
            return Err(AppError::validation("La meta debe ser un número positivo"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn adviser(id: i64, name: &str, last_name: &str) -> Adviser {
        Adviser {
            id: AdviserId::new(id),
            name: name.to_string(),
            last_name: last_name.to_string(),
            sales: 0.0,
            goal_value: 1_000_000.0,
            active: true,
            current_month_sales: None,
            upt: None,
            monthly_summaries: None,
        }
    }

    fn draft(name: &str, last_name: &str) -> NewAdviser {
        NewAdviser {
            name: name.to_string(),
            last_name: last_name.to_string(),
            sales: 0.0,
            goal_value: 1_000_000.0,
            active: true,
        }
    }

    #[test]
    fn rejects_blank_name() {
        let err = AdviserValidator::new()
            .validate_new_adviser(&draft("   ", "Smith"))
            .unwrap_err();
        assert_eq!(err, AppError::Validation("El nombre es requerido".into()));
    }

    #[test]
    fn rejects_two_character_name() {
        // Length 2 is not enough; the boundary is strict.
        let err = AdviserValidator::new()
            .validate_new_adviser(&draft("Jo", "Smith"))
            .unwrap_err();
        assert_eq!(
            err,
            AppError::Validation("El nombre debe tener al menos 2 caracteres".into())
        );
    }

    #[test]
    fn rejects_two_character_last_name() {
        let err = AdviserValidator::new()
            .validate_new_adviser(&draft("Joe", "Li"))
            .unwrap_err();
        assert_eq!(
            err,
            AppError::Validation("El apellido debe tener al menos 2 caracteres".into())
        );
    }

    #[test]
    fn rejects_negative_sales_and_nan() {
        let mut d = draft("Joe", "Smith");
        d.sales = -1.0;
        assert!(AdviserValidator::new().validate_new_adviser(&d).is_err());
        d.sales = f64::NAN;
        assert!(AdviserValidator::new().validate_new_adviser(&d).is_err());
    }

    #[test]
    fn rejects_zero_goal_on_creation() {
        let mut d = draft("Joe", "Smith");
        d.goal_value = 0.0;
        let err = AdviserValidator::new().validate_new_adviser(&d).unwrap_err();
        assert_eq!(
            err,
            AppError::Validation("La meta debe ser un número positivo".into())
        );
    }

    #[test]
    fn accepts_valid_draft() {
        assert!(AdviserValidator::new()
            .validate_new_adviser(&draft("Joe", "Smith"))
            .is_ok());
    }

    #[test]
    fn update_checks_only_present_fields() {
        // Goal alone: name rules must not fire.
        let update = AdviserUpdate::new().goal_value(2_000_000.0);
        assert!(AdviserValidator::new().validate_update(&update).is_ok());

        let update = AdviserUpdate::new().name("Jo");
        assert!(AdviserValidator::new().validate_update(&update).is_err());
    }

    #[test]
    fn duplicate_is_case_insensitive() {
        let existing = vec![adviser(1, "Joe", "Smith")];
        let err = AdviserValidator::new()
            .validate_duplicate(Some("joe"), Some("SMITH"), &existing, None)
            .unwrap_err();
        assert_eq!(
            err,
            AppError::Conflict("Ya existe un asesor con ese nombre y apellido".into())
        );
    }

    #[test]
    fn duplicate_skips_the_adviser_being_edited() {
        let existing = vec![adviser(1, "Joe", "Smith")];
        assert!(AdviserValidator::new()
            .validate_duplicate(
                Some("Joe"),
                Some("Smith"),
                &existing,
                Some(AdviserId::new(1))
            )
            .is_ok());
    }

    #[test]
    fn duplicate_check_passes_when_pair_is_incomplete() {
        let existing = vec![adviser(1, "Joe", "Smith")];
        assert!(AdviserValidator::new()
            .validate_duplicate(None, Some("Smith"), &existing, None)
            .is_ok());
    }
}
