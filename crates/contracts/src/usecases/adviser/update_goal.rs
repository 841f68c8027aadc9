use std::rc::Rc;

use chrono::{Datelike, Utc};

use crate::domain::adviser::{AdviserId, AdviserRepository};
use crate::error::{AppError, AppResult};

/// Set one adviser's goal for a (year, month).
///
/// Years are accepted from 2000 up to two years ahead, months 1..=12,
/// and the goal must be a non-negative number. Unlike creation, a goal of
/// exactly 0 is allowed here (it clears the target).
pub struct UpdateGoalUseCase {
    repository: Rc<dyn AdviserRepository>,
}

impl UpdateGoalUseCase {
    pub fn new(repository: Rc<dyn AdviserRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(
        &self,
        adviser_id: AdviserId,
        year: i32,
        month: u32,
        goal: f64,
    ) -> AppResult<()> {
        validate_period(year, month)?;
        validate_goal(goal)?;
        self.repository
            .update_goal(adviser_id, year, month, goal)
            .await
    }
}

pub(super) fn validate_period(year: i32, month: u32) -> AppResult<()> {
    let current_year = Utc::now().year();
    if year < 2000 || year > current_year + 2 {
        return Err(AppError::validation("El año proporcionado no es válido."));
    }
    if !(1..=12).contains(&month) {
        return Err(AppError::validation("El mes debe estar entre 1 y 12."));
    }
    Ok(())
}

pub(super) fn validate_goal(goal: f64) -> AppResult<()> {
    if goal.is_nan() || goal < 0.0 {
        return Err(AppError::validation(
            "La meta debe ser un número mayor o igual a 0.",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::adviser::repository::MockAdviserRepository;

    fn use_case(mock: MockAdviserRepository) -> UpdateGoalUseCase {
        UpdateGoalUseCase::new(Rc::new(mock))
    }

    #[tokio::test]
    async fn year_below_2000_is_rejected() {
        let err = use_case(MockAdviserRepository::new())
            .execute(AdviserId::new(1), 1999, 6, 1_000_000.0)
            .await
            .unwrap_err();
        assert_eq!(
            err,
            AppError::Validation("El año proporcionado no es válido.".into())
        );
    }

    #[tokio::test]
    async fn year_window_upper_bound_is_inclusive() {
        let current_year = Utc::now().year();

        let mut mock = MockAdviserRepository::new();
        mock.expect_update_goal().returning(|_, _, _, _| Ok(()));
        use_case(mock)
            .execute(AdviserId::new(1), current_year + 2, 6, 1_000_000.0)
            .await
            .unwrap();

        let err = use_case(MockAdviserRepository::new())
            .execute(AdviserId::new(1), current_year + 3, 6, 1_000_000.0)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn month_must_be_in_range() {
        for month in [0u32, 13] {
            let err = use_case(MockAdviserRepository::new())
                .execute(AdviserId::new(1), 2024, month, 1_000_000.0)
                .await
                .unwrap_err();
            assert_eq!(
                err,
                AppError::Validation("El mes debe estar entre 1 y 12.".into())
            );
        }
    }

    #[tokio::test]
    async fn goal_zero_is_allowed_negative_is_not() {
        let mut mock = MockAdviserRepository::new();
        mock.expect_update_goal().returning(|_, _, _, _| Ok(()));
        use_case(mock)
            .execute(AdviserId::new(1), 2024, 6, 0.0)
            .await
            .unwrap();

        let err = use_case(MockAdviserRepository::new())
            .execute(AdviserId::new(1), 2024, 6, -1.0)
            .await
            .unwrap_err();
        assert_eq!(
            err,
            AppError::Validation("La meta debe ser un número mayor o igual a 0.".into())
        );
    }
}
