use std::rc::Rc;

use super::update_goal::{validate_goal, validate_period};
use crate::domain::adviser::AdviserRepository;
use crate::error::{AppError, AppResult};

/// Minimum goal accepted when setting every adviser's goal at once.
/// Store policy: a blanket goal below this is assumed to be a typo.
pub const ALL_GOALS_FLOOR: f64 = 2_000_000.0;

/// Set the same goal for every adviser for a (year, month). Same period
/// checks as the single-adviser path, plus the store-wide floor.
pub struct UpdateAllGoalsUseCase {
    repository: Rc<dyn AdviserRepository>,
}

impl UpdateAllGoalsUseCase {
    pub fn new(repository: Rc<dyn AdviserRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, year: i32, month: u32, goal: f64) -> AppResult<()> {
        validate_period(year, month)?;
        validate_goal(goal)?;
        if goal < ALL_GOALS_FLOOR {
            return Err(AppError::validation(
                "La meta no puede ser menor a 2,000,000.",
            ));
        }
        self.repository.update_all_goals(year, month, goal).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::adviser::repository::MockAdviserRepository;

    #[tokio::test]
    async fn floor_is_inclusive() {
        let err = UpdateAllGoalsUseCase::new(Rc::new(MockAdviserRepository::new()))
            .execute(2024, 6, 1_999_999.0)
            .await
            .unwrap_err();
        assert_eq!(
            err,
            AppError::Validation("La meta no puede ser menor a 2,000,000.".into())
        );

        let mut mock = MockAdviserRepository::new();
        mock.expect_update_all_goals()
            .withf(|year, month, goal| *year == 2024 && *month == 6 && *goal == 2_000_000.0)
            .returning(|_, _, _| Ok(()));
        UpdateAllGoalsUseCase::new(Rc::new(mock))
            .execute(2024, 6, 2_000_000.0)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn period_rules_still_apply() {
        let err = UpdateAllGoalsUseCase::new(Rc::new(MockAdviserRepository::new()))
            .execute(1999, 6, 3_000_000.0)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
