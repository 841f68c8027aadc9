use std::rc::Rc;

use crate::domain::adviser::{Adviser, AdviserId, AdviserRepository};
use crate::error::{AppError, AppResult};

/// Fetch one adviser; a missing adviser is an error, not an empty result,
/// because every caller is looking at something that should exist.
pub struct GetAdviserByIdUseCase {
    repository: Rc<dyn AdviserRepository>,
}

impl GetAdviserByIdUseCase {
    pub fn new(repository: Rc<dyn AdviserRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, id: AdviserId) -> AppResult<Adviser> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Asesor no encontrado"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::adviser::repository::MockAdviserRepository;

    #[tokio::test]
    async fn missing_adviser_is_not_found() {
        let mut mock = MockAdviserRepository::new();
        mock.expect_get_by_id().returning(|_| Ok(None));
        let use_case = GetAdviserByIdUseCase::new(Rc::new(mock));

        let err = use_case.execute(AdviserId::new(1)).await.unwrap_err();
        assert_eq!(err, AppError::NotFound("Asesor no encontrado".into()));
    }

    #[tokio::test]
    async fn returns_the_adviser_when_present() {
        let mut mock = MockAdviserRepository::new();
        mock.expect_get_by_id().returning(|id| {
            Ok(Some(Adviser {
                id,
                name: "Joe".into(),
                last_name: "Smith".into(),
                sales: 100.0,
                goal_value: 1_000_000.0,
                active: true,
                current_month_sales: None,
                upt: None,
                monthly_summaries: None,
            }))
        });
        let use_case = GetAdviserByIdUseCase::new(Rc::new(mock));

        let adviser = use_case.execute(AdviserId::new(7)).await.unwrap();
        assert_eq!(adviser.id, AdviserId::new(7));
    }
}
