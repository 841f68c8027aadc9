use std::rc::Rc;

use crate::domain::adviser::{Adviser, AdviserRepository};
use crate::error::{AppError, AppResult};

/// Fetch the full roster. An empty roster is reported as an error and the
/// UI toasts it; whether that is the right product behavior is an open
/// question recorded in DESIGN.md, so the behavior is kept as-is.
pub struct GetAllAdvisersUseCase {
    repository: Rc<dyn AdviserRepository>,
}

impl GetAllAdvisersUseCase {
    pub fn new(repository: Rc<dyn AdviserRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self) -> AppResult<Vec<Adviser>> {
        let advisers = self.repository.get_all().await?;
        if advisers.is_empty() {
            return Err(AppError::not_found("No hay asesores registrados"));
        }
        Ok(advisers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::adviser::AdviserId;
    use crate::domain::adviser::repository::MockAdviserRepository;

    #[tokio::test]
    async fn empty_roster_is_an_error() {
        let mut mock = MockAdviserRepository::new();
        mock.expect_get_all().returning(|| Ok(vec![]));
        let use_case = GetAllAdvisersUseCase::new(Rc::new(mock));

        let err = use_case.execute().await.unwrap_err();
        assert_eq!(err, AppError::NotFound("No hay asesores registrados".into()));
    }

    #[tokio::test]
    async fn returns_the_roster() {
        let mut mock = MockAdviserRepository::new();
        mock.expect_get_all().returning(|| {
            Ok(vec![Adviser {
                id: AdviserId::new(1),
                name: "Joe".into(),
                last_name: "Smith".into(),
                sales: 0.0,
                goal_value: 1_000_000.0,
                active: true,
                current_month_sales: None,
                upt: None,
                monthly_summaries: None,
            }])
        });
        let use_case = GetAllAdvisersUseCase::new(Rc::new(mock));

        assert_eq!(use_case.execute().await.unwrap().len(), 1);
    }
}
