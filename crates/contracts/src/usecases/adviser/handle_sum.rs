use std::rc::Rc;

use crate::domain::adviser::{Adviser, AdviserRepository};
use crate::error::{AppError, AppResult};

/// Add a single sale to an adviser's running total. The backend does the
/// arithmetic; the client only forwards the amount.
pub struct HandleSumUseCase {
    repository: Rc<dyn AdviserRepository>,
}

impl HandleSumUseCase {
    pub fn new(repository: Rc<dyn AdviserRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, adviser: &Adviser, value: f64) -> AppResult<()> {
        if value.is_nan() {
            return Err(AppError::validation(
                "El valor ingresado no es un número válido",
            ));
        }
        self.repository.add_sale(adviser.id, value).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::adviser::AdviserId;
    use crate::domain::adviser::repository::MockAdviserRepository;

    fn adviser() -> Adviser {
        Adviser {
            id: AdviserId::new(5),
            name: "Joe".into(),
            last_name: "Smith".into(),
            sales: 100.0,
            goal_value: 1_000_000.0,
            active: true,
            current_month_sales: None,
            upt: None,
            monthly_summaries: None,
        }
    }

    #[tokio::test]
    async fn nan_amount_is_rejected() {
        let use_case = HandleSumUseCase::new(Rc::new(MockAdviserRepository::new()));
        let err = use_case.execute(&adviser(), f64::NAN).await.unwrap_err();
        assert_eq!(
            err,
            AppError::Validation("El valor ingresado no es un número válido".into())
        );
    }

    #[tokio::test]
    async fn forwards_the_sale_to_the_repository() {
        let mut mock = MockAdviserRepository::new();
        mock.expect_add_sale()
            .withf(|id, amount| *id == AdviserId::new(5) && *amount == 250_000.0)
            .times(1)
            .returning(|_, _| Ok(()));
        HandleSumUseCase::new(Rc::new(mock))
            .execute(&adviser(), 250_000.0)
            .await
            .unwrap();
    }
}
