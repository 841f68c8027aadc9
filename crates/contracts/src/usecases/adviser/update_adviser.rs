use std::rc::Rc;

use crate::domain::adviser::{Adviser, AdviserId, AdviserRepository, AdviserUpdate, AdviserValidator};
use crate::error::{AppError, AppResult};

/// Partially update an adviser: the target must exist, the new name pair
/// must not collide with another adviser, and any field present in the
/// update must pass the same rules as on creation.
pub struct UpdateAdviserUseCase {
    repository: Rc<dyn AdviserRepository>,
    validator: AdviserValidator,
}

impl UpdateAdviserUseCase {
    pub fn new(repository: Rc<dyn AdviserRepository>) -> Self {
        Self {
            repository,
            validator: AdviserValidator::new(),
        }
    }

    pub async fn execute(&self, id: AdviserId, update: &AdviserUpdate) -> AppResult<Adviser> {
        let existing = self.repository.get_by_id(id).await?;
        if existing.is_none() {
            return Err(AppError::not_found("Asesor no encontrado"));
        }

        let roster = self.repository.get_all().await?;
        self.validator.validate_duplicate(
            update.name.as_deref(),
            update.last_name.as_deref(),
            &roster,
            Some(id),
        )?;

        self.validator.validate_update(update)?;

        self.repository.update(id, update).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::adviser::repository::MockAdviserRepository;

    fn adviser(id: i64, name: &str, last_name: &str) -> Adviser {
        Adviser {
            id: AdviserId::new(id),
            name: name.into(),
            last_name: last_name.into(),
            sales: 0.0,
            goal_value: 1_000_000.0,
            active: true,
            current_month_sales: None,
            upt: None,
            monthly_summaries: None,
        }
    }

    #[tokio::test]
    async fn fails_when_target_does_not_exist() {
        let mut mock = MockAdviserRepository::new();
        mock.expect_get_by_id().returning(|_| Ok(None));
        let use_case = UpdateAdviserUseCase::new(Rc::new(mock));

        let err = use_case
            .execute(AdviserId::new(9), &AdviserUpdate::new().name("Ana"))
            .await
            .unwrap_err();
        assert_eq!(err, AppError::NotFound("Asesor no encontrado".into()));
    }

    #[tokio::test]
    async fn renaming_onto_another_adviser_is_a_conflict() {
        let mut mock = MockAdviserRepository::new();
        mock.expect_get_by_id()
            .returning(|id| Ok(Some(adviser(id.value(), "Joe", "Smith"))));
        mock.expect_get_all()
            .returning(|| Ok(vec![adviser(1, "Joe", "Smith"), adviser(2, "Ana", "López")]));
        let use_case = UpdateAdviserUseCase::new(Rc::new(mock));

        let update = AdviserUpdate::new().name("ana").last_name("lópez");
        let err = use_case.execute(AdviserId::new(1), &update).await.unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn keeping_your_own_name_is_not_a_conflict() {
        let mut mock = MockAdviserRepository::new();
        mock.expect_get_by_id()
            .returning(|id| Ok(Some(adviser(id.value(), "Joe", "Smith"))));
        mock.expect_get_all()
            .returning(|| Ok(vec![adviser(1, "Joe", "Smith")]));
        mock.expect_update().returning(|id, u| {
            let mut a = adviser(id.value(), "Joe", "Smith");
            if let Some(goal) = u.goal_value {
                a.goal_value = goal;
            }
            Ok(a)
        });
        let use_case = UpdateAdviserUseCase::new(Rc::new(mock));

        let update = AdviserUpdate::new()
            .name("Joe")
            .last_name("Smith")
            .goal_value(2_500_000.0);
        let updated = use_case.execute(AdviserId::new(1), &update).await.unwrap();
        assert_eq!(updated.goal_value, 2_500_000.0);
    }

    #[tokio::test]
    async fn partial_fields_are_validated() {
        let mut mock = MockAdviserRepository::new();
        mock.expect_get_by_id()
            .returning(|id| Ok(Some(adviser(id.value(), "Joe", "Smith"))));
        mock.expect_get_all().returning(|| Ok(vec![]));
        let use_case = UpdateAdviserUseCase::new(Rc::new(mock));

        let update = AdviserUpdate::new().sales(-5.0);
        let err = use_case.execute(AdviserId::new(1), &update).await.unwrap_err();
        assert_eq!(
            err,
            AppError::Validation("Las ventas deben ser un número positivo".into())
        );
    }
}
