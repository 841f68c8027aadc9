use std::rc::Rc;

use crate::domain::adviser::{Adviser, AdviserRepository, AdviserValidator, NewAdviser};
use crate::error::AppResult;

/// Create an adviser after field validation and a duplicate check against
/// a freshly fetched roster.
pub struct CreateAdviserUseCase {
    repository: Rc<dyn AdviserRepository>,
    validator: AdviserValidator,
}

impl CreateAdviserUseCase {
    pub fn new(repository: Rc<dyn AdviserRepository>) -> Self {
        Self {
            repository,
            validator: AdviserValidator::new(),
        }
    }

    pub async fn execute(&self, adviser: &NewAdviser) -> AppResult<Adviser> {
        self.validator.validate_new_adviser(adviser)?;

        // The duplicate check only means something against the current
        // roster, so fetch it here rather than trusting a cached list.
        let existing = self.repository.get_all().await?;
        self.validator.validate_duplicate(
            Some(&adviser.name),
            Some(&adviser.last_name),
            &existing,
            None,
        )?;

        self.repository.create(adviser).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::adviser::repository::MockAdviserRepository;
    use crate::domain::adviser::AdviserId;
    use crate::error::AppError;

    fn existing(id: i64, name: &str, last_name: &str) -> Adviser {
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

    fn draft() -> NewAdviser {
        NewAdviser {
            name: "Joe".into(),
            last_name: "Smith".into(),
            sales: 0.0,
            goal_value: 1_000_000.0,
            active: true,
        }
    }

    #[tokio::test]
    async fn rejects_invalid_draft_before_any_repository_call() {
        let mock = MockAdviserRepository::new();
        let use_case = CreateAdviserUseCase::new(Rc::new(mock));

        let mut bad = draft();
        bad.name = "Jo".into();
        let err = use_case.execute(&bad).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn rejects_case_insensitive_duplicate() {
        let mut mock = MockAdviserRepository::new();
        mock.expect_get_all()
            .returning(|| Ok(vec![existing(1, "joe", "SMITH")]));
        let use_case = CreateAdviserUseCase::new(Rc::new(mock));

        let err = use_case.execute(&draft()).await.unwrap_err();
        assert_eq!(
            err,
            AppError::Conflict("Ya existe un asesor con ese nombre y apellido".into())
        );
    }

    #[tokio::test]
    async fn created_adviser_round_trips_through_get_by_id() {
        use std::sync::{Arc, Mutex};

        use crate::usecases::adviser::GetAdviserByIdUseCase;

        let saved: Arc<Mutex<Vec<Adviser>>> = Arc::new(Mutex::new(Vec::new()));

        let mut mock = MockAdviserRepository::new();
        let store = saved.clone();
        mock.expect_get_all()
            .returning(move || Ok(store.lock().unwrap().clone()));
        let store = saved.clone();
        mock.expect_create().returning(move |d| {
            let created = Adviser {
                id: AdviserId::new(1),
                name: d.name.clone(),
                last_name: d.last_name.clone(),
                sales: d.sales,
                goal_value: d.goal_value,
                active: d.active,
                current_month_sales: None,
                upt: None,
                monthly_summaries: None,
            };
            store.lock().unwrap().push(created.clone());
            Ok(created)
        });
        let store = saved.clone();
        mock.expect_get_by_id()
            .returning(move |id| Ok(store.lock().unwrap().iter().find(|a| a.id == id).cloned()));

        let repository: Rc<dyn crate::domain::adviser::AdviserRepository> = Rc::new(mock);
        let create = CreateAdviserUseCase::new(repository.clone());
        let get_by_id = GetAdviserByIdUseCase::new(repository);

        let mut draft = draft();
        draft.sales = 500_000.0;
        draft.goal_value = 3_000_000.0;
        let created = create.execute(&draft).await.unwrap();

        let fetched = get_by_id.execute(created.id).await.unwrap();
        assert_eq!(fetched.name, draft.name);
        assert_eq!(fetched.last_name, draft.last_name);
        assert_eq!(fetched.sales, draft.sales);
        assert_eq!(fetched.goal_value, draft.goal_value);
    }

    #[tokio::test]
    async fn creates_when_roster_is_clear() {
        let mut mock = MockAdviserRepository::new();
        mock.expect_get_all()
            .returning(|| Ok(vec![existing(1, "Ana", "López")]));
        mock.expect_create()
            .withf(|d| d.name == "Joe" && d.last_name == "Smith")
            .returning(|d| {
                let mut created = existing(2, &d.name, &d.last_name);
                created.goal_value = d.goal_value;
                Ok(created)
            });
        let use_case = CreateAdviserUseCase::new(Rc::new(mock));

        let created = use_case.execute(&draft()).await.unwrap();
        assert_eq!(created.id, AdviserId::new(2));
        assert_eq!(created.name, "Joe");
        assert_eq!(created.goal_value, 1_000_000.0);
    }
}
