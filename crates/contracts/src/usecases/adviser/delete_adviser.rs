use std::rc::Rc;

use crate::domain::adviser::{AdviserId, AdviserRepository};
use crate::error::AppResult;

/// Remove an adviser from the backend. Id validity is guaranteed by
/// [`AdviserId::parse`] at the input boundary.
pub struct DeleteAdviserUseCase {
    repository: Rc<dyn AdviserRepository>,
}

impl DeleteAdviserUseCase {
    pub fn new(repository: Rc<dyn AdviserRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, id: AdviserId) -> AppResult<()> {
        self.repository.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::adviser::repository::MockAdviserRepository;
    use mockall::predicate::eq;

    #[tokio::test]
    async fn delegates_to_the_repository() {
        let mut mock = MockAdviserRepository::new();
        mock.expect_delete()
            .with(eq(AdviserId::new(4)))
            .times(1)
            .returning(|_| Ok(()));
        let use_case = DeleteAdviserUseCase::new(Rc::new(mock));

        use_case.execute(AdviserId::new(4)).await.unwrap();
    }
}
