use std::rc::Rc;

use crate::error::AppResult;
use crate::system::auth::{AuthRepository, User};

/// Restore the session user from the persisted token, if any.
pub struct GetCurrentUserUseCase {
    repository: Rc<dyn AuthRepository>,
}

impl GetCurrentUserUseCase {
    pub fn new(repository: Rc<dyn AuthRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self) -> AppResult<Option<User>> {
        self.repository.get_current_user().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::auth::MockAuthRepository;

    #[tokio::test]
    async fn no_stored_token_means_no_user() {
        let mut mock = MockAuthRepository::new();
        mock.expect_get_current_user().returning(|| Ok(None));
        let user = GetCurrentUserUseCase::new(Rc::new(mock))
            .execute()
            .await
            .unwrap();
        assert!(user.is_none());
    }
}
