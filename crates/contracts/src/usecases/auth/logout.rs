use std::rc::Rc;

use crate::error::AppResult;
use crate::system::auth::AuthRepository;

/// End the session; the adapter clears the persisted token.
pub struct LogoutUseCase {
    repository: Rc<dyn AuthRepository>,
}

impl LogoutUseCase {
    pub fn new(repository: Rc<dyn AuthRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self) -> AppResult<()> {
        self.repository.logout().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::auth::MockAuthRepository;

    #[tokio::test]
    async fn delegates_to_the_repository() {
        let mut mock = MockAuthRepository::new();
        mock.expect_logout().times(1).returning(|| Ok(()));
        LogoutUseCase::new(Rc::new(mock)).execute().await.unwrap();
    }
}
