use std::rc::Rc;

use crate::error::AppResult;
use crate::system::auth::{AuthCredentials, AuthRepository, User};

/// Authenticate against the backend. Credential well-formedness is
/// enforced by [`AuthCredentials::new`]; token persistence is the
/// repository adapter's job.
pub struct LoginUseCase {
    repository: Rc<dyn AuthRepository>,
}

impl LoginUseCase {
    pub fn new(repository: Rc<dyn AuthRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, credentials: &AuthCredentials) -> AppResult<User> {
        self.repository.login(credentials).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::auth::MockAuthRepository;

    #[tokio::test]
    async fn returns_the_authenticated_user() {
        let mut mock = MockAuthRepository::new();
        mock.expect_login().returning(|c| {
            Ok(User {
                id: Some(1),
                username: c.username().to_string(),
                email: None,
                roles: vec!["ADMIN".into()],
                token: "jwt-token".into(),
            })
        });
        let use_case = LoginUseCase::new(Rc::new(mock));

        let credentials = AuthCredentials::new("admin", "secret").unwrap();
        let user = use_case.execute(&credentials).await.unwrap();
        assert_eq!(user.username, "admin");
        assert_eq!(user.token, "jwt-token");
    }
}
