use std::rc::Rc;

use contracts::error::AppResult;
use contracts::system::auth::{AuthCredentials, AuthRepository, User};
use contracts::usecases::auth::{GetCurrentUserUseCase, LoginUseCase, LogoutUseCase};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::shared::notifications::NotificationService;

struct AuthUseCases {
    login: LoginUseCase,
    logout: LogoutUseCase,
    current_user: GetCurrentUserUseCase,
}

/// Session controller: who is logged in, plus the login/logout actions.
/// Provided once at the app root. `Copy`, like every context here; the
/// non-`Send` use cases sit behind a local `StoredValue`.
#[derive(Clone, Copy)]
pub struct AuthStore {
    pub user: RwSignal<Option<User>>,
    pub loading: RwSignal<bool>,
    usecases: StoredValue<Rc<AuthUseCases>, LocalStorage>,
    notifications: NotificationService,
}

impl AuthStore {
    pub fn new(repository: Rc<dyn AuthRepository>, notifications: NotificationService) -> Self {
        let usecases = AuthUseCases {
            login: LoginUseCase::new(repository.clone()),
            logout: LogoutUseCase::new(repository.clone()),
            current_user: GetCurrentUserUseCase::new(repository),
        };
        Self {
            user: RwSignal::new(None),
            loading: RwSignal::new(false),
            usecases: StoredValue::new_local(Rc::new(usecases)),
            notifications,
        }
    }

    fn usecases(&self) -> Rc<AuthUseCases> {
        self.usecases.get_value()
    }

    pub async fn login(&self, credentials: &AuthCredentials) -> AppResult<User> {
        self.loading.set(true);
        let result = self.usecases().login.execute(credentials).await;
        match &result {
            Ok(user) => {
                self.user.set(Some(user.clone()));
                self.notifications
                    .show_success(format!("Bienvenido, {}", user.username));
            }
            Err(e) => {
                self.user.set(None);
                self.notifications.show_error(e.to_string());
            }
        }
        self.loading.set(false);
        result
    }

    pub async fn logout(&self) -> AppResult<()> {
        self.loading.set(true);
        let result = self.usecases().logout.execute().await;
        match &result {
            Ok(()) => self.user.set(None),
            Err(e) => self.notifications.show_error(e.to_string()),
        }
        self.loading.set(false);
        result
    }

    /// Try to restore the session from the persisted token on startup.
    /// A rejected or missing token just means staying logged out.
    pub fn restore_session(&self) {
        let this = *self;
        spawn_local(async move {
            this.loading.set(true);
            match this.usecases().current_user.execute().await {
                Ok(user) => this.user.set(user),
                Err(e) => {
                    log::info!("session restore failed: {}", e);
                    this.user.set(None);
                }
            }
            this.loading.set(false);
        });
    }
}

/// Hook to access the auth store from any component.
pub fn use_auth() -> AuthStore {
    use_context::<AuthStore>().expect("AuthStore not provided in context")
}
