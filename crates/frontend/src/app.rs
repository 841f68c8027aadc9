use std::rc::Rc;

use leptos::prelude::*;

use crate::domain::adviser::api::AdviserApiRepository;
use crate::domain::adviser::state::AdvisersStore;
use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::notifications::{NotificationService, ToastHost};
use crate::system::auth::api::AuthApiRepository;
use crate::system::auth::context::AuthStore;
use crate::system::auth::session::AuthSession;

#[component]
pub fn App() -> impl IntoView {
    let notifications = NotificationService::new();
    provide_context(notifications);

    // One session handle, injected into every repository adapter.
    let session = AuthSession::new();

    let auth = AuthStore::new(Rc::new(AuthApiRepository::new(session)), notifications);
    // Pick the session back up after a page reload.
    auth.restore_session();
    provide_context(auth);

    let advisers = AdvisersStore::new(Rc::new(AdviserApiRepository::new(session)), notifications);
    provide_context(advisers);

    provide_context(AppGlobalContext::new());

    view! {
        <AppRoutes />
        <ToastHost />
    }
}
