use leptos::prelude::*;

use crate::dashboards::metrics::ui::DashboardPage;
use crate::domain::adviser::ui::list::AdvisersPage;
use crate::layout::global_context::{AppGlobalContext, Page};
use crate::layout::navbar::Navbar;
use crate::system::auth::context::use_auth;
use crate::system::auth::guard::RequireAuth;
use crate::system::pages::login::LoginPage;

#[component]
fn MainLayout() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    // Initialize router integration. This runs once when the component is created.
    ctx.init_router_integration();

    let active = ctx.active;

    view! {
        <Navbar />
        <main class="app-main">
            <RequireAuth>
                {move || match active.get() {
                    Page::Dashboard => view! { <DashboardPage /> }.into_any(),
                    Page::Advisers => view! { <AdvisersPage /> }.into_any(),
                }}
            </RequireAuth>
        </main>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let user = use_auth().user;

    view! {
        <Show
            when=move || user.get().is_some()
            fallback=|| view! { <LoginPage /> }
        >
            <MainLayout />
        </Show>
    }
}
