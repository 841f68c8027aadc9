use leptos::prelude::*;
use leptos::task::spawn_local;

use super::global_context::{AppGlobalContext, Page};
use crate::system::auth::context::use_auth;

#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found in context");
    let auth = use_auth();
    let user = auth.user;
    let active = ctx.active;

    let nav_class = move |page: Page| {
        if active.get() == page {
            "nav-link nav-link--active"
        } else {
            "nav-link"
        }
    };

    let on_logout = move |_| {
        spawn_local(async move {
            let _ = auth.logout().await;
        });
    };

    view! {
        <nav class="navbar">
            <div class="navbar__brand">"KPIs de Ventas"</div>
            <div class="navbar__links">
                <button
                    class=move || nav_class(Page::Dashboard)
                    on:click=move |_| ctx.open(Page::Dashboard)
                >
                    "Dashboard"
                </button>
                <button
                    class=move || nav_class(Page::Advisers)
                    on:click=move |_| ctx.open(Page::Advisers)
                >
                    "Asesores"
                </button>
            </div>
            <div class="navbar__session">
                <span class="navbar__user">
                    {move || {
                        user.get().map(|u| u.username).unwrap_or_default()
                    }}
                </span>
                <button class="btn-secondary" on:click=on_logout>
                    "Cerrar sesión"
                </button>
            </div>
        </nav>
    }
}
