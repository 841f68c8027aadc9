use leptos::prelude::*;

use super::context::use_auth;

/// Component that requires authentication
/// Shows fallback if not authenticated
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let user = use_auth().user;

    view! {
        <Show
            when=move || user.get().is_some()
            fallback=|| view! { <div>"Sesión no iniciada."</div> }
        >
            {children()}
        </Show>
    }
}
