use leptos::prelude::*;

use super::context::use_auth;

/// Renders children for administrators only
#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.with(|s| s.is_authenticated() && s.is_admin())
            fallback=|| view! { <div class="access-denied">"Access denied. Administrator rights required."</div> }
        >
            {children()}
        </Show>
    }
}
