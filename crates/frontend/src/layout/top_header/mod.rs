//! Application top bar
//!
//! Sidebar toggle, title, dashboard view toggle (admins only), property
//! selector, signed-in user and logout.

mod property_selector;

use contracts::shared::dashboard_view::{DashboardView, ROOT_PATH};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;
use thaw::*;

use crate::layout::global_context::AppGlobalContext;
use crate::layout::property_context::use_property_context;
use crate::layout::view_context::use_dashboard_view;
use crate::shared::icons::icon;
use crate::system::auth::context::{do_logout, use_auth};
use property_selector::PropertySelector;

/// Admins can always switch. Anyone else only needs the way back after the
/// router moved them into the admin view.
fn can_toggle_view(is_admin: bool, active: DashboardView) -> bool {
    is_admin || active == DashboardView::Admin
}

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let (auth_state, set_auth_state) = use_auth();
    let view_ctx = use_dashboard_view();
    let property_ctx = use_property_context();
    let navigate = StoredValue::new_local(use_navigate());

    let is_admin = move || auth_state.with(|s| s.is_admin());

    // Manual switch: the current page may belong to the old view, start from the root
    let toggle_view = move |_: leptos::ev::MouseEvent| {
        view_ctx.set_view(view_ctx.get_untracked().toggled());
        navigate.with_value(|nav| {
            nav(
                ROOT_PATH,
                NavigateOptions {
                    replace: false,
                    ..Default::default()
                },
            )
        });
    };

    let logout = move |_: leptos::ev::MouseEvent| {
        view_ctx.reset();
        property_ctx.reset();
        spawn_local(async move {
            do_logout(set_auth_state).await;
        });
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if ctx.left_open.get() { "Hide navigation" } else { "Show navigation" }
                >
                    {icon("menu")}
                </button>
                <span class="top-header__title">"Hotel Back-Office"</span>
                <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>
                    {move || format!("{} view", view_ctx.get().display_name())}
                </Badge>
            </div>

            <div class="top-header__actions">
                <Show when=move || can_toggle_view(is_admin(), view_ctx.get())>
                    <button
                        class="top-header__view-toggle"
                        on:click=toggle_view
                        title="Switch dashboard view"
                    >
                        {icon("swap")}
                        {move || format!(" {} view", view_ctx.get().toggled().display_name())}
                    </button>
                </Show>

                <PropertySelector />

                <div class="top-header__user">
                    {icon("user")}
                    <span>
                        {move || auth_state.with(|s| {
                            s.user_info
                                .as_ref()
                                .map(|u| u.display_name().to_string())
                                .unwrap_or_default()
                        })}
                    </span>
                </div>

                <button class="top-header__icon-btn" on:click=logout title="Sign out">
                    {icon("log-out")}
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_can_toggle_view() {
        assert!(can_toggle_view(true, DashboardView::User));
        assert!(can_toggle_view(true, DashboardView::Admin));
        assert!(can_toggle_view(false, DashboardView::Admin));
        assert!(!can_toggle_view(false, DashboardView::User));
    }
}
