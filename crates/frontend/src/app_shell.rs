//! Root components of the application
//!
//! - `AppShell`: auth gate, shows `LoginPage` or `MainLayout`
//! - `MainLayout`: top header, sidebar and the routed page

use leptos::prelude::*;
use leptos_router::components::Outlet;
use thaw::*;

use crate::layout::left::sidebar::Sidebar;
use crate::layout::notifications::NotificationHost;
use crate::layout::property_context::use_property_context;
use crate::layout::view_switcher::ViewAutoSwitcher;
use crate::layout::Shell;
use crate::system::auth::context::use_auth;
use crate::system::pages::login::LoginPage;

/// Main application layout: Shell + Sidebar + routed page.
#[component]
fn MainLayout() -> impl IntoView {
    let property_ctx = use_property_context();
    property_ctx.load();

    view! {
        <ViewAutoSwitcher />
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=|| view! { <Outlet /> }.into_any()
        />
        <NotificationHost />
    }
}

/// Application shell - auth gate component.
///
/// Waits for the stored session to be checked before deciding, so a reload
/// does not flash the login form.
#[component]
pub fn AppShell() -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.with(|s| s.restored)
            fallback=|| view! {
                <div class="app-loading">
                    <Spinner label="Loading..." />
                </div>
            }
        >
            <Show
                when=move || auth_state.with(|s| s.is_authenticated())
                fallback=|| view! { <LoginPage /> }
            >
                <MainLayout />
            </Show>
        </Show>
    }
}
