//! Keeps the active dashboard view in line with the current route
//!
//! Mounted once inside the authenticated layout. Every pathname change is
//! classified; landing on a section owned by the other view activates that
//! view, sends the browser to `/` and shows a short notice.

use contracts::shared::dashboard_view::{plan_view_switch, switch_message, ROOT_PATH};
use contracts::shared::logger::category;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_location, use_navigate};
use leptos_router::NavigateOptions;

use super::notifications::use_notifications;
use super::view_context::use_dashboard_view;
use crate::system::logs::api as logs_api;

#[component]
pub fn ViewAutoSwitcher() -> impl IntoView {
    let location = use_location();
    let navigate = use_navigate();
    let view_ctx = use_dashboard_view();
    let notifications = use_notifications();

    Effect::new(move |_| {
        let path = location.pathname.get();
        let Some(switch) = plan_view_switch(view_ctx.get_untracked(), &path) else {
            return;
        };

        view_ctx.set_view(switch.view);
        if switch.redirect_to_root {
            navigate(
                ROOT_PATH,
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        }

        let message = switch_message(switch.view);
        notifications.info(message.clone());

        log::info!("{} (from {})", message, path);
        spawn_local(async move {
            let text = format!("{} (from {})", message, path);
            if let Err(e) = logs_api::post_client_event(category::VIEW_SWITCH, &text).await {
                log::warn!("Failed to record view switch: {}", e);
            }
        });
    });
}
