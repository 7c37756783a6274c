//! Sidebar menu of the active dashboard view
//!
//! Items come from the route table, so a section is listed in exactly the
//! view that owns it.

use contracts::shared::dashboard_view::{DashboardView, RoutePattern, ROOT_PATH, ROUTE_TABLE};
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::layout::view_context::use_dashboard_view;
use crate::routes::sections::{is_admin_only, section_icon, section_label};
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;

#[derive(Clone, Debug, PartialEq)]
struct MenuItem {
    section: &'static str,
    label: String,
    icon: &'static str,
}

fn menu_items(view: DashboardView, is_admin: bool) -> Vec<MenuItem> {
    ROUTE_TABLE
        .sections_for(view)
        .filter(|section| is_admin || !is_admin_only(section))
        .map(|section| MenuItem {
            section,
            label: section_label(section),
            icon: section_icon(section),
        })
        .collect()
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let view_ctx = use_dashboard_view();
    let (auth_state, _) = use_auth();
    let location = use_location();

    let items = move || menu_items(view_ctx.get(), auth_state.with(|s| s.is_admin()));

    view! {
        <div class="app-sidebar__content">
            <A href=ROOT_PATH>
                <div
                    class="app-sidebar__item"
                    class:app-sidebar__item--active=move || location.pathname.get() == ROOT_PATH
                >
                    <div class="app-sidebar__item-content">
                        {icon("dashboard")}
                        <span>"Front desk"</span>
                    </div>
                </div>
            </A>
            <div class="app-sidebar__group-label">
                {move || format!("{} view", view_ctx.get().display_name())}
            </div>
            <For
                each=items
                key=|item| item.section
                children=move |item: MenuItem| {
                    let pattern = RoutePattern::new(item.section, view_ctx.get_untracked());
                    view! {
                        <A href=pattern.root_path()>
                            <div
                                class="app-sidebar__item"
                                class:app-sidebar__item--active=move || pattern.matches(&location.pathname.get())
                            >
                                <div class="app-sidebar__item-content">
                                    {icon(item.icon)}
                                    <span>{item.label.clone()}</span>
                                </div>
                            </div>
                        </A>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_follows_route_table() {
        let admin: Vec<_> = menu_items(DashboardView::Admin, true)
            .into_iter()
            .map(|i| i.section)
            .collect();
        assert_eq!(admin, vec!["properties", "customers"]);

        let user = menu_items(DashboardView::User, true);
        assert!(user.iter().any(|i| i.section == "reservations"));
        assert!(user.iter().all(|i| i.section != "properties"));
    }

    #[test]
    fn test_menu_hides_admin_only_sections() {
        let user = menu_items(DashboardView::User, false);
        assert!(user.iter().all(|i| i.section != "users"));
        let admin = menu_items(DashboardView::Admin, false);
        assert!(admin.iter().all(|i| i.section != "customers"));
    }
}
