use super::resolver::resolve_view;
use super::view::DashboardView;

/// Landing page shared by both views
pub const ROOT_PATH: &str = "/";

/// What the layout has to do after navigating to a path owned by another view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewSwitch {
    /// View to activate
    pub view: DashboardView,
    /// The current path may not exist in the new view, go to the landing page
    pub redirect_to_root: bool,
}

/// Decide whether navigating to `path` requires leaving the `active` view.
///
/// Shared routes (no owner) never switch.
pub fn plan_view_switch(active: DashboardView, path: &str) -> Option<ViewSwitch> {
    plan_with(resolve_view(path), active, path)
}

fn plan_with(
    resolved: Option<DashboardView>,
    active: DashboardView,
    path: &str,
) -> Option<ViewSwitch> {
    let view = resolved?;
    if view == active {
        return None;
    }
    Some(ViewSwitch {
        view,
        redirect_to_root: path != ROOT_PATH,
    })
}

/// Notification text shown after an automatic switch
pub fn switch_message(view: DashboardView) -> String {
    format!("Switched to the {} view", view.display_name())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::dashboard_view::resolver::{RoutePattern, RoutePatternTable};

    fn plan_view_switch_in(
        table: &RoutePatternTable,
        active: DashboardView,
        path: &str,
    ) -> Option<ViewSwitch> {
        plan_with(table.resolve(path), active, path)
    }

    #[test]
    fn test_same_view_does_not_switch() {
        assert_eq!(plan_view_switch(DashboardView::User, "/reservations/1"), None);
        assert_eq!(plan_view_switch(DashboardView::Admin, "/properties"), None);
    }

    #[test]
    fn test_other_view_switches_and_redirects() {
        assert_eq!(
            plan_view_switch(DashboardView::User, "/properties/123/edit"),
            Some(ViewSwitch {
                view: DashboardView::Admin,
                redirect_to_root: true,
            })
        );
        assert_eq!(
            plan_view_switch(DashboardView::Admin, "/rooms"),
            Some(ViewSwitch {
                view: DashboardView::User,
                redirect_to_root: true,
            })
        );
    }

    #[test]
    fn test_shared_routes_never_switch() {
        for active in DashboardView::all() {
            for path in ["/", "", "/dashboard", "/property", "/reservations?page=2"] {
                assert_eq!(plan_view_switch(active, path), None, "{:?}", path);
            }
        }
    }

    #[test]
    fn test_custom_table() {
        let table = RoutePatternTable::new(vec![RoutePattern::new("tv", DashboardView::Admin)])
            .unwrap();
        let switch = plan_view_switch_in(&table, DashboardView::User, "/tv/").unwrap();
        assert_eq!(switch.view, DashboardView::Admin);
        assert!(switch.redirect_to_root);
        assert_eq!(plan_view_switch_in(&table, DashboardView::User, "/rooms"), None);
    }

    #[test]
    fn test_plan_with_root_path() {
        assert_eq!(
            plan_with(Some(DashboardView::Admin), DashboardView::User, ROOT_PATH),
            Some(ViewSwitch {
                view: DashboardView::Admin,
                redirect_to_root: false,
            })
        );
    }

    #[test]
    fn test_switch_message() {
        assert_eq!(
            switch_message(DashboardView::Admin),
            "Switched to the Admin view"
        );
    }
}
