//! Active dashboard view (admin / user)
//!
//! Provided once at startup, restored from localStorage, changed only through
//! [`DashboardViewContext::set_view`] and cleared on logout.

use contracts::shared::dashboard_view::DashboardView;
use leptos::prelude::*;

use crate::system::auth::storage;

const VIEW_STORAGE_KEY: &str = "dashboard_view";

#[derive(Clone, Copy)]
pub struct DashboardViewContext {
    view: RwSignal<DashboardView>,
}

impl DashboardViewContext {
    pub fn new() -> Self {
        let stored = storage::get_item(VIEW_STORAGE_KEY);
        Self {
            view: RwSignal::new(initial_view(stored.as_deref())),
        }
    }

    /// Tracked read
    pub fn get(&self) -> DashboardView {
        self.view.get()
    }

    pub fn get_untracked(&self) -> DashboardView {
        self.view.get_untracked()
    }

    pub fn set_view(&self, view: DashboardView) {
        if self.view.get_untracked() == view {
            return;
        }
        self.view.set(view);
        storage::set_item(VIEW_STORAGE_KEY, view.as_str());
    }

    /// Back to the default view, forgetting the persisted choice
    pub fn reset(&self) {
        self.view.set(DashboardView::default());
        storage::remove_item(VIEW_STORAGE_KEY);
    }
}

impl Default for DashboardViewContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Persisted tag, or the default view for a missing or unknown tag
fn initial_view(stored: Option<&str>) -> DashboardView {
    stored
        .and_then(DashboardView::from_tag)
        .unwrap_or_default()
}

pub fn use_dashboard_view() -> DashboardViewContext {
    use_context::<DashboardViewContext>().expect("DashboardViewContext not provided")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_view() {
        assert_eq!(initial_view(Some("admin")), DashboardView::Admin);
        assert_eq!(initial_view(Some("user")), DashboardView::User);
        assert_eq!(initial_view(Some("root")), DashboardView::User);
        assert_eq!(initial_view(None), DashboardView::User);
    }
}
