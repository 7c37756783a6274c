//! Property the operator is working on
//!
//! `None` means all properties. The choice survives reloads and is cleared
//! on logout.

use contracts::domain::a001_property::aggregate::Property;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a001_property::api;
use crate::system::auth::storage;

const PROPERTY_STORAGE_KEY: &str = "selected_property_id";

#[derive(Clone, Copy)]
pub struct PropertyContext {
    pub properties: RwSignal<Vec<Property>>,
    selected: RwSignal<Option<String>>,
}

impl PropertyContext {
    pub fn new() -> Self {
        Self {
            properties: RwSignal::new(Vec::new()),
            selected: RwSignal::new(storage::get_item(PROPERTY_STORAGE_KEY)),
        }
    }

    /// Tracked id of the selected property
    pub fn selected_id(&self) -> Option<String> {
        self.selected.get()
    }

    pub fn selected_id_untracked(&self) -> Option<String> {
        self.selected.get_untracked()
    }

    pub fn select(&self, id: Option<String>) {
        match &id {
            Some(id) => storage::set_item(PROPERTY_STORAGE_KEY, id),
            None => storage::remove_item(PROPERTY_STORAGE_KEY),
        }
        self.selected.set(id);
    }

    /// Reload the property list and drop a selection that no longer exists
    pub fn load(&self) {
        let this = *self;
        spawn_local(async move {
            match api::fetch_all().await {
                Ok(list) => {
                    let ids: Vec<String> = list.iter().map(|p| p.base.id.as_string()).collect();
                    let current = this.selected.get_untracked();
                    let kept = reconcile_selection(current.as_deref(), &ids);
                    if kept != current {
                        this.select(kept);
                    }
                    this.properties.set(list);
                }
                Err(e) => log::warn!("Failed to load properties: {}", e),
            }
        });
    }

    pub fn reset(&self) {
        self.properties.set(Vec::new());
        self.select(None);
    }
}

impl Default for PropertyContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Keep the selection if it is still listed; a single property is selected
/// automatically.
fn reconcile_selection(selected: Option<&str>, ids: &[String]) -> Option<String> {
    match selected {
        Some(id) if ids.iter().any(|i| i == id) => Some(id.to_string()),
        _ if ids.len() == 1 => Some(ids[0].clone()),
        _ => None,
    }
}

pub fn use_property_context() -> PropertyContext {
    use_context::<PropertyContext>().expect("PropertyContext not provided")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reconcile_selection() {
        let ids = vec!["a".to_string(), "b".to_string()];
        assert_eq!(reconcile_selection(Some("b"), &ids).as_deref(), Some("b"));
        assert_eq!(reconcile_selection(Some("gone"), &ids), None);
        assert_eq!(reconcile_selection(None, &ids), None);

        let single = vec!["only".to_string()];
        assert_eq!(reconcile_selection(None, &single).as_deref(), Some("only"));
        assert_eq!(reconcile_selection(Some("x"), &[]), None);
    }
}
