use contracts::domain::a001_property::aggregate::{Property, PropertyDto};
use contracts::domain::a002_customer::aggregate::Customer;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::{a001_property, a002_customer};

/// Checks the backend would reject, run before sending
pub fn validate_form(dto: &PropertyDto) -> Result<(), String> {
    Property::new_for_insert(dto).validate()
}

#[derive(Clone, Copy)]
pub struct PropertyDetailsViewModel {
    pub form: RwSignal<PropertyDto>,
    pub customers: RwSignal<Vec<Customer>>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl PropertyDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(PropertyDto {
                currency: "EUR".to_string(),
                ..Default::default()
            }),
            customers: RwSignal::new(Vec::new()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with(|f| f.id.is_some())
    }

    /// Customer options for the owner picker
    pub fn customer_options(&self) -> Vec<(String, String)> {
        self.customers.with(|list| {
            list.iter()
                .map(|c| (c.base.id.as_string(), c.base.description.clone()))
                .collect()
        })
    }

    /// Fetch the property (edit mode) and the customer list
    pub fn load_if_needed(&self, id: Option<String>) {
        let this = *self;
        spawn_local(async move {
            match a002_customer::api::fetch_all().await {
                Ok(list) => this.customers.set(list),
                Err(e) => log::warn!("Customers not available: {}", e),
            }
        });

        let Some(id) = id else { return };
        spawn_local(async move {
            match a001_property::api::fetch_by_id(&id).await {
                Ok(property) => this.form.set(PropertyDto::from(&property)),
                Err(e) => this.error.set(Some(format!("Failed to load: {}", e))),
            }
        });
    }

    pub fn save_command(&self, on_saved: Callback<String>) {
        let current = self.form.get_untracked();
        if let Err(e) = validate_form(&current) {
            self.error.set(Some(e));
            return;
        }

        let this = *self;
        this.saving.set(true);
        this.error.set(None);
        spawn_local(async move {
            match a001_property::api::save(&current).await {
                Ok(id) => on_saved.run(id),
                Err(e) => this.error.set(Some(e)),
            }
            this.saving.set(false);
        });
    }
}

impl Default for PropertyDetailsViewModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_form() {
        let mut dto = PropertyDto {
            description: "Harbour Hotel".into(),
            currency: "eur".into(),
            ..Default::default()
        };
        assert!(validate_form(&dto).is_ok());

        dto.currency = "EURO".into();
        assert!(validate_form(&dto).is_err());

        dto.currency = "EUR".into();
        dto.description.clear();
        assert_eq!(
            validate_form(&dto).unwrap_err(),
            "Property: name must not be empty"
        );
    }
}
