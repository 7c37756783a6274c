use contracts::domain::a002_customer::aggregate::{Customer, CustomerDto};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a002_customer::api;

#[derive(Clone, Copy)]
pub struct CustomerDetailsViewModel {
    pub form: RwSignal<CustomerDto>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl CustomerDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(CustomerDto::default()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with(|f| f.id.is_some())
    }

    pub fn load_if_needed(&self, id: Option<String>) {
        let Some(id) = id else { return };
        let this = *self;
        spawn_local(async move {
            match api::fetch_by_id(&id).await {
                Ok(customer) => this.form.set(CustomerDto::from(&customer)),
                Err(e) => this.error.set(Some(format!("Failed to load: {}", e))),
            }
        });
    }

    pub fn save_command(&self, on_saved: Callback<String>) {
        let current = self.form.get_untracked();
        if let Err(e) = Customer::new_for_insert(&current).validate() {
            self.error.set(Some(e));
            return;
        }

        let this = *self;
        this.saving.set(true);
        this.error.set(None);
        spawn_local(async move {
            match api::save(&current).await {
                Ok(id) => on_saved.run(id),
                Err(e) => this.error.set(Some(e)),
            }
            this.saving.set(false);
        });
    }
}

impl Default for CustomerDetailsViewModel {
    fn default() -> Self {
        Self::new()
    }
}
