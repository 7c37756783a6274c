//! Property details
//!
//! - view_model.rs: form state, load and save commands
//! - view.rs: the form itself
//!
//! `PropertyDetailsPage` binds the form to `/properties/:id`, where `new`
//! opens an empty form.

mod view;
mod view_model;

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};
use leptos_router::NavigateOptions;

pub use view::PropertyDetails;
pub use view_model::PropertyDetailsViewModel;

use crate::layout::property_context::use_property_context;

#[component]
pub fn PropertyDetailsPage() -> impl IntoView {
    let params = use_params_map();
    let navigate = StoredValue::new_local(use_navigate());
    let property_ctx = use_property_context();

    let back_to_list = move || {
        navigate.with_value(|nav| nav("/properties", NavigateOptions::default()));
    };

    move || {
        let id = params.with(|p| p.get("id")).filter(|id| id != "new");
        view! {
            <PropertyDetails
                id=id
                on_saved=Callback::new(move |_id: String| {
                    property_ctx.load();
                    back_to_list();
                })
                on_cancel=Callback::new(move |_: ()| back_to_list())
            />
        }
    }
}
