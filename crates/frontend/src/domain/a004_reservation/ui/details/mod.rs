//! Reservation details
//!
//! - view_model.rs: form state, load/save and status commands
//! - view.rs: form, room picker and lifecycle buttons

mod view;
mod view_model;

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};
use leptos_router::NavigateOptions;

pub use view::ReservationDetails;
pub use view_model::ReservationDetailsViewModel;

/// `/reservations/:id`, `new` opens an empty booking
#[component]
pub fn ReservationDetailsPage() -> impl IntoView {
    let params = use_params_map();
    let navigate = StoredValue::new_local(use_navigate());
    let back_to_list = move || {
        navigate.with_value(|nav| nav("/reservations", NavigateOptions::default()));
    };

    move || {
        let id = params.with(|p| p.get("id")).filter(|id| id != "new");
        view! {
            <ReservationDetails
                id=id
                on_saved=Callback::new(move |_id: String| back_to_list())
                on_cancel=Callback::new(move |_: ()| back_to_list())
            />
        }
    }
}
