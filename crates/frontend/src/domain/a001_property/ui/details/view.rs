use leptos::prelude::*;

use super::view_model::PropertyDetailsViewModel;
use crate::shared::components::form_field::{FormField, FormSelect};
use crate::shared::icons::icon;

#[component]
pub fn PropertyDetails(
    id: Option<String>,
    on_saved: Callback<String>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = PropertyDetailsViewModel::new();
    vm.load_if_needed(id);

    let text = move |get: fn(&contracts::domain::a001_property::aggregate::PropertyDto) -> String| {
        Signal::derive(move || vm.form.with(get))
    };

    view! {
        <div class="details-container property-details">
            <div class="details-header">
                <h3>{move || if vm.is_edit_mode() { "Edit property" } else { "New property" }}</h3>
            </div>

            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="details-form">
                <FormField
                    label="Code"
                    value=text(|f| f.code.clone().unwrap_or_default())
                    on_input=Callback::new(move |v: String| vm.form.update(|f| f.code = Some(v)))
                    placeholder="Generated when empty"
                />
                <FormField
                    label="Name"
                    required=true
                    value=text(|f| f.description.clone())
                    on_input=Callback::new(move |v: String| vm.form.update(|f| f.description = v))
                />
                <FormSelect
                    label="Customer"
                    value=text(|f| f.customer_id.clone().unwrap_or_default())
                    options=Signal::derive(move || vm.customer_options())
                    on_change=Callback::new(move |v: String| {
                        vm.form.update(|f| f.customer_id = (!v.is_empty()).then_some(v))
                    })
                    empty_label="No customer"
                />
                <FormField
                    label="Address"
                    value=text(|f| f.address.clone())
                    on_input=Callback::new(move |v: String| vm.form.update(|f| f.address = v))
                />
                <FormField
                    label="City"
                    value=text(|f| f.city.clone())
                    on_input=Callback::new(move |v: String| vm.form.update(|f| f.city = v))
                />
                <FormField
                    label="Country"
                    value=text(|f| f.country.clone())
                    on_input=Callback::new(move |v: String| vm.form.update(|f| f.country = v))
                    placeholder="ISO code, e.g. PT"
                />
                <FormField
                    label="Time zone"
                    value=text(|f| f.timezone.clone())
                    on_input=Callback::new(move |v: String| vm.form.update(|f| f.timezone = v))
                    placeholder="Europe/Lisbon"
                />
                <FormField
                    label="Currency"
                    required=true
                    value=text(|f| f.currency.clone())
                    on_input=Callback::new(move |v: String| vm.form.update(|f| f.currency = v))
                />
                <FormField
                    label="Stars"
                    input_type="number"
                    value=text(|f| f.star_rating.map(|s| s.to_string()).unwrap_or_default())
                    on_input=Callback::new(move |v: String| {
                        vm.form.update(|f| f.star_rating = v.trim().parse().ok())
                    })
                />
                <div class="form-group">
                    <label>"Comment"</label>
                    <textarea
                        rows="3"
                        prop:value=move || vm.form.with(|f| f.comment.clone().unwrap_or_default())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            vm.form.update(|f| f.comment = (!value.is_empty()).then_some(value));
                        }
                    />
                </div>
            </div>

            <div class="details-actions">
                <button
                    class="btn btn-primary"
                    on:click=move |_| vm.save_command(on_saved)
                    disabled=move || vm.saving.get()
                >
                    {icon("save")}
                    {move || if vm.is_edit_mode() { " Save" } else { " Create" }}
                </button>
                <button class="btn btn-secondary" on:click=move |_| on_cancel.run(())>
                    {icon("cancel")}
                    " Cancel"
                </button>
            </div>
        </div>
    }
}
