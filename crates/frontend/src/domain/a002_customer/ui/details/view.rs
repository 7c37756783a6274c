use contracts::domain::a002_customer::aggregate::CustomerDto;
use leptos::prelude::*;

use super::view_model::CustomerDetailsViewModel;
use crate::shared::components::form_field::FormField;
use crate::shared::icons::icon;

#[component]
pub fn CustomerDetails(
    id: Option<String>,
    on_saved: Callback<String>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = CustomerDetailsViewModel::new();
    vm.load_if_needed(id);

    let text = move |get: fn(&CustomerDto) -> String| Signal::derive(move || vm.form.with(get));

    view! {
        <div class="details-container customer-details">
            <div class="details-header">
                <h3>{move || if vm.is_edit_mode() { "Edit customer" } else { "New customer" }}</h3>
            </div>

            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="details-form">
                <FormField
                    label="Code"
                    value=text(|f| f.code.clone().unwrap_or_default())
                    on_input=Callback::new(move |v: String| vm.form.update(|f| f.code = Some(v)))
                />
                <FormField
                    label="Name"
                    required=true
                    value=text(|f| f.description.clone())
                    on_input=Callback::new(move |v: String| vm.form.update(|f| f.description = v))
                />
                <FormField
                    label="Legal name"
                    value=text(|f| f.legal_name.clone())
                    on_input=Callback::new(move |v: String| vm.form.update(|f| f.legal_name = v))
                />
                <FormField
                    label="Email"
                    input_type="email"
                    value=text(|f| f.email.clone())
                    on_input=Callback::new(move |v: String| vm.form.update(|f| f.email = v))
                />
                <FormField
                    label="Phone"
                    input_type="tel"
                    value=text(|f| f.phone.clone())
                    on_input=Callback::new(move |v: String| vm.form.update(|f| f.phone = v))
                />
                <FormField
                    label="VAT number"
                    value=text(|f| f.vat_number.clone())
                    on_input=Callback::new(move |v: String| vm.form.update(|f| f.vat_number = v))
                />
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
