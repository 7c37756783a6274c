use contracts::domain::a003_room::aggregate::RoomDto;
use contracts::domain::common::AggregateId;
use contracts::enums::{RoomStatus, RoomType};
use leptos::prelude::*;

use super::view_model::{apply_room_type, RoomDetailsViewModel};
use crate::layout::property_context::use_property_context;
use crate::shared::components::form_field::{FormField, FormSelect};
use crate::shared::icons::icon;

#[component]
pub fn RoomDetails(
    id: Option<String>,
    on_saved: Callback<String>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let property_ctx = use_property_context();
    let vm = RoomDetailsViewModel::new(property_ctx.selected_id_untracked());
    vm.load_if_needed(id);

    let text = move |get: fn(&RoomDto) -> String| Signal::derive(move || vm.form.with(get));

    let property_options = Signal::derive(move || {
        property_ctx.properties.with(|list| {
            list.iter()
                .map(|p| (p.base.id.as_string(), p.display_label()))
                .collect::<Vec<_>>()
        })
    });
    let type_options: Vec<(String, String)> = RoomType::all()
        .into_iter()
        .map(|t| (t.code().to_string(), t.display_name().to_string()))
        .collect();
    let status_options: Vec<(String, String)> = RoomStatus::all()
        .into_iter()
        .map(|s| (s.code().to_string(), s.display_name().to_string()))
        .collect();

    view! {
        <div class="details-container room-details">
            <div class="details-header">
                <h3>{move || if vm.is_edit_mode() { "Edit room" } else { "New room" }}</h3>
            </div>

            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="details-form">
                <FormSelect
                    label="Property"
                    value=text(|f| f.property_id.clone())
                    options=property_options
                    on_change=Callback::new(move |v: String| vm.form.update(|f| f.property_id = v))
                    empty_label="Select a property"
                />
                <FormField
                    label="Number"
                    required=true
                    value=text(|f| f.code.clone().unwrap_or_default())
                    on_input=Callback::new(move |v: String| vm.form.update(|f| f.code = Some(v)))
                />
                <FormField
                    label="Name"
                    value=text(|f| f.description.clone())
                    on_input=Callback::new(move |v: String| vm.form.update(|f| f.description = v))
                    placeholder="Number and type when empty"
                />
                <FormSelect
                    label="Type"
                    value=text(|f| f.room_type.code().to_string())
                    options=type_options
                    on_change=Callback::new(move |v: String| {
                        if let Some(room_type) = RoomType::from_code(&v) {
                            vm.form.update(|f| apply_room_type(f, room_type));
                        }
                    })
                />
                <FormField
                    label="Floor"
                    input_type="number"
                    value=text(|f| f.floor.to_string())
                    on_input=Callback::new(move |v: String| {
                        if let Ok(floor) = v.trim().parse() {
                            vm.form.update(|f| f.floor = floor);
                        }
                    })
                />
                <FormField
                    label="Capacity"
                    input_type="number"
                    value=text(|f| f.capacity.to_string())
                    on_input=Callback::new(move |v: String| {
                        if let Ok(capacity) = v.trim().parse() {
                            vm.form.update(|f| f.capacity = capacity);
                        }
                    })
                />
                <FormSelect
                    label="Status"
                    value=text(|f| f.status.code().to_string())
                    options=status_options
                    on_change=Callback::new(move |v: String| {
                        if let Some(status) = RoomStatus::from_code(&v) {
                            vm.form.update(|f| f.status = status);
                        }
                    })
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
