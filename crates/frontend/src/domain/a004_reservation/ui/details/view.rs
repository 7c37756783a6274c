use contracts::domain::a004_reservation::aggregate::ReservationDto;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;

use super::view_model::{apply_property, ReservationDetailsViewModel};
use crate::domain::a004_reservation::ui::list::status_class;
use crate::layout::notifications::use_notifications;
use crate::layout::property_context::use_property_context;
use crate::shared::components::form_field::{FormField, FormSelect};
use crate::shared::date_utils::{format_stay, parse_input_value, to_input_value};
use crate::shared::icons::icon;

#[component]
pub fn ReservationDetails(
    id: Option<String>,
    on_saved: Callback<String>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let property_ctx = use_property_context();
    let notifications = use_notifications();
    let vm = ReservationDetailsViewModel::new(property_ctx.selected_id_untracked());
    vm.load_if_needed(id);

    let text = move |get: fn(&ReservationDto) -> String| Signal::derive(move || vm.form.with(get));

    let property_options = Signal::derive(move || {
        property_ctx.properties.with(|list| {
            list.iter()
                .map(|p| (p.base.id.as_string(), p.display_label()))
                .collect::<Vec<_>>()
        })
    });

    let on_property_change = move |property_id: String| {
        let currency = property_ctx.properties.with_untracked(|list| {
            list.iter()
                .find(|p| p.base.id.as_string() == property_id)
                .map(|p| p.currency.clone())
        });
        vm.form
            .update(|f| apply_property(f, property_id.clone(), currency.as_deref()));
        vm.load_rooms();
    };

    let set_number = move |v: String, apply: fn(&mut ReservationDto, i32)| {
        if let Ok(n) = v.trim().parse() {
            vm.form.update(|f| apply(f, n));
        }
    };

    view! {
        <div class="details-container reservation-details">
            <div class="details-header">
                <h3>
                    {move || vm.form.with(|f| match &f.code {
                        Some(code) if f.id.is_some() => format!("Reservation {}", code),
                        _ => "New reservation".to_string(),
                    })}
                </h3>
                {move || vm.status().map(|status| view! {
                    <span class=status_class(status)>{status.display_name()}</span>
                })}
            </div>

            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="details-form">
                <FormSelect
                    label="Property"
                    value=text(|f| f.property_id.clone())
                    options=property_options
                    on_change=Callback::new(on_property_change)
                    empty_label="Select a property"
                />
                <FormSelect
                    label="Room"
                    value=text(|f| f.room_id.clone().unwrap_or_default())
                    options=Signal::derive(move || vm.room_options())
                    on_change=Callback::new(move |v: String| {
                        vm.form.update(|f| f.room_id = (!v.is_empty()).then_some(v))
                    })
                    empty_label="Not assigned"
                />
                <FormField
                    label="Guest"
                    required=true
                    value=text(|f| f.guest_name.clone())
                    on_input=Callback::new(move |v: String| vm.form.update(|f| f.guest_name = v))
                />
                <FormField
                    label="Email"
                    input_type="email"
                    value=text(|f| f.guest_email.clone())
                    on_input=Callback::new(move |v: String| vm.form.update(|f| f.guest_email = v))
                />
                <FormField
                    label="Phone"
                    input_type="tel"
                    value=text(|f| f.guest_phone.clone())
                    on_input=Callback::new(move |v: String| vm.form.update(|f| f.guest_phone = v))
                />
                <FormField
                    label="Check-in"
                    input_type="date"
                    required=true
                    value=text(|f| to_input_value(f.check_in))
                    on_input=Callback::new(move |v: String| {
                        if let Some(date) = parse_input_value(&v) {
                            vm.form.update(|f| {
                                f.check_in = date;
                                if f.check_out <= date {
                                    f.check_out = date.succ_opt().unwrap_or(date);
                                }
                            });
                        }
                    })
                />
                <FormField
                    label="Check-out"
                    input_type="date"
                    required=true
                    value=text(|f| to_input_value(f.check_out))
                    on_input=Callback::new(move |v: String| {
                        if let Some(date) = parse_input_value(&v) {
                            vm.form.update(|f| f.check_out = date);
                        }
                    })
                />
                <div class="form-group">
                    <label>"Stay"</label>
                    <span class="form__value">
                        {move || vm.form.with(|f| format_stay(f.check_in, f.check_out))}
                    </span>
                </div>
                <FormField
                    label="Adults"
                    input_type="number"
                    value=text(|f| f.adults.to_string())
                    on_input=Callback::new(move |v: String| set_number(v, |f, n| f.adults = n))
                />
                <FormField
                    label="Children"
                    input_type="number"
                    value=text(|f| f.children.to_string())
                    on_input=Callback::new(move |v: String| set_number(v, |f, n| f.children = n))
                />
                <FormField
                    label="Total"
                    input_type="number"
                    value=text(|f| format!("{:.2}", f.total_amount))
                    on_input=Callback::new(move |v: String| {
                        if let Ok(amount) = v.trim().parse::<f64>() {
                            vm.form.update(|f| f.total_amount = amount);
                        }
                    })
                />
                <FormField
                    label="Currency"
                    value=text(|f| f.currency.clone())
                    on_input=Callback::new(move |v: String| vm.form.update(|f| f.currency = v))
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
                <Show when=move || !vm.is_read_only()>
                    <button
                        class="btn btn-primary"
                        on:click=move |_| vm.save_command(on_saved)
                        disabled=move || vm.saving.get()
                    >
                        {icon("save")}
                        {move || if vm.is_edit_mode() { " Save" } else { " Create" }}
                    </button>
                </Show>
                {move || {
                    vm.status()
                        .map(|status| status.next_statuses())
                        .unwrap_or_default()
                        .into_iter()
                        .map(|next| view! {
                            <button
                                class="btn btn-secondary"
                                on:click=move |_| vm.change_status_command(next, notifications)
                                disabled=move || vm.saving.get()
                            >
                                {next.display_name()}
                            </button>
                        })
                        .collect_view()
                }}
                <button class="btn btn-secondary" on:click=move |_| on_cancel.run(())>
                    {icon("cancel")}
                    " Back"
                </button>
            </div>
        </div>
    }
}
