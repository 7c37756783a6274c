use leptos::prelude::*;

use contracts::domain::common::AggregateId;

use crate::layout::property_context::use_property_context;

/// Property filter shared by the user view pages
#[component]
pub fn PropertySelector() -> impl IntoView {
    let ctx = use_property_context();

    view! {
        <select
            class="top-header__property-select"
            title="Property"
            prop:value=move || ctx.selected_id().unwrap_or_default()
            on:change=move |ev| {
                let value = event_target_value(&ev);
                ctx.select(if value.is_empty() { None } else { Some(value) });
            }
        >
            <option value="">"All properties"</option>
            {move || {
                let selected = ctx.selected_id();
                ctx.properties
                    .get()
                    .into_iter()
                    .map(|p| {
                        let id = p.base.id.as_string();
                        let is_selected = selected.as_deref() == Some(id.as_str());
                        view! {
                            <option value=id selected=is_selected>
                                {p.display_label()}
                            </option>
                        }
                    })
                    .collect_view()
            }}
        </select>
    }
}
