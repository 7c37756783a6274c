//! Front desk dashboard: today's rooms and guest movements
//!
//! Landing page of both dashboard views. Follows the property selected in
//! the top bar.

use chrono::Local;
use contracts::dashboards::d400_front_desk::dto::{FrontDeskRequest, FrontDeskSummary};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::api;
use crate::layout::property_context::use_property_context;
use crate::layout::view_context::use_dashboard_view;
use crate::shared::components::stat_card::{StatCard, StatTone};
use crate::shared::date_utils::{parse_input_value, to_input_value};
use crate::shared::icons::icon;

fn occupancy_tone(rate: f64) -> StatTone {
    if rate >= 0.85 {
        StatTone::Good
    } else if rate >= 0.5 {
        StatTone::Neutral
    } else {
        StatTone::Warning
    }
}

fn attention_tone(count: u32) -> StatTone {
    if count > 0 {
        StatTone::Warning
    } else {
        StatTone::Neutral
    }
}

#[component]
pub fn FrontDeskDashboard() -> impl IntoView {
    let property_ctx = use_property_context();
    let view_ctx = use_dashboard_view();

    let date = RwSignal::new(to_input_value(Local::now().date_naive()));
    let summary: RwSignal<Option<FrontDeskSummary>> = RwSignal::new(None);
    let (error, set_error) = signal::<Option<String>>(None);

    let load = move || {
        let request = FrontDeskRequest {
            property_id: property_ctx.selected_id_untracked(),
            date: parse_input_value(&date.get_untracked()).map(to_input_value),
        };
        spawn_local(async move {
            match api::fetch_summary(&request).await {
                Ok(data) => {
                    summary.set(Some(data));
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    Effect::new(move |_| {
        property_ctx.selected_id();
        date.track();
        load();
    });

    let count = move |get: fn(&FrontDeskSummary) -> u32| {
        Signal::derive(move || summary.with(|s| s.as_ref().map(|s| get(s).to_string())))
    };

    let property_name = move || {
        let selected = property_ctx.selected_id();
        property_ctx.properties.with(|list| {
            selected
                .and_then(|id| {
                    list.iter()
                        .find(|p| p.to_string_id() == id)
                        .map(|p| p.display_label())
                })
                .unwrap_or_else(|| "All properties".to_string())
        })
    };

    view! {
        <div class="content dashboard">
            <div class="header">
                <div class="header__title">
                    <h2>"Front desk"</h2>
                    <span class="header__subtitle">{property_name}</span>
                    <Badge>{move || format!("{} view", view_ctx.get().display_name())}</Badge>
                </div>
                <div class="header__actions">
                    <input
                        type="date"
                        prop:value=move || date.get()
                        on:change=move |ev| date.set(event_target_value(&ev))
                    />
                    <button class="btn btn-secondary" on:click=move |_| load()>
                        {icon("refresh")}
                        " Refresh"
                    </button>
                </div>
            </div>

            {move || error.get().map(|e| view! {
                <MessageBar intent=MessageBarIntent::Error>
                    <MessageBarBody>{e}</MessageBarBody>
                </MessageBar>
            })}

            <div class="dashboard__cards">
                <StatCard
                    label="Occupancy"
                    icon_name="activity"
                    value=Signal::derive(move || summary.with(|s| s.as_ref().map(|s| s.occupancy_label())))
                    tone=Signal::derive(move || {
                        summary.with(|s| s.as_ref().map(|s| occupancy_tone(s.occupancy_rate())).unwrap_or_default())
                    })
                    subtitle=Signal::derive(move || {
                        summary.with(|s| s.as_ref().map(|s| format!("{} in house", s.in_house)))
                    })
                />
                <StatCard label="Arrivals" icon_name="calendar" value=count(|s| s.arrivals) />
                <StatCard label="Departures" icon_name="log-out" value=count(|s| s.departures) />
                <StatCard
                    label="Pending"
                    icon_name="orders"
                    value=count(|s| s.pending_reservations)
                    tone=Signal::derive(move || {
                        summary.with(|s| s.as_ref().map(|s| attention_tone(s.pending_reservations)).unwrap_or_default())
                    })
                />
            </div>

            <h3>"Rooms"</h3>
            <div class="dashboard__cards">
                <StatCard label="Total" icon_name="bed" value=count(|s| s.total_rooms) />
                <StatCard label="Available" icon_name="bed" value=count(|s| s.available_rooms) tone=StatTone::Good />
                <StatCard label="Occupied" icon_name="user" value=count(|s| s.occupied_rooms) />
                <StatCard
                    label="Cleaning"
                    icon_name="refresh"
                    value=count(|s| s.cleaning_rooms)
                    tone=Signal::derive(move || {
                        summary.with(|s| s.as_ref().map(|s| attention_tone(s.cleaning_rooms)).unwrap_or_default())
                    })
                />
                <StatCard
                    label="Out of service"
                    icon_name="x"
                    value=count(|s| s.out_of_service_rooms)
                    tone=StatTone::Bad
                />
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tones() {
        assert_eq!(occupancy_tone(0.9), StatTone::Good);
        assert_eq!(occupancy_tone(0.6), StatTone::Neutral);
        assert_eq!(occupancy_tone(0.1), StatTone::Warning);
        assert_eq!(attention_tone(0), StatTone::Neutral);
        assert_eq!(attention_tone(2), StatTone::Warning);
    }
}
