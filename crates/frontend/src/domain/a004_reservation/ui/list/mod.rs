mod state;

use contracts::domain::a003_room::aggregate::RoomListQuery;
use contracts::domain::a004_reservation::aggregate::Reservation;
use contracts::domain::common::AggregateId;
use contracts::enums::ReservationStatus;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;
use std::collections::{HashMap, HashSet};
use thaw::*;

use crate::domain::{a003_room, a004_reservation::api};
use crate::layout::notifications::use_notifications;
use crate::layout::property_context::use_property_context;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table_checkbox::TableCheckbox;
use crate::shared::date_utils::format_stay;
use crate::shared::dialog::confirm;
use crate::shared::icons::icon;
use state::create_state;

#[derive(Clone, Debug)]
pub struct ReservationRow {
    pub id: String,
    pub code: String,
    pub guest: String,
    pub stay: String,
    pub room: String,
    pub guests: i32,
    pub status: ReservationStatus,
    pub total: String,
}

impl ReservationRow {
    fn new(r: Reservation, room_numbers: &HashMap<String, String>) -> Self {
        let room = r
            .room_id
            .as_ref()
            .map(|id| room_numbers.get(id).cloned().unwrap_or_else(|| "?".to_string()))
            .unwrap_or_else(|| "-".to_string());
        Self {
            id: r.base.id.as_string(),
            code: r.base.code.clone(),
            stay: format_stay(r.check_in, r.check_out),
            guests: r.guests(),
            total: format!("{:.2} {}", r.total_amount, r.currency),
            guest: r.guest_name,
            room,
            status: r.status,
        }
    }
}

pub(crate) fn status_class(status: ReservationStatus) -> &'static str {
    match status {
        ReservationStatus::Pending => "badge badge--warning",
        ReservationStatus::Confirmed => "badge badge--primary",
        ReservationStatus::CheckedIn => "badge badge--success",
        ReservationStatus::CheckedOut => "badge badge--neutral",
        ReservationStatus::Cancelled | ReservationStatus::NoShow => "badge badge--error",
    }
}

#[component]
pub fn ReservationList() -> impl IntoView {
    let navigate = StoredValue::new_local(use_navigate());
    let notifications = use_notifications();
    let property_ctx = use_property_context();

    let state = create_state();
    let rows: RwSignal<Vec<ReservationRow>> = RwSignal::new(Vec::new());
    let selected: RwSignal<HashSet<String>> = RwSignal::new(HashSet::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);

    let fetch = move || {
        let property_id = property_ctx.selected_id_untracked();
        let query = state.with_untracked(|s| s.query(property_id.clone()));
        set_loading.set(true);
        spawn_local(async move {
            let rooms_query = RoomListQuery {
                property_id,
                status: None,
            };
            // Room numbers are only labels, the list still works without them
            let room_numbers: HashMap<String, String> =
                match a003_room::api::fetch_list(&rooms_query).await {
                    Ok(rooms) => rooms
                        .into_iter()
                        .map(|r| (r.base.id.as_string(), r.base.code))
                        .collect(),
                    Err(e) => {
                        log::warn!("Rooms not available: {}", e);
                        HashMap::new()
                    }
                };

            match api::fetch_page(&query).await {
                Ok(page) => {
                    state.update(|s| {
                        s.total_count = page.total_count as usize;
                        s.total_pages = page.total_pages as usize;
                    });
                    rows.set(
                        page.items
                            .into_iter()
                            .map(|r| ReservationRow::new(r, &room_numbers))
                            .collect(),
                    );
                    selected.set(HashSet::new());
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| {
        property_ctx.selected_id();
        state.update_untracked(|s| s.page = 0);
        fetch();
    });

    let open = move |id: &str| {
        let path = format!("/reservations/{}", id);
        navigate.with_value(|nav| nav(&path, NavigateOptions::default()));
    };

    let search_input = RwSignal::new(String::new());
    let apply_search = move || {
        state.update(|s| {
            s.search = search_input.get_untracked();
            s.page = 0;
        });
        fetch();
    };

    let delete_selected = move || {
        let ids: Vec<String> = selected.get_untracked().into_iter().collect();
        if ids.is_empty() || !confirm(&format!("Delete {} reservation(s)?", ids.len())) {
            return;
        }
        spawn_local(async move {
            for id in &ids {
                if let Err(e) = api::delete_by_id(id).await {
                    notifications.error(e);
                }
            }
            fetch();
        });
    };

    view! {
        <div class="content">
            <div class="header">
                <div class="header__title">
                    <h2>"Reservations"</h2>
                    <Badge>{move || state.with(|s| s.total_count.to_string())}</Badge>
                </div>
                <div class="header__actions">
                    <button class="btn btn-primary" on:click=move |_| open("new")>
                        {icon("plus")}
                        " New"
                    </button>
                    <button
                        class="btn btn-secondary"
                        on:click=move |_| delete_selected()
                        disabled=move || selected.with(|s| s.is_empty())
                    >
                        {icon("delete")}
                        " Delete"
                    </button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| fetch()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {icon("refresh")}
                        " Refresh"
                    </Button>
                </div>
            </div>

            <div class="filter-panel">
                <form on:submit=move |ev: leptos::ev::SubmitEvent| {
                    ev.prevent_default();
                    apply_search();
                }>
                    <input
                        type="search"
                        placeholder="Confirmation number, guest or email..."
                        prop:value=move || search_input.get()
                        on:input=move |ev| search_input.set(event_target_value(&ev))
                    />
                    <select
                        on:change=move |ev| {
                            let code = event_target_value(&ev);
                            state.update(|s| {
                                s.status = ReservationStatus::from_code(&code);
                                s.page = 0;
                            });
                            fetch();
                        }
                    >
                        <option value="">"All statuses"</option>
                        {ReservationStatus::all()
                            .into_iter()
                            .map(|s| view! { <option value=s.code()>{s.display_name()}</option> })
                            .collect_view()}
                    </select>
                    <button type="submit" class="btn btn-secondary">"Search"</button>
                </form>
            </div>

            {move || error.get().map(|e| view! {
                <MessageBar intent=MessageBarIntent::Error>
                    <MessageBarBody>{e}</MessageBarBody>
                </MessageBar>
            })}

            <div class="table-container">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell table__header-cell--checkbox"></th>
                            <th class="table__header-cell">"Number"</th>
                            <th class="table__header-cell">"Guest"</th>
                            <th class="table__header-cell">"Stay"</th>
                            <th class="table__header-cell">"Room"</th>
                            <th class="table__header-cell">"Guests"</th>
                            <th class="table__header-cell">"Status"</th>
                            <th class="table__header-cell table__header-cell--right">"Total"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || rows.get()
                            key=|row| (row.id.clone(), row.status)
                            children=move |row: ReservationRow| {
                                let id = row.id.clone();
                                let id_for_check = row.id.clone();
                                let id_for_toggle = row.id.clone();
                                view! {
                                    <tr class="table__row" on:click=move |_| open(&id)>
                                        <TableCheckbox
                                            checked=Signal::derive(move || selected.with(|s| s.contains(&id_for_check)))
                                            on_change=Callback::new(move |checked: bool| {
                                                let id = id_for_toggle.clone();
                                                selected.update(|s| {
                                                    if checked { s.insert(id); } else { s.remove(&id); }
                                                });
                                            })
                                        />
                                        <td class="table__cell">{row.code}</td>
                                        <td class="table__cell">{row.guest}</td>
                                        <td class="table__cell">{row.stay}</td>
                                        <td class="table__cell">{row.room}</td>
                                        <td class="table__cell">{row.guests}</td>
                                        <td class="table__cell">
                                            <span class=status_class(row.status)>{row.status.display_name()}</span>
                                        </td>
                                        <td class="table__cell table__cell--right">{row.total}</td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </div>

            <PaginationControls
                current_page=Signal::derive(move || state.with(|s| s.page))
                total_pages=Signal::derive(move || state.with(|s| s.total_pages))
                total_count=Signal::derive(move || state.with(|s| s.total_count))
                page_size=Signal::derive(move || state.with(|s| s.page_size))
                on_page_change=Callback::new(move |page: usize| {
                    state.update(|s| s.page = page);
                    fetch();
                })
                on_page_size_change=Callback::new(move |size: usize| {
                    state.update(|s| { s.page_size = size; s.page = 0; });
                    fetch();
                })
            />
        </div>
    }
}
