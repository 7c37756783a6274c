use contracts::domain::a003_room::aggregate::{Room, RoomListQuery};
use contracts::domain::common::AggregateId;
use contracts::enums::RoomStatus;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;
use std::collections::HashSet;
use thaw::*;

use crate::domain::a003_room::api;
use crate::layout::notifications::use_notifications;
use crate::layout::property_context::use_property_context;
use crate::shared::components::table_checkbox::TableCheckbox;
use crate::shared::dialog::confirm;
use crate::shared::icons::icon;
use crate::shared::list_utils::{cmp_text, get_sort_class, get_sort_indicator, sort_list, Sortable};

#[derive(Clone, Debug, PartialEq)]
pub struct RoomRow {
    pub id: String,
    pub number: String,
    pub name: String,
    pub room_type: String,
    pub floor: i32,
    pub capacity: i32,
    pub status: RoomStatus,
}

impl From<Room> for RoomRow {
    fn from(r: Room) -> Self {
        Self {
            id: r.base.id.as_string(),
            number: r.base.code,
            name: r.base.description,
            room_type: r.room_type.display_name().to_string(),
            floor: r.floor,
            capacity: r.capacity,
            status: r.status,
        }
    }
}

impl Sortable for RoomRow {
    fn compare_by_field(&self, other: &Self, field: &str) -> std::cmp::Ordering {
        match field {
            "floor" => self.floor.cmp(&other.floor).then_with(|| compare_numbers(&self.number, &other.number)),
            "type" => cmp_text(&self.room_type, &other.room_type),
            "capacity" => self.capacity.cmp(&other.capacity),
            "status" => self.status.code().cmp(other.status.code()),
            _ => compare_numbers(&self.number, &other.number),
        }
    }
}

/// Room numbers sort numerically when both parse ("9" before "10")
fn compare_numbers(a: &str, b: &str) -> std::cmp::Ordering {
    match (a.parse::<i64>(), b.parse::<i64>()) {
        (Ok(x), Ok(y)) => x.cmp(&y),
        _ => cmp_text(a, b),
    }
}

fn status_class(status: RoomStatus) -> &'static str {
    match status {
        RoomStatus::Available => "badge badge--success",
        RoomStatus::Occupied => "badge badge--primary",
        RoomStatus::Cleaning => "badge badge--warning",
        RoomStatus::OutOfService => "badge badge--error",
    }
}

#[component]
pub fn RoomList() -> impl IntoView {
    let navigate = StoredValue::new_local(use_navigate());
    let notifications = use_notifications();
    let property_ctx = use_property_context();

    let rows: RwSignal<Vec<RoomRow>> = RwSignal::new(Vec::new());
    let status_filter = RwSignal::new(String::new());
    let sort = RwSignal::new(("number".to_string(), true));
    let selected: RwSignal<HashSet<String>> = RwSignal::new(HashSet::new());
    let (error, set_error) = signal::<Option<String>>(None);

    let fetch = move || {
        let query = RoomListQuery {
            property_id: property_ctx.selected_id_untracked(),
            status: RoomStatus::from_code(&status_filter.get_untracked()),
        };
        spawn_local(async move {
            match api::fetch_list(&query).await {
                Ok(list) => {
                    rows.set(list.into_iter().map(Into::into).collect());
                    selected.set(HashSet::new());
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    // Reload whenever the selected property changes
    Effect::new(move |_| {
        property_ctx.selected_id();
        fetch();
    });

    let sorted = Memo::new(move |_| {
        let mut list = rows.get();
        sort.with(|(field, asc)| sort_list(&mut list, field, *asc));
        list
    });

    let open = move |id: &str| {
        let path = format!("/rooms/{}", id);
        navigate.with_value(|nav| nav(&path, NavigateOptions::default()));
    };

    let toggle_sort = move |field: &'static str| {
        move |_| {
            sort.update(|(current, asc)| {
                if current == field {
                    *asc = !*asc;
                } else {
                    *current = field.to_string();
                    *asc = true;
                }
            })
        }
    };

    let sort_header = move |label: &'static str, field: &'static str| {
        view! {
            <th class="table__header-cell table__sortable-header" on:click=toggle_sort(field)>
                {label}
                <span class=move || sort.with(|(f, _)| get_sort_class(f, field))>
                    {move || sort.with(|(f, asc)| get_sort_indicator(f, field, *asc))}
                </span>
            </th>
        }
    };

    let delete_selected = move || {
        let ids: Vec<String> = selected.get_untracked().into_iter().collect();
        if ids.is_empty() || !confirm(&format!("Delete {} room(s)?", ids.len())) {
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
                    <h2>"Rooms"</h2>
                    <Badge>{move || rows.with(|r| r.len().to_string())}</Badge>
                </div>
                <div class="header__actions">
                    <select
                        prop:value=move || status_filter.get()
                        on:change=move |ev| {
                            status_filter.set(event_target_value(&ev));
                            fetch();
                        }
                    >
                        <option value="">"All statuses"</option>
                        {RoomStatus::all()
                            .into_iter()
                            .map(|s| view! { <option value=s.code()>{s.display_name()}</option> })
                            .collect_view()}
                    </select>
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
                    <button class="btn btn-secondary" on:click=move |_| fetch()>
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

            <div class="table-container">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell table__header-cell--checkbox"></th>
                            {sort_header("Number", "number")}
                            <th class="table__header-cell">"Name"</th>
                            {sort_header("Type", "type")}
                            {sort_header("Floor", "floor")}
                            {sort_header("Capacity", "capacity")}
                            {sort_header("Status", "status")}
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || sorted.get()
                            key=|row| (row.id.clone(), row.status)
                            children=move |row: RoomRow| {
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
                                        <td class="table__cell">{row.number}</td>
                                        <td class="table__cell">{row.name}</td>
                                        <td class="table__cell">{row.room_type}</td>
                                        <td class="table__cell">{row.floor}</td>
                                        <td class="table__cell">{row.capacity}</td>
                                        <td class="table__cell">
                                            <span class=status_class(row.status)>{row.status.display_name()}</span>
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cmp::Ordering;

    #[test]
    fn test_room_numbers_sort_numerically() {
        assert_eq!(compare_numbers("9", "10"), Ordering::Less);
        assert_eq!(compare_numbers("101", "101"), Ordering::Equal);
        assert_eq!(compare_numbers("A1", "a2"), Ordering::Less);
    }

    #[test]
    fn test_sorted_rows_are_comparable() {
        use contracts::domain::a003_room::aggregate::RoomDto;

        let room = |number: &str, floor: i32| {
            RoomRow::from(Room::new_for_insert(&RoomDto {
                code: Some(number.into()),
                property_id: "p1".into(),
                floor,
                capacity: 2,
                ..Default::default()
            }))
        };
        let rows = vec![room("10", 1), room("9", 1)];
        let mut sorted = rows.clone();
        sort_list(&mut sorted, "number", true);
        assert_ne!(sorted, rows);
        assert_eq!(sorted[0].number, "9");
        assert_eq!(sorted[0], rows[1]);
    }
}
