use contracts::domain::a002_customer::aggregate::Customer;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;
use std::collections::HashSet;
use thaw::*;

use crate::domain::a002_customer::api;
use crate::layout::notifications::use_notifications;
use crate::shared::components::table_checkbox::TableCheckbox;
use crate::shared::dialog::confirm;
use crate::shared::icons::icon;
use crate::shared::list_utils::{filter_list, Searchable};
use crate::system::auth::guard::RequireAdmin;

#[derive(Clone, Debug)]
pub struct CustomerRow {
    pub id: String,
    pub code: String,
    pub name: String,
    pub legal_name: String,
    pub email: String,
    pub phone: String,
}

impl From<Customer> for CustomerRow {
    fn from(c: Customer) -> Self {
        Self {
            id: c.base.id.as_string(),
            code: c.base.code,
            name: c.base.description,
            legal_name: c.legal_name,
            email: c.email,
            phone: c.phone,
        }
    }
}

impl Searchable for CustomerRow {
    fn matches_filter(&self, filter: &str) -> bool {
        let filter = filter.to_lowercase();
        [&self.code, &self.name, &self.legal_name, &self.email]
            .iter()
            .any(|v| v.to_lowercase().contains(&filter))
    }
}

#[component]
pub fn CustomerListPage() -> impl IntoView {
    view! {
        <RequireAdmin>
            <CustomerList />
        </RequireAdmin>
    }
}

#[component]
fn CustomerList() -> impl IntoView {
    let navigate = StoredValue::new_local(use_navigate());
    let notifications = use_notifications();

    let (items, set_items) = signal::<Vec<CustomerRow>>(Vec::new());
    let search = RwSignal::new(String::new());
    let selected: RwSignal<HashSet<String>> = RwSignal::new(HashSet::new());
    let (error, set_error) = signal::<Option<String>>(None);

    let fetch = move || {
        spawn_local(async move {
            match api::fetch_all().await {
                Ok(list) => {
                    let mut rows: Vec<CustomerRow> = list.into_iter().map(Into::into).collect();
                    rows.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
                    set_items.set(rows);
                    selected.set(HashSet::new());
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    let open = move |id: &str| {
        let path = format!("/customers/{}", id);
        navigate.with_value(|nav| nav(&path, NavigateOptions::default()));
    };

    let delete_selected = move || {
        let ids: Vec<String> = selected.get_untracked().into_iter().collect();
        if ids.is_empty() || !confirm(&format!("Delete {} customer(s)?", ids.len())) {
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

    fetch();

    view! {
        <div class="content">
            <div class="header">
                <h2>"Customers"</h2>
                <div class="header__actions">
                    <input
                        type="search"
                        class="header__search"
                        placeholder="Search..."
                        prop:value=move || search.get()
                        on:input=move |ev| search.set(event_target_value(&ev))
                    />
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
                            <th class="table__header-cell">"Code"</th>
                            <th class="table__header-cell">"Name"</th>
                            <th class="table__header-cell">"Legal name"</th>
                            <th class="table__header-cell">"Email"</th>
                            <th class="table__header-cell">"Phone"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || filter_list(items.get(), &search.get())
                            key=|row| row.id.clone()
                            children=move |row: CustomerRow| {
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
                                        <td class="table__cell">{row.name}</td>
                                        <td class="table__cell">{row.legal_name}</td>
                                        <td class="table__cell">{row.email}</td>
                                        <td class="table__cell">{row.phone}</td>
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
