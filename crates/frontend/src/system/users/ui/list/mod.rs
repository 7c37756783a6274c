mod state;

use contracts::system::users::{UpdateUserDto, User};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::HashSet;
use thaw::*;

use crate::layout::notifications::use_notifications;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table_checkbox::TableCheckbox;
use crate::shared::date_utils::format_datetime;
use crate::shared::dialog::confirm;
use crate::shared::icons::icon;
use crate::shared::list_utils::{cmp_text, get_sort_class, get_sort_indicator, sort_list, Searchable, Sortable};
use crate::system::auth::guard::RequireAdmin;
use crate::system::users::api;
use state::create_state;

impl Sortable for User {
    fn compare_by_field(&self, other: &Self, field: &str) -> std::cmp::Ordering {
        let opt = |v: &Option<String>| v.clone().unwrap_or_default();
        match field {
            "full_name" => cmp_text(&opt(&self.full_name), &opt(&other.full_name)),
            "email" => cmp_text(&opt(&self.email), &opt(&other.email)),
            "is_admin" => self.is_admin.cmp(&other.is_admin),
            "is_active" => self.is_active.cmp(&other.is_active),
            "last_login_at" => self.last_login_at.cmp(&other.last_login_at),
            _ => cmp_text(&self.username, &other.username),
        }
    }
}

impl Searchable for User {
    fn matches_filter(&self, filter: &str) -> bool {
        let filter = filter.to_lowercase();
        [Some(&self.username), self.full_name.as_ref(), self.email.as_ref()]
            .into_iter()
            .flatten()
            .any(|v| v.to_lowercase().contains(&filter))
    }
}

#[component]
pub fn UsersListPage() -> impl IntoView {
    view! {
        <RequireAdmin>
            <UsersList />
        </RequireAdmin>
    }
}

#[component]
fn UsersList() -> impl IntoView {
    let notifications = use_notifications();
    let state = create_state();
    let all_users: RwSignal<Vec<User>> = RwSignal::new(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);
    let (show_create_form, set_show_create_form) = signal(false);
    let editing_user: RwSignal<Option<User>> = RwSignal::new(None);
    let selected: RwSignal<HashSet<String>> = RwSignal::new(HashSet::new());

    let refresh_view = move || {
        let query = state.with_untracked(|s| s.search_query.clone());
        let mut data = all_users.get_untracked();
        if !query.trim().is_empty() {
            data.retain(|u| u.matches_filter(query.trim()));
        }
        state.update(|s| {
            sort_list(&mut data, &s.sort_field, s.sort_ascending);
            s.total_count = data.len();
            s.recalc_pagination();
            let start = s.page * s.page_size;
            let end = (start + s.page_size).min(data.len());
            s.items = data.get(start..end).unwrap_or(&[]).to_vec();
        });
    };

    let load_data = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_users().await {
                Ok(data) => {
                    all_users.set(data);
                    selected.set(HashSet::new());
                    state.update(|s| s.is_loaded = true);
                    refresh_view();
                }
                Err(e) => set_error.set(Some(format!("Failed to load users: {}", e))),
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded) {
            load_data();
        }
    });

    let search_signal = RwSignal::new(String::new());

    let apply_search = move || {
        state.update(|s| {
            s.search_query = search_signal.get_untracked();
            s.page = 0;
        });
        refresh_view();
    };

    let toggle_sort = move |field: &'static str| {
        move |_| {
            state.update(|s| {
                if s.sort_field == field {
                    s.sort_ascending = !s.sort_ascending;
                } else {
                    s.sort_field = field.to_string();
                    s.sort_ascending = true;
                }
            });
            refresh_view();
        }
    };

    let sort_header = move |label: &'static str, field: &'static str| {
        view! {
            <th class="table__header-cell table__sortable-header" on:click=toggle_sort(field)>
                {label}
                <span class=move || state.with(|s| get_sort_class(&s.sort_field, field))>
                    {move || state.with(|s| get_sort_indicator(&s.sort_field, field, s.sort_ascending))}
                </span>
            </th>
        }
    };

    let delete_selected = move || {
        let ids: Vec<String> = selected.get_untracked().into_iter().collect();
        if ids.is_empty() {
            return;
        }
        if !confirm(&format!("Delete {} user(s)?", ids.len())) {
            return;
        }
        spawn_local(async move {
            for id in ids {
                if let Err(e) = api::delete_user(&id).await {
                    notifications.error(e);
                }
            }
            load_data();
        });
    };

    let format_ts_opt = |value: &Option<String>| {
        value
            .as_deref()
            .map(format_datetime)
            .unwrap_or_else(|| "-".to_string())
    };

    view! {
        <div class="content">
            <div class="header">
                <div class="header__title">
                    <h2>"Users"</h2>
                    <Badge>{move || state.with(|s| s.total_count.to_string())}</Badge>
                </div>
                <div class="header__actions">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| set_show_create_form.set(true)
                    >
                        {icon("plus")}
                        " New"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| delete_selected()
                        disabled=Signal::derive(move || selected.with(|s| s.is_empty()))
                    >
                        {icon("delete")}
                        " Delete"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load_data()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {icon("refresh")}
                        {move || if loading.get() { " Loading..." } else { " Refresh" }}
                    </Button>
                </div>
            </div>

            {move || error.get().map(|e| view! {
                <MessageBar intent=MessageBarIntent::Error>
                    <MessageBarBody>{e}</MessageBarBody>
                </MessageBar>
            })}

            <div class="filter-panel">
                <Flex gap=FlexGap::Small align=FlexAlign::End>
                    <div style="flex: 1; max-width: 320px;">
                        <Input value=search_signal placeholder="Login, name or email..." />
                    </div>
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| apply_search()>
                        "Search"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| {
                            search_signal.set(String::new());
                            apply_search();
                        }
                    >
                        "Reset"
                    </Button>
                </Flex>
            </div>

            <div class="table-container">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell table__header-cell--checkbox"></th>
                            {sort_header("Login", "username")}
                            {sort_header("Name", "full_name")}
                            {sort_header("Email", "email")}
                            {sort_header("Role", "is_admin")}
                            {sort_header("Status", "is_active")}
                            {sort_header("Last login", "last_login_at")}
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || state.with(|s| s.items.clone())
                            key=|u| u.id.clone()
                            children=move |user: User| {
                                let id = user.id.clone();
                                let id_for_check = id.clone();
                                let user_for_edit = user.clone();
                                view! {
                                    <tr class="table__row" on:click=move |_| editing_user.set(Some(user_for_edit.clone()))>
                                        <TableCheckbox
                                            checked=Signal::derive(move || selected.with(|s| s.contains(&id_for_check)))
                                            on_change=Callback::new(move |checked| {
                                                let id = id.clone();
                                                selected.update(|s| {
                                                    if checked { s.insert(id); } else { s.remove(&id); }
                                                });
                                            })
                                        />
                                        <td class="table__cell">{user.username.clone()}</td>
                                        <td class="table__cell">{user.full_name.clone().unwrap_or_default()}</td>
                                        <td class="table__cell">{user.email.clone().unwrap_or_default()}</td>
                                        <td class="table__cell">
                                            {if user.is_admin { "Administrator" } else { "Operator" }}
                                        </td>
                                        <td class="table__cell">
                                            {if user.is_active { "Active" } else { "Blocked" }}
                                        </td>
                                        <td class="table__cell">{format_ts_opt(&user.last_login_at)}</td>
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
                on_page_change=Callback::new(move |page| {
                    state.update(|s| s.page = page);
                    refresh_view();
                })
                on_page_size_change=Callback::new(move |size| {
                    state.update(|s| { s.page_size = size; s.page = 0; });
                    refresh_view();
                })
            />

            <Show when=move || show_create_form.get()>
                <super::details::CreateUserForm
                    on_close=move || set_show_create_form.set(false)
                    on_created=move || {
                        set_show_create_form.set(false);
                        notifications.success("User created");
                        load_data();
                    }
                />
            </Show>

            {move || editing_user.get().map(|user| view! {
                <EditUserForm
                    user=user
                    on_close=move || editing_user.set(None)
                    on_saved=move || {
                        editing_user.set(None);
                        load_data();
                    }
                />
            })}
        </div>
    }
}

#[component]
fn EditUserForm<F1, F2>(user: User, on_close: F1, on_saved: F2) -> impl IntoView
where
    F1: Fn() + 'static + Copy + Send + Sync,
    F2: Fn() + 'static + Copy + Send + Sync,
{
    let email = RwSignal::new(user.email.clone().unwrap_or_default());
    let full_name = RwSignal::new(user.full_name.clone().unwrap_or_default());
    let is_admin = RwSignal::new(user.is_admin);
    let is_active = RwSignal::new(user.is_active);
    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    let title = format!("Edit user: {}", user.username);
    let user_id = user.id.clone();

    let on_save = move |_| {
        set_saving.set(true);
        set_error.set(None);

        let non_empty = |s: String| (!s.trim().is_empty()).then(|| s.trim().to_string());
        let dto = UpdateUserDto {
            id: user_id.clone(),
            email: non_empty(email.get_untracked()),
            full_name: non_empty(full_name.get_untracked()),
            is_active: is_active.get_untracked(),
            is_admin: is_admin.get_untracked(),
        };

        spawn_local(async move {
            match api::update_user(&dto).await {
                Ok(()) => on_saved(),
                Err(e) => {
                    set_error.set(Some(format!("Failed to save: {}", e)));
                    set_saving.set(false);
                }
            }
        });
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_close()>
            <div class="modal" on:click=move |ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h2 class="modal-title">{title}</h2>
                    <Button appearance=ButtonAppearance::Subtle on_click=move |_| on_close()>
                        {icon("x")}
                    </Button>
                </div>

                <div class="modal-body">
                    {move || error.get().map(|e| view! {
                        <MessageBar intent=MessageBarIntent::Error>
                            <MessageBarBody>{e}</MessageBarBody>
                        </MessageBar>
                    })}

                    <div class="form__group">
                        <Label>"Email"</Label>
                        <Input value=email input_type=InputType::Email />
                    </div>
                    <div class="form__group">
                        <Label>"Full name"</Label>
                        <Input value=full_name />
                    </div>
                    <div class="form__group">
                        <Checkbox checked=is_admin label="Administrator" />
                    </div>
                    <div class="form__group">
                        <Checkbox checked=is_active label="Active" />
                    </div>
                </div>

                <div class="modal-footer">
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close()>
                        "Cancel"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=on_save
                        disabled=Signal::derive(move || saving.get())
                    >
                        {move || if saving.get() { "Saving..." } else { "Save" }}
                    </Button>
                </div>
            </div>
        </div>
    }
}
