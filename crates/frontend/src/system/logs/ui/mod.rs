//! Monitoring: the `system_log` table written by both backend and client

use contracts::shared::list::DEFAULT_PAGE_SIZE;
use contracts::shared::logger::{LogEntry, LogListQuery, SOURCE_CLIENT, SOURCE_SERVER};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::api;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::date_utils::format_datetime;
use crate::shared::dialog::confirm;
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;

#[derive(Clone, Debug)]
struct LogsState {
    source: String,
    category: String,
    page: usize,
    page_size: usize,
    total_count: usize,
    total_pages: usize,
}

impl Default for LogsState {
    fn default() -> Self {
        Self {
            source: String::new(),
            category: String::new(),
            page: 0,
            page_size: DEFAULT_PAGE_SIZE as usize,
            total_count: 0,
            total_pages: 1,
        }
    }
}

impl LogsState {
    fn query(&self) -> LogListQuery {
        let non_empty = |s: &str| {
            let s = s.trim();
            (!s.is_empty()).then(|| s.to_string())
        };
        LogListQuery {
            source: non_empty(&self.source),
            category: non_empty(&self.category),
            page: self.page as u64,
            page_size: self.page_size as u64,
        }
    }
}

#[component]
pub fn MonitoringPage() -> impl IntoView {
    let (auth_state, _) = use_auth();
    let state = RwSignal::new(LogsState::default());
    let items: RwSignal<Vec<LogEntry>> = RwSignal::new(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);

    let load = move || {
        let query = state.with_untracked(|s| s.query());
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_logs(&query).await {
                Ok(page) => {
                    state.update(|s| {
                        s.total_count = page.total_count as usize;
                        s.total_pages = page.total_pages as usize;
                    });
                    items.set(page.items);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
            set_loading.set(false);
        });
    };

    let clear = move || {
        if !confirm("Delete all log entries?") {
            return;
        }
        spawn_local(async move {
            match api::clear_logs().await {
                Ok(()) => {
                    state.update(|s| s.page = 0);
                    load();
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    load();

    view! {
        <div class="content">
            <div class="header">
                <h2>"Monitoring"</h2>
                <div class="header__actions">
                    <select
                        prop:value=move || state.with(|s| s.source.clone())
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            state.update(|s| { s.source = value; s.page = 0; });
                            load();
                        }
                    >
                        <option value="">"All sources"</option>
                        <option value=SOURCE_SERVER>"Server"</option>
                        <option value=SOURCE_CLIENT>"Client"</option>
                    </select>
                    <input
                        type="text"
                        placeholder="Category"
                        prop:value=move || state.with(|s| s.category.clone())
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            state.update(|s| { s.category = value; s.page = 0; });
                            load();
                        }
                    />
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {icon("refresh")}
                        " Refresh"
                    </Button>
                    <Show when=move || auth_state.with(|s| s.is_admin())>
                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| clear()>
                            {icon("delete")}
                            " Clear"
                        </Button>
                    </Show>
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
                            <th class="table__header-cell">"Time"</th>
                            <th class="table__header-cell">"Source"</th>
                            <th class="table__header-cell">"Category"</th>
                            <th class="table__header-cell">"Message"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || items.get()
                            key=|entry| entry.id
                            children=move |entry: LogEntry| {
                                view! {
                                    <tr class="table__row">
                                        <td class="table__cell">{format_datetime(&entry.timestamp)}</td>
                                        <td class="table__cell">{entry.source}</td>
                                        <td class="table__cell">{entry.category}</td>
                                        <td class="table__cell">{entry.message}</td>
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
                    load();
                })
                on_page_size_change=Callback::new(move |size| {
                    state.update(|s| { s.page_size = size; s.page = 0; });
                    load();
                })
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_skips_blank_filters() {
        let state = LogsState {
            source: "client".into(),
            category: "  ".into(),
            page: 2,
            ..Default::default()
        };
        let q = state.query();
        assert_eq!(q.source.as_deref(), Some("client"));
        assert_eq!(q.category, None);
        assert_eq!(q.page, 2);
        assert_eq!(q.page_size, DEFAULT_PAGE_SIZE);
    }
}
