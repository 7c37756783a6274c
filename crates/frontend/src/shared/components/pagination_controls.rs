use crate::shared::icons::icon;
use contracts::shared::list::MAX_PAGE_SIZE;
use leptos::prelude::*;

const PAGE_SIZE_OPTIONS: [usize; 4] = [25, 50, 100, 200];

/// First / previous / "page of pages (count)" / next / last, plus page size
#[component]
pub fn PaginationControls(
    /// Current page (0-indexed)
    #[prop(into)]
    current_page: Signal<usize>,
    #[prop(into)] total_pages: Signal<usize>,
    #[prop(into)] total_count: Signal<usize>,
    #[prop(into)] page_size: Signal<usize>,
    on_page_change: Callback<usize>,
    on_page_size_change: Callback<usize>,
) -> impl IntoView {
    let is_first = move || current_page.get() == 0;
    let is_last = move || current_page.get() + 1 >= total_pages.get();

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(0)
                disabled=is_first
                title="First page"
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page > 0 {
                        on_page_change.run(page - 1);
                    }
                }
                disabled=is_first
                title="Previous page"
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">
                {move || {
                    format!(
                        "{} / {} ({})",
                        current_page.get() + 1,
                        total_pages.get().max(1),
                        total_count.get()
                    )
                }}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    if !is_last() {
                        on_page_change.run(current_page.get() + 1);
                    }
                }
                disabled=is_last
                title="Next page"
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(total_pages.get().saturating_sub(1))
                disabled=is_last
                title="Last page"
            >
                {icon("chevrons-right")}
            </button>
            <select
                class="page-size-select"
                on:change=move |ev| {
                    let size = event_target_value(&ev)
                        .parse::<usize>()
                        .unwrap_or(50)
                        .clamp(1, MAX_PAGE_SIZE as usize);
                    on_page_size_change.run(size);
                }
                prop:value=move || page_size.get().to_string()
            >
                {PAGE_SIZE_OPTIONS
                    .iter()
                    .map(|&size| {
                        view! {
                            <option value=size.to_string() selected=move || page_size.get() == size>
                                {size.to_string()}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}
