use leptos::prelude::*;

/// Row selection cell
///
/// Renders a `<td>` with a checkbox. Clicks do not reach the row, so
/// selecting never opens the details page.
#[component]
pub fn TableCheckbox(
    #[prop(into)] checked: Signal<bool>,
    on_change: Callback<bool>,
) -> impl IntoView {
    view! {
        <td
            class="table__cell table__cell--checkbox"
            on:click=|e| e.stop_propagation()
        >
            <input
                type="checkbox"
                class="table__checkbox"
                prop:checked=checked
                on:change=move |ev| on_change.run(event_target_checked(&ev))
            />
        </td>
    }
}
