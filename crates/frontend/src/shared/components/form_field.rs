use leptos::prelude::*;

/// Labelled `<input>` bound to a form field
#[component]
pub fn FormField(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    /// HTML input type, "text" by default
    #[prop(optional, into)]
    input_type: Option<String>,
    #[prop(optional, into)] placeholder: String,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    let input_type = input_type.unwrap_or_else(|| "text".to_string());
    let label = if required { format!("{} *", label) } else { label };

    view! {
        <div class="form-group">
            <label>{label}</label>
            <input
                type=input_type
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                placeholder=placeholder
            />
        </div>
    }
}

/// Labelled `<select>` over `(value, label)` pairs
#[component]
pub fn FormSelect(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] options: Signal<Vec<(String, String)>>,
    on_change: Callback<String>,
    /// Label of an extra empty option, omitted when `None`
    #[prop(optional, into)]
    empty_label: Option<String>,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label>{label}</label>
            <select
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                {empty_label.map(|text| view! { <option value="">{text}</option> })}
                <For
                    each=move || options.get()
                    key=|(v, l)| (v.clone(), l.clone())
                    children=move |(v, l)| {
                        let selected_value = v.clone();
                        view! {
                            <option value=v selected=move || value.get() == selected_value>{l}</option>
                        }
                    }
                />
            </select>
        </div>
    }
}
