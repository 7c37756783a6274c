use contracts::domain::a001_property::aggregate::Property;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;
use std::collections::HashSet;
use thaw::*;

use crate::domain::a001_property::api;
use crate::layout::notifications::use_notifications;
use crate::layout::property_context::use_property_context;
use crate::shared::components::table_checkbox::TableCheckbox;
use crate::shared::dialog::confirm;
use crate::shared::icons::icon;
use crate::shared::list_utils::{
    cmp_text, filter_list, get_sort_class, get_sort_indicator, sort_list, Searchable, Sortable,
};

#[derive(Clone, Debug, PartialEq)]
pub struct PropertyRow {
    pub id: String,
    pub code: String,
    pub name: String,
    pub city: String,
    pub country: String,
    pub currency: String,
    pub stars: String,
}

impl From<Property> for PropertyRow {
    fn from(p: Property) -> Self {
        Self {
            id: p.base.id.as_string(),
            code: p.base.code,
            name: p.base.description,
            city: p.city,
            country: p.country,
            currency: p.currency,
            stars: p.star_rating.map(|s| "★".repeat(s.max(0) as usize)).unwrap_or_default(),
        }
    }
}

impl Sortable for PropertyRow {
    fn compare_by_field(&self, other: &Self, field: &str) -> std::cmp::Ordering {
        match field {
            "code" => cmp_text(&self.code, &other.code),
            "city" => cmp_text(&self.city, &other.city),
            "country" => cmp_text(&self.country, &other.country),
            "stars" => self.stars.len().cmp(&other.stars.len()),
            _ => cmp_text(&self.name, &other.name),
        }
    }
}

impl Searchable for PropertyRow {
    fn matches_filter(&self, filter: &str) -> bool {
        let filter = filter.to_lowercase();
        [&self.code, &self.name, &self.city]
            .iter()
            .any(|v| v.to_lowercase().contains(&filter))
    }
}

#[component]
pub fn PropertyList() -> impl IntoView {
    let navigate = StoredValue::new_local(use_navigate());
    let notifications = use_notifications();
    let property_ctx = use_property_context();

    let all_rows: RwSignal<Vec<PropertyRow>> = RwSignal::new(Vec::new());
    let search = RwSignal::new(String::new());
    let sort = RwSignal::new(("name".to_string(), true));
    let selected: RwSignal<HashSet<String>> = RwSignal::new(HashSet::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);

    let fetch = move || {
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_all().await {
                Ok(list) => {
                    all_rows.set(list.into_iter().map(Into::into).collect());
                    selected.set(HashSet::new());
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
            set_loading.set(false);
        });
    };

    let visible = Memo::new(move |_| {
        let mut rows = filter_list(all_rows.get(), search.get().trim());
        sort.with(|(field, asc)| sort_list(&mut rows, field, *asc));
        rows
    });

    let open = move |id: &str| {
        let path = format!("/properties/{}", id);
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
        if ids.is_empty() || !confirm(&format!("Delete {} propert(ies)?", ids.len())) {
            return;
        }
        spawn_local(async move {
            let mut deleted = 0;
            for id in &ids {
                match api::delete_by_id(id).await {
                    Ok(()) => deleted += 1,
                    Err(e) => notifications.error(e),
                }
            }
            if deleted > 0 {
                notifications.success(format!("Deleted: {}", deleted));
            }
            fetch();
            property_ctx.load();
        });
    };

    fetch();

    view! {
        <div class="content">
            <div class="header">
                <div class="header__title">
                    <h2>"Properties"</h2>
                    <Badge>{move || visible.with(|rows| rows.len().to_string())}</Badge>
                </div>
                <div class="header__actions">
                    <input
                        type="search"
                        class="header__search"
                        placeholder="Code, name or city..."
                        prop:value=move || search.get()
                        on:input=move |ev| search.set(event_target_value(&ev))
                    />
                    <button class="btn btn-primary" on:click=move |_| open("new")>
                        {icon("plus")}
                        " New"
                    </button>
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
                        on_click=move |_| fetch()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {icon("refresh")}
                        " Refresh"
                    </Button>
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
                            {sort_header("Code", "code")}
                            {sort_header("Name", "name")}
                            {sort_header("City", "city")}
                            {sort_header("Country", "country")}
                            <th class="table__header-cell">"Currency"</th>
                            {sort_header("Stars", "stars")}
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || visible.get()
                            key=|row| row.id.clone()
                            children=move |row: PropertyRow| {
                                let id = row.id.clone();
                                let id_for_check = row.id.clone();
                                let id_for_toggle = row.id.clone();
                                view! {
                                    <tr class="table__row" on:click=move |_| open(&id)>
                                        <TableCheckbox
                                            checked=Signal::derive(move || selected.with(|s| s.contains(&id_for_check)))
                                            on_change=Callback::new(move |checked| {
                                                let id = id_for_toggle.clone();
                                                selected.update(|s| {
                                                    if checked { s.insert(id); } else { s.remove(&id); }
                                                });
                                            })
                                        />
                                        <td class="table__cell">{row.code}</td>
                                        <td class="table__cell">{row.name}</td>
                                        <td class="table__cell">{row.city}</td>
                                        <td class="table__cell">{row.country}</td>
                                        <td class="table__cell">{row.currency}</td>
                                        <td class="table__cell">{row.stars}</td>
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
    use contracts::domain::a001_property::aggregate::PropertyDto;

    fn row(name: &str, city: &str, stars: Option<i32>) -> PropertyRow {
        PropertyRow::from(Property::new_for_insert(&PropertyDto {
            code: Some(name.to_uppercase()),
            description: name.into(),
            city: city.into(),
            currency: "EUR".into(),
            star_rating: stars,
            ..Default::default()
        }))
    }

    #[test]
    fn test_visible_rows_are_comparable() {
        let rows = vec![row("Seaside", "Nice", Some(4)), row("Alpine Lodge", "Zermatt", None)];
        let mut visible = filter_list(rows.clone(), "");
        assert_eq!(visible, rows);

        sort_list(&mut visible, "name", true);
        assert_eq!(visible[0].name, "Alpine Lodge");
        assert_ne!(visible, rows);
    }

    #[test]
    fn test_search_matches_city() {
        let rows = vec![row("Seaside", "Nice", Some(4)), row("Alpine Lodge", "Zermatt", None)];
        let found = filter_list(rows, "zerm");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Alpine Lodge");
        assert_eq!(found[0].stars, "");
    }
}
