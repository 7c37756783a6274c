use contracts::shared::dashboard_view::ROUTE_TABLE;
use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Route, Router, Routes, A};
use leptos_router::hooks::use_location;
use leptos_router::path;

use crate::app_shell::AppShell;
use crate::dashboards::FrontDeskDashboard;
use crate::domain::a001_property::ui::{details::PropertyDetailsPage, list::PropertyList};
use crate::domain::a002_customer::ui::{details::CustomerDetailsPage, list::CustomerListPage};
use crate::domain::a003_room::ui::{details::RoomDetailsPage, list::RoomList};
use crate::domain::a004_reservation::ui::{details::ReservationDetailsPage, list::ReservationList};
use crate::routes::sections::{section_icon, section_label, section_of};
use crate::shared::icons::icon;
use crate::system::logs::ui::MonitoringPage;
use crate::system::pages::profile::ProfilePage;
use crate::system::users::ui::list::UsersListPage;

/// Every path renders inside `AppShell`, so the view switcher sees all
/// navigation, including sections without a dedicated page.
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <ParentRoute path=path!("") view=AppShell>
                    <Route path=path!("") view=FrontDeskDashboard />
                    <Route path=path!("properties") view=PropertyList />
                    <Route path=path!("properties/:id") view=PropertyDetailsPage />
                    <Route path=path!("customers") view=CustomerListPage />
                    <Route path=path!("customers/:id") view=CustomerDetailsPage />
                    <Route path=path!("rooms") view=RoomList />
                    <Route path=path!("rooms/:id") view=RoomDetailsPage />
                    <Route path=path!("reservations") view=ReservationList />
                    <Route path=path!("reservations/:id") view=ReservationDetailsPage />
                    <Route path=path!("users") view=UsersListPage />
                    <Route path=path!("monitoring") view=MonitoringPage />
                    <Route path=path!("profile") view=ProfilePage />
                    <Route path=path!("*any") view=SectionPage />
                </ParentRoute>
            </Routes>
        </Router>
    }
}

/// Sections of the route table without a page of their own yet
#[component]
fn SectionPage() -> impl IntoView {
    let location = use_location();

    move || {
        let path = location.pathname.get();
        let known = ROUTE_TABLE.find(&path).map(|p| p.section);
        match known {
            Some(section) => view! {
                <div class="content">
                    <div class="header">
                        <h2>{icon(section_icon(section))} " " {section_label(section)}</h2>
                    </div>
                    <p class="placeholder">"This section has no content yet."</p>
                </div>
            }
            .into_any(),
            None => {
                let missing = section_of(&path).unwrap_or_default().to_string();
                view! { <NotFoundContent section=missing /> }.into_any()
            }
        }
    }
}

#[component]
fn NotFoundContent(section: String) -> impl IntoView {
    view! {
        <div class="content not-found">
            <h2>"Page not found"</h2>
            <p>{format!("There is no section \"{}\".", section)}</p>
            <A href="/">"Back to the front desk"</A>
        </div>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! { <NotFoundContent section=String::new() /> }
}
