use leptos::prelude::*;
use thaw::ConfigProvider;

use crate::layout::global_context::AppGlobalContext;
use crate::layout::notifications::NotificationService;
use crate::layout::property_context::PropertyContext;
use crate::layout::view_context::DashboardViewContext;
use crate::routes::routes::AppRoutes;
use crate::system::auth::context::AuthProvider;

#[component]
pub fn App() -> impl IntoView {
    // Shared stores, provided once for the whole tree
    provide_context(AppGlobalContext::new());
    provide_context(NotificationService::new());
    provide_context(DashboardViewContext::new());
    provide_context(PropertyContext::new());

    view! {
        <ConfigProvider>
            <AuthProvider>
                <AppRoutes />
            </AuthProvider>
        </ConfigProvider>
    }
}
