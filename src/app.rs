use leptos::prelude::*;
use leptos_router::components::*;
use leptos_router::path;
use tracing::error;

use crate::components::notification::{NotificationTray, Notifications};
use crate::components::sidebar::Sidebar;
use crate::config::DashboardConfig;
use crate::pages::asteroid_details::AsteroidDetailsPage;
use crate::pages::dashboard::DashboardPage;

#[component]
pub fn App() -> impl IntoView {
    let config = match DashboardConfig::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid dashboard configuration: {}", e);
            return view! {
                <div class="app-error">
                    <h2>"NeoWatch could not start"</h2>
                    <p>{e.to_string()}</p>
                </div>
            }
            .into_any();
        }
    };

    provide_context(Notifications::new(config.ui.notification_ms));
    provide_context(config);

    view! {
        <Router>
            <div class="app-layout">
                <Sidebar />
                <main class="content">
                    <Routes fallback=|| view! { <p>"Page not found"</p> }>
                        <Route path=path!("/") view=DashboardPage />
                        <Route path=path!("/details") view=AsteroidDetailsPage />
                    </Routes>
                </main>
            </div>
            <NotificationTray />
        </Router>
    }
    .into_any()
}
