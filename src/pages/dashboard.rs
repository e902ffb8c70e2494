use chrono::{DateTime, Utc};
use leptos::prelude::*;
use tracing::{info, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

use crate::api;
use crate::components::asteroid_card::AsteroidCard;
use crate::components::error_banner::ErrorBanner;
use crate::components::notification::Notifications;
use crate::components::risk_indicator::FleetRiskPanel;
use crate::config::DashboardConfig;
use crate::format;
use crate::models::AsteroidSummary;
use crate::risk::{FleetStats, RiskAggregator};

/// What triggered a list fetch. Decides how the outcome is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Refresh {
    Initial,
    Manual,
    Periodic,
}

/// Runs `tick` every `ms` until the owning component unmounts.
fn every(ms: u32, tick: impl Fn() + 'static) {
    let callback = wasm_bindgen::closure::Closure::wrap(Box::new(tick) as Box<dyn Fn()>);
    let Some(window) = web_sys::window() else {
        return;
    };
    match window.set_interval_with_callback_and_timeout_and_arguments_0(
        callback.as_ref().unchecked_ref(),
        ms as i32,
    ) {
        Ok(handle) => {
            callback.forget();
            on_cleanup(move || {
                if let Some(window) = web_sys::window() {
                    window.clear_interval_with_handle(handle);
                }
            });
        }
        Err(e) => warn!("Could not start interval: {:?}", e),
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let config = StoredValue::new(expect_context::<DashboardConfig>());
    let notifications = expect_context::<Notifications>();

    let (asteroids, set_asteroids) = signal::<Vec<AsteroidSummary>>(vec![]);
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);
    let (filter, set_filter) = signal(String::new());
    let (now, set_now) = signal(Utc::now());
    let (last_updated, set_last_updated) = signal::<Option<DateTime<Utc>>>(None);

    let fleet_risk = Memo::new(move |_| RiskAggregator::aggregate(&asteroids.get()));
    let stats = Memo::new(move |_| FleetStats::from_fleet(&asteroids.get()));

    let load = move |trigger: Refresh| {
        let config = config.get_value();
        if trigger != Refresh::Periodic {
            set_loading.set(true);
        }
        spawn_local(async move {
            match api::fetch_asteroids(&config).await {
                Ok(list) => {
                    set_asteroids.set(list);
                    set_error.set(None);
                    set_last_updated.set(Some(Utc::now()));
                    if trigger == Refresh::Manual {
                        notifications.success("Data refreshed");
                    }
                }
                Err(e) => {
                    warn!("Asteroid list refresh failed: {}", e);
                    match trigger {
                        Refresh::Periodic => notifications.error("Failed to update stats"),
                        _ => set_error.set(Some(e.to_string())),
                    }
                }
            }
            set_loading.set(false);
        });
    };

    // Initial fetch plus fixed-interval polling
    Effect::new(move |_| {
        load(Refresh::Initial);
        let interval = config.with_value(|c| c.refresh_interval_ms());
        info!("Polling asteroid feed every {} ms", interval);
        every(interval, move || load(Refresh::Periodic));
    });

    // UTC clock
    Effect::new(move |_| {
        let tick = config.with_value(|c| c.ui.clock_tick_ms);
        every(tick, move || set_now.set(Utc::now()));
    });

    view! {
        <div class="page dashboard-page">
            <div class="page-header">
                <h2>"Near-Earth Objects"</h2>
                <div class="clock">
                    <span class="current-time">{move || format::clock(now.get())}</span>
                    <span class="last-updated">
                        {move || {
                            last_updated
                                .get()
                                .map(|t| format!("Last updated: {}", format::clock(t)))
                                .unwrap_or_default()
                        }}
                    </span>
                </div>
            </div>

            <ErrorBanner message=error on_dismiss=move |_| set_error.set(None) />

            <div class="stats-grid">
                <div class="card stat">
                    <span class="stat-label">"Hazardous"</span>
                    <span class="stat-value">{move || stats.get().hazardous}</span>
                </div>
                <div class="card stat">
                    <span class="stat-label">"Active Objects"</span>
                    <span class="stat-value">{move || stats.get().active}</span>
                </div>
                <div class="card stat">
                    <span class="stat-label">"Largest"</span>
                    <span class="stat-value">{move || format::stat_km(stats.get().largest_km)}</span>
                </div>
                <div class="card stat">
                    <span class="stat-label">"Fastest"</span>
                    <span class="stat-value">{move || format::stat_km_s(stats.get().fastest_km_s)}</span>
                </div>
            </div>

            <FleetRiskPanel risk=fleet_risk />

            <div class="list-toolbar">
                <input
                    type="text"
                    class="search-input"
                    placeholder="Filter asteroids..."
                    prop:value=move || filter.get()
                    on:input=move |ev| set_filter.set(event_target_value(&ev))
                />
                <button
                    class="btn btn-primary"
                    disabled=move || loading.get()
                    on:click=move |_| load(Refresh::Manual)
                >
                    {move || if loading.get() { "Loading..." } else { "Refresh" }}
                </button>
            </div>

            <Show when=move || error.get().is_none()>
                <div class="asteroid-list">
                    <For
                        each=move || asteroids.get()
                        key=|a| a.id.clone()
                        children=move |a| view! { <AsteroidCard asteroid=a filter=filter /> }
                    />
                </div>
            </Show>
        </div>
    }
}
