use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map};
use leptos_router::NavigateOptions;
use tracing::{info, warn};
use wasm_bindgen_futures::spawn_local;

use crate::api::{self, RequestGeneration};
use crate::components::error_banner::ErrorBanner;
use crate::components::orbit_canvas::OrbitCanvas;
use crate::components::risk_indicator::RiskIndicator;
use crate::config::DashboardConfig;
use crate::error::NeoWatchError;
use crate::format::DetailText;
use crate::models::AsteroidDetail;
use crate::risk::RiskScorer;

const RESULTS_ID: &str = "asteroid-details";

fn scroll_to_results() {
    let Some(el) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(RESULTS_ID))
    else {
        return;
    };
    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    el.scroll_into_view_with_scroll_into_view_options(&options);
}

fn field(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="spec-row">
            <span class="spec-label">{label}</span>
            <span class="spec-value">{value}</span>
        </div>
    }
}

#[component]
pub fn AsteroidDetailsPage() -> impl IntoView {
    let config = StoredValue::new(expect_context::<DashboardConfig>());
    let generation = StoredValue::new_local(RequestGeneration::new());
    let query = use_query_map();
    let navigate = use_navigate();

    let (input, set_input) = signal(String::new());
    let (searching, set_searching) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let (detail, set_detail) = signal::<Option<AsteroidDetail>>(None);

    let search = move |raw: String, write_url: bool| {
        let id = raw.trim().to_string();
        if id.is_empty() {
            set_error.set(Some(NeoWatchError::EmptyQuery.to_string()));
            return;
        }

        if write_url {
            navigate(
                &format!("/details?id={}", urlencoding::encode(&id)),
                NavigateOptions {
                    scroll: false,
                    ..Default::default()
                },
            );
        }

        let Some(tracker) = generation.try_with_value(RequestGeneration::clone) else {
            return;
        };
        let token = tracker.begin();
        let config = config.get_value();
        set_searching.set(true);
        set_error.set(None);
        info!("Searching for asteroid {}", id);

        spawn_local(async move {
            let result = api::fetch_asteroid_detail(&config, &id).await;
            if !tracker.is_current(token) {
                return;
            }
            match result {
                Ok(found) => {
                    set_detail.set(Some(found));
                    request_animation_frame(scroll_to_results);
                }
                Err(e) => {
                    warn!("Lookup for {} failed: {}", id, e);
                    set_detail.set(None);
                    set_error.set(Some(e.to_string()));
                }
            }
            set_searching.set(false);
        });
    };

    // Auto-search from ?id= on load
    let from_url = search.clone();
    Effect::new(move |_| {
        if let Some(id) = query.with_untracked(|q| q.get("id")) {
            set_input.set(id.clone());
            from_url(id, false);
        }
    });

    let on_click = {
        let search = search.clone();
        move |_| search(input.get_untracked(), true)
    };
    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Enter" {
            search(input.get_untracked(), true);
        }
    };

    view! {
        <div class="page details-page">
            <h2>"Asteroid Details"</h2>
            <p class="page-description">"Look up a near-Earth object by its NASA id."</p>

            <div class="search-bar">
                <input
                    type="text"
                    class="search-input"
                    placeholder="Enter asteroid ID (e.g. 3542519)"
                    prop:value=move || input.get()
                    on:input=move |ev| set_input.set(event_target_value(&ev))
                    on:keydown=on_keydown
                />
                <button
                    class="btn btn-primary"
                    disabled=move || searching.get()
                    on:click=on_click
                >
                    {move || if searching.get() { "Searching..." } else { "Search" }}
                </button>
            </div>

            <Show when=move || searching.get()>
                <div class="loading">"Loading asteroid data..."</div>
            </Show>

            <ErrorBanner message=error on_dismiss=move |_| set_error.set(None) />

            <Show when=move || detail.with(Option::is_some)>
                <div id=RESULTS_ID class="asteroid-details">
                    {move || {
                        detail.get().map(|d| {
                            let text = DetailText::new(&d);
                            let assessment = RiskScorer::assess_detail(&d);
                            view! {
                                <div class="details-header">
                                    <h3 class="asteroid-name">{text.name}</h3>
                                    <span class=text.hazard_class>{text.hazard_badge}</span>
                                </div>
                                <div class="details-grid">
                                    <div class="card">
                                        <h4>"Close Approach"</h4>
                                        {field("Date", text.approach_date)}
                                        {field("Time", text.approach_time)}
                                        {field("Miss Distance", text.distance)}
                                        {field("Lunar Distance", text.lunar_distance)}
                                        {field("Velocity", text.velocity)}
                                    </div>
                                    <div class="card">
                                        <h4>"Physical Characteristics"</h4>
                                        {field("Min Diameter", text.diameter_min)}
                                        {field("Max Diameter", text.diameter_max)}
                                        {field("Absolute Magnitude", text.magnitude)}
                                        {field("Potentially Hazardous", text.hazardous.to_string())}
                                    </div>
                                    <div class="card">
                                        <h4>"Orbital Data"</h4>
                                        {field("Orbit ID", text.orbit_id)}
                                        {field("Orbit Class", text.orbit_class)}
                                        {field("First Observed", text.first_observation)}
                                        {field("Last Observed", text.last_observation)}
                                    </div>
                                    <div class="card">
                                        <h4>"Risk Assessment"</h4>
                                        <RiskIndicator assessment=assessment />
                                    </div>
                                </div>
                            }
                        })
                    }}
                    <OrbitCanvas detail=detail />
                </div>
            </Show>
        </div>
    }
}
