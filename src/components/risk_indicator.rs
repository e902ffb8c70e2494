use leptos::prelude::*;

use crate::risk::{FleetRisk, RiskAssessment};

/// Per-object assessment panel on the detail page.
#[component]
pub fn RiskIndicator(assessment: RiskAssessment) -> impl IntoView {
    let level = assessment.level;

    view! {
        <div class=format!("risk-indicator {}", level.css_class())>
            <div class="risk-header">
                <span class="risk-dot" style:background=level.color()></span>
                <span class="risk-title">{assessment.title()}</span>
                <span class="risk-score">{format!("{}/100", assessment.score)}</span>
            </div>
            <p class="risk-description">{assessment.description()}</p>
            <div class="risk-factors">
                <div class="spec-row">
                    <span class="spec-label">"Risk Level"</span>
                    <span class="spec-value">{level.label()}</span>
                </div>
                <div class="spec-row">
                    <span class="spec-label">"Size Category"</span>
                    <span class="spec-value">{assessment.size_category.label()}</span>
                </div>
                <div class="spec-row">
                    <span class="spec-label">"Distance Rating"</span>
                    <span class="spec-value">{assessment.distance_rating.label()}</span>
                </div>
            </div>
        </div>
    }
}

/// Fleet-wide contributions on the dashboard.
#[component]
pub fn FleetRiskPanel(#[prop(into)] risk: Signal<FleetRisk>) -> impl IntoView {
    let factor = move |label: &'static str, value: Signal<u32>, cap: u32| {
        view! {
            <div class="risk-factor">
                <span class="spec-label">{label}</span>
                <div class="risk-bar">
                    <div
                        class="risk-bar-fill"
                        style:width=move || format!("{}%", value.get() * 100 / cap)
                    ></div>
                </div>
                <span class="spec-value">{move || format!("{}/{}", value.get(), cap)}</span>
            </div>
        }
    };

    view! {
        <div class="card fleet-risk">
            <h3>"Fleet Risk Score"</h3>
            <div class="risk-score-value">{move || risk.get().total()}</div>
            {factor("Proximity", Signal::derive(move || risk.get().proximity), 40)}
            {factor("Size", Signal::derive(move || risk.get().size), 35)}
            {factor("Speed", Signal::derive(move || risk.get().speed), 25)}
        </div>
    }
}
