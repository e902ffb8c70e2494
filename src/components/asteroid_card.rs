use leptos::prelude::*;

use crate::format::CardText;
use crate::models::AsteroidSummary;

#[component]
pub fn AsteroidCard(
    asteroid: AsteroidSummary,
    /// Current search box text; non-matching cards are hidden, not removed.
    filter: ReadSignal<String>,
) -> impl IntoView {
    let text = CardText::new(&asteroid);
    let href = format!("/details?id={}", urlencoding::encode(&asteroid.id));
    let badge_class = if asteroid.hazardous {
        "hazard-badge hazardous"
    } else {
        "hazard-badge safe"
    };

    let matcher = text.clone();
    let display = move || {
        if matcher.matches(&filter.get()) {
            "flex"
        } else {
            "none"
        }
    };

    view! {
        <a href=href class="asteroid-item" data-id=asteroid.id.clone() style:display=display>
            <div class="asteroid-header">
                <span class="asteroid-name">{text.name}</span>
                <span class=badge_class>{text.hazard}</span>
            </div>
            <div class="asteroid-details">
                <div><b>"Diameter: "</b>{text.diameter}</div>
                <div><b>"Distance: "</b>{text.distance}</div>
                <div><b>"Velocity: "</b>{text.velocity}</div>
            </div>
        </a>
    }
}
