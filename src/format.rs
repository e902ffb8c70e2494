//! Display strings for list cards, headline stats and the detail panel.

use chrono::{DateTime, NaiveDate, Utc};

use crate::models::{AsteroidDetail, AsteroidSummary};

pub const NOT_AVAILABLE: &str = "N/A";

/// Round and group thousands with commas, e.g. `123456.7` -> `"123,457"`.
pub fn thousands(value: f64) -> String {
    let rounded = value.round() as i64;
    let digits = rounded.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if rounded < 0 {
        out.insert(0, '-');
    }
    out
}

pub fn clock(now: DateTime<Utc>) -> String {
    format!("{} UTC", now.format("%H:%M:%S"))
}

/// `2024-01-05` -> `January 5, 2024`. Unparseable input is shown as-is.
pub fn approach_date(raw: &str) -> String {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map(|d| d.format("%B %-d, %Y").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

// -- list view --

#[derive(Debug, Clone, PartialEq)]
pub struct CardText {
    pub name: String,
    pub hazard: &'static str,
    pub diameter: String,
    pub distance: String,
    pub velocity: String,
}

impl CardText {
    pub fn new(a: &AsteroidSummary) -> Self {
        Self {
            name: a.name.clone(),
            hazard: a.hazard_label(),
            diameter: format!("{} km", a.diameter),
            distance: format!("{:.2} M km", a.distance_million_km()),
            velocity: format!("{} km/s", a.velocity),
        }
    }

    /// Case-insensitive substring match against everything the card shows.
    pub fn matches(&self, term: &str) -> bool {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return true;
        }
        [
            self.name.as_str(),
            self.hazard,
            self.diameter.as_str(),
            self.distance.as_str(),
            self.velocity.as_str(),
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(&term))
    }
}

pub fn stat_km(value: Option<f64>) -> String {
    value
        .map(|v| format!("{:.2} km", v))
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

pub fn stat_km_s(value: Option<f64>) -> String {
    value
        .map(|v| format!("{:.2} km/s", v))
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

// -- detail view --

#[derive(Debug, Clone, PartialEq)]
pub struct DetailText {
    pub name: String,
    pub hazard_badge: &'static str,
    pub hazard_class: &'static str,
    pub approach_date: String,
    pub approach_time: String,
    pub distance: String,
    pub velocity: String,
    pub lunar_distance: String,
    pub diameter_min: String,
    pub diameter_max: String,
    pub magnitude: String,
    pub hazardous: &'static str,
    pub orbit_id: String,
    pub orbit_class: String,
    pub first_observation: String,
    pub last_observation: String,
}

fn meters(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() && v != 0.0 => format!("{} meters", v.round() as i64),
        _ => NOT_AVAILABLE.to_string(),
    }
}

fn or_na(value: &Option<String>) -> String {
    value
        .as_deref()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or(NOT_AVAILABLE)
        .to_string()
}

impl DetailText {
    pub fn new(d: &AsteroidDetail) -> Self {
        let approach = d.close_approach.as_ref().filter(|ca| ca.date.is_some());

        let (approach_date, approach_time, distance, velocity, lunar_distance) = match approach {
            Some(ca) => (
                ca.date.as_deref().map(approach_date).unwrap_or_default(),
                or_na(&ca.time),
                format!("{:.2} million km", d.miss_distance_km().unwrap_or(0.0) / 1_000_000.0),
                format!("{} km/h", thousands(d.velocity_kmh().unwrap_or(0.0))),
                format!("{:.1} LD", d.miss_distance_lunar().unwrap_or(0.0)),
            ),
            None => (
                "No close approach data".to_string(),
                NOT_AVAILABLE.to_string(),
                NOT_AVAILABLE.to_string(),
                NOT_AVAILABLE.to_string(),
                NOT_AVAILABLE.to_string(),
            ),
        };

        let (hazard_badge, hazard_class) = if d.hazardous {
            ("Potentially Hazardous", "hazard-badge hazard-yes")
        } else {
            ("Not Hazardous", "hazard-badge hazard-no")
        };

        Self {
            name: d.display_name(),
            hazard_badge,
            hazard_class,
            approach_date,
            approach_time,
            distance,
            velocity,
            lunar_distance,
            diameter_min: meters(d.diameter_min_m),
            diameter_max: meters(d.diameter_max_m),
            magnitude: d
                .absolute_magnitude
                .filter(|m| *m != 0.0)
                .map(|m| m.to_string())
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            hazardous: if d.hazardous { "Yes" } else { "No" },
            orbit_id: or_na(&d.orbit_id),
            orbit_class: or_na(&d.orbit_class),
            first_observation: or_na(&d.first_observation_date),
            last_observation: or_na(&d.last_observation_date),
        }
    }
}
