//! Asteroid data model.
//!
//! `AsteroidSummary` is what the local backend serves for the list view.
//! `AsteroidDetail` is the flattened, display-ready form of a single
//! record from the NEO lookup service; the `Neo*` wire types below mirror
//! that service's JSON and are only used for decoding.

use serde::{Deserialize, Deserializer, Serialize};

/// Kilometres per astronomical unit, in millions.
pub const MILLION_KM_PER_AU: f64 = 149.6;

// =============================================================================
// LIST VIEW
// =============================================================================

/// One row of the `/asteroids/` feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AsteroidSummary {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub name: String,
    /// Maximum estimated diameter in kilometres
    pub diameter: f64,
    /// Relative velocity in km/s
    pub velocity: f64,
    /// Miss distance in astronomical units
    pub distance: f64,
    pub hazardous: bool,
}

impl AsteroidSummary {
    pub fn distance_million_km(&self) -> f64 {
        self.distance * MILLION_KM_PER_AU
    }

    pub fn hazard_label(&self) -> &'static str {
        if self.hazardous {
            "Hazardous"
        } else {
            "Safe"
        }
    }
}

// =============================================================================
// DETAIL VIEW
// =============================================================================

/// First close-approach entry of a lookup record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CloseApproach {
    /// `YYYY-MM-DD`
    pub date: Option<String>,
    /// `HH:MM`, taken from the full approach timestamp
    pub time: Option<String>,
    pub miss_distance_km: Option<f64>,
    pub miss_distance_lunar: Option<f64>,
    pub velocity_kmh: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AsteroidDetail {
    pub id: String,
    pub name: String,
    pub neo_reference_id: Option<String>,
    pub designation: Option<String>,
    pub hazardous: bool,
    pub absolute_magnitude: Option<f64>,
    pub diameter_min_m: Option<f64>,
    pub diameter_max_m: Option<f64>,
    pub close_approach: Option<CloseApproach>,
    pub orbit_id: Option<String>,
    pub orbit_class: Option<String>,
    pub first_observation_date: Option<String>,
    pub last_observation_date: Option<String>,
}

fn known(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite() && *v != 0.0)
}

impl AsteroidDetail {
    /// Name for headings, falling back to the designation.
    pub fn display_name(&self) -> String {
        if !self.name.trim().is_empty() {
            return self.name.clone();
        }
        self.designation.clone().unwrap_or_else(|| self.id.clone())
    }

    /// Mean of min/max diameter in metres, or `None` unless both are known.
    pub fn avg_diameter_m(&self) -> Option<f64> {
        match (known(self.diameter_min_m), known(self.diameter_max_m)) {
            (Some(min), Some(max)) => Some((min + max) / 2.0),
            _ => None,
        }
    }

    /// Mean diameter used to size the rendered body; absent bounds count as zero.
    pub fn geometry_diameter_m(&self) -> f64 {
        let min = known(self.diameter_min_m).unwrap_or(0.0);
        let max = known(self.diameter_max_m).unwrap_or(0.0);
        (min + max) / 2.0
    }

    pub fn miss_distance_lunar(&self) -> Option<f64> {
        known(self.close_approach.as_ref().and_then(|c| c.miss_distance_lunar))
    }

    pub fn miss_distance_km(&self) -> Option<f64> {
        known(self.close_approach.as_ref().and_then(|c| c.miss_distance_km))
    }

    pub fn velocity_kmh(&self) -> Option<f64> {
        known(self.close_approach.as_ref().and_then(|c| c.velocity_kmh))
    }
}

// =============================================================================
// NEO LOOKUP WIRE FORMAT
// =============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct NeoLookupResponse {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub neo_reference_id: Option<String>,
    #[serde(default)]
    pub designation: Option<String>,
    #[serde(default)]
    pub is_potentially_hazardous_asteroid: bool,
    #[serde(default)]
    pub absolute_magnitude_h: Option<f64>,
    #[serde(default)]
    pub estimated_diameter: Option<NeoEstimatedDiameter>,
    #[serde(default)]
    pub close_approach_data: Vec<NeoCloseApproach>,
    #[serde(default)]
    pub orbital_data: Option<NeoOrbitalData>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NeoEstimatedDiameter {
    #[serde(default)]
    pub meters: Option<NeoDiameterRange>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NeoDiameterRange {
    #[serde(default, deserialize_with = "lenient_f64")]
    pub estimated_diameter_min: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub estimated_diameter_max: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NeoCloseApproach {
    #[serde(default)]
    pub close_approach_date: Option<String>,
    #[serde(default)]
    pub close_approach_date_full: Option<String>,
    #[serde(default)]
    pub relative_velocity: Option<NeoVelocity>,
    #[serde(default)]
    pub miss_distance: Option<NeoMissDistance>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NeoVelocity {
    #[serde(default, deserialize_with = "lenient_f64")]
    pub kilometers_per_hour: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NeoMissDistance {
    #[serde(default, deserialize_with = "lenient_f64")]
    pub lunar: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub kilometers: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NeoOrbitalData {
    #[serde(default)]
    pub orbit_id: Option<String>,
    #[serde(default)]
    pub orbit_class: Option<NeoOrbitClass>,
    #[serde(default)]
    pub first_observation_date: Option<String>,
    #[serde(default)]
    pub last_observation_date: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NeoOrbitClass {
    #[serde(default)]
    pub orbit_class_type: Option<String>,
}

impl From<NeoLookupResponse> for AsteroidDetail {
    fn from(raw: NeoLookupResponse) -> Self {
        let meters = raw.estimated_diameter.and_then(|d| d.meters);
        let close_approach = raw.close_approach_data.into_iter().next().map(|ca| {
            let time = ca
                .close_approach_date_full
                .as_deref()
                .and_then(|full| full.split_once(' '))
                .map(|(_, time)| time.to_string());
            CloseApproach {
                date: ca.close_approach_date,
                time,
                miss_distance_km: ca.miss_distance.as_ref().and_then(|m| m.kilometers),
                miss_distance_lunar: ca.miss_distance.as_ref().and_then(|m| m.lunar),
                velocity_kmh: ca.relative_velocity.and_then(|v| v.kilometers_per_hour),
            }
        });
        let orbital = raw.orbital_data;

        AsteroidDetail {
            id: raw.id,
            name: raw.name,
            neo_reference_id: raw.neo_reference_id,
            designation: raw.designation,
            hazardous: raw.is_potentially_hazardous_asteroid,
            absolute_magnitude: raw.absolute_magnitude_h,
            diameter_min_m: meters.as_ref().and_then(|m| m.estimated_diameter_min),
            diameter_max_m: meters.as_ref().and_then(|m| m.estimated_diameter_max),
            close_approach,
            orbit_id: orbital.as_ref().and_then(|o| o.orbit_id.clone()),
            orbit_class: orbital
                .as_ref()
                .and_then(|o| o.orbit_class.as_ref())
                .and_then(|c| c.orbit_class_type.clone()),
            first_observation_date: orbital.as_ref().and_then(|o| o.first_observation_date.clone()),
            last_observation_date: orbital.and_then(|o| o.last_observation_date),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Lenient {
    Number(f64),
    Text(String),
}

/// The lookup service encodes most measurements as decimal strings.
/// Unparseable values decode as `None` rather than failing the record.
fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<Lenient> = Option::deserialize(deserializer)?;
    Ok(match value {
        Some(Lenient::Number(n)) => Some(n),
        Some(Lenient::Text(s)) => s.trim().replace(',', "").parse::<f64>().ok(),
        None => None,
    })
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Lenient::deserialize(deserializer)? {
        Lenient::Text(s) => Ok(s),
        Lenient::Number(n) if n.fract() == 0.0 => Ok(format!("{}", n as i64)),
        Lenient::Number(n) => Ok(n.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_from_backend_json() {
        let json = r#"[{"id":"2465633","name":"465633 (2009 JR5)","diameter":0.483,
                        "velocity":18.13,"distance":0.30312,"hazardous":true}]"#;
        let list: Vec<AsteroidSummary> = serde_json::from_str(json).unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].id, "2465633");
        assert!(list[0].hazardous);
        assert_eq!(list[0].hazard_label(), "Hazardous");
        assert!((list[0].distance_million_km() - 45.346752).abs() < 1e-6);
    }

    #[test]
    fn test_summary_numeric_id() {
        let json = r#"{"id":54016,"name":"x","diameter":0.1,"velocity":1.0,"distance":0.1,"hazardous":false}"#;
        let s: AsteroidSummary = serde_json::from_str(json).unwrap();
        assert_eq!(s.id, "54016");
    }

    #[test]
    fn test_lookup_with_string_measurements() {
        let json = r#"{
            "id": "3542519",
            "name": "(2010 PK9)",
            "designation": "2010 PK9",
            "is_potentially_hazardous_asteroid": false,
            "estimated_diameter": {"meters": {"estimated_diameter_min": 100.0, "estimated_diameter_max": 200.0}},
            "close_approach_data": [{
                "close_approach_date": "2024-01-05",
                "close_approach_date_full": "2024-Jan-05 12:34",
                "relative_velocity": {"kilometers_per_hour": "54321.5"},
                "miss_distance": {"lunar": "12.5", "kilometers": "4805000.1"}
            }]
        }"#;
        let raw: NeoLookupResponse = serde_json::from_str(json).unwrap();
        let detail = AsteroidDetail::from(raw);
        assert_eq!(detail.avg_diameter_m(), Some(150.0));
        assert_eq!(detail.miss_distance_lunar(), Some(12.5));
        assert_eq!(detail.velocity_kmh(), Some(54321.5));
        let ca = detail.close_approach.unwrap();
        assert_eq!(ca.time.as_deref(), Some("12:34"));
        assert_eq!(ca.date.as_deref(), Some("2024-01-05"));
    }

    #[test]
    fn test_lookup_with_missing_sections() {
        let raw: NeoLookupResponse = serde_json::from_str(r#"{"id":"1"}"#).unwrap();
        let detail = AsteroidDetail::from(raw);
        assert!(detail.close_approach.is_none());
        assert_eq!(detail.avg_diameter_m(), None);
        assert_eq!(detail.miss_distance_lunar(), None);
        assert_eq!(detail.geometry_diameter_m(), 0.0);
        assert_eq!(detail.display_name(), "1");
    }

    #[test]
    fn test_avg_diameter_requires_both_bounds() {
        let detail = AsteroidDetail {
            diameter_max_m: Some(400.0),
            ..Default::default()
        };
        assert_eq!(detail.avg_diameter_m(), None);
        assert_eq!(detail.geometry_diameter_m(), 200.0);
    }

    #[test]
    fn test_unparseable_measurement_is_unknown() {
        let json = r#"{"id":"9","close_approach_data":[{"miss_distance":{"lunar":"n/a"}}]}"#;
        let raw: NeoLookupResponse = serde_json::from_str(json).unwrap();
        let detail = AsteroidDetail::from(raw);
        assert_eq!(detail.miss_distance_lunar(), None);
    }

    #[test]
    fn test_display_name_falls_back_to_designation() {
        let detail = AsteroidDetail {
            id: "7".into(),
            designation: Some("2001 AB".into()),
            ..Default::default()
        };
        assert_eq!(detail.display_name(), "2001 AB");
    }
}
