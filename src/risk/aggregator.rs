//! Fleet-wide risk and headline statistics for the list view.
//!
//! This is a separate scoring law from [`super::scorer`]: each object
//! adds a fixed amount to one of three contributions, and every
//! contribution is capped on its own before the total is taken.

use serde::Serialize;

use crate::models::AsteroidSummary;

const PROXIMITY_AU: f64 = 0.005;
const PROXIMITY_STEP: u32 = 10;
const PROXIMITY_CAP: u32 = 40;

const SIZE_KM: f64 = 0.05;
const SIZE_STEP: u32 = 15;
const SIZE_CAP: u32 = 35;

const SPEED_KM_S: f64 = 25.0;
const SPEED_STEP: u32 = 10;
const SPEED_CAP: u32 = 25;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FleetRisk {
    pub proximity: u32,
    pub size: u32,
    pub speed: u32,
}

impl FleetRisk {
    pub fn total(&self) -> u32 {
        self.proximity + self.size + self.speed
    }
}

pub struct RiskAggregator;

impl RiskAggregator {
    pub fn aggregate(asteroids: &[AsteroidSummary]) -> FleetRisk {
        let (mut proximity, mut size, mut speed) = (0u32, 0u32, 0u32);

        for a in asteroids {
            if a.distance < PROXIMITY_AU {
                proximity = proximity.saturating_add(PROXIMITY_STEP);
            }
            if a.diameter > SIZE_KM {
                size = size.saturating_add(SIZE_STEP);
            }
            if a.velocity > SPEED_KM_S {
                speed = speed.saturating_add(SPEED_STEP);
            }
        }

        FleetRisk {
            proximity: proximity.min(PROXIMITY_CAP),
            size: size.min(SIZE_CAP),
            speed: speed.min(SPEED_CAP),
        }
    }
}

/// Headline numbers shown above the list.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FleetStats {
    pub active: usize,
    pub hazardous: usize,
    /// Largest diameter in km
    pub largest_km: Option<f64>,
    /// Highest velocity in km/s
    pub fastest_km_s: Option<f64>,
}

impl FleetStats {
    pub fn from_fleet(asteroids: &[AsteroidSummary]) -> Self {
        let max_of = |f: fn(&AsteroidSummary) -> f64| {
            asteroids
                .iter()
                .map(f)
                .filter(|v| v.is_finite())
                .fold(None, |acc: Option<f64>, v| Some(acc.map_or(v, |m| m.max(v))))
        };

        FleetStats {
            active: asteroids.len(),
            hazardous: asteroids.iter().filter(|a| a.hazardous).count(),
            largest_km: max_of(|a| a.diameter),
            fastest_km_s: max_of(|a| a.velocity),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn neo(distance: f64, diameter: f64, velocity: f64, hazardous: bool) -> AsteroidSummary {
        AsteroidSummary {
            id: "1".into(),
            name: "test".into(),
            diameter,
            velocity,
            distance,
            hazardous,
        }
    }

    #[test]
    fn test_mixed_fleet_total() {
        let fleet = vec![
            neo(0.001, 0.01, 10.0, false),
            neo(0.002, 0.01, 10.0, false),
            neo(0.003, 0.01, 10.0, false),
            neo(0.2, 0.10, 10.0, false),
            neo(0.2, 0.20, 10.0, false),
        ];
        let risk = RiskAggregator::aggregate(&fleet);
        assert_eq!(risk, FleetRisk { proximity: 30, size: 30, speed: 0 });
        assert_eq!(risk.total(), 60);
    }

    #[test]
    fn test_caps_apply_independently() {
        let fleet: Vec<_> = (0..20).map(|_| neo(0.0001, 5.0, 40.0, true)).collect();
        let risk = RiskAggregator::aggregate(&fleet);
        assert_eq!(risk.proximity, 40);
        assert_eq!(risk.size, 35);
        assert_eq!(risk.speed, 25);
        assert_eq!(risk.total(), 100);
    }

    #[test]
    fn test_thresholds_are_strict() {
        let risk = RiskAggregator::aggregate(&[neo(0.005, 0.05, 25.0, false)]);
        assert_eq!(risk.total(), 0);
    }

    #[test]
    fn test_empty_fleet() {
        assert_eq!(RiskAggregator::aggregate(&[]).total(), 0);
        let stats = FleetStats::from_fleet(&[]);
        assert_eq!(stats.active, 0);
        assert_eq!(stats.largest_km, None);
        assert_eq!(stats.fastest_km_s, None);
    }

    #[test]
    fn test_stats() {
        let fleet = vec![
            neo(0.1, 0.25, 12.5, true),
            neo(0.1, 1.75, 8.0, false),
            neo(0.1, 0.05, 31.2, true),
        ];
        let stats = FleetStats::from_fleet(&fleet);
        assert_eq!(stats.active, 3);
        assert_eq!(stats.hazardous, 2);
        assert_eq!(stats.largest_km, Some(1.75));
        assert_eq!(stats.fastest_km_s, Some(31.2));
    }
}
