//! Single-object risk heuristic.
//!
//! The score is the sum of four independent bands (size, proximity,
//! velocity, hazard flag). Missing measurements fall into an "unknown"
//! band instead of failing, so scoring is total.

use serde::Serialize;

use crate::models::AsteroidDetail;

/// Raw measurements the scorer looks at. `None` means unknown.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RiskInputs {
    pub avg_diameter_m: Option<f64>,
    pub miss_distance_lunar: Option<f64>,
    pub velocity_kmh: Option<f64>,
    pub hazardous: bool,
}

impl From<&AsteroidDetail> for RiskInputs {
    fn from(detail: &AsteroidDetail) -> Self {
        Self {
            avg_diameter_m: detail.avg_diameter_m(),
            miss_distance_lunar: detail.miss_distance_lunar(),
            velocity_kmh: detail.velocity_kmh(),
            hazardous: detail.hazardous,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn from_score(score: u32) -> Self {
        if score >= 70 {
            RiskLevel::High
        } else if score >= 40 {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "LOW",
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::High => "HIGH",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            RiskLevel::High => {
                "Close monitoring required. Large size and proximity warrant attention."
            }
            RiskLevel::Medium => {
                "Moderate concern. Size or distance suggests tracking is advisable."
            }
            RiskLevel::Low => "Minimal threat. Safe distance and manageable size.",
        }
    }

    /// Indicator dot colour (red / amber / green).
    pub fn color(&self) -> &'static str {
        match self {
            RiskLevel::High => "#ef4444",
            RiskLevel::Medium => "#fbbf24",
            RiskLevel::Low => "#22c55e",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            RiskLevel::High => "risk-high",
            RiskLevel::Medium => "risk-medium",
            RiskLevel::Low => "risk-low",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SizeCategory {
    VeryLarge,
    Large,
    Medium,
    Small,
    Unknown,
}

impl SizeCategory {
    pub fn from_diameter(avg_diameter_m: Option<f64>) -> Self {
        match avg_diameter_m {
            Some(d) if d > 1000.0 => SizeCategory::VeryLarge,
            Some(d) if d > 500.0 => SizeCategory::Large,
            Some(d) if d > 140.0 => SizeCategory::Medium,
            Some(d) if d > 0.0 => SizeCategory::Small,
            _ => SizeCategory::Unknown,
        }
    }

    /// Size band contribution (0-40).
    pub fn points(&self) -> u32 {
        match self {
            SizeCategory::VeryLarge => 40,
            SizeCategory::Large => 30,
            SizeCategory::Medium => 20,
            SizeCategory::Small => 10,
            SizeCategory::Unknown => 5,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SizeCategory::VeryLarge => "Very Large",
            SizeCategory::Large => "Large",
            SizeCategory::Medium => "Medium",
            SizeCategory::Small => "Small",
            SizeCategory::Unknown => "Unknown",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DistanceRating {
    VeryClose,
    Close,
    Moderate,
    Safe,
    Unknown,
}

impl DistanceRating {
    pub fn from_lunar(miss_distance_lunar: Option<f64>) -> Self {
        match miss_distance_lunar {
            None => DistanceRating::Unknown,
            Some(ld) if ld < 5.0 => DistanceRating::VeryClose,
            Some(ld) if ld < 10.0 => DistanceRating::Close,
            Some(ld) if ld < 20.0 => DistanceRating::Moderate,
            Some(_) => DistanceRating::Safe,
        }
    }

    /// Proximity band contribution (0-35).
    pub fn points(&self) -> u32 {
        match self {
            DistanceRating::VeryClose => 35,
            DistanceRating::Close => 25,
            DistanceRating::Moderate => 15,
            DistanceRating::Safe => 5,
            DistanceRating::Unknown => 10,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DistanceRating::VeryClose => "Very Close",
            DistanceRating::Close => "Close",
            DistanceRating::Moderate => "Moderate",
            DistanceRating::Safe => "Safe",
            DistanceRating::Unknown => "Unknown",
        }
    }
}

/// Velocity band contribution (0-15).
pub fn velocity_points(velocity_kmh: Option<f64>) -> u32 {
    match velocity_kmh {
        Some(v) if v > 100_000.0 => 15,
        Some(v) if v > 50_000.0 => 10,
        _ => 5,
    }
}

pub fn hazard_points(hazardous: bool) -> u32 {
    if hazardous {
        10
    } else {
        0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RiskAssessment {
    pub score: u32,
    pub level: RiskLevel,
    pub size_category: SizeCategory,
    pub distance_rating: DistanceRating,
}

impl RiskAssessment {
    pub fn title(&self) -> String {
        format!("{} RISK", self.level.label())
    }

    pub fn description(&self) -> &'static str {
        self.level.description()
    }
}

pub struct RiskScorer;

impl RiskScorer {
    pub fn assess(inputs: &RiskInputs) -> RiskAssessment {
        let size_category = SizeCategory::from_diameter(inputs.avg_diameter_m);
        let distance_rating = DistanceRating::from_lunar(inputs.miss_distance_lunar);

        let score = size_category.points()
            + distance_rating.points()
            + velocity_points(inputs.velocity_kmh)
            + hazard_points(inputs.hazardous);

        RiskAssessment {
            score,
            level: RiskLevel::from_score(score),
            size_category,
            distance_rating,
        }
    }

    pub fn assess_detail(detail: &AsteroidDetail) -> RiskAssessment {
        Self::assess(&RiskInputs::from(detail))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(d: Option<f64>, ld: Option<f64>, v: Option<f64>, hazardous: bool) -> RiskInputs {
        RiskInputs {
            avg_diameter_m: d,
            miss_distance_lunar: ld,
            velocity_kmh: v,
            hazardous,
        }
    }

    #[test]
    fn test_maximum_score_is_high() {
        let a = RiskScorer::assess(&inputs(Some(2000.0), Some(3.0), Some(120_000.0), true));
        assert_eq!(a.score, 100);
        assert_eq!(a.level, RiskLevel::High);
        assert_eq!(a.size_category, SizeCategory::VeryLarge);
        assert_eq!(a.distance_rating, DistanceRating::VeryClose);
    }

    #[test]
    fn test_small_distant_slow_is_low() {
        let a = RiskScorer::assess(&inputs(Some(50.0), Some(25.0), Some(10_000.0), false));
        assert_eq!(a.score, 20);
        assert_eq!(a.level, RiskLevel::Low);
    }

    #[test]
    fn test_all_unknown() {
        let a = RiskScorer::assess(&RiskInputs::default());
        assert_eq!(a.score, 5 + 10 + 5);
        assert_eq!(a.level, RiskLevel::Low);
        assert_eq!(a.size_category.label(), "Unknown");
        assert_eq!(a.distance_rating.label(), "Unknown");
    }

    #[test]
    fn test_thresholds_are_exclusive() {
        // Exactly on a size boundary drops to the lower band.
        assert_eq!(SizeCategory::from_diameter(Some(1000.0)), SizeCategory::Large);
        assert_eq!(SizeCategory::from_diameter(Some(140.0)), SizeCategory::Small);
        // Exactly on a distance boundary moves to the farther band.
        assert_eq!(DistanceRating::from_lunar(Some(5.0)), DistanceRating::Close);
        assert_eq!(DistanceRating::from_lunar(Some(20.0)), DistanceRating::Safe);
        assert_eq!(velocity_points(Some(100_000.0)), 10);
        assert_eq!(velocity_points(Some(50_000.0)), 5);
    }

    #[test]
    fn test_level_boundaries() {
        assert_eq!(RiskLevel::from_score(70), RiskLevel::High);
        assert_eq!(RiskLevel::from_score(69), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(40), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(39), RiskLevel::Low);
    }

    #[test]
    fn test_medium_case() {
        // 20 (medium size) + 25 (close) + 10 (fast) = 55
        let a = RiskScorer::assess(&inputs(Some(300.0), Some(7.0), Some(60_000.0), false));
        assert_eq!(a.score, 55);
        assert_eq!(a.level, RiskLevel::Medium);
        assert_eq!(a.title(), "MEDIUM RISK");
        assert_eq!(a.level.color(), "#fbbf24");
    }

    #[test]
    fn test_negative_diameter_is_unknown_band() {
        assert_eq!(SizeCategory::from_diameter(Some(-3.0)), SizeCategory::Unknown);
    }
}
