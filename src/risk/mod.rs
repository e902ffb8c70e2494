//! Risk heuristics: a per-object 0-100 score for the detail view and a
//! capped fleet aggregate for the list view. The two are
//! independent scoring laws.

pub mod aggregator;
pub mod scorer;

pub use aggregator::{FleetRisk, FleetStats, RiskAggregator};
pub use scorer::{DistanceRating, RiskAssessment, RiskInputs, RiskLevel, RiskScorer, SizeCategory};
