//! Public API surface for the optimization engine.
//!
//! This file consolidates the DTO types for the HTTP API.
//! All types derive Serialize/Deserialize for JSON serialization.

pub use crate::routes::actions::ActionRecord;
pub use crate::routes::actions::ActionResult;
pub use crate::routes::actions::ActionState;
pub use crate::routes::actions::CapacityOptimizationParams;
pub use crate::routes::actions::OptimizationAction;
pub use crate::routes::actions::ScheduleParams;
pub use crate::routes::actions::ThresholdUpdateParams;
pub use crate::routes::plans::EquipmentTier;
pub use crate::routes::plans::ImplementationPlan;
pub use crate::routes::plans::PlanPhase;
pub use crate::routes::plans::PlanResources;
pub use crate::routes::recommendations::Category;
pub use crate::routes::recommendations::Priority;
pub use crate::routes::recommendations::Recommendation;
pub use crate::routes::recommendations::RecommendationId;
pub use crate::routes::recommendations::RecommendationMetrics;
pub use crate::routes::recommendations::RecommendationReport;
pub use crate::routes::recommendations::Subtype;
pub use crate::routes::roi::RoiEstimate;
pub use crate::routes::scores::OptimizationScore;

use serde::{Deserialize, Serialize};

/// Venue identifier (owned by the external venue-management collaborator).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VenueId(pub String);

/// Zone identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ZoneId(pub String);

impl VenueId {
    pub fn new(value: impl Into<String>) -> Self {
        VenueId(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ZoneId {
    pub fn new(value: impl Into<String>) -> Self {
        ZoneId(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for VenueId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl std::fmt::Display for ZoneId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for VenueId {
    fn from(value: &str) -> Self {
        VenueId(value.to_string())
    }
}
impl From<&str> for ZoneId {
    fn from(value: &str) -> Self {
        ZoneId(value.to_string())
    }
}
