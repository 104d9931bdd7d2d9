use std::collections::BTreeMap;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::{VenueId, ZoneId};
use crate::routes::plans::ImplementationPlan;
use crate::routes::roi::RoiEstimate;
use crate::routes::scores::OptimizationScore;

// =========================================================
// Recommendation types
// =========================================================

/// Optimization category. One analyzer per category.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Capacity,
    Flow,
    Safety,
    Layout,
    Technology,
    Revenue,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Capacity => "capacity",
            Category::Flow => "flow",
            Category::Safety => "safety",
            Category::Layout => "layout",
            Category::Technology => "technology",
            Category::Revenue => "revenue",
        }
    }

    /// All categories, in analyzer-execution order.
    pub const ALL: [Category; 6] = [
        Category::Capacity,
        Category::Flow,
        Category::Safety,
        Category::Layout,
        Category::Technology,
        Category::Revenue,
    ];
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "capacity" => Ok(Category::Capacity),
            "flow" => Ok(Category::Flow),
            "safety" => Ok(Category::Safety),
            "layout" => Ok(Category::Layout),
            "technology" => Ok(Category::Technology),
            "revenue" => Ok(Category::Revenue),
            _ => Err(format!("Unknown category: {}", s)),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Recommendation priority. Fixed at emission time; never recomputed.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

impl Priority {
    /// Ordinal rank used for sorting: CRITICAL > HIGH > MEDIUM > LOW.
    pub fn weight(&self) -> u8 {
        match self {
            Priority::Critical => 4,
            Priority::High => 3,
            Priority::Medium => 2,
            Priority::Low => 1,
        }
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "LOW" => Ok(Priority::Low),
            "MEDIUM" => Ok(Priority::Medium),
            "HIGH" => Ok(Priority::High),
            "CRITICAL" => Ok(Priority::Critical),
            _ => Err(format!("Unknown priority: {}", s)),
        }
    }
}

/// Recommendation subtype. Together with category and zone id this forms
/// the deterministic recommendation identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Subtype {
    IncreaseCapacity,
    SpaceReallocation,
    QueueManagement,
    FlowBalance,
    BottleneckRelief,
    SafetyMeasures,
    CameraCoverage,
    LayoutEngagement,
    OperationalEfficiency,
    SmartMonitoring,
    AccessControl,
    RevenueUplift,
    UpsellProgram,
}

impl Subtype {
    pub fn as_str(&self) -> &'static str {
        match self {
            Subtype::IncreaseCapacity => "increase_capacity",
            Subtype::SpaceReallocation => "space_reallocation",
            Subtype::QueueManagement => "queue_management",
            Subtype::FlowBalance => "flow_balance",
            Subtype::BottleneckRelief => "bottleneck_relief",
            Subtype::SafetyMeasures => "safety_measures",
            Subtype::CameraCoverage => "camera_coverage",
            Subtype::LayoutEngagement => "layout_engagement",
            Subtype::OperationalEfficiency => "operational_efficiency",
            Subtype::SmartMonitoring => "smart_monitoring",
            Subtype::AccessControl => "access_control",
            Subtype::RevenueUplift => "revenue_uplift",
            Subtype::UpsellProgram => "upsell_program",
        }
    }
}

impl FromStr for Subtype {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "increase_capacity" => Ok(Subtype::IncreaseCapacity),
            "space_reallocation" => Ok(Subtype::SpaceReallocation),
            "queue_management" => Ok(Subtype::QueueManagement),
            "flow_balance" => Ok(Subtype::FlowBalance),
            "bottleneck_relief" => Ok(Subtype::BottleneckRelief),
            "safety_measures" => Ok(Subtype::SafetyMeasures),
            "camera_coverage" => Ok(Subtype::CameraCoverage),
            "layout_engagement" => Ok(Subtype::LayoutEngagement),
            "operational_efficiency" => Ok(Subtype::OperationalEfficiency),
            "smart_monitoring" => Ok(Subtype::SmartMonitoring),
            "access_control" => Ok(Subtype::AccessControl),
            "revenue_uplift" => Ok(Subtype::RevenueUplift),
            "upsell_program" => Ok(Subtype::UpsellProgram),
            _ => Err(format!("Unknown subtype: {}", s)),
        }
    }
}

/// Deterministic composite recommendation key `(category, zone, subtype)`.
///
/// Identical inputs always yield identical identifiers, so regeneration is
/// idempotent. Serialized as `category:zone:subtype`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RecommendationId {
    pub category: Category,
    pub zone_id: ZoneId,
    pub subtype: Subtype,
}

impl RecommendationId {
    pub fn new(category: Category, zone_id: ZoneId, subtype: Subtype) -> Self {
        Self { category, zone_id, subtype }
    }
}

impl std::fmt::Display for RecommendationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}:{}",
            self.category.as_str(),
            self.zone_id,
            self.subtype.as_str()
        )
    }
}

impl FromStr for RecommendationId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Zone ids may themselves contain ':', so split from both ends.
        let (category_str, rest) = s
            .split_once(':')
            .ok_or_else(|| format!("Malformed recommendation id: {}", s))?;
        let (zone_str, subtype_str) = rest
            .rsplit_once(':')
            .ok_or_else(|| format!("Malformed recommendation id: {}", s))?;
        if zone_str.is_empty() {
            return Err(format!("Malformed recommendation id: {}", s));
        }
        Ok(RecommendationId {
            category: category_str.parse()?,
            zone_id: ZoneId::new(zone_str),
            subtype: subtype_str.parse()?,
        })
    }
}

impl Serialize for RecommendationId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for RecommendationId {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Closed per-category metrics variant: the observed value, the value the
/// recommendation targets, and a human-readable improvement statement.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "lowercase")]
pub enum RecommendationMetrics {
    Capacity {
        current: f64,
        target: f64,
        expected_improvement: String,
    },
    Flow {
        current: f64,
        target: f64,
        expected_improvement: String,
    },
    Safety {
        current: f64,
        target: f64,
        expected_improvement: String,
    },
    Layout {
        current: f64,
        target: f64,
        expected_improvement: String,
    },
    Technology {
        current: f64,
        target: f64,
        expected_improvement: String,
    },
    Revenue {
        current: f64,
        target: f64,
        expected_improvement: String,
    },
}

impl RecommendationMetrics {
    pub fn expected_improvement(&self) -> &str {
        match self {
            RecommendationMetrics::Capacity { expected_improvement, .. }
            | RecommendationMetrics::Flow { expected_improvement, .. }
            | RecommendationMetrics::Safety { expected_improvement, .. }
            | RecommendationMetrics::Layout { expected_improvement, .. }
            | RecommendationMetrics::Technology { expected_improvement, .. }
            | RecommendationMetrics::Revenue { expected_improvement, .. } => expected_improvement,
        }
    }
}

/// One costed improvement action for a zone. Immutable once emitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub id: RecommendationId,
    pub category: Category,
    pub zone_id: ZoneId,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    /// Expected impact, 0-10.
    pub impact: f64,
    /// Implementation effort, 0-10.
    pub effort: f64,
    /// One-off implementation cost, currency units.
    pub estimated_cost: f64,
    /// Estimated savings per year, currency units.
    pub estimated_savings: f64,
    /// Estimated cost / (annual savings / 12), rounded to one decimal.
    pub payback_months: f64,
    /// Concrete actionable steps.
    pub actions: Vec<String>,
    pub metrics: RecommendationMetrics,
}

/// Complete generation payload for one venue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationReport {
    pub venue_id: VenueId,
    pub generated_at: DateTime<Utc>,
    pub recommendations: Vec<Recommendation>,
    pub roi: RoiEstimate,
    pub scores: BTreeMap<ZoneId, OptimizationScore>,
    /// Present only when implementation plans were requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plans: Option<BTreeMap<String, ImplementationPlan>>,
    pub zones_analyzed: usize,
    /// Zones skipped because their snapshot failed validation.
    pub zones_skipped: usize,
}

/// Route function name constant for recommendation generation
pub const GENERATE_RECOMMENDATIONS: &str = "generate_recommendations";
