//! Zone telemetry domain model.
//!
//! A [`ZoneSnapshot`] is the single input to the analysis pipeline: a
//! read-only view of one zone's configuration plus its aggregated telemetry
//! windows (30-day analytics samples, 7-day capacity records and occupancy
//! events, 30-day violations and alerts). The engine never mutates a
//! snapshot; configuration writes go through the repository layer.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::api::ZoneId;
use crate::routes::recommendations::Category;

/// Per-zone configuration owned by the external zone-management collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZoneConfig {
    pub zone_id: ZoneId,
    pub max_capacity: u32,
    /// Named alert thresholds (e.g. "occupancy_warning" -> 0.85).
    #[serde(default)]
    pub alert_thresholds: BTreeMap<String, f64>,
    #[serde(default)]
    pub restricted_access: bool,
    #[serde(default)]
    pub access_rules: Vec<String>,
    /// Stamped by the action executor on every applied optimization.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub optimization_stamp: Option<OptimizationStamp>,
}

/// Metadata recorded when an optimization is applied to a zone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimizationStamp {
    pub last_optimized: DateTime<Utc>,
    pub optimized_by: String,
    pub optimization_type: Category,
}

/// One daily analytics sample from the 30-day window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsSample {
    pub day: NaiveDate,
    /// Fraction of configured capacity observed occupied, in [0, 1].
    pub utilization_rate: f64,
    pub average_stay_minutes: f64,
    /// Operational efficiency score, 0-5.
    pub efficiency_score: f64,
    /// Safety score, 0-5.
    pub safety_score: f64,
    /// Revenue generated per day, in currency units.
    pub revenue: f64,
}

/// One capacity record from the 7-day window (most-recent-first).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CapacityRecord {
    pub recorded_at: DateTime<Utc>,
    pub queue_length: u32,
}

/// Direction of an occupancy event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OccupancyEventKind {
    Entry,
    Exit,
}

/// One occupancy event from the 7-day window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OccupancyEvent {
    pub kind: OccupancyEventKind,
    /// Zone occupancy at the time of the event.
    pub occupancy_count: u32,
    pub timestamp: DateTime<Utc>,
}

/// Severity of a recorded violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

/// One violation from the 30-day window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Violation {
    pub severity: Severity,
    pub recorded_at: DateTime<Utc>,
}

/// One alert from the 30-day window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alert {
    pub message: String,
    pub raised_at: DateTime<Utc>,
}

/// Camera operational status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CameraStatus {
    Online,
    Offline,
    Maintenance,
}

/// A camera installed in the zone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Camera {
    pub status: CameraStatus,
}

/// An evacuation route. Consumed for completeness only; never scored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvacuationRoute {
    pub name: String,
    pub active: bool,
}

/// Reason a snapshot cannot be analyzed.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SnapshotIssue {
    #[error("zone has no configured capacity")]
    ZeroCapacity,
    #[error("analytics window is empty")]
    EmptyAnalytics,
    #[error("utilization rate {0} outside [0, 1]")]
    UtilizationOutOfRange(f64),
    #[error("safety score {0} outside [0, 5]")]
    SafetyScoreOutOfRange(f64),
    #[error("efficiency score {0} outside [0, 5]")]
    EfficiencyScoreOutOfRange(f64),
}

/// Complete telemetry view of one zone. The only input to the analyzers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZoneSnapshot {
    pub zone_id: ZoneId,
    pub name: String,
    pub config: ZoneConfig,
    /// Ordered daily samples over the 30-day window.
    pub analytics: Vec<AnalyticsSample>,
    /// 7-day window, most-recent-first.
    #[serde(default)]
    pub capacity_records: Vec<CapacityRecord>,
    /// 7-day window.
    #[serde(default)]
    pub occupancy_events: Vec<OccupancyEvent>,
    /// 30-day window.
    #[serde(default)]
    pub violations: Vec<Violation>,
    /// 30-day window.
    #[serde(default)]
    pub alerts: Vec<Alert>,
    #[serde(default)]
    pub cameras: Vec<Camera>,
    #[serde(default)]
    pub evacuation_routes: Vec<EvacuationRoute>,
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let collected: Vec<f64> = values.collect();
    if collected.is_empty() {
        0.0
    } else {
        collected.iter().sum::<f64>() / collected.len() as f64
    }
}

impl ZoneSnapshot {
    /// Mean utilization rate over the analytics window.
    pub fn avg_utilization(&self) -> f64 {
        mean(self.analytics.iter().map(|s| s.utilization_rate))
    }

    /// Mean visitor stay time in minutes over the analytics window.
    pub fn avg_stay_minutes(&self) -> f64 {
        mean(self.analytics.iter().map(|s| s.average_stay_minutes))
    }

    /// Mean efficiency score (0-5) over the analytics window.
    pub fn avg_efficiency(&self) -> f64 {
        mean(self.analytics.iter().map(|s| s.efficiency_score))
    }

    /// Mean safety score (0-5) over the analytics window.
    pub fn avg_safety(&self) -> f64 {
        mean(self.analytics.iter().map(|s| s.safety_score))
    }

    /// Mean daily revenue over the analytics window.
    pub fn avg_revenue(&self) -> f64 {
        mean(self.analytics.iter().map(|s| s.revenue))
    }

    /// Fraction of cameras currently online. Zero when no cameras exist.
    pub fn camera_coverage(&self) -> f64 {
        if self.cameras.is_empty() {
            return 0.0;
        }
        let online = self
            .cameras
            .iter()
            .filter(|c| c.status == CameraStatus::Online)
            .count();
        online as f64 / self.cameras.len() as f64
    }

    /// Queue length from the most recent capacity record, if any.
    pub fn latest_queue_length(&self) -> Option<u32> {
        // Records are ordered most-recent-first.
        self.capacity_records.first().map(|r| r.queue_length)
    }

    /// Check the snapshot is usable by the analyzers.
    ///
    /// A zone failing validation is skipped with a warning rather than
    /// failing the whole batch.
    pub fn validate(&self) -> Result<(), SnapshotIssue> {
        if self.config.max_capacity == 0 {
            return Err(SnapshotIssue::ZeroCapacity);
        }
        if self.analytics.is_empty() {
            return Err(SnapshotIssue::EmptyAnalytics);
        }
        for sample in &self.analytics {
            if !(0.0..=1.0).contains(&sample.utilization_rate) {
                return Err(SnapshotIssue::UtilizationOutOfRange(sample.utilization_rate));
            }
            if !(0.0..=5.0).contains(&sample.safety_score) {
                return Err(SnapshotIssue::SafetyScoreOutOfRange(sample.safety_score));
            }
            if !(0.0..=5.0).contains(&sample.efficiency_score) {
                return Err(SnapshotIssue::EfficiencyScoreOutOfRange(sample.efficiency_score));
            }
        }
        Ok(())
    }
}
