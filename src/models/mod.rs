//! Domain model for zone telemetry.

pub mod zone;

pub use zone::{
    Alert, AnalyticsSample, Camera, CameraStatus, CapacityRecord, EvacuationRoute, OccupancyEvent,
    OccupancyEventKind, OptimizationStamp, Severity, SnapshotIssue, Violation, ZoneConfig,
    ZoneSnapshot,
};

#[cfg(test)]
pub(crate) mod test_support {
    //! Snapshot builders shared by the unit tests.

    use chrono::NaiveDate;

    use super::zone::{AnalyticsSample, ZoneConfig, ZoneSnapshot};
    use crate::api::ZoneId;

    /// A snapshot with `days` analytics samples at a flat utilization rate
    /// and otherwise neutral telemetry (no queues, events, violations or
    /// cameras). Capacity defaults to 100.
    pub fn snapshot_with_utilization(zone: &str, utilization: f64, days: usize) -> ZoneSnapshot {
        let start = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let analytics = (0..days)
            .map(|i| AnalyticsSample {
                day: start + chrono::Days::new(i as u64),
                utilization_rate: utilization,
                average_stay_minutes: 20.0,
                efficiency_score: 4.0,
                safety_score: 4.0,
                revenue: 1000.0,
            })
            .collect();

        ZoneSnapshot {
            zone_id: ZoneId::new(zone),
            name: format!("Zone {}", zone),
            config: ZoneConfig {
                zone_id: ZoneId::new(zone),
                max_capacity: 100,
                alert_thresholds: [("occupancy_warning".to_string(), 0.85)].into(),
                restricted_access: false,
                access_rules: vec!["staff-badge".to_string()],
                optimization_stamp: None,
            },
            analytics,
            capacity_records: vec![],
            occupancy_events: vec![],
            violations: vec![],
            alerts: vec![],
            cameras: vec![],
            evacuation_routes: vec![],
        }
    }
}
