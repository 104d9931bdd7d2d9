//! Shared fixtures for integration tests.

use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate, TimeZone, Utc};

use voi_rust::api::{VenueId, ZoneId};
use voi_rust::db::LocalRepository;
use voi_rust::models::{
    AnalyticsSample, Camera, CameraStatus, CapacityRecord, OccupancyEvent, OccupancyEventKind,
    ZoneConfig, ZoneSnapshot,
};

/// A healthy zone: moderate utilization, full telemetry, two online
/// cameras, and monitoring config in place. Nothing about it should
/// trigger an analyzer at default thresholds.
pub fn healthy_zone(zone_id: &str) -> ZoneSnapshot {
    zone_with_utilization(zone_id, 0.5)
}

/// A healthy zone with the given 30-day average utilization.
pub fn zone_with_utilization(zone_id: &str, utilization: f64) -> ZoneSnapshot {
    let start = NaiveDate::from_ymd_opt(2026, 7, 1).unwrap();
    let analytics = (0..30)
        .map(|i| AnalyticsSample {
            day: start + Duration::days(i),
            utilization_rate: utilization,
            average_stay_minutes: 22.0,
            efficiency_score: 4.2,
            safety_score: 4.5,
            revenue: 1_200.0,
        })
        .collect();

    let mut alert_thresholds = BTreeMap::new();
    alert_thresholds.insert("occupancy_warning".to_string(), 0.85);

    ZoneSnapshot {
        zone_id: ZoneId::new(zone_id),
        name: format!("Zone {}", zone_id),
        config: ZoneConfig {
            zone_id: ZoneId::new(zone_id),
            max_capacity: 100,
            alert_thresholds,
            restricted_access: false,
            access_rules: vec![],
            optimization_stamp: None,
        },
        analytics,
        capacity_records: vec![CapacityRecord {
            recorded_at: Utc.with_ymd_and_hms(2026, 7, 30, 12, 0, 0).unwrap(),
            queue_length: 2,
        }],
        occupancy_events: vec![],
        violations: vec![],
        alerts: vec![],
        cameras: vec![
            Camera {
                status: CameraStatus::Online,
            },
            Camera {
                status: CameraStatus::Online,
            },
        ],
        evacuation_routes: vec![],
    }
}

/// A saturated zone: 30 days at 97% utilization plus 7 of 10 occupancy
/// events above 80% of its capacity of 100.
pub fn saturated_zone(zone_id: &str) -> ZoneSnapshot {
    let mut snapshot = zone_with_utilization(zone_id, 0.97);
    let base = Utc.with_ymd_and_hms(2026, 7, 29, 9, 0, 0).unwrap();
    snapshot.occupancy_events = (0..10)
        .map(|i| OccupancyEvent {
            kind: if i % 2 == 0 {
                OccupancyEventKind::Entry
            } else {
                OccupancyEventKind::Exit
            },
            occupancy_count: if i < 7 { 92 } else { 40 },
            timestamp: base + Duration::minutes(i),
        })
        .collect();
    snapshot
}

/// Repository seeded with the given zones under one venue.
pub fn seeded_repository(venue: &str, zones: Vec<ZoneSnapshot>) -> LocalRepository {
    let repo = LocalRepository::new();
    repo.seed_venue(VenueId::new(venue), zones);
    repo
}
