//! # VOI Rust Backend
//!
//! Zone optimization recommendation engine for venue telemetry.
//!
//! This crate analyzes per-zone telemetry snapshots (utilization analytics,
//! occupancy events, queue records, safety signals, camera inventory) and
//! produces ranked optimization recommendations with ROI estimates,
//! zone scores, and implementation plans. Recommendations can then be acted
//! on through an execution layer that writes zone configuration updates and
//! records the lifecycle of each action. The backend exposes a REST API via
//! Axum.
//!
//! ## Features
//!
//! - **Category Analyzers**: Capacity, flow, safety, layout, technology and
//!   revenue heuristics over zone snapshots
//! - **Ranking**: Deterministic priority-then-impact ordering
//! - **ROI & Planning**: Portfolio economics and phased implementation plans
//! - **Action Execution**: Idempotent zone configuration updates and a
//!   recommendation lifecycle log
//! - **HTTP API**: RESTful endpoints for venue dashboards
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: Identifier newtypes and DTO re-exports for API responses
//! - [`models`]: Zone telemetry and configuration domain types
//! - [`db`]: Repository pattern and persistence layer
//! - [`services`]: Analyzers, ranking, ROI, planning, and action execution
//! - [`http`]: Axum-based HTTP server and request handlers
//! - [`routes`]: Route-specific data types
//!

// Allow large error types - RepositoryError contains rich context for debugging
#![allow(clippy::result_large_err)]

pub mod api;

pub mod db;
pub mod models;

pub mod routes;

pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
