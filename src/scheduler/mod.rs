//! Scheduling engine, seek cost, and seek metrics.
//!
//! Runs a discipline over a workload and prices the result, or evaluates
//! all six disciplines and selects the cheapest.
//!
//! # Algorithm
//!
//! 1. Validate the workload against the track range (all-or-nothing).
//! 2. Generate the service sequence for the requested discipline(s).
//! 3. Walk `[head] ++ sequence` summing absolute moves.
//! 4. For `evaluate_all`, keep the strictly cheapest discipline, scanning
//!    in enumeration order so the earliest wins ties.
//!
//! # KPI
//!
//! `SeekKpi` summarises a single result: total and average seek, longest
//! single move, and number of direction reversals.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 11.2
//! - Worthington et al. (1994), "Scheduling Algorithms for Modern Disk Drives"

mod config;
mod cost;
mod engine;
mod kpi;

pub use config::EngineConfig;
pub use cost::{average_seek, seek_cost};
pub use engine::{evaluate_all, run, select_best, SchedulingEngine};
pub use kpi::SeekKpi;
