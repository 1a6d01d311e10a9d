//! Disk scheduling value types.
//!
//! Provides the immutable inputs and the results of a scheduling run.
//! Every value is created fresh per call and discarded once consumed;
//! nothing here carries state between runs.
//!
//! # Type Overview
//!
//! | Type | Role |
//! |------|------|
//! | `TrackRange` | Closed interval `[0, max_track]` of valid tracks |
//! | `Workload` | Head position plus pending requests |
//! | `Discipline` | One of the six head-scheduling algorithms |
//! | `ServiceResult` | Service order and seek cost of one run |
//! | `EvaluationReport` | All six results plus the cheapest discipline |

mod discipline;
mod service;
mod track_range;
mod workload;

pub use discipline::Discipline;
pub use service::{EvaluationReport, ServiceResult};
pub use track_range::{TrackRange, DEFAULT_MAX_TRACK};
pub use workload::Workload;
