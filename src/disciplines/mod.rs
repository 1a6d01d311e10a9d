//! Sequence generators, one per scheduling discipline.
//!
//! Each discipline turns a workload into the ordered list of positions the
//! head visits. Generators are pure: same workload and context, same
//! sequence.
//!
//! # Usage
//!
//! ```
//! use disk_schedule::disciplines::{self, SweepContext};
//! use disk_schedule::models::{Discipline, TrackRange, Workload};
//!
//! let ctx = SweepContext::over(TrackRange::new(199).unwrap());
//! let workload = Workload::new(50, vec![80, 10, 60]);
//!
//! let look = disciplines::generate(Discipline::Look, &workload, &ctx);
//! assert_eq!(look, vec![60, 80, 10]);
//! ```
//!
//! # References
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 11.2
//! - Denning (1967), "Effects of Scheduling on File Memory Operations"

mod context;
pub mod rules;

pub use context::{BoundaryPolicy, SweepContext, SweepDirection};

use crate::models::{Discipline, Workload};
use std::fmt::Debug;

/// A head-scheduling discipline that orders pending requests.
///
/// # Contract
/// `generate` receives a workload already validated against
/// `context.range`. It returns the visited positions in service order,
/// excluding the starting head position. An empty workload yields an
/// empty sequence.
pub trait SeekDiscipline: Send + Sync + Debug {
    /// Which discipline this generator implements.
    fn discipline(&self) -> Discipline;

    /// Produces the service sequence.
    fn generate(&self, workload: &Workload, context: &SweepContext) -> Vec<i64>;

    /// Discipline name (e.g., "SSTF").
    fn name(&self) -> &'static str {
        self.discipline().name()
    }
}

/// Returns the built-in generator for a discipline.
pub fn generator(discipline: Discipline) -> &'static dyn SeekDiscipline {
    match discipline {
        Discipline::Fcfs => &rules::Fcfs,
        Discipline::Sstf => &rules::Sstf,
        Discipline::Scan => &rules::Scan,
        Discipline::CScan => &rules::CScan,
        Discipline::Look => &rules::Look,
        Discipline::CLook => &rules::CLook,
    }
}

/// Runs the built-in generator for `discipline`.
pub fn generate(discipline: Discipline, workload: &Workload, context: &SweepContext) -> Vec<i64> {
    generator(discipline).generate(workload, context)
}
