//! Scheduling discipline identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::SchedulingError;

/// A head-scheduling discipline.
///
/// The declaration order is the enumeration order used for tie-breaking
/// in [`evaluate_all`](crate::evaluate_all): on equal seek cost, the
/// discipline listed first wins. `Ord` follows the same order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Discipline {
    /// First Come First Serve.
    Fcfs,
    /// Shortest Seek Time First.
    Sstf,
    /// Elevator: sweep to the range end, then reverse.
    Scan,
    /// Circular SCAN: sweep to the range end, jump to the other end.
    CScan,
    /// SCAN without the trip to the range end.
    Look,
    /// Circular LOOK: wrap from the last request to the first.
    CLook,
}

impl Discipline {
    /// All disciplines in enumeration order.
    pub const ALL: [Discipline; 6] = [
        Discipline::Fcfs,
        Discipline::Sstf,
        Discipline::Scan,
        Discipline::CScan,
        Discipline::Look,
        Discipline::CLook,
    ];

    /// Short name (e.g., "SSTF", "C-SCAN").
    pub fn name(&self) -> &'static str {
        match self {
            Discipline::Fcfs => "FCFS",
            Discipline::Sstf => "SSTF",
            Discipline::Scan => "SCAN",
            Discipline::CScan => "C-SCAN",
            Discipline::Look => "LOOK",
            Discipline::CLook => "C-LOOK",
        }
    }

    /// Long-form name.
    pub fn description(&self) -> &'static str {
        match self {
            Discipline::Fcfs => "First Come First Serve",
            Discipline::Sstf => "Shortest Seek Time First",
            Discipline::Scan => "SCAN (Elevator)",
            Discipline::CScan => "Circular SCAN",
            Discipline::Look => "LOOK",
            Discipline::CLook => "Circular LOOK",
        }
    }

    /// Position in [`Discipline::ALL`].
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Whether this discipline sweeps in one direction and wraps around.
    pub fn is_circular(&self) -> bool {
        matches!(self, Discipline::CScan | Discipline::CLook)
    }
}

impl fmt::Display for Discipline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Discipline {
    type Err = SchedulingError;

    /// Parses a tag case-insensitively; hyphens and underscores are ignored,
    /// so `"c-scan"`, `"C_SCAN"` and `"cscan"` are all accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .map(|c| c.to_ascii_lowercase())
            .collect();

        match tag.as_str() {
            "fcfs" => Ok(Discipline::Fcfs),
            "sstf" => Ok(Discipline::Sstf),
            "scan" => Ok(Discipline::Scan),
            "cscan" => Ok(Discipline::CScan),
            "look" => Ok(Discipline::Look),
            "clook" => Ok(Discipline::CLook),
            _ => Err(SchedulingError::InvalidDiscipline(s.to_string())),
        }
    }
}
