//! Simulation statistics tracking.

use std::fmt;

use crate::sim::frame_table::Outcome;

/// Counters accumulated by a frame table over its lifetime.
///
/// Plain integers, no atomics: each run owns its table exclusively and
/// processes references one at a time (there is nothing concurrent to
/// synchronize with). Copy out a value whenever a point-in-time view
/// is needed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimStats {
    /// Total references processed (hits + faults).
    pub references: u64,

    /// References that found their page resident.
    pub hits: u64,

    /// References that had to load their page.
    pub faults: u64,

    /// Faults that displaced a resident page (faults minus free fills).
    pub evictions: u64,
}

impl SimStats {
    /// Fault rate as a percentage of references (0.0 for an empty run).
    pub fn fault_rate(&self) -> f64 {
        if self.references == 0 {
            0.0
        } else {
            self.faults as f64 / self.references as f64 * 100.0
        }
    }

    /// Hit rate as a percentage of references (0.0 for an empty run).
    pub fn hit_rate(&self) -> f64 {
        if self.references == 0 {
            0.0
        } else {
            self.hits as f64 / self.references as f64 * 100.0
        }
    }
}

impl fmt::Display for SimStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "refs={} hits={} faults={} fault_rate={:.2}%",
            self.references,
            self.hits,
            self.faults,
            self.fault_rate()
        )
    }
}

/// Everything a completed [`run`](crate::FrameTable::run) reports back:
/// the per-reference HIT/FAULT trace plus its tallies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// One outcome per input reference, in order.
    pub trace: Vec<Outcome>,

    /// Number of FAULT outcomes in `trace`.
    pub fault_count: u64,

    /// Number of HIT outcomes in `trace`.
    pub hit_count: u64,
}

impl RunReport {
    /// Build a report by tallying a trace.
    pub fn from_trace(trace: Vec<Outcome>) -> Self {
        let fault_count = trace
            .iter()
            .filter(|&&outcome| outcome == Outcome::Fault)
            .count() as u64;
        let hit_count = trace.len() as u64 - fault_count;

        Self {
            trace,
            fault_count,
            hit_count,
        }
    }
}
