//! Replacement policy selection and victim ordering.
//!
//! Currently implements:
//! - [`Policy::Fifo`] - evict the page resident the longest
//! - [`Policy::Lru`] - evict the page unused the longest
//! - [`Policy::Lfu`] - evict the page referenced the fewest times,
//!   ties broken by earliest arrival

use std::fmt;
use std::str::FromStr;

use crate::common::Error;
use crate::sim::frame_table::PageEntry;

/// The victim-selection rule applied when no free frame remains.
///
/// Parsed case-insensitively from the strings `FIFO`, `LRU`, and `LFU`:
/// ```
/// use pagesim::Policy;
///
/// assert_eq!("lru".parse::<Policy>().unwrap(), Policy::Lru);
/// assert!("clock".parse::<Policy>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Policy {
    /// First-In-First-Out: order by load time only. Hits never reorder.
    Fifo,
    /// Least-Recently-Used: order by last access time.
    Lru,
    /// Least-Frequently-Used: order by reference count, LRU-style
    /// arrival tie-break.
    Lfu,
}

/// Totally ordered eviction key. The minimum key across resident pages
/// identifies the victim.
///
/// Every policy shares the same shape: a policy-specific primary
/// component, then arrival time, then the frame index. Arrival and
/// frame index make the order total even when a caller hands several
/// accesses the same logical timestamp, so victim choice is a pure
/// function of table state rather than of scan order.
pub(crate) type VictimKey = (u64, u64, usize);

impl Policy {
    /// Compute the eviction key for one resident page.
    pub(crate) fn victim_key(self, entry: &PageEntry) -> VictimKey {
        let primary = match self {
            Policy::Fifo => entry.arrival(),
            Policy::Lru => entry.last_access(),
            Policy::Lfu => entry.references(),
        };
        (primary, entry.arrival(), entry.frame().0)
    }

    /// Canonical uppercase name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Policy::Fifo => "FIFO",
            Policy::Lru => "LRU",
            Policy::Lfu => "LFU",
        }
    }

    /// All supported policies, in display order.
    pub const ALL: [Policy; 3] = [Policy::Fifo, Policy::Lru, Policy::Lfu];
}

impl FromStr for Policy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("FIFO") {
            Ok(Policy::Fifo)
        } else if s.eq_ignore_ascii_case("LRU") {
            Ok(Policy::Lru)
        } else if s.eq_ignore_ascii_case("LFU") {
            Ok(Policy::Lfu)
        } else {
            Err(Error::UnknownPolicy(s.to_string()))
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
