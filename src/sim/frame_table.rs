//! Frame table - the replacement engine's owned state.
//!
//! The [`FrameTable`] provides:
//! - A fixed pool of frame slots, each holding at most one page
//! - Per-page residency metadata (arrival, last access, reference count)
//! - Policy-driven victim selection when no free slot remains

use std::collections::HashMap;

use crate::common::config::{CLOCK_START, MAX_PAGE_ID};
use crate::common::{Error, FrameId, PageId, Result};
use crate::sim::stats::{RunReport, SimStats};
use crate::sim::Policy;

/// Result of a single page access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The page was already resident in a frame.
    Hit,
    /// The page had to be loaded, possibly evicting a victim.
    Fault,
}

impl Outcome {
    /// The label printed in per-reference trace output.
    pub fn label(self) -> &'static str {
        match self {
            Outcome::Hit => "HIT",
            Outcome::Fault => "FAULT",
        }
    }
}

/// Residency metadata for one resident page.
///
/// An entry exists exactly while its page occupies a frame. Eviction
/// removes the entry outright, so there is no "evicted but stale
/// timestamps" state to misread: non-resident metadata simply does not
/// exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageEntry {
    frame: FrameId,
    arrival: u64,
    last_access: u64,
    references: u64,
}

impl PageEntry {
    /// Entry for a page freshly loaded into `frame` at logical time `clock`.
    fn loaded(frame: FrameId, clock: u64) -> Self {
        Self {
            frame,
            arrival: clock,
            last_access: clock,
            references: 1,
        }
    }

    /// Record a hit at logical time `clock`.
    ///
    /// Arrival time is deliberately untouched: load order is what FIFO
    /// keys on, and a hit is not a load.
    fn touch(&mut self, clock: u64) {
        self.last_access = clock;
        self.references += 1;
    }

    /// Slot this page occupies.
    #[inline]
    pub fn frame(&self) -> FrameId {
        self.frame
    }

    /// Logical time the page was loaded. Never changes on a hit.
    #[inline]
    pub fn arrival(&self) -> u64 {
        self.arrival
    }

    /// Logical time of the most recent access (hit or load).
    #[inline]
    pub fn last_access(&self) -> u64 {
        self.last_access
    }

    /// Accesses since the page was loaded (1 on load, +1 per hit).
    #[inline]
    pub fn references(&self) -> u64 {
        self.references
    }

    #[cfg(test)]
    pub(crate) fn loaded_for_test(
        frame: FrameId,
        arrival: u64,
        last_access: u64,
        references: u64,
    ) -> Self {
        Self {
            frame,
            arrival,
            last_access,
            references,
        }
    }
}

/// Simulated page table over a bounded pool of physical frames.
///
/// # Architecture
/// ```text
/// ┌───────────────────────────────────────────────────────────┐
/// │                       FrameTable                          │
/// │  ┌──────────────────┐  ┌───────────────────────────────┐  │
/// │  │ entries          │  │ frames: Vec<Option<PageId>>   │  │
/// │  │ PageId→PageEntry │─▶│  [Some(3)] [Some(7)] [None]   │  │
/// │  └──────────────────┘  └───────────────────────────────┘  │
/// │  ┌────────┐  ┌───────┐  ┌──────────┐                      │
/// │  │ policy │  │ clock │  │ SimStats │                      │
/// │  └────────┘  └───────┘  └──────────┘                      │
/// └───────────────────────────────────────────────────────────┘
/// ```
///
/// # Invariants
/// - A page is resident iff exactly one slot holds its number, and
///   that slot equals its entry's `frame` (no duplicate residency).
/// - Resident pages never exceed capacity.
/// - `arrival <= last_access` for every resident page.
///
/// # Ownership
/// The table is a plain owned value: one table per run, constructed by
/// the caller and mutated only through `access`/`run`. Comparing
/// policies over one reference string means one independently
/// constructed table per policy; tables never share state.
///
/// # Usage
/// ```
/// use pagesim::{FrameTable, PageId, Policy};
///
/// let mut table = FrameTable::new(3, Policy::Lru).unwrap();
/// let refs: Vec<PageId> = [1, 2, 3, 4, 1].iter().map(|&p| PageId::new(p)).collect();
/// let report = table.run(&refs).unwrap();
/// assert_eq!(report.fault_count, 5);
/// ```
#[derive(Debug)]
pub struct FrameTable {
    /// Slot contents: `Some(page)` if occupied, `None` if free.
    frames: Vec<Option<PageId>>,

    /// Metadata for resident pages only.
    entries: HashMap<PageId, PageEntry>,

    /// Victim-selection rule for this run.
    policy: Policy,

    /// Largest page number accepted by this run.
    page_limit: PageId,

    /// Logical clock, advanced once per reference by [`run`](Self::run).
    clock: u64,

    /// Hit/fault/eviction counters.
    stats: SimStats,
}

impl FrameTable {
    /// Create an empty frame table.
    ///
    /// Accepts any page number up to [`MAX_PAGE_ID`]; use
    /// [`with_page_limit`](Self::with_page_limit) to narrow the
    /// addressable range.
    ///
    /// # Errors
    /// `Error::InvalidCapacity` if `capacity` is 0.
    pub fn new(capacity: usize, policy: Policy) -> Result<Self> {
        Self::with_page_limit(capacity, policy, MAX_PAGE_ID)
    }

    /// Create an empty frame table that rejects pages above `page_limit`.
    ///
    /// # Errors
    /// `Error::InvalidCapacity` if `capacity` is 0.
    pub fn with_page_limit(capacity: usize, policy: Policy, page_limit: PageId) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::InvalidCapacity);
        }

        Ok(Self {
            frames: vec![None; capacity],
            entries: HashMap::new(),
            policy,
            page_limit,
            clock: CLOCK_START,
            stats: SimStats::default(),
        })
    }

    // ========================================================================
    // Public API: access and run
    // ========================================================================

    /// Access `page` at logical time `clock`.
    ///
    /// On a hit the page's `last_access` and reference count are
    /// updated. On a fault the page is loaded into the lowest free
    /// slot, or into the slot freed by evicting the policy's victim.
    ///
    /// The caller supplies the clock; [`run`](Self::run) drives this
    /// with a per-reference tick. Callers batching several accesses
    /// under one timestamp still get deterministic victims because the
    /// eviction order is total (see [`Policy`]).
    ///
    /// # Errors
    /// `Error::InvalidPage` if `page` is above the configured limit or
    /// is the invalid sentinel. The table is unchanged on error.
    pub fn access(&mut self, page: PageId, clock: u64) -> Result<Outcome> {
        self.check_page(page)?;

        self.stats.references += 1;

        if let Some(entry) = self.entries.get_mut(&page) {
            entry.touch(clock);
            self.stats.hits += 1;
            return Ok(Outcome::Hit);
        }

        self.stats.faults += 1;

        let frame = match self.free_frame() {
            Some(frame) => frame,
            None => {
                let victim = self
                    .select_victim()
                    .expect("full table with capacity >= 1 has a victim");
                self.evict(victim)
            }
        };

        self.frames[frame.0] = Some(page);
        self.entries.insert(page, PageEntry::loaded(frame, clock));

        Ok(Outcome::Fault)
    }

    /// Replay a reference sequence, ticking the logical clock before
    /// each access.
    ///
    /// Every reference is validated up front: a bad page anywhere in
    /// the input fails the whole run before any access is processed.
    /// An empty sequence is a no-op with `fault_count == 0`.
    ///
    /// The clock keeps counting across consecutive `run` calls on the
    /// same table, so feeding a second sequence continues the
    /// simulation rather than restarting it.
    ///
    /// # Errors
    /// `Error::InvalidPage` for the first out-of-range reference.
    pub fn run(&mut self, references: &[PageId]) -> Result<RunReport> {
        for &page in references {
            self.check_page(page)?;
        }

        let mut trace = Vec::with_capacity(references.len());
        for &page in references {
            self.clock += 1;
            let outcome = self.access(page, self.clock)?;
            trace.push(outcome);
        }

        Ok(RunReport::from_trace(trace))
    }

    // ========================================================================
    // Public API: inspection
    // ========================================================================

    /// The page the policy would evict next, or `None` while a free
    /// slot remains (a fault would fill the slot, not evict).
    ///
    /// Pure read: victim choice is a function of table state alone.
    pub fn victim(&self) -> Option<PageId> {
        if self.entries.len() < self.frames.len() {
            return None;
        }
        self.select_victim()
    }

    /// Slot contents, indexed by frame.
    #[inline]
    pub fn frames(&self) -> &[Option<PageId>] {
        &self.frames
    }

    /// Residency metadata for `page`, if resident.
    #[inline]
    pub fn entry(&self, page: PageId) -> Option<&PageEntry> {
        self.entries.get(&page)
    }

    /// Whether `page` currently occupies a frame.
    #[inline]
    pub fn is_resident(&self, page: PageId) -> bool {
        self.entries.contains_key(&page)
    }

    /// Number of frames in the pool.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.frames.len()
    }

    /// Number of occupied frames.
    #[inline]
    pub fn resident_count(&self) -> usize {
        self.entries.len()
    }

    /// Victim-selection rule for this table.
    #[inline]
    pub fn policy(&self) -> Policy {
        self.policy
    }

    /// Current logical clock value (0 before the first `run` access).
    #[inline]
    pub fn clock(&self) -> u64 {
        self.clock
    }

    /// Hit/fault counters accumulated so far.
    #[inline]
    pub fn stats(&self) -> SimStats {
        self.stats
    }

    // ========================================================================
    // Internal: victim selection and transitions
    // ========================================================================

    fn check_page(&self, page: PageId) -> Result<()> {
        if !page.is_valid() || page > self.page_limit {
            return Err(Error::InvalidPage(page));
        }
        Ok(())
    }

    /// Lowest-numbered free slot, if any.
    fn free_frame(&self) -> Option<FrameId> {
        self.frames
            .iter()
            .position(|slot| slot.is_none())
            .map(FrameId::new)
    }

    /// Resident page with the minimal eviction key under the policy.
    fn select_victim(&self) -> Option<PageId> {
        self.entries
            .iter()
            .min_by_key(|(_, entry)| self.policy.victim_key(entry))
            .map(|(&page, _)| page)
    }

    /// Remove `victim` from its slot and return the freed frame.
    fn evict(&mut self, victim: PageId) -> FrameId {
        let entry = self
            .entries
            .remove(&victim)
            .expect("victim is resident by construction");
        self.frames[entry.frame.0] = None;
        self.stats.evictions += 1;
        entry.frame
    }
}
