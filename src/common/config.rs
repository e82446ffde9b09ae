//! Configuration constants for pagesim.

use crate::common::PageId;

/// Largest page number addressable by default.
///
/// One below the `PageId::INVALID` sentinel, so every non-sentinel
/// `u32` is a valid page by default. A run that wants a narrower
/// address space configures its own limit on the frame table.
pub const MAX_PAGE_ID: PageId = PageId(u32::MAX - 1);

/// Default clock value before the first reference is processed.
///
/// The logical clock ticks to 1 before the first access, never 0, so a
/// live `arrival`/`last_access` value of 0 cannot occur and cannot be
/// confused with "not yet set".
pub const CLOCK_START: u64 = 0;
