//! pagesim - a virtual-memory page replacement simulator.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                          pagesim                            │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────┐   │
//! │  │                CLI Shell (main.rs)                   │   │
//! │  │   argv / stdin parsing → trace + summary rendering   │   │
//! │  └─────────────────────────────────────────────────────┘   │
//! │                            ↓                                │
//! │  ┌─────────────────────────────────────────────────────┐   │
//! │  │         Replacement Engine (sim/)                    │   │
//! │  │  ┌─────────────────────────────────────────────┐    │   │
//! │  │  │   Eviction Policies: FIFO | LRU | LFU       │    │   │
//! │  │  │        (selected per simulation run)         │    │   │
//! │  │  └─────────────────────────────────────────────┘    │   │
//! │  │        FrameTable + PageEntry + SimStats             │   │
//! │  └─────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (PageId, FrameId, Error, config)
//! - [`sim`] - The frame table, replacement policies, and statistics
//!
//! # Quick Start
//! ```
//! use pagesim::{FrameTable, PageId, Policy};
//!
//! let mut table = FrameTable::new(3, Policy::Fifo).unwrap();
//! let refs: Vec<PageId> = [1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5]
//!     .iter()
//!     .map(|&p| PageId::new(p))
//!     .collect();
//!
//! let report = table.run(&refs).unwrap();
//! assert_eq!(report.fault_count, 9);
//! ```

// Core modules
pub mod common;
pub mod sim;

// Re-export commonly used items at crate root for convenience
pub use common::config::MAX_PAGE_ID;
pub use common::{Error, FrameId, PageId, Result};

pub use sim::{FrameTable, Outcome, PageEntry, Policy, RunReport, SimStats};
