//! The replacement engine.
//!
//! The engine is a single owned value, the [`FrameTable`], driven by
//! one operation: access page P at logical time T. The table tracks
//! which page each frame holds plus the metadata the configured
//! [`Policy`] needs to pick a victim when every frame is occupied.
//!
//! # Components
//! - [`FrameTable`] - slot contents, residency metadata, transitions
//! - [`Policy`] - FIFO / LRU / LFU victim ordering
//! - [`SimStats`] / [`RunReport`] - counters and per-run results

pub mod frame_table;
mod policy;
mod stats;

pub use frame_table::{FrameTable, Outcome, PageEntry};
pub use policy::Policy;
pub use stats::{RunReport, SimStats};
