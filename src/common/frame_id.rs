//! Frame identifier type.

use std::fmt;

/// Identifies a physical frame slot in the frame table.
///
/// Using `usize` because:
/// 1. Frame contents are stored in `Vec<Option<PageId>>`
/// 2. Direct indexing without casting: `frames[frame_id.0]`
/// 3. Matches Rust idioms for array/vector indexing
///
/// The frame index doubles as the final tie-break key during victim
/// selection, so it derives `Ord`.
///
/// # Example
/// ```
/// use pagesim::FrameId;
///
/// let frame_id = FrameId::new(5);
/// // Can use directly as index: frames[frame_id.0]
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameId(pub usize);

impl FrameId {
    /// Create a new FrameId.
    #[inline]
    pub fn new(id: usize) -> Self {
        FrameId(id)
    }
}

impl fmt::Display for FrameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Frame({})", self.0)
    }
}
