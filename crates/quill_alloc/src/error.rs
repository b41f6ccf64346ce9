//! Allocation failure reasons.

use thiserror::Error;

/// Why an allocation request could not be served.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum AllocError {
    /// The arena does not have `requested` bytes (plus alignment padding) left.
    #[error("arena exhausted: requested {requested} bytes, {remaining} remaining")]
    Exhausted { requested: usize, remaining: usize },
    /// The global heap refused the request.
    #[error("out of memory: heap refused {requested} bytes")]
    OutOfMemory { requested: usize },
    /// The request cannot be described as a valid layout (size overflows
    /// `isize` once rounded up to the block alignment).
    #[error("allocation of {requested} bytes exceeds the maximum layout size")]
    LayoutTooLarge { requested: usize },
    /// An allocator handed back a block shorter than the size it was asked
    /// for.
    #[error("allocator returned {returned} bytes for a request of {requested}")]
    ShortBlock { requested: usize, returned: usize },
    /// An element count times the element size overflowed `usize`.
    #[error("capacity overflow")]
    CapacityOverflow,
}
