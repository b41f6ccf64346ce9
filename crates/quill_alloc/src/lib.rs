//! Allocator strategies and allocator-backed containers for Quill.
//!
//! Everything the scanner stores (token payloads, identifier names, the token
//! list itself) lives in memory handed out by an [`Allocator`] the caller
//! injects. Two strategies are provided:
//!
//! - [`HeapAllocator`]: forwards every request to the global heap.
//! - [`ArenaAllocator`]: bump allocation over one region sized up front;
//!   individual frees are validity checks only, [`Allocator::reset`] reclaims
//!   everything at once.
//!
//! # Layering
//!
//! ```text
//! Allocator (trait) ──► MemoryBlock<'a>
//!        │
//!        └──► GrowableBuffer<'a, T> ──► Text<'a>
//!                     │
//!                     └──► InlineBuffer<'a, T, N> (spills past N)
//! ```
//!
//! Blocks borrow the allocator that produced them, so an arena cannot be
//! reset or dropped while anything still points into it.
//!
//! # Failure model
//!
//! [`Allocator::try_allocate`] reports exhaustion as an [`AllocError`].
//! [`Allocator::allocate`] treats the same condition as fatal and panics:
//! arenas are sized once by the caller, and running out is a configuration
//! defect rather than something to retry.

mod arena;
mod block;
mod buffer;
mod error;
mod heap;
mod inline;
mod text;
pub mod units;

pub use arena::ArenaAllocator;
pub use block::{MemoryBlock, BLOCK_ALIGN};
pub use buffer::GrowableBuffer;
pub use error::AllocError;
pub use heap::HeapAllocator;
pub use inline::InlineBuffer;
pub use text::{concat, file_extension, split, split_lines, Text};

/// Memory source for blocks, buffers and text.
///
/// Implementations are single-threaded: they use interior mutability for
/// bookkeeping and are not `Sync`. Each thread that scans owns its own
/// allocator.
pub trait Allocator {
    /// Allocate `size` zero-filled bytes aligned to [`BLOCK_ALIGN`].
    ///
    /// A request for zero bytes succeeds with an empty block. Containers
    /// treat a block shorter than `size` as a fatal [`AllocError::ShortBlock`].
    fn try_allocate(&self, size: usize) -> Result<MemoryBlock<'_>, AllocError>;

    /// Allocate `size` zero-filled bytes, treating failure as fatal.
    ///
    /// # Panics
    ///
    /// Panics when [`try_allocate`](Self::try_allocate) fails.
    #[track_caller]
    fn allocate(&self, size: usize) -> MemoryBlock<'_> {
        match self.try_allocate(size) {
            Ok(block) => block,
            Err(err) => allocation_failure(&err),
        }
    }

    /// Release `block` (or, for an arena, check that it came from here).
    ///
    /// Returns `true` when the block was issued by this allocator. The block
    /// is emptied on success and left untouched otherwise.
    fn free(&self, block: &mut MemoryBlock<'_>) -> bool;

    /// Reclaim every block at once. A no-op for allocators that free
    /// individually.
    fn reset(&mut self);
}

#[cold]
#[track_caller]
pub(crate) fn allocation_failure(err: &AllocError) -> ! {
    panic!("fatal allocation failure: {err}")
}

#[cfg(test)]
mod tests;
