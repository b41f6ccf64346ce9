//! Allocator that forwards every request to the global heap.

use std::alloc::{self, Layout};
use std::ptr::NonNull;

use crate::block::{MemoryBlock, Origin, BLOCK_ALIGN};
use crate::{AllocError, Allocator};

/// Delegates to the process heap (`std::alloc`).
///
/// Stateless and zero-sized: every `HeapAllocator` shares the same heap, so a
/// block allocated through one instance may be freed through another.
/// `reset` does nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeapAllocator;

impl HeapAllocator {
    /// Create a heap allocator.
    pub const fn new() -> Self {
        Self
    }
}

fn block_layout(size: usize) -> Result<Layout, AllocError> {
    Layout::from_size_align(size, BLOCK_ALIGN)
        .map_err(|_| AllocError::LayoutTooLarge { requested: size })
}

impl Allocator for HeapAllocator {
    #[allow(unsafe_code, reason = "global allocator calls require unsafe")]
    fn try_allocate(&self, size: usize) -> Result<MemoryBlock<'_>, AllocError> {
        if size == 0 {
            return Ok(MemoryBlock::empty());
        }
        let layout = block_layout(size)?;
        // SAFETY: `layout` has a non-zero size (checked above).
        let raw = unsafe { alloc::alloc_zeroed(layout) };
        let ptr = NonNull::new(raw).ok_or(AllocError::OutOfMemory { requested: size })?;
        tracing::trace!(size, "heap block allocated");
        Ok(MemoryBlock::from_raw(ptr, size, Origin::Heap))
    }

    #[allow(unsafe_code, reason = "global allocator calls require unsafe")]
    fn free(&self, block: &mut MemoryBlock<'_>) -> bool {
        match block.origin() {
            Origin::Empty => true,
            Origin::Arena => false,
            Origin::Heap => {
                let size = block.len();
                let Ok(layout) = block_layout(size) else {
                    return false;
                };
                // SAFETY: heap-origin blocks are only created by
                // `try_allocate` above, with exactly this layout. The block is
                // not `Clone` and is invalidated right after, so it cannot be
                // freed twice.
                unsafe { alloc::dealloc(block.as_mut_ptr(), layout) };
                block.invalidate();
                tracing::trace!(size, "heap block freed");
                true
            }
        }
    }

    fn reset(&mut self) {}
}
