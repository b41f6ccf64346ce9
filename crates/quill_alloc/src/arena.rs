//! Bump allocator over one region sized up front.
//!
//! ```text
//! region:  [ block A | pad | block B | pad | block C |      free       ]
//!           ^                                         ^                 ^
//!           0                                       offset          capacity
//! ```
//!
//! Every block starts at the next [`BLOCK_ALIGN`] boundary after `offset`,
//! and `offset` only ever moves forward until [`Allocator::reset`] rewinds it
//! to zero. [`Allocator::free`] reclaims nothing: it checks that the block
//! came from this arena and invalidates the handle.

use std::alloc::{self, Layout};
use std::cell::Cell;
use std::ptr::NonNull;

use crate::block::{range_is_inside, MemoryBlock, Origin, BLOCK_ALIGN};
use crate::{allocation_failure, AllocError, Allocator};

/// Arena (linear) allocator.
///
/// # Invariant
///
/// `offset <= capacity`, and `region` is valid for `capacity` bytes for the
/// arena's whole life.
#[derive(Debug)]
pub struct ArenaAllocator {
    region: NonNull<u8>,
    capacity: usize,
    offset: Cell<usize>,
}

/// Round `value` up to the next multiple of [`BLOCK_ALIGN`].
fn align_up(value: usize) -> Option<usize> {
    Some(value.checked_add(BLOCK_ALIGN - 1)? & !(BLOCK_ALIGN - 1))
}

impl ArenaAllocator {
    /// Create an arena owning `capacity` bytes.
    ///
    /// # Panics
    ///
    /// Panics if the region itself cannot be obtained from the heap.
    #[track_caller]
    pub fn new(capacity: usize) -> Self {
        match Self::try_new(capacity) {
            Ok(arena) => arena,
            Err(err) => allocation_failure(&err),
        }
    }

    /// Create an arena owning `capacity` bytes, reporting heap failure.
    #[allow(unsafe_code, reason = "global allocator calls require unsafe")]
    pub fn try_new(capacity: usize) -> Result<Self, AllocError> {
        let region = if capacity == 0 {
            MemoryBlock::empty().as_ptr().cast_mut()
        } else {
            let layout = Self::region_layout(capacity)?;
            // SAFETY: `layout` has a non-zero size.
            unsafe { alloc::alloc_zeroed(layout) }
        };
        let region =
            NonNull::new(region).ok_or(AllocError::OutOfMemory { requested: capacity })?;
        tracing::debug!(capacity, "arena created");
        Ok(Self {
            region,
            capacity,
            offset: Cell::new(0),
        })
    }

    fn region_layout(capacity: usize) -> Result<Layout, AllocError> {
        Layout::from_size_align(capacity, BLOCK_ALIGN)
            .map_err(|_| AllocError::LayoutTooLarge { requested: capacity })
    }

    /// Total size of the region in bytes.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Bytes consumed so far, including alignment padding.
    pub fn used(&self) -> usize {
        self.offset.get()
    }

    /// Bytes still available before the next alignment adjustment.
    pub fn remaining(&self) -> usize {
        self.capacity - self.offset.get()
    }

    /// Returns `true` if `block` lies fully inside this arena's region.
    pub fn contains(&self, block: &MemoryBlock<'_>) -> bool {
        block.origin() == Origin::Arena
            && !block.is_empty()
            && range_is_inside(
                block.address(),
                block.len(),
                self.region.as_ptr() as usize,
                self.capacity,
            )
    }
}

impl Allocator for ArenaAllocator {
    #[allow(unsafe_code, reason = "carving sub-blocks out of the raw region")]
    fn try_allocate(&self, size: usize) -> Result<MemoryBlock<'_>, AllocError> {
        if size == 0 {
            return Ok(MemoryBlock::empty());
        }
        let offset = self.offset.get();
        let exhausted = AllocError::Exhausted {
            requested: size,
            remaining: self.capacity - offset,
        };
        let start = align_up(offset).ok_or(exhausted)?;
        let end = start.checked_add(size).ok_or(exhausted)?;
        if end > self.capacity {
            return Err(exhausted);
        }

        // SAFETY: `start < end <= capacity`, so the pointer stays inside the
        // region. `start` is a multiple of BLOCK_ALIGN and the region itself
        // is BLOCK_ALIGN-aligned. `[start, end)` lies past every block issued
        // since the last reset, so it overlaps no live block.
        let ptr = unsafe {
            let ptr = self.region.as_ptr().add(start);
            // Blocks issued before a reset may have left data behind.
            std::ptr::write_bytes(ptr, 0, size);
            NonNull::new_unchecked(ptr)
        };
        self.offset.set(end);
        tracing::trace!(size, start, used = end, "arena block allocated");
        Ok(MemoryBlock::from_raw(ptr, size, Origin::Arena))
    }

    fn free(&self, block: &mut MemoryBlock<'_>) -> bool {
        if self.contains(block) {
            block.invalidate();
            true
        } else {
            false
        }
    }

    fn reset(&mut self) {
        tracing::trace!(used = self.offset.get(), "arena reset");
        self.offset.set(0);
    }
}

impl Drop for ArenaAllocator {
    #[allow(unsafe_code, reason = "global allocator calls require unsafe")]
    fn drop(&mut self) {
        if self.capacity == 0 {
            return;
        }
        if let Ok(layout) = Self::region_layout(self.capacity) {
            // SAFETY: the region was allocated in `try_new` with exactly this
            // layout, and every block borrowing it has ended (blocks borrow
            // the arena).
            unsafe { alloc::dealloc(self.region.as_ptr(), layout) };
        }
    }
}
