//! Raw memory blocks handed out by an [`Allocator`](crate::Allocator).
//!
//! A [`MemoryBlock`] is a view, not an owner: dropping one releases nothing.
//! Whoever asked for the block is responsible for passing it back to
//! [`Allocator::free`](crate::Allocator::free) (the containers in this crate
//! do that in `Drop`).
//!
//! Blocks are deliberately not `Clone`. Two handles to the same bytes would
//! allow two `&mut [u8]` views and a double free.

use std::marker::PhantomData;
use std::ptr::NonNull;

/// Alignment of every non-empty block, in bytes.
///
/// Large enough for every primitive type, so any buffer element with
/// `align_of::<T>() <= BLOCK_ALIGN` can be stored in any block.
pub const BLOCK_ALIGN: usize = 16;

/// Zero-sized marker with the block alignment, used to build a well-aligned
/// dangling pointer for empty blocks.
#[repr(C, align(16))]
struct MaxAlign;

const _: () = assert!(std::mem::align_of::<MaxAlign>() == BLOCK_ALIGN);

/// Which allocator family issued a block.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Origin {
    /// Not backed by any storage.
    Empty,
    /// Issued by [`HeapAllocator`](crate::HeapAllocator).
    Heap,
    /// Carved out of an [`ArenaAllocator`](crate::ArenaAllocator) region.
    Arena,
}

/// A `{ pointer, size }` view over zero-initialised storage.
///
/// The lifetime ties the block to the allocator that produced it, so an
/// arena cannot be reset or dropped while the block is still reachable.
///
/// # Invariant
///
/// `ptr` is aligned to [`BLOCK_ALIGN`] and valid for reads and writes of
/// `size` bytes for `'a`; no other live block overlaps it.
#[derive(Debug)]
pub struct MemoryBlock<'a> {
    ptr: NonNull<u8>,
    size: usize,
    origin: Origin,
    _marker: PhantomData<&'a ()>,
}

impl<'a> MemoryBlock<'a> {
    /// A block with no storage.
    pub fn empty() -> Self {
        Self {
            ptr: NonNull::<MaxAlign>::dangling().cast(),
            size: 0,
            origin: Origin::Empty,
            _marker: PhantomData,
        }
    }

    /// Wrap storage produced by an allocator in this crate.
    ///
    /// # Contract
    ///
    /// `ptr` must satisfy the type invariant for `size` bytes.
    pub(crate) fn from_raw(ptr: NonNull<u8>, size: usize, origin: Origin) -> Self {
        debug_assert!(
            ptr.as_ptr() as usize % BLOCK_ALIGN == 0,
            "block pointer must be {BLOCK_ALIGN}-byte aligned"
        );
        Self {
            ptr,
            size,
            origin,
            _marker: PhantomData,
        }
    }

    /// Number of bytes in the block.
    #[inline]
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns `true` if the block has no storage.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Start of the block.
    #[inline]
    pub fn as_ptr(&self) -> *const u8 {
        self.ptr.as_ptr()
    }

    /// Start of the block, for writing.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut u8 {
        self.ptr.as_ptr()
    }

    /// The block's bytes.
    #[allow(
        unsafe_code,
        reason = "block pointer is valid for `size` bytes per the type invariant"
    )]
    pub fn as_bytes(&self) -> &[u8] {
        // SAFETY: `ptr` is non-null, aligned, and valid for `size` bytes for
        // `'a`. Storage is zero-initialised on allocation, so every byte is
        // initialised. `&self` excludes concurrent `&mut` access.
        unsafe { std::slice::from_raw_parts(self.ptr.as_ptr(), self.size) }
    }

    /// The block's bytes, mutably.
    #[allow(
        unsafe_code,
        reason = "block pointer is valid for `size` bytes per the type invariant"
    )]
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        // SAFETY: as in `as_bytes`; `&mut self` and the no-overlap invariant
        // make this the only view of these bytes.
        unsafe { std::slice::from_raw_parts_mut(self.ptr.as_ptr(), self.size) }
    }

    /// Overwrite every byte with zero.
    pub fn zero(&mut self) {
        self.as_bytes_mut().fill(0);
    }

    /// Returns `true` if `self` lies entirely inside `outer`.
    ///
    /// An empty block is never inside anything.
    pub fn is_inside(&self, outer: &MemoryBlock<'_>) -> bool {
        !self.is_empty() && range_is_inside(self.address(), self.size, outer.address(), outer.size)
    }

    pub(crate) fn origin(&self) -> Origin {
        self.origin
    }

    pub(crate) fn address(&self) -> usize {
        self.ptr.as_ptr() as usize
    }

    /// Forget the storage; the block becomes empty.
    pub(crate) fn invalidate(&mut self) {
        *self = Self::empty();
    }
}

impl Default for MemoryBlock<'_> {
    fn default() -> Self {
        Self::empty()
    }
}

/// Returns `true` if `[start, start + len)` lies inside
/// `[outer_start, outer_start + outer_len)`.
///
/// The end bound is inclusive of the outer end, so a block that finishes
/// exactly at the end of its region still counts as inside.
pub(crate) fn range_is_inside(start: usize, len: usize, outer_start: usize, outer_len: usize) -> bool {
    let (Some(end), Some(outer_end)) = (start.checked_add(len), outer_start.checked_add(outer_len))
    else {
        return false;
    };
    start >= outer_start && end <= outer_end
}
