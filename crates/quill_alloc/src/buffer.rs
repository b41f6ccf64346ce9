//! Allocator-backed growable array.
//!
//! [`GrowableBuffer`] owns exactly one [`MemoryBlock`] holding
//! `capacity * size_of::<T>()` bytes and interprets its first `count`
//! elements as initialised values of `T`.
//!
//! # Growth
//!
//! When a push finds `count == capacity`, capacity becomes
//! `max(8, 2 * capacity)`: a new block is allocated from the same allocator,
//! the live elements are moved over, and the old block is freed. This keeps
//! N pushes at O(N) total work. Capacity never shrinks implicitly.

use std::fmt;
use std::marker::PhantomData;
use std::mem;
use std::ops::{Deref, DerefMut, Index, IndexMut};

use crate::block::{MemoryBlock, BLOCK_ALIGN};
use crate::{allocation_failure, AllocError, Allocator};

/// Smallest non-zero capacity a buffer grows to.
const MIN_CAPACITY: usize = 8;

/// Growable, allocator-backed sequence of `T`.
///
/// # Invariant
///
/// - `block.len()` is a multiple of `size_of::<T>()`; capacity is the
///   quotient.
/// - `count <= capacity`, and elements `0..count` are initialised.
pub struct GrowableBuffer<'a, T> {
    allocator: &'a dyn Allocator,
    block: MemoryBlock<'a>,
    count: usize,
    _marker: PhantomData<T>,
}

impl<'a, T> GrowableBuffer<'a, T> {
    /// Compile-time guard: element types must have a size and fit the block
    /// alignment.
    const ELEMENT_FITS: () = assert!(
        mem::size_of::<T>() != 0 && mem::align_of::<T>() <= BLOCK_ALIGN,
        "GrowableBuffer elements must be sized and aligned to at most BLOCK_ALIGN"
    );

    /// Create an empty buffer; no memory is requested until the first push.
    pub fn new(allocator: &'a dyn Allocator) -> Self {
        let () = Self::ELEMENT_FITS;
        Self {
            allocator,
            block: MemoryBlock::empty(),
            count: 0,
            _marker: PhantomData,
        }
    }

    /// Create an empty buffer with room for at least `capacity` elements.
    pub fn with_capacity(allocator: &'a dyn Allocator, capacity: usize) -> Self {
        let mut buffer = Self::new(allocator);
        buffer.reserve(capacity);
        buffer
    }

    /// The allocator this buffer draws from.
    pub fn allocator(&self) -> &'a dyn Allocator {
        self.allocator
    }

    /// Number of initialised elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    /// Returns `true` if the buffer holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Number of elements the current block can hold.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.block.len() / mem::size_of::<T>()
    }

    /// Append one element, growing to `max(8, 2 * capacity)` when full.
    #[allow(unsafe_code, reason = "writes into the uninitialised tail of the block")]
    pub fn push(&mut self, value: T) {
        if self.count == self.capacity() {
            let grown = self
                .capacity()
                .checked_mul(2)
                .map_or(usize::MAX, |doubled| doubled.max(MIN_CAPACITY));
            self.grow_to(grown);
        }
        // SAFETY: `grow_to` only installs blocks at least as long as it asked
        // for, so `count < capacity` after the growth above. The slot is
        // inside the block and suitably aligned (block alignment >= align of
        // T). It holds no live value, so nothing is overwritten.
        unsafe { self.element_ptr().add(self.count).write(value) };
        self.count += 1;
    }

    /// Remove and return the last element.
    #[allow(unsafe_code, reason = "moves the last element out of the block")]
    pub fn pop(&mut self) -> Option<T> {
        if self.count == 0 {
            return None;
        }
        self.count -= 1;
        // SAFETY: the slot at the old `count - 1` was initialised and is now
        // outside `0..count`, so it is read exactly once.
        Some(unsafe { self.element_ptr().add(self.count).read() })
    }

    /// Grow capacity to at least `capacity` elements; `len` is unchanged.
    pub fn reserve(&mut self, capacity: usize) {
        if self.capacity() < capacity {
            self.grow_to(capacity);
        }
    }

    /// Set the length to `len`, reserving first. New slots are filled by
    /// calling `fill`; surplus elements are dropped.
    pub fn resize_with(&mut self, len: usize, mut fill: impl FnMut() -> T) {
        if len <= self.count {
            self.truncate(len);
            return;
        }
        self.reserve(len);
        while self.count < len {
            self.push(fill());
        }
    }

    /// Drop every element past `len`.
    #[allow(unsafe_code, reason = "drops the tail elements in place")]
    pub fn truncate(&mut self, len: usize) {
        if len >= self.count {
            return;
        }
        let tail_len = self.count - len;
        // Shrink first so a panicking destructor cannot cause a double drop.
        self.count = len;
        // SAFETY: elements `len..len + tail_len` were initialised and are no
        // longer reachable through `count`.
        unsafe {
            let tail = std::ptr::slice_from_raw_parts_mut(self.element_ptr().add(len), tail_len);
            std::ptr::drop_in_place(tail);
        }
    }

    /// Drop every element; capacity is kept.
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Move the contents out, leaving `self` empty (no block, no elements).
    pub fn take(&mut self) -> Self {
        Self {
            allocator: self.allocator,
            block: mem::take(&mut self.block),
            count: mem::take(&mut self.count),
            _marker: PhantomData,
        }
    }

    /// The initialised elements.
    #[allow(unsafe_code, reason = "reinterprets the block prefix as `[T]`")]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: the block pointer is non-null and aligned for `T` (even when
        // empty), and elements `0..count` are initialised.
        unsafe { std::slice::from_raw_parts(self.block.as_ptr().cast::<T>(), self.count) }
    }

    /// The initialised elements, mutably.
    #[allow(unsafe_code, reason = "reinterprets the block prefix as `[T]`")]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: as in `as_slice`; `&mut self` guarantees exclusive access.
        unsafe { std::slice::from_raw_parts_mut(self.element_ptr(), self.count) }
    }

    fn element_ptr(&mut self) -> *mut T {
        self.block.as_mut_ptr().cast::<T>()
    }

    /// Move the live elements into a fresh block of `capacity` elements and
    /// free the old one.
    #[allow(unsafe_code, reason = "bitwise move of live elements between blocks")]
    fn grow_to(&mut self, capacity: usize) {
        let Some(bytes) = capacity.checked_mul(mem::size_of::<T>()) else {
            allocation_failure(&AllocError::CapacityOverflow)
        };
        let allocator = self.allocator;
        let mut grown = allocator.allocate(bytes);
        if grown.len() < bytes {
            let returned = grown.len();
            allocator.free(&mut grown);
            allocation_failure(&AllocError::ShortBlock {
                requested: bytes,
                returned,
            })
        }
        // SAFETY: both blocks are valid for `count` elements (old capacity >=
        // count, and the new block holds at least `capacity > count`
        // elements, checked just above) and distinct live blocks never
        // overlap. The copy is a move: the old block is released without
        // dropping its contents.
        unsafe {
            std::ptr::copy_nonoverlapping(
                self.block.as_ptr().cast::<T>(),
                grown.as_mut_ptr().cast::<T>(),
                self.count,
            );
        }
        let old_capacity = self.capacity();
        let mut old = mem::replace(&mut self.block, grown);
        if !old.is_empty() {
            allocator.free(&mut old);
        }
        tracing::trace!(old_capacity, new_capacity = capacity, "buffer grew");
    }
}

impl<'a, T: Default> GrowableBuffer<'a, T> {
    /// Set the length to `len`, reserving first. New slots hold
    /// `T::default()`.
    pub fn resize(&mut self, len: usize) {
        self.resize_with(len, T::default);
    }
}

impl<'a, T: Clone> GrowableBuffer<'a, T> {
    /// Append clones of every element of `items`.
    pub fn extend_from_slice(&mut self, items: &[T]) {
        self.reserve(self.count + items.len());
        for item in items {
            self.push(item.clone());
        }
    }
}

impl<T> Drop for GrowableBuffer<'_, T> {
    fn drop(&mut self) {
        self.clear();
        if !self.block.is_empty() {
            let allocator = self.allocator;
            allocator.free(&mut self.block);
        }
    }
}

impl<'a, T: Clone> Clone for GrowableBuffer<'a, T> {
    /// Deep copy through the same allocator, preserving capacity.
    fn clone(&self) -> Self {
        let mut copy = Self::with_capacity(self.allocator, self.capacity());
        for item in self.as_slice() {
            copy.push(item.clone());
        }
        copy
    }
}

impl<T> Deref for GrowableBuffer<'_, T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> DerefMut for GrowableBuffer<'_, T> {
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

#[cold]
#[track_caller]
fn index_out_of_bounds(index: usize, len: usize) -> ! {
    panic!("index {index} out of bounds for buffer of length {len}")
}

impl<T> Index<usize> for GrowableBuffer<'_, T> {
    type Output = T;

    #[track_caller]
    fn index(&self, index: usize) -> &T {
        let len = self.count;
        match self.as_slice().get(index) {
            Some(item) => item,
            None => index_out_of_bounds(index, len),
        }
    }
}

impl<T> IndexMut<usize> for GrowableBuffer<'_, T> {
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut T {
        let len = self.count;
        match self.as_mut_slice().get_mut(index) {
            Some(item) => item,
            None => index_out_of_bounds(index, len),
        }
    }
}

impl<'b, T> IntoIterator for &'b GrowableBuffer<'_, T> {
    type Item = &'b T;
    type IntoIter = std::slice::Iter<'b, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for GrowableBuffer<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<T: PartialEq> PartialEq for GrowableBuffer<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for GrowableBuffer<'_, T> {}

impl<T: PartialEq> PartialEq<[T]> for GrowableBuffer<'_, T> {
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}
