//! Small-buffer-optimised sequence.
//!
//! [`InlineBuffer`] keeps up to `N` elements in an inline array and only asks
//! its allocator for memory once an `N + 1`-th element arrives. After that
//! it behaves like a [`GrowableBuffer`] and never moves back inline.

use std::fmt;
use std::ops::{Deref, DerefMut};

use crate::{Allocator, GrowableBuffer};

enum Storage<'a, T, const N: usize> {
    Inline { items: [T; N], len: usize },
    Spilled(GrowableBuffer<'a, T>),
}

/// Sequence stored inline up to `N` elements, spilling to the allocator
/// beyond that.
pub struct InlineBuffer<'a, T: Copy + Default, const N: usize> {
    allocator: &'a dyn Allocator,
    storage: Storage<'a, T, N>,
}

impl<'a, T: Copy + Default, const N: usize> InlineBuffer<'a, T, N> {
    /// Create an empty buffer. Nothing is allocated while `len() <= N`.
    pub fn new(allocator: &'a dyn Allocator) -> Self {
        Self {
            allocator,
            storage: Storage::Inline {
                items: [T::default(); N],
                len: 0,
            },
        }
    }

    /// Append one element, spilling to the allocator when the inline array
    /// is full.
    pub fn push(&mut self, value: T) {
        match &mut self.storage {
            Storage::Inline { items, len } if *len < N => {
                items[*len] = value;
                *len += 1;
            }
            Storage::Inline { items, len } => {
                let mut spilled = GrowableBuffer::with_capacity(self.allocator, (2 * N).max(8));
                spilled.extend_from_slice(&items[..*len]);
                spilled.push(value);
                tracing::trace!(inline_capacity = N, "inline buffer spilled");
                self.storage = Storage::Spilled(spilled);
            }
            Storage::Spilled(buffer) => buffer.push(value),
        }
    }

    /// Remove and return the last element.
    pub fn pop(&mut self) -> Option<T> {
        match &mut self.storage {
            Storage::Inline { items, len } => {
                if *len == 0 {
                    return None;
                }
                *len -= 1;
                Some(items[*len])
            }
            Storage::Spilled(buffer) => buffer.pop(),
        }
    }

    /// Remove every element. A spilled buffer keeps its heap capacity.
    pub fn clear(&mut self) {
        match &mut self.storage {
            Storage::Inline { len, .. } => *len = 0,
            Storage::Spilled(buffer) => buffer.clear(),
        }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// Returns `true` if there are no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Current capacity: `N` while inline, the block capacity once spilled.
    pub fn capacity(&self) -> usize {
        match &self.storage {
            Storage::Inline { .. } => N,
            Storage::Spilled(buffer) => buffer.capacity(),
        }
    }

    /// Returns `true` once the contents have moved to allocator memory.
    pub fn is_spilled(&self) -> bool {
        matches!(self.storage, Storage::Spilled(_))
    }

    /// The elements.
    pub fn as_slice(&self) -> &[T] {
        match &self.storage {
            Storage::Inline { items, len } => &items[..*len],
            Storage::Spilled(buffer) => buffer.as_slice(),
        }
    }

    /// The elements, mutably.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        match &mut self.storage {
            Storage::Inline { items, len } => &mut items[..*len],
            Storage::Spilled(buffer) => buffer.as_mut_slice(),
        }
    }
}

impl<T: Copy + Default, const N: usize> Deref for InlineBuffer<'_, T, N> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T: Copy + Default, const N: usize> DerefMut for InlineBuffer<'_, T, N> {
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T: Copy + Default + fmt::Debug, const N: usize> fmt::Debug for InlineBuffer<'_, T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}
