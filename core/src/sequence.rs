//! The fixed-size sequence capability.
//!
//! [`FixedSequence`] and [`FixedSequenceMut`] describe "exactly `N` contiguous
//! elements" independently of who owns them. Plain arrays, [`FixedView`] and
//! [`FixedViewMut`] all implement them, so generic code can accept any of
//! them:
//!
//! ```
//! use fixview_core::prelude::*;
//!
//! fn total<S: FixedSequence<3, Item = u32>>(seq: &S) -> u32 {
//!     seq.iter().sum()
//! }
//!
//! let owned = [1, 2, 3];
//! assert_eq!(total(&owned), 6);
//! assert_eq!(total(&FixedView::new(&owned)), 6);
//! ```
//!
//! Every provided method is a thin forwarding call over [`as_array`] or
//! [`as_mut_array`], so implementors only supply those two.
//!
//! [`FixedView`]: crate::FixedView
//! [`FixedViewMut`]: crate::FixedViewMut
//! [`as_array`]: FixedSequence::as_array
//! [`as_mut_array`]: FixedSequenceMut::as_mut_array

use core::{iter::Rev, ptr, slice};

use crate::error::OutOfRange;

/// Read access to exactly `N` contiguous elements.
pub trait FixedSequence<const N: usize> {
    type Item;

    /// The elements as an array reference.
    fn as_array(&self) -> &[Self::Item; N];

    /// Number of elements. Always `N`.
    #[inline]
    fn size(&self) -> usize {
        N
    }

    /// Largest number of elements the sequence can hold. Always `N`.
    #[inline]
    fn max_size(&self) -> usize {
        N
    }

    /// `true` only for `N == 0`, which views never are.
    #[inline]
    fn is_empty(&self) -> bool {
        N == 0
    }

    /// Checked access to the element at `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRange`] carrying `pos` if `pos >= N`.
    #[inline]
    fn at(&self, pos: usize) -> Result<&Self::Item, OutOfRange> {
        match self.as_array().get(pos) {
            Some(item) => Ok(item),
            None => Err(OutOfRange::new(pos, N)),
        }
    }

    /// Iterates from index `0` to `N - 1`.
    #[inline]
    fn iter(&self) -> slice::Iter<'_, Self::Item> {
        self.as_array().as_slice().iter()
    }

    /// Iterates from index `N - 1` down to `0`.
    #[inline]
    fn rev_iter(&self) -> Rev<slice::Iter<'_, Self::Item>> {
        self.as_array().as_slice().iter().rev()
    }

    /// Address of the first element.
    #[inline]
    fn as_ptr(&self) -> *const Self::Item {
        self.as_array().as_slice().as_ptr()
    }

    /// Whether both sequences observe the same storage.
    ///
    /// This is identity, not equality: two distinct arrays holding equal
    /// values are not the same storage. Use `==` to compare values.
    #[inline]
    fn same_storage<S>(&self, other: &S) -> bool
    where
        S: FixedSequence<N, Item = Self::Item> + ?Sized,
    {
        ptr::eq(self.as_ptr(), other.as_ptr())
    }
}

/// Write access to exactly `N` contiguous elements.
///
/// The whole-sequence operations ([`fill`], [`assign_from`],
/// [`assign_array`] and [`swap_contents`]) write through to the storage.
/// They never change which storage a view observes.
///
/// [`fill`]: FixedSequenceMut::fill
/// [`assign_from`]: FixedSequenceMut::assign_from
/// [`assign_array`]: FixedSequenceMut::assign_array
/// [`swap_contents`]: FixedSequenceMut::swap_contents
pub trait FixedSequenceMut<const N: usize>: FixedSequence<N> {
    /// The elements as a mutable array reference.
    fn as_mut_array(&mut self) -> &mut [Self::Item; N];

    /// Checked mutable access to the element at `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRange`] carrying `pos` if `pos >= N`. Nothing is
    /// modified in that case.
    #[inline]
    fn at_mut(&mut self, pos: usize) -> Result<&mut Self::Item, OutOfRange> {
        match self.as_mut_array().get_mut(pos) {
            Some(item) => Ok(item),
            None => Err(OutOfRange::new(pos, N)),
        }
    }

    #[inline]
    fn iter_mut(&mut self) -> slice::IterMut<'_, Self::Item> {
        self.as_mut_array().as_mut_slice().iter_mut()
    }

    #[inline]
    fn rev_iter_mut(&mut self) -> Rev<slice::IterMut<'_, Self::Item>> {
        self.as_mut_array().as_mut_slice().iter_mut().rev()
    }

    #[inline]
    fn as_mut_ptr(&mut self) -> *mut Self::Item {
        self.as_mut_array().as_mut_slice().as_mut_ptr()
    }

    /// Overwrites every element with a clone of `value`.
    #[inline]
    fn fill(&mut self, value: Self::Item)
    where
        Self::Item: Clone,
    {
        self.as_mut_array().as_mut_slice().fill(value);
    }

    /// Clones every element of `source` into this sequence, index by index.
    ///
    /// Does nothing when both sides observe the same storage.
    fn assign_from<S>(&mut self, source: &S)
    where
        S: FixedSequence<N, Item = Self::Item> + ?Sized,
        Self::Item: Clone,
    {
        if self.same_storage(source) {
            return;
        }
        self.as_mut_array().clone_from_slice(source.as_array());
    }

    /// Moves every element of `source` into this sequence, dropping the
    /// previous elements.
    #[inline]
    fn assign_array(&mut self, source: [Self::Item; N]) {
        *self.as_mut_array() = source;
    }

    /// Exchanges the elements of the two sequences, index by index.
    ///
    /// Only the contents move: a view keeps observing the storage it was
    /// bound to. Does nothing when both sides observe the same storage.
    fn swap_contents<S>(&mut self, other: &mut S)
    where
        S: FixedSequenceMut<N, Item = Self::Item> + ?Sized,
    {
        if self.same_storage(&*other) {
            return;
        }
        self.as_mut_array().swap_with_slice(other.as_mut_array());
    }
}

/// Exchanges the contents of two fixed-size sequences.
///
/// Equivalent to `a.swap_contents(b)`.
#[inline]
pub fn swap<A, B, const N: usize>(a: &mut A, b: &mut B)
where
    A: FixedSequenceMut<N> + ?Sized,
    B: FixedSequenceMut<N, Item = A::Item> + ?Sized,
{
    a.swap_contents(b);
}

impl<T, const N: usize> FixedSequence<N> for [T; N] {
    type Item = T;

    #[inline]
    fn as_array(&self) -> &[T; N] {
        self
    }
}

impl<T, const N: usize> FixedSequenceMut<N> for [T; N] {
    #[inline]
    fn as_mut_array(&mut self) -> &mut [T; N] {
        self
    }
}

#[cfg(feature = "alloc")]
impl<T, const N: usize> FixedSequence<N> for alloc::boxed::Box<[T; N]> {
    type Item = T;

    #[inline]
    fn as_array(&self) -> &[T; N] {
        self
    }
}

#[cfg(feature = "alloc")]
impl<T, const N: usize> FixedSequenceMut<N> for alloc::boxed::Box<[T; N]> {
    #[inline]
    fn as_mut_array(&mut self) -> &mut [T; N] {
        self
    }
}
