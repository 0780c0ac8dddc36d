//! Exclusive, read-write view over `N` elements.

use core::{
    borrow::{Borrow, BorrowMut},
    fmt,
    ops::{Deref, DerefMut, Index, IndexMut},
    slice::SliceIndex,
};

use crate::{
    error::LengthMismatch,
    sequence::{FixedSequence, FixedSequenceMut},
    view::FixedView,
};

/// A non-owning, read-write view of exactly `N` contiguous elements.
///
/// Writes through the view land directly in the caller's storage. The
/// whole-sequence operations of [`FixedSequenceMut`] (`fill`, `assign_from`,
/// `assign_array`, `swap_contents`) copy, move or exchange *elements*; the
/// view itself stays bound to the same storage for its whole life.
///
/// ```
/// use fixview_core::prelude::*;
///
/// let mut left = [0, 0, 0];
/// let mut right = [1, 1, 1];
/// {
///     let mut a = FixedViewMut::new(&mut left);
///     let mut b = FixedViewMut::new(&mut right);
///     a.swap_contents(&mut b);
/// }
/// assert_eq!(left, [1, 1, 1]);
/// assert_eq!(right, [0, 0, 0]);
/// ```
pub struct FixedViewMut<'a, T, const N: usize> {
    array: &'a mut [T; N],
}

static_assertions::assert_eq_size!(FixedViewMut<'static, u8, 4>, usize);
static_assertions::assert_not_impl_any!(FixedViewMut<'static, u8, 4>: Clone, Copy);

impl<'a, T, const N: usize> FixedViewMut<'a, T, N> {
    const NON_EMPTY: () = assert!(N > 0, "a FixedViewMut must cover at least one element");

    /// Binds a view to an existing array.
    ///
    /// ```compile_fail
    /// use fixview_core::FixedViewMut;
    ///
    /// let mut empty: [String; 0] = [];
    /// let _view = FixedViewMut::new(&mut empty);
    /// ```
    #[inline]
    pub const fn new(array: &'a mut [T; N]) -> Self {
        let () = Self::NON_EMPTY;
        FixedViewMut { array }
    }

    /// Binds a view to `N` elements starting at `ptr`.
    ///
    /// The length is not, and cannot be, checked against the allocation.
    ///
    /// # Safety
    ///
    /// For the whole of `'a`, `ptr` must be non-null, aligned for `T`, point
    /// to `N` contiguous initialized values of `T`, and those values must not
    /// be accessed through any other pointer or reference.
    #[inline]
    pub unsafe fn from_ptr(ptr: *mut T) -> Self {
        let () = Self::NON_EMPTY;
        debug_assert!(!ptr.is_null());
        debug_assert!(ptr.is_aligned());
        // SAFETY: the caller guarantees `ptr` uniquely covers `N` live elements
        // for `'a`, and `[T; N]` has the layout of `N` consecutive `T`s.
        let array = unsafe { &mut *ptr.cast::<[T; N]>() };
        FixedViewMut { array }
    }

    /// A shorter-lived view of the same storage.
    #[inline]
    pub fn reborrow(&mut self) -> FixedViewMut<'_, T, N> {
        FixedViewMut {
            array: &mut *self.array,
        }
    }

    /// A read-only view of the same storage.
    #[inline]
    pub fn as_view(&self) -> FixedView<'_, T, N> {
        FixedView::new(&*self.array)
    }

    /// Converts into a read-only view that keeps the full borrow.
    #[inline]
    pub fn into_view(self) -> FixedView<'a, T, N> {
        FixedView::new(self.array)
    }

    /// Consumes the view, keeping the borrow of the storage.
    #[inline]
    pub fn into_mut_array(self) -> &'a mut [T; N] {
        self.array
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.array.as_slice()
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.array.as_mut_slice()
    }

    /// Always `N`.
    #[inline]
    pub const fn len(&self) -> usize {
        N
    }

    /// Always `false`: a view covers at least one element.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        false
    }

    #[inline]
    pub fn front(&self) -> &T {
        &self.array[0]
    }

    #[inline]
    pub fn front_mut(&mut self) -> &mut T {
        &mut self.array[0]
    }

    #[inline]
    pub fn back(&self) -> &T {
        &self.array[N - 1]
    }

    #[inline]
    pub fn back_mut(&mut self) -> &mut T {
        &mut self.array[N - 1]
    }

    /// The element at `pos`, without bounds checking.
    ///
    /// # Safety
    ///
    /// `pos` must be less than `N`.
    #[inline]
    pub unsafe fn get_unchecked(&self, pos: usize) -> &T {
        debug_assert!(pos < N);
        // SAFETY: the caller guarantees `pos < N`.
        unsafe { self.array.get_unchecked(pos) }
    }

    /// The element at `pos`, mutably, without bounds checking.
    ///
    /// # Safety
    ///
    /// `pos` must be less than `N`.
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, pos: usize) -> &mut T {
        debug_assert!(pos < N);
        // SAFETY: the caller guarantees `pos < N`.
        unsafe { self.array.get_unchecked_mut(pos) }
    }

    /// Clones the viewed elements into an owned array.
    #[inline]
    pub fn to_array(&self) -> [T; N]
    where
        T: Clone,
    {
        <[T; N]>::clone(&*self.array)
    }

    #[cfg(feature = "alloc")]
    pub fn to_vec(&self) -> alloc::vec::Vec<T>
    where
        T: Clone,
    {
        self.array.to_vec()
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for FixedViewMut<'_, T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.array.as_slice()).finish()
    }
}

impl<T, const N: usize> Deref for FixedViewMut<'_, T, N> {
    type Target = [T; N];
    fn deref(&self) -> &Self::Target {
        &*self.array
    }
}

impl<T, const N: usize> DerefMut for FixedViewMut<'_, T, N> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut *self.array
    }
}

impl<T, const N: usize> AsRef<[T; N]> for FixedViewMut<'_, T, N> {
    fn as_ref(&self) -> &[T; N] {
        &*self.array
    }
}

impl<T, const N: usize> AsRef<[T]> for FixedViewMut<'_, T, N> {
    fn as_ref(&self) -> &[T] {
        &*self.array
    }
}

impl<T, const N: usize> AsMut<[T; N]> for FixedViewMut<'_, T, N> {
    fn as_mut(&mut self) -> &mut [T; N] {
        &mut *self.array
    }
}

impl<T, const N: usize> AsMut<[T]> for FixedViewMut<'_, T, N> {
    fn as_mut(&mut self) -> &mut [T] {
        &mut *self.array
    }
}

impl<T, const N: usize> Borrow<[T; N]> for FixedViewMut<'_, T, N> {
    fn borrow(&self) -> &[T; N] {
        &*self.array
    }
}

impl<T, const N: usize> BorrowMut<[T; N]> for FixedViewMut<'_, T, N> {
    fn borrow_mut(&mut self) -> &mut [T; N] {
        &mut *self.array
    }
}

impl<T, I, const N: usize> Index<I> for FixedViewMut<'_, T, N>
where
    I: SliceIndex<[T]>,
{
    type Output = I::Output;
    fn index(&self, index: I) -> &Self::Output {
        Index::index(self.array.as_slice(), index)
    }
}

impl<T, I, const N: usize> IndexMut<I> for FixedViewMut<'_, T, N>
where
    I: SliceIndex<[T]>,
{
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        IndexMut::index_mut(self.array.as_mut_slice(), index)
    }
}

impl<'a, T, const N: usize> From<&'a mut [T; N]> for FixedViewMut<'a, T, N> {
    fn from(array: &'a mut [T; N]) -> Self {
        FixedViewMut::new(array)
    }
}

impl<'a, T, const N: usize> From<FixedViewMut<'a, T, N>> for FixedView<'a, T, N> {
    fn from(view: FixedViewMut<'a, T, N>) -> Self {
        view.into_view()
    }
}

impl<'a, T, const N: usize> TryFrom<&'a mut [T]> for FixedViewMut<'a, T, N> {
    type Error = LengthMismatch;

    fn try_from(slice: &'a mut [T]) -> Result<Self, Self::Error> {
        let actual = slice.len();
        match <&mut [T; N]>::try_from(slice) {
            Ok(array) => Ok(FixedViewMut::new(array)),
            Err(_) => Err(LengthMismatch {
                expected: N,
                actual,
            }),
        }
    }
}

impl<T, const N: usize> FixedSequence<N> for FixedViewMut<'_, T, N> {
    type Item = T;

    #[inline]
    fn as_array(&self) -> &[T; N] {
        &*self.array
    }
}

impl<T, const N: usize> FixedSequenceMut<N> for FixedViewMut<'_, T, N> {
    #[inline]
    fn as_mut_array(&mut self) -> &mut [T; N] {
        &mut *self.array
    }
}
