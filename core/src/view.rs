//! Shared, read-only view over `N` elements.

use core::{
    borrow::Borrow,
    fmt,
    ops::{Deref, Index},
    slice::{self, SliceIndex},
};

use crate::{error::LengthMismatch, iter::RevIter, sequence::FixedSequence};

/// A non-owning, read-only view of exactly `N` contiguous elements.
///
/// The view is a single pointer; `N` is part of the type. Copying a view
/// copies the binding, never the elements. Equality, ordering and hashing are
/// value-wise and agree with `[T; N]`.
///
/// `N` must be greater than zero. Naming `FixedView<T, 0>` is allowed, but
/// constructing one fails to compile.
///
/// ```
/// use fixview_core::FixedView;
///
/// let backing = [5, 2, 9];
/// let view = FixedView::new(&backing);
/// let copy = view;
///
/// assert_eq!(view.front(), &5);
/// assert_eq!(copy.back(), &9);
/// assert_eq!(view, [5, 2, 9]);
/// ```
pub struct FixedView<'a, T, const N: usize> {
    array: &'a [T; N],
}

static_assertions::assert_eq_size!(FixedView<'static, u8, 4>, usize);
static_assertions::assert_eq_size!(FixedView<'static, u128, 64>, usize);

impl<'a, T, const N: usize> FixedView<'a, T, N> {
    const NON_EMPTY: () = assert!(N > 0, "a FixedView must cover at least one element");

    /// Binds a view to an existing array.
    ///
    /// A view of zero elements is rejected at compile time:
    ///
    /// ```compile_fail
    /// use fixview_core::FixedView;
    ///
    /// let empty: [u8; 0] = [];
    /// let _view = FixedView::new(&empty);
    /// ```
    #[inline]
    pub const fn new(array: &'a [T; N]) -> Self {
        let () = Self::NON_EMPTY;
        FixedView { array }
    }

    /// Binds a view to `N` elements starting at `ptr`.
    ///
    /// The length is not, and cannot be, checked against the allocation.
    ///
    /// # Safety
    ///
    /// For the whole of `'a`, `ptr` must be non-null, aligned for `T`, and
    /// point to `N` contiguous initialized values of `T` that are not
    /// mutated except through interior mutability.
    #[inline]
    pub unsafe fn from_ptr(ptr: *const T) -> Self {
        let () = Self::NON_EMPTY;
        debug_assert!(!ptr.is_null());
        debug_assert!(ptr.is_aligned());
        // SAFETY: the caller guarantees `ptr` covers `N` live elements for `'a`,
        // and `[T; N]` has the layout of `N` consecutive `T`s.
        let array = unsafe { &*ptr.cast::<[T; N]>() };
        FixedView { array }
    }

    /// The viewed elements, borrowed for the full lifetime of the view.
    #[inline]
    pub const fn as_array(&self) -> &'a [T; N] {
        self.array
    }

    #[inline]
    pub const fn as_slice(&self) -> &'a [T] {
        self.array.as_slice()
    }

    /// Consumes the view, keeping the borrow of the storage.
    #[inline]
    pub const fn into_array_ref(self) -> &'a [T; N] {
        self.array
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

    /// The element at index `0`.
    #[inline]
    pub const fn front(&self) -> &'a T {
        &self.array[0]
    }

    /// The element at index `N - 1`.
    #[inline]
    pub const fn back(&self) -> &'a T {
        &self.array[N - 1]
    }

    /// The element at `pos`, without bounds checking.
    ///
    /// # Safety
    ///
    /// `pos` must be less than `N`.
    #[inline]
    pub unsafe fn get_unchecked(&self, pos: usize) -> &'a T {
        debug_assert!(pos < N);
        // SAFETY: the caller guarantees `pos < N`.
        unsafe { self.array.get_unchecked(pos) }
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'a, T> {
        self.array.as_slice().iter()
    }

    #[inline]
    pub fn rev_iter(&self) -> RevIter<'a, T> {
        self.array.as_slice().iter().rev()
    }

    /// Clones the viewed elements into an owned array.
    #[inline]
    pub fn to_array(&self) -> [T; N]
    where
        T: Clone,
    {
        <[T; N]>::clone(self.array)
    }

    #[cfg(feature = "alloc")]
    pub fn to_vec(&self) -> alloc::vec::Vec<T>
    where
        T: Clone,
    {
        self.array.to_vec()
    }
}

impl<T, const N: usize> Clone for FixedView<'_, T, N> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T, const N: usize> Copy for FixedView<'_, T, N> {}

impl<T: fmt::Debug, const N: usize> fmt::Debug for FixedView<'_, T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.array.as_slice()).finish()
    }
}

impl<T, const N: usize> Deref for FixedView<'_, T, N> {
    type Target = [T; N];
    fn deref(&self) -> &Self::Target {
        self.array
    }
}

impl<T, const N: usize> AsRef<[T; N]> for FixedView<'_, T, N> {
    fn as_ref(&self) -> &[T; N] {
        self.array
    }
}

impl<T, const N: usize> AsRef<[T]> for FixedView<'_, T, N> {
    fn as_ref(&self) -> &[T] {
        self.array
    }
}

impl<T, const N: usize> Borrow<[T; N]> for FixedView<'_, T, N> {
    fn borrow(&self) -> &[T; N] {
        self.array
    }
}

impl<T, I, const N: usize> Index<I> for FixedView<'_, T, N>
where
    I: SliceIndex<[T]>,
{
    type Output = I::Output;
    fn index(&self, index: I) -> &Self::Output {
        Index::index(self.array.as_slice(), index)
    }
}

impl<'a, T, const N: usize> From<&'a [T; N]> for FixedView<'a, T, N> {
    fn from(array: &'a [T; N]) -> Self {
        FixedView::new(array)
    }
}

impl<'a, T, const N: usize> TryFrom<&'a [T]> for FixedView<'a, T, N> {
    type Error = LengthMismatch;

    fn try_from(slice: &'a [T]) -> Result<Self, Self::Error> {
        match <&[T; N]>::try_from(slice) {
            Ok(array) => Ok(FixedView::new(array)),
            Err(_) => Err(LengthMismatch {
                expected: N,
                actual: slice.len(),
            }),
        }
    }
}

impl<T, const N: usize> FixedSequence<N> for FixedView<'_, T, N> {
    type Item = T;

    #[inline]
    fn as_array(&self) -> &[T; N] {
        self.array
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_one_pointer_wide() {
        assert_eq!(size_of::<FixedView<'_, u64, 1024>>(), size_of::<usize>());
    }

    #[test]
    fn send_sync_follow_shared_references() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}

        assert_send::<FixedView<'static, i32, 2>>();
        assert_sync::<FixedView<'static, i32, 2>>();
        assert_send::<crate::FixedViewMut<'static, i32, 2>>();
        assert_sync::<crate::FixedViewMut<'static, i32, 2>>();
        static_assertions::assert_not_impl_any!(
            FixedView<'static, core::cell::Cell<u8>, 2>: Send, Sync
        );
    }

    #[test]
    fn binds_without_copying() {
        let backing = [5, 2, 9];
        let view = FixedView::new(&backing);
        assert_eq!(view.as_ptr(), backing.as_ptr());
        assert_eq!(view.len(), 3);
        assert!(!view.is_empty());
    }

    #[test]
    fn copy_shares_storage() {
        let backing = [1, 2];
        let a = FixedView::new(&backing);
        let b = a;
        assert!(a.same_storage(&b));
    }

    #[test]
    fn front_and_back() {
        let backing = [7];
        let view = FixedView::new(&backing);
        assert_eq!(view.front(), &7);
        assert_eq!(view.back(), &7);

        let backing = [1, 2, 3, 4];
        let view = FixedView::new(&backing);
        assert_eq!(view.front(), &1);
        assert_eq!(view.back(), &4);
    }

    #[test]
    fn from_ptr_of_decayed_array() {
        let backing = [10u16, 20, 30, 40];
        let ptr: *const u16 = backing.as_ptr();
        // SAFETY: `ptr` covers the four elements of `backing`, which outlives `view`.
        let view = unsafe { FixedView::<u16, 4>::from_ptr(ptr) };
        assert_eq!(view, backing);
        assert!(core::ptr::eq(view.as_ptr(), ptr));
    }

    #[test]
    fn unchecked_matches_checked() {
        let backing = [5, 2, 9];
        let view = FixedView::new(&backing);
        for pos in 0..3 {
            // SAFETY: pos < 3.
            let unchecked = unsafe { view.get_unchecked(pos) };
            assert!(core::ptr::eq(unchecked, view.at(pos).unwrap()));
            assert_eq!(unchecked, &view[pos]);
        }
    }

    #[test]
    fn index_by_range() {
        let backing = [1, 2, 3, 4, 5];
        let view = FixedView::new(&backing);
        assert_eq!(&view[1..3], &[2, 3]);
        assert_eq!(&view[..], &backing[..]);
    }

    #[test]
    fn get_accepts_positions_and_ranges() {
        let backing = [1, 2, 3, 4, 5];
        let view = FixedView::new(&backing);
        assert_eq!(view.get(1), Some(&2));
        assert_eq!(view.get(5), None);
        assert_eq!(view.get(1..3), Some(&[2, 3][..]));
        assert_eq!(view.get(4..9), None);
    }

    #[test]
    fn try_from_slice() {
        let backing = [1, 2, 3, 4];
        let view = FixedView::<_, 4>::try_from(&backing[..]).unwrap();
        assert_eq!(view, backing);

        let err = FixedView::<_, 3>::try_from(&backing[..]).unwrap_err();
        assert_eq!(
            err,
            LengthMismatch {
                expected: 3,
                actual: 4
            }
        );
    }

    #[test]
    fn debug_lists_elements() {
        let backing = [5, 2, 9];
        assert_eq!(format!("{:?}", FixedView::new(&backing)), "[5, 2, 9]");
    }

    #[test]
    fn outlives_the_view_not_the_storage() {
        let backing = [String::from("a"), String::from("b")];
        let front = {
            let view = FixedView::new(&backing);
            view.front()
        };
        assert_eq!(front, "a");
    }

    #[test]
    fn to_array_clones() {
        let backing = [String::from("x"), String::from("y")];
        let owned = FixedView::new(&backing).to_array();
        assert_eq!(owned, backing);
        assert_ne!(owned.as_ptr(), backing.as_ptr());
    }
}
