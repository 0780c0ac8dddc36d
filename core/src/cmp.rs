//! Value-wise comparison and hashing for views.
//!
//! Views compare by the elements they observe, in index order, exactly like
//! `[T; N]`. Two views over different storage holding equal elements are
//! equal. Whether two views observe the *same* storage is a separate question,
//! answered by [`FixedSequence::same_storage`](crate::FixedSequence::same_storage).

use core::{
    cmp::Ordering,
    hash::{Hash, Hasher},
};

use crate::{view::FixedView, view_mut::FixedViewMut};

macro_rules! impl_view_eq {
    ($lhs:ident, $rhs:ident) => {
        impl<A, B, const N: usize> PartialEq<$rhs<'_, B, N>> for $lhs<'_, A, N>
        where
            A: PartialEq<B>,
        {
            #[inline]
            fn eq(&self, other: &$rhs<'_, B, N>) -> bool {
                self.as_slice() == other.as_slice()
            }
        }
    };
}

impl_view_eq!(FixedView, FixedView);
impl_view_eq!(FixedView, FixedViewMut);
impl_view_eq!(FixedViewMut, FixedView);
impl_view_eq!(FixedViewMut, FixedViewMut);

macro_rules! impl_foreign_eq {
    ($view:ident) => {
        impl<A, B, const N: usize> PartialEq<[B; N]> for $view<'_, A, N>
        where
            A: PartialEq<B>,
        {
            #[inline]
            fn eq(&self, other: &[B; N]) -> bool {
                self.as_slice() == other.as_slice()
            }
        }

        impl<A, B, const N: usize> PartialEq<$view<'_, B, N>> for [A; N]
        where
            A: PartialEq<B>,
        {
            #[inline]
            fn eq(&self, other: &$view<'_, B, N>) -> bool {
                self.as_slice() == other.as_slice()
            }
        }

        impl<A, B, const N: usize> PartialEq<[B]> for $view<'_, A, N>
        where
            A: PartialEq<B>,
        {
            #[inline]
            fn eq(&self, other: &[B]) -> bool {
                self.as_slice() == other
            }
        }

        impl<A, B, const N: usize> PartialEq<&[B]> for $view<'_, A, N>
        where
            A: PartialEq<B>,
        {
            #[inline]
            fn eq(&self, other: &&[B]) -> bool {
                self.as_slice() == *other
            }
        }

        impl<T: Eq, const N: usize> Eq for $view<'_, T, N> {}

        impl<T: PartialOrd, const N: usize> PartialOrd<[T; N]> for $view<'_, T, N> {
            #[inline]
            fn partial_cmp(&self, other: &[T; N]) -> Option<Ordering> {
                self.as_slice().partial_cmp(other.as_slice())
            }
        }

        impl<T: Ord, const N: usize> Ord for $view<'_, T, N> {
            #[inline]
            fn cmp(&self, other: &Self) -> Ordering {
                self.as_slice().cmp(other.as_slice())
            }
        }

        impl<T: Hash, const N: usize> Hash for $view<'_, T, N> {
            fn hash<H: Hasher>(&self, state: &mut H) {
                // Same as `[T; N]`, so `Borrow<[T; N]>` lookups agree.
                self.as_slice().hash(state)
            }
        }
    };
}

impl_foreign_eq!(FixedView);
impl_foreign_eq!(FixedViewMut);

macro_rules! impl_view_ord {
    ($lhs:ident, $rhs:ident) => {
        impl<T: PartialOrd, const N: usize> PartialOrd<$rhs<'_, T, N>> for $lhs<'_, T, N> {
            #[inline]
            fn partial_cmp(&self, other: &$rhs<'_, T, N>) -> Option<Ordering> {
                self.as_slice().partial_cmp(other.as_slice())
            }
        }
    };
}

impl_view_ord!(FixedView, FixedView);
impl_view_ord!(FixedView, FixedViewMut);
impl_view_ord!(FixedViewMut, FixedView);
impl_view_ord!(FixedViewMut, FixedViewMut);
