//! Iteration over views.
//!
//! Views iterate with the plain slice iterators, so every traversal is a
//! fresh, restartable pass over the storage. Forward order is `0..N`,
//! reverse order is `N-1` down to `0`.

use core::{iter::Rev, slice};

use crate::{view::FixedView, view_mut::FixedViewMut};

pub type Iter<'a, T> = slice::Iter<'a, T>;
pub type IterMut<'a, T> = slice::IterMut<'a, T>;
pub type RevIter<'a, T> = Rev<slice::Iter<'a, T>>;
pub type RevIterMut<'a, T> = Rev<slice::IterMut<'a, T>>;

impl<'a, T, const N: usize> IntoIterator for FixedView<'a, T, N> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_array_ref().as_slice().iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &FixedView<'a, T, N> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for FixedViewMut<'a, T, N> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_mut_array().as_mut_slice().iter_mut()
    }
}

impl<'b, T, const N: usize> IntoIterator for &'b FixedViewMut<'_, T, N> {
    type Item = &'b T;
    type IntoIter = Iter<'b, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl<'b, T, const N: usize> IntoIterator for &'b mut FixedViewMut<'_, T, N> {
    type Item = &'b mut T;
    type IntoIter = IterMut<'b, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}
