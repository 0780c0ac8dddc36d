//! Fixview - fixed-size views over storage you already own
//!
//! # Overview
//!
//! Fixview wraps an existing contiguous block of `N` elements in a view that
//! behaves like a fixed-size array: indexing, checked access, forward and
//! reverse iteration, fill, swap, element-wise assignment and value
//! comparison. The view never owns, allocates, frees or resizes anything. It
//! is one pointer wide, and `N` lives in the type.
//!
//! Common uses:
//!
//! - Handing a region of a larger buffer to code written for `[T; N]`
//! - Treating a pointer received over FFI as a sized sequence
//! - Writing algorithms once against [`FixedSequence`] and running them on
//!   arrays, views and boxed arrays alike
//!
//! # Quick Start
//!
//! ```
//! use fixview::prelude::*;
//!
//! let mut backing = [5, 2, 9];
//! let mut view = FixedViewMut::new(&mut backing);
//!
//! assert_eq!(view.size(), 3);
//! assert_eq!(view.at(1), Ok(&2));
//! assert_eq!(view.at(3), Err(OutOfRange { index: 3, len: 3 }));
//!
//! view.fill(0);
//! assert_eq!(backing, [0, 0, 0]);
//! ```
//!
//! # Storage Ownership
//!
//! The caller owns the storage and keeps it alive. With the safe
//! constructors the borrow checker enforces this; here the arena outlives
//! every view into it:
//!
//! ```
//! use bumpalo::Bump;
//! use fixview::prelude::*;
//!
//! let arena = Bump::new();
//! let left = arena.alloc([0u32; 4]);
//! let right = arena.alloc([1u32; 4]);
//!
//! let mut a = FixedViewMut::new(left);
//! let mut b = FixedViewMut::new(right);
//! a.swap_contents(&mut b);
//!
//! assert_eq!(a, [1; 4]);
//! assert_eq!(b, [0; 4]);
//! ```
//!
//! The pointer constructors (`FixedView::from_ptr`, `FixedViewMut::from_ptr`)
//! are `unsafe`: the caller promises the pointer covers `N` live elements for
//! as long as the view is used.
//!
//! # Equality
//!
//! `==`, `<` and friends compare the viewed *elements*, like arrays do. To ask
//! whether two views observe the same memory, use
//! [`FixedSequence::same_storage`].

pub use fixview_core::{
    FixedSequence, FixedSequenceMut, FixedView, FixedViewMut, LengthMismatch, OutOfRange, error,
    iter, prelude, sequence, swap,
};
