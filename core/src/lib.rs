//! Non-owning, fixed-size views over contiguous storage.
//!
//! A [`FixedView`] or [`FixedViewMut`] wraps an existing block of exactly `N`
//! elements and exposes the operations of a fixed-size sequence (indexing,
//! checked access, iteration, fill, swap, assignment and value comparison)
//! without copying or owning the elements.
//!
//! ```text
//! caller's storage:  [ a | b | c | d ]
//!                      ▲
//! FixedView<T, 4>:  ───┘  (one pointer, N lives in the type)
//! ```
//!
//! The storage is owned by the caller. Safe constructors borrow it, so the
//! compiler rejects any view that would outlive its storage. The raw pointer
//! constructors move that obligation to the caller.
//!
//! # Example
//!
//! ```
//! use fixview_core::prelude::*;
//!
//! let mut backing = [5, 2, 9];
//! let mut view = FixedViewMut::new(&mut backing);
//!
//! assert_eq!(view.at(1), Ok(&2));
//! assert_eq!(view.at(3).unwrap_err().index, 3);
//!
//! view.fill(0);
//! assert_eq!(backing, [0, 0, 0]);
//! ```
//!
//! Generic code is written against [`FixedSequence`] and [`FixedSequenceMut`],
//! which are implemented for plain arrays as well as for both views.

#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]
#![deny(unsafe_op_in_unsafe_fn)]

#[cfg(feature = "alloc")]
extern crate alloc;

mod cmp;
pub mod error;
pub mod iter;
pub mod sequence;
pub mod view;
pub mod view_mut;

pub use error::{LengthMismatch, OutOfRange};
pub use sequence::{FixedSequence, FixedSequenceMut, swap};
pub use view::FixedView;
pub use view_mut::FixedViewMut;

/// Everything needed to use views and the sequence traits.
pub mod prelude {
    pub use crate::error::{LengthMismatch, OutOfRange};
    pub use crate::sequence::{FixedSequence, FixedSequenceMut};
    pub use crate::view::FixedView;
    pub use crate::view_mut::FixedViewMut;
}
