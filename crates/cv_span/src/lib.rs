//! Non-owning views over contiguous storage.
//!
//! A view is a borrowed `(address, length)` pair. It lets code accept
//! "a contiguous run of `T`" without caring whether the elements live in
//! an array, a `Vec`, a boxed slice or another view, and without copying.
//!
//! **View** and **ViewMut**
//!
//! [`View<'a, T, E>`] is the read-only flavour and is `Copy`.
//! [`ViewMut<'a, T, E>`] is the mutable flavour; it converts into a `View`,
//! never the other way around.
//!
//! **Extent**
//!
//! `E` is either a length known at compile time or [`DYNAMIC_EXTENT`].
//! A statically sized view always has exactly `E` elements.
//!
//! **Construction**
//!
//! | Source                         | Path                                              |
//! |--------------------------------|---------------------------------------------------|
//! | nothing                        | [`View::empty`], [`Default`]                      |
//! | pointer + length               | [`View::from_raw_parts`], [`View::from_slice`]    |
//! | [`Contiguous`] container       | `From<&C>`, [`View::try_from_container`]          |
//! | `[T; N]`                       | [`View::from_array`], `From<&[T; N]>`             |
//! | another view                   | [`View::from_view`], `From<ViewMut>`              |
//!
//! **Sub-ranges**
//!
//! [`first`](View::first), [`last`](View::last) and [`subspan`](View::subspan)
//! check their arguments and panic through [`ViewError::handle_error`] on a
//! violation. The `try_*` variants return the [`ViewError`] instead.
//!
//! # Examples
//!
//! ```
//! use cv_span::View;
//!
//! let data = vec![1, 2, 3, 4, 5];
//! let view = View::from(&data);
//!
//! assert_eq!(view.first(2), [1, 2]);
//! assert_eq!(view.last(2), [4, 5]);
//! assert_eq!(view.subspan(1, 3), [2, 3, 4]);
//! assert_eq!(view.subspan(1, None), [2, 3, 4, 5]);
//! ```
#![expect(unsafe_code, reason = "Unchecked indexing and raw-part construction.")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// no_std support

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod error;
mod extent;
mod impls;
mod view;
mod view_mut;

pub mod contiguous;

#[cfg(feature = "serde")]
mod serde;

// -----------------------------------------------------------------------------
// Top-level exports

pub use contiguous::{Contiguous, ContiguousMut};
pub use error::ViewError;
pub use extent::DYNAMIC_EXTENT;
pub use view::View;
pub use view_mut::ViewMut;

/// Read-only iterator over the elements of a view.
pub type Iter<'a, T> = core::slice::Iter<'a, T>;
