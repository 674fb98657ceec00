//! Containers a view can be built from.
//!
//! A type is a compatible container when it stores its elements in one
//! contiguous run and can hand out that run as a slice. The view
//! constructors are gated on these traits at compile time.
//!
//! Arrays and views deliberately do not implement them: arrays have their
//! own extent-aware constructors and views convert through
//! [`View::from_view`](crate::View::from_view), so every source type picks
//! exactly one construction path.
//!
//! # Examples
//!
//! ```
//! use cv_span::{Contiguous, View};
//!
//! struct Samples {
//!     buf: Vec<f32>,
//! }
//!
//! impl Contiguous for Samples {
//!     type Element = f32;
//!
//!     fn as_slice(&self) -> &[f32] {
//!         &self.buf
//!     }
//! }
//!
//! let samples = Samples { buf: vec![0.5, 1.5] };
//! let view = View::from(&samples);
//! assert_eq!(view.len(), 2);
//! ```

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;

// -----------------------------------------------------------------------------
// Traits

/// A container exposing its elements as one contiguous slice.
pub trait Contiguous {
    /// The element type a view over this container holds.
    type Element;

    /// The elements, in storage order.
    fn as_slice(&self) -> &[Self::Element];
}

/// A [`Contiguous`] container whose elements may be mutated in place.
///
/// Only containers where element mutation cannot break an invariant
/// implement this; `String` for example stays read-only.
pub trait ContiguousMut: Contiguous {
    /// The elements, in storage order, mutably.
    fn as_mut_slice(&mut self) -> &mut [Self::Element];
}

// -----------------------------------------------------------------------------
// Implementations

impl<T> Contiguous for [T] {
    type Element = T;

    #[inline(always)]
    fn as_slice(&self) -> &[T] {
        self
    }
}

impl<T> ContiguousMut for [T] {
    #[inline(always)]
    fn as_mut_slice(&mut self) -> &mut [T] {
        self
    }
}

impl<T> Contiguous for Vec<T> {
    type Element = T;

    #[inline(always)]
    fn as_slice(&self) -> &[T] {
        Vec::as_slice(self)
    }
}

impl<T> ContiguousMut for Vec<T> {
    #[inline(always)]
    fn as_mut_slice(&mut self) -> &mut [T] {
        Vec::as_mut_slice(self)
    }
}

impl<T> Contiguous for Box<[T]> {
    type Element = T;

    #[inline(always)]
    fn as_slice(&self) -> &[T] {
        self
    }
}

impl<T> ContiguousMut for Box<[T]> {
    #[inline(always)]
    fn as_mut_slice(&mut self) -> &mut [T] {
        self
    }
}

impl<T> Contiguous for Rc<[T]> {
    type Element = T;

    #[inline(always)]
    fn as_slice(&self) -> &[T] {
        self
    }
}

impl<T> Contiguous for Arc<[T]> {
    type Element = T;

    #[inline(always)]
    fn as_slice(&self) -> &[T] {
        self
    }
}

impl Contiguous for str {
    type Element = u8;

    #[inline(always)]
    fn as_slice(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl Contiguous for String {
    type Element = u8;

    #[inline(always)]
    fn as_slice(&self) -> &[u8] {
        self.as_bytes()
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::String;
    use alloc::sync::Arc;
    use alloc::vec;

    use super::{Contiguous, ContiguousMut};

    fn elements<C: Contiguous + ?Sized>(c: &C) -> usize {
        c.as_slice().len()
    }

    #[test]
    fn shared_containers() {
        assert_eq!(elements(&vec![1, 2, 3]), 3);
        assert_eq!(elements(&[1u8, 2][..]), 2);
        assert_eq!(elements("hello"), 5);
        assert_eq!(elements(&String::from("hi")), 2);
        assert_eq!(elements(&Arc::<[i32]>::from([7, 8])), 2);
    }

    #[test]
    fn mutable_containers() {
        let mut boxed: Box<[i32]> = Box::new([1, 2, 3]);
        boxed.as_mut_slice()[1] = 20;
        assert_eq!(Contiguous::as_slice(&boxed), &[1, 20, 3]);

        let mut v = vec![0; 2];
        ContiguousMut::as_mut_slice(&mut v)[0] = 9;
        assert_eq!(v, [9, 0]);
    }
}
