use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::{Index, IndexMut};
use core::slice::SliceIndex;

use crate::{View, ViewMut};

// -----------------------------------------------------------------------------
// Common traits

macro_rules! impl_view {
    ($view:ident) => {
        impl<T: fmt::Debug, const E: usize> fmt::Debug for $view<'_, T, E> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_list().entries(self.as_slice()).finish()
            }
        }

        impl<T: Eq, const E: usize> Eq for $view<'_, T, E> {}

        impl<T: Hash, const E: usize> Hash for $view<'_, T, E> {
            #[inline]
            fn hash<H: Hasher>(&self, state: &mut H) {
                self.as_slice().hash(state);
            }
        }

        impl<T, U, const E: usize> PartialEq<[U]> for $view<'_, T, E>
        where
            T: PartialEq<U>,
        {
            #[inline]
            fn eq(&self, other: &[U]) -> bool {
                self.as_slice() == other
            }
        }

        impl<T, U, const E: usize, const N: usize> PartialEq<[U; N]> for $view<'_, T, E>
        where
            T: PartialEq<U>,
        {
            #[inline]
            fn eq(&self, other: &[U; N]) -> bool {
                self.as_slice() == other.as_slice()
            }
        }

        impl<T, I, const E: usize> Index<I> for $view<'_, T, E>
        where
            I: SliceIndex<[T]>,
        {
            type Output = I::Output;

            #[inline]
            fn index(&self, index: I) -> &I::Output {
                &self.as_slice()[index]
            }
        }

        impl<T, const E: usize> AsRef<[T]> for $view<'_, T, E> {
            #[inline(always)]
            fn as_ref(&self) -> &[T] {
                self.as_slice()
            }
        }
    };
}

impl_view!(View);
impl_view!(ViewMut);

// -----------------------------------------------------------------------------
// Element-wise equality across flavours and extents

macro_rules! impl_view_eq {
    ($lhs:ident, $rhs:ident) => {
        impl<T, U, const E: usize, const M: usize> PartialEq<$rhs<'_, U, M>> for $lhs<'_, T, E>
        where
            T: PartialEq<U>,
        {
            #[inline]
            fn eq(&self, other: &$rhs<'_, U, M>) -> bool {
                self.as_slice() == other.as_slice()
            }
        }
    };
}

impl_view_eq!(View, View);
impl_view_eq!(View, ViewMut);
impl_view_eq!(ViewMut, View);
impl_view_eq!(ViewMut, ViewMut);

// -----------------------------------------------------------------------------
// Mutable access

impl<T, I, const E: usize> IndexMut<I> for ViewMut<'_, T, E>
where
    I: SliceIndex<[T]>,
{
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut I::Output {
        &mut self.as_mut_slice()[index]
    }
}

impl<T, const E: usize> AsMut<[T]> for ViewMut<'_, T, E> {
    #[inline(always)]
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use core::hash::{BuildHasher, BuildHasherDefault, Hasher};

    use alloc::format;
    use alloc::vec;

    use crate::{View, ViewMut};

    #[derive(Default)]
    struct Fnv(u64);

    impl Hasher for Fnv {
        fn finish(&self) -> u64 {
            self.0
        }

        fn write(&mut self, bytes: &[u8]) {
            for b in bytes {
                self.0 = (self.0 ^ u64::from(*b)).wrapping_mul(0x100_0000_01b3);
            }
        }
    }

    #[test]
    fn element_wise_equality() {
        let a = [1, 2, 3];
        let mut b = vec![1, 2, 3];

        let fixed = View::from_array(&a);
        let dynamic: View<'_, i32> = View::from(&a);
        assert_eq!(fixed, dynamic);

        let mutable = ViewMut::from(&mut b);
        assert_eq!(fixed, mutable);
        assert_eq!(mutable, dynamic);
        assert_eq!(mutable, a);
        assert_ne!(dynamic.first(2), dynamic);
    }

    #[test]
    fn default_views_compare_equal() {
        let a: View<'_, u8> = View::default();
        let b: View<'_, u8> = View::default();

        assert_eq!(a.len(), 0);
        assert_eq!(b.len(), 0);
        assert_eq!(a, b);
    }

    #[test]
    fn debug_lists_elements() {
        let a = [1, 2];
        assert_eq!(format!("{:?}", View::from_array(&a)), "[1, 2]");
        assert_eq!(format!("{:?}", View::<u8>::empty()), "[]");
    }

    #[test]
    fn hash_matches_slice() {
        let v = vec![4u16, 5, 6];
        let state = BuildHasherDefault::<Fnv>::default();

        assert_eq!(state.hash_one(View::from(&v)), state.hash_one(&v[..]));
    }
}
