use core::ptr::NonNull;
use core::slice;

use crate::extent::{self, DYNAMIC_EXTENT};
use crate::{Contiguous, Iter, ViewError, ViewMut};

// -----------------------------------------------------------------------------
// View

/// A read-only view over a contiguous run of `T`, like `&'a [T]`.
///
/// The view never owns or copies the elements; copying a `View` copies only
/// the address and length. The lifetime `'a` ties it to the viewed storage.
///
/// `E` is the compile-time extent. With the default, [`DYNAMIC_EXTENT`], the
/// length is only known at run time; otherwise every instance has exactly
/// `E` elements.
///
/// # Examples
///
/// ```
/// use cv_span::View;
///
/// let arr = [1, 2, 3, 4, 5];
///
/// let fixed = View::from_array(&arr);
/// assert_eq!(fixed.len(), 5);
///
/// let dynamic: View<'_, i32> = View::from_view(fixed);
/// assert_eq!(dynamic.subspan(1, 3), [2, 3, 4]);
/// ```
pub struct View<'a, T, const E: usize = DYNAMIC_EXTENT> {
    slice: &'a [T],
}

impl<T, const E: usize> Clone for View<'_, T, E> {
    #[inline(always)]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, const E: usize> Copy for View<'_, T, E> {}

impl<T, const E: usize> Default for View<'_, T, E> {
    /// An empty view. Fails to compile for a non-zero static extent.
    #[inline(always)]
    fn default() -> Self {
        Self::empty()
    }
}

// -----------------------------------------------------------------------------
// Construction

impl<'a, T, const E: usize> View<'a, T, E> {
    /// The compile-time extent of this view type.
    pub const EXTENT: usize = E;

    /// Wraps a slice without the extent check.
    ///
    /// `slice.len()` must already be known to match `E`.
    #[inline(always)]
    pub(crate) const fn wrap(slice: &'a [T]) -> Self {
        Self { slice }
    }

    /// Creates an empty view.
    ///
    /// Only views with a dynamic or zero extent can be empty; any other
    /// extent is rejected when the call is compiled.
    ///
    /// # Examples
    ///
    /// ```
    /// use cv_span::View;
    ///
    /// let a = View::<u32>::empty();
    /// let b = View::<u32>::default();
    ///
    /// assert!(a.is_empty());
    /// assert_eq!(a, b);
    /// ```
    ///
    /// ```compile_fail
    /// use cv_span::View;
    ///
    /// let _ = View::<u32, 3>::empty();
    /// ```
    #[inline(always)]
    pub const fn empty() -> Self {
        extent::assert_may_be_empty::<E>();
        Self { slice: &[] }
    }

    /// Creates a view from a pointer and an element count.
    ///
    /// A null `data` is accepted when `len` is zero and yields an empty view.
    ///
    /// # Safety
    ///
    /// Unless `len` is zero, `data` must satisfy the requirements of
    /// [`core::slice::from_raw_parts`] for the lifetime `'a`: it points to
    /// `len` initialized, properly aligned elements that are not mutated
    /// while the view is alive.
    ///
    /// # Panics
    ///
    /// Panics if `E` is static and `len != E`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cv_span::View;
    ///
    /// let v = vec![1u16, 2, 3];
    /// let view: View<'_, u16> = unsafe { View::from_raw_parts(v.as_ptr(), v.len()) };
    ///
    /// assert_eq!(view.as_ptr(), v.as_ptr());
    /// assert_eq!(view.len(), 3);
    /// ```
    #[track_caller]
    pub unsafe fn from_raw_parts(data: *const T, len: usize) -> Self {
        if let Err(e) = extent::check_len::<E>(len) {
            e.handle_error();
        }
        let data = match NonNull::new(data.cast_mut()) {
            Some(ptr) => ptr,
            None if len == 0 => NonNull::dangling(),
            None => ViewError::NullData { len }.handle_error(),
        };
        // SAFETY: the caller guarantees `data..data + len` is valid for `'a`,
        // and a dangling pointer is valid for a zero-length slice.
        Self {
            slice: unsafe { slice::from_raw_parts(data.as_ptr(), len) },
        }
    }

    /// Creates a view over a slice.
    ///
    /// # Panics
    ///
    /// Panics if `E` is static and `slice.len() != E`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cv_span::View;
    ///
    /// let view: View<'_, char, 2> = View::from_slice(&['a', 'b']);
    /// assert_eq!(view, ['a', 'b']);
    /// ```
    #[inline]
    #[track_caller]
    pub fn from_slice(slice: &'a [T]) -> Self {
        match extent::check_len::<E>(slice.len()) {
            Ok(()) => Self { slice },
            Err(e) => e.handle_error(),
        }
    }

    /// Creates a view over the elements of a compatible container.
    ///
    /// This is the static-extent counterpart of `View::from(&container)`:
    /// the container's length is only known at run time, so a mismatch is
    /// reported as an error rather than rejected at compile time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cv_span::{View, ViewError};
    ///
    /// let v = vec![1, 2, 3];
    ///
    /// let ok = View::<i32, 3>::try_from_container(&v).unwrap();
    /// assert_eq!(ok.len(), 3);
    ///
    /// let err = View::<i32, 4>::try_from_container(&v).unwrap_err();
    /// assert_eq!(err, ViewError::ExtentMismatch { expected: 4, actual: 3 });
    /// ```
    pub fn try_from_container<C>(container: &'a C) -> Result<Self, ViewError>
    where
        C: Contiguous<Element = T> + ?Sized,
    {
        let slice = container.as_slice();
        extent::check_len::<E>(slice.len())?;
        Ok(Self { slice })
    }

    /// Converts another view, possibly changing the extent.
    ///
    /// Extents `M` that can never match `E` are rejected at compile time.
    /// A dynamic source converted into a static extent is checked at run
    /// time instead.
    ///
    /// # Panics
    ///
    /// Panics if `M` is dynamic, `E` is static and `view.len() != E`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cv_span::View;
    ///
    /// let arr = [0u8; 4];
    /// let fixed: View<'_, u8, 4> = View::from_array(&arr);
    ///
    /// let dynamic: View<'_, u8> = View::from_view(fixed);
    /// let back: View<'_, u8, 4> = View::from_view(dynamic);
    /// assert_eq!(back.as_ptr(), arr.as_ptr());
    /// ```
    ///
    /// ```compile_fail
    /// use cv_span::View;
    ///
    /// let arr = [0u8; 4];
    /// let _: View<'_, u8, 3> = View::from_view(View::from_array(&arr));
    /// ```
    #[inline]
    #[track_caller]
    pub fn from_view<const M: usize>(view: View<'a, T, M>) -> Self {
        extent::assert_compatible::<E, M>();
        Self::from_slice(view.slice)
    }
}

impl<'a, T, const N: usize> View<'a, T, N> {
    /// Creates a view over an array, taking its extent from the array length.
    ///
    /// # Examples
    ///
    /// ```
    /// use cv_span::View;
    ///
    /// let arr = [10, 20, 30];
    /// let view = View::from_array(&arr);
    ///
    /// assert_eq!(view.len(), 3);
    /// assert_eq!(view.as_ptr(), &arr[0] as *const i32);
    /// ```
    #[inline(always)]
    pub const fn from_array(array: &'a [T; N]) -> Self {
        Self { slice: array }
    }
}

// -----------------------------------------------------------------------------
// Accessors

impl<'a, T, const E: usize> View<'a, T, E> {
    /// Returns the compile-time extent, [`DYNAMIC_EXTENT`] if there is none.
    #[inline(always)]
    pub const fn extent(&self) -> usize {
        E
    }

    /// Returns the address of the first element.
    ///
    /// For an empty view the address is unspecified and must not be read
    /// through.
    #[inline(always)]
    pub const fn as_ptr(&self) -> *const T {
        self.slice.as_ptr()
    }

    /// Returns the number of elements.
    #[inline(always)]
    pub const fn len(&self) -> usize {
        self.slice.len()
    }

    /// Returns the total size of the viewed elements in bytes.
    #[inline(always)]
    pub fn size_bytes(&self) -> usize {
        size_of_val(self.slice)
    }

    /// Returns `true` if the view has no elements.
    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        self.slice.is_empty()
    }

    /// Returns the viewed elements as a slice with the view's lifetime.
    #[inline(always)]
    pub const fn as_slice(&self) -> &'a [T] {
        self.slice
    }

    /// Converts the view into a slice with the view's lifetime.
    #[inline(always)]
    pub const fn into_slice(self) -> &'a [T] {
        self.slice
    }

    /// Returns the element at `index`, or `None` if it is out of range.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&'a T> {
        self.slice.get(index)
    }

    /// Returns the element at `index` without bounds checking.
    ///
    /// Bounds are asserted only with `debug_assertions` or the `debug`
    /// feature.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`len`](Self::len).
    ///
    /// # Examples
    ///
    /// ```
    /// use cv_span::View;
    ///
    /// let arr = [1, 2, 3, 4];
    /// let view = View::from_array(&arr);
    ///
    /// assert_eq!(unsafe { *view.get_unchecked(2) }, 3);
    /// ```
    #[cfg_attr(any(debug_assertions, feature = "debug"), track_caller)]
    #[cfg_attr(not(any(debug_assertions, feature = "debug")), inline(always))]
    pub unsafe fn get_unchecked(&self, index: usize) -> &'a T {
        #[cfg(any(debug_assertions, feature = "debug"))]
        assert!(index < self.len(), "tried to index out-of-bounds of a view");

        // SAFETY: `index` is in-bounds so the resulting pointer is valid to deref.
        unsafe { self.slice.get_unchecked(index) }
    }

    /// Returns a read-only iterator over the elements.
    ///
    /// The iterator is double-ended, so `iter().rev()` walks the view
    /// backwards.
    ///
    /// # Examples
    ///
    /// ```
    /// use cv_span::View;
    ///
    /// let arr = [1, 2, 3];
    /// let view = View::from_array(&arr);
    ///
    /// assert!(view.iter().eq(&[1, 2, 3]));
    /// assert!(view.iter().rev().eq(&[3, 2, 1]));
    /// ```
    #[inline(always)]
    pub fn iter(&self) -> Iter<'a, T> {
        self.slice.iter()
    }
}

// -----------------------------------------------------------------------------
// Sub-ranges

impl<'a, T, const E: usize> View<'a, T, E> {
    /// Returns a view of the first `count` elements.
    ///
    /// # Panics
    ///
    /// Panics if `count > self.len()`.
    #[inline]
    #[track_caller]
    pub fn first(self, count: usize) -> View<'a, T> {
        match self.try_first(count) {
            Ok(view) => view,
            Err(e) => e.handle_error(),
        }
    }

    /// Returns a view of the last `count` elements.
    ///
    /// # Panics
    ///
    /// Panics if `count > self.len()`.
    #[inline]
    #[track_caller]
    pub fn last(self, count: usize) -> View<'a, T> {
        match self.try_last(count) {
            Ok(view) => view,
            Err(e) => e.handle_error(),
        }
    }

    /// Returns a view of `count` elements starting at `offset`.
    ///
    /// `count` of `None` selects every element from `offset` to the end.
    ///
    /// # Panics
    ///
    /// Panics if `offset > self.len()`, or if `count` is given and
    /// `offset + count > self.len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cv_span::View;
    ///
    /// let arr = [1, 2, 3, 4, 5];
    /// let view = View::from_array(&arr);
    ///
    /// assert_eq!(view.subspan(1, 3), [2, 3, 4]);
    /// assert_eq!(view.subspan(1, None), [2, 3, 4, 5]);
    /// assert_eq!(view.subspan(5, None).len(), 0);
    /// ```
    #[inline]
    #[track_caller]
    pub fn subspan(self, offset: usize, count: impl Into<Option<usize>>) -> View<'a, T> {
        match self.try_subspan(offset, count) {
            Ok(view) => view,
            Err(e) => e.handle_error(),
        }
    }

    /// Fallible [`first`](Self::first).
    pub fn try_first(self, count: usize) -> Result<View<'a, T>, ViewError> {
        match self.slice.get(..count) {
            Some(slice) => Ok(View::wrap(slice)),
            None => Err(ViewError::FirstOutOfRange {
                count,
                len: self.len(),
            }),
        }
    }

    /// Fallible [`last`](Self::last).
    pub fn try_last(self, count: usize) -> Result<View<'a, T>, ViewError> {
        let len = self.len();
        match len.checked_sub(count) {
            Some(start) => Ok(View::wrap(&self.slice[start..])),
            None => Err(ViewError::LastOutOfRange { count, len }),
        }
    }

    /// Fallible [`subspan`](Self::subspan).
    pub fn try_subspan(
        self,
        offset: usize,
        count: impl Into<Option<usize>>,
    ) -> Result<View<'a, T>, ViewError> {
        let count = count.into();
        let len = self.len();
        let end = match count {
            Some(count) => offset.checked_add(count),
            None => Some(len),
        };
        match end {
            Some(end) if offset <= len && end <= len => {
                Ok(View::wrap(&self.slice[offset..end]))
            }
            _ => Err(ViewError::SubspanOutOfRange { offset, count, len }),
        }
    }
}

// -----------------------------------------------------------------------------
// Conversions

impl<'a, T, C> From<&'a C> for View<'a, T>
where
    C: Contiguous<Element = T> + ?Sized,
{
    /// Views the elements of a compatible container.
    ///
    /// The element type must match exactly:
    ///
    /// ```compile_fail
    /// use cv_span::View;
    ///
    /// let v = vec![0u8];
    /// let _: View<'_, u16> = View::from(&v);
    /// ```
    #[inline]
    fn from(container: &'a C) -> Self {
        Self::wrap(container.as_slice())
    }
}

impl<'a, T, C> From<&'a mut C> for View<'a, T>
where
    C: Contiguous<Element = T> + ?Sized,
{
    #[inline]
    fn from(container: &'a mut C) -> Self {
        Self::wrap(Contiguous::as_slice(container))
    }
}

impl<'a, T, const N: usize, const E: usize> From<&'a [T; N]> for View<'a, T, E> {
    /// Views an array, checking its length against `E` at compile time.
    ///
    /// ```compile_fail
    /// use cv_span::View;
    ///
    /// let _: View<'_, u8, 3> = View::from(&[0u8; 4]);
    /// ```
    ///
    /// An array of `usize::MAX` elements still has a static length:
    ///
    /// ```compile_fail
    /// use cv_span::View;
    ///
    /// let arr = [(); usize::MAX];
    /// let _: View<'_, (), 3> = View::from(&arr);
    /// ```
    #[inline(always)]
    fn from(array: &'a [T; N]) -> Self {
        extent::assert_array_fits::<E, N>();
        Self::wrap(array)
    }
}

impl<'a, T, const N: usize, const E: usize> From<&'a mut [T; N]> for View<'a, T, E> {
    /// ```compile_fail
    /// use cv_span::View;
    ///
    /// let _: View<'_, u8, 2> = View::from(&mut [0u8; 4]);
    /// ```
    #[inline(always)]
    fn from(array: &'a mut [T; N]) -> Self {
        extent::assert_array_fits::<E, N>();
        Self::wrap(array)
    }
}

impl<'a, T, const M: usize, const E: usize> From<ViewMut<'a, T, M>> for View<'a, T, E> {
    /// Narrows a mutable view into a read-only one over the same elements.
    ///
    /// ```
    /// use cv_span::{View, ViewMut};
    ///
    /// let mut v = vec![1, 2, 3];
    /// let ptr = v.as_ptr();
    ///
    /// let view: View<'_, i32> = ViewMut::from(&mut v).into();
    /// assert_eq!(view.as_ptr(), ptr);
    /// assert_eq!(view, [1, 2, 3]);
    /// ```
    ///
    /// The reverse direction does not exist:
    ///
    /// ```compile_fail
    /// use cv_span::{View, ViewMut};
    ///
    /// let v = vec![1, 2, 3];
    /// let _: ViewMut<'_, i32> = View::from(&v).into();
    /// ```
    #[inline]
    #[track_caller]
    fn from(view: ViewMut<'a, T, M>) -> Self {
        extent::assert_compatible::<E, M>();
        Self::from_slice(view.into_slice())
    }
}

impl<'a, T, const E: usize> IntoIterator for View<'a, T, E> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter {
        self.slice.iter()
    }
}

impl<'a, T, const E: usize> IntoIterator for &View<'a, T, E> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter {
        self.slice.iter()
    }
}

// -----------------------------------------------------------------------------
// Tests
