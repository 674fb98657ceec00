use core::ptr::NonNull;
use core::slice;

use crate::extent::{self, DYNAMIC_EXTENT};
use crate::{ContiguousMut, Iter, View, ViewError};

// -----------------------------------------------------------------------------
// ViewMut

/// A view over a contiguous run of `T` whose elements may be mutated,
/// like `&'a mut [T]`.
///
/// It converts into a read-only [`View`] but never the reverse. It is a
/// unique borrow, so it moves instead of copying; use
/// [`reborrow`](Self::reborrow) or [`as_view`](Self::as_view) to keep the
/// view usable afterwards.
///
/// Iteration stays read-only; elements are mutated through indexing or
/// [`as_mut_slice`](Self::as_mut_slice).
///
/// # Examples
///
/// ```
/// use cv_span::ViewMut;
///
/// let mut v = vec![1, 2, 3, 4];
/// let mut view = ViewMut::from(&mut v);
///
/// view[0] = 10;
/// let mut tail = view.reborrow().last(2);
/// tail[1] = 40;
///
/// assert_eq!(view, [10, 2, 3, 40]);
/// ```
pub struct ViewMut<'a, T, const E: usize = DYNAMIC_EXTENT> {
    slice: &'a mut [T],
}

impl<T, const E: usize> Default for ViewMut<'_, T, E> {
    /// An empty view. Fails to compile for a non-zero static extent.
    #[inline(always)]
    fn default() -> Self {
        Self::empty()
    }
}

// -----------------------------------------------------------------------------
// Construction

impl<'a, T, const E: usize> ViewMut<'a, T, E> {
    /// The compile-time extent of this view type.
    pub const EXTENT: usize = E;

    #[inline(always)]
    pub(crate) const fn wrap(slice: &'a mut [T]) -> Self {
        Self { slice }
    }

    /// Creates an empty view.
    ///
    /// ```compile_fail
    /// use cv_span::ViewMut;
    ///
    /// let _ = ViewMut::<u32, 1>::empty();
    /// ```
    #[inline(always)]
    pub fn empty() -> Self {
        extent::assert_may_be_empty::<E>();
        Self { slice: &mut [] }
    }

    /// Creates a view from a pointer and an element count.
    ///
    /// A null `data` is accepted when `len` is zero and yields an empty view.
    ///
    /// # Safety
    ///
    /// Unless `len` is zero, `data` must satisfy the requirements of
    /// [`core::slice::from_raw_parts_mut`] for the lifetime `'a`: it points
    /// to `len` initialized, properly aligned elements that nothing else
    /// accesses while the view is alive.
    ///
    /// # Panics
    ///
    /// Panics if `E` is static and `len != E`.
    #[track_caller]
    pub unsafe fn from_raw_parts_mut(data: *mut T, len: usize) -> Self {
        if let Err(e) = extent::check_len::<E>(len) {
            e.handle_error();
        }
        let data = match NonNull::new(data) {
            Some(ptr) => ptr,
            None if len == 0 => NonNull::dangling(),
            None => ViewError::NullData { len }.handle_error(),
        };
        // SAFETY: the caller guarantees exclusive access to `data..data + len`
        // for `'a`, and a dangling pointer is valid for a zero-length slice.
        Self {
            slice: unsafe { slice::from_raw_parts_mut(data.as_ptr(), len) },
        }
    }

    /// Creates a view over a mutable slice.
    ///
    /// # Panics
    ///
    /// Panics if `E` is static and `slice.len() != E`.
    #[inline]
    #[track_caller]
    pub fn from_mut_slice(slice: &'a mut [T]) -> Self {
        match extent::check_len::<E>(slice.len()) {
            Ok(()) => Self { slice },
            Err(e) => e.handle_error(),
        }
    }

    /// Creates a view over the elements of a mutable compatible container.
    ///
    /// # Examples
    ///
    /// ```
    /// use cv_span::ViewMut;
    ///
    /// let mut v = vec![0u8; 3];
    /// assert!(ViewMut::<u8, 3>::try_from_container_mut(&mut v).is_ok());
    /// assert!(ViewMut::<u8, 2>::try_from_container_mut(&mut v).is_err());
    /// ```
    pub fn try_from_container_mut<C>(container: &'a mut C) -> Result<Self, ViewError>
    where
        C: ContiguousMut<Element = T> + ?Sized,
    {
        let slice = container.as_mut_slice();
        extent::check_len::<E>(slice.len())?;
        Ok(Self { slice })
    }

    /// Converts another mutable view, possibly changing the extent.
    ///
    /// Follows the same extent rules as [`View::from_view`].
    ///
    /// # Panics
    ///
    /// Panics if `M` is dynamic, `E` is static and `view.len() != E`.
    #[inline]
    #[track_caller]
    pub fn from_view<const M: usize>(view: ViewMut<'a, T, M>) -> Self {
        extent::assert_compatible::<E, M>();
        Self::from_mut_slice(view.slice)
    }
}

impl<'a, T, const N: usize> ViewMut<'a, T, N> {
    /// Creates a view over an array, taking its extent from the array length.
    #[inline(always)]
    pub const fn from_array(array: &'a mut [T; N]) -> Self {
        Self { slice: array }
    }
}

// -----------------------------------------------------------------------------
// Accessors

impl<'a, T, const E: usize> ViewMut<'a, T, E> {
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

    /// Returns the mutable address of the first element.
    #[inline(always)]
    pub const fn as_mut_ptr(&mut self) -> *mut T {
        self.slice.as_mut_ptr()
    }

    /// Returns the number of elements.
    #[inline(always)]
    pub const fn len(&self) -> usize {
        self.slice.len()
    }

    /// Returns the total size of the viewed elements in bytes.
    #[inline(always)]
    pub fn size_bytes(&self) -> usize {
        size_of_val(self.as_slice())
    }

    /// Returns `true` if the view has no elements.
    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        self.slice.is_empty()
    }

    /// Reborrows the view for a shorter lifetime.
    #[inline(always)]
    pub const fn reborrow(&mut self) -> ViewMut<'_, T, E> {
        ViewMut { slice: self.slice }
    }

    /// Borrows the view as a read-only [`View`].
    #[inline(always)]
    pub const fn as_view(&self) -> View<'_, T, E> {
        View::wrap(self.slice)
    }

    /// Returns the viewed elements as a slice.
    #[inline(always)]
    pub const fn as_slice(&self) -> &[T] {
        self.slice
    }

    /// Returns the viewed elements as a mutable slice.
    #[inline(always)]
    pub const fn as_mut_slice(&mut self) -> &mut [T] {
        self.slice
    }

    /// Converts the view into a mutable slice with the view's lifetime.
    #[inline(always)]
    pub const fn into_slice(self) -> &'a mut [T] {
        self.slice
    }

    /// Returns the element at `index`, or `None` if it is out of range.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.slice.get(index)
    }

    /// Returns the element at `index` mutably, or `None` if it is out of range.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.slice.get_mut(index)
    }

    /// Returns the element at `index` without bounds checking.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`len`](Self::len).
    #[cfg_attr(any(debug_assertions, feature = "debug"), track_caller)]
    #[cfg_attr(not(any(debug_assertions, feature = "debug")), inline(always))]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        #[cfg(any(debug_assertions, feature = "debug"))]
        assert!(index < self.len(), "tried to index out-of-bounds of a view");

        // SAFETY: `index` is in-bounds so the resulting pointer is valid to deref.
        unsafe { self.slice.get_unchecked(index) }
    }

    /// Returns the element at `index` mutably without bounds checking.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`len`](Self::len).
    #[cfg_attr(any(debug_assertions, feature = "debug"), track_caller)]
    #[cfg_attr(not(any(debug_assertions, feature = "debug")), inline(always))]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        #[cfg(any(debug_assertions, feature = "debug"))]
        assert!(index < self.len(), "tried to index out-of-bounds of a view");

        // SAFETY: `index` is in-bounds so the resulting pointer is valid to deref.
        unsafe { self.slice.get_unchecked_mut(index) }
    }

    /// Returns a read-only iterator over the elements.
    #[inline(always)]
    pub fn iter(&self) -> Iter<'_, T> {
        self.slice.iter()
    }
}

// -----------------------------------------------------------------------------
// Sub-ranges

impl<'a, T, const E: usize> ViewMut<'a, T, E> {
    /// Returns a view of the first `count` elements.
    ///
    /// # Panics
    ///
    /// Panics if `count > self.len()`.
    #[inline]
    #[track_caller]
    pub fn first(self, count: usize) -> ViewMut<'a, T> {
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
    pub fn last(self, count: usize) -> ViewMut<'a, T> {
        match self.try_last(count) {
            Ok(view) => view,
            Err(e) => e.handle_error(),
        }
    }

    /// Returns a view of `count` elements starting at `offset`, or of every
    /// element from `offset` when `count` is `None`.
    ///
    /// # Panics
    ///
    /// Panics if `offset > self.len()`, or if `count` is given and
    /// `offset + count > self.len()`.
    #[inline]
    #[track_caller]
    pub fn subspan(self, offset: usize, count: impl Into<Option<usize>>) -> ViewMut<'a, T> {
        match self.try_subspan(offset, count) {
            Ok(view) => view,
            Err(e) => e.handle_error(),
        }
    }

    /// Fallible [`first`](Self::first).
    pub fn try_first(self, count: usize) -> Result<ViewMut<'a, T>, ViewError> {
        let slice = self.slice;
        let len = slice.len();
        match slice.get_mut(..count) {
            Some(slice) => Ok(ViewMut::wrap(slice)),
            None => Err(ViewError::FirstOutOfRange { count, len }),
        }
    }

    /// Fallible [`last`](Self::last).
    pub fn try_last(self, count: usize) -> Result<ViewMut<'a, T>, ViewError> {
        let slice = self.slice;
        let len = slice.len();
        match len.checked_sub(count) {
            Some(start) => Ok(ViewMut::wrap(&mut slice[start..])),
            None => Err(ViewError::LastOutOfRange { count, len }),
        }
    }

    /// Fallible [`subspan`](Self::subspan).
    pub fn try_subspan(
        self,
        offset: usize,
        count: impl Into<Option<usize>>,
    ) -> Result<ViewMut<'a, T>, ViewError> {
        let count = count.into();
        let slice = self.slice;
        let len = slice.len();
        let end = match count {
            Some(count) => offset.checked_add(count),
            None => Some(len),
        };
        match end {
            Some(end) if offset <= len && end <= len => {
                Ok(ViewMut::wrap(&mut slice[offset..end]))
            }
            _ => Err(ViewError::SubspanOutOfRange { offset, count, len }),
        }
    }
}

// -----------------------------------------------------------------------------
// Conversions

impl<'a, T, C> From<&'a mut C> for ViewMut<'a, T>
where
    C: ContiguousMut<Element = T> + ?Sized,
{
    #[inline]
    fn from(container: &'a mut C) -> Self {
        Self::wrap(container.as_mut_slice())
    }
}

impl<'a, T, const N: usize, const E: usize> From<&'a mut [T; N]> for ViewMut<'a, T, E> {
    /// Views a mutable array, checking its length against `E` at compile time.
    ///
    /// ```compile_fail
    /// use cv_span::ViewMut;
    ///
    /// let _: ViewMut<'_, u8, 3> = ViewMut::from(&mut [0u8; 4]);
    /// ```
    ///
    /// ```compile_fail
    /// use cv_span::ViewMut;
    ///
    /// let mut arr = [(); usize::MAX];
    /// let _: ViewMut<'_, (), 3> = ViewMut::from(&mut arr);
    /// ```
    #[inline(always)]
    fn from(array: &'a mut [T; N]) -> Self {
        extent::assert_array_fits::<E, N>();
        Self::wrap(array)
    }
}

impl<'a, 'b, T, const E: usize> IntoIterator for &'b ViewMut<'a, T, E> {
    type Item = &'b T;
    type IntoIter = Iter<'b, T>;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter {
        self.slice.iter()
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::vec;

    use super::ViewMut;
    use crate::{View, ViewError};

    #[test]
    fn is_sync_send() {
        fn is_send<T: Send>() {}
        fn is_sync<T: Sync>() {}

        is_send::<ViewMut<'static, i32>>();
        is_sync::<ViewMut<'static, i32>>();
    }

    #[test]
    fn empty_views() {
        let a: ViewMut<'_, i32> = ViewMut::default();
        let b: ViewMut<'_, i32, 0> = ViewMut::empty();

        assert!(a.is_empty());
        assert_eq!(a, b);
    }

    #[test]
    fn raw_parts_round_trip() {
        let mut v = vec![1u8, 2, 3];
        let ptr = v.as_mut_ptr();
        let mut view: ViewMut<'_, u8> = unsafe { ViewMut::from_raw_parts_mut(ptr, 3) };

        assert_eq!(view.as_mut_ptr(), ptr);
        assert_eq!(view.len(), 3);
        view[2] = 30;
        assert_eq!(v, [1, 2, 30]);
    }

    #[test]
    fn max_length_zst_array() {
        let mut arr = [(); usize::MAX];
        let view: ViewMut<'_, ()> = ViewMut::from(&mut arr);

        assert_eq!(view.len(), usize::MAX);
        assert_eq!(view.first(3).len(), 3);
    }

    #[test]
    fn mutation_reaches_storage() {
        let mut arr = [1, 2, 3, 4, 5];
        {
            let mut view: ViewMut<'_, i32> = ViewMut::from(&mut arr);
            view[0] = 0;
            *view.get_mut(1).unwrap() = 0;
            unsafe {
                *view.get_unchecked_mut(4) = 50;
            }
            view.reborrow().subspan(2, 1)[0] = 30;
        }
        assert_eq!(arr, [0, 0, 30, 4, 50]);
    }

    #[test]
    fn container_views() {
        let mut boxed: Box<[i32]> = Box::new([1, 2, 3]);
        let ptr = boxed.as_ptr();
        let view = ViewMut::from(&mut boxed);

        assert_eq!(view.as_ptr(), ptr);
        assert_eq!(view.extent(), crate::DYNAMIC_EXTENT);

        let mut fixed = [0u8; 2];
        let view: ViewMut<'_, u8, 2> = ViewMut::from(&mut fixed);
        assert_eq!(view.len(), 2);
    }

    #[test]
    fn narrowing_to_read_only() {
        let mut v = vec![1, 2, 3];
        let ptr = v.as_ptr();

        let mut view = ViewMut::from(&mut v);
        assert_eq!(view.as_view().as_ptr(), ptr);

        let read: View<'_, i32> = view.reborrow().into();
        assert_eq!(read, [1, 2, 3]);

        let fixed: View<'_, i32, 3> = View::from(ViewMut::<i32, 3>::from_view(view));
        assert_eq!(fixed.as_ptr(), ptr);
    }

    #[test]
    fn sub_ranges() {
        let mut arr = [1, 2, 3, 4, 5];
        let mut view = ViewMut::from_array(&mut arr);

        assert_eq!(view.reborrow().first(2), [1, 2]);
        assert_eq!(view.reborrow().last(2), [4, 5]);
        assert_eq!(view.reborrow().subspan(1, 3), [2, 3, 4]);
        assert_eq!(view.reborrow().subspan(1, None), [2, 3, 4, 5]);

        assert_eq!(
            view.reborrow().try_first(6).map(|v| v.len()),
            Err(ViewError::FirstOutOfRange { count: 6, len: 5 })
        );
        assert_eq!(
            view.reborrow().try_last(6).map(|v| v.len()),
            Err(ViewError::LastOutOfRange { count: 6, len: 5 })
        );
        assert_eq!(
            view.reborrow().try_subspan(6, None).map(|v| v.len()),
            Err(ViewError::SubspanOutOfRange {
                offset: 6,
                count: None,
                len: 5
            })
        );
    }

    #[test]
    #[should_panic(expected = "subspan(2, Some(4)) is out of range")]
    fn subspan_out_of_range() {
        let mut arr = [1, 2, 3, 4, 5];
        ViewMut::from_array(&mut arr).subspan(2, 4);
    }

    #[test]
    fn iteration_is_read_only() {
        let mut arr = [1, 2, 3];
        let view = ViewMut::from_array(&mut arr);

        let sum: i32 = view.iter().sum();
        let rev_first = (&view).into_iter().rev().next();

        assert_eq!(sum, 6);
        assert_eq!(rev_first, Some(&3));
    }
}
