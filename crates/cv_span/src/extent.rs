use crate::ViewError;

/// Extent sentinel meaning "the length is only known at run time".
///
/// A view whose extent is anything else holds exactly that many elements.
///
/// # Examples
///
/// ```
/// use cv_span::{DYNAMIC_EXTENT, View};
///
/// assert_eq!(View::<u8>::EXTENT, DYNAMIC_EXTENT);
/// assert_eq!(View::<u8, 4>::EXTENT, 4);
/// ```
pub const DYNAMIC_EXTENT: usize = usize::MAX;

/// Whether a source of extent `source` may build a view of extent `target`,
/// judged from the type-level values alone.
#[inline(always)]
pub(crate) const fn is_compatible(target: usize, source: usize) -> bool {
    target == DYNAMIC_EXTENT || target == source
}

/// Rejects at compile time a conversion from extent `M` into extent `E`.
///
/// The check is a post-monomorphization error, so it fires at the call site
/// that instantiates the mismatching pair.
#[inline(always)]
pub(crate) const fn assert_compatible<const E: usize, const M: usize>() {
    const {
        assert!(
            is_compatible(E, M) || M == DYNAMIC_EXTENT,
            "view extent mismatch: source extent cannot convert into target extent",
        );
    }
}

/// Rejects at compile time an array of length `N` viewed with extent `E`.
///
/// Unlike [`assert_compatible`], `N` is always a real length and is never
/// checked again at run time, so an array of `usize::MAX` zero-sized
/// elements must not pass as "dynamic".
#[inline(always)]
pub(crate) const fn assert_array_fits<const E: usize, const N: usize>() {
    const {
        assert!(
            is_compatible(E, N),
            "view extent mismatch: array length does not match the target extent",
        );
    }
}

/// Rejects at compile time an empty view of a non-zero static extent.
#[inline(always)]
pub(crate) const fn assert_may_be_empty<const E: usize>() {
    const {
        assert!(
            is_compatible(E, 0),
            "an empty view requires a dynamic or zero extent",
        );
    }
}

/// Run-time half of the extent rule, for sources whose length is not static.
#[inline]
pub(crate) const fn check_len<const E: usize>(len: usize) -> Result<(), ViewError> {
    if is_compatible(E, len) {
        Ok(())
    } else {
        Err(ViewError::ExtentMismatch {
            expected: E,
            actual: len,
        })
    }
}

// -----------------------------------------------------------------------------
// Tests
