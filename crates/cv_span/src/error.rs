use thiserror::Error;

// -----------------------------------------------------------------------------
// Error

/// A precondition violation reported by a view operation.
///
/// The panicking operations ([`first`], [`last`], [`subspan`] and the
/// static-extent constructors) route these through [`handle_error`];
/// the `try_*` variants hand them back to the caller.
///
/// [`first`]: crate::View::first
/// [`last`]: crate::View::last
/// [`subspan`]: crate::View::subspan
/// [`handle_error`]: ViewError::handle_error
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ViewError {
    #[error("first({count}) is out of range for a view of length {len}")]
    FirstOutOfRange { count: usize, len: usize },

    #[error("last({count}) is out of range for a view of length {len}")]
    LastOutOfRange { count: usize, len: usize },

    #[error("subspan({offset}, {count:?}) is out of range for a view of length {len}")]
    SubspanOutOfRange {
        offset: usize,
        count: Option<usize>,
        len: usize,
    },

    #[error("view extent mismatch: expected {expected} elements, found {actual}")]
    ExtentMismatch { expected: usize, actual: usize },

    #[error("null data pointer for a view of length {len}")]
    NullData { len: usize },
}

impl ViewError {
    /// Stops execution with this violation.
    ///
    /// The error is logged at `error` level before panicking, so an installed
    /// logger sees it even when the panic is caught further up.
    #[cold]
    #[inline(never)]
    #[track_caller]
    pub fn handle_error(&self) -> ! {
        log::error!("{self}");
        panic!("{self}");
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::string::{String, ToString};
    use alloc::vec::Vec;
    use std::panic::{self, AssertUnwindSafe};
    use std::sync::Mutex;

    use super::ViewError;

    static RECORDS: Mutex<Vec<(log::Level, String)>> = Mutex::new(Vec::new());

    struct Capture;

    impl log::Log for Capture {
        fn enabled(&self, _: &log::Metadata<'_>) -> bool {
            true
        }

        fn log(&self, record: &log::Record<'_>) {
            if let Ok(mut records) = RECORDS.lock() {
                records.push((record.level(), record.args().to_string()));
            }
        }

        fn flush(&self) {}
    }

    static CAPTURE: Capture = Capture;

    #[test]
    fn display() {
        let err = ViewError::FirstOutOfRange { count: 6, len: 5 };
        assert_eq!(
            err.to_string(),
            "first(6) is out of range for a view of length 5"
        );

        let err = ViewError::SubspanOutOfRange {
            offset: 1,
            count: Some(9),
            len: 5,
        };
        assert_eq!(
            err.to_string(),
            "subspan(1, Some(9)) is out of range for a view of length 5"
        );

        let err = ViewError::ExtentMismatch {
            expected: 4,
            actual: 3,
        };
        assert_eq!(
            err.to_string(),
            "view extent mismatch: expected 4 elements, found 3"
        );
    }

    #[test]
    #[should_panic(expected = "last(3) is out of range for a view of length 2")]
    fn handle_error_panics() {
        ViewError::LastOutOfRange { count: 3, len: 2 }.handle_error();
    }

    #[test]
    fn handle_error_logs_before_panicking() {
        let _ = log::set_logger(&CAPTURE);
        log::set_max_level(log::LevelFilter::Trace);

        let err = ViewError::NullData { len: 17 };
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            err.handle_error();
        }));
        assert!(result.is_err());

        let records = RECORDS.lock().unwrap_or_else(|e| e.into_inner());
        assert!(records.iter().any(|(level, msg)| {
            *level == log::Level::Error && msg == "null data pointer for a view of length 17"
        }));
    }
}
