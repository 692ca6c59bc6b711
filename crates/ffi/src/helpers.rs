use crate::error::{with_last_error_mut, FireSpreadError, FireSpreadErrorCode};
use std::ffi::CString;

/// Set the thread-local error message and code.
/// Internal helper for FFI functions to record failure details.
pub(crate) fn set_last_error(error: &impl FireSpreadError) {
    with_last_error_mut(|(cstring, code)| {
        *cstring = CString::new(error.msg()).ok();
        *code = error.code();
    });
}

/// Clear the thread-local error message and code.
/// Called on successful operations so a stale message is never reported.
pub(crate) fn clear_last_error() {
    with_last_error_mut(|(cstring, code)| {
        *cstring = None;
        *code = FireSpreadErrorCode::Ok;
    });
}

/// Track an error by setting it in thread-local storage and returning its code.
#[inline]
pub(crate) fn track_error(error: &impl FireSpreadError) -> FireSpreadErrorCode {
    set_last_error(error);
    error.code()
}

/// Record the outcome of an operation and convert it to an FFI error code.
pub(crate) fn track_result<E: FireSpreadError>(result: Result<(), E>) -> FireSpreadErrorCode {
    match result {
        Ok(()) => {
            clear_last_error();
            FireSpreadErrorCode::Ok
        }
        Err(error) => track_error(&error),
    }
}
