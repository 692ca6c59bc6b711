use fire_spread_core::RothermelError;
use std::cell::RefCell;
use std::ffi::CString;
use std::os::raw::c_char;
use std::ptr;

/// Common interface for FFI error types.
///
/// - `code()` - Returns the error code to be passed across FFI boundary
/// - `msg()` - Returns the error message for diagnostic purposes
pub(crate) trait FireSpreadError {
    /// Returns the error code to be returned across the FFI boundary.
    fn code(&self) -> FireSpreadErrorCode;

    /// Returns the human-readable error message.
    fn msg(&self) -> &str;
}

/// Default implementation of `FireSpreadError` for the FFI error scenarios.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DefaultFireSpreadError {
    code: FireSpreadErrorCode,
    msg: String,
}

impl DefaultFireSpreadError {
    /// Create error for null pointer passed where non-null required.
    ///
    /// # Arguments
    /// * `param_name` - The name of the parameter that was null (e.g., `"input"`, `"out_rate"`)
    pub fn null_pointer(param_name: &str) -> Self {
        Self {
            code: FireSpreadErrorCode::NullPointer,
            msg: format!("Parameter '{param_name}' cannot be null"),
        }
    }

    /// Create error for an input rejected by the spread evaluator.
    pub fn invalid_parameter(error: &RothermelError) -> Self {
        Self {
            code: FireSpreadErrorCode::InvalidParameter,
            msg: error.to_string(),
        }
    }

    /// Create error for valid inputs whose rate of spread is NaN or infinite.
    pub fn non_finite_result(error: &RothermelError) -> Self {
        Self {
            code: FireSpreadErrorCode::NonFiniteResult,
            msg: error.to_string(),
        }
    }
}

impl From<RothermelError> for DefaultFireSpreadError {
    fn from(error: RothermelError) -> Self {
        match error {
            RothermelError::InvalidInput { .. } => Self::invalid_parameter(&error),
            RothermelError::NonFiniteResult { .. } => Self::non_finite_result(&error),
        }
    }
}

impl FireSpreadError for DefaultFireSpreadError {
    fn code(&self) -> FireSpreadErrorCode {
        self.code
    }

    fn msg(&self) -> &str {
        &self.msg
    }
}

/// FFI error codes returned by fire spread functions.
/// Follows standard C convention: 0 = success, non-zero = error.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FireSpreadErrorCode {
    /// Operation completed successfully.
    Ok = 0,

    /// Invalid pointer: null pointer passed where non-null required.
    NullPointer = 1,

    /// Invalid parameter: an input is outside the domain of the spread equation
    /// (non-finite, or not positive where the equation divides by it).
    InvalidParameter = 2,

    /// Every input was accepted but the rate of spread overflowed or
    /// underflowed to NaN or infinity.
    NonFiniteResult = 3,
}

impl From<DefaultFireSpreadError> for FireSpreadErrorCode {
    fn from(error: DefaultFireSpreadError) -> Self {
        error.code
    }
}

thread_local! {
    /// Thread-local storage for the most recent FFI error (C string, error code).
    /// The CString is stored so the pointer handed to C stays valid until the next call.
    static LAST_ERROR: RefCell<(Option<CString>, FireSpreadErrorCode)> = const { RefCell::new((None, FireSpreadErrorCode::Ok)) };
}

/// Internal helper to read `LAST_ERROR` thread-local storage (cstring, code).
pub(crate) fn with_last_error<F, R>(f: F) -> R
where
    F: FnOnce(&(Option<CString>, FireSpreadErrorCode)) -> R,
{
    LAST_ERROR.with_borrow(f)
}

/// Internal helper to mutate `LAST_ERROR` thread-local storage (cstring, code).
pub(crate) fn with_last_error_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut (Option<CString>, FireSpreadErrorCode)) -> R,
{
    LAST_ERROR.with_borrow_mut(f)
}

/// Retrieve the most recent FFI error message as a null-terminated C string.
///
/// Returns:
/// - A borrowed pointer to the error message if the last call on this thread failed.
/// - `null` if the last call succeeded.
///
/// # Thread Safety
/// Error messages are stored per-thread, so each thread sees only its own failures.
///
/// # Lifetime
/// The returned pointer is valid until the next FFI call on this thread.
///
/// **DO NOT FREE THIS POINTER** - it is managed internally.
///
/// Example:
/// ```c
/// double ros = 0.0;
/// if (fire_spread_rate_of_spread(&input, &ros) != Ok) {
///     const char* error = fire_spread_get_last_error();
///     if (error) {
///         printf("Rate of spread failed: %s\n", error);
///     }
/// }
/// ```
#[no_mangle]
pub extern "C" fn fire_spread_get_last_error() -> *const c_char {
    with_last_error(|(cstring, _code)| cstring.as_ref().map_or(ptr::null(), |cs| cs.as_ptr()))
}

/// Retrieve the most recent FFI error code.
///
/// Returns:
/// - `FireSpreadErrorCode::Ok` (0) if the last call on this thread succeeded
/// - The specific error code from the last failed operation
#[no_mangle]
pub extern "C" fn fire_spread_get_last_error_code() -> FireSpreadErrorCode {
    with_last_error(|(_cstring, code)| *code)
}
