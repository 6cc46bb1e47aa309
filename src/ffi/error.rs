//! Error conversion utilities for FFI.

use super::raw::XrResult;
use crate::error::Error;

/// Convert a failing XrResult to a Rust Error.
///
/// Success codes have no error counterpart and map to `Error::Unknown`;
/// callers should go through [`check_result`].
pub fn error_from_result(result: XrResult) -> Error {
    match result {
        XrResult::ERROR_VALIDATION_FAILURE => Error::ValidationFailure,
        XrResult::ERROR_RUNTIME_FAILURE => Error::RuntimeFailure,
        XrResult::ERROR_OUT_OF_MEMORY => Error::OutOfMemory,
        XrResult::ERROR_API_VERSION_UNSUPPORTED => Error::ApiVersionUnsupported,
        XrResult::ERROR_INITIALIZATION_FAILED => Error::InitializationFailed,
        XrResult::ERROR_FUNCTION_UNSUPPORTED => Error::FunctionUnsupported,
        XrResult::ERROR_EXTENSION_NOT_PRESENT => Error::ExtensionNotPresent,
        XrResult::ERROR_LIMIT_REACHED => Error::LimitReached,
        XrResult::ERROR_HANDLE_INVALID => Error::HandleInvalid,
        XrResult::ERROR_INSTANCE_LOST => Error::InstanceLost,
        XrResult::ERROR_SESSION_LOST => Error::SessionLost,
        XrResult::ERROR_RUNTIME_UNAVAILABLE => Error::RuntimeUnavailable,
        other => Error::Unknown(other.into_raw()),
    }
}

/// Check a result code and convert to Result.
pub fn check_result(result: XrResult) -> crate::Result<()> {
    if result.succeeded() {
        Ok(())
    } else {
        Err(error_from_result(result))
    }
}
