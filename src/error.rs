//! Error types for the xr-handle crate.

use thiserror::Error;

/// Result type alias for handle creation.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for a failing native call.
///
/// Destroy calls never produce one of these: their result is not surfaced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The runtime rejected the call's parameters.
    #[error("validation failure")]
    ValidationFailure,

    /// The runtime failed for an unspecified reason.
    #[error("runtime failure")]
    RuntimeFailure,

    /// Allocation failed.
    #[error("out of memory")]
    OutOfMemory,

    /// The requested API version is not supported by the runtime.
    #[error("API version unsupported")]
    ApiVersionUnsupported,

    /// The runtime could not be initialized.
    #[error("initialization failed")]
    InitializationFailed,

    /// The entry point is not supported by the runtime.
    #[error("function unsupported")]
    FunctionUnsupported,

    /// A required extension is not enabled or not present.
    #[error("extension not present")]
    ExtensionNotPresent,

    /// A runtime resource limit was hit.
    #[error("limit reached")]
    LimitReached,

    /// Handle is null, of the wrong kind, or already destroyed.
    #[error("invalid handle")]
    HandleInvalid,

    /// The instance was lost and must be recreated.
    #[error("instance lost")]
    InstanceLost,

    /// The session was lost and must be recreated.
    #[error("session lost")]
    SessionLost,

    /// No OpenXR runtime is available.
    #[error("runtime unavailable")]
    RuntimeUnavailable,

    /// Any other failing result code.
    #[error("unknown error: XrResult {0}")]
    Unknown(i32),
}

impl Error {
    /// Check if this is an invalid handle error.
    pub fn is_handle_invalid(&self) -> bool {
        matches!(self, Error::HandleInvalid)
    }

    /// Check if the owning instance or session was lost.
    pub fn is_lost(&self) -> bool {
        matches!(self, Error::InstanceLost | Error::SessionLost)
    }
}
