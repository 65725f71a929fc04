//! Engine failure codes.

use num_derive::FromPrimitive;
use num_traits::FromPrimitive;
use thiserror::Error;
use tracing::warn;

use crate::ffi::*;

/// A failure reported by the interpolation engine or one of its backends.
///
/// Each variant carries the engine's raw status code as its discriminant, so
/// codes survive a round trip through [`FfxError::code`] unchanged. `FFX_OK`
/// and `FFX_EOF` are not errors and have no variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, FromPrimitive)]
#[repr(i32)]
pub enum FfxError {
    #[error("invalid pointer")]
    InvalidPointer = FFX_ERROR_INVALID_POINTER,
    #[error("invalid alignment")]
    InvalidAlignment = FFX_ERROR_INVALID_ALIGNMENT,
    #[error("invalid size")]
    InvalidSize = FFX_ERROR_INVALID_SIZE,
    #[error("invalid path")]
    InvalidPath = FFX_ERROR_INVALID_PATH,
    #[error("unexpected end of file")]
    Eof = FFX_ERROR_EOF,
    #[error("malformed data")]
    MalformedData = FFX_ERROR_MALFORMED_DATA,
    #[error("out of memory")]
    OutOfMemory = FFX_ERROR_OUT_OF_MEMORY,
    #[error("backend interface is incomplete")]
    IncompleteInterface = FFX_ERROR_INCOMPLETE_INTERFACE,
    #[error("invalid enum value")]
    InvalidEnum = FFX_ERROR_INVALID_ENUM,
    #[error("invalid argument")]
    InvalidArgument = FFX_ERROR_INVALID_ARGUMENT,
    #[error("value out of range")]
    OutOfRange = FFX_ERROR_OUT_OF_RANGE,
    #[error("null device")]
    NullDevice = FFX_ERROR_NULL_DEVICE,
    #[error("backend API error")]
    BackendApiError = FFX_ERROR_BACKEND_API_ERROR,
    #[error("insufficient memory")]
    InsufficientMemory = FFX_ERROR_INSUFFICIENT_MEMORY,
}

impl FfxError {
    /// Convert a raw status code returned across the foreign boundary.
    ///
    /// `FFX_OK` maps to `Ok(())`. Codes this crate does not know (including
    /// `FFX_EOF`, which is a signal rather than a failure) are reported as
    /// [`FfxError::BackendApiError`].
    pub fn from_raw(code: i32) -> Result<(), FfxError> {
        if code == FFX_OK {
            return Ok(());
        }
        match FfxError::from_i32(code) {
            Some(err) => Err(err),
            None => {
                warn!("unrecognised engine status code {code:#010x}");
                Err(FfxError::BackendApiError)
            }
        }
    }

    /// The raw status code for this failure.
    pub fn code(self) -> i32 {
        self as i32
    }
}

/// Result alias used throughout the engine-facing crates.
pub type FfxResult<T> = Result<T, FfxError>;
