//! Outcomes of the per-frame entry point.

use ffx_core::ffi::{FFX_EOF, FFX_OK};
use ffx_core::FfxResult;

/// Whether a usable context exists after
/// [`ensure_context`](crate::FrameInterpolator::ensure_context).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextState {
    /// A context matching the requested configuration is live.
    Ready,
    /// The configuration changed. The old context is still alive and will be
    /// destroyed at the start of the next call; the host should drain GPU
    /// work that may reference it before calling again.
    PendingFlush,
}

/// Result of a successful [`dispatch`](crate::FrameInterpolator::dispatch).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Prepare and dispatch were recorded.
    Dispatched,
    /// Nothing was recorded; flush and retry the frame.
    ReconfigurationPending,
}

impl DispatchOutcome {
    /// Raw status for hosts that speak the engine's status codes.
    pub fn raw_status(self) -> i32 {
        match self {
            DispatchOutcome::Dispatched => FFX_OK,
            DispatchOutcome::ReconfigurationPending => FFX_EOF,
        }
    }
}

/// Collapse a dispatch result into a raw status code. Failures keep the
/// engine's original code.
pub fn status_code(result: &FfxResult<DispatchOutcome>) -> i32 {
    match result {
        Ok(outcome) => outcome.raw_status(),
        Err(err) => err.code(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ffx_core::ffi::FFX_ERROR_OUT_OF_MEMORY;
    use ffx_core::FfxError;

    #[test]
    fn raw_codes() {
        assert_eq!(status_code(&Ok(DispatchOutcome::Dispatched)), FFX_OK);
        assert_eq!(status_code(&Ok(DispatchOutcome::ReconfigurationPending)), FFX_EOF);
        assert_eq!(status_code(&Err(FfxError::OutOfMemory)), FFX_ERROR_OUT_OF_MEMORY);
    }
}
