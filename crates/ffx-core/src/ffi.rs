//! Hardcoded FidelityFX frame interpolation constants.
//!
//! Values are sourced from the SDK host headers (`ffx_error.h`, `ffx_types.h`,
//! `ffx_frameinterpolation.h`) and the private context layout of the pinned
//! engine revision. Typed wrappers live in the sibling modules; this module
//! only holds the raw numbers that cross the foreign boundary.

#![allow(dead_code)]

// =====================================================================
// Status codes (ffx_error.h)
// =====================================================================
pub const FFX_OK: i32 = 0;
pub const FFX_ERROR_INVALID_POINTER: i32 = 0x8000_0000_u32 as i32;
pub const FFX_ERROR_INVALID_ALIGNMENT: i32 = 0x8000_0001_u32 as i32;
pub const FFX_ERROR_INVALID_SIZE: i32 = 0x8000_0002_u32 as i32;
pub const FFX_EOF: i32 = 0x8000_0003_u32 as i32;
pub const FFX_ERROR_INVALID_PATH: i32 = 0x8000_0004_u32 as i32;
pub const FFX_ERROR_EOF: i32 = 0x8000_0005_u32 as i32;
pub const FFX_ERROR_MALFORMED_DATA: i32 = 0x8000_0006_u32 as i32;
pub const FFX_ERROR_OUT_OF_MEMORY: i32 = 0x8000_0007_u32 as i32;
pub const FFX_ERROR_INCOMPLETE_INTERFACE: i32 = 0x8000_0008_u32 as i32;
pub const FFX_ERROR_INVALID_ENUM: i32 = 0x8000_0009_u32 as i32;
pub const FFX_ERROR_INVALID_ARGUMENT: i32 = 0x8000_000a_u32 as i32;
pub const FFX_ERROR_OUT_OF_RANGE: i32 = 0x8000_000b_u32 as i32;
pub const FFX_ERROR_NULL_DEVICE: i32 = 0x8000_000c_u32 as i32;
pub const FFX_ERROR_BACKEND_API_ERROR: i32 = 0x8000_000d_u32 as i32;
pub const FFX_ERROR_INSUFFICIENT_MEMORY: i32 = 0x8000_000e_u32 as i32;

// =====================================================================
// Resource states (ffx_types.h)
// =====================================================================
pub const FFX_RESOURCE_STATE_COMMON: u32 = 0;
pub const FFX_RESOURCE_STATE_UNORDERED_ACCESS: u32 = 1 << 0;
pub const FFX_RESOURCE_STATE_COMPUTE_READ: u32 = 1 << 1;
pub const FFX_RESOURCE_STATE_PIXEL_READ: u32 = 1 << 2;
pub const FFX_RESOURCE_STATE_COPY_SRC: u32 = 1 << 3;
pub const FFX_RESOURCE_STATE_COPY_DEST: u32 = 1 << 4;
pub const FFX_RESOURCE_STATE_PRESENT: u32 = 1 << 7;

// =====================================================================
// Frame interpolation context creation flags
// =====================================================================
pub const FFX_FRAMEINTERPOLATION_ENABLE_DEPTH_INVERTED: u32 = 1 << 0;
pub const FFX_FRAMEINTERPOLATION_ENABLE_DEPTH_INFINITE: u32 = 1 << 1;
pub const FFX_FRAMEINTERPOLATION_ENABLE_TEXTURE1D_USAGE: u32 = 1 << 2;
pub const FFX_FRAMEINTERPOLATION_ENABLE_HDR_COLOR_INPUT: u32 = 1 << 3;
pub const FFX_FRAMEINTERPOLATION_ENABLE_DISPLAY_RESOLUTION_MOTION_VECTORS: u32 = 1 << 4;
pub const FFX_FRAMEINTERPOLATION_ENABLE_JITTER_MOTION_VECTORS: u32 = 1 << 5;
pub const FFX_FRAMEINTERPOLATION_ENABLE_ASYNC_SUPPORT: u32 = 1 << 6;

// =====================================================================
// Frame interpolation dispatch flags
// =====================================================================
pub const FFX_FRAMEINTERPOLATION_DISPATCH_DRAW_DEBUG_TEAR_LINES: u32 = 1 << 0;
pub const FFX_FRAMEINTERPOLATION_DISPATCH_DRAW_DEBUG_RESET_INDICATORS: u32 = 1 << 1;
pub const FFX_FRAMEINTERPOLATION_DISPATCH_DRAW_DEBUG_VIEW: u32 = 1 << 2;

// =====================================================================
// Back buffer transfer functions
// =====================================================================
pub const FFX_BACKBUFFER_TRANSFER_FUNCTION_SRGB: u32 = 0;
pub const FFX_BACKBUFFER_TRANSFER_FUNCTION_PQ: u32 = 1;
pub const FFX_BACKBUFFER_TRANSFER_FUNCTION_SCRGB: u32 = 2;

// =====================================================================
// Private context layout (ffx_frameinterpolation_private.h)
// =====================================================================

/// Slot the engine reads the active distortion field from.
pub const FFX_FRAMEINTERPOLATION_RESOURCE_IDENTIFIER_DISTORTION_FIELD: u32 = 47;
/// Slot holding the engine-created placeholder distortion field.
pub const FFX_FRAMEINTERPOLATION_RESOURCE_IDENTIFIER_DEFAULT_DISTORTION_FIELD: u32 = 48;
/// Number of SRV/UAV slots in the private context.
pub const FFX_FRAMEINTERPOLATION_RESOURCE_IDENTIFIER_COUNT: u32 = 49;

/// Engine revision whose private layout the constants above describe.
pub const FFX_FRAMEINTERPOLATION_VERSION_MAJOR: u32 = 1;
pub const FFX_FRAMEINTERPOLATION_VERSION_MINOR: u32 = 1;
pub const FFX_FRAMEINTERPOLATION_VERSION_PATCH: u32 = 3;

const _: () = assert!(
    FFX_FRAMEINTERPOLATION_RESOURCE_IDENTIFIER_DISTORTION_FIELD
        < FFX_FRAMEINTERPOLATION_RESOURCE_IDENTIFIER_COUNT
);
const _: () = assert!(
    FFX_FRAMEINTERPOLATION_RESOURCE_IDENTIFIER_DEFAULT_DISTORTION_FIELD
        < FFX_FRAMEINTERPOLATION_RESOURCE_IDENTIFIER_COUNT
);
const _: () = assert!(
    FFX_FRAMEINTERPOLATION_RESOURCE_IDENTIFIER_DISTORTION_FIELD
        != FFX_FRAMEINTERPOLATION_RESOURCE_IDENTIFIER_DEFAULT_DISTORTION_FIELD
);
