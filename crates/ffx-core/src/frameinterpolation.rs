//! Descriptor records consumed by the frame interpolation engine.
//!
//! A context is created from a [`ContextDescription`]. Every frame the host
//! fills one [`PrepareDescription`] (depth/motion-vector dilation) and one
//! [`DispatchDescription`] (the interpolation itself); both reference the
//! same three shared resources described by [`SharedResourceDescriptions`].

use std::ffi::c_void;
use std::ops::{BitOr, BitOrAssign};

use crate::ffi::*;
use crate::resource::{
    CreateResourceDescription, Dimensions2D, FloatCoords2D, Rect2D, Resource, SurfaceFormat,
};

/// Opaque handle of the command list being recorded into this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandList(pub *mut c_void);

impl CommandList {
    pub fn null() -> Self {
        Self(std::ptr::null_mut())
    }

    pub fn is_null(&self) -> bool {
        self.0.is_null()
    }
}

impl Default for CommandList {
    fn default() -> Self {
        Self::null()
    }
}

/// Context creation flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ContextFlags(u32);

impl ContextFlags {
    pub const NONE: Self = Self(0);
    pub const DEPTH_INVERTED: Self = Self(FFX_FRAMEINTERPOLATION_ENABLE_DEPTH_INVERTED);
    pub const DEPTH_INFINITE: Self = Self(FFX_FRAMEINTERPOLATION_ENABLE_DEPTH_INFINITE);
    pub const HDR_COLOR_INPUT: Self = Self(FFX_FRAMEINTERPOLATION_ENABLE_HDR_COLOR_INPUT);
    pub const DISPLAY_RESOLUTION_MOTION_VECTORS: Self =
        Self(FFX_FRAMEINTERPOLATION_ENABLE_DISPLAY_RESOLUTION_MOTION_VECTORS);
    pub const JITTER_MOTION_VECTORS: Self = Self(FFX_FRAMEINTERPOLATION_ENABLE_JITTER_MOTION_VECTORS);
    pub const ASYNC_SUPPORT: Self = Self(FFX_FRAMEINTERPOLATION_ENABLE_ASYNC_SUPPORT);

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Set `flag` when `enabled` is true.
    pub fn set(&mut self, flag: Self, enabled: bool) {
        if enabled {
            self.0 |= flag.0;
        } else {
            self.0 &= !flag.0;
        }
    }
}

impl BitOr for ContextFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for ContextFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

/// Per-dispatch debug flags. Shared by prepare and dispatch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DispatchFlags(u32);

impl DispatchFlags {
    pub const NONE: Self = Self(0);
    pub const DRAW_DEBUG_TEAR_LINES: Self = Self(FFX_FRAMEINTERPOLATION_DISPATCH_DRAW_DEBUG_TEAR_LINES);
    pub const DRAW_DEBUG_RESET_INDICATORS: Self =
        Self(FFX_FRAMEINTERPOLATION_DISPATCH_DRAW_DEBUG_RESET_INDICATORS);
    pub const DRAW_DEBUG_VIEW: Self = Self(FFX_FRAMEINTERPOLATION_DISPATCH_DRAW_DEBUG_VIEW);

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn set(&mut self, flag: Self, enabled: bool) {
        if enabled {
            self.0 |= flag.0;
        } else {
            self.0 &= !flag.0;
        }
    }
}

impl BitOr for DispatchFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for DispatchFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

/// Transfer function of the back buffer being interpolated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum BackBufferTransferFunction {
    #[default]
    Srgb = FFX_BACKBUFFER_TRANSFER_FUNCTION_SRGB,
    Pq = FFX_BACKBUFFER_TRANSFER_FUNCTION_PQ,
    Scrgb = FFX_BACKBUFFER_TRANSFER_FUNCTION_SCRGB,
}

/// Immutable configuration of one interpolation context.
///
/// Equality is structural; any difference in any field requires a new
/// context.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ContextDescription {
    pub flags: ContextFlags,
    pub max_render_size: Dimensions2D,
    pub display_size: Dimensions2D,
    pub back_buffer_format: SurfaceFormat,
    pub previous_interpolation_source_format: SurfaceFormat,
}

/// Creation parameters for the three resources shared between prepare and
/// dispatch, as reported by a live context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharedResourceDescriptions {
    pub dilated_depth: CreateResourceDescription,
    pub dilated_motion_vectors: CreateResourceDescription,
    pub reconstructed_prev_nearest_depth: CreateResourceDescription,
}

/// Input of the prepare pass (depth and motion-vector dilation).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PrepareDescription {
    pub flags: DispatchFlags,
    pub command_list: CommandList,
    pub render_size: Dimensions2D,
    pub jitter_offset: FloatCoords2D,
    pub motion_vector_scale: FloatCoords2D,

    pub frame_time_delta: f32,
    pub camera_near: f32,
    pub camera_far: f32,
    pub view_space_to_meters_factor: f32,
    pub camera_fov_angle_vertical: f32,

    pub depth: Resource,
    pub motion_vectors: Resource,

    pub frame_id: u64,

    pub dilated_depth: Resource,
    pub dilated_motion_vectors: Resource,
    pub reconstructed_prev_depth: Resource,
}

/// Input of the interpolation dispatch.
///
/// Optional inputs are `None` when absent; the engine substitutes its own
/// defaults for them.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DispatchDescription {
    pub flags: DispatchFlags,
    pub command_list: CommandList,
    pub display_size: Dimensions2D,
    pub render_size: Dimensions2D,

    pub current_back_buffer: Resource,
    pub current_back_buffer_hudless: Option<Resource>,
    pub output: Resource,

    pub interpolation_rect: Rect2D,

    pub optical_flow_vector: Option<Resource>,
    pub optical_flow_scene_change_detection: Option<Resource>,
    /// Legacy field; the engine no longer reads it.
    pub optical_flow_buffer_size: Dimensions2D,
    pub optical_flow_scale: FloatCoords2D,
    pub optical_flow_block_size: i32,

    pub camera_near: f32,
    pub camera_far: f32,
    pub camera_fov_angle_vertical: f32,
    pub view_space_to_meters_factor: f32,

    pub frame_time_delta: f32,
    pub reset: bool,

    pub back_buffer_transfer_function: BackBufferTransferFunction,
    pub min_max_luminance: [f32; 2],

    pub frame_id: u64,

    pub dilated_depth: Resource,
    pub dilated_motion_vectors: Resource,
    pub reconstructed_prev_depth: Resource,
    pub distortion_field: Option<Resource>,
}

/// Engine revision as `major.minor.patch`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EngineVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl EngineVersion {
    /// The revision whose private context layout this workspace relies on.
    pub const PINNED: Self = Self {
        major: FFX_FRAMEINTERPOLATION_VERSION_MAJOR,
        minor: FFX_FRAMEINTERPOLATION_VERSION_MINOR,
        patch: FFX_FRAMEINTERPOLATION_VERSION_PATCH,
    };

    /// Layouts only change between minor revisions.
    pub fn is_layout_compatible(&self, other: &Self) -> bool {
        self.major == other.major && self.minor == other.minor
    }
}

impl std::fmt::Display for EngineVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Slots of the engine-private context resource tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum ResourceIdentifier {
    DistortionField = FFX_FRAMEINTERPOLATION_RESOURCE_IDENTIFIER_DISTORTION_FIELD,
    DefaultDistortionField = FFX_FRAMEINTERPOLATION_RESOURCE_IDENTIFIER_DEFAULT_DISTORTION_FIELD,
}

impl ResourceIdentifier {
    pub const fn id(self) -> u32 {
        self as u32
    }
}
