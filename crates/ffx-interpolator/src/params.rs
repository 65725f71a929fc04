//! Per-frame input record supplied by the host.

use ffx_core::{CommandList, ContextFlags, Dimensions2D, FloatCoords2D, Resource};

/// Everything the host provides for one interpolated frame.
///
/// Input resources stay owned by the host. Optional inputs are `None` (or a
/// view with a null native pointer) when the host has nothing to supply.
#[derive(Debug, Clone, Copy, Default)]
pub struct DispatchParameters {
    pub command_list: CommandList,

    pub render_size: Dimensions2D,
    pub output_size: Dimensions2D,

    pub input_color_buffer: Resource,
    pub input_hudless_color_buffer: Option<Resource>,
    pub input_depth: Resource,
    pub input_motion_vectors: Resource,
    pub input_distortion_field: Option<Resource>,

    pub input_optical_flow_vector: Option<Resource>,
    pub input_optical_flow_scene_change_detection: Option<Resource>,
    pub optical_flow_scale: FloatCoords2D,
    pub optical_flow_block_size: i32,

    pub output_interpolated_color_buffer: Resource,

    pub motion_vectors_full_resolution: bool,
    pub motion_vector_jitter_cancellation: bool,
    /// The host's motion vectors are already dilated; they replace the
    /// engine's own dilation for this frame.
    pub motion_vectors_dilated: bool,

    pub motion_vector_scale: FloatCoords2D,
    pub motion_vector_jitter_offsets: FloatCoords2D,

    pub hdr: bool,
    pub depth_inverted: bool,
    pub depth_plane_infinite: bool,
    pub reset: bool,
    pub debug_tear_lines: bool,
    pub debug_view: bool,

    pub camera_near: f32,
    pub camera_far: f32,
    pub camera_fov_angle_vertical: f32,
    pub min_max_luminance: FloatCoords2D,
}

impl DispatchParameters {
    /// Context creation flags implied by this frame's inputs.
    pub fn context_flags(&self) -> ContextFlags {
        let mut flags = ContextFlags::NONE;
        flags.set(ContextFlags::DEPTH_INVERTED, self.depth_inverted);
        flags.set(ContextFlags::DEPTH_INFINITE, self.depth_plane_infinite);
        flags.set(ContextFlags::HDR_COLOR_INPUT, self.hdr);
        flags.set(
            ContextFlags::DISPLAY_RESOLUTION_MOTION_VECTORS,
            self.motion_vectors_full_resolution,
        );
        flags.set(
            ContextFlags::JITTER_MOTION_VECTORS,
            self.motion_vector_jitter_cancellation,
        );
        flags
    }

    /// The HUD-less color input, if one was actually supplied.
    pub fn hudless_color(&self) -> Option<Resource> {
        present(self.input_hudless_color_buffer)
    }
}

/// Treat a null native pointer the same as an absent input.
pub(crate) fn present(resource: Option<Resource>) -> Option<Resource> {
    resource.filter(|r| !r.is_null())
}
