//! Translation of [`DispatchParameters`] into the engine's prepare and
//! dispatch descriptors.

use ffx_backend::{BackendInterface, ContextPrivate};
use ffx_core::{
    BackBufferTransferFunction, DispatchDescription, DispatchFlags, FfxError, FfxResult,
    PrepareDescription, Rect2D, Resource, ResourceState,
};
use tracing::{debug, trace};

use crate::interpolator::FrameInterpolator;
use crate::params::{present, DispatchParameters};

/// Frame time handed to the engine. The engine ignores it.
const ASSUMED_FRAME_TIME_MS: f32 = 1000.0 / 60.0;

const VIEW_SPACE_TO_METERS_FACTOR: f32 = 1.0;

/// No async or bindless pipelining, so every frame uses the same id.
const FRAME_ID: u64 = 0;

impl<E, B> FrameInterpolator<E, B>
where
    E: ContextPrivate,
    B: BackendInterface,
{
    /// Build the prepare and dispatch descriptors for one frame.
    ///
    /// Requires a live context; fails with [`FfxError::InvalidPointer`]
    /// otherwise. May record a GPU copy into `params.command_list` when the
    /// HUD-less input needs a format fixup.
    pub fn build_descriptors(
        &mut self,
        params: &DispatchParameters,
    ) -> FfxResult<(PrepareDescription, DispatchDescription)> {
        if self.context.is_none() {
            return Err(FfxError::InvalidPointer);
        }
        let aux = self
            .auxiliary
            .views(&self.shared)
            .ok_or(FfxError::InvalidPointer)?;

        let mut flags = DispatchFlags::NONE;
        flags.set(DispatchFlags::DRAW_DEBUG_TEAR_LINES, params.debug_tear_lines);
        flags.set(DispatchFlags::DRAW_DEBUG_VIEW, params.debug_view);

        let back_buffer_transfer_function = if params.hdr {
            BackBufferTransferFunction::Pq
        } else {
            BackBufferTransferFunction::Srgb
        };

        let current_back_buffer_hudless = self.compatible_hudless(params);

        let dispatch = DispatchDescription {
            flags,
            command_list: params.command_list,
            display_size: params.output_size,
            render_size: params.render_size,
            current_back_buffer: params.input_color_buffer,
            current_back_buffer_hudless,
            output: params.output_interpolated_color_buffer,
            interpolation_rect: Rect2D::covering(params.output_size),
            optical_flow_vector: present(params.input_optical_flow_vector),
            optical_flow_scene_change_detection: present(
                params.input_optical_flow_scene_change_detection,
            ),
            // Not read by the engine; left at its default.
            optical_flow_buffer_size: Default::default(),
            optical_flow_scale: params.optical_flow_scale,
            optical_flow_block_size: params.optical_flow_block_size,
            camera_near: params.camera_near,
            camera_far: params.camera_far,
            camera_fov_angle_vertical: params.camera_fov_angle_vertical,
            view_space_to_meters_factor: VIEW_SPACE_TO_METERS_FACTOR,
            frame_time_delta: ASSUMED_FRAME_TIME_MS,
            reset: params.reset,
            back_buffer_transfer_function,
            min_max_luminance: [params.min_max_luminance.x, params.min_max_luminance.y],
            frame_id: FRAME_ID,
            dilated_depth: aux.dilated_depth,
            dilated_motion_vectors: aux.dilated_motion_vectors,
            reconstructed_prev_depth: aux.reconstructed_prev_depth,
            distortion_field: present(params.input_distortion_field),
        };

        let prepare = PrepareDescription {
            flags: dispatch.flags,
            command_list: dispatch.command_list,
            render_size: dispatch.render_size,
            jitter_offset: params.motion_vector_jitter_offsets,
            motion_vector_scale: params.motion_vector_scale,
            frame_time_delta: dispatch.frame_time_delta,
            camera_near: dispatch.camera_near,
            camera_far: dispatch.camera_far,
            view_space_to_meters_factor: VIEW_SPACE_TO_METERS_FACTOR,
            camera_fov_angle_vertical: dispatch.camera_fov_angle_vertical,
            depth: params.input_depth,
            motion_vectors: params.input_motion_vectors,
            frame_id: dispatch.frame_id,
            dilated_depth: aux.dilated_depth,
            dilated_motion_vectors: aux.dilated_motion_vectors,
            reconstructed_prev_depth: aux.reconstructed_prev_depth,
        };

        Ok((prepare, dispatch))
    }

    /// The HUD-less input to hand to the engine, never in a format different
    /// from the primary color buffer.
    fn compatible_hudless(&mut self, params: &DispatchParameters) -> Option<Resource> {
        let hudless = params.hudless_color()?;
        let color = &params.input_color_buffer;
        if hudless.description.format == color.description.format {
            return Some(hudless);
        }

        trace!(
            hudless = ?hudless.description.format,
            color = ?color.description.format,
            "HUD-less format mismatch"
        );

        let Some(copy_texture) = self.copy_texture.as_mut() else {
            debug!("no copy function configured, dropping mismatched HUD-less input");
            return None;
        };
        let Some(scratch) = self.hudless_compatible.acquire(
            &mut self.shared,
            color.description.format,
            params.output_size,
            self.settings.shared_effect_context_id,
        ) else {
            debug!("no HUD-less compatible buffer, dropping mismatched HUD-less input");
            return None;
        };

        copy_texture(params.command_list, &scratch, &hudless);
        Some(scratch.with_state(ResourceState::ComputeRead))
    }

    /// Overwrite the engine's dilated motion vectors with the host's, which
    /// are already dilated. Runs after prepare and before dispatch.
    pub(crate) fn override_dilated_motion_vectors(
        &mut self,
        params: &DispatchParameters,
        prepare: &PrepareDescription,
    ) {
        if !params.motion_vectors_dilated {
            return;
        }
        let Some(copy_texture) = self.copy_texture.as_mut() else {
            debug!("no copy function configured, keeping engine-dilated motion vectors");
            return;
        };
        let destination = prepare
            .dilated_motion_vectors
            .with_state(ResourceState::UnorderedAccess);
        copy_texture(params.command_list, &destination, &params.input_motion_vectors);
    }
}
