//! Context creation, reuse and teardown.
//!
//! A context is reused only while the requested [`ContextDescription`] is
//! structurally equal to the one it was created from. A change is never
//! applied inline: the first call that sees it reports
//! [`ContextState::PendingFlush`], and the next call destroys and recreates.

use ffx_backend::{BackendInterface, ContextPrivate};
use ffx_core::{ContextDescription, FfxResult};
use tracing::{debug, error, info, warn};

use crate::distortion::override_default_distortion_field;
use crate::interpolator::FrameInterpolator;
use crate::params::DispatchParameters;
use crate::status::ContextState;

impl<E, B> FrameInterpolator<E, B>
where
    E: ContextPrivate,
    B: BackendInterface,
{
    /// The context configuration this frame asks for.
    pub fn describe_context(&self, params: &DispatchParameters) -> ContextDescription {
        let back_buffer_format = params.input_color_buffer.description.format;
        ContextDescription {
            flags: params.context_flags(),
            max_render_size: self.settings.max_render_size,
            display_size: self.settings.max_render_size,
            back_buffer_format,
            previous_interpolation_source_format: back_buffer_format,
        }
    }

    /// Make sure a context matching `params` exists.
    ///
    /// Applies a deferred teardown first if the previous call reported a
    /// configuration change. Any failure while building a new context tears
    /// down everything built so far and returns the original error.
    pub fn ensure_context(&mut self, params: &DispatchParameters) -> FfxResult<ContextState> {
        let desc = self.describe_context(params);

        if std::mem::take(&mut self.flush_pending) {
            debug!("applying deferred context teardown");
            self.destroy_context();
        }

        if self.context.is_some() {
            if desc == self.context_description {
                return Ok(ContextState::Ready);
            }
            info!(
                old = ?self.context_description,
                new = ?desc,
                "context configuration changed, requesting flush"
            );
            self.flush_pending = true;
            return Ok(ContextState::PendingFlush);
        }

        self.create_context(desc)?;
        Ok(ContextState::Ready)
    }

    fn create_context(&mut self, desc: ContextDescription) -> FfxResult<()> {
        info!(
            width = desc.max_render_size.width,
            height = desc.max_render_size.height,
            format = ?desc.back_buffer_format,
            flags = desc.flags.bits(),
            "creating frame interpolation context"
        );

        let mut context = self.engine.create_context(&desc).map_err(|err| {
            error!(%err, "frame interpolation context creation failed");
            err
        })?;

        override_default_distortion_field(&mut self.engine, &mut context);

        self.context_description = desc;
        self.context = Some(context);

        if let Err(err) = self.allocate_auxiliary() {
            error!(%err, "auxiliary resource allocation failed, tearing down context");
            self.destroy_context();
            return Err(err);
        }
        debug_assert!(self.auxiliary.is_allocated());
        Ok(())
    }

    fn allocate_auxiliary(&mut self) -> FfxResult<()> {
        let Some(context) = self.context.as_ref() else {
            return Ok(());
        };
        let descs = self.engine.shared_resource_descriptions(context)?;
        self.auxiliary.allocate(
            &mut self.shared,
            &descs,
            self.settings.shared_effect_context_id,
        )
    }

    /// Destroy the context and every resource this interpolator owns.
    ///
    /// Safe to call at any time, including when nothing was ever created.
    /// The host must ensure no in-flight GPU work still uses them.
    pub fn destroy_context(&mut self) {
        if let Some(mut context) = self.context.take() {
            info!("destroying frame interpolation context");
            if let Err(err) = self.engine.destroy_context(&mut context) {
                warn!(%err, "engine reported an error while destroying its context");
            }
        }

        let id = self.settings.shared_effect_context_id;
        self.auxiliary.release(&mut self.shared, id);
        self.hudless_compatible.release(&mut self.shared, id);

        self.context_description = ContextDescription::default();
        self.flush_pending = false;
    }
}
