//! The context manager and its per-frame entry point.

use anyhow::Result;
use ffx_backend::{BackendInterface, ContextPrivate, CopyTextureFn};
use ffx_core::{ContextDescription, FfxError, FfxResult};
use tracing::debug;

use crate::params::DispatchParameters;
use crate::resources::{AuxiliaryResources, ScratchColor};
use crate::settings::InterpolatorSettings;
use crate::status::{ContextState, DispatchOutcome};

/// Owns one frame interpolation context plus the GPU resources it needs
/// across frames, and drives the engine once per frame.
///
/// `E` is the engine (which owns its own backend); `B` is the shared backend
/// on which the auxiliary and scratch resources are created so that a
/// sibling effect on the same effect context can see them.
///
/// Not thread-safe: call from the thread recording the frame's command list.
pub struct FrameInterpolator<E, B>
where
    E: ContextPrivate,
    B: BackendInterface,
{
    pub(crate) settings: InterpolatorSettings,
    pub(crate) engine: E,
    pub(crate) shared: B,
    pub(crate) copy_texture: Option<CopyTextureFn>,

    pub(crate) context_description: ContextDescription,
    pub(crate) context: Option<E::Context>,
    pub(crate) flush_pending: bool,

    pub(crate) auxiliary: AuxiliaryResources,
    pub(crate) hudless_compatible: ScratchColor,
}

impl<E, B> FrameInterpolator<E, B>
where
    E: ContextPrivate,
    B: BackendInterface,
{
    /// Create an interpolator. No GPU work happens until the first
    /// [`dispatch`](Self::dispatch).
    pub fn new(
        settings: InterpolatorSettings,
        engine: E,
        shared: B,
        copy_texture: Option<CopyTextureFn>,
    ) -> Result<Self> {
        settings.validate()?;
        Ok(Self {
            settings,
            engine,
            shared,
            copy_texture,
            context_description: ContextDescription::default(),
            context: None,
            flush_pending: false,
            auxiliary: AuxiliaryResources::new(),
            hudless_compatible: ScratchColor::new(),
        })
    }

    /// Record interpolation of one frame.
    ///
    /// The first call, and the call after a configuration change was
    /// reported, creates the engine context; expect a multi-millisecond
    /// stall on those frames.
    ///
    /// Returns [`DispatchOutcome::ReconfigurationPending`] when the
    /// configuration changed: nothing was recorded, and the host must make
    /// sure no in-flight GPU work references the old context before calling
    /// again.
    pub fn dispatch(&mut self, params: &DispatchParameters) -> FfxResult<DispatchOutcome> {
        if self.ensure_context(params)? == ContextState::PendingFlush {
            return Ok(DispatchOutcome::ReconfigurationPending);
        }

        let (prepare, dispatch) = self.build_descriptors(params)?;

        let context = self.context.as_mut().ok_or(FfxError::InvalidPointer)?;
        self.engine.prepare(context, &prepare)?;

        // Must land between prepare and dispatch.
        self.override_dilated_motion_vectors(params, &prepare);

        let context = self.context.as_mut().ok_or(FfxError::InvalidPointer)?;
        self.engine.dispatch(context, &dispatch)?;

        debug!(
            width = dispatch.display_size.width,
            height = dispatch.display_size.height,
            "frame interpolation dispatched"
        );
        Ok(DispatchOutcome::Dispatched)
    }

    pub fn settings(&self) -> &InterpolatorSettings {
        &self.settings
    }

    /// True while an engine context is alive.
    pub fn has_context(&self) -> bool {
        self.context.is_some()
    }

    /// True between a reported configuration change and the next call.
    pub fn is_flush_pending(&self) -> bool {
        self.flush_pending
    }

    /// True while the HUD-less scratch color buffer exists.
    pub fn has_hudless_scratch(&self) -> bool {
        self.hudless_compatible.is_allocated()
    }

    /// Configuration of the live context, if any.
    pub fn context_description(&self) -> Option<&ContextDescription> {
        self.context.as_ref().map(|_| &self.context_description)
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn shared_backend(&self) -> &B {
        &self.shared
    }
}

impl<E, B> Drop for FrameInterpolator<E, B>
where
    E: ContextPrivate,
    B: BackendInterface,
{
    fn drop(&mut self) {
        self.destroy_context();
    }
}
