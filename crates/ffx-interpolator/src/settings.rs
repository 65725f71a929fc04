//! Construction-time settings of a [`FrameInterpolator`](crate::FrameInterpolator).

use anyhow::{bail, Result};
use ffx_core::Dimensions2D;

/// Host-supplied settings fixed for the lifetime of an interpolator.
///
/// The max render size becomes both the maximum render size and the display
/// size of every context the interpolator creates; per-frame render and
/// output sizes may be smaller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterpolatorSettings {
    pub max_render_size: Dimensions2D,
    /// Effect context id used for every resource created on the shared
    /// backend (auxiliary and scratch resources).
    pub shared_effect_context_id: u32,
}

impl InterpolatorSettings {
    pub fn new(max_render_width: u32, max_render_height: u32) -> Self {
        Self {
            max_render_size: Dimensions2D::new(max_render_width, max_render_height),
            shared_effect_context_id: 0,
        }
    }

    pub fn with_shared_effect_context_id(mut self, id: u32) -> Self {
        self.shared_effect_context_id = id;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_render_size.is_empty() {
            bail!(
                "max render size must be non-zero, got {}x{}",
                self.max_render_size.width,
                self.max_render_size.height
            );
        }
        Ok(())
    }
}
