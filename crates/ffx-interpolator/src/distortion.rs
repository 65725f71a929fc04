//! Replacement of the engine's placeholder distortion field.
//!
//! A fresh context binds a 1x1 `R8G8B8A8_UNORM` texture as its default
//! distortion field. Hosts feed signed displacement, so until a real field is
//! supplied the engine would read the placeholder through the wrong encoding.
//! This swaps it for a zeroed 1x1 `R8G8B8A8_SNORM` texture.
//!
//! This writes straight into the context's private resource tables, whose
//! layout is only valid for [`EngineVersion::PINNED`]. On any other layout
//! revision the patch is skipped.

use ffx_backend::ContextPrivate;
use ffx_core::{
    CreateResourceDescription, Dimensions2D, EngineVersion, HeapType, InitData,
    ResourceDescription, ResourceIdentifier, ResourceState, ResourceUsage, SurfaceFormat,
};
use tracing::{debug, warn};

const REPLACEMENT_NAME: &str = "FI_DefaultDistortionField";

pub(crate) fn replacement_description() -> CreateResourceDescription {
    CreateResourceDescription {
        heap_type: HeapType::Default,
        resource_description: ResourceDescription::texture_2d(
            SurfaceFormat::R8G8B8A8Snorm,
            Dimensions2D::new(1, 1),
            ResourceUsage::ReadOnly,
        ),
        initial_state: ResourceState::ComputeRead,
        name: REPLACEMENT_NAME,
        id: ResourceIdentifier::DefaultDistortionField.id(),
        init_data: InitData::Buffer(vec![0; 4]),
    }
}

/// Swap the default distortion field of a newly created context.
///
/// Must run before the context is first used. Returns whether the swap
/// happened; on failure the original placeholder stays bound.
pub(crate) fn override_default_distortion_field<E: ContextPrivate>(
    engine: &mut E,
    context: &mut E::Context,
) -> bool {
    let version = engine.layout_version();
    if !EngineVersion::PINNED.is_layout_compatible(&version) {
        warn!(
            engine = %version,
            pinned = %EngineVersion::PINNED,
            "unknown engine context layout, keeping the default distortion field"
        );
        return false;
    }

    let original = engine.bound_resource(context, ResourceIdentifier::DefaultDistortionField);

    let replacement = match engine.create_context_resource(context, &replacement_description()) {
        Ok(resource) => resource,
        Err(err) => {
            warn!(%err, "failed to create SNORM distortion field, keeping the default");
            return false;
        }
    };

    if !original.is_unbound() {
        engine.release_context_resource(context, original);
    }
    engine.bind_resource(context, ResourceIdentifier::DefaultDistortionField, replacement);

    // Only follow the default if no real field has been bound yet.
    let active = engine.bound_resource(context, ResourceIdentifier::DistortionField);
    if active.is_unbound() || active == original {
        engine.bind_resource(context, ResourceIdentifier::DistortionField, replacement);
    }

    debug!(
        original = original.internal_index,
        replacement = replacement.internal_index,
        "default distortion field replaced"
    );
    true
}
