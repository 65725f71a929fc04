//! Resources the interpolator owns on the shared backend.
//!
//! Three auxiliary resources live exactly as long as the engine context that
//! described them. The HUD-less scratch color buffer is created on demand,
//! replaced whenever the reference format or output size changes, and
//! released with everything else on teardown.

use ffx_backend::BackendInterface;
use ffx_core::{
    CreateResourceDescription, Dimensions2D, FfxResult, HeapType, InitData, Resource,
    ResourceDescription, ResourceInternal, ResourceState, ResourceUsage,
    SharedResourceDescriptions, SurfaceFormat,
};
use tracing::{debug, warn};

const HUDLESS_COMPATIBLE_NAME: &str = "FI_HUDLessCompatibleColor";

/// A backend resource this crate may or may not currently own.
#[derive(Debug)]
pub(crate) struct OwnedResource {
    name: &'static str,
    handle: Option<ResourceInternal>,
}

impl OwnedResource {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self { name, handle: None }
    }

    pub(crate) fn handle(&self) -> Option<ResourceInternal> {
        self.handle
    }

    /// Create the resource. On failure nothing is owned.
    pub(crate) fn create<B: BackendInterface>(
        &mut self,
        backend: &mut B,
        desc: &CreateResourceDescription,
        effect_context_id: u32,
    ) -> FfxResult<ResourceInternal> {
        debug_assert!(self.handle.is_none(), "{} created twice", self.name);
        let handle = backend.create_resource(desc, effect_context_id)?;
        self.handle = Some(handle);
        Ok(handle)
    }

    pub(crate) fn release<B: BackendInterface>(&mut self, backend: &mut B, effect_context_id: u32) {
        if let Some(handle) = self.handle.take() {
            debug!(name = self.name, index = handle.internal_index, "releasing resource");
            backend.destroy_resource(handle, effect_context_id);
        }
    }
}

/// Views of the three auxiliary resources for one frame.
#[derive(Debug, Clone, Copy)]
pub(crate) struct AuxiliaryViews {
    pub dilated_depth: Resource,
    pub dilated_motion_vectors: Resource,
    pub reconstructed_prev_depth: Resource,
}

/// Resources shared between the prepare and dispatch passes.
#[derive(Debug)]
pub(crate) struct AuxiliaryResources {
    dilated_depth: OwnedResource,
    dilated_motion_vectors: OwnedResource,
    reconstructed_prev_depth: OwnedResource,
}

impl AuxiliaryResources {
    pub(crate) const fn new() -> Self {
        Self {
            dilated_depth: OwnedResource::new("dilated depth"),
            dilated_motion_vectors: OwnedResource::new("dilated motion vectors"),
            reconstructed_prev_depth: OwnedResource::new("reconstructed previous depth"),
        }
    }

    /// Create all three resources in order. Stops at the first failure;
    /// whatever was already created stays owned so that [`release`] can
    /// clean it up.
    ///
    /// [`release`]: AuxiliaryResources::release
    pub(crate) fn allocate<B: BackendInterface>(
        &mut self,
        backend: &mut B,
        descs: &SharedResourceDescriptions,
        effect_context_id: u32,
    ) -> FfxResult<()> {
        self.dilated_depth
            .create(backend, &descs.dilated_depth, effect_context_id)?;
        self.dilated_motion_vectors
            .create(backend, &descs.dilated_motion_vectors, effect_context_id)?;
        self.reconstructed_prev_depth.create(
            backend,
            &descs.reconstructed_prev_nearest_depth,
            effect_context_id,
        )?;
        Ok(())
    }

    pub(crate) fn release<B: BackendInterface>(&mut self, backend: &mut B, effect_context_id: u32) {
        self.dilated_depth.release(backend, effect_context_id);
        self.dilated_motion_vectors.release(backend, effect_context_id);
        self.reconstructed_prev_depth.release(backend, effect_context_id);
    }

    pub(crate) fn is_allocated(&self) -> bool {
        self.dilated_depth.handle().is_some()
            && self.dilated_motion_vectors.handle().is_some()
            && self.reconstructed_prev_depth.handle().is_some()
    }

    /// Resolve all three resources, or `None` if any is missing.
    pub(crate) fn views<B: BackendInterface>(&self, backend: &B) -> Option<AuxiliaryViews> {
        Some(AuxiliaryViews {
            dilated_depth: backend.get_resource(self.dilated_depth.handle()?),
            dilated_motion_vectors: backend.get_resource(self.dilated_motion_vectors.handle()?),
            reconstructed_prev_depth: backend.get_resource(self.reconstructed_prev_depth.handle()?),
        })
    }
}

/// Scratch color buffer matching the primary back buffer's format, used to
/// bridge a HUD-less input of a different format.
#[derive(Debug)]
pub(crate) struct ScratchColor {
    slot: OwnedResource,
}

impl ScratchColor {
    pub(crate) const fn new() -> Self {
        Self {
            slot: OwnedResource::new("HUD-less compatible color"),
        }
    }

    /// Return a compute-read view of a scratch buffer with `format` and
    /// `size`, replacing a stale one. `None` if creation fails.
    pub(crate) fn acquire<B: BackendInterface>(
        &mut self,
        backend: &mut B,
        format: SurfaceFormat,
        size: Dimensions2D,
        effect_context_id: u32,
    ) -> Option<Resource> {
        if let Some(handle) = self.slot.handle() {
            let current = backend.get_resource_description(handle);
            if current.size() != size || current.format != format {
                debug!(
                    ?format,
                    width = size.width,
                    height = size.height,
                    "scratch color no longer matches, recreating"
                );
                self.slot.release(backend, effect_context_id);
            }
        }

        if self.slot.handle().is_none() {
            let desc = CreateResourceDescription {
                heap_type: HeapType::Default,
                resource_description: ResourceDescription::texture_2d(
                    format,
                    size,
                    ResourceUsage::ReadOnly,
                ),
                initial_state: ResourceState::ComputeRead,
                name: HUDLESS_COMPATIBLE_NAME,
                id: 0,
                init_data: InitData::Uninitialized,
            };
            if let Err(err) = self.slot.create(backend, &desc, effect_context_id) {
                warn!(%err, ?format, "failed to create HUD-less compatible color buffer");
                return None;
            }
        }

        let handle = self.slot.handle()?;
        Some(backend.get_resource(handle).with_state(ResourceState::ComputeRead))
    }

    pub(crate) fn release<B: BackendInterface>(&mut self, backend: &mut B, effect_context_id: u32) {
        self.slot.release(backend, effect_context_id);
    }

    pub(crate) fn is_allocated(&self) -> bool {
        self.slot.handle().is_some()
    }
}
