//! Common interface for GPU resource management.

use ffx_core::{CreateResourceDescription, FfxResult, Resource, ResourceDescription, ResourceInternal};

/// Creates, destroys and resolves GPU resources on behalf of an effect.
///
/// Resources are grouped by effect context id so that several effects can
/// share one backend; a resource created under one id must be destroyed
/// under the same id.
///
/// Implementations exist per graphics API. All calls happen on the thread
/// recording the current command list.
pub trait BackendInterface {
    /// Create a resource and return the backend's handle for it.
    fn create_resource(
        &mut self,
        desc: &CreateResourceDescription,
        effect_context_id: u32,
    ) -> FfxResult<ResourceInternal>;

    /// Release a resource created by [`create_resource`](Self::create_resource).
    fn destroy_resource(&mut self, resource: ResourceInternal, effect_context_id: u32);

    /// Resolve a handle into an externally usable resource view.
    fn get_resource(&self, resource: ResourceInternal) -> Resource;

    /// Current description of a live resource.
    fn get_resource_description(&self, resource: ResourceInternal) -> ResourceDescription;
}

impl<B: BackendInterface + ?Sized> BackendInterface for Box<B> {
    fn create_resource(
        &mut self,
        desc: &CreateResourceDescription,
        effect_context_id: u32,
    ) -> FfxResult<ResourceInternal> {
        (**self).create_resource(desc, effect_context_id)
    }

    fn destroy_resource(&mut self, resource: ResourceInternal, effect_context_id: u32) {
        (**self).destroy_resource(resource, effect_context_id)
    }

    fn get_resource(&self, resource: ResourceInternal) -> Resource {
        (**self).get_resource(resource)
    }

    fn get_resource_description(&self, resource: ResourceInternal) -> ResourceDescription {
        (**self).get_resource_description(resource)
    }
}
