//! The frame interpolation engine being driven.

use ffx_core::{
    ContextDescription, CreateResourceDescription, DispatchDescription, EngineVersion, FfxResult,
    PrepareDescription, ResourceIdentifier, ResourceInternal, SharedResourceDescriptions,
};

/// Entry points of the external frame interpolation engine.
///
/// The engine owns the backend interface it was built with; every resource
/// it creates internally lives on that backend under the context's own
/// effect context id.
pub trait FrameInterpolationEngine {
    /// Per-configuration engine state.
    type Context;

    /// Create a context. This compiles pipelines and allocates internal
    /// resources and may stall for several milliseconds.
    fn create_context(&mut self, desc: &ContextDescription) -> FfxResult<Self::Context>;

    /// Destroy a context and every resource it created internally.
    fn destroy_context(&mut self, context: &mut Self::Context) -> FfxResult<()>;

    /// Creation parameters for the resources prepare and dispatch share.
    fn shared_resource_descriptions(
        &self,
        context: &Self::Context,
    ) -> FfxResult<SharedResourceDescriptions>;

    /// Record the prepare pass.
    fn prepare(&mut self, context: &mut Self::Context, desc: &PrepareDescription) -> FfxResult<()>;

    /// Record the interpolation pass.
    fn dispatch(&mut self, context: &mut Self::Context, desc: &DispatchDescription)
        -> FfxResult<()>;
}

/// Access to the private resource tables of an engine context.
///
/// The engine keeps one shader-resource and one unordered-access binding per
/// [`ResourceIdentifier`]. The layout of those tables is only stable within
/// one engine revision; callers must check [`layout_version`] against
/// [`EngineVersion::PINNED`] before touching them.
///
/// [`layout_version`]: ContextPrivate::layout_version
pub trait ContextPrivate: FrameInterpolationEngine {
    /// Revision of the engine's private context layout.
    fn layout_version(&self) -> EngineVersion;

    /// The resource currently bound to `id` in the shader-resource table.
    fn bound_resource(&self, context: &Self::Context, id: ResourceIdentifier) -> ResourceInternal;

    /// Bind `resource` to `id` in both the shader-resource and
    /// unordered-access tables.
    fn bind_resource(
        &mut self,
        context: &mut Self::Context,
        id: ResourceIdentifier,
        resource: ResourceInternal,
    );

    /// Create a resource on the context's own backend, under the context's
    /// effect context id.
    fn create_context_resource(
        &mut self,
        context: &mut Self::Context,
        desc: &CreateResourceDescription,
    ) -> FfxResult<ResourceInternal>;

    /// Release a resource previously created on the context's backend.
    fn release_context_resource(&mut self, context: &mut Self::Context, resource: ResourceInternal);
}
