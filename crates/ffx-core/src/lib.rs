//! Host-side types of the FidelityFX frame interpolation engine.
//!
//! - [`ffi`] holds the raw status codes, flag bits and private-layout
//!   identifiers that cross the foreign boundary.
//! - [`resource`] describes GPU resources as the engine and its backends see
//!   them.
//! - [`frameinterpolation`] holds the context, prepare and dispatch
//!   descriptor records.
//! - [`error`] maps failure codes onto [`FfxError`].

pub mod error;
pub mod ffi;
pub mod frameinterpolation;
pub mod resource;

pub use error::{FfxError, FfxResult};
pub use frameinterpolation::{
    BackBufferTransferFunction, CommandList, ContextDescription, ContextFlags, DispatchDescription,
    DispatchFlags, EngineVersion, PrepareDescription, ResourceIdentifier,
    SharedResourceDescriptions,
};
pub use resource::{
    CreateResourceDescription, Dimensions2D, FloatCoords2D, HeapType, InitData, Rect2D, Resource,
    ResourceDescription, ResourceFlags, ResourceInternal, ResourceState, ResourceType,
    ResourceUsage, SurfaceFormat,
};
