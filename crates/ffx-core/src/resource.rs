//! GPU resource descriptions shared between the engine and its backends.

use std::ffi::c_void;

use num_derive::FromPrimitive;
use num_traits::FromPrimitive;

use crate::ffi::*;

/// Width and height in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Dimensions2D {
    pub width: u32,
    pub height: u32,
}

impl Dimensions2D {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// A pair of floats (scales, offsets, luminance ranges).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FloatCoords2D {
    pub x: f32,
    pub y: f32,
}

impl FloatCoords2D {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Integer rectangle, origin plus extent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rect2D {
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect2D {
    /// A rectangle at the origin covering `size`.
    pub fn covering(size: Dimensions2D) -> Self {
        Self {
            left: 0,
            top: 0,
            width: size.width as i32,
            height: size.height as i32,
        }
    }
}

/// Pixel encodings understood by the engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, FromPrimitive)]
#[repr(u32)]
pub enum SurfaceFormat {
    #[default]
    Unknown = 0,
    R32G32B32A32Typeless = 1,
    R32G32B32A32Uint = 2,
    R32G32B32A32Float = 3,
    R16G16B16A16Float = 4,
    R32G32B32Float = 5,
    R32G32Float = 6,
    R8Uint = 7,
    R32Uint = 8,
    R8G8B8A8Typeless = 9,
    R8G8B8A8Unorm = 10,
    R8G8B8A8Snorm = 11,
    R8G8B8A8Srgb = 12,
    B8G8R8A8Typeless = 13,
    B8G8R8A8Unorm = 14,
    B8G8R8A8Srgb = 15,
    R11G11B10Float = 16,
    R10G10B10A2Unorm = 17,
    R16G16Float = 18,
    R16G16Uint = 19,
    R16G16Sint = 20,
    R16Float = 21,
    R16Uint = 22,
    R16Unorm = 23,
    R16Snorm = 24,
    R8Unorm = 25,
    R8G8Unorm = 26,
    R8G8Uint = 27,
    R32Float = 28,
}

impl SurfaceFormat {
    /// Decode a raw format value reported by a backend. Unknown values map to
    /// [`SurfaceFormat::Unknown`].
    pub fn from_raw(raw: u32) -> Self {
        SurfaceFormat::from_u32(raw).unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum ResourceType {
    Buffer = 0,
    Texture1D = 1,
    #[default]
    Texture2D = 2,
    TextureCube = 3,
    Texture3D = 4,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum ResourceFlags {
    #[default]
    None = 0,
    Aliasable = 1 << 0,
    Undefined = 1 << 1,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum ResourceUsage {
    #[default]
    ReadOnly = 0,
    RenderTarget = 1 << 0,
    UnorderedAccess = 1 << 1,
    DepthTarget = 1 << 2,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum HeapType {
    #[default]
    Default = 0,
    Upload = 1,
    Readback = 2,
}

/// The GPU state a resource is in (or must be transitioned to) when handed
/// to the engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum ResourceState {
    #[default]
    Common = FFX_RESOURCE_STATE_COMMON,
    UnorderedAccess = FFX_RESOURCE_STATE_UNORDERED_ACCESS,
    ComputeRead = FFX_RESOURCE_STATE_COMPUTE_READ,
    PixelRead = FFX_RESOURCE_STATE_PIXEL_READ,
    CopySrc = FFX_RESOURCE_STATE_COPY_SRC,
    CopyDest = FFX_RESOURCE_STATE_COPY_DEST,
    Present = FFX_RESOURCE_STATE_PRESENT,
}

/// Shape and encoding of a GPU resource.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ResourceDescription {
    pub resource_type: ResourceType,
    pub format: SurfaceFormat,
    pub width: u32,
    pub height: u32,
    pub depth: u32,
    pub mip_count: u32,
    pub flags: ResourceFlags,
    pub usage: ResourceUsage,
}

impl ResourceDescription {
    /// A single-mip 2D texture description.
    pub fn texture_2d(format: SurfaceFormat, size: Dimensions2D, usage: ResourceUsage) -> Self {
        Self {
            resource_type: ResourceType::Texture2D,
            format,
            width: size.width,
            height: size.height,
            depth: 1,
            mip_count: 1,
            flags: ResourceFlags::None,
            usage,
        }
    }

    pub fn size(&self) -> Dimensions2D {
        Dimensions2D::new(self.width, self.height)
    }
}

/// An externally visible GPU resource: the native API object plus the
/// description and state the engine should assume.
///
/// The native pointer is borrowed; whoever created the resource keeps
/// ownership of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resource {
    pub resource: *mut c_void,
    pub description: ResourceDescription,
    pub state: ResourceState,
}

impl Resource {
    pub fn new(resource: *mut c_void, description: ResourceDescription, state: ResourceState) -> Self {
        Self {
            resource,
            description,
            state,
        }
    }

    pub fn is_null(&self) -> bool {
        self.resource.is_null()
    }

    /// Copy of this view with a different assumed state.
    pub fn with_state(mut self, state: ResourceState) -> Self {
        self.state = state;
        self
    }
}

impl Default for Resource {
    fn default() -> Self {
        Self {
            resource: std::ptr::null_mut(),
            description: ResourceDescription::default(),
            state: ResourceState::Common,
        }
    }
}

/// Index of a resource inside a backend's own resource table.
///
/// Only meaningful to the backend that issued it. Index 0 is never handed out
/// for a live resource.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ResourceInternal {
    pub internal_index: i32,
}

impl ResourceInternal {
    pub const fn new(internal_index: i32) -> Self {
        Self { internal_index }
    }

    pub fn is_unbound(&self) -> bool {
        self.internal_index == 0
    }
}

/// Initial contents of a newly created resource.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum InitData {
    #[default]
    Uninitialized,
    Buffer(Vec<u8>),
}

/// Everything a backend needs to create a resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateResourceDescription {
    pub heap_type: HeapType,
    pub resource_description: ResourceDescription,
    pub initial_state: ResourceState,
    pub name: &'static str,
    pub id: u32,
    pub init_data: InitData,
}
