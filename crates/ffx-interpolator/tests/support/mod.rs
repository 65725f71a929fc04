//! Recording engine and backend doubles.
//!
//! Both doubles write into one [`Probe`] so tests can check the order in
//! which the interpolator touches the engine, the shared backend and the copy
//! callback.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::ffi::c_void;
use std::rc::Rc;

use ffx_backend::{BackendInterface, ContextPrivate, CopyTextureFn, FrameInterpolationEngine};
use ffx_core::{
    CommandList, ContextDescription, CreateResourceDescription, Dimensions2D, DispatchDescription,
    EngineVersion, FfxError, FfxResult, FloatCoords2D, HeapType, InitData, PrepareDescription,
    Resource, ResourceDescription, ResourceIdentifier, ResourceInternal, ResourceState,
    ResourceUsage, SharedResourceDescriptions, SurfaceFormat,
};
use ffx_interpolator::{DispatchParameters, FrameInterpolator, InterpolatorSettings};

pub const SHARED_EFFECT_CONTEXT_ID: u32 = 7;
pub const MAX_RENDER: Dimensions2D = Dimensions2D::new(1920, 1080);

pub const DILATED_DEPTH: &str = "FI_DilatedDepth";
pub const DILATED_MOTION_VECTORS: &str = "FI_DilatedMVs";
pub const RECONSTRUCTED_PREV_DEPTH: &str = "FI_ReconstructedPrevNearestDepth";

/// Index the engine gives its built-in placeholder distortion field.
pub const ENGINE_DEFAULT_DISTORTION: ResourceInternal = ResourceInternal::new(900);

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    ContextCreated(ContextDescription),
    ContextDestroyed,
    SharedCreated { name: &'static str, index: i32, effect_context_id: u32 },
    SharedDestroyed { index: i32, effect_context_id: u32 },
    ContextResourceCreated { name: &'static str, index: i32, format: SurfaceFormat },
    ContextResourceReleased { index: i32 },
    Prepare(PrepareDescription),
    Copy { destination: Resource, source: Resource },
    Dispatch(DispatchDescription),
}

#[derive(Debug)]
pub struct ProbeState {
    pub events: Vec<Event>,

    // Shared backend.
    pub live_shared: HashMap<i32, ResourceDescription>,
    pub next_shared_index: i32,
    pub fail_shared_names: Vec<&'static str>,

    // Engine.
    pub live_contexts: usize,
    pub next_context_index: i32,
    pub fail_context_create: Option<FfxError>,
    pub fail_shared_descriptions: Option<FfxError>,
    pub fail_prepare: Option<FfxError>,
    pub fail_dispatch: Option<FfxError>,
    pub fail_distortion_create: bool,
    pub layout_version: EngineVersion,
    /// Active distortion field a new context starts with; `None` binds the
    /// engine's placeholder.
    pub initial_active_distortion: Option<ResourceInternal>,
    pub bindings: HashMap<ResourceIdentifier, ResourceInternal>,
    pub context_resources: HashMap<i32, SurfaceFormat>,
}

impl Default for ProbeState {
    fn default() -> Self {
        Self {
            events: Vec::new(),
            live_shared: HashMap::new(),
            next_shared_index: 1,
            fail_shared_names: Vec::new(),
            live_contexts: 0,
            next_context_index: 1000,
            fail_context_create: None,
            fail_shared_descriptions: None,
            fail_prepare: None,
            fail_dispatch: None,
            fail_distortion_create: false,
            layout_version: EngineVersion::PINNED,
            initial_active_distortion: None,
            bindings: HashMap::new(),
            context_resources: HashMap::new(),
        }
    }
}

pub type Probe = Rc<RefCell<ProbeState>>;

impl ProbeStateExt for Probe {
    fn count(&self, pred: impl Fn(&Event) -> bool) -> usize {
        self.borrow().events.iter().filter(|e| pred(e)).count()
    }

    fn clear_events(&self) {
        self.borrow_mut().events.clear();
    }

    fn position(&self, pred: impl Fn(&Event) -> bool) -> Option<usize> {
        self.borrow().events.iter().position(pred)
    }
}

pub trait ProbeStateExt {
    fn count(&self, pred: impl Fn(&Event) -> bool) -> usize;
    fn clear_events(&self);
    fn position(&self, pred: impl Fn(&Event) -> bool) -> Option<usize>;
}

fn ptr(value: usize) -> *mut c_void {
    value as *mut c_void
}

// ---------------------------------------------------------------------------
// Shared backend
// ---------------------------------------------------------------------------

pub struct MockBackend {
    probe: Probe,
}

impl BackendInterface for MockBackend {
    fn create_resource(
        &mut self,
        desc: &CreateResourceDescription,
        effect_context_id: u32,
    ) -> FfxResult<ResourceInternal> {
        let mut state = self.probe.borrow_mut();
        if state.fail_shared_names.contains(&desc.name) {
            return Err(FfxError::OutOfMemory);
        }
        let index = state.next_shared_index;
        state.next_shared_index += 1;
        state.live_shared.insert(index, desc.resource_description);
        state.events.push(Event::SharedCreated {
            name: desc.name,
            index,
            effect_context_id,
        });
        Ok(ResourceInternal::new(index))
    }

    fn destroy_resource(&mut self, resource: ResourceInternal, effect_context_id: u32) {
        let mut state = self.probe.borrow_mut();
        assert!(
            state.live_shared.remove(&resource.internal_index).is_some(),
            "destroyed unknown shared resource {}",
            resource.internal_index
        );
        state.events.push(Event::SharedDestroyed {
            index: resource.internal_index,
            effect_context_id,
        });
    }

    fn get_resource(&self, resource: ResourceInternal) -> Resource {
        let state = self.probe.borrow();
        let description = *state
            .live_shared
            .get(&resource.internal_index)
            .expect("resolved a dead shared resource");
        Resource::new(
            ptr(0x1_0000 + resource.internal_index as usize),
            description,
            ResourceState::Common,
        )
    }

    fn get_resource_description(&self, resource: ResourceInternal) -> ResourceDescription {
        self.get_resource(resource).description
    }
}

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

pub struct MockEngine {
    probe: Probe,
}

#[derive(Debug)]
pub struct MockContext {
    pub description: ContextDescription,
    destroyed: bool,
}

fn shared_description(name: &'static str, format: SurfaceFormat) -> CreateResourceDescription {
    CreateResourceDescription {
        heap_type: HeapType::Default,
        resource_description: ResourceDescription::texture_2d(
            format,
            MAX_RENDER,
            ResourceUsage::UnorderedAccess,
        ),
        initial_state: ResourceState::UnorderedAccess,
        name,
        id: 0,
        init_data: InitData::Uninitialized,
    }
}

impl FrameInterpolationEngine for MockEngine {
    type Context = MockContext;

    fn create_context(&mut self, desc: &ContextDescription) -> FfxResult<MockContext> {
        let mut state = self.probe.borrow_mut();
        if let Some(err) = state.fail_context_create {
            return Err(err);
        }
        assert_eq!(state.live_contexts, 0, "second context created while one is alive");
        state.live_contexts += 1;
        state.bindings.clear();
        state
            .bindings
            .insert(ResourceIdentifier::DefaultDistortionField, ENGINE_DEFAULT_DISTORTION);
        let active = state.initial_active_distortion.unwrap_or(ENGINE_DEFAULT_DISTORTION);
        state.bindings.insert(ResourceIdentifier::DistortionField, active);
        state
            .context_resources
            .insert(ENGINE_DEFAULT_DISTORTION.internal_index, SurfaceFormat::R8G8B8A8Unorm);
        state.events.push(Event::ContextCreated(*desc));
        Ok(MockContext {
            description: *desc,
            destroyed: false,
        })
    }

    fn destroy_context(&mut self, context: &mut MockContext) -> FfxResult<()> {
        assert!(!context.destroyed, "context destroyed twice");
        context.destroyed = true;
        let mut state = self.probe.borrow_mut();
        state.live_contexts -= 1;
        state.context_resources.clear();
        state.events.push(Event::ContextDestroyed);
        Ok(())
    }

    fn shared_resource_descriptions(&self, context: &MockContext) -> FfxResult<SharedResourceDescriptions> {
        assert!(!context.destroyed);
        if let Some(err) = self.probe.borrow().fail_shared_descriptions {
            return Err(err);
        }
        Ok(SharedResourceDescriptions {
            dilated_depth: shared_description(DILATED_DEPTH, SurfaceFormat::R32Float),
            dilated_motion_vectors: shared_description(DILATED_MOTION_VECTORS, SurfaceFormat::R16G16Float),
            reconstructed_prev_nearest_depth: shared_description(
                RECONSTRUCTED_PREV_DEPTH,
                SurfaceFormat::R32Uint,
            ),
        })
    }

    fn prepare(&mut self, context: &mut MockContext, desc: &PrepareDescription) -> FfxResult<()> {
        assert!(!context.destroyed);
        let mut state = self.probe.borrow_mut();
        if let Some(err) = state.fail_prepare {
            return Err(err);
        }
        state.events.push(Event::Prepare(*desc));
        Ok(())
    }

    fn dispatch(&mut self, context: &mut MockContext, desc: &DispatchDescription) -> FfxResult<()> {
        assert!(!context.destroyed);
        let mut state = self.probe.borrow_mut();
        if let Some(err) = state.fail_dispatch {
            return Err(err);
        }
        state.events.push(Event::Dispatch(*desc));
        Ok(())
    }
}

impl ContextPrivate for MockEngine {
    fn layout_version(&self) -> EngineVersion {
        self.probe.borrow().layout_version
    }

    fn bound_resource(&self, _context: &MockContext, id: ResourceIdentifier) -> ResourceInternal {
        self.probe.borrow().bindings.get(&id).copied().unwrap_or_default()
    }

    fn bind_resource(&mut self, _context: &mut MockContext, id: ResourceIdentifier, resource: ResourceInternal) {
        self.probe.borrow_mut().bindings.insert(id, resource);
    }

    fn create_context_resource(
        &mut self,
        _context: &mut MockContext,
        desc: &CreateResourceDescription,
    ) -> FfxResult<ResourceInternal> {
        let mut state = self.probe.borrow_mut();
        if state.fail_distortion_create {
            return Err(FfxError::BackendApiError);
        }
        let index = state.next_context_index;
        state.next_context_index += 1;
        let format = desc.resource_description.format;
        state.context_resources.insert(index, format);
        state.events.push(Event::ContextResourceCreated {
            name: desc.name,
            index,
            format,
        });
        Ok(ResourceInternal::new(index))
    }

    fn release_context_resource(&mut self, _context: &mut MockContext, resource: ResourceInternal) {
        let mut state = self.probe.borrow_mut();
        state.context_resources.remove(&resource.internal_index);
        state.events.push(Event::ContextResourceReleased {
            index: resource.internal_index,
        });
    }
}

// ---------------------------------------------------------------------------
// Construction helpers
// ---------------------------------------------------------------------------

pub type TestInterpolator = FrameInterpolator<MockEngine, MockBackend>;

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("ffx_interpolator=debug")
        .with_test_writer()
        .try_init();
}

pub fn recording_copy(probe: &Probe) -> CopyTextureFn {
    let probe = probe.clone();
    Box::new(move |_cmd: CommandList, destination: &Resource, source: &Resource| {
        probe.borrow_mut().events.push(Event::Copy {
            destination: *destination,
            source: *source,
        });
    })
}

pub fn interpolator(with_copy: bool) -> (TestInterpolator, Probe) {
    init_tracing();
    let probe = Probe::default();
    let settings = InterpolatorSettings::new(MAX_RENDER.width, MAX_RENDER.height)
        .with_shared_effect_context_id(SHARED_EFFECT_CONTEXT_ID);
    let copy = with_copy.then(|| recording_copy(&probe));
    let interp = FrameInterpolator::new(
        settings,
        MockEngine {
            probe: probe.clone(),
        },
        MockBackend {
            probe: probe.clone(),
        },
        copy,
    )
    .expect("valid settings");
    (interp, probe)
}

pub fn texture(tag: usize, format: SurfaceFormat, size: Dimensions2D) -> Resource {
    Resource::new(
        ptr(tag),
        ResourceDescription::texture_2d(format, size, ResourceUsage::ReadOnly),
        ResourceState::ComputeRead,
    )
}

pub const OUTPUT: Dimensions2D = Dimensions2D::new(1920, 1080);
pub const RENDER: Dimensions2D = Dimensions2D::new(1280, 720);

pub const COLOR_TAG: usize = 0xC0;
pub const HUDLESS_TAG: usize = 0xC1;
pub const DEPTH_TAG: usize = 0xD0;
pub const MOTION_TAG: usize = 0xE0;
pub const OUTPUT_TAG: usize = 0xF0;

pub fn frame() -> DispatchParameters {
    DispatchParameters {
        command_list: CommandList(ptr(0xCAFE)),
        render_size: RENDER,
        output_size: OUTPUT,
        input_color_buffer: texture(COLOR_TAG, SurfaceFormat::R8G8B8A8Unorm, OUTPUT),
        input_hudless_color_buffer: None,
        input_depth: texture(DEPTH_TAG, SurfaceFormat::R32Float, RENDER),
        input_motion_vectors: texture(MOTION_TAG, SurfaceFormat::R16G16Float, RENDER),
        input_distortion_field: None,
        input_optical_flow_vector: None,
        input_optical_flow_scene_change_detection: None,
        optical_flow_scale: FloatCoords2D::new(1.0, 1.0),
        optical_flow_block_size: 8,
        output_interpolated_color_buffer: texture(OUTPUT_TAG, SurfaceFormat::R8G8B8A8Unorm, OUTPUT),
        motion_vectors_full_resolution: false,
        motion_vector_jitter_cancellation: false,
        motion_vectors_dilated: false,
        motion_vector_scale: FloatCoords2D::new(1280.0, 720.0),
        motion_vector_jitter_offsets: FloatCoords2D::new(0.25, -0.25),
        hdr: false,
        depth_inverted: true,
        depth_plane_infinite: false,
        reset: false,
        debug_tear_lines: false,
        debug_view: false,
        camera_near: 0.1,
        camera_far: 1000.0,
        camera_fov_angle_vertical: 1.0,
        min_max_luminance: FloatCoords2D::new(0.0, 1.0),
    }
}

pub fn last_dispatch(probe: &Probe) -> DispatchDescription {
    probe
        .borrow()
        .events
        .iter()
        .rev()
        .find_map(|e| match e {
            Event::Dispatch(d) => Some(*d),
            _ => None,
        })
        .expect("no dispatch recorded")
}

pub fn last_prepare(probe: &Probe) -> PrepareDescription {
    probe
        .borrow()
        .events
        .iter()
        .rev()
        .find_map(|e| match e {
            Event::Prepare(p) => Some(*p),
            _ => None,
        })
        .expect("no prepare recorded")
}
