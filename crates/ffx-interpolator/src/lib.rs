//! Frame interpolation context manager.
//!
//! This crate drives an external frame interpolation engine (see
//! [`ffx_backend`]) from a per-frame parameter record.
//!
//! # Overview
//!
//! - [`FrameInterpolator`] owns the engine context and the GPU resources it
//!   needs across frames.
//! - [`FrameInterpolator::dispatch`] is the per-frame entry point: it makes
//!   sure a matching context exists, builds the prepare/dispatch
//!   descriptors, and records both passes.
//! - [`DispatchParameters`] is the host's input for one frame.
//! - [`InterpolatorSettings`] holds what is fixed at construction.
//! - [`logging::init_tracing`] installs a subscriber for hosts without one.
//!
//! # Reconfiguration
//!
//! Changing anything that feeds the context configuration (back buffer
//! format, HDR, depth or motion-vector flags) makes `dispatch` return
//! [`DispatchOutcome::ReconfigurationPending`] without recording anything.
//! The host drains in-flight GPU work and calls again; that call rebuilds
//! the context.

mod distortion;
mod interpolator;
mod lifecycle;
pub mod logging;
mod params;
mod resources;
mod settings;
mod status;
mod translate;

pub use interpolator::FrameInterpolator;
pub use params::DispatchParameters;
pub use settings::InterpolatorSettings;
pub use status::{status_code, ContextState, DispatchOutcome};
