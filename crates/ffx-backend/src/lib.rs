//! Seams between the interpolation context manager and the code that
//! actually talks to the GPU.
//!
//! This crate defines the [`BackendInterface`] trait (resource creation and
//! lookup), the [`FrameInterpolationEngine`] trait (context lifetime plus the
//! prepare/dispatch entry points), [`ContextPrivate`] for the one place that
//! must reach into an engine context's internal tables, and the
//! [`CopyTextureFn`] callback used for same-frame GPU copies.

pub mod backend;
pub mod copy;
pub mod engine;

pub use backend::BackendInterface;
pub use copy::CopyTextureFn;
pub use engine::{ContextPrivate, FrameInterpolationEngine};
