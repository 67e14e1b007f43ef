//! wgpu render backend for the spectrograph viewer.
//!
//! Draws the planned line segment with a single `LineList` draw call.
//! Shader sources are read from disk at startup; the backend only exists
//! once they have been loaded and compiled.
//!
//! # Invariants
//! - One clear and one draw per frame.
//! - The surface aspect ratio is read at draw time, never cached.

mod backend;
mod context;
mod error;
mod gpu;
mod shaders;

pub use backend::WgpuBackend;
pub use context::GpuContext;
pub use error::RenderError;
pub use gpu::WgpuRenderer;
pub use shaders::{FRAGMENT_SHADER_FILE, ShaderSources, VERTEX_SHADER_FILE};
