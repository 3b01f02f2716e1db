//! wgpu render backend for the bounce demo.
//!
//! Renders the scene's ground plane and sphere with a single lit mesh
//! pipeline. Lighting follows the scene's hemispheric light: a blend of sky
//! and ground contribution by surface normal, scaled by intensity.
//!
//! # Invariants
//! - The renderer never mutates scene state.
//! - Camera motion is host-controlled and not part of the simulation.
//! - Scene geometry is uploaded once; only transforms change per frame.

mod camera;
mod gpu;
mod mesh;
mod shaders;

pub use camera::FreeCamera;
pub use gpu::WgpuRenderer;
