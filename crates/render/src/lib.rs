//! Rendering adapter: renderer-agnostic interface.
//!
//! # Invariants
//! - Renderers cannot mutate the scene.
//! - Render output derives from scene state and a view.

mod renderer;

pub use renderer::{DebugTextRenderer, RenderView, Renderer};
