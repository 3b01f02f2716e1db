//! Shared types used across the rebound crates.

pub mod types;

pub use types::{Color, NodeId, Transform};
