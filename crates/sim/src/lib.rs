//! Bounce simulation kernel: owned body state, per-frame stepping, deterministic replay hooks.
//!
//! # Invariants
//! - Stepping is pure arithmetic over owned state; identical step sequences
//!   produce identical trajectories.
//! - The body never ends a step below ground level.
//! - The host owns the timing loop and calls `step()` once per rendered frame.

pub mod body;
pub mod sim;

pub use body::{BounceBody, BounceParams, Rebound, Rest, StepOutcome};
pub use sim::{SimEvent, Simulation};
