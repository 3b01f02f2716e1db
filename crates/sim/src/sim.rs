use crate::body::{BounceBody, BounceParams, StepOutcome};
use serde::{Deserialize, Serialize};

/// An event record produced by every step of the simulation.
///
/// The event log is the foundation for replay and host-side observability.
/// `Stepped` is appended last within a step and carries the post-step state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum SimEvent {
    /// The body touched the ground and its velocity was inverted and damped.
    Rebounded {
        tick: u64,
        impact_velocity: f64,
        rebound_velocity: f64,
    },
    /// The bounce settled; the body was relaunched from `relaunch_height`.
    Rested {
        tick: u64,
        relaunch_height: u64,
        next_rest_height: u64,
    },
    /// The simulation advanced one frame.
    Stepped { tick: u64, height: f64, velocity: f64 },
}

/// The authoritative simulation state.
///
/// Owns the body and its parameters; hosts drive it by calling [`step`]
/// once per rendered frame and map the resulting height onto their output.
/// Given the same parameters and step count, two simulations produce
/// identical states. An append-only event log supports replay.
///
/// [`step`]: Simulation::step
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Simulation {
    body: BounceBody,
    params: BounceParams,
    tick: u64,
    /// Append-only event log of all steps.
    #[serde(skip)]
    event_log: Vec<SimEvent>,
}

impl Simulation {
    /// A fresh simulation with default parameters at tick 0.
    pub fn new() -> Self {
        Self::with_params(BounceParams::default())
    }

    /// A fresh simulation with specific parameters.
    pub fn with_params(params: BounceParams) -> Self {
        Self {
            body: BounceBody::new(),
            params,
            tick: 0,
            event_log: Vec::new(),
        }
    }

    /// Current frame count.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Read-only access to the body.
    pub fn body(&self) -> &BounceBody {
        &self.body
    }

    /// The parameters this simulation runs with. Never mutated by stepping.
    pub fn params(&self) -> &BounceParams {
        &self.params
    }

    /// Drain and return the event log.
    pub fn drain_events(&mut self) -> Vec<SimEvent> {
        std::mem::take(&mut self.event_log)
    }

    /// Read-only access to the event log.
    pub fn events(&self) -> &[SimEvent] {
        &self.event_log
    }

    /// Advance the simulation by one frame and log what happened.
    pub fn step(&mut self) -> StepOutcome {
        self.tick += 1;
        let outcome = self.body.step(&self.params);

        if let Some(rebound) = outcome.rebound {
            self.event_log.push(SimEvent::Rebounded {
                tick: self.tick,
                impact_velocity: rebound.impact_velocity,
                rebound_velocity: rebound.rebound_velocity,
            });
        }
        if let Some(rest) = outcome.rest {
            self.event_log.push(SimEvent::Rested {
                tick: self.tick,
                relaunch_height: rest.relaunch_height,
                next_rest_height: rest.next_rest_height,
            });
        }
        self.event_log.push(SimEvent::Stepped {
            tick: self.tick,
            height: self.body.height(),
            velocity: self.body.velocity(),
        });

        outcome
    }

    /// Reconstruct simulation state from a sequence of events.
    pub fn replay(params: BounceParams, events: &[SimEvent]) -> Self {
        let mut sim = Self::with_params(params);
        for event in events {
            match event {
                SimEvent::Stepped {
                    tick,
                    height,
                    velocity,
                } => {
                    sim.tick = *tick;
                    sim.body.restore_kinematics(*height, *velocity);
                }
                SimEvent::Rested {
                    next_rest_height, ..
                } => {
                    sim.body.restore_rest_height(*next_rest_height);
                }
                SimEvent::Rebounded { .. } => {}
            }
        }
        sim
    }

    /// Compute a deterministic hash of the simulation state for comparison.
    pub fn state_hash(&self) -> u64 {
        let mut h: u64 = 0xcbf2_9ce4_8422_2325; // FNV offset basis
        let mix = |h: &mut u64, bytes: &[u8]| {
            for &b in bytes {
                *h ^= b as u64;
                *h = h.wrapping_mul(0x0100_0000_01b3);
            }
        };
        mix(&mut h, &self.tick.to_le_bytes());
        mix(&mut h, &self.body.height().to_le_bytes());
        mix(&mut h, &self.body.velocity().to_le_bytes());
        mix(&mut h, &self.body.rest_height().to_le_bytes());
        h
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simulation_starts_at_tick_zero() {
        let sim = Simulation::new();
        assert_eq!(sim.tick(), 0);
        assert_eq!(sim.body().height(), 2.0);
        assert!(sim.events().is_empty());
    }

    #[test]
    fn step_increments_tick() {
        let mut sim = Simulation::new();
        sim.step();
        sim.step();
        sim.step();
        assert_eq!(sim.tick(), 3);
    }

    #[test]
    fn every_step_logs_a_stepped_event() {
        let mut sim = Simulation::new();
        sim.step();
        assert_eq!(sim.events().len(), 1);
        assert!(matches!(sim.events()[0], SimEvent::Stepped { tick: 1, .. }));
    }

    #[test]
    fn bounce_step_logs_rebound_before_stepped() {
        let mut sim = Simulation::new();
        // Run until the first ground contact shows up in the log.
        for _ in 0..100 {
            if sim.step().rebound.is_some() {
                break;
            }
        }
        let events = sim.events();
        let rebound_at = events
            .iter()
            .position(|e| matches!(e, SimEvent::Rebounded { .. }))
            .expect("a rebound within 100 frames");
        assert!(matches!(events[rebound_at + 1], SimEvent::Stepped { .. }));
    }

    #[test]
    fn drain_events_clears_log() {
        let mut sim = Simulation::new();
        sim.step();
        sim.step();
        let events = sim.drain_events();
        assert_eq!(events.len(), 2);
        assert!(sim.events().is_empty());
    }

    #[test]
    fn replay_reconstructs_state() {
        let mut sim = Simulation::new();
        // Enough frames to cover rebounds and at least one rest cycle.
        for _ in 0..2_000 {
            sim.step();
        }
        let events = sim.events().to_vec();
        let replayed = Simulation::replay(*sim.params(), &events);

        assert_eq!(replayed.tick(), sim.tick());
        assert_eq!(replayed.body().height(), sim.body().height());
        assert_eq!(replayed.body().velocity(), sim.body().velocity());
        assert_eq!(replayed.body().rest_height(), sim.body().rest_height());
        assert_eq!(replayed.state_hash(), sim.state_hash());
    }

    #[test]
    fn state_hash_deterministic() {
        let mut a = Simulation::new();
        let mut b = Simulation::new();
        for _ in 0..500 {
            a.step();
            b.step();
        }
        assert_eq!(a.state_hash(), b.state_hash());
    }

    #[test]
    fn state_hash_tracks_state() {
        let mut a = Simulation::new();
        let mut b = Simulation::new();
        a.step();
        b.step();
        b.step();
        assert_ne!(a.state_hash(), b.state_hash());
    }

    #[test]
    fn params_are_never_mutated_by_stepping() {
        let mut sim = Simulation::new();
        for _ in 0..1_000 {
            sim.step();
        }
        assert_eq!(*sim.params(), BounceParams::default());
    }

    #[test]
    fn custom_params_flow_through() {
        let params = BounceParams {
            gravity: 0.02,
            ..BounceParams::default()
        };
        let mut sim = Simulation::with_params(params);
        sim.step();
        assert_eq!(sim.body().velocity(), 0.02);
    }
}
