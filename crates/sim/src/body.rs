use serde::{Deserialize, Serialize};

/// Tunable constants for the bounce update.
///
/// `rebound_loss` is the fraction of velocity lost on ground contact: the
/// post-bounce velocity is `(rebound_loss - 1.0) * velocity`, which inverts
/// and damps in a single multiply. The factor is kept in exactly that form
/// so trajectories stay bit-compatible with the reference behavior.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BounceParams {
    /// Per-frame velocity increment.
    pub gravity: f64,
    /// Fraction of velocity lost per rebound.
    pub rebound_loss: f64,
    /// Minimum resting height; the body is clamped here during a bounce.
    pub ground_level: f64,
}

impl Default for BounceParams {
    fn default() -> Self {
        Self {
            gravity: 0.009,
            rebound_loss: 0.1,
            ground_level: 1.0,
        }
    }
}

/// Details of a ground contact within a step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rebound {
    /// Velocity at impact, after gravity was applied this frame.
    pub impact_velocity: f64,
    /// Velocity after inversion and damping.
    pub rebound_velocity: f64,
}

/// Details of a rest detection within a step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rest {
    /// Height the body was relaunched from (the pre-increment rest height).
    pub relaunch_height: u64,
    /// Rest height the next settle will relaunch from.
    pub next_rest_height: u64,
}

/// What happened during a single step, for hosts that want to log or react.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StepOutcome {
    pub rebound: Option<Rebound>,
    pub rest: Option<Rest>,
}

/// The falling/bouncing body.
///
/// One-dimensional: only the vertical offset is simulated. Positive velocity
/// means falling, and is applied by subtraction from the height. Once the
/// bounce has settled at ground level, the body is relaunched from
/// `rest_height`, which grows by one on every settle, so each rest cycle
/// drops from one unit higher than the last.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BounceBody {
    height: f64,
    velocity: f64,
    rest_height: u64,
}

impl BounceBody {
    /// A body at the initial drop height of 2, at rest.
    pub fn new() -> Self {
        Self {
            height: 2.0,
            velocity: 0.0,
            rest_height: 2,
        }
    }

    /// A body with explicit state (used for replay and tests).
    pub fn with_state(height: f64, velocity: f64, rest_height: u64) -> Self {
        Self {
            height,
            velocity,
            rest_height,
        }
    }

    /// Current vertical offset.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Current signed velocity (positive = falling).
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    /// Height the next settle will relaunch from.
    pub fn rest_height(&self) -> u64 {
        self.rest_height
    }

    pub(crate) fn restore_kinematics(&mut self, height: f64, velocity: f64) {
        self.height = height;
        self.velocity = velocity;
    }

    pub(crate) fn restore_rest_height(&mut self, rest_height: u64) {
        self.rest_height = rest_height;
    }

    /// Advance the body by one frame.
    ///
    /// Applies gravity, integrates the height, inverts and damps the velocity
    /// on ground contact, and relaunches the body from the next rest height
    /// once the bounce has settled (negligible velocity at ground level).
    pub fn step(&mut self, params: &BounceParams) -> StepOutcome {
        let mut outcome = StepOutcome::default();

        self.velocity += params.gravity;
        let mut new_height = self.height - self.velocity;

        if new_height < params.ground_level {
            let impact_velocity = self.velocity;
            self.velocity = (params.rebound_loss - 1.0) * self.velocity;
            new_height = params.ground_level;
            outcome.rebound = Some(Rebound {
                impact_velocity,
                rebound_velocity: self.velocity,
            });
        }
        self.height = new_height;

        // Settled: both the remaining velocity and the distance above ground
        // are within one gravity increment.
        if self.velocity.abs() <= params.gravity
            && new_height < params.ground_level + params.gravity
        {
            let relaunch_height = self.rest_height;
            self.height = relaunch_height as f64;
            self.rest_height += 1;
            outcome.rest = Some(Rest {
                relaunch_height,
                next_rest_height: self.rest_height,
            });
        }

        outcome
    }
}

impl Default for BounceBody {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn new_body_starts_at_drop_height() {
        let body = BounceBody::new();
        assert_eq!(body.height(), 2.0);
        assert_eq!(body.velocity(), 0.0);
        assert_eq!(body.rest_height(), 2);
    }

    #[test]
    fn golden_trajectory_first_ten_heights() {
        let params = BounceParams::default();
        let mut body = BounceBody::new();
        let expected = [
            1.991, 1.973, 1.946, 1.910, 1.865, 1.811, 1.748, 1.676, 1.595, 1.505,
        ];
        for (frame, want) in expected.iter().enumerate() {
            body.step(&params);
            assert!(
                approx(body.height(), *want),
                "frame {}: height {} != {}",
                frame + 1,
                body.height(),
                want
            );
        }
    }

    #[test]
    fn height_never_below_ground() {
        let params = BounceParams::default();
        let mut body = BounceBody::new();
        for frame in 0..10_000 {
            body.step(&params);
            assert!(
                body.height() >= params.ground_level,
                "frame {frame}: height {} below ground",
                body.height()
            );
        }
    }

    #[test]
    fn rebound_inverts_and_damps_velocity() {
        let params = BounceParams::default();
        // One step from here crosses the ground: velocity becomes 0.109 and
        // the height would land at 0.941.
        let mut body = BounceBody::with_state(1.05, 0.1, 2);
        let outcome = body.step(&params);

        let rebound = outcome.rebound.expect("step should touch the ground");
        assert!(approx(rebound.impact_velocity, 0.109));
        assert!(approx(rebound.rebound_velocity, -0.9 * 0.109));
        assert!(approx(body.velocity(), -0.9 * 0.109));
        assert_eq!(body.height(), params.ground_level);
        assert!(outcome.rest.is_none());
    }

    #[test]
    fn rest_relaunches_from_pre_increment_height() {
        let params = BounceParams::default();
        // At ground level with no velocity: the step's tiny rebound leaves
        // both checks within one gravity increment.
        let mut body = BounceBody::with_state(1.0, 0.0, 5);
        let outcome = body.step(&params);

        let rest = outcome.rest.expect("step should settle");
        assert_eq!(rest.relaunch_height, 5);
        assert_eq!(rest.next_rest_height, 6);
        assert_eq!(body.height(), 5.0);
        assert_eq!(body.rest_height(), 6);
    }

    #[test]
    fn rest_height_keeps_growing() {
        // The relaunch height has no upper bound: every settle increments it.
        // This pins the ever-higher-bounces behavior as a characteristic.
        let params = BounceParams::default();
        let mut body = BounceBody::new();
        let mut rests = Vec::new();
        for _ in 0..50_000 {
            if let Some(rest) = body.step(&params).rest {
                rests.push(rest);
            }
        }
        assert!(rests.len() >= 5, "expected several rest cycles, got {}", rests.len());
        for pair in rests.windows(2) {
            assert_eq!(pair[1].relaunch_height, pair[0].relaunch_height + 1);
        }
        for rest in &rests {
            assert_eq!(rest.next_rest_height, rest.relaunch_height + 1);
        }
    }

    #[test]
    fn step_does_not_touch_params() {
        let params = BounceParams::default();
        let mut body = BounceBody::new();
        for _ in 0..100 {
            body.step(&params);
        }
        assert_eq!(params, BounceParams::default());
    }

    #[test]
    fn trajectory_is_deterministic() {
        let params = BounceParams::default();
        let mut a = BounceBody::new();
        let mut b = BounceBody::new();
        for _ in 0..5_000 {
            a.step(&params);
            b.step(&params);
        }
        assert_eq!(a, b);
    }
}
