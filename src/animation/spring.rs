//! Damped spring used for pointer-follow motion.
//!
//! Integrates `F = -k (x - target) - c v` with semi-implicit Euler in fixed substeps,
//! and snaps to the target once both displacement and speed fall under the rest
//! thresholds. A spring at rest stays put until its target moves.

use crate::foundation::error::{ScrollcueError, ScrollcueResult};

/// Largest integration step; longer frames are subdivided.
const MAX_STEP_SECS: f64 = 0.004;

fn default_mass() -> f64 {
    1.0
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SpringParams {
    pub stiffness: f64,
    pub damping: f64,
    #[serde(default = "default_mass")]
    pub mass: f64,
}

impl Default for SpringParams {
    fn default() -> Self {
        Self {
            stiffness: 100.0,
            damping: 10.0,
            mass: 1.0,
        }
    }
}

impl SpringParams {
    pub fn new(stiffness: f64, damping: f64) -> ScrollcueResult<Self> {
        let params = Self {
            stiffness,
            damping,
            mass: 1.0,
        };
        params.validate()?;
        Ok(params)
    }

    /// Critically damped parameters for `stiffness` at unit mass.
    pub fn critical(stiffness: f64) -> ScrollcueResult<Self> {
        Self::new(stiffness, 2.0 * stiffness.max(0.0).sqrt())
    }

    pub fn validate(&self) -> ScrollcueResult<()> {
        if !(self.stiffness.is_finite() && self.stiffness > 0.0) {
            return Err(ScrollcueError::animation("spring stiffness must be > 0"));
        }
        if !(self.damping.is_finite() && self.damping >= 0.0) {
            return Err(ScrollcueError::animation("spring damping must be >= 0"));
        }
        if !(self.mass.is_finite() && self.mass > 0.0) {
            return Err(ScrollcueError::animation("spring mass must be > 0"));
        }
        Ok(())
    }

    pub fn critical_damping(&self) -> f64 {
        2.0 * (self.stiffness * self.mass).sqrt()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Spring {
    position: f64,
    velocity: f64,
    target: f64,
    params: SpringParams,
    rest_delta: f64,
    rest_speed: f64,
    at_rest: bool,
}

impl Spring {
    pub const DEFAULT_REST_DELTA: f64 = 0.001;
    pub const DEFAULT_REST_SPEED: f64 = 0.01;
    /// Longest frame integrated in one `advance`; anything past it is dropped.
    pub const MAX_FRAME_SECS: f64 = 0.1;

    /// A spring resting at `position`.
    pub fn new(position: f64, params: SpringParams) -> Self {
        Self {
            position,
            velocity: 0.0,
            target: position,
            params,
            rest_delta: Self::DEFAULT_REST_DELTA,
            rest_speed: Self::DEFAULT_REST_SPEED,
            at_rest: true,
        }
    }

    #[must_use]
    pub fn with_rest_thresholds(mut self, delta: f64, speed: f64) -> Self {
        self.rest_delta = delta.abs();
        self.rest_speed = speed.abs();
        self
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn params(&self) -> SpringParams {
        self.params
    }

    pub fn is_at_rest(&self) -> bool {
        self.at_rest
    }

    /// Retarget the spring. Wakes it if the target actually moved.
    pub fn set_target(&mut self, target: f64) {
        if !target.is_finite() {
            return;
        }
        if (self.target - target).abs() > 0.0 {
            self.target = target;
            self.at_rest = false;
        }
    }

    /// Jump to `position` with no velocity, keeping the target.
    pub fn jump_to(&mut self, position: f64) {
        if !position.is_finite() {
            return;
        }
        self.position = position;
        self.velocity = 0.0;
        self.at_rest = false;
        self.settle_if_resting();
    }

    fn step(&mut self, dt: f64) {
        let displacement = self.position - self.target;
        let force = -self.params.stiffness * displacement - self.params.damping * self.velocity;
        self.velocity += force / self.params.mass * dt;
        self.position += self.velocity * dt;
    }

    /// Advance by `dt_secs`, substepping for stability. Non-positive or non-finite
    /// deltas are ignored; deltas longer than [`Self::MAX_FRAME_SECS`] (a host resuming
    /// after a stall) integrate only that much.
    pub fn advance(&mut self, dt_secs: f64) {
        if self.at_rest || !dt_secs.is_finite() || dt_secs <= 0.0 {
            return;
        }
        let frame = dt_secs.min(Self::MAX_FRAME_SECS);
        let steps = (frame / MAX_STEP_SECS).ceil().max(1.0) as u32;
        let dt = frame / f64::from(steps);
        for _ in 0..steps {
            self.step(dt);
        }
        self.settle_if_resting();
    }

    fn settle_if_resting(&mut self) {
        if (self.position - self.target).abs() < self.rest_delta
            && self.velocity.abs() < self.rest_speed
        {
            self.position = self.target;
            self.velocity = 0.0;
            self.at_rest = true;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/spring.rs"]
mod tests;
