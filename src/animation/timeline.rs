//! One-shot and repeating property transitions.
//!
//! A [`Timeline`] is a value: [`Timeline::advance`] is a pure function of the elapsed
//! time since the trigger, so calling it twice with the same input yields the same
//! state. Nothing inside a timeline counts frames.

use crate::{
    animation::{
        ease::Ease,
        state::{Lerp, VisualState},
    },
    foundation::error::{ScrollcueError, ScrollcueResult},
};

/// How many times a timeline plays.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Repeat {
    #[default]
    Once,
    /// Play once, then restart `n` more times.
    Count(u32),
    Infinite,
}

impl Repeat {
    fn plays(self) -> Option<u64> {
        match self {
            Self::Once => Some(1),
            Self::Count(n) => Some(1 + u64::from(n)),
            Self::Infinite => None,
        }
    }
}

/// What a restart does.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RepeatMode {
    /// Jump back to `from`.
    #[default]
    Loop,
    /// Alternate direction each play (ping-pong).
    Mirror,
}

fn default_duration() -> f64 {
    Timeline::DEFAULT_DURATION
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Timeline {
    pub from: VisualState,
    pub to: VisualState,
    #[serde(default = "default_duration")]
    pub duration: f64, // seconds per play
    #[serde(default)]
    pub delay: f64, // seconds, applied once before the first play
    #[serde(default)]
    pub ease: Ease,
    #[serde(default)]
    pub repeat: Repeat,
    #[serde(default)]
    pub repeat_mode: RepeatMode,
}

impl Timeline {
    pub const DEFAULT_DURATION: f64 = 0.3;

    pub fn new(from: VisualState, to: VisualState, duration: f64) -> Self {
        Self {
            from,
            to,
            duration,
            delay: 0.0,
            ease: Ease::default(),
            repeat: Repeat::Once,
            repeat_mode: RepeatMode::Loop,
        }
    }

    #[must_use]
    pub fn with_delay(mut self, delay: f64) -> Self {
        self.delay = delay;
        self
    }

    #[must_use]
    pub fn with_ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    #[must_use]
    pub fn with_repeat(mut self, repeat: Repeat, mode: RepeatMode) -> Self {
        self.repeat = repeat;
        self.repeat_mode = mode;
        self
    }

    /// Copy of this timeline starting `extra` seconds later.
    #[must_use]
    pub fn delayed_by(&self, extra: f64) -> Self {
        let mut out = self.clone();
        out.delay += extra;
        out
    }

    pub fn validate(&self) -> ScrollcueResult<()> {
        if !self.duration.is_finite() || self.duration < 0.0 {
            return Err(ScrollcueError::animation(
                "timeline duration must be finite and >= 0",
            ));
        }
        if !self.delay.is_finite() || self.delay < 0.0 {
            return Err(ScrollcueError::animation(
                "timeline delay must be finite and >= 0",
            ));
        }
        if !self.from.same_properties(&self.to) {
            return Err(ScrollcueError::animation(
                "timeline from/to must animate the same properties",
            ));
        }
        if !self.from.is_finite() || !self.to.is_finite() {
            return Err(ScrollcueError::animation(
                "timeline states must hold finite values",
            ));
        }
        if self.repeat == Repeat::Infinite && self.duration == 0.0 {
            return Err(ScrollcueError::animation(
                "an infinitely repeating timeline needs a duration > 0",
            ));
        }
        self.ease.validate()
    }

    /// Seconds from trigger to the final resting state; `None` if it never rests.
    pub fn total_duration(&self) -> Option<f64> {
        let plays = self.repeat.plays()?;
        Some(self.delay + self.duration * plays as f64)
    }

    pub fn is_finished(&self, elapsed: f64) -> bool {
        self.total_duration().is_some_and(|end| elapsed >= end)
    }

    /// Eased progress for `elapsed` seconds after the trigger.
    ///
    /// 0 during the delay hold, 1 at rest (0 when a mirrored timeline comes to rest on
    /// its reverse pass). Overshooting curves may leave `[0, 1]` mid-play.
    pub fn progress(&self, elapsed: f64) -> f64 {
        if !elapsed.is_finite() || elapsed < self.delay {
            return 0.0;
        }
        let local = elapsed - self.delay;
        let plays = self.repeat.plays();

        if self.duration <= 0.0 {
            return self.rest_progress(plays.unwrap_or(1));
        }

        let cycles = local / self.duration;
        let play = cycles.floor();
        if let Some(plays) = plays
            && play >= plays as f64
        {
            return self.rest_progress(plays);
        }

        let mut t = cycles - play;
        if self.repeat_mode == RepeatMode::Mirror && (play as u64) % 2 == 1 {
            t = 1.0 - t;
        }
        self.ease.apply(t)
    }

    fn rest_progress(&self, plays: u64) -> f64 {
        let last = plays.saturating_sub(1);
        if self.repeat_mode == RepeatMode::Mirror && last % 2 == 1 {
            0.0
        } else {
            1.0
        }
    }

    /// Visual state `elapsed` seconds after the trigger.
    pub fn advance(&self, elapsed: f64) -> VisualState {
        if !elapsed.is_finite() || elapsed < self.delay {
            return self.from.clone();
        }
        let t = self.progress(elapsed);
        if t == 0.0 {
            return self.from.clone();
        }
        if t == 1.0 {
            return self.to.clone();
        }
        VisualState::lerp(&self.from, &self.to, t)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/timeline.rs"]
mod tests;
