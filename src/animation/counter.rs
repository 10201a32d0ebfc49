use crate::animation::ease::Ease;

fn default_counter_duration() -> f64 {
    AnimatedCounter::DEFAULT_DURATION
}

/// A statistic that counts up from 0 once its section is revealed.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AnimatedCounter {
    pub target: u64,
    #[serde(default = "default_counter_duration")]
    pub duration: f64,
    #[serde(default)]
    pub delay: f64,
    /// Appended to the displayed number, e.g. `"+"` or `"%"`.
    #[serde(default)]
    pub suffix: String,
}

impl AnimatedCounter {
    pub const DEFAULT_DURATION: f64 = 2.0;

    pub fn new(target: u64) -> Self {
        Self {
            target,
            duration: Self::DEFAULT_DURATION,
            delay: 0.0,
            suffix: String::new(),
        }
    }

    #[must_use]
    pub fn with_duration(mut self, duration: f64) -> Self {
        self.duration = duration;
        self
    }

    #[must_use]
    pub fn with_delay(mut self, delay: f64) -> Self {
        self.delay = delay;
        self
    }

    #[must_use]
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Integer shown `elapsed` seconds after the trigger.
    ///
    /// Follows `floor(out_cubic(t) * target)`; exactly `target` once `t >= 1` and never
    /// decreasing as `elapsed` grows.
    pub fn value_at(&self, elapsed: f64) -> u64 {
        if !elapsed.is_finite() || elapsed < self.delay {
            return 0;
        }
        let local = elapsed - self.delay;
        if self.duration <= 0.0 || local >= self.duration {
            return self.target;
        }
        let eased = Ease::OutCubic.apply(local / self.duration);
        let value = (eased * self.target as f64).floor();
        (value.max(0.0) as u64).min(self.target)
    }

    pub fn display_at(&self, elapsed: f64) -> String {
        format!("{}{}", self.value_at(elapsed), self.suffix)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/counter.rs"]
mod tests;
