//! Scroll progress to secondary motion.

use crate::{
    animation::state::Property,
    foundation::{
        error::{ScrollcueError, ScrollcueResult},
        math::{lerp, progress_between},
    },
};

#[derive(serde::Deserialize)]
struct OutputRangeDef {
    input: Vec<f64>,
    output: Vec<f64>,
}

/// Piecewise-linear map from progress stops to output values.
///
/// `input` holds at least two strictly increasing stops; `output` has one value per
/// stop. Outside the first/last stop the end segments' slopes continue.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "OutputRangeDef")]
pub struct OutputRange {
    input: Vec<f64>,
    output: Vec<f64>,
}

impl TryFrom<OutputRangeDef> for OutputRange {
    type Error = ScrollcueError;

    fn try_from(def: OutputRangeDef) -> Result<Self, Self::Error> {
        Self::new(def.input, def.output)
    }
}

impl OutputRange {
    pub fn new(input: Vec<f64>, output: Vec<f64>) -> ScrollcueResult<Self> {
        if input.len() < 2 {
            return Err(ScrollcueError::animation(
                "output range needs at least two stops",
            ));
        }
        if input.len() != output.len() {
            return Err(ScrollcueError::animation(format!(
                "output range has {} input stops but {} outputs",
                input.len(),
                output.len()
            )));
        }
        if !input.iter().chain(&output).all(|v| v.is_finite()) {
            return Err(ScrollcueError::animation("output range values must be finite"));
        }
        if input.windows(2).any(|w| w[0] >= w[1]) {
            return Err(ScrollcueError::animation(
                "output range input stops must be strictly increasing",
            ));
        }
        Ok(Self { input, output })
    }

    /// `[0, 1] -> [from, to]`.
    pub fn two_point(from: f64, to: f64) -> ScrollcueResult<Self> {
        Self::new(vec![0.0, 1.0], vec![from, to])
    }

    /// `[0, mid, 1] -> [a, b, c]`.
    pub fn three_point(mid: f64, a: f64, b: f64, c: f64) -> ScrollcueResult<Self> {
        Self::new(vec![0.0, mid, 1.0], vec![a, b, c])
    }

    pub fn input(&self) -> &[f64] {
        &self.input
    }

    pub fn output(&self) -> &[f64] {
        &self.output
    }

    pub fn map(&self, progress: f64) -> f64 {
        if !progress.is_finite() {
            return self.output[0];
        }
        let last = self.input.len() - 1;
        // Segment index; the end segments also cover extrapolation.
        let seg = self.input[1..last]
            .iter()
            .take_while(|stop| progress >= **stop)
            .count();
        let t = progress_between(progress, self.input[seg], self.input[seg + 1]);
        lerp(self.output[seg], self.output[seg + 1], t)
    }

    /// Like [`map`](Self::map) but holds the end values outside the stops.
    pub fn map_clamped(&self, progress: f64) -> f64 {
        let lo = self.input[0];
        let hi = self.input[self.input.len() - 1];
        if progress.is_nan() {
            return self.output[0];
        }
        self.map(progress.clamp(lo, hi))
    }
}

pub fn map(progress: f64, range: &OutputRange) -> f64 {
    range.map(progress)
}

/// A property driven by a section's scroll progress.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ParallaxLayer {
    /// Element the value applies to, e.g. `"hero-backdrop"`.
    pub target: String,
    pub property: Property,
    pub range: OutputRange,
    /// Hold end values instead of extrapolating (opacity and the like).
    #[serde(default)]
    pub clamp: bool,
}

impl ParallaxLayer {
    pub fn new(target: impl Into<String>, property: Property, range: OutputRange) -> Self {
        Self {
            target: target.into(),
            property,
            range,
            clamp: false,
        }
    }

    #[must_use]
    pub fn clamped(mut self) -> Self {
        self.clamp = true;
        self
    }

    pub fn value(&self, progress: f64) -> f64 {
        if self.clamp {
            self.range.map_clamped(progress)
        } else {
            self.range.map(progress)
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/parallax.rs"]
mod tests;
