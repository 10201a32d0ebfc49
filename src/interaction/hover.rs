//! Pointer-driven transitions between an element's rest, hover and press looks.
//!
//! A [`HoverTarget`] only stores when its pointer state last changed and the look it
//! was showing at that instant, so [`HoverTarget::frame`] is a pure function of `now`
//! between changes.

use crate::{
    animation::{ease::Ease, state::VisualState, timeline::Timeline},
    foundation::error::{ScrollcueError, ScrollcueResult},
};

/// Pointer interaction with a target.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerState {
    #[default]
    Rest,
    Hover,
    Press,
}

fn default_duration() -> f64 {
    Timeline::DEFAULT_DURATION
}

/// One element's looks and the transition between them.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct HoverLayer {
    pub target: String,
    pub rest: VisualState,
    pub hover: VisualState,
    /// Look while pressed; the hover look when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub press: Option<VisualState>,
    #[serde(default = "default_duration")]
    pub duration: f64,
    #[serde(default)]
    pub delay: f64,
    #[serde(default)]
    pub ease: Ease,
}

impl HoverLayer {
    pub fn new(target: impl Into<String>, rest: VisualState, hover: VisualState) -> Self {
        Self {
            target: target.into(),
            rest,
            hover,
            press: None,
            duration: default_duration(),
            delay: 0.0,
            ease: Ease::default(),
        }
    }

    #[must_use]
    pub fn with_press(mut self, press: VisualState) -> Self {
        self.press = Some(press);
        self
    }

    #[must_use]
    pub fn with_timing(mut self, duration: f64, delay: f64, ease: Ease) -> Self {
        self.duration = duration;
        self.delay = delay;
        self.ease = ease;
        self
    }

    pub fn look(&self, state: PointerState) -> &VisualState {
        match state {
            PointerState::Rest => &self.rest,
            PointerState::Hover => &self.hover,
            PointerState::Press => self.press.as_ref().unwrap_or(&self.hover),
        }
    }

    fn transition(&self, from: VisualState, to: PointerState) -> Timeline {
        Timeline::new(from, self.look(to).clone(), self.duration)
            .with_delay(self.delay)
            .with_ease(self.ease)
    }

    pub fn validate(&self) -> ScrollcueResult<()> {
        let looks = [Some(&self.hover), self.press.as_ref()];
        for look in looks.into_iter().flatten() {
            if !self.rest.same_properties(look) {
                return Err(ScrollcueError::animation(format!(
                    "hover layer '{}' looks must animate the same properties",
                    self.target
                )));
            }
        }
        self.transition(self.rest.clone(), PointerState::Hover)
            .validate()
            .map_err(|e| ScrollcueError::animation(format!("hover layer '{}': {e}", self.target)))
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct HoverLayerFrame {
    pub target: String,
    pub state: VisualState,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct HoverFrame {
    pub id: String,
    pub pointer: PointerState,
    pub layers: Vec<HoverLayerFrame>,
}

#[derive(Clone, Debug)]
struct Run {
    from: VisualState,
    changed_at: f64,
}

/// Layers sharing one pointer state, such as every moving part of a card.
#[derive(Clone, Debug)]
pub struct HoverTarget {
    id: String,
    layers: Vec<HoverLayer>,
    // `None` until the first pointer change; one run per layer after that.
    runs: Option<Vec<Run>>,
    pointer: PointerState,
}

impl HoverTarget {
    pub fn new(id: impl Into<String>, layers: Vec<HoverLayer>) -> ScrollcueResult<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ScrollcueError::validation("hover target id must be non-empty"));
        }
        for layer in &layers {
            layer.validate()?;
        }
        Ok(Self {
            id,
            layers,
            runs: None,
            pointer: PointerState::Rest,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn pointer(&self) -> PointerState {
        self.pointer
    }

    pub fn layers(&self) -> &[HoverLayer] {
        &self.layers
    }

    fn layer_state(&self, i: usize, now: f64) -> VisualState {
        let layer = &self.layers[i];
        match &self.runs {
            None => layer.look(self.pointer).clone(),
            Some(runs) => {
                let run = &runs[i];
                layer
                    .transition(run.from.clone(), self.pointer)
                    .advance((now - run.changed_at).max(0.0))
            }
        }
    }

    /// Move to `pointer` at `now`. Every layer starts from the look it shows at `now`.
    /// Returns whether anything changed.
    pub fn set_pointer(&mut self, pointer: PointerState, now: f64) -> bool {
        if pointer == self.pointer || !now.is_finite() {
            return false;
        }
        let runs = (0..self.layers.len())
            .map(|i| Run {
                from: self.layer_state(i, now),
                changed_at: now,
            })
            .collect();
        tracing::trace!(target_id = %self.id, ?pointer, now, "hover state changed");
        self.runs = Some(runs);
        self.pointer = pointer;
        true
    }

    /// Enter or leave the target. Leaving while pressed also releases.
    pub fn set_hovered(&mut self, hovered: bool, now: f64) -> bool {
        let next = match (hovered, self.pointer) {
            (true, PointerState::Press) => PointerState::Press,
            (true, _) => PointerState::Hover,
            (false, _) => PointerState::Rest,
        };
        self.set_pointer(next, now)
    }

    /// Whether every layer has reached its goal look.
    pub fn is_settled(&self, now: f64) -> bool {
        match &self.runs {
            None => true,
            Some(runs) => self
                .layers
                .iter()
                .zip(runs)
                .all(|(layer, run)| now - run.changed_at >= layer.delay + layer.duration),
        }
    }

    pub fn frame(&self, now: f64) -> HoverFrame {
        HoverFrame {
            id: self.id.clone(),
            pointer: self.pointer,
            layers: self
                .layers
                .iter()
                .enumerate()
                .map(|(i, layer)| HoverLayerFrame {
                    target: layer.target.clone(),
                    state: self.layer_state(i, now),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/interaction/hover.rs"]
mod tests;
