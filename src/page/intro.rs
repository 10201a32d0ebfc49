//! Splash screen that holds the page back, then hands over to the content.

use crate::{
    animation::{
        ease::Ease,
        state::{Property, VisualState},
        timeline::Timeline,
    },
    foundation::{
        error::{ScrollcueError, ScrollcueResult},
        math::{finite_secs, progress_between},
    },
};

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum IntroPhase {
    /// Splash fully shown; nothing else mounted.
    Loading,
    /// Splash fading out.
    Exiting,
    /// Content mounted and fading in.
    Revealing,
    Done,
}

/// A splash element animated from the intro start.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct IntroElement {
    pub target: String,
    pub timeline: Timeline,
}

impl IntroElement {
    pub fn new(target: impl Into<String>, timeline: Timeline) -> Self {
        Self {
            target: target.into(),
            timeline,
        }
    }
}

/// Intro timing. Missing fields take the default sequence's values.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct IntroSpec {
    /// Seconds the splash is held fully visible.
    pub hold: f64,
    /// Splash fade-out, before any content mounts.
    pub exit: f64,
    /// Content fade-in once mounted.
    pub fade_in: f64,
    pub elements: Vec<IntroElement>,
}

impl Default for IntroSpec {
    fn default() -> Self {
        let opacity = |v| VisualState::new().with(Property::Opacity, v);
        let logo = Timeline::new(
            VisualState::new()
                .with(Property::Scale, 0.8)
                .with(Property::Opacity, 0.0),
            VisualState::new()
                .with(Property::Scale, 1.0)
                .with(Property::Opacity, 1.0),
            0.5,
        );
        let bar = Timeline::new(
            VisualState::new().with(Property::Width, 0.0),
            VisualState::new().with(Property::Width, 100.0),
            1.5,
        )
        .with_ease(Ease::OUT_EXPO);
        Self {
            hold: 2.0,
            exit: 0.5,
            fade_in: 0.5,
            elements: vec![
                IntroElement::new("logo", logo),
                IntroElement::new(
                    "wordmark",
                    Timeline::new(opacity(0.0), opacity(1.0), Timeline::DEFAULT_DURATION)
                        .with_delay(0.3),
                ),
                IntroElement::new("loading_bar", bar),
                IntroElement::new(
                    "caption",
                    Timeline::new(opacity(0.0), opacity(1.0), Timeline::DEFAULT_DURATION)
                        .with_delay(0.5),
                ),
            ],
        }
    }
}

impl IntroSpec {
    pub fn validate(&self) -> ScrollcueResult<()> {
        for (name, v) in [
            ("hold", self.hold),
            ("exit", self.exit),
            ("fade_in", self.fade_in),
        ] {
            if finite_secs(v).is_none() {
                return Err(ScrollcueError::validation(format!(
                    "intro {name} must be finite and >= 0"
                )));
            }
        }
        for element in &self.elements {
            element.timeline.validate().map_err(|e| {
                ScrollcueError::animation(format!("intro element '{}': {e}", element.target))
            })?;
        }
        Ok(())
    }

    /// Seconds from the intro start until content mounts.
    pub fn content_delay(&self) -> f64 {
        self.hold + self.exit
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct IntroElementFrame {
    pub target: String,
    pub state: VisualState,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct IntroFrame {
    pub phase: IntroPhase,
    pub splash_opacity: f64,
    pub content_opacity: f64,
    /// Empty once the splash has unmounted.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub elements: Vec<IntroElementFrame>,
}

/// A running intro.
#[derive(Clone, Debug, PartialEq)]
pub struct IntroSequence {
    spec: IntroSpec,
    started_at: f64,
}

impl IntroSequence {
    pub fn start(spec: IntroSpec, now: f64) -> ScrollcueResult<Self> {
        spec.validate()?;
        if !now.is_finite() {
            return Err(ScrollcueError::validation("intro start time must be finite"));
        }
        tracing::debug!(now, content_delay = spec.content_delay(), "intro started");
        Ok(Self {
            spec,
            started_at: now,
        })
    }

    pub fn spec(&self) -> &IntroSpec {
        &self.spec
    }

    pub fn started_at(&self) -> f64 {
        self.started_at
    }

    /// Instant the content mounts; section clocks start here.
    pub fn content_start(&self) -> f64 {
        self.started_at + self.spec.content_delay()
    }

    pub fn is_content_mounted(&self, now: f64) -> bool {
        now >= self.content_start()
    }

    pub fn phase(&self, now: f64) -> IntroPhase {
        let elapsed = now - self.started_at;
        let s = &self.spec;
        if elapsed < s.hold {
            IntroPhase::Loading
        } else if elapsed < s.content_delay() {
            IntroPhase::Exiting
        } else if elapsed < s.content_delay() + s.fade_in {
            IntroPhase::Revealing
        } else {
            IntroPhase::Done
        }
    }

    pub fn frame(&self, now: f64) -> IntroFrame {
        let elapsed = now - self.started_at;
        let s = &self.spec;
        let phase = self.phase(now);
        let (splash_opacity, content_opacity) = match phase {
            IntroPhase::Loading => (1.0, 0.0),
            IntroPhase::Exiting => (
                1.0 - progress_between(elapsed, s.hold, s.content_delay()),
                0.0,
            ),
            IntroPhase::Revealing => (
                0.0,
                progress_between(elapsed, s.content_delay(), s.content_delay() + s.fade_in),
            ),
            IntroPhase::Done => (0.0, 1.0),
        };
        let elements = if phase < IntroPhase::Revealing {
            s.elements
                .iter()
                .map(|e| IntroElementFrame {
                    target: e.target.clone(),
                    state: e.timeline.advance(elapsed.max(0.0)),
                })
                .collect()
        } else {
            Vec::new()
        };
        IntroFrame {
            phase,
            splash_opacity,
            content_opacity,
            elements,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/page/intro.rs"]
mod tests;
