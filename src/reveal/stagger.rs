use crate::{
    animation::{state::VisualState, timeline::Timeline},
    foundation::error::{ScrollcueError, ScrollcueResult},
};

/// Sibling timelines sharing one trigger.
///
/// Each member carries its own delay; equal delays are allowed and animate together.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StaggerGroup {
    pub name: String,
    pub members: Vec<Timeline>,
}

impl StaggerGroup {
    pub fn new(name: impl Into<String>, members: Vec<Timeline>) -> Self {
        Self {
            name: name.into(),
            members,
        }
    }

    /// `count` copies of `template`, member `i` delayed by `base + step * i`.
    pub fn uniform(
        name: impl Into<String>,
        template: &Timeline,
        count: usize,
        base: f64,
        step: f64,
    ) -> Self {
        let members = (0..count)
            .map(|i| template.delayed_by(base + step * i as f64))
            .collect();
        Self::new(name, members)
    }

    /// One copy of `template` per entry of `delays`.
    pub fn with_delays(name: impl Into<String>, template: &Timeline, delays: &[f64]) -> Self {
        let members = delays.iter().map(|d| template.delayed_by(*d)).collect();
        Self::new(name, members)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn validate(&self) -> ScrollcueResult<()> {
        if self.name.trim().is_empty() {
            return Err(ScrollcueError::validation("stagger group name must be non-empty"));
        }
        for (i, member) in self.members.iter().enumerate() {
            member.validate().map_err(|e| {
                ScrollcueError::animation(format!("group '{}' member {i}: {e}", self.name))
            })?;
        }
        Ok(())
    }

    /// Every member's state `elapsed` seconds after the shared trigger; `None` means the
    /// trigger has not fired and every member shows its `from` state.
    pub fn states_at(&self, elapsed: Option<f64>) -> Vec<VisualState> {
        match elapsed {
            None => self.members.iter().map(|m| m.from.clone()).collect(),
            Some(elapsed) => self.members.iter().map(|m| m.advance(elapsed)).collect(),
        }
    }

    /// Whether every member has come to rest.
    pub fn is_finished(&self, elapsed: f64) -> bool {
        self.members.iter().all(|m| m.is_finished(elapsed))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/reveal/stagger.rs"]
mod tests;
