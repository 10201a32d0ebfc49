//! Trigger-driven entrance animations for one section.

use crate::{
    animation::state::VisualState,
    foundation::core::{Rect, Viewport},
    reveal::stagger::StaggerGroup,
    scroll::visibility::TrackedRegion,
};

/// Member states of one stagger group for a frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GroupFrame {
    pub name: String,
    pub states: Vec<VisualState>,
}

/// Runs a section's stagger groups off its region's viewport-entry latch.
///
/// Groups hold their `from` states until the region first enters the viewport; from
/// that instant every member's timeline runs on its own. Once unmounted the clock
/// freezes and an untriggered region can no longer trigger.
#[derive(Clone, Debug)]
pub struct RevealOrchestrator {
    tracker: TrackedRegion,
    groups: Vec<StaggerGroup>,
    triggered_at: Option<f64>,
    stopped_at: Option<f64>,
}

impl RevealOrchestrator {
    pub fn new(tracker: TrackedRegion, groups: Vec<StaggerGroup>) -> Self {
        Self {
            tracker,
            groups,
            triggered_at: None,
            stopped_at: None,
        }
    }

    pub fn tracker(&self) -> &TrackedRegion {
        &self.tracker
    }

    pub fn groups(&self) -> &[StaggerGroup] {
        &self.groups
    }

    pub fn triggered_at(&self) -> Option<f64> {
        self.triggered_at
    }

    /// Seconds since the trigger, or `None` before it.
    pub fn elapsed(&self, now: f64) -> Option<f64> {
        let start = self.triggered_at?;
        let now = self.stopped_at.map_or(now, |stop| now.min(stop));
        Some((now - start).max(0.0))
    }

    /// Feed this tick's geometry; returns whether the reveal has been triggered.
    pub fn observe(&mut self, now: f64, region: Option<Rect>, viewport: &Viewport) -> bool {
        if self.stopped_at.is_some() {
            return self.triggered_at.is_some();
        }
        if self.tracker.observe(region, viewport) && self.triggered_at.is_none() {
            self.triggered_at = Some(now);
        }
        self.triggered_at.is_some()
    }

    pub fn frame(&self, now: f64) -> Vec<GroupFrame> {
        let elapsed = self.elapsed(now);
        self.groups
            .iter()
            .map(|g| GroupFrame {
                name: g.name.clone(),
                states: g.states_at(elapsed),
            })
            .collect()
    }

    /// Observe then evaluate, in that order.
    pub fn tick(&mut self, now: f64, region: Option<Rect>, viewport: &Viewport) -> Vec<GroupFrame> {
        self.observe(now, region, viewport);
        self.frame(now)
    }

    /// Whether every group has come to rest.
    pub fn is_settled(&self, now: f64) -> bool {
        self.elapsed(now)
            .is_some_and(|e| self.groups.iter().all(|g| g.is_finished(e)))
    }

    pub fn unmount(&mut self, now: f64) {
        if self.stopped_at.is_none() {
            self.stopped_at = Some(now);
            self.tracker.unmount();
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.stopped_at.is_none()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/reveal/orchestrator.rs"]
mod tests;
