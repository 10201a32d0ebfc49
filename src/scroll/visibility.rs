//! One-shot viewport entry tracking.

use crate::{
    foundation::core::{Rect, Viewport, is_measurable},
    scroll::region::RegionId,
};

/// The viewport expanded by `margin` on every side.
///
/// A negative margin shrinks the zone inward; `None` once it collapses entirely.
pub fn trigger_zone(viewport: &Viewport, margin: f64) -> Option<Rect> {
    if !viewport.is_measurable() || !margin.is_finite() {
        return None;
    }
    let v = viewport.visible_rect();
    let zone = Rect::new(v.x0 - margin, v.y0 - margin, v.x1 + margin, v.y1 + margin);
    (zone.x0 <= zone.x1 && zone.y0 <= zone.y1).then_some(zone)
}

// Edge contact counts as intersecting.
fn touches(a: Rect, b: Rect) -> bool {
    a.x0 <= b.x1 && b.x0 <= a.x1 && a.y0 <= b.y1 && b.y0 <= a.y1
}

/// Whether `region` intersects the margin-adjusted viewport right now.
pub fn in_view(region: Rect, viewport: &Viewport, margin: f64) -> bool {
    if !is_measurable(region) {
        return false;
    }
    trigger_zone(viewport, margin).is_some_and(|zone| touches(region, zone))
}

/// A region's "has entered the viewport" latch.
///
/// Flips from `false` to `true` the first time the region intersects the trigger zone
/// and never flips back, whatever the scroll direction. Unmounting freezes it.
#[derive(Clone, Debug, PartialEq)]
pub struct TrackedRegion {
    id: RegionId,
    margin: f64,
    entered: bool,
    mounted: bool,
}

impl TrackedRegion {
    pub fn new(id: RegionId, margin: f64) -> Self {
        Self {
            id,
            margin: if margin.is_finite() { margin } else { 0.0 },
            entered: false,
            mounted: true,
        }
    }

    pub fn id(&self) -> &RegionId {
        &self.id
    }

    pub fn margin(&self) -> f64 {
        self.margin
    }

    pub fn has_entered_viewport(&self) -> bool {
        self.entered
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Feed the region's current geometry; returns the latch value.
    ///
    /// `None` geometry (not laid out, not measurable) never triggers.
    pub fn observe(&mut self, region: Option<Rect>, viewport: &Viewport) -> bool {
        if self.entered || !self.mounted {
            return self.entered;
        }
        if let Some(rect) = region
            && in_view(rect, viewport, self.margin)
        {
            self.entered = true;
            tracing::debug!(
                region = %self.id,
                scroll_y = viewport.scroll_y,
                "region entered viewport"
            );
        }
        self.entered
    }

    pub fn unmount(&mut self) {
        self.mounted = false;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/visibility.rs"]
mod tests;
