//! Scroll position to normalized progress.
//!
//! Progress is measured between two scroll offsets, each defined by an [`Anchor`]: the
//! offset at which a point on the region meets a point on the viewport.

use std::fmt;

use crate::{
    foundation::{
        core::{Rect, Viewport, is_measurable},
        error::{ScrollcueError, ScrollcueResult},
        math::progress_between,
    },
    scroll::signal::ScrollSnapshot,
};

/// A region edge meeting a viewport edge, as fractions of their heights.
///
/// Written `"<region> <viewport>"` where each side is `start`, `center`, `end` or a
/// number (`"start end"` is the moment the region's top enters at the bottom).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Anchor {
    pub region: f64,
    pub viewport: f64,
}

impl Anchor {
    pub const START_END: Anchor = Anchor::new(0.0, 1.0);
    pub const END_START: Anchor = Anchor::new(1.0, 0.0);
    pub const START_START: Anchor = Anchor::new(0.0, 0.0);
    pub const END_END: Anchor = Anchor::new(1.0, 1.0);
    pub const CENTER_CENTER: Anchor = Anchor::new(0.5, 0.5);

    pub const fn new(region: f64, viewport: f64) -> Self {
        Self { region, viewport }
    }

    pub fn parse(s: &str) -> ScrollcueResult<Self> {
        let mut parts = s.split_whitespace();
        let (Some(region), Some(viewport), None) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(ScrollcueError::validation(format!(
                "anchor '{s}' must be two edges, e.g. \"start end\""
            )));
        };
        Ok(Self::new(parse_edge(region)?, parse_edge(viewport)?))
    }

    /// Scroll offset at which this anchor is met for `region` in a viewport of height
    /// `viewport_height`.
    pub fn scroll_offset(&self, region: Rect, viewport_height: f64) -> f64 {
        region.y0 + region.height() * self.region - viewport_height * self.viewport
    }
}

fn parse_edge(s: &str) -> ScrollcueResult<f64> {
    match s {
        "start" => Ok(0.0),
        "center" => Ok(0.5),
        "end" => Ok(1.0),
        other => other
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| ScrollcueError::validation(format!("unknown anchor edge '{other}'"))),
    }
}

fn edge_name(v: f64) -> String {
    if v == 0.0 {
        "start".to_owned()
    } else if v == 0.5 {
        "center".to_owned()
    } else if v == 1.0 {
        "end".to_owned()
    } else {
        v.to_string()
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", edge_name(self.region), edge_name(self.viewport))
    }
}

impl TryFrom<String> for Anchor {
    type Error = ScrollcueError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Anchor> for String {
    fn from(value: Anchor) -> Self {
        value.to_string()
    }
}

/// Maps scroll position to progress through a region between two anchors.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScrollProgressSampler {
    pub start: Anchor,
    pub end: Anchor,
}

impl Default for ScrollProgressSampler {
    /// From the region's top entering to its bottom leaving.
    fn default() -> Self {
        Self {
            start: Anchor::START_END,
            end: Anchor::END_START,
        }
    }
}

impl ScrollProgressSampler {
    pub fn new(start: Anchor, end: Anchor) -> Self {
        Self { start, end }
    }

    /// Unclamped progress: negative before `start`, above 1 past `end`.
    ///
    /// An absent or unmeasurable region, or a zero-length scroll range, samples as 0.
    pub fn sample(&self, region: Option<Rect>, viewport: &Viewport) -> f64 {
        let Some(region) = region.filter(|r| is_measurable(*r)) else {
            return 0.0;
        };
        if !viewport.is_measurable() {
            return 0.0;
        }
        let start = self.start.scroll_offset(region, viewport.height);
        let end = self.end.scroll_offset(region, viewport.height);
        progress_between(viewport.scroll_y, start, end)
    }
}

pub fn sample_progress(
    region: Option<Rect>,
    viewport: &Viewport,
    start: Anchor,
    end: Anchor,
) -> f64 {
    ScrollProgressSampler::new(start, end).sample(region, viewport)
}

/// Whole-document scroll progress for the page indicator, clamped to `[0, 1]`.
pub fn page_progress(snapshot: &ScrollSnapshot) -> f64 {
    let vp = snapshot.viewport;
    let range = snapshot.document_height - vp.height;
    progress_between(vp.scroll_y, 0.0, range).clamp(0.0, 1.0)
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/progress.rs"]
mod tests;
