//! Recorded scroll sessions, replayed at a fixed frame rate.

use crate::{
    foundation::{
        core::{Fps, Viewport},
        error::{ScrollcueError, ScrollcueResult},
    },
    page::runtime::{Page, PageFrame},
    parallax::OutputRange,
    scroll::{region::RegionLayout, signal::ScrollSnapshot},
};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TraceSample {
    pub time: f64,
    pub scroll_y: f64,
}

/// A scroll session: fixed viewport, document and layout, plus timed scroll offsets.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScrollTrace {
    pub viewport: Viewport,
    pub document_height: f64,
    pub layout: RegionLayout,
    pub samples: Vec<TraceSample>,
}

impl ScrollTrace {
    /// Most frames a single replay may produce.
    pub const MAX_REPLAY_FRAMES: u64 = 100_000;

    pub fn from_json_str(s: &str) -> ScrollcueResult<Self> {
        let trace: Self = serde_json::from_str(s)?;
        trace.validate()?;
        Ok(trace)
    }

    pub fn validate(&self) -> ScrollcueResult<()> {
        self.viewport.validate()?;
        if !(self.document_height.is_finite() && self.document_height >= 0.0) {
            return Err(ScrollcueError::validation(
                "trace document_height must be finite and >= 0",
            ));
        }
        if self.samples.is_empty() {
            return Err(ScrollcueError::validation("trace needs at least one sample"));
        }
        if self
            .samples
            .iter()
            .any(|s| !(s.time.is_finite() && s.scroll_y.is_finite()))
        {
            return Err(ScrollcueError::validation("trace samples must be finite"));
        }
        if self.samples.windows(2).any(|w| w[0].time >= w[1].time) {
            return Err(ScrollcueError::validation(
                "trace sample times must be strictly increasing",
            ));
        }
        Ok(())
    }

    pub fn start_time(&self) -> f64 {
        self.samples.first().map_or(0.0, |s| s.time)
    }

    pub fn end_time(&self) -> f64 {
        self.samples.last().map_or(0.0, |s| s.time)
    }

    // Piecewise-linear scroll curve; `None` for a single sample.
    fn scroll_curve(&self) -> ScrollcueResult<Option<OutputRange>> {
        if self.samples.len() < 2 {
            return Ok(None);
        }
        let range = OutputRange::new(
            self.samples.iter().map(|s| s.time).collect(),
            self.samples.iter().map(|s| s.scroll_y).collect(),
        )?;
        Ok(Some(range))
    }

    /// Scroll offset at `time`, linear between samples and held outside them.
    pub fn scroll_at(&self, time: f64) -> ScrollcueResult<f64> {
        let first = self
            .samples
            .first()
            .ok_or_else(|| ScrollcueError::validation("trace needs at least one sample"))?;
        Ok(self
            .scroll_curve()?
            .map_or(first.scroll_y, |curve| curve.map_clamped(time)))
    }

    /// Drive `page` through the trace, one [`PageFrame`] per frame from the first
    /// sample to the last, inclusive of the first.
    ///
    /// Traces needing more than [`Self::MAX_REPLAY_FRAMES`] frames at `fps` are
    /// rejected before any frame is evaluated.
    pub fn replay(&self, page: &mut Page, fps: Fps) -> ScrollcueResult<Vec<PageFrame>> {
        self.validate()?;
        let start = self.start_time();
        let span = self.end_time() - start;
        let span_frames = fps.secs_to_frames_floor(span);
        if span_frames >= Self::MAX_REPLAY_FRAMES {
            return Err(ScrollcueError::validation(format!(
                "trace spans {span} s, more than {} frames at {} fps",
                Self::MAX_REPLAY_FRAMES,
                fps.as_f64()
            )));
        }
        let frames = span_frames + 1;
        tracing::info!(frames, fps = fps.as_f64(), "replaying scroll trace");

        let curve = self.scroll_curve()?;

        let mut out = Vec::new();
        for i in 0..frames {
            let time = start + fps.frames_to_secs(i);
            let scroll_y = curve
                .as_ref()
                .map_or(self.samples[0].scroll_y, |r| r.map_clamped(time));
            page.on_scroll(ScrollSnapshot::new(
                self.viewport.scrolled_to(scroll_y),
                self.document_height,
            ));
            out.push(page.tick(time, &self.layout));
        }
        Ok(out)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/page/trace.rs"]
mod tests;
