use crate::foundation::error::{ScrollcueError, ScrollcueResult};

pub use kurbo::{Point, Rect, Vec2};

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    pub num: u32,
    pub den: u32, // must be > 0
}

impl Fps {
    pub fn new(num: u32, den: u32) -> ScrollcueResult<Self> {
        if den == 0 {
            return Err(ScrollcueError::validation("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(ScrollcueError::validation("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    pub fn frame_duration_secs(self) -> f64 {
        f64::from(self.den) / f64::from(self.num)
    }

    pub fn frames_to_secs(self, frames: u64) -> f64 {
        (frames as f64) * self.frame_duration_secs()
    }

    pub fn secs_to_frames_floor(self, secs: f64) -> u64 {
        (secs * self.as_f64()).floor().max(0.0) as u64
    }
}

/// The visible window onto the document, in document coordinates.
///
/// `scroll_y` is the document offset of the viewport's top edge.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub scroll_y: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> ScrollcueResult<Self> {
        let vp = Self {
            width,
            height,
            scroll_y: 0.0,
        };
        vp.validate()?;
        Ok(vp)
    }

    pub fn validate(&self) -> ScrollcueResult<()> {
        if !(self.width.is_finite() && self.height.is_finite() && self.scroll_y.is_finite()) {
            return Err(ScrollcueError::geometry("viewport values must be finite"));
        }
        if self.width < 0.0 || self.height < 0.0 {
            return Err(ScrollcueError::geometry(
                "viewport width/height must be >= 0",
            ));
        }
        Ok(())
    }

    #[must_use]
    pub fn scrolled_to(mut self, scroll_y: f64) -> Self {
        self.scroll_y = scroll_y;
        self
    }

    /// Visible area in document coordinates.
    pub fn visible_rect(&self) -> Rect {
        Rect::new(0.0, self.scroll_y, self.width, self.scroll_y + self.height)
    }

    pub fn is_measurable(&self) -> bool {
        self.validate().is_ok()
    }
}

/// Whether a measured rect can be used for visibility/progress math.
///
/// Rects with non-finite coordinates or inverted edges come from layout that has not
/// settled yet.
pub fn is_measurable(rect: Rect) -> bool {
    rect.x0.is_finite()
        && rect.y0.is_finite()
        && rect.x1.is_finite()
        && rect.y1.is_finite()
        && rect.x0 <= rect.x1
        && rect.y0 <= rect.y1
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
