//! Spring-following custom cursor (dot + ring).

use crate::{
    animation::spring::{Spring, SpringParams},
    foundation::core::{Point, Vec2},
};

/// Primary pointer precision, as reported by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerKind {
    /// Mouse or trackpad.
    Fine,
    /// Touch.
    Coarse,
}

/// Where and how large to draw one cursor element.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CursorVisual {
    /// Top-left corner, already offset so the element centers on the pointer.
    pub x: f64,
    pub y: f64,
    pub scale: f64,
}

#[derive(Clone, Debug)]
struct Follower {
    x: Spring,
    y: Spring,
    scale: Spring,
    offset: f64,
    hover_scale: f64,
}

impl Follower {
    fn new(params: SpringParams, offset: f64, hover_scale: f64) -> Self {
        Self {
            x: Spring::new(0.0, params),
            y: Spring::new(0.0, params),
            scale: Spring::new(1.0, params),
            offset,
            hover_scale,
        }
    }

    fn follow(&mut self, p: Point) {
        self.x.set_target(p.x - self.offset);
        self.y.set_target(p.y - self.offset);
    }

    fn hover(&mut self, hovering: bool) {
        self.scale
            .set_target(if hovering { self.hover_scale } else { 1.0 });
    }

    fn advance(&mut self, dt: f64) {
        self.x.advance(dt);
        self.y.advance(dt);
        self.scale.advance(dt);
    }

    fn visual(&self) -> CursorVisual {
        CursorVisual {
            x: self.x.position(),
            y: self.y.position(),
            scale: self.scale.position(),
        }
    }

    fn is_at_rest(&self) -> bool {
        self.x.is_at_rest() && self.y.is_at_rest() && self.scale.is_at_rest()
    }
}

/// A tight dot and a lagging ring that chase the pointer.
#[derive(Clone, Debug)]
pub struct CustomCursor {
    dot: Follower,
    ring: Follower,
    hovering: bool,
}

impl CustomCursor {
    pub const DOT_SPRING: SpringParams = SpringParams {
        stiffness: 500.0,
        damping: 28.0,
        mass: 1.0,
    };
    pub const RING_SPRING: SpringParams = SpringParams {
        stiffness: 150.0,
        damping: 20.0,
        mass: 1.0,
    };
    pub const DOT_OFFSET: f64 = 4.0;
    pub const RING_OFFSET: f64 = 16.0;
    pub const DOT_HOVER_SCALE: f64 = 0.5;
    pub const RING_HOVER_SCALE: f64 = 1.5;

    /// A custom cursor for fine pointers only; coarse or undetectable pointers keep
    /// the native cursor.
    pub fn detect(pointer: Option<PointerKind>) -> Option<Self> {
        match pointer {
            Some(PointerKind::Fine) => Some(Self::new()),
            Some(PointerKind::Coarse) | None => {
                tracing::debug!(?pointer, "custom cursor disabled");
                None
            }
        }
    }

    fn new() -> Self {
        Self {
            dot: Follower::new(Self::DOT_SPRING, Self::DOT_OFFSET, Self::DOT_HOVER_SCALE),
            ring: Follower::new(Self::RING_SPRING, Self::RING_OFFSET, Self::RING_HOVER_SCALE),
            hovering: false,
        }
    }

    pub fn pointer_moved(&mut self, at: Point) {
        if !(at.x.is_finite() && at.y.is_finite()) {
            return;
        }
        self.dot.follow(at);
        self.ring.follow(at);
    }

    /// Pointer entered or left an interactive element.
    pub fn set_hovering(&mut self, hovering: bool) {
        self.hovering = hovering;
        self.dot.hover(hovering);
        self.ring.hover(hovering);
    }

    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    pub fn advance(&mut self, dt_secs: f64) {
        self.dot.advance(dt_secs);
        self.ring.advance(dt_secs);
    }

    pub fn dot(&self) -> CursorVisual {
        self.dot.visual()
    }

    pub fn ring(&self) -> CursorVisual {
        self.ring.visual()
    }

    /// Distance between the dot's and ring's centers.
    pub fn lag(&self) -> Vec2 {
        let d = self.dot();
        let r = self.ring();
        Vec2::new(
            (r.x + Self::RING_OFFSET) - (d.x + Self::DOT_OFFSET),
            (r.y + Self::RING_OFFSET) - (d.y + Self::DOT_OFFSET),
        )
    }

    pub fn is_at_rest(&self) -> bool {
        self.dot.is_at_rest() && self.ring.is_at_rest()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/interaction/cursor.rs"]
mod tests;
