use std::collections::BTreeMap;

use crate::foundation::core::Vec2;

/// An animatable visual property.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Property {
    Opacity,
    /// Horizontal translation in px.
    X,
    /// Vertical translation in px.
    Y,
    Scale,
    /// Rotation in degrees.
    Rotate,
    RotateX,
    RotateY,
    /// Depth translation in px.
    Z,
    /// `clip-path: circle(r%)` radius.
    ClipRadius,
    /// `clip-path: inset(t% 0 0 0)` top inset.
    ClipInset,
    /// Width as a percentage of the container (progress bars).
    Width,
    Red,
    Green,
    Blue,
    Alpha,
}

/// A snapshot of animatable properties for one element.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct VisualState {
    props: BTreeMap<Property, f64>,
}

impl VisualState {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, property: Property, value: f64) -> Self {
        self.props.insert(property, value);
        self
    }

    pub fn set(&mut self, property: Property, value: f64) {
        self.props.insert(property, value);
    }

    pub fn get(&self, property: Property) -> Option<f64> {
        self.props.get(&property).copied()
    }

    pub fn len(&self) -> usize {
        self.props.len()
    }

    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Property, f64)> + '_ {
        self.props.iter().map(|(p, v)| (*p, *v))
    }

    pub fn properties(&self) -> impl Iterator<Item = Property> + '_ {
        self.props.keys().copied()
    }

    pub fn same_properties(&self, other: &Self) -> bool {
        self.props.len() == other.props.len() && self.props.keys().eq(other.props.keys())
    }

    /// Overlay `other` on top of `self`; properties in `other` win.
    pub fn merge(&mut self, other: &Self) {
        for (p, v) in other.iter() {
            self.props.insert(p, v);
        }
    }

    pub fn is_finite(&self) -> bool {
        self.props.values().all(|v| v.is_finite())
    }
}

impl FromIterator<(Property, f64)> for VisualState {
    fn from_iter<I: IntoIterator<Item = (Property, f64)>>(iter: I) -> Self {
        Self {
            props: iter.into_iter().collect(),
        }
    }
}

pub trait Lerp: Sized {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for Vec2 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Vec2::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
    }
}

impl Lerp for VisualState {
    // Keyed by `a`; a property missing from `b` holds its `a` value.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a.iter()
            .map(|(p, av)| {
                let bv = b.get(p).unwrap_or(av);
                (p, <f64 as Lerp>::lerp(&av, &bv, t))
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/state.rs"]
mod tests;
