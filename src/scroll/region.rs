use std::collections::BTreeMap;

use crate::foundation::core::{Rect, is_measurable};

/// Stable handle for a tracked area of the document.
#[derive(
    Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct RegionId(pub String);

impl RegionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RegionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RegionId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

/// Document-space rectangles of the regions currently laid out.
///
/// A region that is absent, or whose rect has not settled into finite non-inverted
/// coordinates, measures as `None`.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct RegionLayout {
    rects: BTreeMap<RegionId, Rect>,
}

impl RegionLayout {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, id: impl Into<RegionId>, rect: Rect) -> Self {
        self.rects.insert(id.into(), rect);
        self
    }

    pub fn insert(&mut self, id: impl Into<RegionId>, rect: Rect) {
        self.rects.insert(id.into(), rect);
    }

    pub fn remove(&mut self, id: &RegionId) -> Option<Rect> {
        self.rects.remove(id)
    }

    pub fn measure(&self, id: &RegionId) -> Option<Rect> {
        self.rects.get(id).copied().filter(|r| is_measurable(*r))
    }

    pub fn len(&self) -> usize {
        self.rects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/region.rs"]
mod tests;
