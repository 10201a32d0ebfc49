use std::{cell::Cell, collections::BTreeSet, rc::Rc};

use crate::{
    foundation::error::{ScrollcueError, ScrollcueResult},
    interaction::hover::PointerState,
    page::{
        intro::{IntroFrame, IntroSequence, IntroSpec},
        section::{Section, SectionFrame, SectionSpec},
    },
    scroll::{
        progress::page_progress,
        region::{RegionId, RegionLayout},
        signal::{ScrollSignal, ScrollSnapshot, Subscription},
    },
};

/// A whole page as written in a page file.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PageSpec {
    /// Splash sequence played before any section mounts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intro: Option<IntroSpec>,
    pub sections: Vec<SectionSpec>,
}

impl PageSpec {
    pub fn from_json_str(s: &str) -> ScrollcueResult<Self> {
        let spec: Self = serde_json::from_str(s)?;
        spec.validate()?;
        Ok(spec)
    }

    pub fn validate(&self) -> ScrollcueResult<()> {
        if let Some(intro) = &self.intro {
            intro.validate()?;
        }
        let mut seen = BTreeSet::new();
        for section in &self.sections {
            if !seen.insert(&section.id) {
                return Err(ScrollcueError::validation(format!(
                    "duplicate section id '{}'",
                    section.id
                )));
            }
            section.validate()?;
        }
        Ok(())
    }
}

/// Everything the page shows for one tick.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PageFrame {
    pub time: f64,
    /// Whole-document progress for the scroll indicator.
    pub page_progress: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intro: Option<IntroFrame>,
    pub sections: Vec<SectionFrame>,
}

struct MountedSection {
    section: Section,
    latest: Rc<Cell<Option<ScrollSnapshot>>>,
    _subscription: Subscription,
}

/// Mounted sections sharing one scroll signal.
pub struct Page {
    signal: ScrollSignal,
    intro: Option<IntroSequence>,
    sections: Vec<MountedSection>,
}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Page")
            .field("signal", &self.signal)
            .field("intro", &self.intro)
            .field(
                "sections",
                &self.sections.iter().map(|m| m.section.id()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl Page {
    pub fn new() -> Self {
        Self {
            signal: ScrollSignal::new(),
            intro: None,
            sections: Vec::new(),
        }
    }

    /// Start the intro (if any) and mount every section of `spec` at time `now`.
    pub fn from_spec(spec: &PageSpec, now: f64) -> ScrollcueResult<Self> {
        spec.validate()?;
        let mut page = Self::new();
        if let Some(intro) = &spec.intro {
            page.intro = Some(IntroSequence::start(intro.clone(), now)?);
        }
        for section in &spec.sections {
            page.mount(section, now)?;
        }
        Ok(page)
    }

    pub fn mount(&mut self, spec: &SectionSpec, now: f64) -> ScrollcueResult<()> {
        if self.section(&spec.id).is_some() {
            return Err(ScrollcueError::validation(format!(
                "section '{}' is already mounted",
                spec.id
            )));
        }
        // Sections mounted behind the splash start their clocks when it leaves.
        let mounted_at = self
            .intro
            .as_ref()
            .map_or(now, |intro| intro.content_start().max(now));
        let section = Section::from_spec(spec, mounted_at)?;
        let latest = Rc::new(Cell::new(self.signal.latest()));
        let subscription = {
            let latest = Rc::clone(&latest);
            self.signal.subscribe(move |snapshot| latest.set(Some(*snapshot)))
        };
        tracing::debug!(section = %spec.id, mounted_at, "section mounted");
        self.sections.push(MountedSection {
            section,
            latest,
            _subscription: subscription,
        });
        Ok(())
    }

    /// Drop a section together with its listener and timelines. Returns whether it
    /// was mounted.
    pub fn unmount(&mut self, id: &RegionId, now: f64) -> bool {
        let Some(pos) = self.sections.iter().position(|m| m.section.id() == id) else {
            return false;
        };
        let mut mounted = self.sections.remove(pos);
        mounted.section.unmount(now);
        tracing::debug!(section = %id, now, "section unmounted");
        true
    }

    /// Scroll or resize input.
    pub fn on_scroll(&self, snapshot: ScrollSnapshot) {
        self.signal.publish(snapshot);
    }

    pub fn intro(&self) -> Option<&IntroSequence> {
        self.intro.as_ref()
    }

    /// Whether section content is live at `now` (always, without an intro).
    pub fn is_content_mounted(&self, now: f64) -> bool {
        self.intro
            .as_ref()
            .is_none_or(|intro| intro.is_content_mounted(now))
    }

    /// Pointer input for hover target `target` of section `section`. Returns whether
    /// the target's state changed.
    pub fn set_pointer(
        &mut self,
        section: &RegionId,
        target: &str,
        pointer: PointerState,
        now: f64,
    ) -> bool {
        if !self.is_content_mounted(now) {
            return false;
        }
        self.sections
            .iter_mut()
            .find(|m| m.section.id() == section)
            .is_some_and(|m| m.section.set_pointer(target, pointer, now))
    }

    pub fn signal(&self) -> &ScrollSignal {
        &self.signal
    }

    pub fn listener_count(&self) -> usize {
        self.signal.listener_count()
    }

    pub fn section(&self, id: &RegionId) -> Option<&Section> {
        self.sections
            .iter()
            .map(|m| &m.section)
            .find(|s| s.id() == id)
    }

    pub fn section_ids(&self) -> impl Iterator<Item = &RegionId> + '_ {
        self.sections.iter().map(|m| m.section.id())
    }

    #[tracing::instrument(level = "trace", skip(self, layout), fields(sections = self.sections.len()))]
    pub fn tick(&mut self, now: f64, layout: &RegionLayout) -> PageFrame {
        let page_progress = self.signal.latest().map_or(0.0, |s| page_progress(&s));
        let live = self.is_content_mounted(now);
        let sections = self
            .sections
            .iter_mut()
            .map(|m| {
                // Behind the splash nothing is on screen to observe.
                let snapshot = if live { m.latest.get() } else { None };
                m.section.frame(now, snapshot.as_ref(), layout)
            })
            .collect();
        PageFrame {
            time: now,
            page_progress,
            intro: self.intro.as_ref().map(|intro| intro.frame(now)),
            sections,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/page/runtime.rs"]
mod tests;
