//! Declarative section description and its per-tick evaluation.

use crate::{
    animation::{
        counter::AnimatedCounter,
        state::{Property, VisualState},
        timeline::Timeline,
    },
    foundation::{
        error::{ScrollcueError, ScrollcueResult},
        math::finite_secs,
    },
    interaction::hover::{HoverFrame, HoverLayer, HoverTarget, PointerState},
    parallax::ParallaxLayer,
    reveal::{
        orchestrator::{GroupFrame, RevealOrchestrator},
        stagger::StaggerGroup,
    },
    scroll::{
        progress::ScrollProgressSampler,
        region::{RegionId, RegionLayout},
        signal::ScrollSnapshot,
        visibility::TrackedRegion,
    },
};

// Raw group object; exactly one of the forms below must be present.
#[derive(Clone, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
struct GroupSpecDef {
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    members: Option<Vec<Timeline>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    template: Option<Timeline>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    delays: Option<Vec<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    count: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    base: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    step: Option<f64>,
}

/// A reveal group as written in a page file.
///
/// The form is picked by its keys: `members`, `template` + `delays`, or `template` +
/// `count` (with optional `base`/`step`). Mixed or unknown keys are rejected.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "GroupSpecDef", into = "GroupSpecDef")]
pub enum GroupSpec {
    /// Members listed one by one.
    Members(StaggerGroup),
    /// One template with an explicit delay per member.
    Delays {
        name: String,
        template: Timeline,
        delays: Vec<f64>,
    },
    /// `count` copies of a template, `base + step * i` apart.
    Uniform {
        name: String,
        template: Timeline,
        count: usize,
        base: f64,
        step: f64,
    },
}

impl TryFrom<GroupSpecDef> for GroupSpec {
    type Error = ScrollcueError;

    fn try_from(def: GroupSpecDef) -> Result<Self, Self::Error> {
        let GroupSpecDef {
            name,
            members,
            template,
            delays,
            count,
            base,
            step,
        } = def;
        let spacing = base.is_some() || step.is_some();
        match (members, template, delays, count) {
            (Some(members), None, None, None) if !spacing => {
                Ok(Self::Members(StaggerGroup::new(name, members)))
            }
            (Some(_), ..) => Err(ScrollcueError::validation(format!(
                "group '{name}': `members` cannot be combined with template keys"
            ))),
            (None, Some(_), Some(_), Some(_)) => Err(ScrollcueError::validation(format!(
                "group '{name}': `delays` and `count` are mutually exclusive"
            ))),
            (None, Some(_), Some(_), None) if spacing => Err(ScrollcueError::validation(
                format!("group '{name}': `base`/`step` only apply with `count`"),
            )),
            (None, Some(template), Some(delays), None) => Ok(Self::Delays {
                name,
                template,
                delays,
            }),
            (None, Some(template), None, Some(count)) => Ok(Self::Uniform {
                name,
                template,
                count,
                base: base.unwrap_or(0.0),
                step: step.unwrap_or(0.0),
            }),
            (None, Some(_), None, None) => Err(ScrollcueError::validation(format!(
                "group '{name}': template needs `delays` or `count`"
            ))),
            (None, None, ..) => Err(ScrollcueError::validation(format!(
                "group '{name}' needs `members`, or a `template` with `delays` or `count`"
            ))),
        }
    }
}

impl From<GroupSpec> for GroupSpecDef {
    fn from(spec: GroupSpec) -> Self {
        let mut def = Self {
            name: String::new(),
            members: None,
            template: None,
            delays: None,
            count: None,
            base: None,
            step: None,
        };
        match spec {
            GroupSpec::Members(group) => {
                def.name = group.name;
                def.members = Some(group.members);
            }
            GroupSpec::Delays {
                name,
                template,
                delays,
            } => {
                def.name = name;
                def.template = Some(template);
                def.delays = Some(delays);
            }
            GroupSpec::Uniform {
                name,
                template,
                count,
                base,
                step,
            } => {
                def.name = name;
                def.template = Some(template);
                def.count = Some(count);
                def.base = Some(base);
                def.step = Some(step);
            }
        }
        def
    }
}

impl GroupSpec {
    pub fn build(&self) -> StaggerGroup {
        match self {
            Self::Members(group) => group.clone(),
            Self::Delays {
                name,
                template,
                delays,
            } => StaggerGroup::with_delays(name.clone(), template, delays),
            Self::Uniform {
                name,
                template,
                count,
                base,
                step,
            } => StaggerGroup::uniform(name.clone(), template, *count, *base, *step),
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CounterSpec {
    pub label: String,
    #[serde(flatten)]
    pub counter: AnimatedCounter,
}

/// A decorative animation that runs from mount, independent of visibility.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AmbientSpec {
    pub target: String,
    pub timeline: Timeline,
}

/// Elements that react together to the pointer entering one target.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct HoverSpec {
    pub id: String,
    pub layers: Vec<HoverLayer>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SectionSpec {
    pub id: RegionId,
    /// Trigger-zone margin in px; negative waits until the region is well inside.
    #[serde(default)]
    pub margin: f64,
    #[serde(default)]
    pub reveal: Vec<GroupSpec>,
    #[serde(default)]
    pub scroll: Option<ScrollProgressSampler>,
    #[serde(default)]
    pub parallax: Vec<ParallaxLayer>,
    #[serde(default)]
    pub counters: Vec<CounterSpec>,
    #[serde(default)]
    pub ambient: Vec<AmbientSpec>,
    #[serde(default)]
    pub hover: Vec<HoverSpec>,
}

impl SectionSpec {
    pub fn validate(&self) -> ScrollcueResult<()> {
        if self.id.as_str().trim().is_empty() {
            return Err(ScrollcueError::validation("section id must be non-empty"));
        }
        if !self.margin.is_finite() {
            return Err(ScrollcueError::validation(format!(
                "section '{}' margin must be finite",
                self.id
            )));
        }
        for group in &self.reveal {
            group.build().validate()?;
        }
        for counter in &self.counters {
            let c = &counter.counter;
            if finite_secs(c.duration).is_none() || finite_secs(c.delay).is_none() {
                return Err(ScrollcueError::animation(format!(
                    "counter '{}' timing must be finite and >= 0",
                    counter.label
                )));
            }
        }
        for ambient in &self.ambient {
            ambient.timeline.validate()?;
        }
        let mut hover_ids = std::collections::BTreeSet::new();
        for hover in &self.hover {
            if !hover_ids.insert(hover.id.as_str()) {
                return Err(ScrollcueError::validation(format!(
                    "section '{}' has duplicate hover target '{}'",
                    self.id, hover.id
                )));
            }
            HoverTarget::new(hover.id.clone(), hover.layers.clone())?;
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ParallaxValue {
    pub target: String,
    pub property: Property,
    pub value: f64,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CounterValue {
    pub label: String,
    pub value: u64,
    pub display: String,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AmbientFrame {
    pub target: String,
    pub state: VisualState,
}

/// Everything a section shows for one tick.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SectionFrame {
    pub id: RegionId,
    pub entered: bool,
    pub progress: f64,
    pub groups: Vec<GroupFrame>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parallax: Vec<ParallaxValue>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub counters: Vec<CounterValue>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ambient: Vec<AmbientFrame>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub hover: Vec<HoverFrame>,
}

/// A mounted section: owns its region tracker, timelines and scroll sampler.
#[derive(Clone, Debug)]
pub struct Section {
    id: RegionId,
    reveal: RevealOrchestrator,
    sampler: ScrollProgressSampler,
    parallax: Vec<ParallaxLayer>,
    counters: Vec<CounterSpec>,
    ambient: Vec<AmbientSpec>,
    hover: Vec<HoverTarget>,
    mounted_at: f64,
}

impl Section {
    pub fn from_spec(spec: &SectionSpec, mounted_at: f64) -> ScrollcueResult<Self> {
        spec.validate()?;
        let tracker = TrackedRegion::new(spec.id.clone(), spec.margin);
        let groups = spec.reveal.iter().map(GroupSpec::build).collect();
        let hover = spec
            .hover
            .iter()
            .map(|h| HoverTarget::new(h.id.clone(), h.layers.clone()))
            .collect::<ScrollcueResult<_>>()?;
        Ok(Self {
            id: spec.id.clone(),
            reveal: RevealOrchestrator::new(tracker, groups),
            sampler: spec.scroll.unwrap_or_default(),
            parallax: spec.parallax.clone(),
            counters: spec.counters.clone(),
            ambient: spec.ambient.clone(),
            hover,
            mounted_at,
        })
    }

    pub fn id(&self) -> &RegionId {
        &self.id
    }

    pub fn has_entered_viewport(&self) -> bool {
        self.reveal.tracker().has_entered_viewport()
    }

    pub fn reveal(&self) -> &RevealOrchestrator {
        &self.reveal
    }

    pub fn mounted_at(&self) -> f64 {
        self.mounted_at
    }

    pub fn hover_target(&self, id: &str) -> Option<&HoverTarget> {
        self.hover.iter().find(|h| h.id() == id)
    }

    /// Route pointer input to hover target `id`. Returns whether its state changed;
    /// unknown targets and input before mount are ignored.
    pub fn set_pointer(&mut self, id: &str, pointer: PointerState, now: f64) -> bool {
        if now < self.mounted_at {
            return false;
        }
        self.hover
            .iter_mut()
            .find(|h| h.id() == id)
            .is_some_and(|h| h.set_pointer(pointer, now))
    }

    /// Evaluate this tick: visibility, then scroll progress, then reveal timelines,
    /// parallax, counters, ambient loops and hover transitions.
    ///
    /// Without a scroll snapshot nothing can be observed; progress reads 0.
    pub fn frame(
        &mut self,
        now: f64,
        snapshot: Option<&ScrollSnapshot>,
        layout: &RegionLayout,
    ) -> SectionFrame {
        let rect = layout.measure(&self.id);

        let entered = match snapshot {
            Some(s) => self.reveal.observe(now, rect, &s.viewport),
            None => self.reveal.triggered_at().is_some(),
        };
        let progress = snapshot.map_or(0.0, |s| self.sampler.sample(rect, &s.viewport));

        let groups = self.reveal.frame(now);
        let parallax = self
            .parallax
            .iter()
            .map(|layer| ParallaxValue {
                target: layer.target.clone(),
                property: layer.property,
                value: layer.value(progress),
            })
            .collect();

        let elapsed = self.reveal.elapsed(now);
        let counters = self
            .counters
            .iter()
            .map(|c| {
                let value = elapsed.map_or(0, |e| c.counter.value_at(e));
                CounterValue {
                    label: c.label.clone(),
                    value,
                    display: format!("{value}{}", c.counter.suffix),
                }
            })
            .collect();

        let since_mount = (now - self.mounted_at).max(0.0);
        let ambient = self
            .ambient
            .iter()
            .map(|a| AmbientFrame {
                target: a.target.clone(),
                state: a.timeline.advance(since_mount),
            })
            .collect();

        let hover = self.hover.iter().map(|h| h.frame(now)).collect();

        SectionFrame {
            id: self.id.clone(),
            entered,
            progress,
            groups,
            parallax,
            counters,
            ambient,
            hover,
        }
    }

    pub fn unmount(&mut self, now: f64) {
        self.reveal.unmount(now);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/page/section.rs"]
mod tests;
