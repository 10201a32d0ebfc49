//! scrollcue is a scroll-synchronized reveal and parallax animation engine for
//! single-page sites.
//!
//! Everything a section shows is computed per tick from explicit inputs: the scroll
//! snapshot, the laid-out region geometry and the current time. Nothing keeps hidden
//! animation state outside the values a [`Section`] owns.
//!
//! # Tick overview
//!
//! 1. **Observe**: [`TrackedRegion`] latches the first time its region meets the
//!    margin-adjusted viewport.
//! 2. **Sample**: [`ScrollProgressSampler`] maps the scroll offset to unclamped progress
//!    between two [`Anchor`]s.
//! 3. **Animate**: [`RevealOrchestrator`] runs each [`StaggerGroup`]'s [`Timeline`]s
//!    from the trigger instant; [`ParallaxLayer`]s map progress through an
//!    [`OutputRange`]; [`AnimatedCounter`]s count up.
//!
//! [`Page`] wires sections to a shared [`ScrollSignal`], holds them behind an optional
//! [`IntroSequence`] and routes pointer input to [`HoverTarget`]s; [`ScrollTrace`]
//! replays a recorded scroll session into [`PageFrame`]s. The contact form
//! ([`ContactForm`]) is the only I/O, through the [`MailRelay`] seam.
#![forbid(unsafe_code)]

mod animation;
mod contact;
mod foundation;
mod interaction;
mod page;
mod parallax;
mod reveal;
mod scroll;

pub use animation::counter::AnimatedCounter;
pub use animation::ease::Ease;
pub use animation::spring::{Spring, SpringParams};
pub use animation::state::{Lerp, Property, VisualState};
pub use animation::timeline::{Repeat, RepeatMode, Timeline};
pub use contact::form::{
    ContactForm, ContactMessage, Field, FormStatus, REJECTED_NOTICE, SubmitOutcome,
    TRANSPORT_NOTICE,
};
pub use contact::relay::{HttpMailRelay, MailRelay, RelayConfig, RelayResponse};
pub use foundation::core::{Fps, Point, Rect, Vec2, Viewport, is_measurable};
pub use foundation::error::{ScrollcueError, ScrollcueResult};
pub use foundation::math::{finite_secs, lerp, progress_between};
pub use interaction::cursor::{CursorVisual, CustomCursor, PointerKind};
pub use interaction::hover::{HoverFrame, HoverLayer, HoverLayerFrame, HoverTarget, PointerState};
pub use page::intro::{
    IntroElement, IntroElementFrame, IntroFrame, IntroPhase, IntroSequence, IntroSpec,
};
pub use page::runtime::{Page, PageFrame, PageSpec};
pub use page::section::{
    AmbientFrame, AmbientSpec, CounterSpec, CounterValue, GroupSpec, HoverSpec, ParallaxValue,
    Section, SectionFrame, SectionSpec,
};
pub use page::trace::{ScrollTrace, TraceSample};
pub use parallax::{OutputRange, ParallaxLayer, map as map_output_range};
pub use reveal::orchestrator::{GroupFrame, RevealOrchestrator};
pub use reveal::stagger::StaggerGroup;
pub use scroll::progress::{Anchor, ScrollProgressSampler, page_progress, sample_progress};
pub use scroll::region::{RegionId, RegionLayout};
pub use scroll::signal::{ScrollSignal, ScrollSnapshot, Subscription};
pub use scroll::visibility::{TrackedRegion, in_view, trigger_zone};
