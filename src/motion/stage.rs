//! The orchestrator core: owns every target and trigger registration for one
//! mount of the page, evaluates them against scroll position, and advances
//! running tweens on each frame.
//!
//! `Stage` knows nothing about the DOM. Elements are reached through the
//! [`Target`] trait, so the whole pipeline runs natively under test.

use std::collections::{BTreeMap, BTreeSet};

use log::debug;

use super::props::VisualProps;
use super::stack;
use super::toggle::{BistableToggle, NavState};
use super::trigger::{Anchor, Direction, Layout, Mode, TriggerWindow, Viewport};
use super::tween::{Timing, Tween};
use crate::config::MotionConfig;

/// Something the stage can measure and restyle.
pub trait Target {
    /// Document-relative layout, or `None` if the element is gone.
    fn layout(&self) -> Option<Layout>;

    fn apply(&self, props: &VisualProps);

    /// Drops every style this stage applied.
    fn revert(&self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TargetId(usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RegistrationId(usize);

#[derive(Debug, Clone, Copy, PartialEq)]
enum Bounds {
    Anchors(Anchor, Anchor),
    /// Start anchor plus a length in viewport heights.
    Span(Anchor, f64),
}

impl Bounds {
    fn resolve(&self, layout: Layout, viewport_height: f64) -> TriggerWindow {
        match *self {
            Bounds::Anchors(start, end) => TriggerWindow::resolve(layout, start, end, viewport_height),
            Bounds::Span(start, heights) => {
                TriggerWindow::spanning(layout, start, heights * viewport_height, viewport_height)
            }
        }
    }
}

#[derive(Debug)]
enum Behavior {
    Reveal { targets: Vec<TargetId>, fired: bool },
    Scrub { index: usize, total: usize },
    Toggle { target: TargetId, toggle: BistableToggle },
}

#[derive(Debug)]
struct Registration {
    id: RegistrationId,
    trigger: TargetId,
    bounds: Bounds,
    window: TriggerWindow,
    direction: Direction,
    behavior: Behavior,
}

impl Registration {
    /// Scroll position this registration's direction reacts to.
    fn edge(&self) -> f64 {
        self.direction.edge(&self.window)
    }

    fn mode(&self) -> Mode {
        match self.behavior {
            Behavior::Reveal { .. } => Mode::OneShot,
            Behavior::Scrub { .. } => Mode::Continuous,
            Behavior::Toggle { .. } => Mode::Bistable,
        }
    }
}

enum Fired {
    Reveal(Vec<TargetId>),
    Toggle(TargetId, NavState),
}

pub struct Stage<T> {
    config: MotionConfig,
    targets: Vec<T>,
    registrations: Vec<Registration>,
    tweens: BTreeMap<TargetId, Tween>,
    entered: BTreeSet<TargetId>,
    viewport: Viewport,
    next_registration: usize,
    released: bool,
}

impl<T: Target> Stage<T> {
    pub fn new(config: MotionConfig, viewport: Viewport) -> Self {
        Self {
            config,
            targets: Vec::new(),
            registrations: Vec::new(),
            tweens: BTreeMap::new(),
            entered: BTreeSet::new(),
            viewport,
            next_registration: 0,
            released: false,
        }
    }

    pub fn add_target(&mut self, target: T) -> TargetId {
        self.targets.push(target);
        TargetId(self.targets.len() - 1)
    }

    pub fn registration_count(&self) -> usize {
        self.registrations.len()
    }

    pub fn is_released(&self) -> bool {
        self.released
    }

    pub fn is_animating(&self) -> bool {
        !self.tweens.is_empty()
    }

    /// State of the first bistable registration, if any.
    pub fn nav_state(&self) -> Option<NavState> {
        self.registrations.iter().find_map(|r| match &r.behavior {
            Behavior::Toggle { toggle, .. } => Some(toggle.state()),
            _ => None,
        })
    }

    pub fn progress(&self, id: RegistrationId) -> Option<f64> {
        self.registrations
            .iter()
            .find(|r| r.id == id)
            .map(|r| r.window.progress(self.viewport.scroll_y))
    }

    fn timing(&self, timing: Timing) -> Timing {
        if self.config.reduced_motion {
            Timing::instant()
        } else {
            timing
        }
    }

    fn apply(&self, id: TargetId, props: &VisualProps) {
        if let Some(target) = self.targets.get(id.0) {
            target.apply(props);
        }
    }

    fn register(&mut self, trigger: TargetId, bounds: Bounds, direction: Direction, behavior: Behavior) -> Option<RegistrationId> {
        if self.released {
            return None;
        }
        let layout = match self.targets.get(trigger.0).and_then(|t| t.layout()) {
            Some(layout) => layout,
            None => {
                debug!("Trigger target {:?} has no layout, skipping", trigger);
                return None;
            }
        };
        let id = RegistrationId(self.next_registration);
        self.next_registration += 1;
        let reg = Registration {
            id,
            trigger,
            bounds,
            window: bounds.resolve(layout, self.viewport.height),
            direction,
            behavior,
        };
        debug!(
            "Registered {:?}: {:?} on {:?}, window {:.0}..{:.0}",
            id,
            reg.mode(),
            reg.direction,
            reg.window.start,
            reg.window.end
        );
        self.registrations.push(reg);
        Some(id)
    }

    /// Staggers `targets` in from hidden, once per stage. Ids already entered
    /// are skipped.
    pub fn entrance(&mut self, targets: &[TargetId], now: f64) {
        if self.released {
            return;
        }
        let fresh: Vec<TargetId> = targets
            .iter()
            .copied()
            .filter(|id| id.0 < self.targets.len() && self.entered.insert(*id))
            .collect();
        if fresh.is_empty() {
            return;
        }
        let stagger = self.config.entrance.clone();
        let tweens = stagger.sequence(fresh.len(), now, self.config.reduced_motion);
        for (id, tween) in fresh.into_iter().zip(tweens) {
            self.apply(id, &stagger.hidden());
            self.tweens.insert(id, tween);
        }
    }

    /// One-shot reveal of `targets` when `trigger`'s top crosses the
    /// configured viewport line. Targets are hidden right away.
    pub fn reveal(&mut self, trigger: TargetId, targets: Vec<TargetId>) -> Option<RegistrationId> {
        let start = self.config.reveal.start;
        let hidden = self.config.reveal.stagger().hidden();
        let id = self.register(
            trigger,
            Bounds::Anchors(start, start),
            Direction::Enter,
            Behavior::Reveal {
                targets: targets.clone(),
                fired: false,
            },
        )?;
        for target in targets {
            self.apply(target, &hidden);
        }
        Some(id)
    }

    /// Pins each card for its own window and scrubs its look from progress.
    pub fn stack(&mut self, cards: &[TargetId]) -> Vec<RegistrationId> {
        let bounds = Bounds::Span(self.config.stack.start, self.config.stack.span);
        let total = cards.len();
        let mut ids = Vec::with_capacity(total);
        for (index, &card) in cards.iter().enumerate() {
            let Some(id) = self.register(card, bounds, Direction::Enter, Behavior::Scrub { index, total }) else {
                continue;
            };
            let z = VisualProps {
                z_index: Some(stack::z_order(index, total)),
                ..Default::default()
            };
            self.apply(card, &z);
            ids.push(id);
        }
        ids
    }

    /// Switches `target` between the transparent and morphed looks as
    /// scrolling leaves (or re-enters) the bottom of `trigger`.
    pub fn toggle(&mut self, trigger: TargetId, target: TargetId) -> Option<RegistrationId> {
        let navbar = &self.config.navbar;
        let bounds = Bounds::Anchors(navbar.start, navbar.end);
        let initial = navbar.transparent.props();
        let id = self.register(
            trigger,
            bounds,
            Direction::Leave,
            Behavior::Toggle {
                target,
                toggle: BistableToggle::new(f64::INFINITY),
            },
        )?;
        if let Some(reg) = self.registrations.last_mut() {
            let edge = reg.edge();
            if let Behavior::Toggle { toggle, .. } = &mut reg.behavior {
                toggle.set_edge(edge);
            }
        }
        self.apply(target, &initial);
        Some(id)
    }

    /// Re-measures every window, e.g. after a resize.
    pub fn measure(&mut self, viewport: Viewport) {
        if self.released {
            return;
        }
        self.viewport = viewport;
        for reg in &mut self.registrations {
            let Some(layout) = self.targets.get(reg.trigger.0).and_then(|t| t.layout()) else {
                continue;
            };
            reg.window = reg.bounds.resolve(layout, viewport.height);
            let edge = reg.edge();
            if let Behavior::Toggle { toggle, .. } = &mut reg.behavior {
                toggle.set_edge(edge);
            }
        }
    }

    /// Evaluates every registration at the new scroll position. Scrubbed
    /// cards are restyled immediately; fired triggers schedule tweens.
    pub fn on_scroll(&mut self, viewport: Viewport, now: f64) {
        if self.released {
            return;
        }
        self.viewport = viewport;
        let scroll_y = viewport.scroll_y;
        let shape = &self.config.stack.shape;
        let mut fired = Vec::new();

        for reg in &mut self.registrations {
            match &mut reg.behavior {
                Behavior::Reveal { targets, fired: done } => {
                    if !*done && reg.direction.crossed(&reg.window, scroll_y) {
                        *done = true;
                        fired.push(Fired::Reveal(targets.clone()));
                    }
                }
                Behavior::Scrub { index, total } => {
                    let progress = reg.window.progress(scroll_y);
                    let pin = stack::pin_offset(&reg.window, scroll_y);
                    let props = stack::card_props(shape, progress, *index, *total, pin);
                    if let Some(card) = self.targets.get(reg.trigger.0) {
                        card.apply(&props);
                    }
                }
                Behavior::Toggle { target, toggle } => {
                    if let Some(state) = toggle.update(scroll_y) {
                        fired.push(Fired::Toggle(*target, state));
                    }
                }
            }
        }

        for event in fired {
            match event {
                Fired::Reveal(targets) => self.play_reveal(&targets, now),
                Fired::Toggle(target, state) => self.play_toggle(target, state, now),
            }
        }
    }

    fn play_reveal(&mut self, targets: &[TargetId], now: f64) {
        let stagger = self.config.reveal.stagger();
        let tweens = stagger.sequence(targets.len(), now, self.config.reduced_motion);
        for (&id, tween) in targets.iter().zip(tweens) {
            self.tweens.insert(id, tween);
        }
    }

    fn play_toggle(&mut self, target: TargetId, state: NavState, now: f64) {
        let navbar = &self.config.navbar;
        let (from, to, timing) = match state {
            NavState::Morphed => (navbar.transparent.props(), navbar.morphed.props(), navbar.forward.timing()),
            NavState::Transparent => (navbar.morphed.props(), navbar.transparent.props(), navbar.reverse.timing()),
        };
        let timing = self.timing(timing);
        debug!("Navbar -> {:?}", state);

        // Interrupt-and-restart: pick up from wherever a running transition is.
        let tween = match self.tweens.get(&target) {
            Some(running) => running.retarget(to, timing, now),
            None => Tween::new(from, to, timing, now),
        };
        self.tweens.insert(target, tween);
    }

    /// Advances running tweens. Returns whether any are still running.
    pub fn on_frame(&mut self, now: f64) -> bool {
        if self.released {
            return false;
        }
        let mut finished = Vec::new();
        for (id, tween) in &self.tweens {
            if let Some(target) = self.targets.get(id.0) {
                target.apply(&tween.sample(now));
            }
            if tween.is_finished(now) {
                finished.push(*id);
            }
        }
        for id in finished {
            self.tweens.remove(&id);
        }
        !self.tweens.is_empty()
    }

    /// Releases every registration and tween in one go and restores the
    /// targets' original styling. Later calls are no-ops.
    pub fn release(&mut self) {
        if self.released {
            return;
        }
        debug!(
            "Releasing {} registrations and {} tweens",
            self.registrations.len(),
            self.tweens.len()
        );
        self.registrations.clear();
        self.tweens.clear();
        self.entered.clear();
        for target in self.targets.drain(..) {
            target.revert();
        }
        self.released = true;
    }
}
