//! Scroll windows and the progress value derived from them.
//!
//! A window is the range of `scroll_y` values during which a trigger is
//! active. Its edges are written as anchor pairs (`"top 80%"` means "when
//! the element's top meets the line 80% down the viewport"), and resolved to
//! absolute scroll positions from the element's document layout.

use std::str::FromStr;

use serde::Deserialize;

use crate::error::MotionError;

/// Document-relative box of an element, untouched by any transform we apply.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Layout {
    pub top: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub scroll_y: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(try_from = "String")]
pub struct Anchor {
    /// Point on the element, as a fraction of its height from the top.
    pub element: f64,
    /// Point on the viewport, as a fraction of its height from the top.
    pub viewport: f64,
}

impl Anchor {
    pub const fn new(element: f64, viewport: f64) -> Self {
        Self { element, viewport }
    }

    /// Scroll position at which the two anchor points line up.
    pub fn resolve(&self, layout: Layout, viewport_height: f64) -> f64 {
        layout.top + layout.height * self.element - viewport_height * self.viewport
    }
}

fn edge(word: &str) -> Option<f64> {
    match word {
        "top" => Some(0.0),
        "center" => Some(0.5),
        "bottom" => Some(1.0),
        _ => word
            .strip_suffix('%')
            .and_then(|pct| pct.parse::<f64>().ok())
            .map(|pct| pct / 100.0),
    }
}

impl FromStr for Anchor {
    type Err = MotionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        match (words.next().and_then(edge), words.next().and_then(edge), words.next()) {
            (Some(element), Some(viewport), None) => Ok(Anchor::new(element, viewport)),
            _ => Err(MotionError::InvalidAnchor(s.to_string())),
        }
    }
}

impl TryFrom<String> for Anchor {
    type Error = MotionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TriggerWindow {
    pub start: f64,
    pub end: f64,
}

impl TriggerWindow {
    pub fn resolve(layout: Layout, start: Anchor, end: Anchor, viewport_height: f64) -> Self {
        let start = start.resolve(layout, viewport_height);
        let end = end.resolve(layout, viewport_height).max(start);
        Self { start, end }
    }

    /// Window of fixed length starting where `start` lines up.
    pub fn spanning(layout: Layout, start: Anchor, length: f64, viewport_height: f64) -> Self {
        let start = start.resolve(layout, viewport_height);
        Self {
            start,
            end: start + length.max(0.0),
        }
    }

    pub fn span(&self) -> f64 {
        self.end - self.start
    }

    /// Normalised position of `scroll_y` in the window, clamped to [0,1].
    /// A zero-length window behaves as a step at `start`.
    pub fn progress(&self, scroll_y: f64) -> f64 {
        let span = self.span();
        if span <= f64::EPSILON {
            return if scroll_y >= self.start { 1.0 } else { 0.0 };
        }
        ((scroll_y - self.start) / span).clamp(0.0, 1.0)
    }
}

/// Which edge crossing a registration reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Enter,
    Leave,
}

impl Direction {
    /// Scroll position at which the crossing happens: `start` for `Enter`,
    /// `end` for `Leave`.
    pub fn edge(self, window: &TriggerWindow) -> f64 {
        match self {
            Direction::Enter => window.start,
            Direction::Leave => window.end,
        }
    }

    pub fn crossed(self, window: &TriggerWindow, scroll_y: f64) -> bool {
        scroll_y >= self.edge(window)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    OneShot,
    Continuous,
    Bistable,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_anchor_pairs() {
        assert_eq!("top 80%".parse::<Anchor>().unwrap(), Anchor::new(0.0, 0.8));
        assert_eq!("bottom top".parse::<Anchor>().unwrap(), Anchor::new(1.0, 0.0));
        assert_eq!("center center".parse::<Anchor>().unwrap(), Anchor::new(0.5, 0.5));
        assert!("top".parse::<Anchor>().is_err());
        assert!("top top top".parse::<Anchor>().is_err());
        assert!("left 80%".parse::<Anchor>().is_err());
    }

    #[test]
    fn resolves_against_layout() {
        let hero = Layout { top: 0.0, height: 900.0 };
        let window = TriggerWindow::resolve(
            hero,
            "top top".parse().unwrap(),
            "bottom top".parse().unwrap(),
            800.0,
        );
        assert_eq!(window, TriggerWindow { start: 0.0, end: 900.0 });

        let card = Layout { top: 2000.0, height: 300.0 };
        assert_eq!(Anchor::new(0.0, 0.8).resolve(card, 1000.0), 1200.0);
    }

    #[test]
    fn progress_clamps_to_unit_range() {
        let window = TriggerWindow { start: 100.0, end: 300.0 };
        assert_eq!(window.progress(0.0), 0.0);
        assert_eq!(window.progress(200.0), 0.5);
        assert_eq!(window.progress(10_000.0), 1.0);
    }

    #[test]
    fn degenerate_window_is_a_step() {
        let window = TriggerWindow { start: 50.0, end: 50.0 };
        assert_eq!(window.progress(49.9), 0.0);
        assert_eq!(window.progress(50.0), 1.0);

        // An end anchor resolving above the start collapses onto it.
        let inverted = TriggerWindow::resolve(
            Layout { top: 500.0, height: 100.0 },
            Anchor::new(1.0, 0.0),
            Anchor::new(0.0, 0.0),
            800.0,
        );
        assert_eq!(inverted.span(), 0.0);
    }

    #[test]
    fn direction_picks_the_crossing_edge() {
        let window = TriggerWindow { start: 0.0, end: 900.0 };
        assert_eq!(Direction::Enter.edge(&window), 0.0);
        assert_eq!(Direction::Leave.edge(&window), 900.0);

        assert!(Direction::Enter.crossed(&window, 450.0));
        assert!(!Direction::Leave.crossed(&window, 450.0));
        assert!(Direction::Leave.crossed(&window, 900.0));
    }
}
