use log::{debug, warn, Level};
use serde::Deserialize;

use crate::error::MotionError;
use crate::motion::easing::Ease;
use crate::motion::entrance::Stagger;
use crate::motion::props::{Rgba, VisualProps};
use crate::motion::stack::StackShape;
use crate::motion::trigger::Anchor;
use crate::motion::tween::Timing;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Id of the optional `<script type="application/json">` block in
/// `index.html` that overrides motion defaults.
pub const MOTION_CONFIG_ID: &str = "motion-config";

const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    pub entrance: Stagger,
    pub reveal: RevealConfig,
    pub stack: StackConfig,
    pub navbar: NavbarConfig,
    pub reduced_motion: bool,
}

impl MotionConfig {
    pub fn from_json(json: &str) -> Result<Self, MotionError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub start: Anchor,
    pub y: f64,
    pub duration: f64,
    pub stagger: f64,
    pub ease: Ease,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            start: Anchor::new(0.0, 0.8),
            y: 40.0,
            duration: 0.9,
            stagger: 0.15,
            ease: Ease::Out(3),
        }
    }
}

impl RevealConfig {
    pub fn stagger(&self) -> Stagger {
        Stagger {
            y: self.y,
            duration: self.duration,
            stagger: self.stagger,
            ease: self.ease,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StackConfig {
    pub shape: StackShape,
    pub start: Anchor,
    /// Pinned distance per card, in viewport heights.
    pub span: f64,
}

impl Default for StackConfig {
    fn default() -> Self {
        Self {
            shape: StackShape::default(),
            start: Anchor::new(0.0, 0.0),
            span: 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Look {
    pub background: Rgba,
    pub backdrop_blur: f64,
    pub border_color: Rgba,
}

impl Look {
    pub fn props(&self) -> VisualProps {
        VisualProps {
            background: Some(self.background),
            backdrop_blur: Some(self.backdrop_blur),
            border_color: Some(self.border_color),
            ..Default::default()
        }
    }
}

impl Default for Look {
    fn default() -> Self {
        Self {
            background: Rgba::new(12, 18, 28, 0.0),
            backdrop_blur: 0.0,
            border_color: Rgba::new(255, 255, 255, 0.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Transition {
    pub duration: f64,
    pub ease: Ease,
}

impl Transition {
    pub fn timing(&self) -> Timing {
        Timing::new(self.duration, self.ease)
    }
}

impl Default for Transition {
    fn default() -> Self {
        Self {
            duration: 0.5,
            ease: Ease::Out(2),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct NavbarConfig {
    pub start: Anchor,
    pub end: Anchor,
    pub transparent: Look,
    pub morphed: Look,
    pub forward: Transition,
    pub reverse: Transition,
}

impl Default for NavbarConfig {
    fn default() -> Self {
        Self {
            start: Anchor::new(0.0, 0.0),
            end: Anchor::new(1.0, 0.0),
            transparent: Look::default(),
            morphed: Look {
                background: Rgba::new(12, 18, 28, 0.82),
                backdrop_blur: 14.0,
                border_color: Rgba::new(255, 255, 255, 0.08),
            },
            forward: Transition::default(),
            reverse: Transition {
                duration: 0.3,
                ease: Ease::Linear,
            },
        }
    }
}

/// Reads the page's motion settings: defaults, overridden by the inline
/// config block when present, with reduced motion forced on when the user
/// asked for it.
pub fn load() -> MotionConfig {
    let window = match web_sys::window() {
        Some(window) => window,
        None => return MotionConfig::default(),
    };

    let mut config = window
        .document()
        .and_then(|document| document.get_element_by_id(MOTION_CONFIG_ID))
        .and_then(|script| script.text_content())
        .map(|json| match MotionConfig::from_json(&json) {
            Ok(config) => {
                debug!("Loaded motion config from #{}", MOTION_CONFIG_ID);
                config
            }
            Err(e) => {
                warn!("{}, falling back to defaults", e);
                MotionConfig::default()
            }
        })
        .unwrap_or_default();

    let prefers_reduced = window
        .match_media(REDUCED_MOTION_QUERY)
        .ok()
        .flatten()
        .map(|query| query.matches())
        .unwrap_or(false);
    if prefers_reduced {
        debug!("Reduced motion requested, tweens will complete instantly");
        config.reduced_motion = true;
    }

    config
}
