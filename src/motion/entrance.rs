use serde::Deserialize;

use super::easing::Ease;
use super::props::VisualProps;
use super::tween::{Timing, Tween};

/// Parameters of a staggered fade-and-rise.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Stagger {
    /// Starting vertical offset in px.
    pub y: f64,
    pub duration: f64,
    /// Delay added per element, in seconds.
    pub stagger: f64,
    pub ease: Ease,
}

impl Default for Stagger {
    fn default() -> Self {
        Self {
            y: 50.0,
            duration: 1.2,
            stagger: 0.12,
            ease: Ease::Out(3),
        }
    }
}

impl Stagger {
    pub fn hidden(&self) -> VisualProps {
        VisualProps {
            opacity: Some(0.0),
            y: Some(self.y),
            ..Default::default()
        }
    }

    pub fn shown() -> VisualProps {
        VisualProps {
            opacity: Some(1.0),
            y: Some(0.0),
            ..Default::default()
        }
    }

    pub fn timing(&self, position: usize) -> Timing {
        Timing::new(self.duration, self.ease).delayed(self.stagger * position as f64)
    }

    /// One tween per element, in order, each offset by `stagger` from the
    /// previous one.
    pub fn sequence(&self, count: usize, now: f64, instant: bool) -> Vec<Tween> {
        (0..count)
            .map(|i| {
                let timing = if instant { Timing::instant() } else { self.timing(i) };
                Tween::new(self.hidden(), Self::shown(), timing, now)
            })
            .collect()
    }
}
