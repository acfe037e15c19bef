//! Card stacking: scroll progress through a pinned card's window mapped to
//! its scale, opacity, blur and z-order.

use serde::Deserialize;

use super::props::VisualProps;
use super::trigger::TriggerWindow;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StackShape {
    /// Scale lost at full progress.
    pub scale_drop: f64,
    /// Opacity lost at full progress.
    pub fade: f64,
    /// Blur radius in px at full progress.
    pub blur: f64,
}

impl Default for StackShape {
    fn default() -> Self {
        Self {
            scale_drop: 0.1,
            fade: 0.5,
            blur: 20.0,
        }
    }
}

impl StackShape {
    pub fn scale(&self, progress: f64) -> f64 {
        1.0 - self.scale_drop * progress
    }

    pub fn opacity(&self, progress: f64) -> f64 {
        1.0 - self.fade * progress
    }

    pub fn blur(&self, progress: f64) -> f64 {
        self.blur * progress
    }
}

/// Earlier cards get the higher value.
pub fn z_order(index: usize, total: usize) -> i32 {
    total.saturating_sub(index) as i32
}

/// Offset that keeps a card in place while its window is scrolled through.
/// After the window it stays at the full span, so the card does not spring
/// back into flow.
pub fn pin_offset(window: &TriggerWindow, scroll_y: f64) -> f64 {
    (scroll_y - window.start).clamp(0.0, window.span())
}

pub fn card_props(shape: &StackShape, progress: f64, index: usize, total: usize, pin: f64) -> VisualProps {
    let progress = progress.clamp(0.0, 1.0);
    VisualProps {
        opacity: Some(shape.opacity(progress)),
        y: Some(pin),
        scale: Some(shape.scale(progress)),
        blur: Some(shape.blur(progress)),
        z_index: Some(z_order(index, total)),
        ..Default::default()
    }
}
