#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavState {
    #[default]
    Transparent,
    Morphed,
}

/// Two-state switch keyed to one scroll position: at or past the edge it is
/// `Morphed`, anywhere before it `Transparent`.
#[derive(Debug, Clone, PartialEq)]
pub struct BistableToggle {
    edge: f64,
    state: NavState,
}

impl BistableToggle {
    pub fn new(edge: f64) -> Self {
        Self {
            edge,
            state: NavState::Transparent,
        }
    }

    pub fn state(&self) -> NavState {
        self.state
    }

    /// Layout changed; state is kept until the next `update`.
    pub fn set_edge(&mut self, edge: f64) {
        self.edge = edge;
    }

    pub fn state_at(&self, scroll_y: f64) -> NavState {
        if scroll_y >= self.edge {
            NavState::Morphed
        } else {
            NavState::Transparent
        }
    }

    /// Returns the new state only when the boundary was crossed.
    pub fn update(&mut self, scroll_y: f64) -> Option<NavState> {
        let next = self.state_at(scroll_y);
        if next == self.state {
            return None;
        }
        self.state = next;
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hero_toggle() -> BistableToggle {
        BistableToggle::new(900.0)
    }

    #[test]
    fn starts_transparent() {
        assert_eq!(hero_toggle().state(), NavState::Transparent);
    }

    #[test]
    fn morphed_exactly_from_edge() {
        let toggle = hero_toggle();
        for p in [0.0, 1.0, 450.0, 899.999] {
            assert_eq!(toggle.state_at(p), NavState::Transparent, "at {p}");
        }
        for p in [900.0, 900.001, 5000.0] {
            assert_eq!(toggle.state_at(p), NavState::Morphed, "at {p}");
        }
    }

    #[test]
    fn fires_once_per_crossing() {
        let mut toggle = hero_toggle();
        let fired: Vec<_> = (0..=20)
            .map(|i| i as f64 * 100.0)
            .filter_map(|p| toggle.update(p))
            .collect();
        assert_eq!(fired, vec![NavState::Morphed]);

        // Scroll back up past the boundary.
        let fired: Vec<_> = (0..=20)
            .rev()
            .map(|i| i as f64 * 100.0)
            .filter_map(|p| toggle.update(p))
            .collect();
        assert_eq!(fired, vec![NavState::Transparent]);
    }

    #[test]
    fn jitter_at_boundary_alternates_without_skipping() {
        let mut toggle = hero_toggle();
        assert_eq!(toggle.update(900.0), Some(NavState::Morphed));
        assert_eq!(toggle.update(900.0), None);
        assert_eq!(toggle.update(899.5), Some(NavState::Transparent));
        assert_eq!(toggle.update(899.0), None);
        assert_eq!(toggle.update(901.0), Some(NavState::Morphed));
    }
}
