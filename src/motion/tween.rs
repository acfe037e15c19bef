use super::easing::Ease;
use super::props::VisualProps;

/// Timing of a tween, in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timing {
    pub duration: f64,
    pub delay: f64,
    pub ease: Ease,
}

impl Timing {
    pub const fn new(duration: f64, ease: Ease) -> Self {
        Self {
            duration,
            delay: 0.0,
            ease,
        }
    }

    pub fn delayed(self, delay: f64) -> Self {
        Self { delay, ..self }
    }

    pub fn instant() -> Self {
        Self::new(0.0, Ease::Linear)
    }
}

/// A fire-and-forget interpolation between two snapshots, sampled against
/// the clock by whoever drives frames.
#[derive(Debug, Clone, PartialEq)]
pub struct Tween {
    from: VisualProps,
    to: VisualProps,
    timing: Timing,
    started_at: f64,
}

impl Tween {
    pub fn new(from: VisualProps, to: VisualProps, timing: Timing, now: f64) -> Self {
        Self {
            from,
            to,
            timing,
            started_at: now,
        }
    }

    /// Linear (uneased) time fraction at `now`.
    pub fn elapsed(&self, now: f64) -> f64 {
        let t = now - self.started_at - self.timing.delay;
        if self.timing.duration <= 0.0 {
            return if t >= 0.0 { 1.0 } else { 0.0 };
        }
        if t <= 0.0 {
            return 0.0;
        }
        (t / self.timing.duration).min(1.0)
    }

    pub fn sample(&self, now: f64) -> VisualProps {
        let t = self.timing.ease.apply(self.elapsed(now));
        self.from.lerp(&self.to, t)
    }

    pub fn is_finished(&self, now: f64) -> bool {
        self.elapsed(now) >= 1.0
    }

    /// Replaces this tween with one heading to `to`, starting from wherever
    /// this one currently is.
    pub fn retarget(&self, to: VisualProps, timing: Timing, now: f64) -> Tween {
        Tween::new(self.sample(now), to, timing, now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fade(from: f64, to: f64) -> (VisualProps, VisualProps) {
        (
            VisualProps {
                opacity: Some(from),
                ..Default::default()
            },
            VisualProps {
                opacity: Some(to),
                ..Default::default()
            },
        )
    }

    #[test]
    fn holds_from_state_during_delay() {
        let (from, to) = fade(0.0, 1.0);
        let tween = Tween::new(from, to, Timing::new(1.0, Ease::Linear).delayed(0.5), 10.0);
        assert_eq!(tween.sample(10.2).opacity, Some(0.0));
        assert_eq!(tween.sample(11.0).opacity, Some(0.5));
        assert!(!tween.is_finished(11.4));
        assert!(tween.is_finished(11.5));
        assert_eq!(tween.sample(99.0).opacity, Some(1.0));
    }

    #[test]
    fn zero_duration_jumps_to_target() {
        let (from, to) = fade(0.0, 1.0);
        let tween = Tween::new(from, to, Timing::instant(), 3.0);
        assert!(tween.is_finished(3.0));
        assert_eq!(tween.sample(3.0).opacity, Some(1.0));
    }

    #[test]
    fn retarget_starts_from_current_value() {
        let (from, to) = fade(0.0, 1.0);
        let forward = Tween::new(from, to, Timing::new(1.0, Ease::Linear), 0.0);
        let reverse = forward.retarget(from, Timing::new(0.5, Ease::Linear), 0.4);

        // No jump at the moment of interruption.
        let at_switch = reverse.sample(0.4).opacity.unwrap();
        assert!((at_switch - 0.4).abs() < 1e-9);
        let halfway = reverse.sample(0.65).opacity.unwrap();
        assert!((halfway - 0.2).abs() < 1e-9);
        assert_eq!(reverse.sample(2.0).opacity, Some(0.0));
    }
}
