//! Easing curves, named the way the GSAP docs name them so values in
//! `motion-config` read the same as the CSS/JS the design was drawn up in.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::MotionError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum Ease {
    Linear,
    /// `powerN.in`; the exponent is `N + 1`.
    In(u8),
    Out(u8),
    InOut(u8),
}

impl Ease {
    /// Maps linear time `t` in [0,1] to eased progress. Input outside the
    /// range is clamped first.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::In(power) => t.powi(power as i32 + 1),
            Ease::Out(power) => 1.0 - (1.0 - t).powi(power as i32 + 1),
            Ease::InOut(power) => {
                let exp = power as i32 + 1;
                if t < 0.5 {
                    (2.0 * t).powi(exp) / 2.0
                } else {
                    1.0 - (2.0 * (1.0 - t)).powi(exp) / 2.0
                }
            }
        }
    }
}

impl FromStr for Ease {
    type Err = MotionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        if name == "none" || name == "linear" {
            return Ok(Ease::Linear);
        }

        let (family, kind) = name.split_once('.').unwrap_or((name, "out"));
        let power = family
            .strip_prefix("power")
            .and_then(|p| p.parse::<u8>().ok())
            .filter(|p| (1..=4).contains(p))
            .ok_or_else(|| MotionError::UnknownEase(s.to_string()))?;

        match kind {
            "in" => Ok(Ease::In(power)),
            "out" => Ok(Ease::Out(power)),
            "inOut" => Ok(Ease::InOut(power)),
            _ => Err(MotionError::UnknownEase(s.to_string())),
        }
    }
}

impl TryFrom<String> for Ease {
    type Error = MotionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for Ease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ease::Linear => write!(f, "none"),
            Ease::In(p) => write!(f, "power{}.in", p),
            Ease::Out(p) => write!(f, "power{}.out", p),
            Ease::InOut(p) => write!(f, "power{}.inOut", p),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn parses_gsap_names() {
        assert_eq!("none".parse::<Ease>().unwrap(), Ease::Linear);
        assert_eq!("power3.out".parse::<Ease>().unwrap(), Ease::Out(3));
        assert_eq!("power2.inOut".parse::<Ease>().unwrap(), Ease::InOut(2));
        assert_eq!("power1".parse::<Ease>().unwrap(), Ease::Out(1));
        assert!("power7.out".parse::<Ease>().is_err());
        assert!("bounce.out".parse::<Ease>().is_err());
        assert!("power2.sideways".parse::<Ease>().is_err());
    }

    #[test]
    fn every_curve_hits_both_endpoints() {
        for ease in [Ease::Linear, Ease::In(2), Ease::Out(3), Ease::InOut(4)] {
            assert!(ease.apply(0.0).abs() < EPS, "{ease} at 0");
            assert!((ease.apply(1.0) - 1.0).abs() < EPS, "{ease} at 1");
        }
    }

    #[test]
    fn out_curves_decelerate() {
        // An ease-out is ahead of linear time everywhere inside the range.
        let ease = Ease::Out(2);
        for i in 1..10 {
            let t = i as f64 / 10.0;
            assert!(ease.apply(t) > t);
        }
        assert!((ease.apply(0.5) - 0.875).abs() < EPS);
    }

    #[test]
    fn clamps_out_of_range_time() {
        assert_eq!(Ease::Out(3).apply(-1.0), 0.0);
        assert_eq!(Ease::Out(3).apply(2.0), 1.0);
    }

    #[test]
    fn display_round_trips_through_parse() {
        let ease = Ease::InOut(1);
        assert_eq!(ease.to_string().parse::<Ease>().unwrap(), ease);
    }
}
