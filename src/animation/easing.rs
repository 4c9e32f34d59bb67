// src/animation/easing.rs
//
// Easing curves for cell tweens.
// All curves map 0.0 -> 0.0 and 1.0 -> 1.0.

use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum EasingType {
    #[default]
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    Power3Out,
    Power3InOut,
}

impl EasingType {
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            EasingType::Linear => t,
            EasingType::EaseIn => ease_in(t),
            EasingType::EaseOut => ease_out(t),
            EasingType::EaseInOut => ease_in_out(t),
            EasingType::Power3Out => power3_out(t),
            EasingType::Power3InOut => power3_in_out(t),
        }
    }
}

fn ease_in_out(t: f32) -> f32 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        -1.0 + (4.0 - 2.0 * t) * t
    }
}

fn ease_in(t: f32) -> f32 {
    t * t
}

fn ease_out(t: f32) -> f32 {
    t * (2.0 - t)
}

// cubic, decelerating
fn power3_out(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

fn power3_in_out(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [EasingType; 6] = [
        EasingType::Linear,
        EasingType::EaseIn,
        EasingType::EaseOut,
        EasingType::EaseInOut,
        EasingType::Power3Out,
        EasingType::Power3InOut,
    ];

    #[test]
    fn test_endpoints() {
        for easing in ALL {
            assert!(easing.apply(0.0).abs() < 1e-6, "{:?} at 0", easing);
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-6, "{:?} at 1", easing);
        }
    }

    #[test]
    fn test_out_of_range_is_clamped() {
        for easing in ALL {
            assert_eq!(easing.apply(-1.0), easing.apply(0.0));
            assert_eq!(easing.apply(2.0), easing.apply(1.0));
        }
    }

    #[test]
    fn test_monotonic() {
        for easing in ALL {
            let mut last = 0.0;
            for step in 1..=100 {
                let value = easing.apply(step as f32 / 100.0);
                assert!(value >= last - 1e-6, "{:?} dips at step {}", easing, step);
                last = value;
            }
        }
    }

    #[test]
    fn test_power3_shapes() {
        // ease-out races ahead early, ease-in-out is symmetric around the midpoint
        assert!((EasingType::Power3Out.apply(0.5) - 0.875).abs() < 1e-6);
        assert!((EasingType::Power3InOut.apply(0.5) - 0.5).abs() < 1e-6);
        assert!((EasingType::Power3InOut.apply(0.25) - 0.0625).abs() < 1e-6);
        assert!((EasingType::Power3InOut.apply(0.75) - 0.9375).abs() < 1e-6);
    }
}
