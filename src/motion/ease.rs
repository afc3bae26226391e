use std::f64::consts::PI;

/// Easing curves used across the page. Names follow the usual
/// `power{n}.{in|out}` convention of web tweening.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Ease {
    None,
    Power1Out,
    Power2Out,
    Power3Out,
    SineInOut,
    /// cubic-bezier(0.22, 1, 0.36, 1), used by the loading letters.
    ExpoLike,
}

impl Ease {
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::None => t,
            Ease::Power1Out => 1.0 - (1.0 - t).powi(2),
            Ease::Power2Out => 1.0 - (1.0 - t).powi(3),
            Ease::Power3Out => 1.0 - (1.0 - t).powi(4),
            Ease::SineInOut => -((PI * t).cos() - 1.0) / 2.0,
            Ease::ExpoLike => cubic_bezier(0.22, 1.0, 0.36, 1.0, t),
        }
    }
}

pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

/// Solves the bezier for `x` with a few Newton steps then falls back to
/// bisection, same approach browsers use for `cubic-bezier()`.
fn cubic_bezier(x1: f64, y1: f64, x2: f64, y2: f64, x: f64) -> f64 {
    let bez = |a: f64, b: f64, t: f64| {
        let c = 3.0 * a;
        let bb = 3.0 * (b - a) - c;
        let aa = 1.0 - c - bb;
        ((aa * t + bb) * t + c) * t
    };
    let slope = |a: f64, b: f64, t: f64| {
        let c = 3.0 * a;
        let bb = 3.0 * (b - a) - c;
        let aa = 1.0 - c - bb;
        (3.0 * aa * t + 2.0 * bb) * t + c
    };

    let mut t = x;
    for _ in 0..8 {
        let err = bez(x1, x2, t) - x;
        if err.abs() < 1e-7 {
            return bez(y1, y2, t);
        }
        let d = slope(x1, x2, t);
        if d.abs() < 1e-6 {
            break;
        }
        t -= err / d;
    }

    let (mut lo, mut hi) = (0.0, 1.0);
    t = x;
    for _ in 0..32 {
        let v = bez(x1, x2, t);
        if (v - x).abs() < 1e-7 {
            break;
        }
        if v < x {
            lo = t;
        } else {
            hi = t;
        }
        t = (lo + hi) / 2.0;
    }
    bez(y1, y2, t)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Ease; 6] = [
        Ease::None,
        Ease::Power1Out,
        Ease::Power2Out,
        Ease::Power3Out,
        Ease::SineInOut,
        Ease::ExpoLike,
    ];

    #[test]
    fn test_endpoints_are_fixed() {
        for ease in ALL {
            assert!((ease.apply(0.0)).abs() < 1e-6, "{:?} at 0", ease);
            assert!((ease.apply(1.0) - 1.0).abs() < 1e-6, "{:?} at 1", ease);
        }
    }

    #[test]
    fn test_input_is_clamped() {
        assert_eq!(Ease::Power3Out.apply(-2.0), 0.0);
        assert_eq!(Ease::Power3Out.apply(3.0), 1.0);
    }

    #[test]
    fn test_ease_out_runs_ahead_of_linear() {
        for ease in [Ease::Power1Out, Ease::Power2Out, Ease::Power3Out, Ease::ExpoLike] {
            assert!(ease.apply(0.5) > 0.5, "{:?}", ease);
        }
        assert!((Ease::SineInOut.apply(0.5) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_lerp() {
        assert_eq!(lerp(10.0, 20.0, 0.25), 12.5);
    }
}
