use super::ease::{lerp, Ease};

/// Time-sampled scalar tween. Times are in seconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    pub from: f64,
    pub to: f64,
    pub delay: f64,
    pub duration: f64,
    pub ease: Ease,
}

impl Tween {
    pub fn new(from: f64, to: f64, duration: f64, ease: Ease) -> Self {
        Self { from, to, delay: 0.0, duration, ease }
    }

    /// Eased progress in `[0, 1]` after `elapsed` seconds.
    pub fn progress(&self, elapsed: f64) -> f64 {
        let local = elapsed - self.delay;
        if local <= 0.0 {
            return 0.0;
        }
        if self.duration <= 0.0 || local >= self.duration {
            return 1.0;
        }
        self.ease.apply(local / self.duration)
    }

    pub fn sample(&self, elapsed: f64) -> f64 {
        lerp(self.from, self.to, self.progress(elapsed))
    }

    /// Starts a new tween from wherever this one is at `elapsed`.
    pub fn retarget(&self, elapsed: f64, to: f64) -> Self {
        Self {
            from: self.sample(elapsed),
            to,
            delay: 0.0,
            duration: self.duration,
            ease: self.ease,
        }
    }
}

/// Endless ping-pong between 0 and 1, used for the floating hero accents and
/// the scroll cue bounce.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Yoyo {
    pub duration: f64,
    pub delay: f64,
    pub ease: Ease,
}

impl Yoyo {
    pub fn new(duration: f64, ease: Ease) -> Self {
        Self { duration, delay: 0.0, ease }
    }

    pub fn with_delay(mut self, delay: f64) -> Self {
        self.delay = delay;
        self
    }

    pub fn progress(&self, elapsed: f64) -> f64 {
        let local = elapsed - self.delay;
        if local <= 0.0 || self.duration <= 0.0 {
            return 0.0;
        }
        let cycle = local / self.duration;
        let pass = cycle.floor() as u64;
        let frac = cycle - cycle.floor();
        let t = if pass % 2 == 0 { frac } else { 1.0 - frac };
        self.ease.apply(t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tween_respects_delay() {
        let tween = Tween {
            delay: 0.5,
            ..Tween::new(40.0, 0.0, 1.0, Ease::Power3Out)
        };
        assert_eq!(tween.sample(0.25), 40.0);
        assert_eq!(tween.sample(0.5), 40.0);
        assert_eq!(tween.sample(1.5), 0.0);
        assert!(tween.sample(1.4) > 0.0);
    }

    #[test]
    fn test_zero_duration_jumps_to_end() {
        let tween = Tween::new(0.0, 1.0, 0.0, Ease::Power3Out);
        assert_eq!(tween.sample(0.0001), 1.0);
    }

    #[test]
    fn test_retarget_starts_from_current_value() {
        let tween = Tween::new(0.0, 8.0, 0.2, Ease::None);
        let next = tween.retarget(0.1, 0.0);
        assert!((next.from - 4.0).abs() < 1e-9);
        assert_eq!(next.to, 0.0);
        assert_eq!(next.sample(0.2), 0.0);
    }

    #[test]
    fn test_yoyo_mirrors() {
        let yoyo = Yoyo::new(2.0, Ease::None);
        assert!((yoyo.progress(1.0) - 0.5).abs() < 1e-9);
        assert!((yoyo.progress(3.0) - 0.5).abs() < 1e-9);
        assert!((yoyo.progress(1.5) - 0.75).abs() < 1e-9);
        assert!((yoyo.progress(2.5) - 0.75).abs() < 1e-9);
    }
}
