/// One frame worth of scroll information.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollState {
    pub raw_offset: f64,
    pub smoothed_offset: f64,
    /// Pixels per second of the smoothed offset.
    pub velocity: f64,
}

// Below this distance the smoothed value snaps onto the target.
const SETTLE_PX: f64 = 0.5;

/// Exponential follower for a scroll (or pointer) coordinate.
#[derive(Clone, Debug)]
pub struct SmoothedOffset {
    lerp: f64,
    raw: f64,
    smoothed: f64,
    velocity: f64,
}

impl SmoothedOffset {
    pub fn new(initial: f64, lerp: f64) -> Self {
        Self {
            lerp,
            raw: initial,
            smoothed: initial,
            velocity: 0.0,
        }
    }

    pub fn set_target(&mut self, raw: f64) {
        self.raw = raw;
    }

    /// Jumps straight to `raw`, used on resize and anchor jumps.
    pub fn reset(&mut self, raw: f64) {
        self.raw = raw;
        self.smoothed = raw;
        self.velocity = 0.0;
    }

    /// Advances one frame. `dt` is the frame time in seconds.
    pub fn advance(&mut self, dt: f64) -> ScrollState {
        let previous = self.smoothed;
        let gap = self.raw - self.smoothed;
        if gap.abs() < SETTLE_PX {
            self.smoothed = self.raw;
        } else {
            self.smoothed += gap * self.lerp;
        }
        self.velocity = if dt > 0.0 {
            (self.smoothed - previous) / dt
        } else {
            0.0
        };
        self.state()
    }

    pub fn state(&self) -> ScrollState {
        ScrollState {
            raw_offset: self.raw,
            smoothed_offset: self.smoothed,
            velocity: self.velocity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_moves_by_lerp_fraction() {
        let mut offset = SmoothedOffset::new(0.0, 0.1);
        offset.set_target(1000.0);
        let state = offset.advance(0.016);
        assert!((state.smoothed_offset - 100.0).abs() < 1e-9);
        assert!((state.velocity - 100.0 / 0.016).abs() < 1e-6);
        assert_eq!(state.raw_offset, 1000.0);
    }

    #[test]
    fn test_settles_exactly_on_target() {
        let mut offset = SmoothedOffset::new(0.0, 0.1);
        offset.set_target(500.0);
        for _ in 0..200 {
            offset.advance(0.016);
        }
        assert_eq!(offset.state().smoothed_offset, 500.0);
        let state = offset.advance(0.016);
        assert_eq!(state.smoothed_offset, 500.0);
        assert_eq!(state.velocity, 0.0);
    }

    #[test]
    fn test_velocity_is_signed() {
        let mut offset = SmoothedOffset::new(800.0, 0.18);
        offset.set_target(0.0);
        assert!(offset.advance(0.016).velocity < 0.0);
    }

    #[test]
    fn test_reset_clears_velocity() {
        let mut offset = SmoothedOffset::new(0.0, 0.1);
        offset.set_target(300.0);
        offset.advance(0.016);
        offset.reset(42.0);
        assert_eq!(
            offset.state(),
            ScrollState {
                raw_offset: 42.0,
                smoothed_offset: 42.0,
                velocity: 0.0,
            }
        );
    }
}
