use super::style::VisualStyle;
use crate::config;

/// What the cursor dot should look like this frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CursorFrame {
    pub x: f64,
    pub y: f64,
    pub attracted: bool,
    pub hidden: bool,
}

impl CursorFrame {
    pub fn transform(&self) -> String {
        let half = config::CURSOR_SIZE / 2.0;
        VisualStyle {
            x: self.x - half,
            y: self.y - half,
            ..VisualStyle::IDENTITY
        }
        .transform()
    }
}

/// Dot that chases the pointer with a fixed per-frame factor.
#[derive(Clone, Debug)]
pub struct PointerFollower {
    x: f64,
    y: f64,
    target_x: f64,
    target_y: f64,
    factor: f64,
    attracted: bool,
    hidden: bool,
}

impl PointerFollower {
    /// Starts resting in the middle of the viewport.
    pub fn new(viewport_width: f64, viewport_height: f64, reduced_motion: bool) -> Self {
        let (x, y) = (viewport_width / 2.0, viewport_height / 2.0);
        Self {
            x,
            y,
            target_x: x,
            target_y: y,
            factor: config::POINTER_LERP,
            attracted: false,
            hidden: reduced_motion,
        }
    }

    pub fn pointer_moved(&mut self, x: f64, y: f64, over_magnetic: bool) {
        self.target_x = x;
        self.target_y = y;
        self.attracted = over_magnetic;
    }

    pub fn advance(&mut self) -> CursorFrame {
        if !self.hidden {
            self.x += (self.target_x - self.x) * self.factor;
            self.y += (self.target_y - self.y) * self.factor;
        }
        self.frame()
    }

    pub fn frame(&self) -> CursorFrame {
        CursorFrame {
            x: self.x,
            y: self.y,
            attracted: self.attracted && !self.hidden,
            hidden: self.hidden,
        }
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }
}

/// Tilt of a hover card for a pointer at (`x`, `y`) relative to the card's
/// top-left corner.
pub fn hover_tilt(x: f64, y: f64, width: f64, height: f64) -> VisualStyle {
    if width <= 0.0 || height <= 0.0 {
        return VisualStyle::IDENTITY;
    }
    VisualStyle {
        rotate_x: ((y / height) - 0.5) * -config::HOVER_TILT_DEG,
        rotate_y: ((x / width) - 0.5) * config::HOVER_TILT_DEG,
        scale: config::HOVER_SCALE,
        ..VisualStyle::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_centered() {
        let follower = PointerFollower::new(1000.0, 600.0, false);
        let frame = follower.frame();
        assert_eq!((frame.x, frame.y), (500.0, 300.0));
        assert_eq!(frame.transform(), "translate3d(490px, 290px, 0)");
    }

    #[test]
    fn test_chases_by_factor() {
        let mut follower = PointerFollower::new(0.0, 0.0, false);
        follower.pointer_moved(100.0, 50.0, false);
        let frame = follower.advance();
        assert!((frame.x - 18.0).abs() < 1e-9);
        assert!((frame.y - 9.0).abs() < 1e-9);
    }

    #[test]
    fn test_attracted_over_magnetic_targets() {
        let mut follower = PointerFollower::new(0.0, 0.0, false);
        follower.pointer_moved(10.0, 10.0, true);
        assert!(follower.advance().attracted);
        follower.pointer_moved(20.0, 20.0, false);
        assert!(!follower.advance().attracted);
    }

    #[test]
    fn test_reduced_motion_hides_and_freezes() {
        let mut follower = PointerFollower::new(200.0, 200.0, true);
        follower.pointer_moved(0.0, 0.0, true);
        let frame = follower.advance();
        assert!(frame.hidden);
        assert!(!frame.attracted);
        assert_eq!((frame.x, frame.y), (100.0, 100.0));
    }

    #[test]
    fn test_hover_tilt_corners() {
        let tilt = hover_tilt(0.0, 0.0, 200.0, 100.0);
        assert_eq!(tilt.rotate_x, 4.0);
        assert_eq!(tilt.rotate_y, -4.0);
        assert_eq!(tilt.scale, 1.02);
        assert_eq!(hover_tilt(100.0, 50.0, 200.0, 100.0).rotate_y, 0.0);
        assert_eq!(hover_tilt(5.0, 5.0, 0.0, 10.0), VisualStyle::IDENTITY);
    }
}
