use super::ease::Ease;
use super::style::VisualStyle;

/// How a reveal is bound to scroll.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RevealMode {
    /// Plays once, the first time the element top crosses `start`.
    OneShot,
    /// Progress follows scroll while the element top travels from `start`
    /// to `end` (both viewport fractions, `start > end`).
    Scrubbed { end: f64 },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealSpec {
    pub from: VisualStyle,
    pub duration: f64,
    pub ease: Ease,
    /// Viewport fraction from the top, e.g. `0.8` for "top 80%".
    pub start: f64,
    pub delay: f64,
    pub stagger: f64,
    pub mode: RevealMode,
}

impl RevealSpec {
    /// Rise by `offset_y` pixels and fade in, one-shot at `start`.
    pub fn rise(offset_y: f64, duration: f64, ease: Ease, start: f64) -> Self {
        Self {
            from: VisualStyle {
                y: offset_y,
                opacity: 0.0,
                ..VisualStyle::IDENTITY
            },
            duration,
            ease,
            start,
            delay: 0.0,
            stagger: 0.0,
            mode: RevealMode::OneShot,
        }
    }

    /// Slides up by a percentage of the element height, used on split text.
    pub fn rise_percent(y_percent: f64, duration: f64, ease: Ease, start: f64) -> Self {
        Self {
            from: VisualStyle {
                y_percent,
                opacity: 0.0,
                ..VisualStyle::IDENTITY
            },
            ..Self::rise(0.0, duration, ease, start)
        }
    }

    pub fn with_stagger(mut self, stagger: f64) -> Self {
        self.stagger = stagger;
        self
    }

    pub fn with_delay(mut self, delay: f64) -> Self {
        self.delay = delay;
        self
    }

    pub fn scrubbed(mut self, end: f64) -> Self {
        self.mode = RevealMode::Scrubbed { end };
        self
    }

    /// Total time from trigger until the last of `count` children lands.
    pub fn total_duration(&self, count: usize) -> f64 {
        self.delay + self.stagger * count.saturating_sub(1) as f64 + self.duration
    }
}

/// Per-element reveal state. `triggered` flips once for one-shot reveals.
#[derive(Clone, Debug)]
pub struct RevealTarget {
    spec: RevealSpec,
    reduced_motion: bool,
    triggered: bool,
    triggered_at: Option<f64>,
    scrub_progress: f64,
}

impl RevealTarget {
    pub fn new(spec: RevealSpec, reduced_motion: bool) -> Self {
        Self {
            spec,
            reduced_motion,
            triggered: false,
            triggered_at: None,
            scrub_progress: 0.0,
        }
    }

    pub fn triggered(&self) -> bool {
        self.triggered
    }

    /// Starts a one-shot reveal without looking at scroll, for on-mount text.
    pub fn trigger_now(&mut self, now: f64) {
        if !self.triggered {
            self.triggered = true;
            self.triggered_at = Some(now);
        }
    }

    /// Feeds the element's current top edge (viewport coordinates).
    pub fn observe(&mut self, top: f64, viewport_height: f64, now: f64) {
        let start_px = self.spec.start * viewport_height;
        match self.spec.mode {
            RevealMode::OneShot => {
                if top <= start_px {
                    self.trigger_now(now);
                }
            }
            RevealMode::Scrubbed { end } => {
                let end_px = end * viewport_height;
                let span = start_px - end_px;
                self.scrub_progress = if span <= 0.0 {
                    if top <= start_px { 1.0 } else { 0.0 }
                } else {
                    ((start_px - top) / span).clamp(0.0, 1.0)
                };
                self.triggered = self.scrub_progress > 0.0;
            }
        }
    }

    /// Style of child `index` at time `now`.
    pub fn style_at(&self, index: usize, now: f64) -> VisualStyle {
        if self.reduced_motion {
            return VisualStyle::IDENTITY;
        }
        let t = match self.spec.mode {
            RevealMode::Scrubbed { .. } => self.spec.ease.apply(self.scrub_progress),
            RevealMode::OneShot => match self.triggered_at {
                None => 0.0,
                Some(at) => {
                    let offset = self.spec.delay + self.spec.stagger * index as f64;
                    let local = now - at - offset;
                    if local <= 0.0 {
                        0.0
                    } else if self.spec.duration <= 0.0 || local >= self.spec.duration {
                        1.0
                    } else {
                        self.spec.ease.apply(local / self.spec.duration)
                    }
                }
            },
        };
        VisualStyle::interpolate(&self.spec.from, &VisualStyle::IDENTITY, t)
    }

    /// True once every child of a one-shot reveal has landed, so the driver
    /// can stop its frame loop. Under reduced motion nothing tweens, but the
    /// target still has to be observed until it triggers.
    pub fn is_finished(&self, count: usize, now: f64) -> bool {
        match (self.spec.mode, self.triggered_at) {
            (RevealMode::OneShot, Some(_)) if self.reduced_motion => true,
            (RevealMode::OneShot, Some(at)) => now - at >= self.spec.total_duration(count),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block() -> RevealSpec {
        RevealSpec::rise(40.0, 1.0, Ease::Power3Out, 0.8)
    }

    #[test]
    fn test_hidden_until_threshold() {
        let mut target = RevealTarget::new(block(), false);
        target.observe(900.0, 1000.0, 0.0);
        assert!(!target.triggered());
        let style = target.style_at(0, 5.0);
        assert_eq!(style.opacity, 0.0);
        assert_eq!(style.y, 40.0);
    }

    #[test]
    fn test_one_shot_plays_once_and_ignores_later_scroll() {
        let mut target = RevealTarget::new(block(), false);
        target.observe(790.0, 1000.0, 1.0);
        assert!(target.triggered());
        let mid = target.style_at(0, 1.5);
        assert!(mid.opacity > 0.0 && mid.opacity < 1.0);

        // scrolling back out and in again must not restart the tween
        target.observe(1200.0, 1000.0, 1.6);
        target.observe(100.0, 1000.0, 3.0);
        assert!(target.triggered());
        assert_eq!(target.style_at(0, 3.0), VisualStyle::IDENTITY);
        assert!(target.is_finished(1, 3.0));
    }

    #[test]
    fn test_stagger_delays_later_children() {
        let spec = block().with_stagger(0.1);
        let mut target = RevealTarget::new(spec, false);
        target.trigger_now(0.0);
        assert!(target.style_at(0, 0.05).opacity > 0.0);
        assert_eq!(target.style_at(3, 0.05).opacity, 0.0);
        assert!(!target.is_finished(4, 1.2));
        assert!(target.is_finished(4, 1.31));
    }

    #[test]
    fn test_delay_holds_every_child() {
        let mut target = RevealTarget::new(block().with_delay(0.1).with_stagger(0.04), false);
        target.trigger_now(2.0);
        assert_eq!(target.style_at(0, 2.05).opacity, 0.0);
        assert!(target.style_at(0, 2.2).opacity > 0.0);
        assert_eq!(target.style_at(3, 2.2).opacity, 0.0);
        assert!(!target.is_finished(4, 3.2));
        assert!(target.is_finished(4, 3.3));
    }

    #[test]
    fn test_scrubbed_follows_scroll_both_ways() {
        let spec = RevealSpec::rise(40.0, 1.0, Ease::None, 0.5).scrubbed(0.4);
        let mut target = RevealTarget::new(spec, false);
        target.observe(450.0, 1000.0, 0.0);
        assert!((target.style_at(0, 0.0).opacity - 0.5).abs() < 1e-9);
        target.observe(380.0, 1000.0, 0.1);
        assert_eq!(target.style_at(0, 0.1).opacity, 1.0);
        target.observe(600.0, 1000.0, 0.2);
        assert_eq!(target.style_at(0, 0.2).opacity, 0.0);
        assert!(!target.triggered());
    }

    #[test]
    fn test_reduced_motion_never_shows_intermediate_frames() {
        let mut target = RevealTarget::new(block().with_stagger(0.2), true);
        for (i, now) in [0.0, 0.01, 0.3, 0.9].into_iter().enumerate() {
            let style = target.style_at(i, now);
            assert_eq!(style.opacity, 1.0);
            assert_eq!(style.y, 0.0);
            target.observe(2000.0, 1000.0, now);
        }
        target.observe(100.0, 1000.0, 1.0);
        assert!(target.is_finished(10, 1.0));
    }

    #[test]
    fn test_reduced_motion_still_triggers_once() {
        let mut target = RevealTarget::new(block(), true);
        target.observe(900.0, 1000.0, 0.0);
        assert!(!target.triggered());
        assert!(!target.is_finished(1, 0.0));
        assert_eq!(target.style_at(0, 0.0), VisualStyle::IDENTITY);

        target.observe(800.0, 1000.0, 0.5);
        assert!(target.triggered());
        assert!(target.is_finished(1, 0.5));

        target.observe(1200.0, 1000.0, 0.6);
        assert!(target.triggered());
    }

    #[test]
    fn test_reduced_motion_scrubbed_keeps_following() {
        let spec = RevealSpec::rise(40.0, 1.0, Ease::None, 0.5).scrubbed(0.4);
        let mut target = RevealTarget::new(spec, true);
        target.observe(450.0, 1000.0, 0.0);
        assert!(target.triggered());
        assert!(!target.is_finished(1, 10.0));
        assert_eq!(target.style_at(0, 0.0), VisualStyle::IDENTITY);
    }
}
