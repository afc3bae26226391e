use log::debug;

use super::ease::Ease;
use super::reveal::{RevealSpec, RevealTarget};
use super::scroll::ScrollState;
use super::style::VisualStyle;
use super::tween::Tween;
use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewportMode {
    Desktop,
    Compact,
}

impl ViewportMode {
    pub fn from_width(width: f64) -> Self {
        if width >= config::DESKTOP_BREAKPOINT {
            ViewportMode::Desktop
        } else {
            ViewportMode::Compact
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PinPhase {
    Idle,
    Pinned,
}

/// Measured geometry of the showcase, taken on mount and on every resize.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ShowcaseLayout {
    pub viewport_width: f64,
    /// Document offset of the section top.
    pub container_top: f64,
    pub container_width: f64,
    pub track_scroll_width: f64,
    /// `offsetLeft` of every slide inside the track.
    pub slide_lefts: Vec<f64>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinSession {
    pub pin_start: f64,
    pub pin_distance: f64,
    pub track_translation: f64,
}

impl PinSession {
    pub fn new(container_top: f64, container_width: f64, track_scroll_width: f64) -> Self {
        Self {
            pin_start: container_top,
            pin_distance: (track_scroll_width - container_width).max(0.0),
            track_translation: 0.0,
        }
    }

    pub fn pin_end(&self) -> f64 {
        self.pin_start + self.pin_distance
    }

    pub fn phase(&self, scroll_y: f64) -> PinPhase {
        if scroll_y >= self.pin_start && scroll_y < self.pin_end() {
            PinPhase::Pinned
        } else {
            PinPhase::Idle
        }
    }

    /// Fraction of the pinned range already scrolled through.
    pub fn progress(&self, scroll_y: f64) -> f64 {
        if self.pin_distance <= 0.0 {
            return if scroll_y >= self.pin_start { 1.0 } else { 0.0 };
        }
        ((scroll_y - self.pin_start) / self.pin_distance).clamp(0.0, 1.0)
    }

    pub fn translation_at(&self, progress: f64) -> f64 {
        -(self.pin_distance * progress.clamp(0.0, 1.0))
    }
}

/// Lagging follower for scrubbed progress: the playhead needs roughly `lag`
/// seconds to catch up with scroll.
#[derive(Clone, Copy, Debug)]
struct Scrub {
    lag: f64,
    current: f64,
}

impl Scrub {
    fn new(lag: f64) -> Self {
        Self { lag, current: 0.0 }
    }

    fn reset(&mut self, value: f64) {
        self.current = value;
    }

    fn advance(&mut self, target: f64, dt: f64) -> f64 {
        if self.lag <= 0.0 {
            self.current = target;
            return target;
        }
        let gap = target - self.current;
        if gap.abs() < config::SCRUB_SETTLE {
            self.current = target;
        } else {
            // 1 - e^-4 is ~98% caught up after `lag` seconds
            let k = 1.0 - (-dt * 4.0 / self.lag).exp();
            self.current += gap * k;
        }
        self.current
    }
}

/// Velocity driven skew. Every change of the target starts a fresh short
/// tween from the current angle, so the skew eases back to 0 once scrolling
/// stops.
#[derive(Clone, Copy, Debug)]
struct SkewFollower {
    tween: Tween,
    clock: f64,
    started: f64,
}

impl SkewFollower {
    fn new() -> Self {
        Self {
            tween: Tween::new(0.0, 0.0, config::SKEW_TWEEN_SECS, Ease::Power1Out),
            clock: 0.0,
            started: 0.0,
        }
    }

    fn advance(&mut self, velocity: f64, dt: f64) -> f64 {
        self.clock += dt.max(0.0);
        let target = skew_for_velocity(velocity);
        if target != self.tween.to {
            self.tween = self.tween.retarget(self.clock - self.started, target);
            self.started = self.clock;
        }
        self.value()
    }

    fn value(&self) -> f64 {
        self.tween
            .sample(self.clock - self.started)
            .clamp(-config::MAX_SKEW_DEG, config::MAX_SKEW_DEG)
    }
}

pub fn skew_for_velocity(velocity: f64) -> f64 {
    (velocity / config::SKEW_VELOCITY_DIVISOR).clamp(-config::MAX_SKEW_DEG, config::MAX_SKEW_DEG)
}

/// Fade/slide-in of a slide keyed to its left edge on screen: runs while the
/// edge travels from 50% to 40% of the viewport width.
pub fn slide_entry_style(slide_left: f64, track_x: f64, viewport_width: f64) -> VisualStyle {
    let left_on_screen = slide_left + track_x;
    let start = viewport_width * config::SLIDE_ENTRY_START;
    let end = viewport_width * config::SLIDE_ENTRY_END;
    let span = start - end;
    let raw = if span <= 0.0 {
        1.0
    } else {
        ((start - left_on_screen) / span).clamp(0.0, 1.0)
    };
    let t = Ease::Power2Out.apply(raw);
    VisualStyle {
        x_percent: config::SLIDE_ENTRY_X_PERCENT * (1.0 - t),
        opacity: t,
        ..VisualStyle::IDENTITY
    }
}

/// Inputs of one choreography frame.
pub struct FrameInput<'a> {
    pub scroll: ScrollState,
    pub now: f64,
    pub dt: f64,
    pub viewport_height: f64,
    /// Viewport-relative top of each slide, only read in compact mode.
    pub slide_tops: &'a [f64],
}

#[derive(Clone, Debug, PartialEq)]
pub struct ShowcaseFrame {
    pub phase: PinPhase,
    pub track_x: f64,
    pub skew_y: f64,
    pub layer_x: Vec<f64>,
    pub slides: Vec<VisualStyle>,
}

pub struct HorizontalChoreographer {
    mode: ViewportMode,
    reduced_motion: bool,
    session: Option<PinSession>,
    generation: u64,
    scrub: Scrub,
    skew: SkewFollower,
    strengths: Vec<f64>,
    slide_lefts: Vec<f64>,
    viewport_width: f64,
    fallback: Vec<RevealTarget>,
}

impl HorizontalChoreographer {
    pub fn new(strengths: Vec<f64>, reduced_motion: bool) -> Self {
        Self {
            mode: ViewportMode::Compact,
            reduced_motion,
            session: None,
            generation: 0,
            scrub: Scrub::new(if reduced_motion { 0.0 } else { config::SHOWCASE_SCRUB_SECS }),
            skew: SkewFollower::new(),
            strengths,
            slide_lefts: Vec::new(),
            viewport_width: 0.0,
            fallback: Vec::new(),
        }
    }

    pub fn mode(&self) -> ViewportMode {
        self.mode
    }

    pub fn session(&self) -> Option<&PinSession> {
        self.session.as_ref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Drops the current pin session and every tween tied to it.
    pub fn teardown(&mut self) {
        if self.session.take().is_some() {
            debug!("showcase pin session {} released", self.generation);
        }
        self.scrub.reset(0.0);
        self.skew = SkewFollower::new();
    }

    /// (Re)builds the choreography for a freshly measured layout. The old
    /// session is always torn down first.
    pub fn configure(&mut self, layout: &ShowcaseLayout, scroll_y: f64) {
        let mode = ViewportMode::from_width(layout.viewport_width);
        self.teardown();
        self.viewport_width = layout.viewport_width;
        self.slide_lefts = layout.slide_lefts.clone();

        match mode {
            ViewportMode::Desktop => {
                self.fallback.clear();
                let session = PinSession::new(
                    layout.container_top,
                    layout.container_width,
                    layout.track_scroll_width,
                );
                self.scrub.reset(session.progress(scroll_y));
                self.generation += 1;
                debug!(
                    "showcase pin session {} from {} over {}px",
                    self.generation, session.pin_start, session.pin_distance
                );
                self.session = Some(session);
            }
            ViewportMode::Compact => {
                // keep slides that already revealed when resizing inside compact
                if self.mode != ViewportMode::Compact
                    || self.fallback.len() != layout.slide_lefts.len()
                {
                    let spec = RevealSpec::rise(
                        config::COMPACT_SLIDE_OFFSET_Y,
                        config::COMPACT_SLIDE_DURATION,
                        Ease::Power2Out,
                        config::COMPACT_SLIDE_START,
                    );
                    self.fallback = layout
                        .slide_lefts
                        .iter()
                        .map(|_| RevealTarget::new(spec, self.reduced_motion))
                        .collect();
                }
            }
        }
        self.mode = mode;
    }

    pub fn frame(&mut self, input: &FrameInput) -> ShowcaseFrame {
        match self.session.as_mut() {
            Some(session) => {
                let target = session.progress(input.scroll.smoothed_offset);
                let progress = self.scrub.advance(target, input.dt);
                session.track_translation = session.translation_at(progress);
                let session = *session;

                let skew_y = if self.reduced_motion {
                    0.0
                } else {
                    self.skew.advance(input.scroll.velocity, input.dt)
                };
                let layer_x = self
                    .strengths
                    .iter()
                    .map(|strength| -(session.pin_distance * strength) * target)
                    .collect();
                let slides = self
                    .slide_lefts
                    .iter()
                    .map(|left| {
                        if self.reduced_motion {
                            VisualStyle::IDENTITY
                        } else {
                            slide_entry_style(*left, session.track_translation, self.viewport_width)
                        }
                    })
                    .collect();

                ShowcaseFrame {
                    phase: session.phase(input.scroll.raw_offset),
                    track_x: session.track_translation,
                    skew_y,
                    layer_x,
                    slides,
                }
            }
            None => {
                for (target, top) in self.fallback.iter_mut().zip(input.slide_tops) {
                    target.observe(*top, input.viewport_height, input.now);
                }
                ShowcaseFrame {
                    phase: PinPhase::Idle,
                    track_x: 0.0,
                    skew_y: 0.0,
                    layer_x: vec![0.0; self.strengths.len()],
                    slides: self
                        .fallback
                        .iter()
                        .map(|target| target.style_at(0, input.now))
                        .collect(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn desktop_layout() -> ShowcaseLayout {
        ShowcaseLayout {
            viewport_width: 1200.0,
            container_top: 1000.0,
            container_width: 1200.0,
            track_scroll_width: 4200.0,
            slide_lefts: vec![0.0, 840.0, 1680.0, 2520.0],
        }
    }

    fn at(offset: f64, velocity: f64) -> ScrollState {
        ScrollState {
            raw_offset: offset,
            smoothed_offset: offset,
            velocity,
        }
    }

    fn settle(choreo: &mut HorizontalChoreographer, scroll: ScrollState) -> ShowcaseFrame {
        let mut frame = None;
        for i in 0..600 {
            frame = Some(choreo.frame(&FrameInput {
                scroll,
                now: i as f64 / 60.0,
                dt: 1.0 / 60.0,
                viewport_height: 800.0,
                slide_tops: &[],
            }));
        }
        frame.unwrap()
    }

    #[test]
    fn test_pin_distance_from_widths() {
        let session = PinSession::new(0.0, 1200.0, 4200.0);
        assert_eq!(session.pin_distance, 3000.0);
        assert_eq!(session.translation_at(0.0), 0.0);
        assert_eq!(session.translation_at(1.0), -3000.0);
    }

    #[test]
    fn test_pin_distance_never_negative() {
        let session = PinSession::new(0.0, 1400.0, 900.0);
        assert_eq!(session.pin_distance, 0.0);
        assert_eq!(session.translation_at(1.0), 0.0);
        assert_eq!(session.phase(10.0), PinPhase::Idle);
    }

    #[test]
    fn test_phase_transitions() {
        let session = PinSession::new(1000.0, 1200.0, 4200.0);
        assert_eq!(session.phase(999.0), PinPhase::Idle);
        assert_eq!(session.phase(1000.0), PinPhase::Pinned);
        assert_eq!(session.phase(3999.0), PinPhase::Pinned);
        assert_eq!(session.phase(4000.0), PinPhase::Idle);
    }

    #[test]
    fn test_half_of_pinned_range_moves_track_half_way() {
        let mut choreo = HorizontalChoreographer::new(vec![0.15, 0.25], false);
        choreo.configure(&desktop_layout(), 0.0);
        let frame = settle(&mut choreo, at(2500.0, 0.0));
        assert_eq!(frame.phase, PinPhase::Pinned);
        assert_eq!(frame.track_x, -1500.0);
        assert_eq!(frame.layer_x, vec![-3000.0 * 0.15 * 0.5, -3000.0 * 0.25 * 0.5]);
    }

    #[test]
    fn test_release_holds_final_translation() {
        let mut choreo = HorizontalChoreographer::new(vec![], false);
        choreo.configure(&desktop_layout(), 0.0);
        let frame = settle(&mut choreo, at(9000.0, 0.0));
        assert_eq!(frame.phase, PinPhase::Idle);
        assert_eq!(frame.track_x, -3000.0);
    }

    #[test]
    fn test_scrub_lags_behind_scroll() {
        let mut choreo = HorizontalChoreographer::new(vec![], false);
        choreo.configure(&desktop_layout(), 0.0);
        let frame = choreo.frame(&FrameInput {
            scroll: at(4000.0, 0.0),
            now: 0.0,
            dt: 1.0 / 60.0,
            viewport_height: 800.0,
            slide_tops: &[],
        });
        assert!(frame.track_x < 0.0 && frame.track_x > -3000.0);
    }

    #[test]
    fn test_skew_is_clamped_and_decays() {
        let mut choreo = HorizontalChoreographer::new(vec![], false);
        choreo.configure(&desktop_layout(), 0.0);
        let mut max_seen: f64 = 0.0;
        for i in 0..60 {
            let frame = choreo.frame(&FrameInput {
                scroll: at(2000.0, 250_000.0 * if i % 2 == 0 { 1.0 } else { -1.0 }),
                now: i as f64 / 60.0,
                dt: 1.0 / 60.0,
                viewport_height: 800.0,
                slide_tops: &[],
            });
            assert!(frame.skew_y.abs() <= 8.0);
            max_seen = max_seen.max(frame.skew_y.abs());
        }
        assert!(max_seen > 0.0);

        let frame = settle(&mut choreo, at(2000.0, 0.0));
        assert_eq!(frame.skew_y, 0.0);
    }

    #[test]
    fn test_skew_for_velocity_bounds() {
        assert_eq!(skew_for_velocity(1e9), 8.0);
        assert_eq!(skew_for_velocity(-1e9), -8.0);
        assert_eq!(skew_for_velocity(600.0), 2.0);
    }

    #[test]
    fn test_slide_entry_window() {
        // left edge at 60% of the viewport: not started
        let style = slide_entry_style(720.0, 0.0, 1200.0);
        assert_eq!(style.opacity, 0.0);
        assert_eq!(style.x_percent, 10.0);
        // left edge at 40%: done
        let style = slide_entry_style(1200.0, -720.0, 1200.0);
        assert_eq!(style.opacity, 1.0);
        assert_eq!(style.x_percent, 0.0);
    }

    #[test]
    fn test_resize_recomputes_and_clamps() {
        let mut choreo = HorizontalChoreographer::new(vec![0.2], false);
        choreo.configure(&desktop_layout(), 0.0);
        settle(&mut choreo, at(4000.0, 0.0));

        let narrower_track = ShowcaseLayout {
            track_scroll_width: 2000.0,
            ..desktop_layout()
        };
        choreo.configure(&narrower_track, 4000.0);
        assert_eq!(choreo.generation(), 2);
        let session = choreo.session().copied().unwrap();
        assert_eq!(session.pin_distance, 800.0);

        let frame = settle(&mut choreo, at(4000.0, 0.0));
        assert_eq!(frame.track_x, -800.0);
        assert!(frame.track_x >= -session.pin_distance);
    }

    #[test]
    fn test_compact_never_pins_and_reveals_at_85_percent() {
        let mut choreo = HorizontalChoreographer::new(vec![0.15], false);
        let layout = ShowcaseLayout {
            viewport_width: 600.0,
            ..desktop_layout()
        };
        choreo.configure(&layout, 0.0);
        assert_eq!(choreo.mode(), ViewportMode::Compact);
        assert!(choreo.session().is_none());

        let tops = [600.0, 670.0, 900.0, 1500.0];
        let mut frame = None;
        for i in 0..120 {
            frame = Some(choreo.frame(&FrameInput {
                scroll: at(5000.0, 3000.0),
                now: i as f64 / 60.0,
                dt: 1.0 / 60.0,
                viewport_height: 800.0,
                slide_tops: &tops,
            }));
            assert_eq!(frame.as_ref().unwrap().phase, PinPhase::Idle);
        }
        let frame = frame.unwrap();
        assert_eq!(frame.track_x, 0.0);
        assert_eq!(frame.slides[0].opacity, 1.0);
        assert_eq!(frame.slides[1].opacity, 1.0);
        assert_eq!(frame.slides[2].opacity, 0.0);
        assert_eq!(frame.slides[3].opacity, 0.0);
    }

    #[test]
    fn test_breakpoint_crossing_tears_down_session() {
        let mut choreo = HorizontalChoreographer::new(vec![], false);
        choreo.configure(&desktop_layout(), 0.0);
        assert!(choreo.session().is_some());
        let compact = ShowcaseLayout {
            viewport_width: 767.0,
            ..desktop_layout()
        };
        choreo.configure(&compact, 2000.0);
        assert!(choreo.session().is_none());
        assert_eq!(choreo.mode(), ViewportMode::Compact);
    }
}
