use log::info;

use super::ease::Ease;
use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateTrigger {
    PageLoaded,
    Timeout,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GatePhase {
    Visible,
    FadingOut { since: f64 },
    Hidden,
}

/// Overlay lifecycle. Whichever trigger arrives first starts the fade, the
/// completion event comes out of `tick` exactly once.
#[derive(Clone, Debug)]
pub struct LoadingGate {
    phase: GatePhase,
    fade_secs: f64,
    completed: bool,
}

impl Default for LoadingGate {
    fn default() -> Self {
        Self::new(config::GATE_FADE_SECS)
    }
}

impl LoadingGate {
    pub fn new(fade_secs: f64) -> Self {
        Self {
            phase: GatePhase::Visible,
            fade_secs,
            completed: false,
        }
    }

    pub fn phase(&self) -> GatePhase {
        self.phase
    }

    /// Returns true when this trigger is the one that started the fade.
    pub fn trigger(&mut self, trigger: GateTrigger, now: f64) -> bool {
        if self.phase != GatePhase::Visible {
            return false;
        }
        info!("loading gate released by {:?}", trigger);
        self.phase = GatePhase::FadingOut { since: now };
        true
    }

    /// Advances the fade. Returns true on the single frame the gate
    /// completes.
    pub fn tick(&mut self, now: f64) -> bool {
        if let GatePhase::FadingOut { since } = self.phase {
            if now - since >= self.fade_secs {
                self.phase = GatePhase::Hidden;
            }
        }
        if self.phase == GatePhase::Hidden && !self.completed {
            self.completed = true;
            return true;
        }
        false
    }

    pub fn opacity(&self, now: f64) -> f64 {
        match self.phase {
            GatePhase::Visible => 1.0,
            GatePhase::FadingOut { since } => {
                if self.fade_secs <= 0.0 {
                    return 0.0;
                }
                let t = ((now - since) / self.fade_secs).clamp(0.0, 1.0);
                1.0 - Ease::ExpoLike.apply(t)
            }
            GatePhase::Hidden => 0.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub life: f64,
    pub age: f64,
    pub size: f64,
    pub alpha: f64,
}

impl Particle {
    fn spawn(width: f64, height: f64, rand: &mut impl FnMut() -> f64) -> Self {
        Self {
            x: rand() * width,
            y: rand() * height,
            vx: (rand() - 0.5) * 0.5,
            vy: (rand() - 0.5) * 0.5,
            life: rand() * 200.0 + 100.0,
            age: 0.0,
            size: rand() * 1.2 + 0.4,
            alpha: rand() * 0.35 + 0.15,
        }
    }

    /// Tail end of the streak drawn behind the particle.
    pub fn tail(&self) -> (f64, f64) {
        (self.x - self.vx * 8.0, self.y - self.vy * 8.0)
    }
}

/// Drifting streaks behind the loading letters. Randomness is injected so
/// the simulation stays deterministic under test.
#[derive(Clone, Debug)]
pub struct ParticleField {
    pub width: f64,
    pub height: f64,
    pub particles: Vec<Particle>,
}

impl ParticleField {
    pub fn new(count: usize, width: f64, height: f64, mut rand: impl FnMut() -> f64) -> Self {
        let particles = (0..count)
            .map(|_| Particle::spawn(width, height, &mut rand))
            .collect();
        Self { width, height, particles }
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    pub fn step(&mut self, mut rand: impl FnMut() -> f64) {
        let (w, h) = (self.width, self.height);
        for p in &mut self.particles {
            p.x += p.vx;
            p.y += p.vy;
            p.age += 1.0;
            if p.x < 0.0 || p.x > w {
                p.vx = -p.vx;
            }
            if p.y < 0.0 || p.y > h {
                p.vy = -p.vy;
            }
            if p.age > p.life {
                p.x = rand() * w;
                p.y = rand() * h;
                p.age = 0.0;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed(value: f64) -> impl FnMut() -> f64 {
        move || value
    }

    #[test]
    fn test_completes_once_when_both_triggers_fire() {
        let mut gate = LoadingGate::default();
        assert!(gate.trigger(GateTrigger::PageLoaded, 1.0));
        assert!(!gate.trigger(GateTrigger::Timeout, 3.5));

        let mut completions = 0;
        for frame in 0..300 {
            if gate.tick(1.0 + frame as f64 / 60.0) {
                completions += 1;
            }
        }
        assert!(!gate.trigger(GateTrigger::Timeout, 9.0));
        assert!(!gate.tick(10.0));
        assert_eq!(completions, 1);
        assert_eq!(gate.phase(), GatePhase::Hidden);
    }

    #[test]
    fn test_fade_takes_fixed_duration() {
        let mut gate = LoadingGate::default();
        gate.trigger(GateTrigger::Timeout, 3.5);
        assert!(!gate.tick(3.9));
        assert!(matches!(gate.phase(), GatePhase::FadingOut { .. }));
        let half = gate.opacity(3.8);
        assert!(half > 0.0 && half < 1.0);
        assert!(gate.tick(4.2));
        assert_eq!(gate.phase(), GatePhase::Hidden);
        assert_eq!(gate.opacity(4.2), 0.0);
    }

    #[test]
    fn test_no_completion_while_visible() {
        let mut gate = LoadingGate::default();
        assert!(!gate.tick(100.0));
        assert_eq!(gate.opacity(100.0), 1.0);
    }

    #[test]
    fn test_particles_spawn_inside_viewport() {
        let field = ParticleField::new(80, 400.0, 300.0, fixed(0.5));
        assert_eq!(field.particles.len(), 80);
        let p = field.particles[0];
        assert_eq!((p.x, p.y), (200.0, 150.0));
        assert_eq!((p.vx, p.vy), (0.0, 0.0));
        assert_eq!(p.life, 200.0);
    }

    #[test]
    fn test_particles_bounce_and_respawn() {
        let mut field = ParticleField::new(1, 100.0, 100.0, fixed(0.5));
        field.particles[0] = Particle {
            x: 100.0,
            y: 50.0,
            vx: 0.4,
            vy: 0.0,
            life: 2.0,
            age: 0.0,
            size: 1.0,
            alpha: 0.2,
        };
        field.step(fixed(0.1));
        assert_eq!(field.particles[0].vx, -0.4);
        field.step(fixed(0.1));
        field.step(fixed(0.1));
        let p = field.particles[0];
        assert_eq!(p.age, 0.0);
        assert_eq!((p.x, p.y), (10.0, 10.0));
    }
}
