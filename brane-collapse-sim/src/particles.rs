//! Decorative particle burst spawned at collapse.
//!
//! Particles are short-lived display entities: radial velocity, a bounded
//! lifetime ticking down at a rate scaled by |time_speed|, and one of two
//! hues. Expired particles leave the collection the same tick their life
//! reaches zero.

use rand::Rng;

/// Life lost per tick at |time_speed| = 1.
pub const LIFE_DECAY_PER_TICK: f64 = 1.0;

/// Lifetime range at spawn, ticks.
pub const LIFE_RANGE: (f64, f64) = (40.0, 80.0);

/// Radial speed range at spawn, px/tick.
pub const SPEED_RANGE: (f64, f64) = (0.5, 3.0);

/// Visual size range at spawn, px.
pub const SIZE_RANGE: (f64, f64) = (1.0, 3.5);

/// The two hues of burst debris.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticleHue {
    /// Hot fragment tone.
    Ember,
    /// Bright flash tone.
    Spark,
}

/// A burst particle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EjectedParticle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    /// Remaining life, ticks.
    pub life: f64,
    /// Life at spawn.
    pub max_life: f64,
    /// Visual radius, px.
    pub size: f64,
    pub hue: ParticleHue,
}

impl EjectedParticle {
    /// Remaining life as a 0..1 fraction, for alpha fading.
    pub fn life_fraction(&self) -> f64 {
        (self.life / self.max_life).clamp(0.0, 1.0)
    }
}

/// Spawn `count` particles at `origin` with randomized radial velocity,
/// lifetime, size and hue.
pub fn spawn_burst<R: Rng>(rng: &mut R, origin: (f64, f64), count: usize) -> Vec<EjectedParticle> {
    (0..count)
        .map(|_| {
            let angle = rng.gen_range(0.0..std::f64::consts::TAU);
            let speed = rng.gen_range(SPEED_RANGE.0..SPEED_RANGE.1);
            let life = rng.gen_range(LIFE_RANGE.0..LIFE_RANGE.1);
            EjectedParticle {
                x: origin.0,
                y: origin.1,
                vx: angle.cos() * speed,
                vy: angle.sin() * speed,
                life,
                max_life: life,
                size: rng.gen_range(SIZE_RANGE.0..SIZE_RANGE.1),
                hue: if rng.gen() {
                    ParticleHue::Ember
                } else {
                    ParticleHue::Spark
                },
            }
        })
        .collect()
}

/// Advance live particles one tick at the given |time_speed| rate and drop
/// the expired.
pub fn advance_particles(particles: &mut Vec<EjectedParticle>, rate: f64) {
    for p in particles.iter_mut() {
        p.x += p.vx * rate;
        p.y += p.vy * rate;
        p.life -= LIFE_DECAY_PER_TICK * rate;
    }
    particles.retain(|p| p.life > 0.0);
}
