//! Collapse simulation: damped springs, central attraction, one-way
//! collapse with ghost wavefront and particle burst.
//!
//! The per-tick update:
//! 1. Every free node feels a spring toward its rest position; while the
//!    system is `Stable` it also feels an inverse-square pull toward the
//!    central node, zeroed below a minimum distance (singularity guard) and
//!    beyond a maximum radius (locality).
//! 2. Velocity integrates the force scaled by the signed time speed, then
//!    damps; position integrates velocity scaled the same way. A negative
//!    time speed replays the rule with reversed sign — a time-reversed
//!    trajectory approximation, not exact inverse integration.
//! 3. While time runs backward, a mirrored projection of the lattice is
//!    produced for a secondary ghost layer (display only).
//! 4. When `Collapsed`, the ghost wavefront grows toward its cap and the
//!    particle burst decays, both at a rate scaled by |time speed|.

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use crate::lattice::Lattice;
use crate::particles::{advance_particles, spawn_burst, EjectedParticle};
use crate::tension;

/// Spring constant toward each node's rest position.
pub const SPRING_K: f64 = 0.05;
/// Velocity retention per tick.
pub const DAMPING: f64 = 0.95;
/// Central attraction strength at the reference mass exponent.
pub const CENTRAL_FORCE_REF: f64 = 2000.0;
/// Mass exponent that reproduces the reference attraction.
pub const MASS_EXPONENT_REF: f64 = 24.0;
/// Attraction is zeroed below this distance, px.
pub const MIN_ATTRACTION_DIST: f64 = 5.0;
/// ...and beyond this interaction radius, px.
pub const MAX_ATTRACTION_DIST: f64 = 200.0;
/// Ghost wavefront radius cap, px.
pub const RING_RADIUS_CAP: f64 = 50.0;
/// Wavefront growth per tick at |time_speed| = 1, px.
pub const RING_GROWTH_PER_TICK: f64 = 1.0;
/// Burst size per unit of mass exponent.
pub const PARTICLES_PER_EXPONENT: f64 = 3.0;

/// Valid mass exponent range (log₁₀ kg).
pub const MASS_EXPONENT_RANGE: (f64, f64) = (18.0, 30.0);
/// Valid scale coordinate range (dimensionless "S").
pub const SCALE_COORDINATE_RANGE: (f64, f64) = (1.0, 100.0);
/// Valid signed time-speed range.
pub const TIME_SPEED_RANGE: (f64, f64) = (-3.0, 3.0);

/// Simulation phase. Collapse is one-way; only [`CollapseSim::reset`]
/// returns to `Stable`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimPhase {
    /// Central mass active, pulling free nodes.
    Stable,
    /// Mass removed; wavefront expanding, burst decaying.
    Collapsed,
}

/// Clamped tuning surface.
///
/// A UI-facing knob set, not a strict API: every value is clamped into its
/// range on construction, never rejected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tuning {
    mass_exponent: f64,
    scale_coordinate: f64,
    time_speed: f64,
}

impl Tuning {
    /// Build a tuning set, clamping each value into its valid range.
    pub fn new(mass_exponent: f64, scale_coordinate: f64, time_speed: f64) -> Self {
        Self {
            mass_exponent: mass_exponent.clamp(MASS_EXPONENT_RANGE.0, MASS_EXPONENT_RANGE.1),
            scale_coordinate: scale_coordinate
                .clamp(SCALE_COORDINATE_RANGE.0, SCALE_COORDINATE_RANGE.1),
            time_speed: time_speed.clamp(TIME_SPEED_RANGE.0, TIME_SPEED_RANGE.1),
        }
    }

    /// Log-scale central mass, log₁₀ kg.
    pub fn mass_exponent(&self) -> f64 {
        self.mass_exponent
    }

    /// Abstract scale coordinate "S".
    pub fn scale_coordinate(&self) -> f64 {
        self.scale_coordinate
    }

    /// Signed integration-step multiplier.
    pub fn time_speed(&self) -> f64 {
        self.time_speed
    }

    /// Central force factor derived from the log-scale mass exponent.
    /// The reference exponent reproduces [`CENTRAL_FORCE_REF`]; the clamp
    /// range spans a ×0.1…×10 envelope around it.
    pub fn mass_factor(&self) -> f64 {
        CENTRAL_FORCE_REF * 10f64.powf((self.mass_exponent - MASS_EXPONENT_REF) / 6.0)
    }
}

impl Default for Tuning {
    fn default() -> Self {
        Self::new(24.0, 37.0, 1.0)
    }
}

/// The collapse simulator.
///
/// Exclusively owns its lattice, burst and wavefront state; a single
/// external driver mutates it one tick at a time.
#[derive(Debug, Clone)]
pub struct CollapseSim {
    lattice: Lattice,
    phase: SimPhase,
    tuning: Tuning,
    particles: Vec<EjectedParticle>,
    ring_radius: f64,
    ghost_layer: Vec<(f64, f64)>,
    rng: StdRng,
}

impl CollapseSim {
    /// Build a simulator with an entropy-seeded burst RNG.
    pub fn new(rows: usize, cols: usize, spacing: f64) -> Self {
        let seed = rand::thread_rng().next_u64();
        Self::with_seed(rows, cols, spacing, seed)
    }

    /// Build a simulator with a fixed burst seed, for reproducible runs.
    pub fn with_seed(rows: usize, cols: usize, spacing: f64, seed: u64) -> Self {
        Self {
            lattice: Lattice::new(rows, cols, spacing),
            phase: SimPhase::Stable,
            tuning: Tuning::default(),
            particles: Vec::new(),
            ring_radius: 0.0,
            ghost_layer: Vec::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Update the tuning surface; every value is clamped into its range.
    pub fn set_tuning(&mut self, mass_exponent: f64, scale_coordinate: f64, time_speed: f64) {
        self.tuning = Tuning::new(mass_exponent, scale_coordinate, time_speed);
    }

    /// One animation tick.
    pub fn step(&mut self) {
        let ts = self.tuning.time_speed;
        let stable = self.phase == SimPhase::Stable;
        let mass_factor = self.tuning.mass_factor();
        let center_idx = self.lattice.center_index();

        for i in 0..self.lattice.len() {
            let node = *self.lattice.node(i);
            if node.fixed {
                continue;
            }

            // Structural spring toward the rest position.
            let mut fx = SPRING_K * (node.ox - node.x);
            let mut fy = SPRING_K * (node.oy - node.y);

            // Central attraction, read fresh so later nodes see the center
            // where the integrator just left it.
            if stable {
                let center = self.lattice.node(center_idx);
                let dx = center.x - node.x;
                let dy = center.y - node.y;
                let dist = (dx * dx + dy * dy).sqrt();
                if dist > MIN_ATTRACTION_DIST && dist < MAX_ATTRACTION_DIST {
                    let force = mass_factor / (dist * dist);
                    fx += dx / dist * force;
                    fy += dy / dist * force;
                }
            }

            let node = &mut self.lattice.nodes_mut()[i];
            node.vx = (node.vx + fx * ts) * DAMPING;
            node.vy = (node.vy + fy * ts) * DAMPING;
            node.x += node.vx * ts;
            node.y += node.vy * ts;
        }

        // Ghost layer only exists while time runs backward; no feedback
        // into the physics state.
        if ts < 0.0 {
            let center = self.lattice.visual_center();
            self.ghost_layer = self.lattice.mirrored_positions(center);
        } else {
            self.ghost_layer.clear();
        }

        if self.phase == SimPhase::Collapsed {
            let rate = ts.abs();
            self.ring_radius =
                (self.ring_radius + RING_GROWTH_PER_TICK * rate).min(RING_RADIUS_CAP);
            advance_particles(&mut self.particles, rate);
        }
    }

    /// Transition `Stable → Collapsed`: remove the central mass, zero the
    /// wavefront and spawn the burst. No-op when already collapsed.
    pub fn trigger_collapse(&mut self) {
        if self.phase == SimPhase::Collapsed {
            return;
        }
        self.phase = SimPhase::Collapsed;
        self.ring_radius = 0.0;
        let center = self.lattice.node(self.lattice.center_index());
        let origin = (center.ox, center.oy);
        let count = (self.tuning.mass_exponent * PARTICLES_PER_EXPONENT) as usize;
        self.particles = spawn_burst(&mut self.rng, origin, count);
    }

    /// Full reinitialization: same grid dimensions, default tuning,
    /// `Stable`, no burst.
    pub fn reset(&mut self) {
        self.lattice = Lattice::new(self.lattice.rows(), self.lattice.cols(), self.lattice.spacing());
        self.phase = SimPhase::Stable;
        self.tuning = Tuning::default();
        self.particles.clear();
        self.ring_radius = 0.0;
        self.ghost_layer.clear();
    }

    /// Current phase.
    pub fn phase(&self) -> SimPhase {
        self.phase
    }

    /// Current tuning.
    pub fn tuning(&self) -> Tuning {
        self.tuning
    }

    /// The lattice, for rendering.
    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    /// Live burst particles.
    pub fn particles(&self) -> &[EjectedParticle] {
        &self.particles
    }

    /// Ghost wavefront radius, px.
    pub fn ring_radius(&self) -> f64 {
        self.ring_radius
    }

    /// Wavefront fade factor: 1 at birth, 0 at the cap.
    pub fn ghost_wave_alpha(&self) -> f64 {
        1.0 - self.ring_radius / RING_RADIUS_CAP
    }

    /// Mirrored node positions while time runs backward; empty otherwise.
    pub fn ghost_layer(&self) -> &[(f64, f64)] {
        &self.ghost_layer
    }

    /// Heuristic brane-tension readout, [0, 100]. Display only.
    pub fn brane_tension(&self) -> f64 {
        tension::brane_tension(self.tuning.mass_exponent, self.tuning.scale_coordinate)
    }

    /// Fabric stress readout from total displacement, [0, 100]. Display
    /// only.
    pub fn metric_stress(&self) -> f64 {
        tension::metric_stress(&self.lattice)
    }
}
