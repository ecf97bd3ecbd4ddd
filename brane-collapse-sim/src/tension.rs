//! Display-only derived readouts.
//!
//! Both values are pure projections for the HUD; nothing here feeds back
//! into the physics state.

use crate::lattice::Lattice;
use crate::simulation::{MASS_EXPONENT_RANGE, SCALE_COORDINATE_RANGE};

/// Heuristic brane-tension readout, clamped to [0, 100].
///
/// The mass term grows linearly across the exponent range while the scale
/// coordinate suppresses it with a warping factor exp(−S/S_max).
pub fn brane_tension(mass_exponent: f64, scale_coordinate: f64) -> f64 {
    let span = MASS_EXPONENT_RANGE.1 - MASS_EXPONENT_RANGE.0;
    let mass_term = (mass_exponent - MASS_EXPONENT_RANGE.0) / span;
    let warp = (-scale_coordinate / SCALE_COORDINATE_RANGE.1).exp();
    (mass_term * warp * 200.0).clamp(0.0, 100.0)
}

/// Fabric stress readout: total Manhattan displacement, capped at 100.
pub fn metric_stress(lattice: &Lattice) -> f64 {
    (lattice.total_displacement() / 5.0).min(100.0)
}
