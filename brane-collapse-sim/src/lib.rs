//! # brane-collapse-sim
//!
//! Damped spring-lattice toy: a 2D grid of mass points, each tied by a
//! structural spring to its own rest position, deformed by an inverse-square
//! central attraction until a one-way "collapse" removes the mass — at which
//! point an expanding ghost wavefront and a decaying particle burst take
//! over while the fabric relaxes.
//!
//! A signed time-speed factor runs the same update rule forward or backward
//! (a visual approximation, not reverse integration); while it is negative,
//! a mirrored projection of the lattice is produced for a secondary ghost
//! rendering layer.
//!
//! The simulator is agnostic to its scheduler: an external driver calls
//! [`simulation::CollapseSim::step`] once per animation tick. Rendering
//! reads the state synchronously after each tick.
//!
//! ## Usage
//!
//! ```
//! use brane_collapse_sim::prelude::*;
//!
//! let mut sim = CollapseSim::with_seed(15, 20, 30.0, 42);
//! for _ in 0..100 {
//!     sim.step();
//! }
//! sim.trigger_collapse();
//! assert_eq!(sim.phase(), SimPhase::Collapsed);
//! assert!(!sim.particles().is_empty());
//! ```

pub mod lattice;
pub mod particles;
pub mod simulation;
pub mod tension;

pub mod prelude {
    pub use crate::lattice::*;
    pub use crate::particles::*;
    pub use crate::simulation::*;
    pub use crate::tension::*;
}
