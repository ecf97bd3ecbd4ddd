//! # metric-clock-sim
//!
//! Dual high-precision clock simulator at attosecond (10⁻¹⁸ s) resolution.
//!
//! Two accumulators advance together on every animation tick:
//! - **reference** — ground truth, integrates the simulated delta exactly
//! - **drifted** — additionally absorbs a small per-tick perturbation
//!   ε(t) = amplitude · κ · cos(2πft), modelling a slowly varying local
//!   "refractive index" of time
//!
//! All accumulator arithmetic is exact (arbitrary-precision integers);
//! floating point only ever touches the fluctuation factor itself, so the
//! two clocks never pick up compounding rounding error over long runs.
//! The divergence feeds a bounded rolling history for charting.
//!
//! The simulator is agnostic to its scheduler: a frame callback, a timer,
//! or a test loop calls [`clock::MetricClock::advance`] with the elapsed
//! real milliseconds.
//!
//! ## Usage
//!
//! ```
//! use metric_clock_sim::prelude::*;
//!
//! let mut clock = MetricClock::new(TimeScale::Second, ClockParams::default());
//! clock.synchronize_at(1_700_000_000_000); // unix millis
//! for _ in 0..40 {
//!     clock.advance(16.0); // one ~60 fps frame
//! }
//! println!("drift: {} ns", clock.drift_nanoseconds());
//! assert_eq!(clock.history().len(), 40);
//! ```

pub mod clock;
pub mod format;
pub mod history;
pub mod units;

pub mod prelude {
    pub use crate::clock::*;
    pub use crate::format::*;
    pub use crate::history::*;
    pub use crate::units::*;
}
