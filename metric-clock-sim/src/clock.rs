//! The dual clock: exact accumulators plus a tunable metric fluctuation.
//!
//! Per-tick update:
//! 1. The simulated delta is computed through a fixed-point integer pipeline
//!    (tenth-of-millisecond and hundredth-of-speed quantization), so the
//!    accumulators never see floating point.
//! 2. The fluctuation factor ε(t) = amplitude · κ · cos(2πft) is evaluated
//!    with `t` = reference time in whole simulated seconds.
//! 3. `reference` gains the delta; `drifted` gains the delta plus the
//!    rounded perturbation; the divergence is recorded in the history.

use std::time::{SystemTime, UNIX_EPOCH};

use num_bigint::BigInt;
use num_traits::ToPrimitive;

use crate::history::{DriftHistory, DriftSample, HISTORY_WINDOW_SECS};
use crate::units::{TimeScale, ATTO_PER_MILLI, ATTO_PER_SECOND};

/// Coupling between the fluctuation amplitude and the drift rate.
/// At amplitude 1 the drifted clock gains at most one part in 10⁶.
pub const METRIC_COUPLING: f64 = 1e-6;

/// Valid amplitude range (dimensionless).
pub const AMPLITUDE_RANGE: (f64, f64) = (0.0, 10.0);
/// Valid oscillation frequency range (Hz).
pub const FREQUENCY_RANGE: (f64, f64) = (0.0, 5.0);
/// Valid speed multiplier range; negative values run the simulated flow
/// backward.
pub const SPEED_RANGE: (f64, f64) = (-50.0, 20.0);

/// Tunable fluctuation parameters.
///
/// This is a tuning surface, not a strict API: out-of-range values are
/// clamped on construction and on every update, never rejected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClockParams {
    amplitude: f64,
    frequency: f64,
    speed_multiplier: f64,
}

impl ClockParams {
    /// Build a parameter set, clamping each value into its valid range.
    pub fn new(amplitude: f64, frequency: f64, speed_multiplier: f64) -> Self {
        Self {
            amplitude: amplitude.clamp(AMPLITUDE_RANGE.0, AMPLITUDE_RANGE.1),
            frequency: frequency.clamp(FREQUENCY_RANGE.0, FREQUENCY_RANGE.1),
            speed_multiplier: speed_multiplier.clamp(SPEED_RANGE.0, SPEED_RANGE.1),
        }
    }

    /// Fluctuation magnitude, dimensionless.
    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    /// Fluctuation frequency, Hz.
    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    /// Signed flow-speed multiplier.
    pub fn speed_multiplier(&self) -> f64 {
        self.speed_multiplier
    }
}

impl Default for ClockParams {
    fn default() -> Self {
        Self::new(0.5, 0.2, 1.0)
    }
}

/// Dual attosecond clock with a perturbed twin.
///
/// `reference` is ground truth; `drifted` diverges from it only through the
/// per-tick fluctuation. Both start equal at a synchronization event.
#[derive(Debug, Clone)]
pub struct MetricClock {
    reference: BigInt,
    drifted: BigInt,
    scale: TimeScale,
    params: ClockParams,
    history: DriftHistory,
}

impl MetricClock {
    /// Create a clock at the epoch. Call [`MetricClock::synchronize`] (or
    /// [`MetricClock::synchronize_at`]) to latch onto a wall-clock instant.
    pub fn new(scale: TimeScale, params: ClockParams) -> Self {
        Self {
            reference: BigInt::from(0),
            drifted: BigInt::from(0),
            scale,
            params,
            history: DriftHistory::new(),
        }
    }

    /// Set both accumulators to the current wall-clock time and clear the
    /// drift history.
    pub fn synchronize(&mut self) {
        let now_ms = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as i64)
            .unwrap_or(0);
        self.synchronize_at(now_ms);
    }

    /// Set both accumulators to the given unix-epoch millisecond instant and
    /// clear the drift history.
    pub fn synchronize_at(&mut self, epoch_millis: i64) {
        let now = BigInt::from(epoch_millis) * BigInt::from(ATTO_PER_MILLI);
        self.reference = now.clone();
        self.drifted = now;
        self.history.clear();
    }

    /// Update the tuning surface. Every value is clamped into its range; the
    /// accumulators are untouched.
    pub fn set_parameters(
        &mut self,
        amplitude: f64,
        frequency: f64,
        scale: TimeScale,
        speed_multiplier: f64,
    ) {
        self.params = ClockParams::new(amplitude, frequency, speed_multiplier);
        self.scale = scale;
    }

    /// Advance both clocks by one tick of `real_elapsed_ms` real
    /// milliseconds.
    ///
    /// Stopping the external driver freezes the clock exactly as-is; there
    /// is no catch-up on resume.
    pub fn advance(&mut self, real_elapsed_ms: f64) {
        let delta = self.simulated_delta(real_elapsed_ms);

        // Whole simulated seconds; the fluctuation phase only carries
        // second resolution.
        let t = (&self.reference / BigInt::from(ATTO_PER_SECOND))
            .to_f64()
            .unwrap_or(0.0);
        let epsilon = self.params.amplitude
            * METRIC_COUPLING
            * (std::f64::consts::TAU * self.params.frequency * t).cos();

        // The perturbation is a physically continuous quantity; this is the
        // only place floating point meets the accumulators, rounded back to
        // an exact integer before it lands.
        let drift_atto = (delta.to_f64().unwrap_or(0.0) * epsilon).round() as i128;

        self.reference += &delta;
        self.drifted += delta + BigInt::from(drift_atto);

        let drift_ns = self.drift_nanoseconds();
        self.history.push(DriftSample {
            time: t.rem_euclid(HISTORY_WINDOW_SECS),
            drift_ns,
        });
    }

    /// Ground-truth accumulator, attoseconds since the unix epoch.
    pub fn reference(&self) -> &BigInt {
        &self.reference
    }

    /// Perturbed accumulator, attoseconds since the unix epoch.
    pub fn drifted(&self) -> &BigInt {
        &self.drifted
    }

    /// Exact divergence `drifted − reference`, attoseconds.
    pub fn drift_attoseconds(&self) -> BigInt {
        &self.drifted - &self.reference
    }

    /// Divergence in nanoseconds, as a display value.
    pub fn drift_nanoseconds(&self) -> f64 {
        self.drift_attoseconds().to_f64().unwrap_or(0.0) / 1e9
    }

    /// Current tuning parameters.
    pub fn params(&self) -> ClockParams {
        self.params
    }

    /// Current time scale.
    pub fn scale(&self) -> TimeScale {
        self.scale
    }

    /// Rolling drift history.
    pub fn history(&self) -> &DriftHistory {
        &self.history
    }

    /// Exact simulated delta for one tick.
    ///
    /// `round(ms × 10) × atto_per_real_second × floor(speed × 100) / 10⁶` —
    /// the two quantizations keep the product an exact integer before the
    /// single truncating divide.
    fn simulated_delta(&self, real_elapsed_ms: f64) -> BigInt {
        let tenth_ms = (real_elapsed_ms * 10.0).round() as i128;
        let speed_centi = (self.params.speed_multiplier * 100.0).floor() as i128;
        let scale_atto = self.scale.atto_per_real_second();
        BigInt::from(tenth_ms) * BigInt::from(scale_atto) * BigInt::from(speed_centi)
            / BigInt::from(1_000_000_i128)
    }
}

impl Default for MetricClock {
    fn default() -> Self {
        Self::new(TimeScale::default(), ClockParams::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::Zero;

    const FRAME_MS: f64 = 16.0;

    fn real_time_clock(amplitude: f64) -> MetricClock {
        let mut clock = MetricClock::new(TimeScale::Second, ClockParams::new(amplitude, 0.2, 1.0));
        clock.synchronize_at(0);
        clock
    }

    #[test]
    fn params_are_clamped() {
        let p = ClockParams::new(999.0, -3.0, -999.0);
        assert_eq!(p.amplitude(), 10.0);
        assert_eq!(p.frequency(), 0.0);
        assert_eq!(p.speed_multiplier(), -50.0);
    }

    #[test]
    fn reference_strictly_increases_at_positive_speed() {
        let mut clock = real_time_clock(0.5);
        let mut prev = clock.reference().clone();
        for _ in 0..100 {
            clock.advance(FRAME_MS);
            assert!(
                clock.reference() > &prev,
                "reference must strictly increase each tick"
            );
            prev = clock.reference().clone();
        }
    }

    #[test]
    fn negative_speed_runs_backward() {
        let mut clock = MetricClock::new(TimeScale::Second, ClockParams::new(0.0, 0.2, -1.0));
        clock.synchronize_at(1_000_000);
        let start = clock.reference().clone();
        clock.advance(FRAME_MS);
        assert!(clock.reference() < &start);
    }

    #[test]
    fn zero_amplitude_keeps_clocks_identical() {
        let mut clock = real_time_clock(0.0);
        for _ in 0..500 {
            clock.advance(FRAME_MS);
        }
        assert!(clock.drift_attoseconds().is_zero());
        assert_eq!(clock.reference(), clock.drifted());
    }

    #[test]
    fn synchronize_resets_divergence_and_history() {
        let mut clock = real_time_clock(5.0);
        for _ in 0..100 {
            clock.advance(FRAME_MS);
        }
        assert!(!clock.history().is_empty());
        clock.synchronize_at(42_000);
        assert!(clock.drift_attoseconds().is_zero());
        assert!(clock.history().is_empty());
        assert_eq!(
            clock.reference(),
            &(BigInt::from(42_000) * BigInt::from(ATTO_PER_MILLI))
        );
    }

    #[test]
    fn history_never_exceeds_capacity() {
        use crate::history::HISTORY_CAPACITY;
        let mut clock = real_time_clock(0.5);
        for _ in 0..3 * HISTORY_CAPACITY {
            clock.advance(FRAME_MS);
        }
        assert_eq!(clock.history().len(), HISTORY_CAPACITY);
    }

    #[test]
    fn thousand_frames_accumulate_sixteen_seconds_exactly() {
        // 1000 × 16 ms at 1 s/s and speed ×1 is exactly 16 000 simulated ms.
        let mut clock = real_time_clock(0.5);
        for _ in 0..1000 {
            clock.advance(FRAME_MS);
        }
        let expected = BigInt::from(16_000) * BigInt::from(ATTO_PER_MILLI);
        assert_eq!(clock.reference(), &expected);
    }

    #[test]
    fn drift_stays_inside_amplitude_envelope() {
        let amplitude = 0.5;
        let frames = 1000;
        let mut clock = real_time_clock(amplitude);
        for _ in 0..frames {
            clock.advance(FRAME_MS);
        }
        let total = BigInt::from(16_000) * BigInt::from(ATTO_PER_MILLI);
        let envelope = total.to_f64().unwrap() * amplitude * METRIC_COUPLING
            + frames as f64; // half-attosecond rounding slack per frame
        let drift = clock.drift_attoseconds().to_f64().unwrap().abs();
        assert!(
            drift <= envelope,
            "drift {} exceeds envelope {}",
            drift,
            envelope
        );
    }

    #[test]
    fn nonzero_amplitude_eventually_diverges() {
        let mut clock = real_time_clock(5.0);
        for _ in 0..200 {
            clock.advance(FRAME_MS);
        }
        assert!(!clock.drift_attoseconds().is_zero());
    }

    #[test]
    fn fixed_point_delta_at_millisecond_scale() {
        // 16 real ms at one simulated millisecond per real second is
        // exactly 16 µs of simulated time.
        let mut clock = MetricClock::new(TimeScale::Millisecond, ClockParams::new(0.0, 0.0, 1.0));
        clock.synchronize_at(0);
        clock.advance(FRAME_MS);
        assert_eq!(
            clock.reference(),
            &BigInt::from(16 * crate::units::ATTO_PER_MICRO)
        );
    }

    #[test]
    fn set_parameters_clamps_and_keeps_accumulators() {
        let mut clock = real_time_clock(0.5);
        for _ in 0..10 {
            clock.advance(FRAME_MS);
        }
        let reference = clock.reference().clone();
        clock.set_parameters(-1.0, 99.0, TimeScale::Minutes(10), 3.0);
        assert_eq!(clock.params().amplitude(), 0.0);
        assert_eq!(clock.params().frequency(), 5.0);
        assert_eq!(clock.params().speed_multiplier(), 3.0);
        assert_eq!(clock.scale(), TimeScale::Minutes(10));
        assert_eq!(clock.reference(), &reference);
    }

    #[test]
    fn history_abscissa_stays_in_window() {
        let mut clock = MetricClock::new(TimeScale::Hours(4), ClockParams::new(0.5, 0.2, 1.0));
        clock.synchronize_at(0);
        for _ in 0..300 {
            clock.advance(FRAME_MS);
        }
        for sample in clock.history().iter() {
            assert!(sample.time >= 0.0 && sample.time < HISTORY_WINDOW_SECS);
        }
    }
}
