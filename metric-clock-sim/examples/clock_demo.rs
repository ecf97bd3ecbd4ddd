//! # Metric Clock Demo
//!
//! Drives the dual clock synchronously at a fixed 16 ms timestep — the same
//! contract an animation-frame callback would provide — and prints both
//! accumulators, the decomposed display layers, and the drift tail.
//!
//! Run: `cargo run --example clock_demo`

use metric_clock_sim::prelude::*;

const FRAME_MS: f64 = 16.0;

fn print_clock(label: &str, parts: Option<TimeParts>) {
    match parts {
        Some(p) => println!("  {:<10} {}", label, p),
        None => println!("  {:<10} <out of calendar range>", label),
    }
}

fn main() {
    println!("══════════════════════════════════════════════════");
    println!("  METRIC CLOCK — dual attosecond accumulators");
    println!("══════════════════════════════════════════════════");
    println!();

    let mut clock = MetricClock::new(TimeScale::Second, ClockParams::default());
    clock.synchronize();

    // ── Phase 1: default fluctuation, one simulated minute ──
    println!("━━━ Phase 1: amplitude 0.5, frequency 0.2 Hz, real time ━━━");
    for frame in 1..=3750 {
        clock.advance(FRAME_MS);
        if frame % 1250 == 0 {
            println!("after {} frames:", frame);
            print_clock("reference", decompose(clock.reference()));
            print_clock("drifted", decompose(clock.drifted()));
            println!("  drift      {:+.6} ns", clock.drift_nanoseconds());
        }
    }
    println!();

    // ── Phase 2: crank the fluctuation, fast-forward an hour/second ──
    println!("━━━ Phase 2: amplitude 5.0, frequency 1.0 Hz, 1 h/s ━━━");
    clock.set_parameters(5.0, 1.0, TimeScale::Hours(1), 1.0);
    for _ in 0..625 {
        clock.advance(FRAME_MS);
    }
    print_clock("reference", decompose(clock.reference()));
    print_clock("drifted", decompose(clock.drifted()));
    println!("  drift      {:+.6} ns", clock.drift_nanoseconds());
    println!();

    // ── Drift history tail ──
    println!("━━━ Drift history ({} samples retained) ━━━", clock.history().len());
    for sample in clock.history().iter().rev().take(5) {
        println!("  t={:6.2}s  drift={:+.6} ns", sample.time, sample.drift_ns);
    }
    println!();

    // ── Resynchronize ──
    clock.synchronize();
    println!("resynchronized: drift = {} as, history empty = {}",
        clock.drift_attoseconds(),
        clock.history().is_empty()
    );
}
