//! # Collapse Demo
//!
//! Drives the lattice simulator through a full scripted run — settle under
//! the central mass, collapse, burst decay, relaxation — printing the HUD
//! readouts after each phase. The loop body is exactly what an
//! animation-frame callback would do.
//!
//! Run: `cargo run --example collapse_demo`

use brane_collapse_sim::prelude::*;

fn report(label: &str, sim: &CollapseSim) {
    println!(
        "  {:<22} phase={:?} stress={:6.2}% tension={:6.2}% ring={:5.1}px particles={}",
        label,
        sim.phase(),
        sim.metric_stress(),
        sim.brane_tension(),
        sim.ring_radius(),
        sim.particles().len()
    );
}

fn main() {
    println!("══════════════════════════════════════════════════════════");
    println!("  BRANE COLLAPSE — spring lattice + central mass removal");
    println!("══════════════════════════════════════════════════════════");
    println!();

    let mut sim = CollapseSim::with_seed(15, 20, 30.0, 7);
    sim.set_tuning(24.0, 37.0, 1.0);
    report("initial", &sim);

    // ── Settle under the central mass ──
    for _ in 0..100 {
        sim.step();
    }
    report("after 100 ticks", &sim);

    // ── Collapse ──
    sim.trigger_collapse();
    report("collapse triggered", &sim);
    for _ in 0..50 {
        sim.step();
    }
    report("wavefront at cap", &sim);

    // ── Let the burst drain and the fabric relax ──
    let mut ticks = 0;
    while !sim.particles().is_empty() {
        sim.step();
        ticks += 1;
    }
    println!("  burst drained after {} more ticks", ticks);
    for _ in 0..200 {
        sim.step();
    }
    report("relaxed", &sim);
    println!();

    // ── Time reversal: mirrored ghost layer ──
    sim.set_tuning(24.0, 37.0, -1.5);
    sim.step();
    println!(
        "  time reversed: ghost layer carries {} mirrored nodes",
        sim.ghost_layer().len()
    );
    println!();

    // ── Back to the start ──
    sim.reset();
    report("after reset", &sim);
}
