//! Headless driver: initialize → advance frames → read the field → dispose.
//!
//! Usage: `headless [record.json] [frames]`. Without a record file the
//! reference profile is used. Set `RUST_LOG=debug` for per-tick spans.

use physarum_bench::{reference_profile, PROFILE_DT};
use physarum_core::SimulationRecord;
use physarum_engine::AnySimulation;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let record: SimulationRecord = match args.next() {
        Some(path) => {
            let text = std::fs::read_to_string(&path).unwrap();
            serde_json::from_str(&text).unwrap()
        }
        None => reference_profile(42),
    };
    let frames: usize = args.next().and_then(|s| s.parse().ok()).unwrap_or(120);

    println!("=== Physarum Headless ===\n");
    let mut sim = AnySimulation::from_record(record).unwrap();
    println!(
        "{}D lattice {:?}, {} agents, {} species",
        sim.ndim(),
        sim.dims(),
        sim.agent_count(),
        sim.species().len()
    );

    for frame in 0..frames {
        let m = sim.advance_frame(PROFILE_DT).unwrap();
        if frame % 30 == 0 {
            tracing::info!(
                frame,
                mass = m.field_mass,
                deposits = m.deposit_count,
                starved = m.starved_agents,
                total_us = m.total_us,
                "frame"
            );
        }
    }

    let field = sim.trail_field();
    for c in 0..field.channel_count() {
        let channel = field.channel(c);
        let peak = channel.iter().copied().fold(0.0f32, f32::max);
        println!("channel {c}: mass {:.2}, peak {peak:.3}", field.channel_mass(c));
    }
    println!("ticks: {}", sim.current_tick());
    sim.dispose();
}
