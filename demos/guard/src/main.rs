//! guard - runs a sentry scenario headless and logs what the guards do.
//!
//! Usage: `guard [scenario.json]`.  Without an argument the bundled
//! `scenario.json` is used.  Set `RUST_LOG=debug` to see every transition
//! as it happens, `RUST_LOG=trace` for destination requests too.

mod scenario;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use npc_behavior::{BehaviorEvent, BehaviorState};
use npc_core::{AgentId, Tick};
use npc_sim::SimObserver;

use scenario::{BUILT_IN, Scenario};

// ── Observer ──────────────────────────────────────────────────────────────────

/// Tallies events per agent and logs the interesting ones.
struct GuardLog {
    transitions: Vec<usize>,
    attacks:     Vec<usize>,
    sightings:   Vec<usize>,
}

impl GuardLog {
    fn new(agents: usize) -> Self {
        Self {
            transitions: vec![0; agents],
            attacks:     vec![0; agents],
            sightings:   vec![0; agents],
        }
    }
}

impl SimObserver for GuardLog {
    fn on_event(&mut self, tick: Tick, agent: AgentId, event: &BehaviorEvent) {
        let i = agent.index();
        match event {
            BehaviorEvent::Transition { from, to } => {
                self.transitions[i] += 1;
                if *to == BehaviorState::Chasing && *from != BehaviorState::Attacking {
                    self.sightings[i] += 1;
                }
                tracing::info!(%tick, %agent, %from, %to, "transition");
            }
            BehaviorEvent::Attack { distance, .. } => {
                self.attacks[i] += 1;
                tracing::info!(%tick, %agent, distance, "attack");
            }
            BehaviorEvent::DestinationRequested(_) => {}
        }
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        tracing::info!(%final_tick, "simulation finished");
    }
}

// ── Logging ───────────────────────────────────────────────────────────────────

/// `RUST_LOG` when it is set and parses, `info` otherwise.
fn log_filter(rust_log: Option<String>) -> EnvFilter {
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(std::env::var("RUST_LOG").ok()))
        .with_writer(std::io::stderr)
        .init();

    // 1. Load the scenario.
    let scenario = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => Scenario::load(&path)?,
        None => Scenario::from_json(BUILT_IN)?,
    };
    let duration = scenario.sim.total_ticks as f32 * scenario.sim.tick_duration_secs;
    println!("=== guard - npc sentry scenario ===");
    println!(
        "Agents: {}  |  Obstacles: {}  |  {:.1} s simulated  |  Seed: {}",
        scenario.agents.len(),
        scenario.obstacles.len(),
        duration,
        scenario.sim.seed,
    );
    println!();

    // 2. Build and run.
    let mut sim = scenario.build()?;
    let mut log = GuardLog::new(sim.agents.len());

    let t0 = Instant::now();
    sim.run(&mut log)?;
    let elapsed = t0.elapsed();
    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!();

    // 3. Per-agent summary.
    println!(
        "{:<8} {:<12} {:<10} {:<10} {:<8} {:<24}",
        "Agent", "State", "Changes", "Sightings", "Attacks", "Position"
    );
    println!("{}", "-".repeat(74));
    for agent in &sim.agents {
        let i = agent.id().index();
        let p = agent.navigator.position();
        println!(
            "{:<8} {:<12} {:<10} {:<10} {:<8} ({:.1}, {:.1}, {:.1})",
            i,
            agent.machine.state().as_str(),
            log.transitions[i],
            log.sightings[i],
            log.attacks[i],
            p.x,
            p.y,
            p.z,
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rust_log_overrides_default_level() {
        assert_eq!(log_filter(Some("debug".into())).to_string(), "debug");
        assert_eq!(log_filter(Some("npc_behavior=trace".into())).to_string(), "npc_behavior=trace");
    }

    #[test]
    fn falls_back_to_info() {
        assert_eq!(log_filter(None).to_string(), "info");
        assert_eq!(log_filter(Some("npc_behavior=loud".into())).to_string(), "info");
    }
}
