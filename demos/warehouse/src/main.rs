//! warehouse — end-to-end demo of the warebots simulation core.
//!
//! Five robots roam a 20 × 20 m arena for a 30-second countdown: four run the
//! avoid-other-robots policy (halt when meeting a robot, turn away from
//! shelves and walls) and one runs the turn-on-anything policy.  Collision
//! detection is external to the core, so this demo feeds a scripted event
//! tape — collision-enter and payload-contact events pinned to tick indices —
//! while the tick loop runs at 10 Hz.  Output goes to `output/warehouse/` as
//! CSV plus a final console table.

use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use wb_agent::{AgentConfig, CollisionCategory, ReactionPolicy};
use wb_core::{AgentId, Arena, PayloadId};
use wb_output::{CsvWriter, SimOutputObserver};
use wb_sim::{SimBuilder, SimConfig, SimObserver};

// ── Constants ─────────────────────────────────────────────────────────────────

const CAUTIOUS_ROBOTS: usize = 4;
const SEED:            u64   = 42;
const DT:              f32   = 0.1; // 10 Hz tick
const COUNTDOWN_SECS:  f32   = 30.0;
const SNAPSHOT_TICKS:  u64   = 10;  // snapshot once per simulated second

// ── Scripted event tape ───────────────────────────────────────────────────────

/// An event the external collision detector would deliver, pinned to a tick.
enum TapeEvent {
    Collision(AgentId, CollisionCategory),
    Payload(AgentId, PayloadId),
}

/// A hand-written minute of warehouse traffic.
///
/// Tick indices are at 10 Hz: tick 50 = 5.0 s.  Events must be sorted by
/// tick; they are dispatched just before that tick advances.
fn event_tape() -> Vec<(u64, TapeEvent)> {
    use CollisionCategory::{Robot, Shelf, Wall};
    use TapeEvent::{Collision, Payload};

    vec![
        (20, Collision(AgentId(0), Wall)),
        (25, Payload(AgentId(1), PayloadId(0))),
        (40, Collision(AgentId(1), Shelf)),
        (60, Collision(AgentId(2), Robot)), // cautious robot: halts 3 s
        (62, Collision(AgentId(2), Robot)), // duplicate while halted: no-op
        (75, Payload(AgentId(1), PayloadId(1))),
        (80, Collision(AgentId(4), Robot)), // bold robot: turns instead
        (110, Collision(AgentId(0), Shelf)),
        (120, Payload(AgentId(3), PayloadId(2))),
        (150, Collision(AgentId(3), Wall)),
        (180, Payload(AgentId(1), PayloadId(3))),
        (200, Collision(AgentId(2), Wall)),
        (240, Payload(AgentId(1), PayloadId(4))),
        (255, Collision(AgentId(1), Robot)),
    ]
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== warehouse — warebots simulation core ===");
    println!(
        "Robots: {} cautious + 1 bold  |  Countdown: {COUNTDOWN_SECS} s  |  Seed: {SEED}",
        CAUTIOUS_ROBOTS
    );
    println!();

    // 1. Arena and fleet.
    let arena = Arena::new(10.0, 10.0)?;
    let cautious = AgentConfig::default(); // halt_for_robots policy
    let bold = AgentConfig {
        policy: ReactionPolicy::turn_on_contact(),
        ..AgentConfig::default()
    };

    let config = SimConfig {
        countdown_limit_secs:    COUNTDOWN_SECS,
        snapshot_interval_ticks: SNAPSHOT_TICKS,
        seed:                    SEED,
    };
    let mut sim = SimBuilder::new(config)
        .scatter(CAUTIOUS_ROBOTS, cautious, &arena)
        .scatter(1, bold, &arena)
        .build()?;
    println!("Arena: {arena}  |  Agents: {}", sim.agents.len());

    // 2. Output.
    std::fs::create_dir_all("output/warehouse")?;
    let writer = CsvWriter::new(Path::new("output/warehouse"))?;
    let mut obs = SimOutputObserver::new(writer);

    // 3. Drive the tick loop, feeding tape events at their pinned ticks.
    let tape = event_tape();
    let mut next_event = 0;
    let t0 = Instant::now();

    loop {
        while next_event < tape.len() && tape[next_event].0 == sim.ticks {
            match &tape[next_event].1 {
                TapeEvent::Collision(agent, category) => {
                    sim.on_collision(*agent, *category)?;
                }
                TapeEvent::Payload(agent, payload) => {
                    sim.on_payload_contact(*agent, *payload)?;
                }
            }
            next_event += 1;
        }
        if !sim.tick(DT, &mut obs) {
            break;
        }
    }
    let elapsed = t0.elapsed();

    // The manual loop bypasses run_until_stopped, so close the writer here.
    obs.on_sim_end(sim.ticks);
    if let Some(e) = obs.take_error() {
        eprintln!("output error: {e}");
    }

    // 4. Summary.
    let census = sim.census();
    println!();
    println!("Countdown: {}  (stopped: {})", sim.countdown.formatted(), sim.countdown.stopped());
    println!("Simulated {} ticks in {:.3} s", sim.ticks, elapsed.as_secs_f64());
    println!(
        "Final census: {} moving / {} turning / {} halted, {} boxes carried",
        census.moving, census.turning, census.halted, census.boxes_carried
    );
    println!();

    // 5. Final agent table.
    println!(
        "{:<7} {:<9} {:<22} {:<7} {:<10}",
        "Agent", "State", "Position", "Boxes", "Odometer"
    );
    println!("{}", "-".repeat(58));
    for (i, agent) in sim.agents.iter().enumerate() {
        let p = agent.position();
        println!(
            "{:<7} {:<9} ({:>6.2}, {:>5.2}, {:>6.2})  {:<7} {:<10.2}",
            i,
            agent.state().to_string(),
            p.x,
            p.y,
            p.z,
            agent.cargo().len(),
            agent.odometer()
        );
    }

    Ok(())
}
