//! Unit tests for wb-agent.

use glam::{Quat, Vec3};

use wb_core::PayloadId;

use crate::{Agent, AgentConfig, CollisionCategory, LocomotionState, ReactionPolicy};

const EPS: f32 = 1e-4;

fn spawn_default() -> Agent {
    Agent::spawn(AgentConfig::default(), Vec3::ZERO, Quat::IDENTITY).unwrap()
}

fn spawn_with(config: AgentConfig) -> Agent {
    Agent::spawn(config, Vec3::ZERO, Quat::IDENTITY).unwrap()
}

// ── Reaction policy ───────────────────────────────────────────────────────────

#[cfg(test)]
mod reaction_policy {
    use crate::{CollisionCategory, Reaction, ReactionPolicy};

    #[test]
    fn halt_for_robots_mapping() {
        let p = ReactionPolicy::halt_for_robots();
        assert_eq!(p.reaction_for(CollisionCategory::Robot), Reaction::StartHalt);
        assert_eq!(p.reaction_for(CollisionCategory::Shelf), Reaction::StartTurn);
        assert_eq!(p.reaction_for(CollisionCategory::Wall), Reaction::StartTurn);
        assert_eq!(p.reaction_for(CollisionCategory::Other), Reaction::Ignore);
    }

    #[test]
    fn turn_on_contact_mapping() {
        let p = ReactionPolicy::turn_on_contact();
        for cat in [
            CollisionCategory::Robot,
            CollisionCategory::Shelf,
            CollisionCategory::Wall,
        ] {
            assert_eq!(p.reaction_for(cat), Reaction::StartTurn);
        }
        assert_eq!(p.reaction_for(CollisionCategory::Other), Reaction::Ignore);
    }

    #[test]
    fn default_is_halt_for_robots() {
        assert_eq!(ReactionPolicy::default(), ReactionPolicy::halt_for_robots());
    }
}

// ── Cargo stack ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod cargo_stack {
    use glam::Vec3;
    use wb_core::PayloadId;

    use crate::{CargoConfig, CargoStack};

    #[test]
    fn attaches_up_to_capacity_then_refuses() {
        let mut stack = CargoStack::new(CargoConfig::default()).unwrap();
        for i in 0..5 {
            let slot = stack.try_attach(PayloadId(i)).expect("room for box");
            assert_eq!(slot.index, i as usize);
        }
        assert!(stack.is_full());

        // The sixth attach leaves the stack unchanged.
        let before: Vec<_> = stack.items().to_vec();
        assert!(stack.try_attach(PayloadId(99)).is_none());
        assert_eq!(stack.items(), &before[..]);
    }

    #[test]
    fn slot_offsets_stack_vertically() {
        let config = CargoConfig { capacity: 4, item_height: 0.5 };
        let mut stack = CargoStack::new(config).unwrap();
        for i in 0..4 {
            let slot = stack.try_attach(PayloadId(i)).unwrap();
            assert_eq!(slot.local_offset, Vec3::new(0.0, 0.5 * i as f32, 0.0));
        }
    }

    #[test]
    fn items_keep_insertion_order() {
        let mut stack = CargoStack::new(CargoConfig::default()).unwrap();
        stack.try_attach(PayloadId(7));
        stack.try_attach(PayloadId(3));
        stack.try_attach(PayloadId(11));
        assert_eq!(stack.items(), &[PayloadId(7), PayloadId(3), PayloadId(11)]);
    }

    #[test]
    fn invalid_configs_rejected() {
        assert!(CargoStack::new(CargoConfig { capacity: 0, item_height: 0.5 }).is_err());
        assert!(CargoStack::new(CargoConfig { capacity: 5, item_height: 0.0 }).is_err());
        assert!(CargoStack::new(CargoConfig { capacity: 5, item_height: f32::NAN }).is_err());
    }
}

// ── Agent locomotion ──────────────────────────────────────────────────────────

#[cfg(test)]
mod locomotion {
    use super::*;

    #[test]
    fn spawn_rejects_bad_speed() {
        let config = AgentConfig { forward_speed: 0.0, ..AgentConfig::default() };
        assert!(Agent::spawn(config, Vec3::ZERO, Quat::IDENTITY).is_err());
        let config = AgentConfig { forward_speed: f32::NAN, ..AgentConfig::default() };
        assert!(Agent::spawn(config, Vec3::ZERO, Quat::IDENTITY).is_err());
    }

    #[test]
    fn moves_forward_at_constant_speed() {
        // speed 5, two ticks of dt=1 → 10 units along the initial forward vector.
        let mut agent = spawn_default();
        let forward = agent.forward();
        agent.advance(1.0);
        agent.advance(1.0);

        assert!((agent.position() - forward * 10.0).length() < EPS);
        assert_eq!(agent.orientation(), Quat::IDENTITY);
        assert_eq!(agent.state(), LocomotionState::Moving);
        assert!((agent.odometer() - 10.0).abs() < EPS);
    }

    #[test]
    fn forward_follows_orientation() {
        let facing_east = Quat::from_rotation_y(90.0_f32.to_radians());
        let mut agent = Agent::spawn(AgentConfig::default(), Vec3::ZERO, facing_east).unwrap();
        agent.advance(1.0);
        // +Z rotated 90° about Y lands on +X.
        assert!((agent.position() - Vec3::new(5.0, 0.0, 0.0)).length() < EPS);
    }
}

// ── Turn reaction ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod turning {
    use super::*;

    #[test]
    fn wall_hit_turns_then_resumes_moving() {
        let mut agent = spawn_default();
        let initial = agent.orientation();

        agent.on_collision(CollisionCategory::Wall);
        assert_eq!(agent.state(), LocomotionState::Turning);

        let target = agent.turn_task().unwrap().target();
        let pos_at_start = agent.position();

        // duration 0.3 with ticks of 0.1 — at most four ticks to finish.
        for _ in 0..4 {
            if agent.state() != LocomotionState::Turning {
                break;
            }
            agent.advance(0.1);
        }
        // Orientation ends exactly at initial ∘ rotate_y(90°).
        assert_eq!(agent.orientation(), target);
        let expected = initial * Quat::from_rotation_y(90.0_f32.to_radians());
        assert!(agent.orientation().abs_diff_eq(expected, EPS));
        assert_eq!(agent.state(), LocomotionState::Moving);
        // Position is frozen for the whole turn.
        assert_eq!(agent.position(), pos_at_start);
    }

    #[test]
    fn start_turn_is_idempotent_while_turning() {
        let mut agent = spawn_default();
        agent.on_collision(CollisionCategory::Shelf);
        agent.advance(0.1);

        let task_before = *agent.turn_task().unwrap();
        // A second collision mid-turn must not restart or replace the task.
        agent.on_collision(CollisionCategory::Wall);
        let task_after = *agent.turn_task().unwrap();

        assert_eq!(task_before.start(), task_after.start());
        assert_eq!(task_before.target(), task_after.target());
        assert_eq!(task_before.elapsed(), task_after.elapsed());
    }

    #[test]
    fn other_category_is_ignored() {
        let mut agent = spawn_default();
        agent.on_collision(CollisionCategory::Other);
        assert_eq!(agent.state(), LocomotionState::Moving);
    }
}

// ── Halt reaction ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod halting {
    use super::*;

    #[test]
    fn robot_hit_halts_for_duration_then_resumes() {
        // Variant A: Robot → halt 3.0 s; position frozen; then Moving again.
        let mut agent = spawn_default();
        agent.on_collision(CollisionCategory::Robot);
        assert_eq!(agent.state(), LocomotionState::Halted);

        let frozen = agent.position();
        let orientation = agent.orientation();
        agent.advance(1.0);
        agent.advance(1.0);
        assert_eq!(agent.state(), LocomotionState::Halted);
        assert_eq!(agent.position(), frozen);
        assert_eq!(agent.orientation(), orientation);

        // Third second exhausts the halt (remaining hits exactly 0).
        agent.advance(1.0);
        assert_eq!(agent.state(), LocomotionState::Moving);
        assert_eq!(agent.position(), frozen);

        // Next tick moves again.
        agent.advance(1.0);
        assert!((agent.position() - frozen).length() > 1.0);
    }

    #[test]
    fn robot_hit_while_halted_does_not_rewind_clock() {
        let mut agent = spawn_default();
        agent.on_collision(CollisionCategory::Robot);
        agent.advance(2.0);
        let remaining = agent.halt_task().unwrap().remaining();

        agent.on_collision(CollisionCategory::Robot);
        assert_eq!(agent.halt_task().unwrap().remaining(), remaining);
    }

    #[test]
    fn variant_b_turns_for_robots_and_never_halts() {
        let config = AgentConfig {
            policy: ReactionPolicy::turn_on_contact(),
            ..AgentConfig::default()
        };
        let mut agent = spawn_with(config);
        agent.on_collision(CollisionCategory::Robot);
        assert_eq!(agent.state(), LocomotionState::Turning);
        assert!(agent.halt_task().is_none());
    }

    #[test]
    fn turn_takes_precedence_over_pending_halt() {
        // A halt arriving mid-turn must wait: the turn finishes first and the
        // halt clock only starts counting afterwards.
        let mut agent = spawn_default();
        agent.on_collision(CollisionCategory::Wall); // start turning
        agent.advance(0.1);
        agent.on_collision(CollisionCategory::Robot); // halt queued behind the turn

        assert_eq!(agent.state(), LocomotionState::Turning);
        assert_eq!(agent.halt_task().unwrap().remaining(), 3.0);

        // Finish the turn.
        while agent.state() == LocomotionState::Turning {
            agent.advance(0.1);
        }
        // Halt untouched during the turn; now it owns the tick.
        assert_eq!(agent.state(), LocomotionState::Halted);
        assert_eq!(agent.halt_task().unwrap().remaining(), 3.0);

        agent.advance(1.0);
        assert!((agent.halt_task().unwrap().remaining() - 2.0).abs() < EPS);
    }
}

// ── Cargo via agent ───────────────────────────────────────────────────────────

#[cfg(test)]
mod cargo_events {
    use super::*;

    #[test]
    fn payload_contact_attaches_regardless_of_state() {
        let mut agent = spawn_default();
        agent.on_collision(CollisionCategory::Robot); // halted
        let slot = agent.try_attach(PayloadId(1)).expect("attach while halted");
        assert_eq!(slot.index, 0);
        assert_eq!(agent.cargo().len(), 1);
    }

    #[test]
    fn full_stack_refuses_without_disturbing_locomotion() {
        let mut agent = spawn_default();
        for i in 0..5 {
            agent.try_attach(PayloadId(i));
        }
        assert!(agent.try_attach(PayloadId(5)).is_none());
        assert_eq!(agent.state(), LocomotionState::Moving);
    }
}
