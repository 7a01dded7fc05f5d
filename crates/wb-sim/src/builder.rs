//! Fluent builder for constructing a [`Sim`].

use glam::{Quat, Vec3};

use wb_agent::{Agent, AgentConfig};
use wb_core::{Arena, CountdownClock, SimRng};

use crate::{Sim, SimConfig, SimError, SimResult};

/// Fluent builder for [`Sim`].
///
/// Agents are added either with explicit spawn poses ([`spawn`][Self::spawn])
/// or scattered randomly inside an [`Arena`] ([`scatter`][Self::scatter]);
/// the two can be mixed.  Scatter placement is driven by a `SimRng` seeded
/// from `config.seed`, so layouts are reproducible.
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(SimConfig::default())
///     .spawn(AgentConfig::default(), Vec3::ZERO, Quat::IDENTITY)
///     .scatter(4, AgentConfig::default(), &arena)
///     .build()?;
/// ```
pub struct SimBuilder {
    config: SimConfig,
    spawns: Vec<(AgentConfig, Vec3, Quat)>,
    rng:    SimRng,
}

impl SimBuilder {
    /// Create a builder; the scatter RNG is seeded from `config.seed`.
    pub fn new(config: SimConfig) -> Self {
        let rng = SimRng::new(config.seed);
        Self { config, spawns: Vec::new(), rng }
    }

    /// Add one agent at an explicit pose.
    pub fn spawn(mut self, config: AgentConfig, position: Vec3, orientation: Quat) -> Self {
        self.spawns.push((config, position, orientation));
        self
    }

    /// Add `count` agents at uniformly random floor points inside `arena`,
    /// each with a uniformly random initial heading.
    pub fn scatter(mut self, count: usize, config: AgentConfig, arena: &Arena) -> Self {
        for _ in 0..count {
            let position = arena.random_point(&mut self.rng);
            let yaw = self.rng.gen_range(0.0..std::f32::consts::TAU);
            self.spawns.push((config, position, Quat::from_rotation_y(yaw)));
        }
        self
    }

    /// Validate the configuration, spawn all agents, and return a
    /// ready-to-run [`Sim`].
    ///
    /// Fails if the countdown limit is invalid or any agent config is
    /// rejected at spawn.
    pub fn build(self) -> SimResult<Sim> {
        if self.spawns.is_empty() {
            return Err(SimError::Config("no agents spawned".into()));
        }

        let countdown = CountdownClock::new(self.config.countdown_limit_secs)?;

        let agents = self
            .spawns
            .into_iter()
            .map(|(config, position, orientation)| Agent::spawn(config, position, orientation))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Sim {
            config: self.config,
            countdown,
            agents,
            ticks: 0,
        })
    }
}
