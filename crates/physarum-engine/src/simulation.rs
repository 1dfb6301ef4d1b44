//! The typed simulation stepper.

use std::time::Instant;

use physarum_agents::{Agent, AgentPopulation, StepParams};
use physarum_core::{ConfigError, InitError, SimulationConfig, SpeciesTable, StepError, TickId};
use physarum_field::{TrailField, TrailSnapshot};
use physarum_space::Lattice;
use tracing::{debug, debug_span, error, info};

use crate::metrics::TickMetrics;

/// One simulation instance on lattice `L`.
///
/// Extents, agent count and species are fixed at construction; changing
/// them means building a new instance.
#[derive(Debug)]
pub struct Simulation<L: Lattice> {
    config: SimulationConfig,
    seed: u64,
    field: TrailField<L>,
    population: AgentPopulation<L>,
    tick: TickId,
    metrics: TickMetrics,
}

impl<L: Lattice> Simulation<L> {
    /// Validate the configuration, allocate buffers and spawn agents.
    ///
    /// # Errors
    ///
    /// - [`InitError::Config`] for invalid parameters, an extents
    ///   dimensionality that does not match `L`, or more species than
    ///   `L::MAX_CHANNELS`
    /// - [`InitError::Resource`] if a buffer cannot be allocated
    pub fn initialize(
        config: SimulationConfig,
        species: SpeciesTable,
        seed: u64,
    ) -> Result<Self, InitError> {
        let lattice = Self::prepare(&config, &species)?;
        let population = AgentPopulation::spawn(&lattice, species, &config, seed)?;
        Self::assemble(config, lattice, population, seed)
    }

    /// Like [`initialize`](Self::initialize) with caller-placed agents.
    ///
    /// `config.agent_count` must equal `agents.len()`. Positions are
    /// wrapped into the lattice. The seed is only recorded; each agent
    /// already carries its own stream.
    pub fn with_agents(
        config: SimulationConfig,
        species: SpeciesTable,
        mut agents: Vec<Agent<L>>,
        seed: u64,
    ) -> Result<Self, InitError> {
        if agents.len() != config.agent_count as usize {
            return Err(ConfigError::AgentCountMismatch {
                expected: config.agent_count as usize,
                got: agents.len(),
            }
            .into());
        }
        let lattice = Self::prepare(&config, &species)?;
        for a in &mut agents {
            a.position = lattice.wrap_point(a.position);
        }
        let population = AgentPopulation::from_agents(agents, species)?;
        Self::assemble(config, lattice, population, seed)
    }

    fn prepare(config: &SimulationConfig, species: &SpeciesTable) -> Result<L, ConfigError> {
        config.validate()?;
        species.check_channel_limit(L::MAX_CHANNELS)?;
        Ok(L::from_extents(&config.extents)?)
    }

    fn assemble(
        config: SimulationConfig,
        lattice: L,
        population: AgentPopulation<L>,
        seed: u64,
    ) -> Result<Self, InitError> {
        let field = TrailField::new(lattice, population.species().len())?;
        info!(
            ndim = L::NDIM,
            extents = ?config.extents.padded(),
            agents = population.len(),
            species = population.species().len(),
            seed,
            "simulation initialized"
        );
        Ok(Self {
            config,
            seed,
            field,
            population,
            tick: TickId::default(),
            metrics: TickMetrics::default(),
        })
    }

    /// Run one tick: agent pass, then diffusion and swap.
    ///
    /// # Errors
    ///
    /// [`StepError::InvalidDt`] if `dt` is negative or not finite (nothing
    /// is mutated), or [`StepError::Invariant`] if debug validation finds
    /// a corrupted field after the tick. A tick that fails validation has
    /// still run: the tick counter and metrics include it.
    pub fn advance(&mut self, dt: f32) -> Result<&TickMetrics, StepError> {
        if !dt.is_finite() || dt < 0.0 {
            return Err(StepError::InvalidDt { value: dt });
        }
        let next = self.tick.next();
        let _span = debug_span!("tick", tick = next.0).entered();
        let start = Instant::now();

        let params = StepParams::from_config(&self.config, dt);
        let stats = self
            .population
            .update(&mut self.field, &params, self.config.execution)?;
        let agent_pass_us = start.elapsed().as_micros() as u64;

        let diffusion_start = Instant::now();
        self.field.diffuse(
            self.config.decay_rate,
            self.config.diffuse_rate,
            self.config.execution,
        );
        self.field.swap();
        let diffusion_us = diffusion_start.elapsed().as_micros() as u64;

        self.tick = next;
        self.metrics = TickMetrics {
            total_us: start.elapsed().as_micros() as u64,
            agent_pass_us,
            diffusion_us,
            deposit_count: stats.deposit_count,
            starved_agents: stats.starved,
            respawned_agents: stats.respawned,
            field_mass: self.field.mass(),
        };

        if self.config.debug_validation {
            if let Err(e) = self.field.validate() {
                error!(tick = next.0, error = %e, "trail field failed validation");
                return Err(e.into());
            }
        }
        debug!(
            deposits = stats.deposit_count,
            starved = stats.starved,
            mass = self.metrics.field_mass,
            total_us = self.metrics.total_us,
            "tick complete"
        );
        Ok(&self.metrics)
    }

    /// Run `steps_per_tick` ticks of `dt` each, stopping at the first error.
    pub fn advance_frame(&mut self, dt: f32) -> Result<&TickMetrics, StepError> {
        for _ in 0..self.config.steps_per_tick {
            self.advance(dt)?;
        }
        Ok(&self.metrics)
    }

    /// Read-only view of the live trail buffer.
    pub fn trail_field(&self) -> TrailSnapshot<'_> {
        self.field.snapshot()
    }

    /// Copy of one trail channel, one value per cell in rank order.
    pub fn trail_channel(&self, channel: usize) -> Vec<f32> {
        self.field.snapshot().channel(channel)
    }

    /// Seed one trail value before the first tick.
    ///
    /// Returns `false` once a tick has run or if `cell`/`channel` is out of
    /// range; the field is left untouched in that case.
    pub fn seed_trail(&mut self, cell: usize, channel: usize, value: f32) -> bool {
        if self.tick != TickId::default() {
            return false;
        }
        self.field.set(cell, channel, value)
    }

    /// Agents in index order.
    pub fn agents(&self) -> &[Agent<L>] {
        self.population.agents()
    }

    /// The lattice.
    pub fn lattice(&self) -> &L {
        self.field.lattice()
    }

    /// Species in channel order.
    pub fn species(&self) -> &SpeciesTable {
        self.population.species()
    }

    /// The run configuration.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Ticks completed so far; 0 after initialize.
    pub fn current_tick(&self) -> TickId {
        self.tick
    }

    /// Metrics from the most recent tick.
    pub fn last_metrics(&self) -> &TickMetrics {
        &self.metrics
    }

    /// Release all buffers.
    pub fn dispose(self) {
        info!(ticks = self.tick.0, seed = self.seed, "simulation disposed");
    }
}
