//! The agent pass.

use physarum_core::alloc::try_with_capacity;
use physarum_core::{
    Execution, FilterMode, InitError, InvariantViolation, SimulationConfig, SpawnMode,
    SpeciesAssignment, SpeciesTable,
};
use physarum_field::{Deposit, TrailField};
use physarum_space::{Heading, Lattice, Stencil};
use rand::Rng;
use rayon::prelude::*;
use tracing::trace;

use crate::agent::{Agent, SensorWeights};
use crate::rng::agent_rng;
use crate::sense::Probe;
use crate::spawn::place;
use crate::steer::decide;

/// Agents per lane. Fixed so deposit fold order never depends on the
/// thread count.
pub const LANE_SIZE: usize = 256;

/// Per-tick inputs to [`AgentPopulation::update`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepParams {
    /// Simulated seconds in this tick.
    pub dt: f32,
    /// Deposit per agent at full health.
    pub trail_weight: f32,
    /// Health lost per second.
    pub starvation_rate: f32,
    /// Sensor sampling policy.
    pub filter: FilterMode,
    /// Respawn starved agents with this placement, if set.
    pub respawn: Option<SpawnMode>,
}

impl StepParams {
    /// Tick inputs from the run configuration.
    pub fn from_config(config: &SimulationConfig, dt: f32) -> Self {
        Self {
            dt,
            trail_weight: config.trail_weight,
            starvation_rate: config.starvation_rate,
            filter: config.filter_mode,
            respawn: config.respawn_starved.then_some(config.spawn_mode),
        }
    }
}

/// Counters from one agent pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PassStats {
    /// Non-zero deposits folded into the field.
    pub deposit_count: usize,
    /// Agents at zero health after the pass.
    pub starved: usize,
    /// Agents respawned this pass.
    pub respawned: usize,
}

/// Per-species constants derived once at construction.
#[derive(Clone, Debug)]
struct Kinematics {
    move_speed: f32,
    turn_speed: f32,
    sensor_angle: f32,
    sensor_offset: f32,
    window: Stencil,
}

/// Everything a lane needs, shared read-only across lanes.
struct LaneContext<'a, L: Lattice> {
    field: &'a TrailField<L>,
    kinematics: &'a [Kinematics],
    params: &'a StepParams,
}

/// Result of one agent's update.
struct AgentOutcome {
    deposit: Option<Deposit>,
    respawned: bool,
}

/// All agents of a run plus their species table.
#[derive(Clone, Debug)]
pub struct AgentPopulation<L: Lattice> {
    agents: Vec<Agent<L>>,
    species: SpeciesTable,
    kinematics: Vec<Kinematics>,
}

impl<L: Lattice> AgentPopulation<L> {
    /// Spawn `config.agent_count` agents.
    ///
    /// Agent `i` draws its species, sensor weights, position and heading
    /// (in that order) from `agent_rng(seed, i)`.
    pub fn spawn(
        lattice: &L,
        species: SpeciesTable,
        config: &SimulationConfig,
        seed: u64,
    ) -> Result<Self, InitError> {
        let n = config.agent_count as usize;
        let count = species.len();
        let mut agents = try_with_capacity(n, "agents")?;
        for i in 0..n {
            let mut rng = agent_rng(seed, i as u64);
            let s = match (count, config.species_assignment) {
                (1, _) => 0,
                (_, SpeciesAssignment::Random) => rng.gen_range(0..count),
                (_, SpeciesAssignment::Cyclic) => i % count,
            };
            let weights = SensorWeights::jittered(&mut rng, config.sensor_weight_jitter);
            let (position, heading) = place(lattice, config.spawn_mode, &mut rng);
            agents.push(Agent::new(position, heading, s, count, rng)?.with_sensor_weights(weights));
        }
        Ok(Self::assemble(agents, species))
    }

    /// Wrap pre-built agents, checking each against the species table.
    pub fn from_agents(
        agents: Vec<Agent<L>>,
        species: SpeciesTable,
    ) -> Result<Self, InvariantViolation> {
        for a in &agents {
            if a.species() >= species.len() {
                return Err(InvariantViolation::SpeciesOutOfRange {
                    index: a.species(),
                    species_count: species.len(),
                });
            }
            if a.mask().len() != species.len() {
                return Err(InvariantViolation::MaskLengthMismatch {
                    expected: species.len(),
                    got: a.mask().len(),
                });
            }
        }
        Ok(Self::assemble(agents, species))
    }

    fn assemble(agents: Vec<Agent<L>>, species: SpeciesTable) -> Self {
        let kinematics = species
            .iter()
            .map(|p| Kinematics {
                move_speed: p.move_speed,
                turn_speed: p.turn_speed,
                sensor_angle: p.sensor_angle_radians(),
                sensor_offset: p.sensor_offset,
                window: L::window(p.sensor_size),
            })
            .collect();
        Self {
            agents,
            species,
            kinematics,
        }
    }

    /// Read-only agent records in index order.
    pub fn agents(&self) -> &[Agent<L>] {
        &self.agents
    }

    /// The species table.
    pub fn species(&self) -> &SpeciesTable {
        &self.species
    }

    /// Number of agents.
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    /// Whether the population has no agents.
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// Agents at zero health.
    pub fn starved_count(&self) -> usize {
        self.agents.iter().filter(|a| a.is_starved()).count()
    }

    /// Sense, steer, move, starve and deposit every agent.
    ///
    /// All sensing reads `field` as it was when the pass began. Deposits
    /// are gathered per lane and folded into the field in lane order once
    /// every lane has finished.
    pub fn update(
        &mut self,
        field: &mut TrailField<L>,
        params: &StepParams,
        execution: Execution,
    ) -> Result<PassStats, InvariantViolation> {
        let ctx = LaneContext {
            field: &*field,
            kinematics: &self.kinematics,
            params,
        };
        let lanes: Vec<(Vec<Deposit>, usize)> = match execution {
            Execution::Parallel => self
                .agents
                .par_chunks_mut(LANE_SIZE)
                .map(|lane| run_lane(lane, &ctx))
                .collect(),
            Execution::Serial => self
                .agents
                .chunks_mut(LANE_SIZE)
                .map(|lane| run_lane(lane, &ctx))
                .collect(),
        };

        let mut stats = PassStats::default();
        for (i, (deposits, respawned)) in lanes.iter().enumerate() {
            trace!(lane = i, deposits = deposits.len(), "fold lane");
            field.apply(deposits)?;
            stats.deposit_count += deposits.len();
            stats.respawned += respawned;
        }
        stats.starved = self.starved_count();
        Ok(stats)
    }
}

fn run_lane<L: Lattice>(
    lane: &mut [Agent<L>],
    ctx: &LaneContext<'_, L>,
) -> (Vec<Deposit>, usize) {
    let mut deposits = Vec::with_capacity(lane.len());
    let mut respawned = 0;
    for agent in lane.iter_mut() {
        let outcome = step_agent(agent, ctx);
        deposits.extend(outcome.deposit);
        respawned += usize::from(outcome.respawned);
    }
    (deposits, respawned)
}

fn step_agent<L: Lattice>(agent: &mut Agent<L>, ctx: &LaneContext<'_, L>) -> AgentOutcome {
    let p = ctx.params;
    let k = &ctx.kinematics[agent.species()];
    let lattice = ctx.field.lattice();
    let probe = Probe {
        angle: k.sensor_angle,
        offset: k.sensor_offset,
        window: &k.window,
        filter: p.filter,
    };

    let r = probe.sense(
        ctx.field,
        agent.position,
        agent.heading,
        agent.mask(),
        agent.sensor_weights,
    );
    let turn = k.turn_speed * p.dt;
    let yaw_steer = decide(r.forward, r.left, r.right, &mut agent.rng);
    let turned = agent.heading.turned(yaw_steer * turn);
    agent.heading = if L::NDIM == 3 {
        let pitch_steer = decide(r.forward, r.up, r.down, &mut agent.rng);
        Heading::new(turned.yaw, turned.pitch + pitch_steer * turn)
    } else {
        turned
    };

    let moved = L::offset(agent.position, L::direction(agent.heading), k.move_speed * p.dt);
    agent.position = lattice.wrap_point(moved);

    agent.starve(p.starvation_rate, p.dt);
    let mut respawned = false;
    if let (true, Some(mode)) = (agent.is_starved(), p.respawn) {
        let (position, heading) = place(lattice, mode, &mut agent.rng);
        agent.position = position;
        agent.heading = heading;
        agent.health = 1.0;
        respawned = true;
    }

    let amount = p.trail_weight * agent.health;
    let deposit = (amount != 0.0).then(|| Deposit {
        cell: lattice.cell_of(&agent.position),
        mask: agent.mask(),
        amount,
    });
    AgentOutcome { deposit, respawned }
}

#[cfg(test)]
mod tests {
    use super::*;
    use physarum_core::{Extents, SpeciesParams};
    use physarum_space::Grid2D;

    fn still_species() -> SpeciesTable {
        SpeciesTable::single(SpeciesParams {
            move_speed: 0.0,
            turn_speed: 0.5,
            sensor_angle: 90.0,
            sensor_offset: 5.0,
            sensor_size: 1,
            ..SpeciesParams::default()
        })
        .unwrap()
    }

    fn params(dt: f32) -> StepParams {
        StepParams {
            dt,
            trail_weight: 1.0,
            starvation_rate: 0.0,
            filter: FilterMode::Nearest,
            respawn: None,
        }
    }

    #[test]
    fn spawn_is_deterministic() {
        let g = Grid2D::new(64, 64).unwrap();
        let cfg = SimulationConfig {
            extents: Extents::planar(64, 64),
            agent_count: 300,
            ..SimulationConfig::default()
        };
        let species = SpeciesTable::new(vec![SpeciesParams::default(); 3]).unwrap();
        let a = AgentPopulation::spawn(&g, species.clone(), &cfg, 99).unwrap();
        let b = AgentPopulation::spawn(&g, species, &cfg, 99).unwrap();
        assert_eq!(a.agents(), b.agents());
        assert_eq!(a.len(), 300);
    }

    #[test]
    fn cyclic_assignment_round_robins() {
        let g = Grid2D::new(16, 16).unwrap();
        let cfg = SimulationConfig {
            extents: Extents::planar(16, 16),
            agent_count: 7,
            species_assignment: SpeciesAssignment::Cyclic,
            ..SimulationConfig::default()
        };
        let species = SpeciesTable::new(vec![SpeciesParams::default(); 3]).unwrap();
        let pop = AgentPopulation::spawn(&g, species, &cfg, 1).unwrap();
        let got: Vec<usize> = pop.agents().iter().map(|a| a.species()).collect();
        assert_eq!(got, vec![0, 1, 2, 0, 1, 2, 0]);
    }

    #[test]
    fn foreign_species_rejected() {
        let a = Agent::<Grid2D>::new([0.0; 2], Heading::default(), 1, 2, agent_rng(0, 0)).unwrap();
        let err = AgentPopulation::from_agents(vec![a], still_species()).unwrap_err();
        assert_eq!(
            err,
            InvariantViolation::SpeciesOutOfRange {
                index: 1,
                species_count: 1
            }
        );
    }

    #[test]
    fn steers_left_toward_stronger_trail() {
        let g = Grid2D::new(20, 20).unwrap();
        let mut field = TrailField::new(g.clone(), 1).unwrap();
        field.set(g.rank(15, 10, 0), 0, 1.0);
        field.set(g.rank(10, 15, 0), 0, 10.0);
        field.set(g.rank(10, 5, 0), 0, 1.0);
        let agent = Agent::new([10.0, 10.0], Heading::planar(0.0), 0, 1, agent_rng(0, 0)).unwrap();
        let mut pop = AgentPopulation::from_agents(vec![agent], still_species()).unwrap();
        pop.update(&mut field, &params(1.0), Execution::Serial).unwrap();
        assert_eq!(pop.agents()[0].heading.yaw, 0.5);
    }

    #[test]
    fn starved_agent_respawns_when_enabled() {
        let g = Grid2D::new(10, 10).unwrap();
        let mut field = TrailField::new(g, 1).unwrap();
        let agent = Agent::new([2.0, 2.0], Heading::planar(0.0), 0, 1, agent_rng(0, 0)).unwrap();
        let mut pop = AgentPopulation::from_agents(vec![agent], still_species()).unwrap();
        let p = StepParams {
            starvation_rate: 1.0,
            respawn: Some(SpawnMode::Point),
            ..params(1.0)
        };
        let stats = pop.update(&mut field, &p, Execution::Serial).unwrap();
        assert_eq!(stats.respawned, 1);
        assert_eq!(stats.starved, 0);
        let a = &pop.agents()[0];
        assert_eq!(a.health, 1.0);
        assert_eq!(a.position, [5.0, 5.0]);
        assert_eq!(field.mass(), 1.0);
    }

    #[test]
    fn starved_agent_deposits_nothing() {
        let g = Grid2D::new(10, 10).unwrap();
        let mut field = TrailField::new(g, 1).unwrap();
        let agent = Agent::new([2.0, 2.0], Heading::planar(0.0), 0, 1, agent_rng(0, 0)).unwrap();
        let mut pop = AgentPopulation::from_agents(vec![agent], still_species()).unwrap();
        let p = StepParams {
            starvation_rate: 2.0,
            ..params(1.0)
        };
        let stats = pop.update(&mut field, &p, Execution::Serial).unwrap();
        assert_eq!(stats.deposit_count, 0);
        assert_eq!(stats.starved, 1);
        assert_eq!(field.mass(), 0.0);
    }
}
