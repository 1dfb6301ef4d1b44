//! Agent records.

use physarum_core::{InvariantViolation, SpeciesMask};
use physarum_space::{Heading, Lattice};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

/// Health below this snaps to zero.
pub const STARVATION_EPSILON: f32 = 1e-5;

/// Per-sensor multipliers applied to readings before the steering decision.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SensorWeights {
    /// Forward probe weight.
    pub forward: f32,
    /// Left (counter-clockwise) probe weight; also scales the up probe.
    pub left: f32,
    /// Right probe weight; also scales the down probe.
    pub right: f32,
}

impl SensorWeights {
    /// All weights 1.0.
    pub const UNIT: Self = Self {
        forward: 1.0,
        left: 1.0,
        right: 1.0,
    };

    /// `1 + U(-jitter, jitter)` per sensor. A zero jitter yields [`UNIT`](Self::UNIT).
    pub fn jittered<R: Rng>(rng: &mut R, jitter: f32) -> Self {
        if jitter <= 0.0 {
            return Self::UNIT;
        }
        let mut draw = || 1.0 + rng.gen_range(-jitter..jitter);
        Self {
            forward: draw(),
            left: draw(),
            right: draw(),
        }
    }
}

impl Default for SensorWeights {
    fn default() -> Self {
        Self::UNIT
    }
}

/// One agent.
///
/// Mutated only by its own update; no agent reads another's record.
#[derive(Clone, Debug)]
pub struct Agent<L: Lattice> {
    /// Position, inside `[0, extent)` on every axis.
    pub position: L::Point,
    /// Direction of travel.
    pub heading: Heading,
    /// Steering bias.
    pub sensor_weights: SensorWeights,
    /// In `[0, 1]`; 0 means starved.
    pub health: f32,
    species: usize,
    mask: SpeciesMask,
    pub(crate) rng: ChaCha8Rng,
}

impl<L: Lattice> Agent<L> {
    /// Create a full-health agent of `species` on a field with
    /// `species_count` channels.
    ///
    /// # Errors
    ///
    /// [`InvariantViolation::SpeciesOutOfRange`] if `species` is not a
    /// valid index.
    pub fn new(
        position: L::Point,
        heading: Heading,
        species: usize,
        species_count: usize,
        rng: ChaCha8Rng,
    ) -> Result<Self, InvariantViolation> {
        let mask = SpeciesMask::for_species(species, species_count)?;
        Ok(Self {
            position,
            heading,
            sensor_weights: SensorWeights::UNIT,
            health: 1.0,
            species,
            mask,
            rng,
        })
    }

    /// Replace the sensor weights.
    pub fn with_sensor_weights(mut self, weights: SensorWeights) -> Self {
        self.sensor_weights = weights;
        self
    }

    /// Index into the species table.
    pub fn species(&self) -> usize {
        self.species
    }

    /// Channels this agent senses and deposits into.
    pub fn mask(&self) -> SpeciesMask {
        self.mask
    }

    /// Whether health has reached zero.
    pub fn is_starved(&self) -> bool {
        self.health <= 0.0
    }

    /// Lose `rate * dt` health, flooring at zero.
    pub fn starve(&mut self, rate: f32, dt: f32) {
        let h = (self.health - rate * dt).max(0.0);
        self.health = if h < STARVATION_EPSILON { 0.0 } else { h };
    }
}

impl<L: Lattice> PartialEq for Agent<L> {
    fn eq(&self, other: &Self) -> bool {
        self.position == other.position
            && self.heading == other.heading
            && self.sensor_weights == other.sensor_weights
            && self.health == other.health
            && self.species == other.species
            && self.mask == other.mask
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::agent_rng;
    use physarum_space::Grid2D;

    fn agent() -> Agent<Grid2D> {
        Agent::new([1.0, 2.0], Heading::planar(0.0), 0, 1, agent_rng(0, 0)).unwrap()
    }

    #[test]
    fn starts_healthy_with_unit_weights() {
        let a = agent();
        assert_eq!(a.health, 1.0);
        assert_eq!(a.sensor_weights, SensorWeights::UNIT);
        assert_eq!(a.mask(), SpeciesMask::all(1));
    }

    #[test]
    fn species_out_of_range_fails_at_creation() {
        let r = Agent::<Grid2D>::new([0.0; 2], Heading::default(), 3, 3, agent_rng(0, 0));
        assert_eq!(
            r.unwrap_err(),
            InvariantViolation::SpeciesOutOfRange {
                index: 3,
                species_count: 3
            }
        );
    }

    #[test]
    fn starvation_reaches_zero_on_fifth_tick() {
        let mut a = agent();
        for tick in 1..=5 {
            a.starve(0.2, 1.0);
            if tick < 5 {
                assert!(a.health > 0.0, "starved early at tick {tick}");
            }
        }
        assert_eq!(a.health, 0.0);
        a.starve(0.2, 1.0);
        assert_eq!(a.health, 0.0);
        assert!(a.is_starved());
    }

    #[test]
    fn jitter_stays_in_range() {
        let mut rng = agent_rng(1, 1);
        for _ in 0..100 {
            let w = SensorWeights::jittered(&mut rng, 0.5);
            for v in [w.forward, w.left, w.right] {
                assert!((0.5..1.5).contains(&v), "{v}");
            }
        }
        assert_eq!(SensorWeights::jittered(&mut rng, 0.0), SensorWeights::UNIT);
    }
}
