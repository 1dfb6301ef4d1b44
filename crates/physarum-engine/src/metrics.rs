//! Per-tick metrics.

/// Timing and population counters for a single tick.
///
/// Durations are in microseconds.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TickMetrics {
    /// Wall-clock time for the whole tick.
    pub total_us: u64,
    /// Time spent sensing, steering, moving and folding deposits.
    pub agent_pass_us: u64,
    /// Time spent in diffusion and swap.
    pub diffusion_us: u64,
    /// Non-zero deposits folded into the field.
    pub deposit_count: usize,
    /// Agents at zero health after the tick.
    pub starved_agents: usize,
    /// Agents respawned during the tick.
    pub respawned_agents: usize,
    /// Sum of every trail value after the tick.
    pub field_mass: f64,
}
