//! Deposit records produced by the agent pass.

use physarum_core::SpeciesMask;

/// One agent's contribution to the field for a tick.
///
/// Adds `amount * mask[c]` to channel `c` of `cell`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Deposit {
    /// Flat cell rank.
    pub cell: usize,
    /// Channels receiving the deposit.
    pub mask: SpeciesMask,
    /// Amount added to each routed channel.
    pub amount: f32,
}
