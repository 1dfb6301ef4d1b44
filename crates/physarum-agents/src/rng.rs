//! Per-agent random streams.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// The stream for agent `index` in a run seeded with `seed`.
///
/// Streams never overlap, so agents draw independently of update order.
pub fn agent_rng(seed: u64, index: u64) -> ChaCha8Rng {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    rng.set_stream(index);
    rng
}
