//! The steering decision.

use rand::Rng;

/// Pick a turn direction from three weighted readings.
///
/// Returns `0.0` when the forward reading is strictly greatest or all
/// three are equal, `+1.0` (left) when left beats right, `-1.0` when
/// right beats left, and a coin flip from `rng` when left and right tie
/// above forward. The rng is only drawn from on a tie.
pub fn decide<R: Rng>(forward: f32, left: f32, right: f32, rng: &mut R) -> f32 {
    if forward > left && forward > right {
        return 0.0;
    }
    if forward == left && left == right {
        return 0.0;
    }
    if left > right {
        1.0
    } else if right > left {
        -1.0
    } else if rng.gen_bool(0.5) {
        1.0
    } else {
        -1.0
    }
}
