//! Rounding and integer classification shared by generators and distractors.

use crate::training_engine::models::Difficulty;

/// Values closer than this to a whole number count as integers.
pub const INTEGER_EPSILON: f64 = 1e-9;

/// Round `value` to `places` decimal places, half away from zero.
///
/// Negative zero is normalised to `0.0` so it prints as `0`.
pub fn round_to(value: f64, places: u32) -> f64 {
    let scale = 10f64.powi(places as i32);
    let rounded = (value * scale).round() / scale;
    if rounded == 0.0 { 0.0 } else { rounded }
}

/// Round to 1, 2 or 3 decimal places for easy, medium and hard.
pub fn round_to_difficulty(value: f64, difficulty: Difficulty) -> f64 {
    round_to(value, difficulty.decimal_depth())
}

/// True when `x` is within [`INTEGER_EPSILON`] of a whole number.
///
/// Division uses this to tag an exact quotient as [`Answer::Integer`].
///
/// [`Answer::Integer`]: crate::training_engine::models::Answer::Integer
pub fn is_integer(x: f64) -> bool {
    (x - x.round()).abs() < INTEGER_EPSILON
}

/// Integer key of `value` at `places` decimals, used to deduplicate options.
pub(crate) fn scaled_key(value: f64, places: u32) -> i64 {
    (value * 10f64.powi(places as i32)).round() as i64
}
