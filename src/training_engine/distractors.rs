//! Multiple-choice option builder.
//!
//! Wrong options are sampled near the correct answer until four distinct
//! values exist, then the set is shuffled so the correct answer's position
//! is unpredictable.
//!
//! ## Integer answers
//!
//! Deltas are uniform integers in `[-m, m]` (zero rejected) with
//! `m = max(5, |correct| / 5)`.
//!
//! ## Decimal answers
//!
//! Noise is uniform in `[-spread/2, spread/2]` with
//! `spread = |correct| * 0.15 + 0.1`; each candidate is rounded to the option
//! depth, which is the finer of the difficulty depth and the answer's own
//! precision. Candidates are keyed by their scaled integer value, so `-0.0`
//! and `0.0` are one option.
//!
//! Sampling stops after [`MAX_DRAWS`] draws. A small spread at a coarse depth
//! (e.g. `0.1` at one decimal place) cannot produce four distinct values, so
//! any shortfall is filled by stepping outward one unit at a time. When the
//! noise window reaches fewer than four keys, sampling is skipped entirely.
//! At easy difficulty that is the common case, so the fallback logs at
//! `debug` only.

use std::collections::{BTreeMap, BTreeSet};

use rand::Rng;

use crate::training_engine::{
    models::{Answer, Difficulty, OptionSet},
    rounding::{round_to, scaled_key},
    shuffle::shuffle,
};

pub const OPTION_COUNT: usize = 4;
pub const MAX_DRAWS: usize = 10_000;

/// Build four unique options, one of which is `correct`, in random order.
///
/// `Approximate` answers are treated as decimals at the difficulty depth;
/// they are normally checked as free answers instead.
pub fn generate_options<R: Rng>(rng: &mut R, correct: &Answer, difficulty: Difficulty) -> OptionSet {
    let mut options = match *correct {
        Answer::Integer(n) => integer_options(rng, n),
        Answer::Decimal { value, precision } => {
            decimal_options(rng, value, difficulty.decimal_depth().max(precision))
        }
        Answer::Approximate { value, .. } => decimal_options(rng, value, difficulty.decimal_depth()),
    };
    shuffle(&mut options, rng);
    OptionSet { options }
}

fn integer_options<R: Rng>(rng: &mut R, correct: i64) -> Vec<Answer> {
    let magnitude = (correct.abs() / 5).max(5);
    let mut set = BTreeSet::from([correct]);

    let mut draws = 0;
    while set.len() < OPTION_COUNT && draws < MAX_DRAWS {
        draws += 1;
        let delta = rng.gen_range(-magnitude..=magnitude);
        if delta == 0 {
            continue;
        }
        set.insert(correct + delta);
    }

    if set.len() < OPTION_COUNT {
        tracing::debug!(correct, draws, "integer distractor sampling fell short, stepping outward");
        let mut step = 1;
        while set.len() < OPTION_COUNT {
            set.insert(correct + step);
            if set.len() < OPTION_COUNT {
                set.insert(correct - step);
            }
            step += 1;
        }
    }

    set.into_iter().map(Answer::Integer).collect()
}

fn decimal_options<R: Rng>(rng: &mut R, correct: f64, depth: u32) -> Vec<Answer> {
    let scale = 10f64.powi(depth as i32);
    let seed_key = scaled_key(correct, depth);
    let spread = correct.abs() * 0.15 + 0.1;
    let half = spread / 2.0;

    let mut keys = BTreeMap::new();
    keys.insert(seed_key, round_to(correct, depth));

    let budget = if reachable_keys(correct, half, depth) < OPTION_COUNT as i64 { 0 } else { MAX_DRAWS };
    let mut draws = 0;
    while keys.len() < OPTION_COUNT && draws < budget {
        draws += 1;
        let noise = rng.gen_range(-half..=half);
        let candidate = round_to(correct + noise, depth);
        keys.entry(scaled_key(candidate, depth)).or_insert(candidate);
    }

    if keys.len() < OPTION_COUNT {
        tracing::debug!(correct, depth, draws, "decimal distractor sampling fell short, stepping outward");
        let mut step = 1;
        while keys.len() < OPTION_COUNT {
            for key in [seed_key + step, seed_key - step] {
                if keys.len() < OPTION_COUNT {
                    keys.entry(key).or_insert_with(|| round_to(key as f64 / scale, depth));
                }
            }
            step += 1;
        }
    }

    keys.into_values()
        .map(|value| Answer::Decimal { value, precision: depth })
        .collect()
}

/// Number of scaled keys a candidate in `(correct - half, correct + half)`
/// can round to at `depth`.
fn reachable_keys(correct: f64, half: f64, depth: u32) -> i64 {
    let scale = 10f64.powi(depth as i32);
    let lo = (correct - half) * scale;
    let hi = (correct + half) * scale;
    ((hi + 0.5).ceil() - (lo - 0.5).floor()) as i64 - 1
}
