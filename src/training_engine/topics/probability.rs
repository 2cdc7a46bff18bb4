use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::training_engine::{
    models::{Answer, Question, Topic},
    rounding::round_to,
};

/// Probability answers are shown to four places at every difficulty.
pub const PROBABILITY_PRECISION: u32 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProbabilityKind {
    Coin,
    Urn,
    Interval,
    Conditional,
}

impl ProbabilityKind {
    pub const ALL: [ProbabilityKind; 4] = [
        ProbabilityKind::Coin,
        ProbabilityKind::Urn,
        ProbabilityKind::Interval,
        ProbabilityKind::Conditional,
    ];
}

fn answer(p: f64) -> Answer {
    Answer::Decimal {
        value: round_to(p, PROBABILITY_PRECISION),
        precision: PROBABILITY_PRECISION,
    }
}

/// Pick one of the four kinds uniformly and generate it.
///
/// Difficulty plays no part here; it only shapes the multiple-choice options.
pub fn generate<R: Rng>(rng: &mut R) -> Question {
    let kind = ProbabilityKind::ALL[rng.gen_range(0..ProbabilityKind::ALL.len())];
    generate_kind(rng, kind)
}

pub fn generate_kind<R: Rng>(rng: &mut R, kind: ProbabilityKind) -> Question {
    match kind {
        ProbabilityKind::Coin => {
            let n = rng.gen_range(3..=10);
            let k = rng.gen_range(0..=n);
            coin(n, k)
        }
        ProbabilityKind::Urn => urn(rng.gen_range(3..=15), rng.gen_range(3..=15)),
        ProbabilityKind::Interval => {
            let a: f64 = rng.gen();
            let b: f64 = rng.gen();
            interval(a, b)
        }
        ProbabilityKind::Conditional => conditional(rng.gen_range(1..=9), rng.gen_range(1..=9)),
    }
}

/// The prompt names `k`, but the answer is the chance of one particular
/// sequence of `n` flips, `0.5^n`, whatever `k` is.
pub fn coin(n: u32, k: u32) -> Question {
    Question {
        topic: Topic::Probability,
        prompt: format!("Prob(exactly {k} heads in {n} fair flips)?"),
        answer: answer(0.5f64.powi(n as i32)),
    }
}

pub fn urn(red: u32, blue: u32) -> Question {
    Question {
        topic: Topic::Probability,
        prompt: format!("Urn with {red} red + {blue} blue. Prob(red)?"),
        answer: answer(f64::from(red) / f64::from(red + blue)),
    }
}

/// `P(lo < X < hi)` for `X ~ U(0,1)`; endpoints are printed to two places
/// but the answer uses the unrounded draws.
pub fn interval(a: f64, b: f64) -> Question {
    let (lo, hi) = (a.min(b), a.max(b));
    Question {
        topic: Topic::Probability,
        prompt: format!("X~U(0,1). Prob({lo:.2} < X < {hi:.2})?"),
        answer: answer(hi - lo),
    }
}

pub fn conditional(a: u32, b: u32) -> Question {
    Question {
        topic: Topic::Probability,
        prompt: format!("Approximate P(A|A or B), with A,B indep and weights {a},{b}"),
        answer: answer(f64::from(a) / f64::from(a + b)),
    }
}
