use rand::Rng;

use crate::training_engine::{
    models::{Answer, Difficulty, Question, Topic},
    rounding::{is_integer, round_to, round_to_difficulty},
};

/// Decimal factors offered at easy difficulty.
const EASY_DECIMALS: [f64; 5] = [0.1, 0.2, 0.25, 0.5, 0.75];
/// Decimal factors offered at medium difficulty.
const MEDIUM_DECIMALS: [f64; 7] = [0.1, 0.2, 0.25, 0.33, 0.5, 0.66, 0.75];
/// Easy divisors always divide into a terminating decimal of at most 3 places.
const EASY_DIVISORS: [i64; 4] = [2, 4, 5, 8];

/// Generate a question for one of the seven arithmetic topics.
///
/// Returns `None` for topics outside this family.
pub(crate) fn generate<R: Rng>(rng: &mut R, topic: Topic, difficulty: Difficulty) -> Option<Question> {
    let question = match topic {
        Topic::Addition       => gen_add(rng, difficulty),
        Topic::Subtraction    => gen_sub(rng, difficulty),
        Topic::Multiplication => gen_mul(rng, difficulty),
        Topic::Division       => gen_div(rng, difficulty),
        Topic::Decimals       => gen_decimal(rng, difficulty),
        Topic::Square         => gen_square(rng, difficulty),
        Topic::Cube           => gen_cube(rng, difficulty),
        Topic::Sqrt | Topic::Ln | Topic::Exp | Topic::Inverse | Topic::LogReturn | Topic::Probability => {
            return None
        }
    };
    Some(question)
}

pub fn gen_add<R: Rng>(rng: &mut R, difficulty: Difficulty) -> Question {
    let (lo, hi) = match difficulty {
        Difficulty::Easy   => (20, 200),
        Difficulty::Medium => (100, 900),
        Difficulty::Hard   => (1000, 9999),
    };
    let a = rng.gen_range(lo..=hi);
    let b = rng.gen_range(lo..=hi);
    add(a, b)
}

pub fn add(a: i64, b: i64) -> Question {
    Question {
        topic: Topic::Addition,
        prompt: format!("{a} + {b}"),
        answer: Answer::Integer(a + b),
    }
}

pub fn gen_sub<R: Rng>(rng: &mut R, difficulty: Difficulty) -> Question {
    let (a, b) = match difficulty {
        Difficulty::Easy   => (rng.gen_range(50..=300), rng.gen_range(10..=200)),
        Difficulty::Medium => (rng.gen_range(500..=2000), rng.gen_range(200..=1500)),
        Difficulty::Hard   => (rng.gen_range(2000..=9999), rng.gen_range(500..=9000)),
    };
    sub(a, b)
}

pub fn sub(a: i64, b: i64) -> Question {
    Question {
        topic: Topic::Subtraction,
        prompt: format!("{a} - {b}"),
        answer: Answer::Integer(a - b),
    }
}

pub fn gen_mul<R: Rng>(rng: &mut R, difficulty: Difficulty) -> Question {
    let (a, b) = match difficulty {
        Difficulty::Easy   => (rng.gen_range(10..=80), rng.gen_range(2..=9)),
        Difficulty::Medium => (rng.gen_range(20..=99), rng.gen_range(10..=99)),
        Difficulty::Hard   => (rng.gen_range(100..=999), rng.gen_range(10..=99)),
    };
    mul(a, b)
}

pub fn mul(a: i64, b: i64) -> Question {
    Question {
        topic: Topic::Multiplication,
        prompt: format!("{a} × {b}"),
        answer: Answer::Integer(a * b),
    }
}

pub fn gen_div<R: Rng>(rng: &mut R, difficulty: Difficulty) -> Question {
    let (a, b) = match difficulty {
        Difficulty::Easy => {
            let b = EASY_DIVISORS[rng.gen_range(0..EASY_DIVISORS.len())];
            (b * rng.gen_range(2..=50), b)
        }
        Difficulty::Medium => {
            let b = rng.gen_range(2..=40);
            (rng.gen_range(50..=800), b)
        }
        Difficulty::Hard => {
            let b = rng.gen_range(3..=90);
            (rng.gen_range(100..=4000), b)
        }
    };
    div(a, b, difficulty)
}

/// `a ÷ b`: exact at easy (where `b` divides `a`), rounded to the difficulty
/// depth otherwise.
pub fn div(a: i64, b: i64, difficulty: Difficulty) -> Question {
    let quotient = a as f64 / b as f64;
    let answer = if is_integer(quotient) {
        Answer::Integer(quotient.round() as i64)
    } else {
        match difficulty {
            // b ∈ {2, 4, 5, 8} never needs more than three places
            Difficulty::Easy => Answer::Decimal { value: round_to(quotient, 3), precision: 3 },
            _ => Answer::Decimal {
                value: round_to_difficulty(quotient, difficulty),
                precision: difficulty.decimal_depth(),
            },
        }
    };
    Question {
        topic: Topic::Division,
        prompt: format!("{a} ÷ {b}"),
        answer,
    }
}

pub fn gen_decimal<R: Rng>(rng: &mut R, difficulty: Difficulty) -> Question {
    let (dec, n) = match difficulty {
        Difficulty::Easy => (
            EASY_DECIMALS[rng.gen_range(0..EASY_DECIMALS.len())],
            rng.gen_range(20..=500),
        ),
        Difficulty::Medium => (
            MEDIUM_DECIMALS[rng.gen_range(0..MEDIUM_DECIMALS.len())],
            rng.gen_range(50..=2000),
        ),
        Difficulty::Hard => (
            round_to(rng.gen_range(0.001..=0.9), 3),
            rng.gen_range(200..=20000),
        ),
    };
    decimal(dec, n, difficulty)
}

/// `dec × n`, rounded to the difficulty depth.
pub fn decimal(dec: f64, n: i64, difficulty: Difficulty) -> Question {
    Question {
        topic: Topic::Decimals,
        prompt: format!("{dec} × {n}"),
        answer: Answer::Decimal {
            value: round_to_difficulty(dec * n as f64, difficulty),
            precision: difficulty.decimal_depth(),
        },
    }
}

pub fn gen_square<R: Rng>(rng: &mut R, difficulty: Difficulty) -> Question {
    let n = match difficulty {
        Difficulty::Easy   => rng.gen_range(5..=20),
        Difficulty::Medium => rng.gen_range(20..=50),
        Difficulty::Hard   => rng.gen_range(40..=120),
    };
    square(n)
}

pub fn square(n: i64) -> Question {
    Question {
        topic: Topic::Square,
        prompt: format!("{n}²"),
        answer: Answer::Integer(n * n),
    }
}

pub fn gen_cube<R: Rng>(rng: &mut R, difficulty: Difficulty) -> Question {
    let n = match difficulty {
        Difficulty::Easy   => rng.gen_range(2..=6),
        Difficulty::Medium => rng.gen_range(5..=12),
        Difficulty::Hard   => rng.gen_range(8..=20),
    };
    cube(n)
}

pub fn cube(n: i64) -> Question {
    Question {
        topic: Topic::Cube,
        prompt: format!("{n}³"),
        answer: Answer::Integer(n * n * n),
    }
}
