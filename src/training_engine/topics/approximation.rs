//! Mental-approximation questions.
//!
//! Apart from `sqrt`, the expected answer is the output of a truncated series
//! (first, second or third order by difficulty), not the true function value.
//! `ln` uses three terms at hard while `logret` uses the exact logarithm.

use rand::Rng;

use crate::training_engine::{
    models::{Answer, Difficulty, Question, Topic},
    rounding::{round_to, round_to_difficulty},
};

/// Returns `None` for topics outside this family.
pub(crate) fn generate<R: Rng>(rng: &mut R, topic: Topic, difficulty: Difficulty) -> Option<Question> {
    let question = match topic {
        Topic::Sqrt      => gen_sqrt(rng, difficulty),
        Topic::Ln        => gen_ln(rng, difficulty),
        Topic::Exp       => gen_exp(rng, difficulty),
        Topic::Inverse   => gen_inv(rng, difficulty),
        Topic::LogReturn => gen_logret(rng, difficulty),
        Topic::Addition
        | Topic::Subtraction
        | Topic::Multiplication
        | Topic::Division
        | Topic::Decimals
        | Topic::Square
        | Topic::Cube
        | Topic::Probability => return None,
    };
    Some(question)
}

/// Uniform draw from `(lo, hi)` rounded to three places, as shown in prompts.
fn operand<R: Rng>(rng: &mut R, lo: f64, hi: f64) -> f64 {
    round_to(rng.gen_range(lo..hi), 3)
}

fn rounded(approx: f64, difficulty: Difficulty) -> Answer {
    Answer::Decimal {
        value: round_to_difficulty(approx, difficulty),
        precision: difficulty.decimal_depth(),
    }
}

pub fn gen_sqrt<R: Rng>(rng: &mut R, difficulty: Difficulty) -> Question {
    let x = match difficulty {
        Difficulty::Easy   => rng.gen_range(5..=200),
        Difficulty::Medium => rng.gen_range(100..=500),
        Difficulty::Hard   => rng.gen_range(300..=2000),
    };
    sqrt(x, difficulty)
}

pub fn sqrt(x: u32, difficulty: Difficulty) -> Question {
    let tolerance = difficulty.sqrt_tolerance();
    Question {
        topic: Topic::Sqrt,
        prompt: format!("Approximate √{x} (±{tolerance})"),
        answer: Answer::Approximate { value: f64::from(x).sqrt(), tolerance },
    }
}

pub fn gen_ln<R: Rng>(rng: &mut R, difficulty: Difficulty) -> Question {
    ln(operand(rng, 0.01, 0.5), difficulty)
}

pub fn ln(x: f64, difficulty: Difficulty) -> Question {
    let approx = match difficulty {
        Difficulty::Easy   => x,
        Difficulty::Medium => x - x.powi(2) / 2.0,
        Difficulty::Hard   => x - x.powi(2) / 2.0 + x.powi(3) / 3.0,
    };
    Question {
        topic: Topic::Ln,
        prompt: format!("Approximate ln(1 + {x})"),
        answer: rounded(approx, difficulty),
    }
}

pub fn gen_exp<R: Rng>(rng: &mut R, difficulty: Difficulty) -> Question {
    exp(operand(rng, -0.4, 0.4), difficulty)
}

pub fn exp(x: f64, difficulty: Difficulty) -> Question {
    let approx = match difficulty {
        Difficulty::Easy   => 1.0 + x,
        Difficulty::Medium => 1.0 + x + x.powi(2) / 2.0,
        Difficulty::Hard   => 1.0 + x + x.powi(2) / 2.0 + x.powi(3) / 6.0,
    };
    Question {
        topic: Topic::Exp,
        prompt: format!("Approximate e^{x}"),
        answer: rounded(approx, difficulty),
    }
}

pub fn gen_inv<R: Rng>(rng: &mut R, difficulty: Difficulty) -> Question {
    inverse(operand(rng, 0.05, 1.0), difficulty)
}

pub fn inverse(x: f64, difficulty: Difficulty) -> Question {
    let approx = match difficulty {
        Difficulty::Easy   => 1.0 - x,
        Difficulty::Medium => 1.0 - x + x.powi(2),
        Difficulty::Hard   => 1.0 / (1.0 + x),
    };
    Question {
        topic: Topic::Inverse,
        prompt: format!("Approximate 1/(1 + {x})"),
        answer: rounded(approx, difficulty),
    }
}

pub fn gen_logret<R: Rng>(rng: &mut R, difficulty: Difficulty) -> Question {
    logret(operand(rng, -0.2, 0.2), difficulty)
}

pub fn logret(r: f64, difficulty: Difficulty) -> Question {
    let approx = match difficulty {
        Difficulty::Easy   => r,
        Difficulty::Medium => r - r.powi(2) / 2.0,
        Difficulty::Hard   => r.ln_1p(),
    };
    Question {
        topic: Topic::LogReturn,
        prompt: format!("Approximate ln(1 + {r})"),
        answer: rounded(approx, difficulty),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn value(q: &Question) -> f64 {
        q.answer.value()
    }

    #[test]
    fn sqrt_is_claimed_and_arithmetic_is_not() {
        let mut rng = StdRng::seed_from_u64(13);
        assert_eq!(generate(&mut rng, Topic::Sqrt, Difficulty::Easy).map(|q| q.topic), Some(Topic::Sqrt));
        for topic in [Topic::Addition, Topic::Cube, Topic::Probability] {
            assert!(generate(&mut rng, topic, Difficulty::Easy).is_none(), "{topic}");
        }
    }

    #[test]
    fn ln_hard_uses_three_terms() {
        // 0.2 - 0.02 + 0.008/3 = 0.18267
        let q = ln(0.2, Difficulty::Hard);
        assert_eq!(q.prompt, "Approximate ln(1 + 0.2)");
        assert_eq!(q.answer, Answer::Decimal { value: 0.183, precision: 3 });
    }

    #[test]
    fn ln_lower_tiers_truncate_earlier() {
        assert_eq!(value(&ln(0.2, Difficulty::Easy)), 0.2);
        assert_eq!(value(&ln(0.2, Difficulty::Medium)), 0.18);
    }

    #[test]
    fn logret_hard_is_exact_but_ln_hard_is_not() {
        // ln(1.25) = 0.22314; the three-term series gives 0.25 - 0.03125 + 0.00521 = 0.22396
        assert_eq!(value(&logret(0.25, Difficulty::Hard)), 0.223);
        assert_eq!(value(&ln(0.25, Difficulty::Hard)), 0.224);
    }

    #[test]
    fn logret_lower_tiers() {
        assert_eq!(value(&logret(-0.1, Difficulty::Easy)), -0.1);
        // -0.12 - 0.0072 = -0.1272
        assert_eq!(value(&logret(-0.12, Difficulty::Medium)), -0.13);
    }

    #[test]
    fn exp_series_by_tier() {
        assert_eq!(value(&exp(0.3, Difficulty::Easy)), 1.3);
        assert_eq!(value(&exp(0.2, Difficulty::Medium)), 1.22);
        // 1 + 0.2 + 0.02 + 0.00133
        assert_eq!(value(&exp(0.2, Difficulty::Hard)), 1.221);
        assert_eq!(value(&exp(-0.2, Difficulty::Hard)), 0.819);
        assert_eq!(exp(-0.2, Difficulty::Hard).prompt, "Approximate e^-0.2");
    }

    #[test]
    fn inverse_series_by_tier() {
        assert_eq!(value(&inverse(0.5, Difficulty::Easy)), 0.5);
        assert_eq!(value(&inverse(0.5, Difficulty::Medium)), 0.75);
        assert_eq!(value(&inverse(0.5, Difficulty::Hard)), 0.667);
    }

    #[test]
    fn sqrt_is_unrounded_with_tiered_tolerance() {
        let q = sqrt(50, Difficulty::Medium);
        assert_eq!(q.prompt, "Approximate √50 (±0.03)");
        assert_eq!(q.answer, Answer::Approximate { value: 50f64.sqrt(), tolerance: 0.03 });
        assert!(q.answer.accepts(7.1, 1e-9));
        assert!(!q.answer.accepts(7.0, 1e-9));
    }

    #[test]
    fn sqrt_operands_stay_in_band() {
        let mut rng = StdRng::seed_from_u64(10);
        for (d, lo, hi) in [
            (Difficulty::Easy, 5, 200),
            (Difficulty::Medium, 100, 500),
            (Difficulty::Hard, 300, 2000),
        ] {
            for _ in 0..100 {
                let q = gen_sqrt(&mut rng, d);
                let x: u32 = q
                    .prompt
                    .trim_start_matches("Approximate √")
                    .split_once(' ')
                    .unwrap()
                    .0
                    .parse()
                    .unwrap();
                assert!((lo..=hi).contains(&x));
            }
        }
    }

    #[test]
    fn generated_answers_carry_difficulty_precision() {
        let mut rng = StdRng::seed_from_u64(12);
        for topic in [Topic::Ln, Topic::Exp, Topic::Inverse, Topic::LogReturn] {
            for d in Difficulty::ALL {
                let q = generate(&mut rng, topic, d).unwrap();
                assert_eq!(q.topic, topic);
                match q.answer {
                    Answer::Decimal { value, precision } => {
                        assert_eq!(precision, d.decimal_depth());
                        assert_eq!(value, round_to(value, precision));
                    }
                    other => panic!("{topic} produced {other:?}"),
                }
            }
        }
    }
}
