//! # mental_math_drill
//!
//! An offline, seedable mental-math trainer for quant-interview practice.
//!
//! The library generates arithmetic, approximation and probability questions
//! at three difficulty tiers, builds four-option multiple-choice sets with
//! plausible wrong answers, and runs terminal quiz sessions that score
//! replies and print summaries.
//!
//! ## How it works
//!
//! 1. Create a [`QuestionRequest`] with a topic (or topic pool), difficulty and
//!    optional RNG seed.
//! 2. Call [`generate_question`]: the engine draws operands from the
//!    difficulty's band and computes the expected answer, tagged as an
//!    integer, a rounded decimal, or a tolerance-checked estimate.
//! 3. Call [`generate_options`] to get an [`OptionSet`] of four unique values,
//!    exactly one of which is correct, in shuffled order.
//!
//! The [`session`] runners and [`menu::run_menu`] wire this engine to any
//! `BufRead`/`Write` pair; the binary uses stdin/stdout.
//!
//! ## Quick start
//!
//! ```rust
//! use mental_math_drill::{
//!     generate_options, generate_question, Difficulty, QuestionRequest, Topic, TopicPool,
//! };
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! // Minimal: only the topic is required (defaults: easy, entropy).
//! let q = generate_question(QuestionRequest::new(Topic::Addition));
//! println!("Q: {} = {}", q.prompt, q.answer);
//!
//! // Seeded, from a pool, with multiple-choice options:
//! let q = generate_question(QuestionRequest {
//!     topic: TopicPool::Approximation.into(),
//!     difficulty: Difficulty::Hard,
//!     rng_seed: Some(42),
//! });
//! let mut rng = StdRng::seed_from_u64(42);
//! let options = generate_options(&mut rng, &q.answer, Difficulty::Hard);
//! for (i, o) in options.options().iter().enumerate() {
//!     println!("{}) {o}", i + 1);
//! }
//! ```

pub mod config;
pub mod error;
pub mod menu;
pub mod session;
pub mod training_engine;

// Convenience re-exports so callers can use `mental_math_drill::generate_question`
// directly without reaching into `training_engine::`.
pub use config::{DrillConfig, TrainerConfig};
pub use error::TrainerError;
pub use training_engine::{
    generate_for, generate_options, generate_question, is_integer, round_to_difficulty, Answer,
    Difficulty, OptionSet, Question, QuestionRequest, Topic, TopicPool, TopicSelector,
};
