//! Core training engine: question generation and answer validation.
//!
//! ## Module overview
//!
//! | Module        | Purpose |
//! |---------------|---------|
//! | `models`      | Shared types: difficulty, answers, topics, questions, option sets |
//! | `rounding`    | Difficulty rounding and integer classification |
//! | `shuffle`     | Uniform Fisher-Yates shuffle |
//! | `distractors` | Four-option multiple-choice builder |
//! | `generator`   | `generate_question()` / `generate_for()` dispatch to topics |
//! | `topics`      | Arithmetic, approximation and probability generators |

pub mod distractors;
pub mod generator;
pub mod models;
pub mod rounding;
pub mod shuffle;
pub mod topics;

pub use distractors::generate_options;
pub use generator::{generate_for, generate_question};
pub use models::{
    Answer, Difficulty, OptionSet, Question, QuestionRequest, Topic, TopicPool, TopicSelector,
    OPTION_TOLERANCE,
};
pub use rounding::{is_integer, round_to_difficulty};
