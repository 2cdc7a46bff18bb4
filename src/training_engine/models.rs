use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::UnknownDifficulty;

/// Absolute tolerance used when comparing a chosen option to the correct answer.
pub const OPTION_TOLERANCE: f64 = 1e-9;

// ---------------------------------------------------------------------------
// Difficulty
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Decimal places used for rounding answers and decimal distractors.
    pub fn decimal_depth(self) -> u32 {
        match self {
            Difficulty::Easy   => 1,
            Difficulty::Medium => 2,
            Difficulty::Hard   => 3,
        }
    }

    /// Absolute tolerance accepted for a free-form square-root estimate.
    pub fn sqrt_tolerance(self) -> f64 {
        match self {
            Difficulty::Easy   => 0.05,
            Difficulty::Medium => 0.03,
            Difficulty::Hard   => 0.02,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy   => write!(f, "easy"),
            Difficulty::Medium => write!(f, "medium"),
            Difficulty::Hard   => write!(f, "hard"),
        }
    }
}

impl FromStr for Difficulty {
    type Err = UnknownDifficulty;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy"   => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard"   => Ok(Difficulty::Hard),
            _        => Err(UnknownDifficulty(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Answers
// ---------------------------------------------------------------------------

/// The correct answer to a question, tagged by how it is displayed and checked.
///
/// The generator picks the variant, so a decimal result that happens to land
/// on a whole number (e.g. `0.5 × 40`) still gets decimal distractors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Answer {
    Integer(i64),
    /// A value already rounded to `precision` decimal places.
    Decimal { value: f64, precision: u32 },
    /// A true value accepted within an absolute `tolerance` (free answer only).
    Approximate { value: f64, tolerance: f64 },
}

impl Answer {
    pub fn value(&self) -> f64 {
        match *self {
            Answer::Integer(n) => n as f64,
            Answer::Decimal { value, .. } => value,
            Answer::Approximate { value, .. } => value,
        }
    }

    /// True when `guess` is close enough to count as correct for this answer.
    ///
    /// `Approximate` answers use their own tolerance; the others use
    /// `exact_tolerance`.
    pub fn accepts(&self, guess: f64, exact_tolerance: f64) -> bool {
        match *self {
            Answer::Approximate { value, tolerance } => (guess - value).abs() <= tolerance,
            _ => (guess - self.value()).abs() < exact_tolerance,
        }
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Answer::Integer(n) => write!(f, "{}", n),
            Answer::Decimal { value, .. } => write!(f, "{}", value),
            Answer::Approximate { value, .. } => write!(f, "{}", value),
        }
    }
}

// ---------------------------------------------------------------------------
// Topics
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Topic {
    Addition,
    Subtraction,
    Multiplication,
    Division,
    Decimals,
    Square,
    Cube,
    Sqrt,
    Ln,
    Exp,
    Inverse,
    LogReturn,
    Probability,
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Topic::Addition       => "addition",
            Topic::Subtraction    => "subtraction",
            Topic::Multiplication => "multiplication",
            Topic::Division       => "division",
            Topic::Decimals       => "decimals",
            Topic::Square         => "square",
            Topic::Cube           => "cube",
            Topic::Sqrt           => "sqrt",
            Topic::Ln             => "ln",
            Topic::Exp            => "exp",
            Topic::Inverse        => "inverse",
            Topic::LogReturn      => "logret",
            Topic::Probability    => "probability",
        };
        write!(f, "{}", s)
    }
}

/// A group of topics a session draws from uniformly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TopicPool {
    Arithmetic,
    Approximation,
    Probability,
}

impl TopicPool {
    pub fn topics(self) -> &'static [Topic] {
        match self {
            TopicPool::Arithmetic => &[
                Topic::Addition,
                Topic::Subtraction,
                Topic::Multiplication,
                Topic::Division,
                Topic::Decimals,
                Topic::Square,
                Topic::Cube,
            ],
            TopicPool::Approximation => &[
                Topic::Sqrt,
                Topic::Ln,
                Topic::Exp,
                Topic::Inverse,
                Topic::LogReturn,
            ],
            TopicPool::Probability => &[Topic::Probability],
        }
    }

    pub fn pick<R: Rng>(self, rng: &mut R) -> Topic {
        let topics = self.topics();
        topics[rng.gen_range(0..topics.len())]
    }
}

/// Either a concrete topic or a pool to draw one from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TopicSelector {
    Topic(Topic),
    Pool(TopicPool),
}

impl TopicSelector {
    pub fn resolve<R: Rng>(self, rng: &mut R) -> Topic {
        match self {
            TopicSelector::Topic(t) => t,
            TopicSelector::Pool(p) => p.pick(rng),
        }
    }
}

impl From<Topic> for TopicSelector {
    fn from(t: Topic) -> Self {
        TopicSelector::Topic(t)
    }
}

impl From<TopicPool> for TopicSelector {
    fn from(p: TopicPool) -> Self {
        TopicSelector::Pool(p)
    }
}

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionRequest {
    pub topic: TopicSelector,
    pub difficulty: Difficulty,
    pub rng_seed: Option<u64>,
}

impl QuestionRequest {
    /// Easy difficulty, entropy-seeded.
    pub fn new(topic: impl Into<TopicSelector>) -> Self {
        QuestionRequest {
            topic: topic.into(),
            difficulty: Difficulty::Easy,
            rng_seed: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub topic: Topic,
    pub prompt: String,
    pub answer: Answer,
}

/// Four multiple-choice options, exactly one of which is the correct answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionSet {
    pub(crate) options: Vec<Answer>,
}

impl OptionSet {
    pub fn options(&self) -> &[Answer] {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Zero-based position of the option matching `correct`, if any.
    pub fn correct_index(&self, correct: &Answer) -> Option<usize> {
        self.options
            .iter()
            .position(|o| (o.value() - correct.value()).abs() < OPTION_TOLERANCE)
    }

    /// Check a one-based choice (as typed by the user) against `correct`.
    pub fn is_correct(&self, choice: usize, correct: &Answer) -> bool {
        choice
            .checked_sub(1)
            .and_then(|i| self.options.get(i))
            .map(|o| (o.value() - correct.value()).abs() < OPTION_TOLERANCE)
            .unwrap_or(false)
    }
}
