use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::training_engine::{models::Difficulty, rounding::round_to};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuizMode {
    Classic,
    TimedDrill,
    Approximation,
    Probability,
}

impl fmt::Display for QuizMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuizMode::Classic       => write!(f, "Classic++ arithmetic"),
            QuizMode::TimedDrill    => write!(f, "80-in-8 quant drill"),
            QuizMode::Approximation => write!(f, "Approximation mode"),
            QuizMode::Probability   => write!(f, "Probability mode"),
        }
    }
}

/// Running score for one mode invocation.
#[derive(Debug, Clone)]
pub struct SessionState {
    mode: QuizMode,
    difficulty: Difficulty,
    score: usize,
    attempted: usize,
    planned: Option<usize>,
    started: Duration,
}

impl SessionState {
    pub fn start(mode: QuizMode, difficulty: Difficulty, now: Duration) -> Self {
        tracing::info!(%mode, %difficulty, "session started");
        SessionState { mode, difficulty, score: 0, attempted: 0, planned: None, started: now }
    }

    /// Report the score over `count` requested questions, even if the session
    /// ends early. Without this the total is the number attempted.
    pub fn with_planned(mut self, count: usize) -> Self {
        self.planned = Some(count);
        self
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn attempted(&self) -> usize {
        self.attempted
    }

    pub fn elapsed(&self, now: Duration) -> Duration {
        now.saturating_sub(self.started)
    }

    pub fn record(&mut self, correct: bool) {
        self.attempted += 1;
        if correct {
            self.score += 1;
        }
    }

    /// Count a presented question whose reply could not be scored.
    pub fn skip(&mut self) {
        self.attempted += 1;
    }

    pub fn finish(self, now: Duration) -> SessionSummary {
        let summary = SessionSummary {
            mode: self.mode,
            difficulty: self.difficulty,
            score: self.score,
            attempted: self.attempted,
            total: self.planned.unwrap_or(self.attempted),
            elapsed_secs: self.elapsed(now).as_secs_f64(),
        };
        let json = serde_json::to_string(&summary).unwrap_or_default();
        tracing::info!(summary = %json, "session finished");
        summary
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub mode: QuizMode,
    pub difficulty: Difficulty,
    pub score: usize,
    pub attempted: usize,
    /// Denominator of the printed score.
    pub total: usize,
    pub elapsed_secs: f64,
}

impl SessionSummary {
    /// Percentage of attempted questions answered correctly, to two places.
    pub fn accuracy(&self) -> f64 {
        if self.attempted == 0 {
            return 0.0;
        }
        round_to(self.score as f64 / self.attempted as f64 * 100.0, 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skipped_questions_count_as_attempted_but_not_scored() {
        let mut s = SessionState::start(QuizMode::Classic, Difficulty::Easy, Duration::ZERO);
        s.record(true);
        s.skip();
        s.record(false);
        let summary = s.finish(Duration::from_millis(2500));
        assert_eq!(summary.score, 1);
        assert_eq!(summary.attempted, 3);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.elapsed_secs, 2.5);
        assert_eq!(summary.accuracy(), 33.33);
    }

    #[test]
    fn planned_total_survives_an_early_stop() {
        let mut s = SessionState::start(QuizMode::Classic, Difficulty::Easy, Duration::ZERO).with_planned(10);
        s.record(true);
        s.record(false);
        let summary = s.finish(Duration::ZERO);
        assert_eq!((summary.score, summary.attempted, summary.total), (1, 2, 10));
        assert_eq!(summary.accuracy(), 50.0);
    }

    #[test]
    fn accuracy_of_empty_session_is_zero() {
        let s = SessionState::start(QuizMode::TimedDrill, Difficulty::Hard, Duration::from_secs(3));
        assert_eq!(s.finish(Duration::from_secs(1)).accuracy(), 0.0);
    }

    #[test]
    fn summary_serializes_with_lowercase_difficulty() {
        let s = SessionState::start(QuizMode::Probability, Difficulty::Medium, Duration::ZERO);
        let json = serde_json::to_value(s.finish(Duration::ZERO)).unwrap();
        assert_eq!(json["mode"], "Probability");
        assert_eq!(json["difficulty"], "medium");
    }
}
