//! The four quiz modes.
//!
//! Each runner prompts for its settings, loops over questions, and prints a
//! summary. Generators only see the injected RNG, and timing only sees the
//! injected [`Clock`], so a whole session can be replayed from a seed and a
//! scripted input.

use std::io::{BufRead, Write};
use std::time::Duration;

use rand::Rng;

use crate::config::DrillConfig;
use crate::error::TrainerError;
use crate::session::{
    clock::Clock,
    console::Console,
    state::{QuizMode, SessionState, SessionSummary},
};
use crate::training_engine::{
    distractors::generate_options,
    generator::generate_for,
    models::{Difficulty, OptionSet, Question, Topic, TopicPool},
    rounding::round_to,
};

/// Tolerance for free-form arithmetic answers.
pub const FREE_ANSWER_TOLERANCE: f64 = 1e-6;

const CHOICES: [&str; 4] = ["1", "2", "3", "4"];
const CHOICES_OR_QUIT: [&str; 5] = ["1", "2", "3", "4", "q"];

fn is_quit(reply: &str) -> bool {
    matches!(reply.to_lowercase().as_str(), "q" | "quit")
}

fn print_options<I: BufRead, O: Write>(
    console: &mut Console<I, O>,
    options: &OptionSet,
    indent: &str,
) -> Result<(), TrainerError> {
    for (idx, option) in options.options().iter().enumerate() {
        console.say(format!("{indent}{}) {option}", idx + 1))?;
    }
    Ok(())
}

/// Score a validated choice (`"1"`..`"4"`) against the question's answer.
fn choice_is_correct(options: &OptionSet, choice: &str, question: &Question) -> bool {
    choice
        .parse::<usize>()
        .map(|c| options.is_correct(c, &question.answer))
        .unwrap_or(false)
}

fn print_summary<I: BufRead, O: Write>(
    console: &mut Console<I, O>,
    summary: &SessionSummary,
) -> Result<(), TrainerError> {
    console.say("\n=== SUMMARY ===")?;
    console.say(format!("Score: {}/{}", summary.score, summary.total))
}

/// Free-answer arithmetic over a user-chosen number of questions.
///
/// `q`/`quit` ends early; the score is still reported over the requested
/// count. A non-numeric reply skips the question.
pub fn run_classic<I, O, G, C>(
    console: &mut Console<I, O>,
    rng: &mut G,
    clock: &mut C,
) -> Result<SessionSummary, TrainerError>
where
    I: BufRead,
    O: Write,
    G: Rng,
    C: Clock,
{
    console.say("\n=== CLASSIC++ MODE ===")?;
    let difficulty = console.get_difficulty()?;
    let count = console.get_count("How many questions? ")?;
    let mut state = SessionState::start(QuizMode::Classic, difficulty, clock.now()).with_planned(count);

    for i in 1..=count {
        let topic = TopicPool::Arithmetic.pick(rng);
        let question = generate_for(rng, topic, difficulty);

        console.say(format!("\nQ{i}: {}", question.prompt))?;
        let reply = console.read_line("Your answer: ")?;
        if is_quit(&reply) {
            break;
        }

        let Ok(guess) = reply.parse::<f64>() else {
            console.say("Invalid.")?;
            state.skip();
            continue;
        };

        if question.answer.accepts(guess, FREE_ANSWER_TOLERANCE) {
            console.say("Correct!")?;
            state.record(true);
        } else {
            console.say(format!("Wrong. Correct = {}", question.answer))?;
            state.record(false);
        }
    }

    let summary = state.finish(clock.now());
    print_summary(console, &summary)?;
    console.say(format!("Time: {:.2} seconds", summary.elapsed_secs))?;
    Ok(summary)
}

/// Timed multiple-choice arithmetic drill.
///
/// The deadline is checked before each question, so a slow final answer can
/// overrun it by one exchange.
pub fn run_timed_drill<I, O, G, C>(
    console: &mut Console<I, O>,
    rng: &mut G,
    clock: &mut C,
    drill: &DrillConfig,
) -> Result<SessionSummary, TrainerError>
where
    I: BufRead,
    O: Write,
    G: Rng,
    C: Clock,
{
    console.say("\n=== 80-IN-8 (Quant Drill) ===")?;
    let difficulty = console.get_difficulty()?;
    let limit = Duration::from_secs(drill.time_limit_secs);
    let mut state = SessionState::start(QuizMode::TimedDrill, difficulty, clock.now());

    for i in 1..=drill.question_limit {
        let elapsed = state.elapsed(clock.now());
        if elapsed > limit {
            console.say("\nTIME IS UP!")?;
            break;
        }
        let remaining = (limit - elapsed).as_secs();

        let topic = TopicPool::Arithmetic.pick(rng);
        let question = generate_for(rng, topic, difficulty);
        let options = generate_options(rng, &question.answer, difficulty);

        console.say(format!("\nQ{i}  (Time left: {}:{:02})", remaining / 60, remaining % 60))?;
        console.say(&question.prompt)?;
        print_options(console, &options, " ")?;

        let choice = console.get_choice("Your choice (1-4 or q): ", &CHOICES_OR_QUIT)?;
        if choice == "q" {
            break;
        }
        if choice_is_correct(&options, &choice, &question) {
            console.say("Correct!")?;
            state.record(true);
        } else {
            console.say(format!("Wrong. Correct = {}", question.answer))?;
            state.record(false);
        }
    }

    let summary = state.finish(clock.now());
    print_summary(console, &summary)?;
    console.say(format!("Accuracy: {}%", summary.accuracy()))?;
    Ok(summary)
}

/// Approximation questions: `sqrt` is a free estimate within tolerance, the
/// rest are multiple choice against the series value.
pub fn run_approximation<I, O, G, C>(
    console: &mut Console<I, O>,
    rng: &mut G,
    clock: &mut C,
) -> Result<SessionSummary, TrainerError>
where
    I: BufRead,
    O: Write,
    G: Rng,
    C: Clock,
{
    console.say("\n=== APPROXIMATION MODE ===")?;
    let difficulty = console.get_difficulty()?;
    let count = console.get_count("How many questions? ")?;
    let mut state = SessionState::start(QuizMode::Approximation, difficulty, clock.now()).with_planned(count);

    for i in 1..=count {
        let topic = TopicPool::Approximation.pick(rng);
        let question = generate_for(rng, topic, difficulty);
        console.say(format!("\nQ{i}: {}", question.prompt))?;

        if topic == Topic::Sqrt {
            ask_estimate(console, &question, &mut state)?;
        } else {
            let options = generate_options(rng, &question.answer, difficulty);
            console.say("Choose:")?;
            print_options(console, &options, "")?;

            let choice = console.get_choice("Your answer: ", &CHOICES)?;
            if choice_is_correct(&options, &choice, &question) {
                console.say("Correct!")?;
                state.record(true);
            } else {
                console.say(format!("Wrong. True = {}", question.answer))?;
                state.record(false);
            }
        }
    }

    let summary = state.finish(clock.now());
    print_summary(console, &summary)?;
    Ok(summary)
}

fn ask_estimate<I: BufRead, O: Write>(
    console: &mut Console<I, O>,
    question: &Question,
    state: &mut SessionState,
) -> Result<(), TrainerError> {
    let reply = console.read_line("Your approximation: ")?;
    let Ok(guess) = reply.parse::<f64>() else {
        console.say("Invalid.")?;
        state.skip();
        return Ok(());
    };
    if question.answer.accepts(guess, FREE_ANSWER_TOLERANCE) {
        console.say("Good! Within tolerance.")?;
        state.record(true);
    } else {
        console.say(format!("Too far. True ≈ {}", round_to(question.answer.value(), 4)))?;
        state.record(false);
    }
    Ok(())
}

/// Multiple-choice probability questions.
pub fn run_probability<I, O, G, C>(
    console: &mut Console<I, O>,
    rng: &mut G,
    clock: &mut C,
) -> Result<SessionSummary, TrainerError>
where
    I: BufRead,
    O: Write,
    G: Rng,
    C: Clock,
{
    console.say("\n=== PROBABILITY MODE ===")?;
    let difficulty = console.get_difficulty()?;
    let count = console.get_count("How many questions? ")?;
    let mut state = SessionState::start(QuizMode::Probability, difficulty, clock.now()).with_planned(count);

    for i in 1..=count {
        let question = generate_for(rng, Topic::Probability, state.difficulty());
        console.say(format!("\nQ{i}: {}", question.prompt))?;

        let options = generate_options(rng, &question.answer, difficulty);
        print_options(console, &options, "")?;

        let choice = console.get_choice("Your answer: ", &CHOICES)?;
        if choice_is_correct(&options, &choice, &question) {
            console.say("Correct!")?;
            state.record(true);
        } else {
            console.say(format!("Wrong. Correct = {}", question.answer))?;
            state.record(false);
        }
    }

    let summary = state.finish(clock.now());
    print_summary(console, &summary)?;
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::clock::SteppingClock;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::io::Cursor;

    type TestConsole = Console<Cursor<Vec<u8>>, Vec<u8>>;

    fn console(input: &str) -> TestConsole {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn still_clock() -> SteppingClock {
        SteppingClock::new(Duration::ZERO)
    }

    /// Replay the RNG to learn the classic-mode answers for a seed.
    fn classic_answers(seed: u64, difficulty: Difficulty, count: usize) -> Vec<Question> {
        let mut rng = StdRng::seed_from_u64(seed);
        (0..count)
            .map(|_| {
                let topic = TopicPool::Arithmetic.pick(&mut rng);
                generate_for(&mut rng, topic, difficulty)
            })
            .collect()
    }

    #[test]
    fn classic_scores_correct_wrong_and_invalid_replies() {
        let qs = classic_answers(7, Difficulty::Easy, 3);
        let input = format!(
            "easy\n3\n{}\n{}\nabc\n",
            qs[0].answer,
            qs[1].answer.value() + 1.0,
        );
        let mut c = console(&input);
        let mut rng = StdRng::seed_from_u64(7);
        let summary = run_classic(&mut c, &mut rng, &mut still_clock()).unwrap();

        assert_eq!(summary.score, 1);
        assert_eq!(summary.attempted, 3);
        let out = String::from_utf8(c.into_output()).unwrap();
        assert!(out.contains(&format!("Q1: {}", qs[0].prompt)));
        assert!(out.contains("Correct!"));
        assert!(out.contains(&format!("Wrong. Correct = {}", qs[1].answer)));
        assert!(out.contains("Invalid."));
        assert!(out.contains("Score: 1/3"));
        assert!(out.contains("Time: 0.00 seconds"));
    }

    #[test]
    fn classic_quit_stops_early() {
        let mut c = console("medium\n10\nquit\n");
        let mut rng = StdRng::seed_from_u64(1);
        let summary = run_classic(&mut c, &mut rng, &mut still_clock()).unwrap();
        assert_eq!((summary.attempted, summary.total), (0, 10));
        let out = String::from_utf8(c.into_output()).unwrap();
        assert!(!out.contains("Q2:"));
        assert!(out.contains("Score: 0/10"));
    }

    #[test]
    fn drill_stops_when_time_runs_out_before_question_five() {
        // Readings: start 0, then 100, 200, 300, 400, 500 at the top of each question.
        let mut clock = SteppingClock::new(Duration::from_secs(100));
        let input = format!("easy\n{}", "1\n".repeat(10));
        let mut c = console(&input);
        let mut rng = StdRng::seed_from_u64(3);
        let summary = run_timed_drill(&mut c, &mut rng, &mut clock, &DrillConfig::default()).unwrap();

        assert_eq!((summary.attempted, summary.total), (4, 4));
        let out = String::from_utf8(c.into_output()).unwrap();
        assert!(out.contains("TIME IS UP!"));
        assert!(out.contains("Q4  (Time left: 1:20)"));
        assert!(!out.contains("Q5"));
        assert!(out.contains(&format!("Score: {}/4", summary.score)));
    }

    #[test]
    fn drill_respects_question_limit_and_quit() {
        let drill = DrillConfig { question_limit: 3, time_limit_secs: 480 };
        let mut c = console("hard\n2\n3\n4\n");
        let mut rng = StdRng::seed_from_u64(4);
        let summary = run_timed_drill(&mut c, &mut rng, &mut still_clock(), &drill).unwrap();
        assert_eq!(summary.attempted, 3);

        let mut c = console("hard\n1\nq\n");
        let mut rng = StdRng::seed_from_u64(4);
        let summary = run_timed_drill(&mut c, &mut rng, &mut still_clock(), &drill).unwrap();
        assert_eq!((summary.attempted, summary.total), (1, 1));
        let out = String::from_utf8(c.into_output()).unwrap();
        assert!(out.contains("Q1  (Time left: 8:00)"));
        assert!(out.contains(&format!("Score: {}/1", summary.score)));
        assert!(out.contains(&format!("Accuracy: {}%", summary.accuracy())));
    }

    #[test]
    fn drill_marks_the_correct_option() {
        // Replay generation to find which option is right.
        let mut replay = StdRng::seed_from_u64(5);
        let topic = TopicPool::Arithmetic.pick(&mut replay);
        let q = generate_for(&mut replay, topic, Difficulty::Medium);
        let options = generate_options(&mut replay, &q.answer, Difficulty::Medium);
        let right = options.correct_index(&q.answer).unwrap() + 1;

        let drill = DrillConfig { question_limit: 1, time_limit_secs: 480 };
        let mut c = console(&format!("medium\n{right}\n"));
        let mut rng = StdRng::seed_from_u64(5);
        let summary = run_timed_drill(&mut c, &mut rng, &mut still_clock(), &drill).unwrap();
        assert_eq!((summary.score, summary.attempted), (1, 1));
        assert_eq!(summary.accuracy(), 100.0);
    }

    #[test]
    fn approximation_rejects_quit_and_skips_bad_estimates() {
        // Replay the topic sequence: sqrt gets junk (skipped), MCQ gets "q" then "1".
        let mut replay = StdRng::seed_from_u64(6);
        let mut input = String::from("easy\n5\n");
        let mut sqrt_count = 0;
        for _ in 0..5 {
            let topic = TopicPool::Approximation.pick(&mut replay);
            let q = generate_for(&mut replay, topic, Difficulty::Easy);
            if topic == Topic::Sqrt {
                sqrt_count += 1;
                input.push_str("q\n");
            } else {
                generate_options(&mut replay, &q.answer, Difficulty::Easy);
                input.push_str("q\n1\n");
            }
        }

        let mut c = console(&input);
        let mut rng = StdRng::seed_from_u64(6);
        let summary = run_approximation(&mut c, &mut rng, &mut still_clock()).unwrap();
        let out = String::from_utf8(c.into_output()).unwrap();

        assert_eq!(summary.attempted, 5);
        assert_eq!(out.matches("Invalid.").count(), sqrt_count);
        assert_eq!(out.matches("Please choose from [1, 2, 3, 4].").count(), 5 - sqrt_count);
        assert!(out.contains(&format!("Score: {}/5", summary.score)));
    }

    #[test]
    fn sqrt_estimate_within_tolerance_scores() {
        let q = crate::training_engine::topics::approximation::sqrt(50, Difficulty::Easy);
        let mut state = SessionState::start(QuizMode::Approximation, Difficulty::Easy, Duration::ZERO);

        let mut c = console("7.05\n");
        ask_estimate(&mut c, &q, &mut state).unwrap();
        let mut c2 = console("7.2\n");
        ask_estimate(&mut c2, &q, &mut state).unwrap();
        let mut c3 = console("seven\n");
        ask_estimate(&mut c3, &q, &mut state).unwrap();

        assert_eq!((state.score(), state.attempted()), (1, 3));
        assert!(String::from_utf8(c.into_output()).unwrap().contains("Good! Within tolerance."));
        assert!(String::from_utf8(c2.into_output()).unwrap().contains("Too far. True ≈ 7.0711"));
        assert!(String::from_utf8(c3.into_output()).unwrap().contains("Invalid."));
    }

    #[test]
    fn probability_mode_runs_requested_count() {
        let mut c = console(&format!("hard\n4\n{}", "2\n".repeat(4)));
        let mut rng = StdRng::seed_from_u64(8);
        let summary = run_probability(&mut c, &mut rng, &mut still_clock()).unwrap();
        assert_eq!(summary.attempted, 4);
        let out = String::from_utf8(c.into_output()).unwrap();
        assert!(out.contains("=== PROBABILITY MODE ==="));
        assert!(out.contains("Q4: "));
        assert!(out.contains("4) "));
    }
}
