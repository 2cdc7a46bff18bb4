//! Top-level menu loop.

use std::io::{BufRead, Write};

use rand::Rng;

use crate::config::TrainerConfig;
use crate::error::TrainerError;
use crate::session::{
    clock::Clock,
    console::Console,
    modes::{run_approximation, run_classic, run_probability, run_timed_drill},
    state::QuizMode,
};

const MENU_CHOICES: [&str; 5] = ["1", "2", "3", "4", "5"];

/// Show the menu until the user picks Exit, dispatching each pick to a mode.
pub fn run_menu<I, O, G, C>(
    console: &mut Console<I, O>,
    rng: &mut G,
    clock: &mut C,
    config: &TrainerConfig,
) -> Result<(), TrainerError>
where
    I: BufRead,
    O: Write,
    G: Rng,
    C: Clock,
{
    console.say("\nWelcome to the Mental Math Trainer – Quant Edition")?;

    loop {
        console.say("\nMAIN MENU")?;
        for (i, mode) in [
            QuizMode::Classic,
            QuizMode::TimedDrill,
            QuizMode::Approximation,
            QuizMode::Probability,
        ]
        .iter()
        .enumerate()
        {
            console.say(format!("{}) {mode}", i + 1))?;
        }
        console.say("5) Exit")?;

        match console.get_choice("Select (1-5): ", &MENU_CHOICES)?.as_str() {
            "1" => { run_classic(console, rng, clock)?; }
            "2" => { run_timed_drill(console, rng, clock, &config.drill)?; }
            "3" => { run_approximation(console, rng, clock)?; }
            "4" => { run_probability(console, rng, clock)?; }
            _ => {
                console.say("Good luck on your next interview!")?;
                return Ok(());
            }
        }
    }
}
