//! Interactive mental-math trainer on stdin/stdout.

use std::io;

use mental_math_drill::{
    menu::run_menu,
    session::{Console, SystemClock},
    TrainerConfig, TrainerError,
};

fn main() -> Result<(), TrainerError> {
    // Logs go to stderr so the quiz owns stdout.
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .with_target(false)
        .without_time()
        .with_writer(io::stderr)
        .init();

    let config = TrainerConfig::default();
    let mut rng = config.rng();
    let mut clock = SystemClock::new();
    let mut console = Console::new(io::stdin().lock(), io::stdout().lock());

    match run_menu(&mut console, &mut rng, &mut clock, &config) {
        Ok(()) | Err(TrainerError::InputClosed) => Ok(()),
        Err(e) => Err(e),
    }
}
