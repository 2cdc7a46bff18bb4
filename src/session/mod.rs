//! Session runners: console I/O, timing, score tracking and the four modes.
//!
//! | Module    | Purpose |
//! |-----------|---------|
//! | `console` | Prompting, forced-choice input, line output |
//! | `clock`   | Injected time source (system or stepping) |
//! | `state`   | Per-mode score/attempt tracking and summaries |
//! | `modes`   | Classic, timed drill, approximation and probability runners |

pub mod clock;
pub mod console;
pub mod modes;
pub mod state;

pub use clock::{Clock, SteppingClock, SystemClock};
pub use console::Console;
pub use modes::{run_approximation, run_classic, run_probability, run_timed_drill};
pub use state::{QuizMode, SessionState, SessionSummary};
