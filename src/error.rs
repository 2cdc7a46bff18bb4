//! Error types shared by the console, session runners and menu.
//!
//! Question generation never fails; only terminal I/O does.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrainerError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Standard input reached end-of-file while a prompt was waiting.
    #[error("input closed")]
    InputClosed,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown difficulty {0:?} (expected easy, medium or hard)")]
pub struct UnknownDifficulty(pub String);
