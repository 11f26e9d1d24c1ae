use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LheError {
    #[error("pairing backend failure: {0}")]
    Backend(String),

    #[error("cannot combine ciphertext kinds {lhs} and {rhs}")]
    TypeMismatch {
        lhs: &'static str,
        rhs: &'static str,
    },

    #[error("ciphertext levels differ: {lhs} vs {rhs}")]
    LevelMismatch { lhs: u32, rhs: u32 },

    #[error("level {level} is outside the supported range (max {max})")]
    LevelExceeded { level: u32, max: u32 },

    #[error("discrete log not found within bound {bound}")]
    DecryptionFailed { bound: u64 },
}
