use thiserror::Error;

#[derive(Error, Debug)]
pub enum CipherChainError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid key: {0}")]
    InvalidKey(String),

    #[error("Invalid shift: {0}. Must be 1-25")]
    InvalidShift(i64),

    #[error("Invalid LFSR seed: {0}. Must be 1-255")]
    InvalidSeed(u64),

    #[error("Invalid LFSR tap position: {0}. Must be 0-7")]
    InvalidTap(usize),

    #[error("Encoding error: {0}")]
    Encoding(String),

    #[error("Refusing to encrypt: input already classified as encrypted (pass --force to override)")]
    AlreadyEncrypted,

    #[error("Refusing to decrypt: input classified as plaintext (pass --force to override)")]
    NotEncrypted,
}

pub type Result<T> = std::result::Result<T, CipherChainError>;
