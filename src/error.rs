use thiserror::Error;

/// Every way hashing, verifying or reading a request can fail
#[derive(Debug, Error)]
pub enum PassError {
    #[error("Password is required")]
    MissingPassword,

    #[error(transparent)]
    MalformedInput(#[from] serde_json::Error),

    #[error("not a SHA-512 crypt hash")]
    UnsupportedScheme,

    #[error("invalid SHA-512 crypt hash: {0}")]
    MalformedRecord(&'static str),

    #[error("rounds {0} outside the allowed range 1000..=999999999")]
    InvalidRounds(usize),

    #[error("password contains a NUL byte")]
    NulByte,

    #[error("password does not match")]
    Mismatch,

    // sha_crypt's error types only implement Debug
    #[error("crypt failure: {0}")]
    Crypt(String),
}
