//! SHA-512 crypt hashing and verification for Moodle-compatible password records.
//!
//! The three binaries under `src/bin` are thin wrappers around this crate:
//! `check_password` verifies from arguments, `password_generator` and
//! `password_validator` speak a small JSON protocol over stdin/stdout.

pub mod error;
pub mod hash;
pub mod protocol;

pub use error::PassError;
pub use hash::{check, generate, verify, HashRecord, MOODLE_ROUNDS};
pub use protocol::{GenerateResponse, Verdict};

/// Install the stderr log subscriber. Stdout is reserved for protocol output.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();
}
