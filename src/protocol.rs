//! The stdin/stdout JSON protocol spoken by `password_generator` and
//! `password_validator`.
//!
//! Both entry points swallow every error and map it to their documented
//! output: the generator answers `{"error": ...}`, the validator answers
//! `FAIL`. Diagnostics go to the supplied writer, which is stderr in the
//! binaries.

use crate::error::PassError;
use crate::hash;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::{Read, Write};
use tracing::warn;

const HASH_FAILED_MESSAGE: &str = "Failed to generate hash";

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub password: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GenerateResponse {
    Hash { hash: String },
    Error { error: String },
}

impl GenerateResponse {
    pub fn is_error(&self) -> bool {
        matches!(self, GenerateResponse::Error { .. })
    }
}

#[derive(Debug, Deserialize)]
pub struct ValidateRequest {
    pub password: String,
    pub stored_hash: String,
}

/// The single token printed by the verifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Ok,
    Fail,
}

impl From<bool> for Verdict {
    fn from(matched: bool) -> Self {
        if matched {
            Verdict::Ok
        } else {
            Verdict::Fail
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Ok => f.write_str("OK"),
            Verdict::Fail => f.write_str("FAIL"),
        }
    }
}

fn read_password<R: Read>(input: R) -> Result<String, PassError> {
    let request: GenerateRequest = serde_json::from_reader(input)?;
    request
        .password
        .filter(|password| !password.is_empty())
        .ok_or(PassError::MissingPassword)
}

/// Read a generate request and produce the response object
pub fn run_generate<R: Read, W: Write>(input: R, diagnostics: &mut W) -> GenerateResponse {
    let password = match read_password(input) {
        Ok(password) => password,
        Err(PassError::MissingPassword) => {
            return GenerateResponse::Error {
                error: PassError::MissingPassword.to_string(),
            }
        }
        Err(e) => {
            return GenerateResponse::Error {
                error: format!("Error: {}", e),
            }
        }
    };

    match hash::generate(&password) {
        Ok(hash) => GenerateResponse::Hash { hash },
        Err(e) => {
            warn!(error = %e, "hash generation failed");
            let _ = writeln!(diagnostics, "Error generating hash: {}", e);
            GenerateResponse::Error {
                error: HASH_FAILED_MESSAGE.to_string(),
            }
        }
    }
}

/// Read a validate request and decide the verdict, failing closed
pub fn run_validate<R: Read, W: Write>(input: R, diagnostics: &mut W) -> Verdict {
    let request: ValidateRequest = match serde_json::from_reader(input) {
        Ok(request) => request,
        Err(e) => {
            let _ = writeln!(diagnostics, "Error: {}", e);
            return Verdict::Fail;
        }
    };

    match hash::verify(&request.password, &request.stored_hash) {
        Ok(()) => Verdict::Ok,
        Err(PassError::Mismatch) => Verdict::Fail,
        Err(e) => {
            let _ = writeln!(diagnostics, "Error verifying password: {}", e);
            Verdict::Fail
        }
    }
}
