use crate::error::PassError;
use sha_crypt::{sha512_check, sha512_simple, Sha512Params};
use std::fmt;
use tracing::debug;

/// Rounds Moodle uses for its SHA-512 crypt password hashes
pub const MOODLE_ROUNDS: usize = 10_000;

const PREFIX: &str = "$6$";
const ROUNDS_PARAM: &str = "rounds=";
const ROUNDS_DEFAULT: u32 = 5_000;
const ROUNDS_MIN: u32 = 1_000;
const ROUNDS_MAX: u32 = 999_999_999;
const SALT_MAX_LEN: usize = 16;
const DIGEST_LEN: usize = 86;

/// A parsed `$6$[rounds=N$]salt$digest` record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashRecord {
    pub rounds: u32,
    /// Whether the record spelled out `rounds=N` rather than relying on the default
    pub explicit_rounds: bool,
    pub salt: String,
    pub digest: String,
}

impl HashRecord {
    pub fn parse(record: &str) -> Result<Self, PassError> {
        let rest = record
            .strip_prefix(PREFIX)
            .ok_or(PassError::UnsupportedScheme)?;

        let (rounds, explicit_rounds, rest) = match rest.strip_prefix(ROUNDS_PARAM) {
            Some(after) => {
                let (rounds_str, rest) = after
                    .split_once('$')
                    .ok_or(PassError::MalformedRecord("rounds parameter is not terminated"))?;
                if rounds_str.is_empty()
                    || rounds_str.starts_with('0')
                    || !rounds_str.bytes().all(|b| b.is_ascii_digit())
                {
                    return Err(PassError::MalformedRecord("rounds is not a canonical number"));
                }
                let rounds = rounds_str
                    .parse::<u32>()
                    .map_err(|_| PassError::MalformedRecord("rounds is not a number"))?;
                if !(ROUNDS_MIN..=ROUNDS_MAX).contains(&rounds) {
                    return Err(PassError::InvalidRounds(rounds as usize));
                }
                (rounds, true, rest)
            }
            None => (ROUNDS_DEFAULT, false, rest),
        };

        let (salt, digest) = rest
            .split_once('$')
            .ok_or(PassError::MalformedRecord("missing digest"))?;

        if salt.len() > SALT_MAX_LEN {
            return Err(PassError::MalformedRecord("salt longer than 16 characters"));
        }
        if !salt.bytes().all(is_crypt_char) {
            return Err(PassError::MalformedRecord("salt contains invalid characters"));
        }
        if digest.len() != DIGEST_LEN || !digest.bytes().all(is_crypt_char) {
            return Err(PassError::MalformedRecord("digest is not 86 crypt characters"));
        }

        Ok(HashRecord {
            rounds,
            explicit_rounds,
            salt: salt.to_string(),
            digest: digest.to_string(),
        })
    }
}

impl fmt::Display for HashRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(PREFIX)?;
        if self.explicit_rounds {
            write!(f, "{}{}$", ROUNDS_PARAM, self.rounds)?;
        }
        write!(f, "{}${}", self.salt, self.digest)
    }
}

fn is_crypt_char(b: u8) -> bool {
    b == b'.' || b == b'/' || b.is_ascii_alphanumeric()
}

/// Hash a password the way Moodle stores it: SHA-512 crypt, 10000 rounds, fresh salt
pub fn generate(password: &str) -> Result<String, PassError> {
    generate_with_rounds(password, MOODLE_ROUNDS)
}

pub fn generate_with_rounds(password: &str, rounds: usize) -> Result<String, PassError> {
    reject_nul(password)?;
    let params = Sha512Params::new(rounds).map_err(|_| PassError::InvalidRounds(rounds))?;
    let hash = sha512_simple(password, &params)
        .map_err(|e| PassError::Crypt(format!("{:?}", e)))?;
    debug!(rounds, "generated SHA-512 crypt hash");
    Ok(hash)
}

// crypt(3) stops reading at NUL, so such a password cannot round-trip through other implementations
fn reject_nul(password: &str) -> Result<(), PassError> {
    if password.contains('\0') {
        return Err(PassError::NulByte);
    }
    Ok(())
}

/// Verify a password against a stored record. `Ok(())` only on a match.
pub fn verify(password: &str, stored: &str) -> Result<(), PassError> {
    reject_nul(password)?;
    let record = HashRecord::parse(stored).map_err(|e| {
        debug!(error = %e, "rejected stored hash");
        e
    })?;
    debug!(rounds = record.rounds, "verifying against SHA-512 crypt hash");

    // The record is already validated, so any failure here is a digest mismatch
    sha512_check(password, stored).map_err(|e| {
        debug!(error = ?e, "sha512 check failed");
        PassError::Mismatch
    })
}

/// Fail-closed verification: any error counts as a non-match
pub fn check(password: &str, stored: &str) -> bool {
    verify(password, stored).is_ok()
}
