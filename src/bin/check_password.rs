use anyhow::Result;
use clap::Parser;
use moodle_pass::{hash, Verdict};

#[derive(Parser)]
#[command(name = "check_password")]
#[command(about = "Check a password against a SHA-512 crypt hash, printing OK or FAIL")]
struct Cli {
    /// Plaintext password to check
    #[arg(allow_hyphen_values = true)]
    password: String,

    /// Stored hash, e.g. $6$rounds=10000$salt$digest
    #[arg(allow_hyphen_values = true)]
    stored_hash: String,
}

fn main() -> Result<()> {
    let args = Cli::parse();
    moodle_pass::init_tracing();

    // Malformed or foreign hashes count as a mismatch
    let verdict = Verdict::from(hash::check(&args.password, &args.stored_hash));
    println!("{}", verdict);

    Ok(())
}
