use anyhow::Result;
use std::io::{self, Write};
use std::process::ExitCode;

fn main() -> Result<ExitCode> {
    moodle_pass::init_tracing();

    let response = moodle_pass::protocol::run_generate(io::stdin().lock(), &mut io::stderr());

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", serde_json::to_string(&response)?)?;
    stdout.flush()?;

    Ok(if response.is_error() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
