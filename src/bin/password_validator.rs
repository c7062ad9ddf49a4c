use anyhow::Result;
use std::io::{self, Write};

fn main() -> Result<()> {
    moodle_pass::init_tracing();

    let verdict = moodle_pass::protocol::run_validate(io::stdin().lock(), &mut io::stderr());

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", verdict)?;
    stdout.flush()?;

    Ok(())
}
