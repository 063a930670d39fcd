//! PL/0 lexical analyzer CLI.

use std::io::{self, IsTerminal, Write};

use pl0c::report::console;
use pl0c::CliError;

fn main() {
    pl0c::init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let stdout = io::stdout();
    let is_tty = stdout.is_terminal();
    let mut out = stdout.lock();

    let status = match pl0c::run(&args, &mut out, is_tty) {
        Ok(status) => status,
        Err(err) => {
            eprintln!("error: {err}");
            if matches!(err, CliError::Usage(_)) {
                let _ = console::write_usage(&mut io::stderr());
            }
            1
        }
    };
    let _ = out.flush();
    std::process::exit(status);
}
