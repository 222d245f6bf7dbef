//! Binary entrypoint for the `recast` driver.

use std::io::{self, Write};

use clap::Parser;
use recast_cli::{Cli, run};

fn main() {
    let cli = Cli::parse();

    let stdout = io::stdout();
    let mut writer = stdout.lock();

    if let Err(error) = run(&cli, &mut writer) {
        writeln!(io::stderr().lock(), "{error}").ok();
        std::process::exit(1);
    }
}
