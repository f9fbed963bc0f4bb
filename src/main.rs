//! Prints a randomly generated family tree of blood types.

use bloodline::SimulationBuilder;
use std::io::{self, BufWriter};
use std::process;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = run() {
        log::error!("{}", e);
        process::exit(1);
    }
}

fn run() -> bloodline::Result<()> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    SimulationBuilder::new().build()?.run(&mut out)
}
