use anyhow::Context;
use clap::{error::ErrorKind, Parser};
use env_logger::Env;
use log::debug;
use std::io::{self, BufWriter};

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    // Help and version still print and exit. Any other argument is ignored.
    if let Err(err) = Cli::try_parse() {
        match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
            _ => debug!("Ignoring command-line arguments: {}", err),
        }
    }

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    showcase::run(&mut out).context("failed to write demo output to stdout")?;

    Ok(())
}
