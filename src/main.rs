mod commands;
mod config;

use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use owo_colors::OwoColorize;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::config::Config;

#[derive(Parser)]
#[command(name = "icsgen")]
#[command(about = "Generate an RFC 5545 .ics calendar file from a JSON list of events")]
struct Cli {
    /// JSON input file (default: stdin)
    input: Option<PathBuf>,

    /// Output .ics file path
    #[arg(short, long)]
    output: PathBuf,

    /// Config file (default: ~/.config/icsgen/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {:#}", "Error:".red(), err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?;
    commands::generate::run(
        cli.input.as_deref(),
        &cli.output,
        config.generator_options(),
    )
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(level))
        .format(|buf, record| {
            use chrono::Local;
            use std::io::Write;
            writeln!(
                buf,
                "{} [{}] {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .init();
}
