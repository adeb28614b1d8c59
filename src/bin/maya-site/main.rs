#[macro_use]
extern crate log;

mod args;
mod check;
mod debug;
mod emit;
mod error;

use clap::Parser;
use proc_exit::prelude::*;

fn main() {
    human_panic::setup_panic!();
    let result = run();
    proc_exit::exit(result);
}

fn run() -> proc_exit::ExitResult {
    let cli = Cli::parse();

    args::init_logging(cli.verbose.log_level_filter());

    match cli.command {
        Command::Check(cmd) => cmd.run(),
        Command::Emit(cmd) => cmd.run(),
        Command::Debug(cmd) => cmd.run(),
    }
    .with_code(proc_exit::Code::FAILURE)?;

    Ok(())
}

/// Site and sidebar configuration for the Maya documentation site
#[derive(Clone, Debug, clap::Parser)]
#[command(name = "maya-site", version, propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity<clap_verbosity_flag::WarnLevel>,
}

#[derive(Clone, Debug, PartialEq, Eq, clap::Subcommand)]
enum Command {
    Check(check::CheckArgs),
    Emit(emit::EmitArgs),
    /// Print site debug information
    #[command(subcommand)]
    Debug(debug::DebugCommands),
}

#[test]
fn verify_cli() {
    use clap::CommandFactory;
    Cli::command().debug_assert();
}
