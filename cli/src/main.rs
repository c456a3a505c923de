mod commands;
mod terminal;

use commands::{CommandLine, Commands, analyze, scan};
use terminal::logging;
use wrisk_common::config::Config;

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init(commands.quiet);

    let cfg = Config {
        quiet: commands.quiet,
        seed: commands.seed,
    };

    match commands.command {
        Commands::Scan => scan::scan(&cfg),
        Commands::Analyze { name, security } => analyze::analyze(name, security, &cfg),
    }
}
