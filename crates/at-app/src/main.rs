use anyhow::Result;
use clap::Parser;

pub mod cli;
pub mod pipeline;
pub mod terminal;

fn main() -> Result<()> {
    // 1. Parser CLI
    let cli = cli::Cli::parse();

    // 2. Initialiser le logging (stderr)
    env_logger::Builder::new()
        .filter_level(cli.log_filter())
        .init();
    if cli.parse_log_level().is_none() {
        log::warn!("Niveau de log inconnu '{}', utilisation de warn.", cli.log_level);
    }

    // 3. Charger, convertir, écrire
    pipeline::run(&cli)
}
