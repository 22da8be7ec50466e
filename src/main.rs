mod cli;
mod commands;
mod distributions;
mod error;
mod ui;

use clap::Parser;
use cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        cli::Commands::Resolve {
            version,
            arch,
            package_type,
            distribution,
            json,
        } => commands::resolve::resolve(version, arch, package_type, distribution, json).await,
        cli::Commands::Versions {
            arch,
            package_type,
            distribution,
            ea,
        } => commands::versions::versions(arch, package_type, distribution, ea).await,
    }
}
