// CLI module for handling command-line interface

use crate::distributions::{DEFAULT_DISTRIBUTION, platform};
use clap::{Parser, Subcommand};

/// Package types the vendors publish
pub const PACKAGE_TYPES: [&str; 4] = ["jdk", "jre", "jdk+fx", "jre+fx"];

#[derive(Parser)]
#[command(name = "jdkget")]
#[command(about = "Deterministic JDK resolver for vendor bundle catalogs")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve a version spec to a single bundle and its download URL
    Resolve {
        /// Version spec: "11", "8.0", "11.x", "11.0.10+9" or "17-ea"
        version: String,

        /// Logical architecture token (defaults to the host architecture)
        #[arg(long, default_value_t = platform::default_architecture().to_string())]
        arch: String,

        /// Package type to resolve
        #[arg(long = "package", value_parser = PACKAGE_TYPES, default_value = "jdk")]
        package_type: String,

        /// Distribution provider
        #[arg(long, default_value = DEFAULT_DISTRIBUTION)]
        distribution: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the available versions of a catalog, newest first
    Versions {
        /// Logical architecture token (defaults to the host architecture)
        #[arg(long, default_value_t = platform::default_architecture().to_string())]
        arch: String,

        /// Package type to list
        #[arg(long = "package", value_parser = PACKAGE_TYPES, default_value = "jdk")]
        package_type: String,

        /// Distribution provider
        #[arg(long, default_value = DEFAULT_DISTRIBUTION)]
        distribution: String,

        /// List the early-access channel instead of general availability
        #[arg(long)]
        ea: bool,
    },
}
