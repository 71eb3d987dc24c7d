//! Config subcommands

use clap::Subcommand;

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print the effective configuration
    Show,
}
