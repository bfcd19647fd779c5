// crates/tenc-cli/src/main.rs

use clap::{Parser, Subcommand};

mod cmd;
mod io;

#[derive(Parser)]
#[command(name = "tenc")]
#[command(about = "Text encoding / newline converter", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert a stream (file or stdin) between encodings
    Encode(cmd::encode::EncodeArgs),

    /// Convert files in place (glob targets, crash-safe replace)
    Ow(cmd::overwrite::OverwriteArgs),

    /// Probe encoding names / code pages and report as CSV
    Getinfo(cmd::getinfo::GetInfoArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Encode(args) => cmd::encode::run(args),
        Commands::Ow(args) => cmd::overwrite::run(args),
        Commands::Getinfo(args) => cmd::getinfo::run(args),
    }
}
