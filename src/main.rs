mod adapters;
mod cli;
mod config;
mod core;

use clap::Parser;

use cli::Cli;

fn main() {
    let args = Cli::parse();

    if let Err(e) = cli::commands::record::execute(&args) {
        cli::output::error(&format!("Error: {e}"));
        std::process::exit(1);
    }
}
