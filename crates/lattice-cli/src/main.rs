//! Command-line driver: reads a digit grid and prints one answer.
//!
//! Run: cargo run -- risk --extended input.txt

mod cli;
mod commands;
mod logger;

use clap::Parser;

use crate::cli::CliArgs;

fn main() {
    let args = CliArgs::parse();
    logger::init(args.verbose);

    match commands::run(&args.command) {
        Ok(answer) => println!("{answer}"),
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(1);
        }
    }
}
