use adlist_builder::cli::{args::Args, commands};
use clap::Parser;
use std::process;

fn main() {
    let args = Args::parse();

    // No subcommand: show help and exit cleanly
    if args.command.is_none() {
        if let Err(error) = commands::shared::write_help(&mut std::io::stdout()) {
            eprintln!("Failed to print help: {}", error);
            process::exit(1);
        }
        process::exit(0);
    }

    if let Err(error) = commands::run(args) {
        eprintln!("Error: {:#}", error);
        process::exit(1);
    }
}
