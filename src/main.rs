use clap::Parser;
use housing_stats::cli::{self, Args};
use std::process;

fn main() {
    let args = Args::parse();

    if let Err(error) = cli::run(args) {
        // Error occurred - print to stderr and exit with error code
        eprintln!("Error: {:#}", error);
        process::exit(1);
    }
}
