//! A command line entry point to the *closest pair of cities* tool.
//!

use geonear_cli::commands::{get_app, run_subcommand};

fn main() {
    let matches = get_app().get_matches();

    run_subcommand(matches);
}
