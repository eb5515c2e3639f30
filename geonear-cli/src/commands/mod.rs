use clap::{Arg, ArgMatches, Command};

pub mod closest;
pub mod generate;
pub mod import;
pub mod session;

use self::closest::{get_closest_app, run_closest};
use self::generate::{get_generate_app, run_generate};
use self::import::{get_import_app, run_import};
use self::session::{get_session_app, run_session};

use geonear_core::prelude::*;
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::process;
use std::str::FromStr;

/// Gets the command application model with all subcommands.
pub fn get_app() -> Command {
    Command::new("geonear")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A closest pair of cities tool")
        .subcommand(get_import_app())
        .subcommand(get_closest_app())
        .subcommand(get_generate_app())
        .subcommand(get_session_app())
}

/// Runs the subcommand encoded in the argument matches.
pub fn run_subcommand(matches: ArgMatches) {
    let result = match matches.subcommand() {
        Some(("import", matches)) => run_import(matches),
        Some(("closest", matches)) => run_closest(matches),
        Some(("generate", matches)) => run_generate(matches),
        Some(("session", matches)) => run_session(matches),
        _ => {
            eprintln!("no subcommand was used. Use -h to print help information.");
            process::exit(1);
        }
    };

    if let Err(err) = result {
        eprintln!("{err}");
        process::exit(1);
    }
}

fn open_file(path: &str, description: &str) -> File {
    File::open(path).unwrap_or_else(|err| {
        eprintln!("cannot open {description} file '{path}': '{err}'");
        process::exit(1);
    })
}

fn create_file(path: &str, description: &str) -> File {
    File::create(path).unwrap_or_else(|err| {
        eprintln!("cannot create {description} file '{path}': '{err}'");
        process::exit(1);
    })
}

fn create_write_buffer(out_file: Option<File>) -> BufWriter<Box<dyn Write>> {
    if let Some(out_file) = out_file {
        BufWriter::new(Box::new(out_file))
    } else {
        BufWriter::new(Box::new(stdout()))
    }
}

fn parse_int_value<T: FromStr<Err = std::num::ParseIntError>>(
    matches: &ArgMatches,
    arg_name: &str,
    arg_desc: &str,
) -> Result<Option<T>, String> {
    matches
        .get_one::<String>(arg_name)
        .map(|arg| {
            arg.parse::<T>().map_err(|err| format!("cannot get integer value, error: '{err}': '{arg_desc}'")).map(Some)
        })
        .unwrap_or(Ok(None))
}

fn print_point(point: &GeoPoint) {
    println!("{point}: latitude={}, longitude={}", point.latitude, point.longitude);
}

fn print_closest_pair(first: &GeoPoint, second: &GeoPoint, distance_km: f64) {
    println!("closest pair of cities:");
    print_point(first);
    print_point(second);
    println!("distance: {distance_km:.2} km");
}
