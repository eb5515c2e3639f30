#[cfg(test)]
#[path = "../../tests/unit/commands/closest_test.rs"]
mod closest_test;

use super::*;
use geonear_core::prelude::*;
use geonear_format::{DistanceReportWriter, deserialize_points};
use std::io::BufReader;

pub const INPUT_ARG_NAME: &str = "input-points";
pub const REPORT_ARG_NAME: &str = "out-report";

pub fn get_closest_app() -> Command {
    Command::new("closest")
        .about("Finds the closest pair of points in a json point list and reports all pairwise distances")
        .arg(
            Arg::new(INPUT_ARG_NAME)
                .help("Sets the json file which contains the point list")
                .short('i')
                .long(INPUT_ARG_NAME)
                .required(true),
        )
        .arg(
            Arg::new(REPORT_ARG_NAME)
                .help("Specifies path to the csv file for the full pairwise distance report")
                .short('r')
                .long(REPORT_ARG_NAME)
                .required(false),
        )
}

pub fn run_closest(matches: &ArgMatches) -> Result<(), String> {
    let input_path = matches.get_one::<String>(INPUT_ARG_NAME).unwrap();
    let points = deserialize_points(BufReader::new(open_file(input_path, "points")))
        .map_err(|err| format!("cannot read points: '{err}'"))?;

    let mut report = matches
        .get_one::<String>(REPORT_ARG_NAME)
        .map(|path| {
            DistanceReportWriter::new(create_file(path, "report"))
                .map_err(|err| format!("cannot create report: '{err}'"))
        })
        .transpose()?;

    let closest = get_closest_pair(&points, report.as_mut().map(|writer| writer as &mut dyn PairSink))
        .map_err(|err| format!("cannot compute distances: '{err}'"))?;

    if let Some(report) = report.as_mut() {
        report.flush().map_err(|err| format!("cannot flush report: '{err}'"))?;
    }

    match closest {
        Some(pair) => print_closest_pair(pair.first, pair.second, pair.distance_km),
        None => println!("not enough points to compare"),
    }

    Ok(())
}
