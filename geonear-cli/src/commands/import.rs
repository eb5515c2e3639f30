#[cfg(test)]
#[path = "../../tests/unit/commands/import_test.rs"]
mod import_test;

use super::*;
use geonear_format::{read_csv_points, serialize_points};
use std::io::{BufReader, Write};

pub const INPUT_ARG_NAME: &str = "input-points";
pub const OUT_RESULT_ARG_NAME: &str = "out-result";

pub fn get_import_app() -> Command {
    Command::new("import")
        .about("Reads points from a csv source and persists them as a json point list")
        .arg(
            Arg::new(INPUT_ARG_NAME)
                .help("Sets the csv file which contains the points to read")
                .short('i')
                .long(INPUT_ARG_NAME)
                .required(true),
        )
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("Specifies path to the file for result output")
                .short('o')
                .long(OUT_RESULT_ARG_NAME)
                .required(false),
        )
}

pub fn run_import(matches: &ArgMatches) -> Result<(), String> {
    let input_path = matches.get_one::<String>(INPUT_ARG_NAME).unwrap();
    let reader = BufReader::new(open_file(input_path, "points"));

    let points = read_csv_points(reader).map_err(|err| format!("cannot import points: '{err}'"))?;
    points.iter().for_each(print_point);
    println!("{} points loaded from '{input_path}'", points.len());

    let out_result = matches.get_one::<String>(OUT_RESULT_ARG_NAME).map(|path| create_file(path, "out result"));
    let mut out_buffer = create_write_buffer(out_result);

    serialize_points(&points, &mut out_buffer).map_err(|err| format!("cannot serialize points: '{err}'"))?;
    out_buffer.flush().map_err(|err| format!("cannot flush point list output: '{err}'"))
}
