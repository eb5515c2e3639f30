#[cfg(test)]
#[path = "../../tests/unit/commands/generate_test.rs"]
mod generate_test;

use super::*;
use crate::extensions::generate::generate_points;
use geonear_format::write_csv_points;

pub const SIZE_ARG_NAME: &str = "points-size";
pub const SEED_ARG_NAME: &str = "seed";
pub const OUT_RESULT_ARG_NAME: &str = "out-result";

pub fn get_generate_app() -> Command {
    Command::new("generate")
        .about("Generates a pseudo random csv point source for testing")
        .arg(
            Arg::new(SIZE_ARG_NAME)
                .help("Amount of points in the generated source")
                .short('s')
                .long(SIZE_ARG_NAME)
                .required(true),
        )
        .arg(
            Arg::new(SEED_ARG_NAME)
                .help("Specifies a seed to get a reproducible point set")
                .long(SEED_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("Specifies path to the file for result output")
                .short('o')
                .long(OUT_RESULT_ARG_NAME)
                .required(false),
        )
}

pub fn run_generate(matches: &ArgMatches) -> Result<(), String> {
    let size = parse_int_value::<usize>(matches, SIZE_ARG_NAME, "points size")?.unwrap();
    let seed = parse_int_value::<u64>(matches, SEED_ARG_NAME, "seed")?;

    let points = generate_points(size, seed);

    let out_result = matches.get_one::<String>(OUT_RESULT_ARG_NAME).map(|path| create_file(path, "out result"));
    let out_buffer = create_write_buffer(out_result);

    write_csv_points(&points, out_buffer).map_err(|err| format!("cannot write points: '{err}'"))
}
