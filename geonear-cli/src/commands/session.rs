use super::*;
use crate::extensions::session::{Session, SessionError, SessionPaths};
use inquire::Select;
use std::fmt;

pub const SOURCE_ARG_NAME: &str = "source";
pub const STORAGE_ARG_NAME: &str = "storage";
pub const REPORT_ARG_NAME: &str = "out-report";

#[derive(Clone, Copy)]
enum MenuAction {
    Load,
    Persist,
    Compute,
    Quit,
}

impl fmt::Display for MenuAction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let description = match self {
            MenuAction::Load => "load points from the csv source",
            MenuAction::Persist => "persist points into the json storage",
            MenuAction::Compute => "compute the closest pair and write the distance report",
            MenuAction::Quit => "quit",
        };

        write!(f, "{description}")
    }
}

pub fn get_session_app() -> Command {
    Command::new("session")
        .about("Runs an interactive session with sequentially gated load, persist and compute steps")
        .arg(
            Arg::new(SOURCE_ARG_NAME)
                .help("Sets the csv file with the point source")
                .long(SOURCE_ARG_NAME)
                .default_value("points.csv"),
        )
        .arg(
            Arg::new(STORAGE_ARG_NAME)
                .help("Sets the json file for the persisted point list")
                .long(STORAGE_ARG_NAME)
                .default_value("points.json"),
        )
        .arg(
            Arg::new(REPORT_ARG_NAME)
                .help("Sets the csv file for the pairwise distance report")
                .long(REPORT_ARG_NAME)
                .default_value("distances.csv"),
        )
}

pub fn run_session(matches: &ArgMatches) -> Result<(), String> {
    let paths = SessionPaths {
        source: matches.get_one::<String>(SOURCE_ARG_NAME).unwrap().clone(),
        storage: matches.get_one::<String>(STORAGE_ARG_NAME).unwrap().clone(),
        report: matches.get_one::<String>(REPORT_ARG_NAME).unwrap().clone(),
    };
    let mut session = Session::default();

    loop {
        let actions = vec![MenuAction::Load, MenuAction::Persist, MenuAction::Compute, MenuAction::Quit];
        let action = Select::new("choose the next step:", actions)
            .prompt()
            .map_err(|err| format!("cannot read menu choice: '{err}'"))?;

        let step = match action {
            MenuAction::Load => session.load(&paths).map(|points| {
                points.iter().for_each(print_point);
                println!("{} points loaded from '{}'", points.len(), paths.source);
            }),
            MenuAction::Persist => session.persist(&paths).map(|()| {
                println!("points persisted into '{}'", paths.storage);
            }),
            MenuAction::Compute => session.compute(&paths).map(|closest| {
                println!("distance report written into '{}'", paths.report);
                match closest {
                    Some(pair) => print_closest_pair(&pair.first, &pair.second, pair.distance_km),
                    None => println!("not enough points to compare"),
                }
            }),
            MenuAction::Quit => return Ok(()),
        };

        match step {
            Ok(()) => {}
            Err(SessionError::NotReady(message)) => println!("{message}"),
            Err(err) => return Err(err.to_string()),
        }
    }
}
