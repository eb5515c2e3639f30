//! An interactive session which loads, persists and analyzes a point set in sequentially
//! gated steps.

#[cfg(test)]
#[path = "../../tests/unit/extensions/session_test.rs"]
mod session_test;

use geonear_core::prelude::*;
use geonear_format::{DistanceReportWriter, deserialize_points, read_csv_points, serialize_points};
use std::fmt;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};

/// File locations used by one session.
pub struct SessionPaths {
    /// A csv file with the point source.
    pub source: String,
    /// A json file with the persisted point list.
    pub storage: String,
    /// A csv file with the pairwise distance report.
    pub report: String,
}

/// An error of a session step.
#[derive(Debug)]
pub enum SessionError {
    /// An earlier step must complete first; the message guides the user to it.
    NotReady(String),
    /// A step failed and the session cannot recover it.
    Failed(GenericError),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SessionError::NotReady(message) => write!(f, "{message}"),
            SessionError::Failed(err) => write!(f, "{err}"),
        }
    }
}

/// A closest pair finding which owns its points.
pub struct ClosestPair {
    /// A pair point which comes earlier in collection order.
    pub first: GeoPoint,
    /// A pair point which comes later in collection order.
    pub second: GeoPoint,
    /// A great-circle distance between the two points, in kilometers.
    pub distance_km: f64,
}

/// Holds the point set and the step completion flags of one interactive session.
///
/// Steps are gated sequentially: [`Session::persist`] requires a prior successful
/// [`Session::load`] and [`Session::compute`] requires a prior successful persist.
#[derive(Default)]
pub struct Session {
    points: Vec<GeoPoint>,
    loaded: bool,
    persisted: bool,
}

impl Session {
    /// Reads the point set from the csv source and keeps it for the next steps.
    pub fn load(&mut self, paths: &SessionPaths) -> Result<&[GeoPoint], SessionError> {
        let file = File::open(&paths.source).map_err(|err| {
            SessionError::Failed(format!("cannot open points file '{}': '{err}'", paths.source).into())
        })?;

        self.points = read_csv_points(BufReader::new(file))
            .map_err(|err| SessionError::Failed(err.to_string().into()))?;
        self.loaded = true;

        Ok(&self.points)
    }

    /// Persists the loaded point set into the json storage file.
    pub fn persist(&mut self, paths: &SessionPaths) -> Result<(), SessionError> {
        if !self.loaded {
            return Err(SessionError::NotReady("load points from the csv source first".to_string()));
        }

        let file = File::create(&paths.storage).map_err(|err| {
            SessionError::Failed(format!("cannot create storage file '{}': '{err}'", paths.storage).into())
        })?;
        let mut writer = BufWriter::new(file);

        serialize_points(&self.points, &mut writer)
            .map_err(|err| SessionError::Failed(err.to_string().into()))?;
        writer.flush().map_err(|err| SessionError::Failed(err.into()))?;
        self.persisted = true;

        Ok(())
    }

    /// Re-reads the persisted point list, writes the full pairwise distance report and
    /// returns the closest pair. Collections with less than two points have none.
    pub fn compute(&self, paths: &SessionPaths) -> Result<Option<ClosestPair>, SessionError> {
        if !self.persisted {
            return Err(SessionError::NotReady("persist points into the json storage first".to_string()));
        }

        let storage = File::open(&paths.storage).map_err(|err| {
            SessionError::Failed(format!("cannot open storage file '{}': '{err}'", paths.storage).into())
        })?;
        let points = deserialize_points(BufReader::new(storage))
            .map_err(|err| SessionError::Failed(err.to_string().into()))?;

        let report_file = File::create(&paths.report).map_err(|err| {
            SessionError::Failed(format!("cannot create report file '{}': '{err}'", paths.report).into())
        })?;
        let mut report = DistanceReportWriter::new(report_file).map_err(SessionError::Failed)?;

        let closest = get_closest_pair(&points, Some(&mut report)).map_err(SessionError::Failed)?;
        let closest = closest.map(|pair| ClosestPair {
            first: pair.first.clone(),
            second: pair.second.clone(),
            distance_km: pair.distance_km,
        });
        report.flush().map_err(SessionError::Failed)?;

        Ok(closest)
    }

    /// Returns true once points have been loaded from the csv source.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Returns true once the loaded points have been persisted into the json storage.
    pub fn is_persisted(&self) -> bool {
        self.persisted
    }
}
