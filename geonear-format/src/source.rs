//! Reads and writes a simple csv point source format.

#[cfg(test)]
#[path = "../tests/unit/source_test.rs"]
mod source_test;

use crate::FormatError;
use geonear_core::prelude::*;
use std::io::{BufReader, Read, Write};

/// Reads points from a csv source with four fields per record in fixed order: name,
/// region, latitude, longitude. The first record is a header and is skipped regardless of
/// its content; blank records are skipped. A record with missing fields or a non-numeric
/// coordinate aborts the whole read, no partial point list is returned.
pub fn read_csv_points<R: Read>(reader: BufReader<R>) -> Result<Vec<GeoPoint>, FormatError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut points = vec![];

    for entry in csv_reader.deserialize::<(String, String, String, String)>() {
        let (name, region, latitude, longitude) = entry.map_err(|err| match err.kind() {
            csv::ErrorKind::Io(_) => FormatError::new(
                "E0001".to_string(),
                "cannot read point source".to_string(),
                format!("check source availability: '{err}'"),
            ),
            _ => create_record_error(format!("{err}")),
        })?;

        let latitude = parse_coordinate(latitude.trim(), &name, "latitude")?;
        // the source is known to carry embedded whitespace in longitude values
        let longitude = parse_coordinate(&longitude.replace(' ', ""), &name, "longitude")?;

        points.push(GeoPoint::new(&name, &region, latitude, longitude));
    }

    Ok(points)
}

/// Writes points as csv with a header record, readable back by [`read_csv_points`].
pub fn write_csv_points<W: Write>(points: &[GeoPoint], writer: W) -> Result<(), FormatError> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(["name", "region", "latitude", "longitude"])
        .map_err(|err| create_sink_error(format!("{err}")))?;

    for point in points {
        let latitude = point.latitude.to_string();
        let longitude = point.longitude.to_string();

        csv_writer
            .write_record([point.name.as_str(), point.region.as_str(), latitude.as_str(), longitude.as_str()])
            .map_err(|err| create_sink_error(format!("{err}")))?;
    }

    csv_writer.flush().map_err(|err| create_sink_error(format!("{err}")))
}

fn parse_coordinate(value: &str, point_name: &str, field: &str) -> Result<f64, FormatError> {
    value
        .parse::<f64>()
        .map_err(|err| create_record_error(format!("bad {field} of '{point_name}': '{err}'")))
}

fn create_record_error(details: String) -> FormatError {
    FormatError::new_with_details(
        "E0002".to_string(),
        "cannot read point record".to_string(),
        "check record fields and coordinates".to_string(),
        details,
    )
}

fn create_sink_error(details: String) -> FormatError {
    FormatError::new_with_details(
        "E0004".to_string(),
        "cannot write point source".to_string(),
        "check output destination".to_string(),
        details,
    )
}
