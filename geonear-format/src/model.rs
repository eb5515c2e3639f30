//! Specifies logic to serialize/deserialize an ordered point list in json.

#[cfg(test)]
#[path = "../tests/unit/model_test.rs"]
mod model_test;

use crate::FormatError;
use geonear_core::prelude::*;
use serde::{Deserialize, Serialize};
use std::io::{BufReader, BufWriter, Read, Write};

/// A point representation in the json interchange format.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ApiPoint {
    /// A city name.
    pub name: String,
    /// A country or region name.
    pub region: String,
    /// A latitude in degrees.
    pub latitude: f64,
    /// A longitude in degrees.
    pub longitude: f64,
}

impl From<&GeoPoint> for ApiPoint {
    fn from(point: &GeoPoint) -> Self {
        Self {
            name: point.name.clone(),
            region: point.region.clone(),
            latitude: point.latitude,
            longitude: point.longitude,
        }
    }
}

impl From<ApiPoint> for GeoPoint {
    fn from(point: ApiPoint) -> Self {
        Self {
            name: point.name,
            region: point.region,
            latitude: point.latitude,
            longitude: point.longitude,
        }
    }
}

/// Serializes a point list into json, preserving collection order.
pub fn serialize_points<W: Write>(
    points: &[GeoPoint],
    writer: &mut BufWriter<W>,
) -> Result<(), FormatError> {
    let api_points = points.iter().map(ApiPoint::from).collect::<Vec<_>>();

    serde_json::to_writer_pretty(writer, &api_points).map_err(|err| {
        FormatError::new(
            "E0003".to_string(),
            "cannot serialize points".to_string(),
            format!("check output stream: '{err}'"),
        )
    })
}

/// Deserializes a point list in json format from `BufReader`.
pub fn deserialize_points<R: Read>(reader: BufReader<R>) -> Result<Vec<GeoPoint>, FormatError> {
    let api_points: Vec<ApiPoint> = serde_json::from_reader(reader).map_err(|err| {
        FormatError::new(
            "E0003".to_string(),
            "cannot deserialize points".to_string(),
            format!("check input json: '{err}'"),
        )
    })?;

    Ok(api_points.into_iter().map(GeoPoint::from).collect())
}
