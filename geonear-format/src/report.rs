//! Writes the pairwise distance report in csv format.

#[cfg(test)]
#[path = "../tests/unit/report_test.rs"]
mod report_test;

use crate::FormatError;
use geonear_core::prelude::*;
use std::io::Write;

/// A report sink which writes pair distances as csv rows: both point labels and the
/// distance rendered with exactly two decimal digits.
pub struct DistanceReportWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> DistanceReportWriter<W> {
    /// Creates a new report writer and writes the header record.
    pub fn new(writer: W) -> GenericResult<Self> {
        let mut writer = csv::Writer::from_writer(writer);
        writer.write_record(["first", "second", "distance"]).map_err(create_write_error)?;

        Ok(Self { writer })
    }

    /// Flushes buffered rows into the underlying writer.
    pub fn flush(&mut self) -> GenericResult<()> {
        self.writer.flush().map_err(GenericError::from)
    }
}

impl<W: Write> PairSink for DistanceReportWriter<W> {
    fn write(&mut self, pair: &PairDistance) -> GenericResult<()> {
        let distance = format!("{:.2}", pair.distance_km);

        self.writer
            .write_record([pair.first.to_string(), pair.second.to_string(), distance])
            .map_err(create_write_error)
    }
}

fn create_write_error(err: csv::Error) -> GenericError {
    FormatError::new(
        "E0004".to_string(),
        "cannot write distance report".to_string(),
        format!("check report destination: '{err}'"),
    )
    .to_string()
    .into()
}
