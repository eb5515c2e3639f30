#[cfg(test)]
#[path = "../tests/unit/scan_test.rs"]
mod scan_test;

use crate::geo::haversine_distance;
use crate::models::GeoPoint;
use crate::utils::GenericResult;

/// A distance between two points of the scanned collection, in kilometers.
#[derive(Clone, Debug)]
pub struct PairDistance<'a> {
    /// A pair point which comes earlier in collection order.
    pub first: &'a GeoPoint,
    /// A pair point which comes later in collection order.
    pub second: &'a GeoPoint,
    /// A great-circle distance between the two points.
    pub distance_km: f64,
}

/// Accepts pair distances produced by the scan, one at a time.
pub trait PairSink {
    /// Writes a single pair distance. An error aborts the scan which produced it.
    fn write(&mut self, pair: &PairDistance) -> GenericResult<()>;
}

/// Lazily produces distances for all unordered point pairs: for each point, all points
/// which come later in collection order, in that nested order. A collection of `n` points
/// yields exactly `n * (n - 1) / 2` pairs, each unordered pair exactly once.
pub fn pairwise_distances(points: &[GeoPoint]) -> impl Iterator<Item = PairDistance<'_>> {
    points.iter().enumerate().flat_map(move |(idx, first)| {
        points[(idx + 1)..].iter().map(move |second| PairDistance {
            first,
            second,
            distance_km: haversine_distance(
                first.latitude,
                first.longitude,
                second.latitude,
                second.longitude,
            ),
        })
    })
}

/// Scans all unordered point pairs and returns the pair with the minimal distance.
///
/// Every produced pair is streamed to the sink before the minimum comparison, so a report
/// gets all `n * (n - 1) / 2` rows in enumeration order. A sink failure aborts the scan
/// immediately. The minimum uses a strict less-than comparison: on ties the pair
/// encountered first in enumeration order is kept. Collections with less than two points
/// have no closest pair.
pub fn get_closest_pair<'a>(
    points: &'a [GeoPoint],
    mut sink: Option<&mut dyn PairSink>,
) -> GenericResult<Option<PairDistance<'a>>> {
    let mut closest: Option<PairDistance<'a>> = None;

    for pair in pairwise_distances(points) {
        if let Some(sink) = sink.as_mut() {
            sink.write(&pair)?;
        }

        if closest.as_ref().is_none_or(|min| pair.distance_km < min.distance_km) {
            closest = Some(pair);
        }
    }

    Ok(closest)
}
