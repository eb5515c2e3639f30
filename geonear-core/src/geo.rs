#[cfg(test)]
#[path = "../tests/unit/geo_test.rs"]
mod geo_test;

/// An Earth radius used by the distance formula, in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Gets the great-circle distance between two points using the haversine formula.
///
/// Coordinates are degrees, the result is kilometers. The function is pure and defined for
/// all finite inputs; callers own the range of the coordinates they pass in.
pub fn haversine_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1 = degree_rad(lat1);
    let lat2 = degree_rad(lat2);

    let d_lat = lat2 - lat1;
    let d_lon = degree_rad(lon2) - degree_rad(lon1);

    let a = (d_lat / 2.).sin() * (d_lat / 2.).sin()
        + lat1.cos() * lat2.cos() * (d_lon / 2.).sin() * (d_lon / 2.).sin();
    let c = 2. * a.sqrt().asin();

    EARTH_RADIUS_KM * c
}

/// Converts degrees to radians.
#[inline(always)]
fn degree_rad(degrees: f64) -> f64 {
    std::f64::consts::PI * degrees / 180.
}
