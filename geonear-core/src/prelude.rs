//! This module reimports commonly used types.

pub use crate::models::GeoPoint;

pub use crate::geo::EARTH_RADIUS_KM;
pub use crate::geo::haversine_distance;

pub use crate::scan::PairDistance;
pub use crate::scan::PairSink;
pub use crate::scan::get_closest_pair;
pub use crate::scan::pairwise_distances;

pub use crate::utils::GenericError;
pub use crate::utils::GenericResult;
