//! Generation of synthetic point sets.

#[cfg(test)]
#[path = "../../tests/unit/extensions/generate_test.rs"]
mod generate_test;

use geonear_core::prelude::*;
use rand::prelude::*;
use rand::rngs::SmallRng;

/// Generates a pseudo random point set of the given size with coordinates spread over the
/// whole globe. The same seed produces the same point set.
pub fn generate_points(size: usize, seed: Option<u64>) -> Vec<GeoPoint> {
    let mut rng = match seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    };

    (1..=size)
        .map(|idx| {
            let latitude = rng.gen_range(-90.0..90.0);
            let longitude = rng.gen_range(-180.0..180.0);

            GeoPoint::new(&format!("city_{idx}"), &format!("region_{}", (idx - 1) % 5 + 1), latitude, longitude)
        })
        .collect()
}
