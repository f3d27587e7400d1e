use std::f32::consts::PI;

use rand::Rng;

use crate::geometry::{Ray, WorldPoint};

/// Samples a point uniformly on the unit sphere surface by inverse transform
/// sampling of the latitude.
pub fn random_sphere(rng: &mut impl Rng) -> WorldPoint {
    let r1: f32 = rng.random();
    let r2: f32 = rng.random();
    let lat = (2.0 * r1 - 1.0).acos() - PI / 2.0;
    let lon = 2.0 * PI * r2;

    WorldPoint::new(lat.cos() * lon.cos(), lat.cos() * lon.sin(), lat.sin())
}

/// Samples a chord of the unit sphere: origin and target both on the
/// surface, direction normalized between them. Coincident samples would
/// yield a non-finite direction; such a ray fails every intersection test
/// and tallies as all misses.
pub fn sample_ray(rng: &mut impl Rng) -> Ray {
    let origin = random_sphere(rng);
    let target = random_sphere(rng);
    Ray::new(origin, target - origin)
}
