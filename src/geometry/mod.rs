mod ray_triangle_intersection;
mod triangle;

pub use triangle::Triangle;

pub type FloatType = f32;

pub const EPSILON: FloatType = 1e-6;

pub type WorldPoint = nalgebra::Point3<FloatType>;
pub type WorldVector = nalgebra::Vector3<FloatType>;

#[derive(Copy, Clone, Debug)]
pub struct Ray {
    pub origin: WorldPoint,
    /// Normalized direction of the ray
    pub direction: WorldVector,
}

impl Ray {
    /// Normalizes the direction. A zero direction produces a non-finite one;
    /// every intersection test against such a ray fails its comparisons and
    /// counts as a miss.
    pub fn new(origin: WorldPoint, direction: WorldVector) -> Ray {
        Ray {
            origin,
            direction: direction.normalize(),
        }
    }

    pub fn point_at(&self, distance: FloatType) -> WorldPoint {
        self.origin + self.direction * distance
    }
}
