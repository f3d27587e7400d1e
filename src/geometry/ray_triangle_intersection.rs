use crate::geometry::{EPSILON, FloatType, Ray, WorldPoint};

use super::Triangle;

impl Triangle<WorldPoint> {
    /// Calculates ray intersection with the (single sided) triangle.
    /// Returns the distance along the ray, or `None` when the triangle is
    /// back-facing, near-parallel, or the intersection falls outside the
    /// barycentric bounds.
    /// Adapted from https://en.wikipedia.org/wiki/M%C3%B6ller%E2%80%93Trumbore_intersection_algorithm
    pub fn intersect(&self, ray: &Ray) -> Option<FloatType> {
        let e1 = self[1] - self[0];
        let e2 = self[2] - self[0];

        let pvec = ray.direction.cross(&e2);
        let det = e1.dot(&pvec);

        // Single sided: a negative determinant (back-facing winding) is
        // culled together with the near-parallel case.
        if det < EPSILON {
            return None;
        }

        let inv_det = 1.0 / det;
        let tvec = ray.origin - self[0];
        let u = tvec.dot(&pvec) * inv_det;
        if u < 0.0 || u > 1.0 {
            return None;
        }

        let qvec = tvec.cross(&e1);
        let v = ray.direction.dot(&qvec) * inv_det;
        if v < 0.0 || u + v > 1.0 {
            return None;
        }

        // May be negative for intersections behind the origin; classifying
        // those is left to the caller.
        Some(e2.dot(&qvec) * inv_det)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::geometry::WorldVector;
    use assert2::{assert, let_assert};
    use test_case::test_case;

    /// Triangle in the z = 0 plane whose normal points towards +z.
    fn triangle() -> Triangle<WorldPoint> {
        Triangle::new(
            [-1.0, -1.0, 0.0].into(),
            [1.0, -1.0, 0.0].into(),
            [0.0, 1.0, 0.0].into(),
        )
    }

    #[test]
    fn front_face_hit_through_centroid() {
        let t = triangle();
        let centroid = WorldPoint::new(0.0, -1.0 / 3.0, 0.0);
        let origin = WorldPoint::new(0.0, -1.0 / 3.0, 2.0);
        let ray = Ray::new(origin, centroid - origin);

        let_assert!(Some(distance) = t.intersect(&ray));
        assert!((distance - 2.0).abs() < 1e-5);
        assert!((ray.point_at(distance) - centroid).norm() < 1e-5);
    }

    #[test]
    fn back_face_is_culled() {
        let ray = Ray::new([0.0, 0.0, -1.0].into(), [0.0, 0.0, 1.0].into());
        assert!(triangle().intersect(&ray) == None);
    }

    #[test]
    fn parallel_ray_is_culled() {
        let ray = Ray::new([0.0, 0.0, 1.0].into(), [1.0, 0.0, 0.0].into());
        assert!(triangle().intersect(&ray) == None);
    }

    #[test_case( 5.0,  0.0 ; "u_above_one")]
    #[test_case(-5.0,  0.0 ; "u_below_zero")]
    #[test_case( 2.5,  5.0 ; "v_above_one")]
    #[test_case(-2.0, -5.0 ; "v_below_zero")]
    #[test_case( 0.35, 0.9 ; "u_plus_v_above_one")]
    fn barycentric_miss(x: f32, y: f32) {
        let ray = Ray::new(
            WorldPoint::new(x, y, 1.0),
            WorldVector::new(0.0, 0.0, -1.0),
        );
        assert!(triangle().intersect(&ray) == None);
    }

    /// An intersection behind the ray origin still passes the barycentric
    /// tests and comes back as a plain negative distance.
    #[test]
    fn intersection_behind_origin_is_negative_distance() {
        let ray = Ray::new([0.0, 0.0, -1.0].into(), [0.0, 0.0, -1.0].into());

        let_assert!(Some(distance) = triangle().intersect(&ray));
        assert!((distance - -1.0).abs() < 1e-5);
    }
}
