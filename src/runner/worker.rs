use rand::{SeedableRng, rngs::SmallRng};

use crate::{geometry::Ray, sampling, scene::Scene, tally::Tally};

pub struct Worker {
    rng: SmallRng,
}

impl Worker {
    pub fn new(worker_id: usize, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => SmallRng::seed_from_u64(seed.wrapping_add(worker_id as u64)),
            None => SmallRng::from_os_rng(),
        };
        Worker { rng }
    }

    /// Casts `ray_count` sampled rays against the whole scene and returns
    /// the combined tally.
    pub fn run(&mut self, scene: &Scene, ray_count: u32) -> Tally {
        let mut tally = Tally::default();
        for _i in 0..ray_count {
            let ray = sampling::sample_ray(&mut self.rng);
            Self::cast(scene, &ray, &mut tally);
        }
        tally
    }

    /// Tests one ray against every triangle. Only a non-negative
    /// intersection distance counts as a hit; an intersection behind the
    /// origin tallies as a miss like any other.
    pub fn cast(scene: &Scene, ray: &Ray, tally: &mut Tally) {
        for triangle in scene.triangles() {
            let hit = matches!(triangle.intersect(ray), Some(t) if t >= 0.0);
            tally.record(hit);
        }
    }
}
