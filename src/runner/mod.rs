mod machinery;
mod worker;

pub use machinery::{BenchReport, run};

use std::num::NonZeroUsize;

use bon::Builder;

/// Rays cast by every worker in the full benchmark.
pub const NUM_RAYS: u32 = 400;
/// Triangles in the generated scene.
pub const NUM_TRIANGLES: usize = 1_000_000;

#[derive(Copy, Clone, Debug, Builder)]
pub struct BenchSettings {
    /// Number of parallel worker threads.
    #[builder(default = NonZeroUsize::MIN)]
    pub workers: NonZeroUsize,

    #[builder(default = NUM_RAYS)]
    pub rays_per_worker: u32,

    /// Per-worker rngs are derived from this seed; OS entropy when `None`.
    pub seed: Option<u64>,
}
