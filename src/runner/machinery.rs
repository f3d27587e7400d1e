use std::{
    sync::mpsc,
    thread,
    time::{Duration, Instant},
};

use crate::{scene::Scene, tally::Tally};

use super::{BenchSettings, worker::Worker};

pub struct BenchReport {
    pub tally: Tally,
    pub elapsed: Duration,
    /// Ray-triangle tests performed, `rays_per_worker * triangles * workers`.
    pub tests: u64,
}

impl BenchReport {
    pub fn mtests_per_second(&self) -> f64 {
        self.tests as f64 / self.elapsed.as_secs_f64() / 1e6
    }
}

/// Fans the benchmark out to `settings.workers` threads and blocks until
/// every one of them has reported back.
///
/// Each worker sends exactly one tally over the channel; the coordinator
/// merges them in arrival order (the merge is commutative, so any order
/// gives the same totals) and calls `worker_finished_callback` once per
/// received result. Elapsed time covers dispatch through aggregation, not
/// scene generation.
pub fn run(
    scene: &Scene,
    settings: &BenchSettings,
    mut worker_finished_callback: impl FnMut(&Tally),
) -> anyhow::Result<BenchReport> {
    let workers = settings.workers.get();
    let cores = core_affinity::get_core_ids().unwrap_or_default();

    let start = Instant::now();

    let tally = thread::scope(|scope| -> anyhow::Result<Tally> {
        let (sender, receiver) = mpsc::channel();

        for worker_id in 0..workers {
            let sender = sender.clone();
            let core = if cores.is_empty() {
                None
            } else {
                Some(cores[worker_id % cores.len()])
            };
            let seed = settings.seed;
            let ray_count = settings.rays_per_worker;

            thread::Builder::new()
                .name(format!("worker{worker_id}"))
                .spawn_scoped(scope, move || {
                    if let Some(core) = core {
                        core_affinity::set_for_current(core);
                    }

                    let mut worker = Worker::new(worker_id, seed);
                    // Exactly one result per worker, no partial results.
                    let _ = sender.send(worker.run(scene, ray_count));
                })?;
        }
        drop(sender);

        let mut tally = Tally::default();
        for _i in 0..workers {
            let result = receiver.recv()?;
            worker_finished_callback(&result);
            tally = tally.merge(&result);
        }
        Ok(tally)
    })?;

    let elapsed = start.elapsed();
    let tests =
        settings.rays_per_worker as u64 * scene.triangle_count() as u64 * workers as u64;

    Ok(BenchReport {
        tally,
        elapsed,
        tests,
    })
}
