use std::num::NonZeroUsize;

use clap::Parser;
use indicatif::ProgressBar;
use rand::{SeedableRng, rngs::SmallRng};
use raybench::{BenchSettings, NUM_RAYS, NUM_TRIANGLES, Scene, run};

/// Measures raw ray-triangle intersection throughput: casts random rays
/// against a random triangle soup from parallel workers and reports
/// millions of tests per second.
#[derive(Parser)]
#[command(name = "raybench", version)]
struct Args {
    /// Number of parallel worker threads
    #[arg(long = "nPar", default_value_t = NonZeroUsize::MIN)]
    n_par: NonZeroUsize,

    /// Seed for scene and ray generation; random when omitted
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut rng = match args.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    };
    let scene = Scene::random(NUM_TRIANGLES, &mut rng);

    let settings = BenchSettings::builder()
        .workers(args.n_par)
        .rays_per_worker(NUM_RAYS)
        .maybe_seed(args.seed)
        .build();

    let bar = ProgressBar::new(args.n_par.get() as u64);
    let report = run(&scene, &settings, |_| bar.inc(1))?;
    bar.finish_and_clear();

    println!("Hits: {}", report.tally.hits);
    println!(
        "Millions of tests per second: {:.2}",
        report.mtests_per_second()
    );

    Ok(())
}
