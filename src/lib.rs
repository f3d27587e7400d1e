pub mod geometry;
pub mod sampling;
mod runner;
mod scene;
mod tally;

pub use crate::runner::{BenchReport, BenchSettings, NUM_RAYS, NUM_TRIANGLES, run};
pub use scene::{Scene, SceneError};
pub use tally::Tally;
