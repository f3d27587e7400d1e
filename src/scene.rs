use rand::Rng;
use thiserror::Error;

use crate::geometry::{Triangle, WorldPoint};

/// Triangle soup stored as a flat vertex buffer where every consecutive
/// triple of vertices is one triangle. Built once, then shared read-only
/// between the workers.
pub struct Scene {
    vertices: Vec<WorldPoint>,
}

impl Scene {
    /// Generates `triangle_count` triangles with every vertex component
    /// uniform in [-1, 1).
    pub fn random(triangle_count: usize, rng: &mut impl Rng) -> Scene {
        let vertices = (0..triangle_count * 3)
            .map(|_| random_vertex(rng))
            .collect();
        Scene { vertices }
    }

    pub fn from_vertices(vertices: Vec<WorldPoint>) -> Result<Scene, SceneError> {
        if vertices.len() % 3 != 0 {
            return Err(SceneError::IncompleteTriangle {
                vertex_count: vertices.len(),
            });
        }
        Ok(Scene { vertices })
    }

    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }

    pub fn triangles(&self) -> impl Iterator<Item = Triangle<WorldPoint>> + '_ {
        self.vertices
            .chunks_exact(3)
            .map(|chunk| Triangle::new(chunk[0], chunk[1], chunk[2]))
    }
}

fn random_vertex(rng: &mut impl Rng) -> WorldPoint {
    WorldPoint::new(
        rng.random::<f32>() * 2.0 - 1.0,
        rng.random::<f32>() * 2.0 - 1.0,
        rng.random::<f32>() * 2.0 - 1.0,
    )
}

#[derive(Debug, Error)]
pub enum SceneError {
    #[error("Vertex count {vertex_count} is not a multiple of 3")]
    IncompleteTriangle { vertex_count: usize },
}
