use bevy::prelude::*;
use nalgebra::Vector3;

use crate::utils::{SimError, SimResult, CITY_TILE_SIZE};

/// World-space vertices of the static level geometry.
///
/// Built once when the level loads and only read afterwards.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct ObstaclePoints {
    points: Vec<Vector3<f64>>,
}

impl ObstaclePoints {
    pub fn new(points: Vec<Vector3<f64>>) -> SimResult<Self> {
        if let Some(index) = points
            .iter()
            .position(|p| !p.iter().all(|c| c.is_finite()))
        {
            return Err(SimError::InvalidObstacle(format!(
                "point {} is not finite: {:?}",
                index, points[index]
            )));
        }
        Ok(Self { points })
    }

    /// Flattens mesh vertex arrays, each moved by its mesh's translation.
    pub fn from_meshes(meshes: &[(Vec<Vector3<f64>>, Vector3<f64>)]) -> SimResult<Self> {
        let points = meshes
            .iter()
            .flat_map(|(vertices, translation)| vertices.iter().map(move |v| v + translation))
            .collect();
        Self::new(points)
    }

    /// The same block of vertices repeated on a 2x2 grid of city tiles.
    pub fn city_tiles(tile_vertices: &[Vector3<f64>]) -> SimResult<Self> {
        let meshes: Vec<_> = city_tile_offsets()
            .into_iter()
            .map(|offset| (tile_vertices.to_vec(), offset))
            .collect();
        Self::from_meshes(&meshes)
    }

    pub fn points(&self) -> &[Vector3<f64>] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

pub fn city_tile_offsets() -> [Vector3<f64>; 4] {
    [
        Vector3::new(0.0, 0.0, 0.0),
        Vector3::new(CITY_TILE_SIZE, 0.0, 0.0),
        Vector3::new(0.0, 0.0, CITY_TILE_SIZE),
        Vector3::new(CITY_TILE_SIZE, 0.0, CITY_TILE_SIZE),
    ]
}
