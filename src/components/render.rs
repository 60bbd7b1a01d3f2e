use bevy::prelude::*;
use nalgebra::Matrix4;

/// World transform the renderer draws an entity with, refreshed every tick.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct WorldMatrix(pub Matrix4<f64>);

impl Default for WorldMatrix {
    fn default() -> Self {
        Self(Matrix4::identity())
    }
}

impl WorldMatrix {
    /// Single precision copy in bevy's column-major layout.
    pub fn to_mat4(&self) -> Mat4 {
        let mut cols = [0.0f32; 16];
        for (dst, src) in cols.iter_mut().zip(self.0.iter()) {
            *dst = *src as f32;
        }
        Mat4::from_cols_array(&cols)
    }

    pub fn to_transform(&self) -> Transform {
        Transform::from_matrix(self.to_mat4())
    }
}

/// Mirrors [`WorldMatrix`] into bevy's `Transform` for hosts that render with bevy.
pub fn sync_transform_system(mut query: Query<(&WorldMatrix, &mut Transform), Changed<WorldMatrix>>) {
    for (world, mut transform) in query.iter_mut() {
        *transform = world.to_transform();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector3;

    #[test]
    fn test_to_transform_keeps_translation_and_scale() {
        let matrix = Matrix4::new_translation(&Vector3::new(1.0, 2.0, 3.0)) * Matrix4::new_scaling(0.5);
        let transform = WorldMatrix(matrix).to_transform();

        assert!((transform.translation - Vec3::new(1.0, 2.0, 3.0)).length() < 1e-6);
        assert!((transform.scale - Vec3::splat(0.5)).length() < 1e-6);
    }
}
