use glam::{Mat3, Mat4, Vec3};

/// Yaw (rotation about +Y) that turns local +Z to face `direction`
pub fn yaw_towards(direction: Vec3) -> f32 {
    direction.x.atan2(direction.z)
}

/// Rotation whose local -Z axis points along `forward`, with +Y kept up.
/// This is the inverse of a right-handed look-at view matrix from the origin.
pub fn look_rotation(forward: Vec3) -> Mat4 {
    Mat4::look_at_rh(Vec3::ZERO, forward, Vec3::Y).inverse()
}

/// Inverse-transpose of the upper 3x3, for transforming normals under
/// non-uniform scale
pub fn normal_matrix(model: &Mat4) -> Mat3 {
    Mat3::from_mat4(*model).inverse().transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_yaw_towards_axes() {
        assert_relative_eq!(yaw_towards(Vec3::Z), 0.0);
        assert_relative_eq!(yaw_towards(Vec3::X), std::f32::consts::FRAC_PI_2);
        assert_relative_eq!(yaw_towards(-Vec3::X), -std::f32::consts::FRAC_PI_2);
    }

    #[test]
    fn test_yaw_rotation_maps_z_onto_direction() {
        let direction = Vec3::new(1.0, 0.0, 1.0).normalize();
        let rotated = Mat4::from_rotation_y(yaw_towards(direction)).transform_vector3(Vec3::Z);
        assert_relative_eq!(rotated.x, direction.x, epsilon = 1e-6);
        assert_relative_eq!(rotated.z, direction.z, epsilon = 1e-6);
    }

    #[test]
    fn test_look_rotation_maps_negative_z_to_forward() {
        let forward = Vec3::new(0.6, 0.0, 0.8);
        let mapped = look_rotation(forward).transform_vector3(-Vec3::Z);
        assert_relative_eq!(mapped.x, forward.x, epsilon = 1e-5);
        assert_relative_eq!(mapped.y, forward.y, epsilon = 1e-5);
        assert_relative_eq!(mapped.z, forward.z, epsilon = 1e-5);
    }

    #[test]
    fn test_normal_matrix_undoes_non_uniform_scale() {
        let model = Mat4::from_scale(Vec3::new(2.0, 4.0, 1.0));
        let n = normal_matrix(&model) * Vec3::Y;
        assert_relative_eq!(n.y, 0.25);
        assert_relative_eq!(n.x, 0.0);
    }
}
