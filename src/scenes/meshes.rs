use crate::types::Vertex;

/// Face normal and the four corners of each unit-cube face, counter-clockwise
/// when seen from outside
const FACES: [([f32; 3], [[f32; 3]; 4]); 6] = [
    ([0.0, 0.0, -1.0], [[0.5, -0.5, -0.5], [-0.5, -0.5, -0.5], [-0.5, 0.5, -0.5], [0.5, 0.5, -0.5]]),
    ([0.0, 0.0, 1.0], [[-0.5, -0.5, 0.5], [0.5, -0.5, 0.5], [0.5, 0.5, 0.5], [-0.5, 0.5, 0.5]]),
    ([-1.0, 0.0, 0.0], [[-0.5, -0.5, -0.5], [-0.5, -0.5, 0.5], [-0.5, 0.5, 0.5], [-0.5, 0.5, -0.5]]),
    ([1.0, 0.0, 0.0], [[0.5, -0.5, 0.5], [0.5, -0.5, -0.5], [0.5, 0.5, -0.5], [0.5, 0.5, 0.5]]),
    ([0.0, -1.0, 0.0], [[-0.5, -0.5, -0.5], [0.5, -0.5, -0.5], [0.5, -0.5, 0.5], [-0.5, -0.5, 0.5]]),
    ([0.0, 1.0, 0.0], [[-0.5, 0.5, 0.5], [0.5, 0.5, 0.5], [0.5, 0.5, -0.5], [-0.5, 0.5, -0.5]]),
];

pub const CUBE_VERTEX_COUNT: usize = 36;

/// Unit cube centred on the origin as a 36-vertex triangle list
pub fn unit_cube() -> Vec<Vertex> {
    FACES
        .iter()
        .flat_map(|(normal, c)| {
            [c[0], c[1], c[2], c[2], c[3], c[0]]
                .into_iter()
                .map(move |corner| Vertex::new(corner, *normal))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn test_cube_vertex_count() {
        assert_eq!(unit_cube().len(), CUBE_VERTEX_COUNT);
    }

    #[test]
    fn test_cube_fits_unit_bounds() {
        for v in unit_cube() {
            assert!(v.position.iter().all(|c| c.abs() == 0.5));
        }
    }

    #[test]
    fn test_winding_matches_normals() {
        for tri in unit_cube().chunks(3) {
            let a = Vec3::from_array(tri[0].position);
            let b = Vec3::from_array(tri[1].position);
            let c = Vec3::from_array(tri[2].position);
            let face = (b - a).cross(c - a).normalize();
            assert_eq!(face, Vec3::from_array(tri[0].normal));
        }
    }
}
