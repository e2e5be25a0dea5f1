use glam::{Mat4, Vec3};
use rand::Rng;

use crate::math::{yaw_towards, CurveSample};

pub const HEIGHT_BASE: f32 = 10.0;
pub const HEIGHT_STEP: f32 = 4.0;
pub const HEIGHT_STEPS: u32 = 10;
pub const WIDTH_BASE: f32 = 4.0;
pub const WIDTH_STEPS: u32 = 5;

/// One building placed beside the road
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Building {
    pub index: usize,
    /// +1 to the right of the road, -1 to the left
    pub side: f32,
    pub width: f32,
    pub height: f32,
    /// Maps the unit cube onto the building volume
    pub transform: Mat4,
}

/// Even-indexed buildings go on the right, odd on the left
pub fn side_for(index: usize) -> f32 {
    if index % 2 == 0 {
        1.0
    } else {
        -1.0
    }
}

/// Height in 10..=46 in steps of 4, then width in 4..=8.
/// The two draws happen in that order.
pub fn random_dimensions<R: Rng + ?Sized>(rng: &mut R) -> (f32, f32) {
    let height = HEIGHT_BASE + rng.gen_range(0..HEIGHT_STEPS) as f32 * HEIGHT_STEP;
    let width = WIDTH_BASE + rng.gen_range(0..WIDTH_STEPS) as f32;
    (height, width)
}

/// Places a `width x height x width` box with its base on the ground, its
/// centre `road_half_width + width` from the road centre line and its +Z face
/// turned along the direction of travel.
pub fn place_building(
    index: usize,
    anchor: &CurveSample,
    road_half_width: f32,
    width: f32,
    height: f32,
) -> Building {
    let side = side_for(index);
    let offset = road_half_width + width;
    let centre = anchor.position + anchor.normal * side * offset + Vec3::new(0.0, height / 2.0, 0.0);

    let transform = Mat4::from_translation(centre)
        * Mat4::from_rotation_y(yaw_towards(anchor.tangent))
        * Mat4::from_scale(Vec3::new(width, height, width));

    Building {
        index,
        side,
        width,
        height,
        transform,
    }
}

impl Building {
    pub fn centre(&self) -> Vec3 {
        self.transform.w_axis.truncate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::CubicBezier;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn anchor() -> CurveSample {
        CubicBezier::road().sample(20).next().unwrap()
    }

    #[test]
    fn test_side_alternates() {
        assert_eq!(side_for(0), 1.0);
        assert_eq!(side_for(1), -1.0);
        assert_eq!(side_for(2), 1.0);
        assert_eq!(side_for(19), -1.0);
    }

    #[test]
    fn test_random_dimensions_in_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..500 {
            let (height, width) = random_dimensions(&mut rng);
            assert!((10.0..=46.0).contains(&height));
            assert_eq!((height - 10.0) % 4.0, 0.0);
            assert!((4.0..=8.0).contains(&width));
            assert_eq!(width.fract(), 0.0);
        }
    }

    #[test]
    fn test_random_dimensions_reach_both_extremes() {
        let mut rng = StdRng::seed_from_u64(7);
        let draws: Vec<(f32, f32)> = (0..2000).map(|_| random_dimensions(&mut rng)).collect();

        assert!(draws.iter().any(|&(h, _)| h == 10.0));
        assert!(draws.iter().any(|&(h, _)| h == 46.0));
        assert!(draws.iter().any(|&(_, w)| w == 4.0));
        assert!(draws.iter().any(|&(_, w)| w == 8.0));
    }

    #[test]
    fn test_building_rests_on_ground() {
        let building = place_building(0, &anchor(), 5.0, 6.0, 22.0);
        assert_eq!(building.centre().y, 11.0);
    }

    #[test]
    fn test_building_offset_from_road() {
        // At t = 0 the road runs along +X, so the right-hand normal is +Z
        let right = place_building(0, &anchor(), 5.0, 6.0, 22.0);
        let left = place_building(1, &anchor(), 5.0, 6.0, 22.0);
        assert!((right.centre().z - 11.0).abs() < 1e-4);
        assert!((left.centre().z + 11.0).abs() < 1e-4);
    }

    #[test]
    fn test_building_faces_along_road() {
        let building = place_building(0, &anchor(), 5.0, 4.0, 10.0);
        // Local +Z (the window face) maps onto the tangent direction, scaled by width
        let face = building.transform.transform_vector3(Vec3::Z);
        assert!((face.normalize() - Vec3::X).length() < 1e-5);
        assert!((face.length() - 4.0).abs() < 1e-4);
    }
}
