use glam::{Mat4, Vec3};

use super::lighting::PointLight;
use crate::math::CurveSample;

pub const POST_HEIGHT: f32 = 6.0;
pub const POST_THICKNESS: f32 = 0.2;
pub const LAMP_HEIGHT: f32 = 6.5;
pub const LAMP_SIZE: f32 = 0.5;
pub const HOOD_LIFT: f32 = 0.3;

/// Post, lamp and hood for one streetlight, plus the light it casts
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Streetlight {
    pub post: Mat4,
    pub lamp: Mat4,
    pub hood: Mat4,
    pub light: PointLight,
}

/// Whether building `index` gets a streetlight, given how many are placed
pub fn wants_streetlight(index: usize, every: usize, placed: usize, cap: usize) -> bool {
    index % every.max(1) == 0 && placed < cap
}

/// Builds a streetlight standing `distance` from the road centre on `side`
pub fn place_streetlight(anchor: &CurveSample, side: f32, distance: f32) -> Streetlight {
    let base = anchor.position + anchor.normal * side * distance;

    let post = Mat4::from_translation(base + Vec3::new(0.0, POST_HEIGHT / 2.0, 0.0))
        * Mat4::from_scale(Vec3::new(POST_THICKNESS, POST_HEIGHT, POST_THICKNESS));

    let lamp_position = base + Vec3::new(0.0, LAMP_HEIGHT, 0.0);
    let lamp = Mat4::from_translation(lamp_position) * Mat4::from_scale(Vec3::splat(LAMP_SIZE));

    let hood = Mat4::from_translation(lamp_position + Vec3::new(0.0, HOOD_LIFT, 0.0))
        * Mat4::from_scale(Vec3::new(0.8, 0.1, 0.8));

    Streetlight {
        post,
        lamp,
        hood,
        light: PointLight::streetlight(lamp_position),
    }
}
