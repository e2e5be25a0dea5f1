use glam::Vec3;

/// Colour and shininess for one lit material
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub color: Vec3,
    pub shininess: f32,
}

impl Material {
    pub const fn new(color: Vec3, shininess: f32) -> Self {
        Self { color, shininess }
    }
}

/// Fixed colours of the night city
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub road: Material,
    pub building: Material,
    pub dark_window: Material,
    pub streetlight: Material,
    pub car: Material,
    pub lit_window: Vec3,
    pub lamp: Vec3,
    pub moon: Vec3,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            road: Material::new(Vec3::splat(0.15), 256.0),
            building: Material::new(Vec3::new(0.2, 0.2, 0.25), 32.0),
            dark_window: Material::new(Vec3::splat(0.05), 32.0),
            streetlight: Material::new(Vec3::splat(0.4), 32.0),
            car: Material::new(Vec3::new(0.1, 0.25, 0.6), 512.0),
            lit_window: Vec3::new(1.0, 0.9, 0.7),
            lamp: Vec3::new(1.0, 0.7, 0.3),
            moon: Vec3::new(0.9, 0.9, 1.0),
        }
    }
}
