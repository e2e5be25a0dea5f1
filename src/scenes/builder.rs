use glam::{Mat4, Vec3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::buildings::{place_building, random_dimensions};
use super::lighting::PointLight;
use super::road::build_road;
use super::streetlights::{place_streetlight, wants_streetlight};
use super::windows::{tile_windows, WindowTiles};
use crate::config::{CityConfig, RoadConfig, SceneConfig};
use crate::math::CubicBezier;
use crate::types::Vertex;

pub const MOON_POSITION: Vec3 = Vec3::new(20.0, 50.0, 20.0);
pub const MOON_SIZE: f32 = 5.0;

/// The static world, built once and read-only afterwards
#[derive(Debug, Clone)]
pub struct CityScene {
    pub curve: CubicBezier,
    pub road: Vec<Vertex>,
    pub buildings: Vec<Mat4>,
    pub lit_windows: Vec<Mat4>,
    pub dark_windows: Vec<Mat4>,
    pub streetlight_posts: Vec<Mat4>,
    pub streetlight_lamps: Vec<Mat4>,
    pub streetlight_hoods: Vec<Mat4>,
    pub point_lights: Vec<PointLight>,
    pub moon: Mat4,
}

impl CityScene {
    pub fn window_count(&self) -> usize {
        self.lit_windows.len() + self.dark_windows.len()
    }

    pub fn streetlight_count(&self) -> usize {
        self.streetlight_posts.len()
    }
}

/// Assembles a `CityScene` from the road curve and a seeded RNG
#[derive(Debug, Clone)]
pub struct SceneBuilder {
    road: RoadConfig,
    city: CityConfig,
    seed: u64,
}

impl SceneBuilder {
    pub fn new(config: &SceneConfig) -> Self {
        Self {
            road: config.road.clone(),
            city: config.city.clone(),
            seed: config.seed,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_curve(mut self, curve: CubicBezier) -> Self {
        self.road.curve = curve;
        self
    }

    pub fn with_buildings(mut self, count: usize) -> Self {
        self.city.buildings = count;
        self
    }

    pub fn build(&self) -> CityScene {
        let mut rng = StdRng::seed_from_u64(self.seed);
        self.build_with_rng(&mut rng)
    }

    /// Per building the RNG is drawn for height, width, then each window in
    /// row-major order, so a given seed always yields the same city.
    pub fn build_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> CityScene {
        let curve = self.road.curve;
        let road = build_road(&curve, self.road.segments, self.road.half_width);

        let mut buildings = Vec::with_capacity(self.city.buildings);
        let mut windows = WindowTiles::default();
        let mut streetlights = Vec::new();

        for index in 0..self.city.buildings {
            let anchor = curve.sample_at(index as f32 / self.city.buildings as f32);

            let (height, width) = random_dimensions(rng);
            let building = place_building(index, &anchor, self.road.half_width, width, height);
            windows.extend(tile_windows(&building, rng));

            if wants_streetlight(
                index,
                self.city.streetlight_every,
                streetlights.len(),
                self.city.max_point_lights,
            ) {
                let distance = self.road.half_width + self.city.streetlight_setback;
                streetlights.push(place_streetlight(&anchor, building.side, distance));
            }

            buildings.push(building.transform);
        }

        let scene = CityScene {
            curve,
            road,
            buildings,
            lit_windows: windows.lit,
            dark_windows: windows.dark,
            streetlight_posts: streetlights.iter().map(|s| s.post).collect(),
            streetlight_lamps: streetlights.iter().map(|s| s.lamp).collect(),
            streetlight_hoods: streetlights.iter().map(|s| s.hood).collect(),
            point_lights: streetlights.iter().map(|s| s.light).collect(),
            moon: Mat4::from_translation(MOON_POSITION) * Mat4::from_scale(Vec3::splat(MOON_SIZE)),
        };

        log::info!(
            "City scene created: {} road vertices, {} buildings, {} windows ({} lit), {} streetlights",
            scene.road.len(),
            scene.buildings.len(),
            scene.window_count(),
            scene.lit_windows.len(),
            scene.streetlight_count()
        );

        scene
    }
}
