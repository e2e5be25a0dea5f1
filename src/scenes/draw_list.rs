use glam::{Mat4, Vec3};

use super::builder::CityScene;
use super::palette::{Material, Palette};
use crate::types::InstanceRaw;

/// Which vertex buffer a batch draws
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeshKind {
    Road,
    Cube,
    Car,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shading {
    Lit { shininess: f32 },
    Emissive,
}

/// One mesh drawn once per transform with a shared colour and pipeline
#[derive(Debug, Clone)]
pub struct DrawBatch {
    pub label: &'static str,
    pub mesh: MeshKind,
    pub shading: Shading,
    pub color: Vec3,
    pub transforms: Vec<Mat4>,
}

impl DrawBatch {
    pub fn lit(label: &'static str, mesh: MeshKind, material: Material, transforms: Vec<Mat4>) -> Self {
        Self {
            label,
            mesh,
            shading: Shading::Lit {
                shininess: material.shininess,
            },
            color: material.color,
            transforms,
        }
    }

    pub fn emissive(label: &'static str, mesh: MeshKind, color: Vec3, transforms: Vec<Mat4>) -> Self {
        Self {
            label,
            mesh,
            shading: Shading::Emissive,
            color,
            transforms,
        }
    }

    pub fn is_emissive(&self) -> bool {
        matches!(self.shading, Shading::Emissive)
    }

    pub fn instances(&self) -> Vec<InstanceRaw> {
        let shininess = match self.shading {
            Shading::Lit { shininess } => shininess,
            Shading::Emissive => 0.0,
        };
        self.transforms
            .iter()
            .map(|model| InstanceRaw::new(model, self.color, shininess))
            .collect()
    }
}

impl CityScene {
    /// Everything except the car, lit batches first
    pub fn static_batches(&self, palette: &Palette) -> Vec<DrawBatch> {
        vec![
            DrawBatch::lit("Road", MeshKind::Road, palette.road, vec![Mat4::IDENTITY]),
            DrawBatch::lit("Buildings", MeshKind::Cube, palette.building, self.buildings.clone()),
            DrawBatch::lit("Dark Windows", MeshKind::Cube, palette.dark_window, self.dark_windows.clone()),
            DrawBatch::lit(
                "Streetlight Posts",
                MeshKind::Cube,
                palette.streetlight,
                self.streetlight_posts.clone(),
            ),
            DrawBatch::lit(
                "Streetlight Hoods",
                MeshKind::Cube,
                palette.streetlight,
                self.streetlight_hoods.clone(),
            ),
            DrawBatch::emissive("Lit Windows", MeshKind::Cube, palette.lit_window, self.lit_windows.clone()),
            DrawBatch::emissive("Lamps", MeshKind::Cube, palette.lamp, self.streetlight_lamps.clone()),
            DrawBatch::emissive("Moon", MeshKind::Cube, palette.moon, vec![self.moon]),
        ]
    }
}

/// The car batch, re-posed every frame
pub fn car_batch(palette: &Palette, transform: Mat4) -> DrawBatch {
    DrawBatch::lit("Car", MeshKind::Car, palette.car, vec![transform])
}
