pub mod builder;
pub mod buildings;
pub mod draw_list;
pub mod lighting;
pub mod meshes;
pub mod palette;
pub mod road;
pub mod streetlights;
pub mod windows;

pub use builder::{CityScene, SceneBuilder};
pub use draw_list::{car_batch, DrawBatch, MeshKind, Shading};
pub use lighting::{Environment, PointLight};
pub use palette::{Material, Palette};
