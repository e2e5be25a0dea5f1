pub mod camera;
pub mod cli;
pub mod composer;
pub mod config;
pub mod core;
pub mod frame;
pub mod loaders;
pub mod math;
pub mod renderer;
pub mod scenes;
pub mod types;

pub use composer::{FrameComposer, FramePose};
pub use config::SceneConfig;
pub use scenes::{CityScene, SceneBuilder};
