mod bezier;
mod transform;

pub use bezier::{CubicBezier, CurveSample};
pub use transform::{look_rotation, normal_matrix, yaw_towards};
