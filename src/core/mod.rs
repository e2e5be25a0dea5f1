pub mod clock;
pub mod gpu_context;
pub mod window;
