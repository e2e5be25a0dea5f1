use std::time::Instant;

const FPS_UPDATE_INTERVAL: f32 = 1.0;

/// Averages frame rate over one-second windows
#[derive(Debug)]
pub struct FpsCounter {
    last_frame: Instant,
    frames: u32,
    elapsed: f32,
    fps: f32,
}

impl FpsCounter {
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
            frames: 0,
            elapsed: 0.0,
            fps: 0.0,
        }
    }

    /// Records a frame presented now
    pub fn frame(&mut self) -> Option<f32> {
        let now = Instant::now();
        let delta = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;
        self.tick(delta)
    }

    /// Returns the new average when a window closes
    pub fn tick(&mut self, delta: f32) -> Option<f32> {
        self.frames += 1;
        self.elapsed += delta;

        if self.elapsed < FPS_UPDATE_INTERVAL {
            return None;
        }

        self.fps = self.frames as f32 / self.elapsed;
        self.frames = 0;
        self.elapsed = 0.0;
        log::debug!("FPS: {:.1}", self.fps);
        Some(self.fps)
    }

    pub fn fps(&self) -> f32 {
        self.fps
    }
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new()
    }
}
