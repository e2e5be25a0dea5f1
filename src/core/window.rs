use winit::dpi::PhysicalSize;

/// Window dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowDimensions {
    pub width: u32,
    pub height: u32,
}

impl WindowDimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Minimized windows report a zero-sized surface
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl From<PhysicalSize<u32>> for WindowDimensions {
    fn from(size: PhysicalSize<u32>) -> Self {
        Self::new(size.width, size.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_dimensions_new() {
        let dims = WindowDimensions::new(1920, 1080);
        assert_eq!(dims.width, 1920);
        assert_eq!(dims.height, 1080);
    }

    #[test]
    fn test_window_dimensions_from_physical_size() {
        let dims = WindowDimensions::from(PhysicalSize::new(1280, 720));
        assert_eq!(dims, WindowDimensions::new(1280, 720));
    }

    #[test]
    fn test_window_dimensions_empty() {
        let test_cases = [((0, 0), true), ((0, 720), true), ((1280, 0), true), ((1, 1), false)];

        for ((width, height), empty) in test_cases {
            assert_eq!(WindowDimensions::new(width, height).is_empty(), empty);
        }
    }
}
