/// Display context - viewport dimensions of a drawable surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DisplayContext {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl DisplayContext {
    /// Create new display context
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width over height
    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    /// True if either dimension is zero
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Scale both dimensions by an integer factor, `None` on overflow
    pub fn scaled(&self, factor: u32) -> Option<Self> {
        Some(Self::new(self.width.checked_mul(factor)?, self.height.checked_mul(factor)?))
    }

    /// Total number of pixels
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Total size in bytes for RGBA buffer
    pub fn buffer_size(&self) -> usize {
        self.pixel_count() * 4
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_creates_context_with_dimensions() {
        let ctx = DisplayContext::new(1920, 1080);
        assert_eq!(ctx.width, 1920);
        assert_eq!(ctx.height, 1080);
    }

    #[test]
    fn test_aspect_ratio() {
        assert_eq!(DisplayContext::new(800, 600).aspect(), 800.0 / 600.0);
        assert_eq!(DisplayContext::new(300, 600).aspect(), 0.5);
    }

    #[test]
    fn test_empty_dimensions() {
        assert!(DisplayContext::new(0, 10).is_empty());
        assert!(DisplayContext::new(10, 0).is_empty());
        assert!(!DisplayContext::new(1, 1).is_empty());
    }

    #[test]
    fn test_scaled() {
        let ctx = DisplayContext::new(320, 240).scaled(2).expect("fits");
        assert_eq!(ctx, DisplayContext::new(640, 480));
        assert_eq!(ctx.aspect(), DisplayContext::new(320, 240).aspect());
    }

    #[test]
    fn test_scaled_overflow_is_none() {
        assert_eq!(DisplayContext::new(u32::MAX / 2, 10).scaled(4), None);
        assert_eq!(DisplayContext::new(10, 3_000_000_000).scaled(2), None);
    }

    #[test]
    fn test_pixel_count_beyond_u32() {
        let ctx = DisplayContext::new(100_000, 100_000);
        assert_eq!(ctx.pixel_count(), 10_000_000_000);
    }

    #[test]
    fn test_buffer_size_rgba() {
        let ctx = DisplayContext::new(100, 100);
        assert_eq!(ctx.pixel_count(), 10_000);
        assert_eq!(ctx.buffer_size(), 40_000);
    }

    #[test]
    fn test_various_common_resolutions() {
        let resolutions = [
            (640, 480),
            (1280, 720),
            (1920, 1080),
            (3840, 2160),
        ];

        for (width, height) in resolutions {
            let ctx = DisplayContext::new(width, height);
            assert_eq!(ctx.pixel_count(), (width * height) as usize);
            assert_eq!(ctx.buffer_size(), (width * height * 4) as usize);
        }
    }
}
