/// RGBA color target with a matching depth buffer
///
/// Depth values are normalized device depth in [-1, 1]; smaller is closer.
#[derive(Debug, Clone)]
pub struct FrameBuffer {
    color: Vec<[u8; 4]>,
    depth: Vec<f32>,
    width: u32,
    height: u32,
}

impl FrameBuffer {
    /// Create a buffer cleared to transparent black at infinite depth
    pub fn new(width: u32, height: u32) -> Self {
        let count = width as usize * height as usize;
        Self {
            color: vec![[0; 4]; count],
            depth: vec![f32::INFINITY; count],
            width,
            height,
        }
    }

    /// Reallocate for new dimensions, discarding contents
    pub fn resize(&mut self, width: u32, height: u32) {
        if (width, height) == (self.width, self.height) {
            return;
        }
        *self = Self::new(width, height);
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Fill color and reset depth
    pub fn clear(&mut self, rgba: [u8; 4]) {
        self.color.fill(rgba);
        self.depth.fill(f32::INFINITY);
    }

    /// Write a sample if it is closer than what is stored
    ///
    /// Returns true if the sample was written.
    pub fn write_sample(&mut self, x: u32, y: u32, depth: f32, rgba: [u8; 4]) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }

        let idx = self.index(x, y);
        if depth >= self.depth[idx] {
            return false;
        }

        self.depth[idx] = depth;
        self.color[idx] = rgba;
        true
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.color[self.index(x, y)])
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Raw RGBA bytes, row-major
    pub fn pixels(&self) -> &[u8] {
        bytemuck::cast_slice(&self.color)
    }

    /// Box-filter down by an integer factor
    ///
    /// The buffer dimensions must be multiples of `factor`.
    pub fn resolve(&self, factor: u32) -> Vec<u8> {
        if factor <= 1 {
            return self.pixels().to_vec();
        }

        let out_w = self.width / factor;
        let out_h = self.height / factor;
        let samples = factor * factor;
        let mut out = Vec::with_capacity(out_w as usize * out_h as usize * 4);

        for oy in 0..out_h {
            for ox in 0..out_w {
                let mut sum = [0u32; 4];
                for sy in 0..factor {
                    let y = oy * factor + sy;
                    for sx in 0..factor {
                        let px = self.color[self.index(ox * factor + sx, y)];
                        for c in 0..4 {
                            sum[c] += px[c] as u32;
                        }
                    }
                }
                out.extend(sum.iter().map(|s| ((s + samples / 2) / samples) as u8));
            }
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn framebuffer_creation() {
        let mut fb = FrameBuffer::new(100, 50);
        assert_eq!(fb.dimensions(), (100, 50));
        assert_eq!(fb.pixels().len(), 100 * 50 * 4);
        // Fresh depth accepts any finite sample
        assert!(fb.write_sample(0, 0, 1.0e30, [1, 1, 1, 255]));
    }

    #[test]
    fn framebuffer_clear() {
        let mut fb = FrameBuffer::new(10, 10);
        fb.clear([255, 0, 0, 255]);

        assert_eq!(&fb.pixels()[0..4], &[255, 0, 0, 255]);
        let last = 10 * 10 * 4 - 4;
        assert_eq!(&fb.pixels()[last..last + 4], &[255, 0, 0, 255]);
    }

    #[test]
    fn framebuffer_depth_test() {
        let mut fb = FrameBuffer::new(4, 4);
        fb.clear([0, 0, 0, 255]);

        assert!(fb.write_sample(1, 1, 0.5, [10, 10, 10, 255]));
        // Farther sample is rejected
        assert!(!fb.write_sample(1, 1, 0.7, [20, 20, 20, 255]));
        assert_eq!(fb.pixel(1, 1), Some([10, 10, 10, 255]));
        // Closer sample wins
        assert!(fb.write_sample(1, 1, 0.1, [30, 30, 30, 255]));
        assert_eq!(fb.pixel(1, 1), Some([30, 30, 30, 255]));
    }

    #[test]
    fn framebuffer_bounds_checking() {
        let mut fb = FrameBuffer::new(10, 10);
        assert!(!fb.write_sample(100, 100, 0.0, [255, 0, 0, 255]));
        assert_eq!(fb.pixel(10, 0), None);
    }

    #[test]
    fn framebuffer_resize_discards_contents() {
        let mut fb = FrameBuffer::new(4, 4);
        fb.clear([9, 9, 9, 255]);
        fb.resize(8, 2);
        assert_eq!(fb.dimensions(), (8, 2));
        assert_eq!(fb.pixel(0, 0), Some([0, 0, 0, 0]));
    }

    #[test]
    fn framebuffer_resolve_averages_blocks() {
        let mut fb = FrameBuffer::new(4, 2);
        fb.clear([0, 0, 0, 255]);
        // Left 2x2 block: two white samples out of four
        fb.write_sample(0, 0, 0.0, [255, 255, 255, 255]);
        fb.write_sample(1, 1, 0.0, [255, 255, 255, 255]);

        let out = fb.resolve(2);
        assert_eq!(out.len(), 2 * 1 * 4);
        assert_eq!(&out[0..4], &[128, 128, 128, 255]);
        assert_eq!(&out[4..8], &[0, 0, 0, 255]);
    }

    #[test]
    fn framebuffer_resolve_identity() {
        let mut fb = FrameBuffer::new(3, 3);
        fb.clear([1, 2, 3, 4]);
        assert_eq!(fb.resolve(1), fb.pixels().to_vec());
    }
}
