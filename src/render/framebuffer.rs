/// Framebuffer for CPU rendering
/// Color (ARGB) and depth stored as separate row-major buffers
use crate::raster2d::ClipRect;

/// View into a contiguous band of rows.
/// Used for multi-core rendering where each worker owns a disjoint slice.
pub struct FrameSlice<'a> {
    pub width: usize,
    pub y0: usize,
    pub height: usize,
    pub color: &'a mut [u32],
    pub depth: &'a mut [f32],
}

impl<'a> FrameSlice<'a> {
    /// Pixel rectangle owned by this slice, in framebuffer coordinates.
    #[inline]
    pub fn clip_rect(&self) -> ClipRect {
        ClipRect::new(
            0.0,
            self.width as f64 - 1.0,
            self.y0 as f64,
            (self.y0 + self.height) as f64 - 1.0,
        )
    }

    /// Depth-tested write at global `(x, y)`. Pixels outside the slice are ignored.
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: u32, depth: f32) -> bool {
        if x < 0 || y < self.y0 as i32 {
            return false;
        }
        let (x, y_local) = (x as usize, y as usize - self.y0);
        if x >= self.width || y_local >= self.height {
            return false;
        }

        let index = y_local * self.width + x;
        if depth < self.depth[index] {
            self.depth[index] = depth;
            self.color[index] = color;
            true
        } else {
            false
        }
    }
}

pub struct Framebuffer {
    pub width: usize,
    pub height: usize,
    pub color_buffer: Vec<u32>, // ARGB
    pub depth_buffer: Vec<f32>,
}

impl Framebuffer {
    pub fn new(width: usize, height: usize) -> Self {
        let pixel_count = width * height;
        Self {
            width,
            height,
            color_buffer: vec![0; pixel_count],
            depth_buffer: vec![f32::INFINITY; pixel_count],
        }
    }

    /// Clear color and depth buffers
    pub fn clear(&mut self, clear_color: u32) {
        self.color_buffer.fill(clear_color);
        self.depth_buffer.fill(f32::INFINITY);
    }

    /// Set pixel without depth test (for UI, etc.)
    #[inline]
    pub fn set_pixel_no_depth(&mut self, x: i32, y: i32, color: u32) {
        if x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as usize, y as usize);
        if x < self.width && y < self.height {
            self.color_buffer[y * self.width + x] = color;
        }
    }

    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> Option<u32> {
        (x < self.width && y < self.height).then(|| self.color_buffer[y * self.width + x])
    }

    pub fn color_buffer_slice(&self) -> &[u32] {
        &self.color_buffer
    }

    /// Whole framebuffer as a clip rectangle.
    #[inline]
    pub fn clip_rect(&self) -> ClipRect {
        ClipRect::from_pixel_size(self.width, self.height)
    }

    pub fn resize(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
        let pixel_count = width * height;
        self.color_buffer.resize(pixel_count, 0);
        self.depth_buffer.resize(pixel_count, f32::INFINITY);
    }

    /// Split into horizontal stripes owning disjoint rows.
    pub fn split_into_stripes(&mut self, stripes: usize) -> Vec<FrameSlice<'_>> {
        let stripes = stripes.max(1);
        let width = self.width;
        let height = self.height;
        let rows_per_stripe = height.div_ceil(stripes).max(1);

        let mut slices = Vec::with_capacity(stripes);
        let mut remaining_color: &mut [u32] = self.color_buffer.as_mut_slice();
        let mut remaining_depth: &mut [f32] = self.depth_buffer.as_mut_slice();

        let mut y0 = 0usize;
        while y0 < height {
            let rows = (height - y0).min(rows_per_stripe);
            let pixels = rows * width;

            let (color_head, color_tail) = remaining_color.split_at_mut(pixels);
            let (depth_head, depth_tail) = remaining_depth.split_at_mut(pixels);

            slices.push(FrameSlice {
                width,
                y0,
                height: rows,
                color: color_head,
                depth: depth_head,
            });

            remaining_color = color_tail;
            remaining_depth = depth_tail;
            y0 += rows;
        }

        slices
    }
}

/// Convert RGB to ARGB u32
#[inline]
pub const fn rgb_to_u32(r: u8, g: u8, b: u8) -> u32 {
    0xFF000000 | ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
}
