/// Linear map from the terrain ground plane (world x, z) to minimap pixels
use crate::math::Vec3;
use crate::raster2d::ClipRect;
use glam::{DVec2, IVec2, Vec2};

/// Minimap pixels are y-up: pixel x follows world x, pixel y follows world z.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinimapMapping {
    /// Side length of the square minimap in pixels
    pub size: usize,
    /// Pixels per world unit
    pub scale: f32,
    /// Added to the ground position before scaling
    pub offset: Vec2,
}

impl MinimapMapping {
    pub fn new(size: usize, scale: f32, offset: Vec2) -> Self {
        Self {
            size,
            scale,
            offset,
        }
    }

    /// Mapping for a `width x depth` terrain centred on the world origin,
    /// scaled so the longer side spans the whole minimap.
    pub fn for_terrain(size: usize, width: usize, depth: usize) -> Self {
        let extent = width.max(depth).max(1) as f32;
        Self {
            size,
            scale: size as f32 / extent,
            offset: Vec2::new(width as f32 * 0.5, depth as f32 * 0.5),
        }
    }

    /// Continuous minimap coordinates of a ground position.
    #[inline]
    pub fn ground_to_minimap(&self, ground: Vec2) -> Vec2 {
        (ground + self.offset) * self.scale
    }

    /// Pixel containing a ground position (floored, may lie outside the minimap).
    #[inline]
    pub fn ground_to_pixel(&self, ground: Vec2) -> IVec2 {
        self.ground_to_minimap(ground).floor().as_ivec2()
    }

    /// Clip rectangle covering exactly the minimap pixels.
    #[inline]
    pub fn bounds(&self) -> ClipRect {
        ClipRect::from_pixel_size(self.size, self.size)
    }

    #[inline]
    pub fn contains_pixel(&self, pixel: IVec2) -> bool {
        self.bounds().contains(pixel.as_dvec2())
    }

    /// Pixel as the `f64` point the clipper works on.
    #[inline]
    pub fn pixel_point(&self, ground: Vec2) -> DVec2 {
        self.ground_to_pixel(ground).as_dvec2()
    }
}

/// Projection of a world position onto the ground plane.
#[inline]
pub fn ground_position(position: Vec3) -> Vec2 {
    Vec2::new(position.x, position.z)
}
