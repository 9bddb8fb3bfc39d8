/// Cohen-Sutherland line clipping against an axis-aligned rectangle
///
/// Each endpoint gets a 4-bit out-code. Segments with both codes clear are
/// accepted, segments whose codes share a bit are rejected, and otherwise one
/// outside endpoint is moved onto the boundary it violates and re-classified.
///
/// A move clears the violated bit for good. The only bit a move can newly set
/// is one the other endpoint already carries, which rejects on the next pass,
/// so each endpoint moves at most once per axis and four moves always settle.
use glam::DVec2;
use std::ops::{BitAnd, BitOr};

/// Upper bound on endpoint moves before a segment is either accepted or rejected
pub const MAX_CLIP_PASSES: usize = 4;

/// Region classification of a point relative to a [`ClipRect`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct OutCode(u8);

impl OutCode {
    pub const INSIDE: Self = Self(0b0000);
    pub const LEFT: Self = Self(0b0001);
    pub const RIGHT: Self = Self(0b0010);
    pub const BOTTOM: Self = Self(0b0100);
    pub const TOP: Self = Self(0b1000);

    /// Classify `p`. X bounds are tested before y bounds; within an axis only
    /// one side can be set.
    #[inline]
    pub fn of(p: DVec2, rect: &ClipRect) -> Self {
        let mut code = Self::INSIDE;
        if p.x < rect.min.x {
            code = code | Self::LEFT;
        } else if p.x > rect.max.x {
            code = code | Self::RIGHT;
        }
        if p.y < rect.min.y {
            code = code | Self::BOTTOM;
        } else if p.y > rect.max.y {
            code = code | Self::TOP;
        }
        code
    }

    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn is_inside(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0 && other.0 != 0
    }
}

impl BitOr for OutCode {
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitAnd for OutCode {
    type Output = Self;

    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

/// Closed clip rectangle `[min.x, max.x] x [min.y, max.y]`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ClipRect {
    pub min: DVec2,
    pub max: DVec2,
}

impl ClipRect {
    #[inline]
    pub fn new(xmin: f64, xmax: f64, ymin: f64, ymax: f64) -> Self {
        Self {
            min: DVec2::new(xmin, ymin),
            max: DVec2::new(xmax, ymax),
        }
    }

    /// Pixel-grid rectangle covering `0..width` x `0..height`.
    #[inline]
    pub fn from_pixel_size(width: usize, height: usize) -> Self {
        Self::new(0.0, width as f64 - 1.0, 0.0, height as f64 - 1.0)
    }

    #[inline]
    pub fn contains(&self, p: DVec2) -> bool {
        OutCode::of(p, self).is_inside()
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Segment {
    pub start: DVec2,
    pub end: DVec2,
}

impl Segment {
    #[inline]
    pub fn new(start: DVec2, end: DVec2) -> Self {
        Self { start, end }
    }
}

/// Clip `segment` to `rect`. Returns `None` when no part of it lies inside.
pub fn clip_segment(segment: Segment, rect: &ClipRect) -> Option<Segment> {
    let Segment {
        start: mut p0,
        end: mut p1,
    } = segment;
    let mut code0 = OutCode::of(p0, rect);
    let mut code1 = OutCode::of(p1, rect);

    for _ in 0..MAX_CLIP_PASSES {
        if (code0 | code1).is_inside() {
            return Some(Segment::new(p0, p1));
        }
        if !(code0 & code1).is_inside() {
            return None;
        }

        // Move the first outside endpoint. The violated boundary is crossed by
        // the segment (the other endpoint does not share the bit), so the
        // denominators below are never zero.
        let move_start = !code0.is_inside();
        let out = if move_start { code0 } else { code1 };
        let crossing = boundary_crossing(p0, p1, out, rect);

        if move_start {
            p0 = crossing;
            code0 = OutCode::of(p0, rect);
        } else {
            p1 = crossing;
            code1 = OutCode::of(p1, rect);
        }
    }

    (code0 | code1)
        .is_inside()
        .then(|| Segment::new(p0, p1))
}

/// Scalar entry point: clip `(x0, y0) - (x1, y1)` against `[xmin, xmax] x [ymin, ymax]`.
#[allow(clippy::too_many_arguments)]
pub fn clip(
    x0: f64,
    y0: f64,
    x1: f64,
    y1: f64,
    xmin: f64,
    xmax: f64,
    ymin: f64,
    ymax: f64,
) -> Option<Segment> {
    clip_segment(
        Segment::new(DVec2::new(x0, y0), DVec2::new(x1, y1)),
        &ClipRect::new(xmin, xmax, ymin, ymax),
    )
}

/// Intersection of the segment with the first violated boundary, in
/// TOP, BOTTOM, RIGHT, LEFT priority.
#[inline]
fn boundary_crossing(p0: DVec2, p1: DVec2, out: OutCode, rect: &ClipRect) -> DVec2 {
    let d = p1 - p0;
    if out.contains(OutCode::TOP) {
        DVec2::new(p0.x + d.x * (rect.max.y - p0.y) / d.y, rect.max.y)
    } else if out.contains(OutCode::BOTTOM) {
        DVec2::new(p0.x + d.x * (rect.min.y - p0.y) / d.y, rect.min.y)
    } else if out.contains(OutCode::RIGHT) {
        DVec2::new(rect.max.x, p0.y + d.y * (rect.max.x - p0.x) / d.x)
    } else {
        DVec2::new(rect.min.x, p0.y + d.y * (rect.min.x - p0.x) / d.x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect() -> ClipRect {
        ClipRect::new(0.0, 200.0, 0.0, 200.0)
    }

    #[test]
    fn outcodes_cover_all_regions() {
        let r = rect();
        assert_eq!(OutCode::of(DVec2::new(100.0, 100.0), &r), OutCode::INSIDE);
        assert_eq!(OutCode::of(DVec2::new(-1.0, 100.0), &r), OutCode::LEFT);
        assert_eq!(OutCode::of(DVec2::new(201.0, 100.0), &r), OutCode::RIGHT);
        assert_eq!(OutCode::of(DVec2::new(100.0, -1.0), &r), OutCode::BOTTOM);
        assert_eq!(OutCode::of(DVec2::new(100.0, 201.0), &r), OutCode::TOP);
        assert_eq!(
            OutCode::of(DVec2::new(-1.0, 201.0), &r),
            OutCode::LEFT | OutCode::TOP
        );
        assert_eq!(OutCode::of(DVec2::new(300.0, -5.0), &r).bits(), 0b0110);
    }

    #[test]
    fn boundary_points_are_inside() {
        let r = rect();
        for p in [
            DVec2::new(0.0, 0.0),
            DVec2::new(200.0, 200.0),
            DVec2::new(0.0, 200.0),
            DVec2::new(200.0, 0.0),
        ] {
            assert!(r.contains(p), "{p:?} should be inside the closed rect");
        }
    }

    #[test]
    fn horizontal_segment_is_clipped_on_both_sides() {
        let seg = clip(-5.0, 50.0, 250.0, 50.0, 0.0, 200.0, 0.0, 200.0).unwrap();
        assert_eq!(seg.start, DVec2::new(0.0, 50.0));
        assert_eq!(seg.end, DVec2::new(200.0, 50.0));
    }

    #[test]
    fn corner_to_corner_diagonal_lands_on_corners() {
        // Both endpoints violate an x and a y bound.
        let seg = clip(-10.0, -10.0, 210.0, 210.0, 0.0, 200.0, 0.0, 200.0).unwrap();
        assert!((seg.start - DVec2::new(0.0, 0.0)).length() < 1e-9);
        assert!((seg.end - DVec2::new(200.0, 200.0)).length() < 1e-9);
    }

    #[test]
    fn segment_passing_beside_corner_is_rejected() {
        // Starts LEFT, ends TOP, and cuts the corner region outside the rect.
        assert!(clip(-20.0, 190.0, 10.0, 260.0, 0.0, 200.0, 0.0, 200.0).is_none());
    }

    #[test]
    fn vertical_segment_never_divides_by_zero() {
        let seg = clip(10.0, -50.0, 10.0, 500.0, 0.0, 200.0, 0.0, 200.0).unwrap();
        assert_eq!(seg.start, DVec2::new(10.0, 0.0));
        assert_eq!(seg.end, DVec2::new(10.0, 200.0));
    }
}
