/// Bresenham line rasterization
///
/// Integer-only, all octants. Yields every pixel of the 8-connected path from
/// `start` to `end` inclusive, exactly one per step along the dominant axis.
use glam::IVec2;
use std::iter::FusedIterator;

#[derive(Clone, Debug)]
pub struct BresenhamLine {
    current: IVec2,
    end: IVec2,
    // Deltas and error kept in i64 so extreme i32 endpoints cannot overflow `2 * err`.
    dx: i64,
    dy: i64,
    step: IVec2,
    err: i64,
    remaining: usize,
}

impl BresenhamLine {
    pub fn new(start: IVec2, end: IVec2) -> Self {
        let dx = (end.x as i64 - start.x as i64).abs();
        let dy = (end.y as i64 - start.y as i64).abs();
        let step = IVec2::new(
            if start.x < end.x { 1 } else { -1 },
            if start.y < end.y { 1 } else { -1 },
        );

        Self {
            current: start,
            end,
            dx,
            dy,
            step,
            err: dx - dy,
            remaining: dx.max(dy) as usize + 1,
        }
    }
}

impl Iterator for BresenhamLine {
    type Item = IVec2;

    fn next(&mut self) -> Option<IVec2> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let point = self.current;
        if point == self.end {
            self.remaining = 0;
            return Some(point);
        }

        let e2 = 2 * self.err;
        if e2 > -self.dy {
            self.err -= self.dy;
            self.current.x += self.step.x;
        }
        if e2 < self.dx {
            self.err += self.dx;
            self.current.y += self.step.y;
        }
        Some(point)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for BresenhamLine {}
impl FusedIterator for BresenhamLine {}

/// Pixels from `start` to `end` inclusive.
/// Identical endpoints produce a single point.
#[inline]
pub fn rasterize(start: IVec2, end: IVec2) -> Vec<IVec2> {
    BresenhamLine::new(start, end).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(v: &[(i32, i32)]) -> Vec<IVec2> {
        v.iter().map(|&(x, y)| IVec2::new(x, y)).collect()
    }

    #[test]
    fn horizontal_line() {
        assert_eq!(
            rasterize(IVec2::new(0, 0), IVec2::new(5, 0)),
            pts(&[(0, 0), (1, 0), (2, 0), (3, 0), (4, 0), (5, 0)])
        );
    }

    #[test]
    fn diagonal_line() {
        assert_eq!(
            rasterize(IVec2::new(0, 0), IVec2::new(3, 3)),
            pts(&[(0, 0), (1, 1), (2, 2), (3, 3)])
        );
    }

    #[test]
    fn single_point() {
        assert_eq!(rasterize(IVec2::new(7, -3), IVec2::new(7, -3)), pts(&[(7, -3)]));
    }

    #[test]
    fn steep_negative_line() {
        let line = rasterize(IVec2::new(2, 4), IVec2::new(0, -1));
        assert_eq!(line.len(), 6);
        assert_eq!(line.first(), Some(&IVec2::new(2, 4)));
        assert_eq!(line.last(), Some(&IVec2::new(0, -1)));
        // y is the dominant axis: every step moves y by exactly one.
        for w in line.windows(2) {
            assert_eq!(w[1].y - w[0].y, -1);
        }
    }

    #[test]
    fn len_matches_chebyshev_distance() {
        let line = BresenhamLine::new(IVec2::new(-4, 9), IVec2::new(13, 2));
        assert_eq!(line.len(), 18);
        assert_eq!(line.count(), 18);
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn extreme_coordinates_do_not_overflow() {
        let mut line = BresenhamLine::new(IVec2::new(i32::MIN, 0), IVec2::new(i32::MAX, 1));
        assert_eq!(line.len(), u32::MAX as usize + 1);
        assert_eq!(line.next(), Some(IVec2::new(i32::MIN, 0)));
        assert_eq!(line.next(), Some(IVec2::new(i32::MIN + 1, 0)));
    }
}
