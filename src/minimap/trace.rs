/// Append-only record of the minimap pixels the camera has passed over
use super::mapping::MinimapMapping;
use crate::raster2d::{clip_segment, segment_pixels, BresenhamLine, Segment};
use glam::{IVec2, Vec2};

/// Ordered list of visited minimap pixels.
/// Points are only ever appended; the list grows for the whole session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathTrace {
    points: Vec<IVec2>,
}

impl PathTrace {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn append<I: IntoIterator<Item = IVec2>>(&mut self, pixels: I) -> usize {
        let before = self.points.len();
        self.points.extend(pixels);
        self.points.len() - before
    }

    #[inline]
    pub fn points(&self) -> &[IVec2] {
        &self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn last(&self) -> Option<IVec2> {
        self.points.last().copied()
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, IVec2> {
        self.points.iter()
    }
}

impl<'a> IntoIterator for &'a PathTrace {
    type Item = &'a IVec2;
    type IntoIter = std::slice::Iter<'a, IVec2>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// Outcome of one [`PathTracer::update`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceUpdate {
    /// Displacement since the last recorded position is within the threshold.
    Idle,
    /// The segment was clipped and rasterized; holds the number of new points.
    Appended(usize),
    /// The segment lies entirely outside the minimap; nothing was appended.
    Rejected,
}

/// Per-frame accumulator driving the minimap path overlay.
#[derive(Debug, Clone)]
pub struct PathTracer {
    mapping: MinimapMapping,
    threshold: f32,
    last_recorded: Vec2,
    trace: PathTrace,
}

impl PathTracer {
    /// `threshold` is the per-axis ground displacement (world units) that
    /// must be exceeded before a new segment is recorded.
    pub fn new(mapping: MinimapMapping, threshold: f32, start: Vec2) -> Self {
        Self {
            mapping,
            threshold,
            last_recorded: start,
            trace: PathTrace::new(),
        }
    }

    /// Feed the current ground position of the camera.
    ///
    /// Once either axis moved more than the threshold, the segment from the
    /// last recorded position is mapped to minimap pixels, clipped, and its
    /// rasterized pixels appended. The recorded position advances to `ground`
    /// whether or not the segment survived clipping.
    pub fn update(&mut self, ground: Vec2) -> TraceUpdate {
        let delta = ground - self.last_recorded;
        if delta.x.abs() <= self.threshold && delta.y.abs() <= self.threshold {
            return TraceUpdate::Idle;
        }

        let segment = Segment::new(
            self.mapping.pixel_point(self.last_recorded),
            self.mapping.pixel_point(ground),
        );
        self.last_recorded = ground;

        match clip_segment(segment, &self.mapping.bounds()) {
            Some(clipped) => {
                let (start, end) = segment_pixels(&clipped);
                let added = self.trace.append(BresenhamLine::new(start, end));
                log::trace!("path trace +{} points ({} total)", added, self.trace.len());
                TraceUpdate::Appended(added)
            }
            None => {
                log::trace!("path segment outside minimap, skipped");
                TraceUpdate::Rejected
            }
        }
    }

    #[inline]
    pub fn trace(&self) -> &PathTrace {
        &self.trace
    }

    #[inline]
    pub fn mapping(&self) -> &MinimapMapping {
        &self.mapping
    }

    #[inline]
    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    #[inline]
    pub fn last_recorded(&self) -> Vec2 {
        self.last_recorded
    }
}
