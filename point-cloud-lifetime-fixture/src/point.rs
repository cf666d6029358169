/// Packed per-splat record and the in-memory point table
use crate::bounds::PointCloudBounds;
use crate::lifetime::LifetimeParams;
use crate::ply_writer::PlyRecord;
use bytemuck::{Pod, Zeroable};
use constants::ply_schema::{SPLAT_FIELD_COUNT, SPLAT_RECORD_BYTES};

/// One vertex row. Fields are laid out in PLY property order so the record can be
/// written as-is.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct SplatPoint {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub colour_dc: [f32; 3],
    pub opacity_logit: f32,
    pub log_scale: [f32; 3],
    /// (w, x, y, z)
    pub rotation: [f32; 4],
    pub lifetime: LifetimeParams,
}

const _: () = assert!(size_of::<SplatPoint>() == SPLAT_RECORD_BYTES);

impl SplatPoint {
    /// All 20 scalar fields in property order.
    pub fn as_fields(&self) -> &[f32] {
        bytemuck::cast_slice(std::slice::from_ref(self))
    }
}

impl PlyRecord for SplatPoint {
    fn fields(&self) -> &[f32] {
        self.as_fields()
    }
}

/// All synthesized points, frame-major in one contiguous allocation.
#[derive(Debug, Clone)]
pub struct PointCloud {
    frame_count: usize,
    points_per_frame: usize,
    points: Vec<SplatPoint>,
}

impl PointCloud {
    pub(crate) fn from_points(
        frame_count: usize,
        points_per_frame: usize,
        points: Vec<SplatPoint>,
    ) -> Self {
        debug_assert_eq!(points.len(), frame_count * points_per_frame);
        Self {
            frame_count,
            points_per_frame,
            points,
        }
    }

    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    pub fn points_per_frame(&self) -> usize {
        self.points_per_frame
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[SplatPoint] {
        &self.points
    }

    /// Points belonging to `frame`. Panics if the frame is out of range.
    pub fn frame(&self, frame: usize) -> &[SplatPoint] {
        let start = frame * self.points_per_frame;
        &self.points[start..start + self.points_per_frame]
    }

    pub fn frames(&self) -> impl Iterator<Item = &[SplatPoint]> {
        self.points.chunks_exact(self.points_per_frame)
    }

    pub fn bounds(&self) -> PointCloudBounds {
        PointCloudBounds::from_points(&self.points)
    }

    pub fn frame_bounds(&self, frame: usize) -> PointCloudBounds {
        PointCloudBounds::from_points(self.frame(frame))
    }

    /// Number of points in `frame` whose lifetime gate is at or above `threshold` at
    /// time `t`.
    pub fn frame_visible_count_at(&self, frame: usize, t: f32, threshold: f32) -> usize {
        self.frame(frame)
            .iter()
            .filter(|p| p.lifetime.is_visible(t, threshold))
            .count()
    }
}
