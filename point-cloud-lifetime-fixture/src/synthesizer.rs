/// Per-frame point synthesis for the lifetime fixture
use crate::colour::{frame_base_colour, rgb_to_sh};
use crate::constants::{
    CUBE_HALF_EXTENT, FRAME_SPACING, IDENTITY_ROTATION, LOG_SCALE, OPACITY_LOGIT,
};
use crate::error::{FixtureError, Result};
use crate::lifetime::LifetimeParams;
use crate::point::{PointCloud, SplatPoint};
use rand::Rng;

/// Lays frames out as unit cubes along X, one cube per time slot.
#[derive(Debug, Clone, Copy)]
pub struct TemporalPointSynthesizer {
    frame_count: usize,
    points_per_frame: usize,
}

impl TemporalPointSynthesizer {
    /// Validates counts up front so nothing is allocated for an unusable layout.
    pub fn new(frame_count: usize, points_per_frame: usize) -> Result<Self> {
        if frame_count == 0 {
            return Err(FixtureError::InvalidConfig(
                "frame count must be positive".into(),
            ));
        }
        if points_per_frame == 0 {
            return Err(FixtureError::InvalidConfig(
                "points per frame must be positive".into(),
            ));
        }
        if frame_count.checked_mul(points_per_frame).is_none() {
            return Err(FixtureError::InvalidConfig(format!(
                "{frame_count} frames of {points_per_frame} points overflows the point count"
            )));
        }

        Ok(Self {
            frame_count,
            points_per_frame,
        })
    }

    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    pub fn points_per_frame(&self) -> usize {
        self.points_per_frame
    }

    pub fn total_points(&self) -> usize {
        self.frame_count * self.points_per_frame
    }

    /// Centre of a frame's cube along X
    fn frame_centre_x(frame: usize) -> f32 {
        frame as f32 * FRAME_SPACING
    }

    /// Generate every frame in order.
    pub fn synthesize(&self, rng: &mut impl Rng) -> PointCloud {
        self.synthesize_with(rng, |_| {})
    }

    /// Generate every frame in order, calling `on_frame` after each one completes.
    pub fn synthesize_with(
        &self,
        rng: &mut impl Rng,
        mut on_frame: impl FnMut(usize),
    ) -> PointCloud {
        let mut points = Vec::with_capacity(self.total_points());

        for frame in 0..self.frame_count {
            self.push_frame(frame, rng, &mut points);
            on_frame(frame);
        }

        PointCloud::from_points(self.frame_count, self.points_per_frame, points)
    }

    fn push_frame(&self, frame: usize, rng: &mut impl Rng, points: &mut Vec<SplatPoint>) {
        let colour_dc = rgb_to_sh(frame_base_colour(frame));
        let lifetime = LifetimeParams::for_frame(frame);
        let centre_x = Self::frame_centre_x(frame);

        for _ in 0..self.points_per_frame {
            let x = sample_half_open(
                rng,
                centre_x - CUBE_HALF_EXTENT,
                centre_x + CUBE_HALF_EXTENT,
            );
            let y = sample_half_open(rng, -CUBE_HALF_EXTENT, CUBE_HALF_EXTENT);
            let z = sample_half_open(rng, -CUBE_HALF_EXTENT, CUBE_HALF_EXTENT);

            points.push(SplatPoint {
                position: [x, y, z],
                normal: [0.0; 3],
                colour_dc,
                opacity_logit: OPACITY_LOGIT,
                log_scale: [LOG_SCALE; 3],
                rotation: IDENTITY_ROTATION,
                lifetime,
            });
        }
    }
}

/// Uniform sample in `[low, high)`. Shifting a unit offset far from the origin can round
/// up onto `high`, so such results are pulled back to the float just below it.
fn sample_half_open(rng: &mut impl Rng, low: f32, high: f32) -> f32 {
    let value = low + rng.random::<f32>() * (high - low);
    if value < high { value } else { next_below(high) }
}

fn next_below(value: f32) -> f32 {
    if value > 0.0 {
        f32::from_bits(value.to_bits() - 1)
    } else if value == 0.0 {
        -f32::from_bits(1)
    } else {
        f32::from_bits(value.to_bits() + 1)
    }
}
