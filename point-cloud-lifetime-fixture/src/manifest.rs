/// Sidecar manifest describing a generated fixture.
use crate::bounds::PointCloudBounds;
use crate::colour::frame_base_colour;
use crate::config::GeneratorConfig;
use crate::constants::VISIBILITY_THRESHOLD;
use crate::error::Result;
use crate::ply_writer::write_atomically;
use crate::point::PointCloud;
use constants::lifetime::{LIFETIME_HALF_WIDTH, LIFETIME_SHARPNESS};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Top-level manifest written next to the PLY file.
#[derive(Serialize, Deserialize, Debug)]
pub struct FixtureManifest {
    /// File name of the PLY this manifest describes.
    pub ply_file: String,
    pub vertex_count: usize,
    /// Playback duration in frames.
    pub frame_count: usize,
    pub points_per_frame: usize,
    pub properties: Vec<String>,
    pub lifetime: LifetimeInfo,
    pub bounds: PointCloudBounds,
    pub frames: Vec<FrameInfo>,
    pub config: GeneratorConfig,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct LifetimeInfo {
    pub half_width: f32,
    pub sharpness: f32,
}

/// Per time slot summary.
#[derive(Serialize, Deserialize, Debug)]
pub struct FrameInfo {
    pub index: usize,
    pub lifetime_mu: f32,
    /// Normalised RGB before SH encoding.
    pub base_colour: [f64; 3],
    pub bounds: PointCloudBounds,
    /// Points whose gate weight reaches the visibility threshold at `t = lifetime_mu`.
    pub visible_at_mu: usize,
}

impl FixtureManifest {
    pub fn build(
        cloud: &PointCloud,
        ply_path: &Path,
        properties: &[String],
        config: &GeneratorConfig,
    ) -> Self {
        let frames: Vec<FrameInfo> = (0..cloud.frame_count())
            .map(|index| {
                let lifetime_mu = index as f32;
                FrameInfo {
                    index,
                    lifetime_mu,
                    base_colour: frame_base_colour(index),
                    bounds: cloud.frame_bounds(index),
                    visible_at_mu: cloud.frame_visible_count_at(
                        index,
                        lifetime_mu,
                        VISIBILITY_THRESHOLD,
                    ),
                }
            })
            .collect();

        let bounds = frames
            .iter()
            .fold(PointCloudBounds::new(), |acc, f| acc.merge(&f.bounds));

        Self {
            ply_file: ply_path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
            vertex_count: cloud.len(),
            frame_count: cloud.frame_count(),
            points_per_frame: cloud.points_per_frame(),
            properties: properties.to_vec(),
            lifetime: LifetimeInfo {
                half_width: LIFETIME_HALF_WIDTH,
                sharpness: LIFETIME_SHARPNESS,
            },
            bounds,
            frames,
            config: config.clone(),
        }
    }

    /// Manifest path for a PLY file: same stem, `.json` extension.
    pub fn path_for(ply_path: &Path) -> PathBuf {
        ply_path.with_extension("json")
    }

    /// Written through the same temp-then-rename path as the PLY, so a failure leaves
    /// any previous manifest in place. The PLY is persisted first and survives a
    /// manifest failure.
    pub fn write(&self, path: &Path) -> Result<()> {
        let manifest_json = serde_json::to_string_pretty(self)?;
        write_atomically(path, |writer| Ok(writer.write_all(manifest_json.as_bytes())?))?;
        tracing::info!("Generated manifest: {}", path.display());
        Ok(())
    }

    /// Logs key statistics for verification.
    pub fn log_summary(&self) {
        tracing::info!(
            "Manifest summary: {} vertices in {} frames of {}",
            self.vertex_count,
            self.frame_count,
            self.points_per_frame
        );
        for frame in &self.frames {
            tracing::debug!(
                "  frame {}: colour {:?}, x {:.2} to {:.2}, {} visible at t={}",
                frame.index,
                frame.base_colour,
                frame.bounds.min_x,
                frame.bounds.max_x,
                frame.visible_at_mu,
                frame.lifetime_mu
            );
        }
    }
}
