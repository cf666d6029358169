/// Fixture generator orchestrating synthesis, PLY output and the manifest.
use crate::bounds::PointCloudBounds;
use crate::config::GeneratorConfig;
use crate::error::Result;
use crate::manifest::FixtureManifest;
use crate::ply_writer::{PlySchema, PlyWriter};
use crate::point::PointCloud;
use crate::synthesizer::TemporalPointSynthesizer;
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::{Path, PathBuf};

/// Outcome of a generation run.
#[derive(Debug, Clone)]
pub struct GenerationReport {
    pub ply_path: PathBuf,
    pub manifest_path: Option<PathBuf>,
    pub vertex_count: usize,
    pub header_bytes: usize,
    pub body_bytes: usize,
    pub bounds: PointCloudBounds,
}

/// Produces a lifetime test fixture from a validated configuration.
pub struct FixtureGenerator {
    config: GeneratorConfig,
    synthesizer: TemporalPointSynthesizer,
    /// Target PLY file.
    output_path: PathBuf,
}

impl FixtureGenerator {
    /// Rejects invalid frame or point counts before anything is allocated.
    pub fn new(config: GeneratorConfig, output_path: impl AsRef<Path>) -> Result<Self> {
        let synthesizer =
            TemporalPointSynthesizer::new(config.frame_count, config.points_per_frame)?;

        Ok(Self {
            config,
            synthesizer,
            output_path: output_path.as_ref().to_path_buf(),
        })
    }

    /// Header schema including the optional frame comment.
    pub fn schema(&self) -> PlySchema {
        let schema = PlySchema::splat_with_lifetime();
        if self.config.frame_comment {
            schema.with_comment(format!("frames {}", self.config.frame_count))
        } else {
            schema
        }
    }

    /// Runs with an RNG seeded from the configuration, or from the OS when unseeded.
    pub fn generate(&self) -> Result<GenerationReport> {
        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        self.generate_with_rng(&mut rng)
    }

    /// Runs with a caller supplied RNG.
    ///
    /// The PLY and the manifest are each replaced atomically, PLY first. If the
    /// manifest write fails the error is returned and the new PLY stays in place.
    pub fn generate_with_rng(&self, rng: &mut impl Rng) -> Result<GenerationReport> {
        tracing::info!(
            "Generating {} frames x {} points -> {}",
            self.synthesizer.frame_count(),
            self.synthesizer.points_per_frame(),
            self.output_path.display()
        );

        let cloud = self.synthesize(rng);
        let bounds = cloud.bounds();
        self.log_bounds(&bounds);

        let schema = self.schema();
        let stats =
            PlyWriter::new(schema.clone()).write_file(&self.output_path, cloud.points())?;
        tracing::info!(
            "Saved {} ({} vertices, {} header + {} body bytes)",
            self.output_path.display(),
            stats.vertex_count,
            stats.header_bytes,
            stats.body_bytes
        );

        let manifest_path = if self.config.write_manifest {
            let manifest = FixtureManifest::build(
                &cloud,
                &self.output_path,
                schema.properties(),
                &self.config,
            );
            let path = FixtureManifest::path_for(&self.output_path);
            manifest.write(&path)?;
            manifest.log_summary();
            Some(path)
        } else {
            None
        };

        tracing::info!("Fixture complete!");
        Ok(GenerationReport {
            ply_path: self.output_path.clone(),
            manifest_path,
            vertex_count: stats.vertex_count,
            header_bytes: stats.header_bytes,
            body_bytes: stats.body_bytes,
            bounds,
        })
    }

    /// Synthesizes all frames with progress tracking.
    fn synthesize(&self, rng: &mut impl Rng) -> PointCloud {
        let pb = ProgressBar::new(self.synthesizer.frame_count() as u64);
        pb.set_style(
            ProgressStyle::with_template(
                "[{bar:40.green/blue}] {pos}/{len} frames ({percent}%) {msg}",
            )
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("▉▊▋▌▍▎▏ "),
        );
        pb.set_message("Synthesizing frames");

        let cloud = self.synthesizer.synthesize_with(rng, |_| pb.inc(1));

        pb.finish_with_message("Frames synthesized");
        cloud
    }

    fn log_bounds(&self, bounds: &PointCloudBounds) {
        tracing::info!("Fixture bounds:");
        tracing::info!("  X: {:.2} to {:.2} (time axis)", bounds.min_x, bounds.max_x);
        tracing::info!("  Y: {:.2} to {:.2}", bounds.min_y, bounds.max_y);
        tracing::info!("  Z: {:.2} to {:.2}", bounds.min_z, bounds.max_z);
    }
}
