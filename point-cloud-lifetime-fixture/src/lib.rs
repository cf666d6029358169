//! Generates 4D Gaussian splat test fixtures: one cube of points per time slot, each
//! point gated in time by a lifetime window, written as binary little-endian PLY.
pub mod bounds;
pub mod colour;
pub mod config;
pub mod constants;
pub mod error;
pub mod generator;
pub mod lifetime;
pub mod manifest;
pub mod ply_writer;
pub mod point;
pub mod synthesizer;

pub use config::GeneratorConfig;
pub use error::{FixtureError, Result};
pub use generator::{FixtureGenerator, GenerationReport};
pub use lifetime::LifetimeParams;
pub use ply_writer::{PlyRecord, PlySchema, PlyWriteStats, PlyWriter};
pub use point::{PointCloud, SplatPoint};
pub use synthesizer::TemporalPointSynthesizer;
