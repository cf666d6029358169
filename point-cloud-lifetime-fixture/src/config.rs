/// Generator configuration with defaults and validation
use crate::constants::{DEFAULT_FRAME_COUNT, DEFAULT_POINTS_PER_FRAME};
use crate::error::{FixtureError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Number of time slots, one cube per slot.
    pub frame_count: usize,

    /// Points sampled inside each cube.
    pub points_per_frame: usize,

    /// Random seed. Unseeded runs draw entropy from the OS.
    pub seed: Option<u64>,

    /// Append `comment frames <n>` to the header. Off by default so the header carries
    /// only the vertex element.
    pub frame_comment: bool,

    /// Write a JSON manifest next to the PLY file.
    pub write_manifest: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            frame_count: DEFAULT_FRAME_COUNT,
            points_per_frame: DEFAULT_POINTS_PER_FRAME,
            seed: None,
            frame_comment: false,
            write_manifest: true,
        }
    }
}

impl GeneratorConfig {
    pub fn new(frame_count: usize, points_per_frame: usize) -> Self {
        Self {
            frame_count,
            points_per_frame,
            ..Default::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_frame_comment(mut self, enabled: bool) -> Self {
        self.frame_comment = enabled;
        self
    }

    pub fn with_manifest(mut self, enabled: bool) -> Self {
        self.write_manifest = enabled;
        self
    }

    /// Builds a config from signed counts as typed by a user, rejecting anything that
    /// is not a positive integer.
    pub fn from_signed(frame_count: i64, points_per_frame: i64) -> Result<Self> {
        let frames = positive_count("frame count", frame_count)?;
        let points = positive_count("points per frame", points_per_frame)?;
        Ok(Self::new(frames, points))
    }
}

fn positive_count(name: &str, value: i64) -> Result<usize> {
    if value <= 0 {
        return Err(FixtureError::InvalidConfig(format!(
            "{name} must be positive, got {value}"
        )));
    }
    usize::try_from(value)
        .map_err(|_| FixtureError::InvalidConfig(format!("{name} {value} is too large")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_describe_ten_frame_fixture() {
        let config = GeneratorConfig::default();
        assert_eq!(config.frame_count, 10);
        assert_eq!(config.points_per_frame, 10_000);
        assert!(config.seed.is_none());
        assert!(!config.frame_comment);
        assert!(config.write_manifest);
    }

    #[test]
    fn signed_counts_must_be_positive() {
        assert!(GeneratorConfig::from_signed(3, 4).is_ok());
        assert!(matches!(
            GeneratorConfig::from_signed(0, 4),
            Err(FixtureError::InvalidConfig(_))
        ));
        assert!(matches!(
            GeneratorConfig::from_signed(3, -1),
            Err(FixtureError::InvalidConfig(_))
        ));
    }

    #[test]
    fn missing_json_fields_take_defaults() {
        let config: GeneratorConfig =
            serde_json::from_str(r#"{ "frame_count": 4, "seed": 7 }"#).unwrap();
        assert_eq!(config.frame_count, 4);
        assert_eq!(config.points_per_frame, 10_000);
        assert_eq!(config.seed, Some(7));
    }
}
