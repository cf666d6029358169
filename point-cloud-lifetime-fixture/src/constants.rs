/// Fixture layout and appearance defaults

/// Frames generated when no arguments are given
pub const DEFAULT_FRAME_COUNT: usize = 10;

/// Points per frame when no arguments are given
pub const DEFAULT_POINTS_PER_FRAME: usize = 10_000;

/// Output file when no arguments are given
pub const DEFAULT_OUTPUT_PATH: &str = "test_lifetime_10frames.ply";

/// Distance between neighbouring frame cubes along X
pub const FRAME_SPACING: f32 = 2.0;

/// Half the edge length of each frame cube
pub const CUBE_HALF_EXTENT: f32 = 0.5;

/// Pre-sigmoid opacity, saturates to ~1.0 in the renderer
pub const OPACITY_LOGIT: f32 = 10.0;

/// Per-axis log scale, a small isotropic footprint
pub const LOG_SCALE: f32 = -4.0;

/// Identity rotation as (w, x, y, z)
pub const IDENTITY_ROTATION: [f32; 4] = [1.0, 0.0, 0.0, 0.0];

/// Value of the dominant channel in a frame's base colour
pub const COLOUR_HIGH: f64 = 1.0;

/// Value of the two remaining channels
pub const COLOUR_LOW: f64 = 0.1;

/// Gate weight at which a point counts as visible in timeline summaries
pub const VISIBILITY_THRESHOLD: f32 = 0.5;
