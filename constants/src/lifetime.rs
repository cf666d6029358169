/// Half-width of the visibility window in frame units (active range [mu - w, mu + w])
pub const LIFETIME_HALF_WIDTH: f32 = 0.5;

/// Edge sharpness of the visibility window
pub const LIFETIME_SHARPNESS: f32 = 10.0;

/// Stored sharpness below this is treated as missing by the renderer
pub const MIN_LIFETIME_SHARPNESS: f32 = 0.1;

/// Sharpness the renderer substitutes when the stored value is below the minimum
pub const FALLBACK_LIFETIME_SHARPNESS: f32 = 50.0;
