/// Temporal visibility window carried by every splat
use bytemuck::{Pod, Zeroable};
use constants::lifetime::{
    FALLBACK_LIFETIME_SHARPNESS, LIFETIME_HALF_WIDTH, LIFETIME_SHARPNESS, MIN_LIFETIME_SHARPNESS,
};

/// Centre, half-width and edge sharpness of a point's visibility window.
/// Field order matches the `lifetime_mu`, `lifetime_w`, `lifetime_k` properties.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct LifetimeParams {
    pub mu: f32,
    pub w: f32,
    pub k: f32,
}

impl LifetimeParams {
    pub fn new(mu: f32, w: f32, k: f32) -> Self {
        Self { mu, w, k }
    }

    /// Window covering exactly one frame's time slot, centred on the frame index.
    pub fn for_frame(frame: usize) -> Self {
        Self::new(frame as f32, LIFETIME_HALF_WIDTH, LIFETIME_SHARPNESS)
    }

    /// Visibility weight at time `t` as the renderer evaluates it: a rising sigmoid at
    /// `mu - w` multiplied by a falling sigmoid at `mu + w`.
    pub fn weight(&self, t: f32) -> f32 {
        let k = if self.k < MIN_LIFETIME_SHARPNESS {
            FALLBACK_LIFETIME_SHARPNESS
        } else {
            self.k
        };
        let rising = sigmoid(k * (t - (self.mu - self.w)));
        let falling = sigmoid(-k * (t - (self.mu + self.w)));
        rising * falling
    }

    pub fn is_visible(&self, t: f32, threshold: f32) -> bool {
        self.weight(t) >= threshold
    }
}

fn sigmoid(x: f32) -> f32 {
    1.0 / (1.0 + (-x).exp())
}
