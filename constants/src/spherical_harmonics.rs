/// Zeroth-order spherical harmonic basis value, 1 / (2 * sqrt(pi)).
/// Renderers decode display colour as `dc * SH_C0 + 0.5`.
pub const SH_C0: f64 = 0.28209479177387814;
