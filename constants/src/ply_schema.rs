/// PLY magic line
pub const PLY_MAGIC: &str = "ply";

/// Format line for the only encoding we emit
pub const PLY_FORMAT_LINE: &str = "format binary_little_endian 1.0";

/// Element holding one row per splat
pub const VERTEX_ELEMENT: &str = "vertex";

/// Scalar type keyword used for every property
pub const FLOAT_TYPE: &str = "float";

/// Terminates the text section of the header
pub const END_HEADER: &str = "end_header";

/// Per-vertex properties in body order. A reader maps these by name, the body is
/// packed in exactly this order.
pub const SPLAT_PROPERTIES: [&str; 20] = [
    "x",
    "y",
    "z",
    "nx",
    "ny",
    "nz",
    "f_dc_0",
    "f_dc_1",
    "f_dc_2",
    "opacity",
    "scale_0",
    "scale_1",
    "scale_2",
    "rot_0",
    "rot_1",
    "rot_2",
    "rot_3",
    "lifetime_mu",
    "lifetime_w",
    "lifetime_k",
];

/// Number of f32 fields in one vertex record
pub const SPLAT_FIELD_COUNT: usize = SPLAT_PROPERTIES.len();

/// Size in bytes of one packed vertex record
pub const SPLAT_RECORD_BYTES: usize = SPLAT_FIELD_COUNT * size_of::<f32>();
