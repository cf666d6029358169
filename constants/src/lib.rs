/// Values shared between the fixture generator and any renderer that reads its output.
pub mod lifetime;
pub mod ply_schema;
pub mod spherical_harmonics;
