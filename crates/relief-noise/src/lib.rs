//! Noise sources compared by the harness.
#![forbid(unsafe_code)]

pub mod algorithm;
pub mod builtin;
pub mod hashed_sine;
pub mod perlin;
pub mod simplex;
pub mod source;

pub use algorithm::Algorithm;
pub use simplex::{SeededSimplex, SimplexNoise};
pub use source::NoiseFn;
