use serde::{Deserialize, Serialize};

use crate::NoiseFn;
use crate::builtin::builtin_perlin_fn;
use crate::hashed_sine::hashed_sine_fn;
use crate::perlin::reference_perlin_fn;
use crate::simplex::simplex_fn;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    BuiltinPerlin,
    HashedSine,
    ReferencePerlin,
    Simplex,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::BuiltinPerlin,
        Algorithm::HashedSine,
        Algorithm::ReferencePerlin,
        Algorithm::Simplex,
    ];

    /// Builds a fresh noise function. `scale` is only consumed by sources
    /// that sample in pixel space (simplex).
    pub fn noise_fn(self, scale: f32) -> NoiseFn {
        match self {
            Algorithm::BuiltinPerlin => builtin_perlin_fn(),
            Algorithm::HashedSine => hashed_sine_fn(),
            Algorithm::ReferencePerlin => reference_perlin_fn(),
            Algorithm::Simplex => simplex_fn(scale),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Algorithm::BuiltinPerlin => "builtin-perlin",
            Algorithm::HashedSine => "hashed-sine",
            Algorithm::ReferencePerlin => "reference-perlin",
            Algorithm::Simplex => "simplex",
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
