//! Seeded heightmap generation and chunk-boundary validation.
#![forbid(unsafe_code)]

pub mod error;
pub mod generate;
pub mod heightmap;
pub mod validate;

pub use error::TerrainError;
pub use generate::{GenerateParams, generate};
pub use heightmap::Heightmap;
pub use validate::{ChunkNeighbor, ChunkViolation, first_violation, validate};

/// Side length of a chunk in cells. Chunk origins sit on multiples of this.
pub const CHUNK_STRIDE: usize = 8;
