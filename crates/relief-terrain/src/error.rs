use thiserror::Error;

use crate::CHUNK_STRIDE;

#[derive(Debug, Error, PartialEq)]
pub enum TerrainError {
    #[error("invalid dimensions {width}x{height}: each side must be at least {}", CHUNK_STRIDE)]
    InvalidDimensions { width: usize, height: usize },
    #[error("invalid scale {0}: must be finite and positive")]
    InvalidScale(f32),
    #[error("invalid amplitude {0}: must be finite")]
    InvalidAmplitude(f32),
    #[error("heightmap buffer has {actual} cells, expected {expected}")]
    SizeMismatch { expected: usize, actual: usize },
}
