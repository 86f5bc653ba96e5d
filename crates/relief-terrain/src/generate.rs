use relief_noise::NoiseFn;

use crate::{CHUNK_STRIDE, Heightmap, TerrainError};

/// Grid size and sampling parameters shared by every seed of a run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GenerateParams {
    pub width: usize,
    pub height: usize,
    pub scale: f32,
    pub amplitude: f32,
}

impl GenerateParams {
    pub fn new(width: usize, height: usize, scale: f32, amplitude: f32) -> Result<Self, TerrainError> {
        let params = Self {
            width,
            height,
            scale,
            amplitude,
        };
        params.check()?;
        Ok(params)
    }

    pub fn check(&self) -> Result<(), TerrainError> {
        if self.width < CHUNK_STRIDE || self.height < CHUNK_STRIDE {
            return Err(TerrainError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(TerrainError::InvalidScale(self.scale));
        }
        if !self.amplitude.is_finite() {
            return Err(TerrainError::InvalidAmplitude(self.amplitude));
        }
        Ok(())
    }
}

/// Samples `noise` over the grid and multiplies by the amplitude.
///
/// A seeded function receives `(x/width*scale, y/height*scale, seed)`. An
/// unseeded one gets the seed folded into its coordinates as an offset:
/// `((x+seed)/width*scale, (y+seed)/height*scale)`. Cells are visited row by
/// row.
pub fn generate(
    noise: &mut NoiseFn,
    params: &GenerateParams,
    seed: i32,
) -> Result<Heightmap, TerrainError> {
    params.check()?;
    let GenerateParams {
        width,
        height,
        scale,
        amplitude,
    } = *params;
    let w = width as f32;
    let h = height as f32;
    let mut cells = Vec::with_capacity(width * height);
    match noise {
        NoiseFn::Seeded(f) => {
            for y in 0..height {
                for x in 0..width {
                    let u = x as f32 / w * scale;
                    let v = y as f32 / h * scale;
                    cells.push(f(u, v, seed) * amplitude);
                }
            }
        }
        NoiseFn::Unseeded(f) => {
            let offset = seed as f32;
            for y in 0..height {
                for x in 0..width {
                    let u = (x as f32 + offset) / w * scale;
                    let v = (y as f32 + offset) / h * scale;
                    cells.push(f(u, v) * amplitude);
                }
            }
        }
    }
    Heightmap::from_vec(width, height, cells)
}
