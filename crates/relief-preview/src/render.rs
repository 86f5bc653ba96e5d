use std::path::Path;

use image::{GrayImage, ImageBuffer};
use relief_terrain::Heightmap;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PreviewError {
    #[error("image {width}x{height} does not fit in a PNG")]
    TooLarge { width: usize, height: usize },
    #[error("failed to write image: {0}")]
    Image(#[from] image::ImageError),
}

/// Single-channel 8-bit image, row 0 at the top.
#[derive(Clone, Debug, PartialEq)]
pub struct PreviewImage {
    pub width: usize,
    pub height: usize,
    pub data: Vec<u8>,
}

impl PreviewImage {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![0; width * height],
        }
    }

    #[inline]
    pub fn put_pixel(&mut self, x: usize, y: usize, value: u8) {
        self.data[y * self.width + x] = value;
    }

    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.width + x]
    }

    pub fn to_gray_image(&self) -> Result<GrayImage, PreviewError> {
        let too_large = || PreviewError::TooLarge {
            width: self.width,
            height: self.height,
        };
        let w = u32::try_from(self.width).map_err(|_| too_large())?;
        let h = u32::try_from(self.height).map_err(|_| too_large())?;
        ImageBuffer::from_raw(w, h, self.data.clone()).ok_or_else(too_large)
    }

    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<(), PreviewError> {
        let img = self.to_gray_image()?;
        img.save_with_format(path.as_ref(), image::ImageFormat::Png)?;
        log::debug!("wrote {}x{} preview to {}", self.width, self.height, path.as_ref().display());
        Ok(())
    }
}

#[inline]
fn intensity(height: f32, amplitude: f32) -> u8 {
    if amplitude == 0.0 {
        return 0;
    }
    let t = (height / amplitude).clamp(0.0, 1.0);
    // NaN clamps to NaN; `as u8` maps it to 0.
    (t * 255.0).round() as u8
}

/// Maps each cell to `height / amplitude`, clamped to `[0, 1]`. Heightmap row
/// `y = 0` lands on the bottom image row.
pub fn render(map: &Heightmap, amplitude: f32) -> PreviewImage {
    let mut image = PreviewImage::new(map.width(), map.height());
    for (x, y, h) in map.iter() {
        let py = map.height() - 1 - y;
        image.put_pixel(x, py, intensity(h, amplitude));
    }
    image
}
