use crate::TerrainError;

/// Dense row-major grid of heights, indexed by `(x, y)`.
#[derive(Clone, Debug, PartialEq)]
pub struct Heightmap {
    width: usize,
    height: usize,
    cells: Vec<f32>,
}

impl Heightmap {
    pub fn new(width: usize, height: usize) -> Self {
        Self::filled(width, height, 0.0)
    }

    pub fn filled(width: usize, height: usize, value: f32) -> Self {
        Self {
            width,
            height,
            cells: vec![value; width * height],
        }
    }

    pub fn from_vec(width: usize, height: usize, cells: Vec<f32>) -> Result<Self, TerrainError> {
        let expected = width * height;
        if cells.len() != expected {
            return Err(TerrainError::SizeMismatch {
                expected,
                actual: cells.len(),
            });
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn idx(&self, x: usize, y: usize) -> usize {
        debug_assert!(x < self.width && y < self.height);
        y * self.width + x
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> f32 {
        self.cells[self.idx(x, y)]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, value: f32) {
        let i = self.idx(x, y);
        self.cells[i] = value;
    }

    #[inline]
    pub fn cells(&self) -> &[f32] {
        &self.cells
    }

    /// Yields `(x, y, height)` in row order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, f32)> + '_ {
        let w = self.width.max(1);
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &h)| (i % w, i / w, h))
    }

    /// Smallest and largest height, or `None` for an empty map.
    pub fn range(&self) -> Option<(f32, f32)> {
        let mut it = self.cells.iter().copied();
        let first = it.next()?;
        Some(it.fold((first, first), |(lo, hi), h| (lo.min(h), hi.max(h))))
    }
}
