use relief_terrain::Heightmap;

/// Gap between the world origin and the first extruded tile.
const LAYOUT_MARGIN: f32 = 10.0;

/// Snaps a height to the nearest half unit, ties to even.
#[inline]
pub fn snap_height(h: f32) -> f32 {
    (h * 2.0).round_ties_even() / 2.0
}

/// One extruded heightmap: a block per cell, offset to its layout slot.
#[derive(Clone, Debug)]
pub struct CubeWorld {
    pub name: String,
    pub origin: [f32; 3],
    pub blocks: Vec<[f32; 3]>,
}

impl CubeWorld {
    #[inline]
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Lowest and highest snapped block height.
    pub fn height_range(&self) -> Option<(f32, f32)> {
        let mut it = self.blocks.iter().map(|b| b[1]);
        let first = it.next()?;
        Some(it.fold((first, first), |(lo, hi), y| (lo.min(y), hi.max(y))))
    }

    /// Horizontal footprint as `(min_x, min_z, max_x, max_z)`, inclusive.
    pub fn footprint(&self) -> Option<(f32, f32, f32, f32)> {
        let first = self.blocks.first()?;
        Some(self.blocks.iter().fold(
            (first[0], first[2], first[0], first[2]),
            |(x0, z0, x1, z1), b| (x0.min(b[0]), z0.min(b[2]), x1.max(b[0]), z1.max(b[2])),
        ))
    }
}

/// Lays extruded worlds out diagonally so successive outputs never overlap.
#[derive(Debug)]
pub struct CubeWorldLayout {
    width: usize,
    height: usize,
    worlds: Vec<CubeWorld>,
}

impl CubeWorldLayout {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            worlds: Vec::new(),
        }
    }

    #[inline]
    pub fn count(&self) -> usize {
        self.worlds.len()
    }

    pub fn worlds(&self) -> &[CubeWorld] {
        &self.worlds
    }

    /// Origin of the next slot: `(width*count + 10, 0, height*count + 10)`.
    pub fn next_origin(&self) -> [f32; 3] {
        let n = self.count();
        [
            (self.width * n) as f32 + LAYOUT_MARGIN,
            0.0,
            (self.height * n) as f32 + LAYOUT_MARGIN,
        ]
    }

    /// Places one block per cell at `(x, snap_height(h), y)` shifted by the
    /// next slot origin, then advances the slot counter.
    pub fn extrude(&mut self, name: &str, map: &Heightmap) -> &CubeWorld {
        let origin = self.next_origin();
        let blocks = map
            .iter()
            .map(|(x, y, h)| [x as f32 + origin[0], snap_height(h), y as f32 + origin[2]])
            .collect();
        log::debug!(
            "extruded {} into {} blocks at ({}, {})",
            name,
            map.width() * map.height(),
            origin[0],
            origin[2]
        );
        self.worlds.push(CubeWorld {
            name: name.to_owned(),
            origin,
            blocks,
        });
        &self.worlds[self.worlds.len() - 1]
    }

    /// Drops every world and restarts the slot counter.
    pub fn clear(&mut self) {
        self.worlds.clear();
    }
}
