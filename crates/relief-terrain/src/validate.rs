//! Chunk-boundary height check.
//!
//! Terrain is assembled from premade 8x8 chunks, and the drop from a chunk's
//! origin cell into its neighbours may not exceed a limit. The check is
//! one-directional: only `origin - neighbour` is compared against the limit,
//! so a neighbour rising above the origin never fails. Whether the missing
//! reverse check is intended is unknown; the scan reproduces it as is.
//!
//! Origins are visited at stride 8 from 0 up to `width - 8` and `height - 8`
//! exclusive. Cells past the last full stride are never inspected.

use crate::{CHUNK_STRIDE, Heightmap};

/// Neighbour of a chunk origin, in the order they are compared.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChunkNeighbor {
    /// `(x, y + 1)`
    Up,
    /// `(x + 1, y)`
    Right,
    /// `(x + 1, y + 1)`
    Diagonal,
}

impl ChunkNeighbor {
    const ORDER: [ChunkNeighbor; 3] = [ChunkNeighbor::Up, ChunkNeighbor::Right, ChunkNeighbor::Diagonal];

    #[inline]
    fn offset(self) -> (usize, usize) {
        match self {
            ChunkNeighbor::Up => (0, 1),
            ChunkNeighbor::Right => (1, 0),
            ChunkNeighbor::Diagonal => (1, 1),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChunkViolation {
    pub x: usize,
    pub y: usize,
    pub neighbor: ChunkNeighbor,
    pub delta: f32,
}

/// Scans chunk origins and returns the first comparison that exceeds
/// `chunk_limit`.
pub fn first_violation(map: &Heightmap, chunk_limit: f32) -> Option<ChunkViolation> {
    let ys = map.height().saturating_sub(CHUNK_STRIDE);
    let xs = map.width().saturating_sub(CHUNK_STRIDE);
    for y in (0..ys).step_by(CHUNK_STRIDE) {
        for x in (0..xs).step_by(CHUNK_STRIDE) {
            let origin = map.get(x, y);
            for neighbor in ChunkNeighbor::ORDER {
                let (dx, dy) = neighbor.offset();
                let delta = origin - map.get(x + dx, y + dy);
                if delta > chunk_limit {
                    log::debug!(
                        target: "terrain",
                        "chunk ({}, {}) {:?} delta {:.3} > {:.3}",
                        x, y, neighbor, delta, chunk_limit
                    );
                    return Some(ChunkViolation {
                        x,
                        y,
                        neighbor,
                        delta,
                    });
                }
            }
        }
    }
    None
}

/// `true` when no chunk origin drops into a neighbour by more than
/// `chunk_limit`.
#[inline]
pub fn validate(map: &Heightmap, chunk_limit: f32) -> bool {
    first_violation(map, chunk_limit).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_map_passes_at_zero_limit() {
        assert!(validate(&Heightmap::new(16, 16), 0.0));
    }

    #[test]
    fn origin_above_up_neighbour_fails() {
        let mut map = Heightmap::new(16, 16);
        map.set(0, 0, 10.0);
        map.set(0, 1, 0.0);
        assert!(!validate(&map, 5.0));
        let v = first_violation(&map, 5.0).unwrap();
        assert_eq!((v.x, v.y, v.neighbor, v.delta), (0, 0, ChunkNeighbor::Up, 10.0));
    }

    #[test]
    fn reverse_drop_is_not_flagged() {
        let mut map = Heightmap::new(16, 16);
        map.set(0, 1, 10.0);
        map.set(1, 0, 10.0);
        map.set(1, 1, 10.0);
        assert!(validate(&map, 5.0));
    }

    #[test]
    fn each_neighbour_is_checked() {
        for (nx, ny, expect) in [
            (0, 1, ChunkNeighbor::Up),
            (1, 0, ChunkNeighbor::Right),
            (1, 1, ChunkNeighbor::Diagonal),
        ] {
            let mut map = Heightmap::filled(16, 16, 3.0);
            map.set(nx, ny, -3.0);
            let v = first_violation(&map, 5.0).unwrap();
            assert_eq!(v.neighbor, expect);
            assert_eq!(v.delta, 6.0);
        }
    }

    #[test]
    fn limit_is_exclusive() {
        let mut map = Heightmap::new(16, 16);
        map.set(0, 0, 5.0);
        assert!(validate(&map, 5.0));
        assert!(!validate(&map, 4.999));
    }

    #[test]
    fn only_chunk_origins_are_scanned() {
        let mut map = Heightmap::new(16, 16);
        map.set(3, 4, 100.0);
        assert!(validate(&map, 1.0));
    }

    #[test]
    fn last_stride_is_skipped() {
        // 16 wide: origins 0 only. The origin at 8 lies in the final stride.
        let mut map = Heightmap::new(16, 16);
        map.set(8, 0, 100.0);
        map.set(0, 8, 100.0);
        assert!(validate(&map, 1.0));

        let mut map = Heightmap::new(24, 24);
        map.set(8, 8, 100.0);
        assert!(!validate(&map, 1.0));
    }

    #[test]
    fn partial_edge_is_ignored() {
        let mut map = Heightmap::new(20, 20);
        map.set(16, 0, 100.0);
        assert!(validate(&map, 1.0));
        map.set(8, 8, 100.0);
        assert!(!validate(&map, 1.0));
    }

    #[test]
    fn single_stride_map_is_vacuously_valid() {
        let mut map = Heightmap::new(8, 8);
        map.set(0, 0, 1e6);
        assert!(validate(&map, 0.0));
    }

    #[test]
    fn first_violation_follows_scan_order() {
        let mut map = Heightmap::new(32, 32);
        map.set(16, 0, 50.0);
        map.set(0, 8, 50.0);
        let v = first_violation(&map, 1.0).unwrap();
        assert_eq!((v.x, v.y), (16, 0));
    }
}
