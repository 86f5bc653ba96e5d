use proptest::prelude::*;
use relief_preview::{CubeWorldLayout, render, snap_height};
use relief_terrain::Heightmap;

fn dim() -> impl Strategy<Value = usize> {
    8usize..=24
}

proptest! {
    // Snapped heights are half-unit multiples within a quarter unit of the input
    #[test]
    fn snap_is_half_unit(h in -1e4f32..1e4) {
        let s = snap_height(h);
        prop_assert_eq!((s * 2.0).fract(), 0.0);
        prop_assert!((s - h).abs() <= 0.25 + 1e-3);
    }

    // Successive extrusions occupy disjoint footprints
    #[test]
    fn extrusions_do_not_overlap(w in dim(), h in dim(), n in 2usize..5) {
        let mut layout = CubeWorldLayout::new(w, h);
        let map = Heightmap::new(w, h);
        for i in 0..n {
            layout.extrude(&format!("w{i}"), &map);
        }
        let prints: Vec<_> = layout.worlds().iter().map(|c| c.footprint().unwrap()).collect();
        for a in 0..prints.len() {
            for b in (a + 1)..prints.len() {
                let (ax0, az0, ax1, az1) = prints[a];
                let (bx0, bz0, bx1, bz1) = prints[b];
                let overlap = ax0 <= bx1 && bx0 <= ax1 && az0 <= bz1 && bz0 <= az1;
                prop_assert!(!overlap);
            }
        }
    }

    // Rendering preserves dimensions and maps in-range heights monotonically
    #[test]
    fn render_is_monotone(w in dim(), h in dim(), a in -60.0f32..60.0, b in -60.0f32..60.0) {
        let mut map = Heightmap::new(w, h);
        map.set(0, 0, a.min(b));
        map.set(1, 0, a.max(b));
        let img = render(&map, 50.0);
        prop_assert_eq!((img.width, img.height, img.data.len()), (w, h, w * h));
        prop_assert!(img.pixel(0, h - 1) <= img.pixel(1, h - 1));
    }
}
