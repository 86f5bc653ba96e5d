use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use relief_preview::{CubeWorldLayout, render};
use relief_terrain::Heightmap;

use crate::harness::{Extruder, Renderer};

/// Writes one grayscale PNG per rendered test into `out_dir`.
pub struct PngRenderer {
    out_dir: PathBuf,
    written: Vec<PathBuf>,
}

impl PngRenderer {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
            written: Vec::new(),
        }
    }

    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

fn file_stem(test: &str) -> String {
    let mut stem = String::with_capacity(test.len());
    for c in test.chars() {
        if c.is_ascii_alphanumeric() {
            stem.push(c.to_ascii_lowercase());
        } else if !stem.ends_with('-') {
            stem.push('-');
        }
    }
    let trimmed = stem.trim_matches('-');
    if trimmed.is_empty() {
        "preview".to_owned()
    } else {
        trimmed.to_owned()
    }
}

impl Renderer for PngRenderer {
    fn render(&mut self, test: &str, map: &Heightmap, amplitude: f32) -> anyhow::Result<()> {
        fs::create_dir_all(&self.out_dir)
            .with_context(|| format!("creating {}", self.out_dir.display()))?;
        let path = self.out_dir.join(format!("{}.png", file_stem(test)));
        render(map, amplitude)
            .save_png(&path)
            .with_context(|| format!("writing preview for {test}"))?;
        log::info!(target: "harness", "Rendered {} to {}", test, path.display());
        self.written.push(path);
        Ok(())
    }
}

/// Keeps extruded cube worlds laid out side by side for the run.
pub struct CubeExtruder {
    layout: CubeWorldLayout,
}

impl CubeExtruder {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            layout: CubeWorldLayout::new(width, height),
        }
    }

    pub fn layout(&self) -> &CubeWorldLayout {
        &self.layout
    }
}

impl Extruder for CubeExtruder {
    fn extrude(&mut self, test: &str, map: &Heightmap) -> anyhow::Result<()> {
        let world = self.layout.extrude(test, map);
        if let Some((lo, hi)) = world.height_range() {
            log::info!(
                target: "harness",
                "Cube world {}: {} blocks, heights {:.1}..{:.1}",
                world.name,
                world.block_count(),
                lo,
                hi
            );
        }
        Ok(())
    }

    fn reset(&mut self) {
        self.layout.clear();
    }
}

/// Discards previews.
pub struct NoPreview;

impl Renderer for NoPreview {
    fn render(&mut self, _test: &str, _map: &Heightmap, _amplitude: f32) -> anyhow::Result<()> {
        Ok(())
    }
}

impl Extruder for NoPreview {
    fn extrude(&mut self, _test: &str, _map: &Heightmap) -> anyhow::Result<()> {
        Ok(())
    }

    fn reset(&mut self) {}
}
