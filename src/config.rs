use std::fs;
use std::path::Path;

use anyhow::{Context, bail};
use relief_noise::Algorithm;
use relief_terrain::GenerateParams;
use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
pub struct HarnessConfig {
    #[serde(default)]
    pub world: World,
    #[serde(default)]
    pub seeds: Seeds,
    #[serde(default = "default_tests")]
    pub tests: Vec<TestSpec>,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            world: World::default(),
            seeds: Seeds::default(),
            tests: default_tests(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct World {
    #[serde(default = "default_width")]
    pub width: usize,
    #[serde(default = "default_height")]
    pub height: usize,
    #[serde(default = "default_amplitude")]
    pub amplitude: f32,
    #[serde(default = "default_scale")]
    pub scale: f32,
    #[serde(default = "default_chunk_height_limit")]
    pub chunk_height_limit: f32,
}
fn default_width() -> usize {
    400
}
fn default_height() -> usize {
    400
}
fn default_amplitude() -> f32 {
    50.0
}
fn default_scale() -> f32 {
    20.0
}
fn default_chunk_height_limit() -> f32 {
    4.0
}
impl Default for World {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            amplitude: default_amplitude(),
            scale: default_scale(),
            chunk_height_limit: default_chunk_height_limit(),
        }
    }
}

impl World {
    pub fn generate_params(&self) -> anyhow::Result<GenerateParams> {
        GenerateParams::new(self.width, self.height, self.scale, self.amplitude)
            .context("invalid [world] section")
    }
}

/// Seed count and the half-open range `[min, max)` seeds are drawn from.
#[derive(Clone, Debug, Deserialize)]
pub struct Seeds {
    #[serde(default = "default_seed_count")]
    pub count: usize,
    #[serde(default = "default_seed_min")]
    pub min: i32,
    #[serde(default = "default_seed_max")]
    pub max: i32,
}
fn default_seed_count() -> usize {
    30
}
fn default_seed_min() -> i32 {
    1000
}
fn default_seed_max() -> i32 {
    9999
}
impl Default for Seeds {
    fn default() -> Self {
        Self {
            count: default_seed_count(),
            min: default_seed_min(),
            max: default_seed_max(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct TestSpec {
    pub name: String,
    pub algorithm: Algorithm,
    #[serde(default = "default_render")]
    pub render: bool,
    #[serde(default)]
    pub extrude: bool,
}
fn default_render() -> bool {
    true
}

impl TestSpec {
    pub fn new(name: &str, algorithm: Algorithm, render: bool, extrude: bool) -> Self {
        Self {
            name: name.to_owned(),
            algorithm,
            render,
            extrude,
        }
    }
}

fn default_tests() -> Vec<TestSpec> {
    vec![
        TestSpec::new("Builtin Perlin", Algorithm::BuiltinPerlin, true, false),
        TestSpec::new("Hashed Sine", Algorithm::HashedSine, true, false),
        TestSpec::new("Reference Perlin", Algorithm::ReferencePerlin, true, true),
        TestSpec::new("Simplex", Algorithm::Simplex, true, true),
    ]
}

impl HarnessConfig {
    pub fn validate(&self) -> anyhow::Result<()> {
        self.world.generate_params()?;
        if self.seeds.count == 0 {
            bail!("seeds.count must be at least 1");
        }
        if self.seeds.min >= self.seeds.max {
            bail!(
                "seeds.min ({}) must be below seeds.max ({})",
                self.seeds.min,
                self.seeds.max
            );
        }
        let limit = self.world.chunk_height_limit;
        if limit.is_nan() || limit < 0.0 {
            bail!(
                "world.chunk_height_limit must be non-negative, got {}",
                self.world.chunk_height_limit
            );
        }
        Ok(())
    }
}

pub fn load_config_from_path(path: &Path) -> anyhow::Result<HarnessConfig> {
    let s = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let cfg: HarnessConfig =
        toml::from_str(&s).with_context(|| format!("parsing config {}", path.display()))?;
    Ok(cfg)
}
