use rand::Rng;
use relief_noise::NoiseFn;
use relief_terrain::{GenerateParams, Heightmap, first_violation, generate};

use crate::config::{HarnessConfig, Seeds, TestSpec};
use crate::report::{RunReport, SeedResult, TestReport};

/// Receives the preview-seed heightmap of tests that render.
pub trait Renderer {
    fn render(&mut self, test: &str, map: &Heightmap, amplitude: f32) -> anyhow::Result<()>;
}

/// Receives the preview-seed heightmap of tests that extrude.
pub trait Extruder {
    fn extrude(&mut self, test: &str, map: &Heightmap) -> anyhow::Result<()>;
    /// Drops everything extruded so far.
    fn reset(&mut self);
}

/// Draws `count` seeds uniformly from `[min, max)`.
pub fn generate_seeds<R: Rng>(rng: &mut R, seeds: &Seeds) -> Vec<i32> {
    log::info!(target: "harness", "Generating {} seeds in [{}, {})", seeds.count, seeds.min, seeds.max);
    let out: Vec<i32> = (0..seeds.count)
        .map(|_| rng.gen_range(seeds.min..seeds.max))
        .collect();
    log::debug!(target: "harness", "Seeds: {:?}", out);
    out
}

pub struct Harness<R, E> {
    params: GenerateParams,
    chunk_limit: f32,
    seeds: Vec<i32>,
    renderer: R,
    extruder: E,
}

impl<R: Renderer, E: Extruder> Harness<R, E> {
    pub fn new(config: &HarnessConfig, seeds: Vec<i32>, renderer: R, extruder: E) -> anyhow::Result<Self> {
        config.validate()?;
        anyhow::ensure!(!seeds.is_empty(), "harness needs at least one seed");
        Ok(Self {
            params: config.world.generate_params()?,
            chunk_limit: config.world.chunk_height_limit,
            seeds,
            renderer,
            extruder,
        })
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn extruder(&self) -> &E {
        &self.extruder
    }

    /// Runs every test in order after clearing earlier extrusions.
    pub fn run(&mut self, tests: &[TestSpec]) -> anyhow::Result<RunReport> {
        self.extruder.reset();
        let mut report = RunReport {
            seeds: self.seeds.clone(),
            tests: Vec::with_capacity(tests.len()),
        };
        for test in tests {
            let test_report = self.run_test(test)?;
            log::info!(target: "harness", "{}", test_report);
            report.tests.push(test_report);
        }
        Ok(report)
    }

    pub fn run_test(&mut self, test: &TestSpec) -> anyhow::Result<TestReport> {
        let mut noise = test.algorithm.noise_fn(self.params.scale);
        self.run_with_noise(test, &mut noise)
    }

    /// Generates and validates one heightmap per seed. Only the last seed in
    /// the sequence is handed to the preview collaborators.
    pub fn run_with_noise(&mut self, test: &TestSpec, noise: &mut NoiseFn) -> anyhow::Result<TestReport> {
        log::info!(target: "harness", "Starting tests for {} ({})...", test.name, test.algorithm);
        let last = self.seeds.len() - 1;
        let mut results = Vec::with_capacity(self.seeds.len());
        for (i, &seed) in self.seeds.iter().enumerate() {
            let map = generate(noise, &self.params, seed)?;
            let violation = first_violation(&map, self.chunk_limit);
            if let Some(v) = violation {
                log::debug!(
                    target: "harness",
                    "{} seed {} failed at chunk ({}, {}) {:?}: delta {:.3}",
                    test.name, seed, v.x, v.y, v.neighbor, v.delta
                );
            }
            results.push(SeedResult {
                seed,
                passed: violation.is_none(),
            });
            if i == last {
                if test.render {
                    self.renderer.render(&test.name, &map, self.params.amplitude)?;
                }
                if test.extrude {
                    self.extruder.extrude(&test.name, &map)?;
                }
            }
        }
        Ok(TestReport {
            name: test.name.clone(),
            algorithm: test.algorithm.to_string(),
            results,
        })
    }
}
