//! 2D Simplex noise with a seed-derived permutation, plus the stateful
//! adapter the harness samples it through.

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use crate::NoiseFn;
use crate::perlin::PERMUTATION;

const F2: f32 = 0.366_025_42; // (sqrt(3) - 1) / 2
const G2: f32 = 0.211_324_87; // (3 - sqrt(3)) / 6

#[derive(Clone)]
pub struct SimplexNoise {
    perm: [u8; 512],
}

impl SimplexNoise {
    /// Seed 0 selects the reference permutation. Any other seed fills the
    /// table with bytes drawn from a seeded RNG; entries may repeat.
    pub fn new(seed: i32) -> Self {
        let mut perm = [0u8; 512];
        if seed == 0 {
            perm[..256].copy_from_slice(&PERMUTATION);
            perm[256..].copy_from_slice(&PERMUTATION);
        } else {
            let mut rng = StdRng::seed_from_u64(seed as u32 as u64);
            rng.fill_bytes(&mut perm);
        }
        Self { perm }
    }

    #[inline]
    fn grad(hash: u8, x: f32, y: f32) -> f32 {
        let h = hash & 7;
        let (u, v) = if h < 4 { (x, y) } else { (y, x) };
        let u = if h & 1 != 0 { -u } else { u };
        let v = if h & 2 != 0 { -2.0 * v } else { 2.0 * v };
        u + v
    }

    /// Raw simplex value, roughly in `[-1, 1]`.
    pub fn sample(&self, x: f32, y: f32) -> f32 {
        let s = (x + y) * F2;
        let i = (x + s).floor() as i32;
        let j = (y + s).floor() as i32;

        let t = (i + j) as f32 * G2;
        let x0 = x - (i as f32 - t);
        let y0 = y - (j as f32 - t);

        let (i1, j1) = if x0 > y0 { (1, 0) } else { (0, 1) };

        let x1 = x0 - i1 as f32 + G2;
        let y1 = y0 - j1 as f32 + G2;
        let x2 = x0 - 1.0 + 2.0 * G2;
        let y2 = y0 - 1.0 + 2.0 * G2;

        let ii = i.rem_euclid(256) as usize;
        let jj = j.rem_euclid(256) as usize;
        let p = &self.perm;

        let g0 = p[ii + p[jj] as usize];
        let g1 = p[ii + i1 + p[jj + j1] as usize];
        let g2 = p[ii + 1 + p[jj + 1] as usize];

        let corner = |g: u8, x: f32, y: f32| {
            let t = 0.5 - x * x - y * y;
            if t < 0.0 {
                0.0
            } else {
                let t = t * t;
                t * t * Self::grad(g, x, y)
            }
        };

        40.0 * (corner(g0, x0, y0) + corner(g1, x1, y1) + corner(g2, x2, y2))
    }

    /// Pixel-space sample: integer coordinates times `scale`, mapped to
    /// roughly `[0, 256]`.
    #[inline]
    pub fn pixel(&self, x: i32, y: i32, scale: f32) -> f32 {
        self.sample(x as f32 * scale, y as f32 * scale) * 128.0 + 128.0
    }
}

/// Holds the permutation for the seed it was last asked for and rebuilds it
/// only when the seed changes.
pub struct SeededSimplex {
    seed: i32,
    noise: SimplexNoise,
    scale: f32,
}

impl SeededSimplex {
    pub fn new(scale: f32) -> Self {
        Self {
            seed: 0,
            noise: SimplexNoise::new(0),
            scale,
        }
    }

    #[inline]
    pub fn seed(&self) -> i32 {
        self.seed
    }

    fn reseed(&mut self, seed: i32) {
        if seed != self.seed {
            self.noise = SimplexNoise::new(seed);
            self.seed = seed;
        }
    }

    /// Truncates `(u, v)` to integer pixel coordinates and returns the pixel
    /// value normalised by 255.
    pub fn sample(&mut self, u: f32, v: f32, seed: i32) -> f32 {
        self.reseed(seed);
        self.noise.pixel(u as i32, v as i32, self.scale) / 255.0
    }
}

pub fn simplex_fn(scale: f32) -> NoiseFn {
    let mut adapter = SeededSimplex::new(scale);
    NoiseFn::seeded(move |u, v, seed| adapter.sample(u, v, seed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_zero_uses_reference_table() {
        let noise = SimplexNoise::new(0);
        assert_eq!(&noise.perm[..256], &PERMUTATION[..]);
        assert_eq!(&noise.perm[256..], &PERMUTATION[..]);
    }

    #[test]
    fn same_seed_same_values() {
        let a = SimplexNoise::new(4242);
        let b = SimplexNoise::new(4242);
        for i in 0..50 {
            let (x, y) = (i as f32 * 0.37, i as f32 * 0.11);
            assert_eq!(a.sample(x, y), b.sample(x, y));
        }
    }

    #[test]
    fn different_seeds_differ() {
        let a = SimplexNoise::new(1234);
        let b = SimplexNoise::new(5678);
        let differs = (0..64).any(|i| {
            let (x, y) = (i as f32 * 0.73 + 0.1, i as f32 * 0.29 + 0.2);
            a.sample(x, y) != b.sample(x, y)
        });
        assert!(differs);
    }

    #[test]
    fn sample_is_bounded() {
        let noise = SimplexNoise::new(77);
        for i in 0..80 {
            for j in 0..80 {
                let v = noise.sample(i as f32 * 0.21, j as f32 * 0.17);
                assert!(v.abs() <= 1.01, "{v}");
            }
        }
    }

    #[test]
    fn pixel_origin_is_midpoint() {
        // Every corner contribution at the origin is zero.
        let noise = SimplexNoise::new(9);
        assert_eq!(noise.pixel(0, 0, 20.0), 128.0);
    }

    #[test]
    fn adapter_reseeds_only_on_change() {
        let mut adapter = SeededSimplex::new(0.5);
        assert_eq!(adapter.seed(), 0);
        let first = adapter.sample(3.0, 5.0, 1001);
        assert_eq!(adapter.seed(), 1001);
        assert_eq!(adapter.sample(3.0, 5.0, 1001), first);
        adapter.sample(3.0, 5.0, 2002);
        assert_eq!(adapter.seed(), 2002);
        let fresh = SimplexNoise::new(1001).pixel(3, 5, 0.5) / 255.0;
        assert_eq!(adapter.sample(3.0, 5.0, 1001), fresh);
    }

    #[test]
    fn adapter_truncates_coordinates() {
        let mut adapter = SeededSimplex::new(0.3);
        assert_eq!(adapter.sample(2.9, 4.1, 17), adapter.sample(2.0, 4.0, 17));
    }
}
