use fastnoise_lite::{FastNoiseLite, NoiseType};

use crate::NoiseFn;

/// Library Perlin noise sampled at unit frequency with the library's default
/// seed. It has no seed input of its own.
pub fn builtin_perlin() -> FastNoiseLite {
    let mut noise = FastNoiseLite::new();
    noise.set_noise_type(Some(NoiseType::Perlin));
    noise.set_frequency(Some(1.0));
    noise
}

/// Library output remapped from `[-1, 1]` to `[0, 1]`.
pub fn builtin_perlin_fn() -> NoiseFn {
    let noise = builtin_perlin();
    NoiseFn::unseeded(move |u, v| 0.5 * (noise.get_noise_2d(u, v) + 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stays_in_unit_range() {
        let noise = builtin_perlin();
        for i in 0..64 {
            for j in 0..64 {
                let v = noise.get_noise_2d(i as f32 * 0.37, j as f32 * 0.53);
                assert!((-1.0..=1.0).contains(&v), "{v} out of range");
            }
        }
    }

    #[test]
    fn adapter_is_remapped_to_unit_interval() {
        let NoiseFn::Unseeded(mut f) = builtin_perlin_fn() else {
            panic!("builtin perlin takes no seed");
        };
        let noise = builtin_perlin();
        for i in 0..64 {
            for j in 0..64 {
                let (u, v) = (i as f32 * 0.37, j as f32 * 0.53);
                let got = f(u, v);
                assert!((0.0..=1.0).contains(&got), "{got} out of range");
                assert!((got - 0.5 * (noise.get_noise_2d(u, v) + 1.0)).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn is_deterministic() {
        let a = builtin_perlin();
        let b = builtin_perlin();
        assert_eq!(a.get_noise_2d(3.25, 7.5), b.get_noise_2d(3.25, 7.5));
    }

    #[test]
    fn varies_across_space() {
        let noise = builtin_perlin();
        let first = noise.get_noise_2d(0.3, 0.3);
        let differs = (1..32).any(|i| noise.get_noise_2d(0.3 + i as f32 * 0.41, 0.3) != first);
        assert!(differs);
    }
}
