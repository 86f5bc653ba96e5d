use crate::NoiseFn;

const DOT_X: f32 = 12.9898;
const DOT_Y: f32 = 78.233;
const STRETCH: f32 = 43758.5453;

/// Shader-style hash: `2 * sin(dot((u, v), (12.9898, 78.233)) * 43758.5453) - 1`.
///
/// There is no `fract`, so the output spans `[-3, 1]` rather than `[-1, 1]`.
#[inline]
pub fn hashed_sine(u: f32, v: f32) -> f32 {
    let dot = u * DOT_X + v * DOT_Y;
    2.0 * (dot * STRETCH).sin() - 1.0
}

pub fn hashed_sine_fn() -> NoiseFn {
    NoiseFn::unseeded(hashed_sine)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_maps_to_minus_one() {
        assert_eq!(hashed_sine(0.0, 0.0), -1.0);
    }

    #[test]
    fn range_is_minus_three_to_one() {
        for i in 0..200 {
            let v = hashed_sine(i as f32 * 0.013, i as f32 * 0.007);
            assert!((-3.0..=1.0).contains(&v));
        }
    }
}
