//! Improved Perlin noise in 2D over the reference permutation.

use crate::NoiseFn;

pub(crate) const PERMUTATION: [u8; 256] = [
    151, 160, 137, 91, 90, 15, 131, 13, 201, 95, 96, 53, 194, 233, 7, 225, 140, 36, 103, 30, 69,
    142, 8, 99, 37, 240, 21, 10, 23, 190, 6, 148, 247, 120, 234, 75, 0, 26, 197, 62, 94, 252, 219,
    203, 117, 35, 11, 32, 57, 177, 33, 88, 237, 149, 56, 87, 174, 20, 125, 136, 171, 168, 68, 175,
    74, 165, 71, 134, 139, 48, 27, 166, 77, 146, 158, 231, 83, 111, 229, 122, 60, 211, 133, 230,
    220, 105, 92, 41, 55, 46, 245, 40, 244, 102, 143, 54, 65, 25, 63, 161, 1, 216, 80, 73, 209, 76,
    132, 187, 208, 89, 18, 169, 200, 196, 135, 130, 116, 188, 159, 86, 164, 100, 109, 198, 173,
    186, 3, 64, 52, 217, 226, 250, 124, 123, 5, 202, 38, 147, 118, 126, 255, 82, 85, 212, 207, 206,
    59, 227, 47, 16, 58, 17, 182, 189, 28, 42, 223, 183, 170, 213, 119, 248, 152, 2, 44, 154, 163,
    70, 221, 153, 101, 155, 167, 43, 172, 9, 129, 22, 39, 253, 19, 98, 108, 110, 79, 113, 224, 232,
    178, 185, 112, 104, 218, 246, 97, 228, 251, 34, 242, 193, 238, 210, 144, 12, 191, 179, 162,
    241, 81, 51, 145, 235, 249, 14, 239, 107, 49, 192, 214, 31, 181, 199, 106, 157, 184, 84, 204,
    176, 115, 121, 50, 45, 127, 4, 150, 254, 138, 236, 205, 93, 222, 114, 67, 29, 24, 72, 243, 141,
    128, 195, 78, 66, 215, 61, 156, 180,
];

#[inline]
fn perm(i: usize) -> usize {
    // 257-entry table: index 256 wraps to entry 0.
    PERMUTATION[i & 0xff] as usize
}

#[inline]
fn fade(t: f32) -> f32 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

#[inline]
fn lerp(t: f32, a: f32, b: f32) -> f32 {
    a + t * (b - a)
}

#[inline]
fn grad(hash: usize, x: f32, y: f32) -> f32 {
    let gx = if hash & 1 == 0 { x } else { -x };
    let gy = if hash & 2 == 0 { y } else { -y };
    gx + gy
}

/// Samples 2D improved Perlin noise. Output lies in `[-1, 1]` and is zero on
/// every integer lattice point. The lattice repeats every 256 units.
pub fn perlin_2d(x: f32, y: f32) -> f32 {
    let xf = x.floor();
    let yf = y.floor();
    let xi = (xf as i32 & 0xff) as usize;
    let yi = (yf as i32 & 0xff) as usize;
    let x = x - xf;
    let y = y - yf;
    let u = fade(x);
    let v = fade(y);
    let a = (perm(xi) + yi) & 0xff;
    let b = (perm(xi + 1) + yi) & 0xff;
    lerp(
        v,
        lerp(u, grad(perm(a), x, y), grad(perm(b), x - 1.0, y)),
        lerp(u, grad(perm(a + 1), x, y - 1.0), grad(perm(b + 1), x - 1.0, y - 1.0)),
    )
}

pub fn reference_perlin_fn() -> NoiseFn {
    NoiseFn::unseeded(perlin_2d)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_on_lattice() {
        for i in -4..4 {
            for j in -4..4 {
                assert_eq!(perlin_2d(i as f32, j as f32), 0.0);
            }
        }
    }

    #[test]
    fn permutation_is_a_permutation() {
        let mut seen = [false; 256];
        for &p in PERMUTATION.iter() {
            assert!(!seen[p as usize]);
            seen[p as usize] = true;
        }
    }

    #[test]
    fn bounded_and_nontrivial() {
        let mut nonzero = 0;
        for i in 0..100 {
            for j in 0..100 {
                let v = perlin_2d(i as f32 * 0.173, j as f32 * 0.291);
                assert!(v.abs() <= 1.0 + 1e-5);
                if v != 0.0 {
                    nonzero += 1;
                }
            }
        }
        assert!(nonzero > 1000);
    }

    #[test]
    fn periodic_over_256() {
        let a = perlin_2d(3.3, 4.7);
        let b = perlin_2d(3.3 + 256.0, 4.7);
        assert!((a - b).abs() < 1e-3);
    }
}
