//! Deterministic integer-hash noise used to perturb wind.

use weft_math::Point;

const POSITION_SCALE: f64 = 1000.0;

/// Lattice-style hash noise in `[-1, 1]` for a position.
///
/// The components are scaled by 1000, truncated to integers and packed
/// into one seed (`x + (y << 1) + (z << 2)`), which then goes through the
/// shift-xor / polynomial mix. Arithmetic wraps at 32 bits.
pub fn position_noise(position: Point) -> f64 {
    let scaled = |v: f32| (POSITION_SCALE * f64::from(v)) as i32;

    let seed = scaled(position.x())
        .wrapping_add(scaled(position.y()).wrapping_shl(1))
        .wrapping_add(scaled(position.z()).wrapping_shl(2));

    hash_noise(seed)
}

/// Maps an integer seed to `[-1, 1]`.
pub fn hash_noise(seed: i32) -> f64 {
    let n = seed.wrapping_shl(13) ^ seed;
    let mixed = n
        .wrapping_mul(
            n.wrapping_mul(n)
                .wrapping_mul(15731)
                .wrapping_add(789_221),
        )
        .wrapping_add(1_376_312_589)
        & 0x7fff_ffff;
    1.0 - f64::from(mixed) / 1_073_741_824.0
}
