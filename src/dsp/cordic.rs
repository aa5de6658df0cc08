//! CORDIC Engine
//!
//! Shift-and-add vector rotation, used for rotating vectors, converting
//! between polar and rectangular form, and producing sine/cosine pairs.
//!
//! Each of the 16 iterations rotates by `±atan(2^-i)` using only shifts and
//! additions on the two components. The iterations scale the vector by a
//! fixed gain of about 1.6468, which is removed once at the end by a single
//! multiplication with [`CORDIC_GAIN_INV_Q30`].
//!
//! Internally the components carry guard bits in an `i32` and the residual
//! angle is tracked at 32-bit BAM resolution, so the angular error after the
//! last iteration stays below one BAM16 step.

use super::angle::Bam16;
use super::fixed_point::{q15_saturate, Q15, Q16_15, Q15_ONE, Q15_ZERO};
use crate::config::CORDIC_ITERATIONS;
use crate::types::{Complex16, Polar16, SinCos16};

/// Micro-rotation angles `atan(2^-i)` in 32-bit BAM (a turn is `2^32`)
const ATAN_TABLE: [u32; CORDIC_ITERATIONS] = [
    536_870_912, // 45°
    316_933_406,
    167_458_907,
    85_004_756,
    42_667_331,
    21_354_465,
    10_679_838,
    5_340_245,
    2_670_163,
    1_335_087,
    667_544,
    333_772,
    166_886,
    83_443,
    41_722,
    20_861,
];

/// Inverse CORDIC gain `prod(1 / sqrt(1 + 2^-2i))` for 16 iterations, in Q30
pub const CORDIC_GAIN_INV_Q30: i64 = 0x26DD_3B6A;

/// Guard bits added to Q15 inputs before rotating; 2^(15 + 13) times the
/// worst-case growth of 1.6468 * sqrt(2) still fits in an `i32`.
const ROTATE_GUARD_BITS: i32 = 13;

/// Largest magnitude the vectoring kernel lets a component reach before it
/// starts iterating, leaving room for the gain.
const VECTOR_HEADROOM_BITS: u32 = 29;

/// Remove the CORDIC gain from `value`, which carries `extra_bits` bits of
/// scaling above its final format, rounding to nearest.
fn compensate_gain(value: i32, extra_bits: i32) -> i64 {
    let shift = 30 + extra_bits;
    let scaled = i64::from(value) * CORDIC_GAIN_INV_Q30;
    (scaled + (1_i64 << (shift - 1))) >> shift
}

fn saturate_i64(value: i64) -> Q15 {
    let clamped = value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32;
    q15_saturate(Q16_15::from_bits(clamped))
}

/// Rotate `(x, y)` (Q15 in `i32`) by `angle`, returning gain-compensated
/// components still in Q15 units but not yet saturated.
fn rotate_raw(angle: Bam16, x: i32, y: i32) -> (i64, i64) {
    // Fold into [-90°, 90°), where the iteration converges
    let (mut x, mut y, angle) = if angle.is_quad23() {
        (-x, -y, angle - Bam16::DEG_180)
    } else {
        (x, y, angle)
    };
    x <<= ROTATE_GUARD_BITS;
    y <<= ROTATE_GUARD_BITS;

    let mut z = (u32::from(angle.to_bits()) << 16) as i32;
    for (i, &step) in ATAN_TABLE.iter().enumerate() {
        let dx = y >> i;
        let dy = x >> i;
        if z >= 0 {
            x -= dx;
            y += dy;
            z = z.wrapping_sub(step as i32);
        } else {
            x += dx;
            y -= dy;
            z = z.wrapping_add(step as i32);
        }
    }

    (
        compensate_gain(x, ROTATE_GUARD_BITS),
        compensate_gain(y, ROTATE_GUARD_BITS),
    )
}

/// Vectoring mode: rotate `(x, y)` onto the positive real axis.
///
/// Returns the gain-compensated magnitude, in the units of the inputs, and
/// the accumulated rotation as the phase. Inputs of any `i32` size are
/// normalised into the kernel's headroom first; only inputs wider than 29
/// bits lose low-order precision.
fn vector_raw(x: i32, y: i32) -> (i64, Bam16) {
    if x == 0 && y == 0 {
        return (0, Bam16::DEG_0);
    }

    // Fold into the right half plane; i64 so that negating i32::MIN is exact
    let (x, y, mut z) = if x < 0 {
        (-i64::from(x), -i64::from(y), 0x8000_0000_u32)
    } else {
        (i64::from(x), i64::from(y), 0)
    };

    let widest = x.unsigned_abs() | y.unsigned_abs();
    let shift = widest.leading_zeros() as i32 - (64 - VECTOR_HEADROOM_BITS) as i32;
    let (mut x, mut y) = if shift >= 0 {
        ((x << shift) as i32, (y << shift) as i32)
    } else {
        ((x >> -shift) as i32, (y >> -shift) as i32)
    };

    for (i, &step) in ATAN_TABLE.iter().enumerate() {
        let dx = y >> i;
        let dy = x >> i;
        if y >= 0 {
            x += dx;
            y -= dy;
            z = z.wrapping_add(step);
        } else {
            x -= dx;
            y += dy;
            z = z.wrapping_sub(step);
        }
    }

    let phase = Bam16::from_bits((z.wrapping_add(0x8000) >> 16) as u16);
    (compensate_gain(x, shift), phase)
}

/// Rotate a vector by an angle.
///
/// Components of the result saturate to `[-Q15_ONE, Q15_ONE]`; a vector
/// longer than one (such as `(ONE, ONE)`) clips when rotated onto an axis.
#[must_use]
pub fn rotate(angle: Bam16, vector: Complex16) -> Complex16 {
    let (x, y) = rotate_raw(
        angle,
        i32::from(vector.real.to_bits()),
        i32::from(vector.imag.to_bits()),
    );
    Complex16::new(saturate_i64(x), saturate_i64(y))
}

/// Convert a polar vector to rectangular form.
///
/// This is [`rotate`] applied to `(mag, 0)`.
#[must_use]
pub fn polar_to_rect(vector: Polar16) -> Complex16 {
    rotate(vector.phase, Complex16::new(vector.mag, Q15_ZERO))
}

/// Convert a rectangular vector to polar form.
///
/// The magnitude saturates at `Q15_ONE` for vectors longer than one. The
/// zero vector has magnitude 0 and phase 0.
#[must_use]
pub fn rect_to_polar(vector: Complex16) -> Polar16 {
    let (mag, phase) = vector_raw(
        i32::from(vector.real.to_bits()),
        i32::from(vector.imag.to_bits()),
    );
    Polar16::new(saturate_i64(mag), phase)
}

/// Convert a wide rectangular vector to magnitude and phase.
///
/// Used on accumulated correlation sums, which do not fit in Q15. The
/// magnitude wraps only if it exceeds the Q16.15 range.
#[must_use]
pub fn rect_to_polar_wide(real: Q16_15, imag: Q16_15) -> (Q16_15, Bam16) {
    let (mag, phase) = vector_raw(real.to_bits(), imag.to_bits());
    (Q16_15::from_bits(mag as i32), phase)
}

/// Cosine and sine of an angle, by rotating `(Q15_ONE, 0)`.
#[must_use]
pub fn sincos(angle: Bam16) -> SinCos16 {
    rotate(angle, Complex16::new(Q15_ONE, Q15_ZERO))
}
