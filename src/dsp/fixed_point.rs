//! Fixed-Point Primitives
//!
//! Scalar formats and the multiply, saturate and multiply-accumulate
//! operations every other layer is built on.
//!
//! A `Qm_n` value is an integer read as `raw / 2^n`. Values sharing the same
//! `n` add and subtract directly. A product of two `n`-bit fractions carries
//! `2n` fractional bits and is shifted back to `n`, discarding the low bits
//! (truncation toward negative infinity, never rounding).

use fixed::types::{I17F15, I1F15, U0F16, U16F16, U17F15, U1F15};

use crate::config::MAC_SAFE_LEN;

/// Signed Q1.15 in an `i16`, range [-1, 1)
pub type Q15 = I1F15;

/// Unsigned Q1.15 in a `u16`, range [0, 2)
pub type UQ1_15 = U1F15;

/// Signed Q16.15 accumulator in an `i32`, range [-65536, 65536)
pub type Q16_15 = I17F15;

/// Unsigned Q17.15 accumulator in a `u32`, range [0, 131072)
pub type UQ17_15 = U17F15;

/// Unsigned Q0.16 in a `u16`, range [0, 1)
pub type UQ16 = U0F16;

/// Unsigned Q16.16 in a `u32`, range [0, 65536)
pub type UQ16_16 = U16F16;

/// Largest representable Q15 value (`0x7FFF`), used as "one"
pub const Q15_ONE: Q15 = Q15::MAX;

/// Q15 zero
pub const Q15_ZERO: Q15 = Q15::ZERO;

/// Multiply two Q15 values.
///
/// Both operands are widened to `i32`, multiplied and shifted right by 15.
/// The result is returned as a Q16.15 so a transient excursion past the Q15
/// range (only `-1 * -1`) is preserved; apply [`q15_saturate`] when a Q15 is
/// required.
#[must_use]
#[inline]
pub fn q15_mult(a: Q15, b: Q15) -> Q16_15 {
    Q16_15::from_bits((i32::from(a.to_bits()) * i32::from(b.to_bits())) >> 15)
}

/// Clamp a Q*.15 value into `[-Q15_ONE, Q15_ONE]`.
///
/// The negative bound is `-0x7FFF`, not `-0x8000`, so the range is symmetric.
#[must_use]
#[inline]
pub fn q15_saturate(x: Q16_15) -> Q15 {
    let one = i32::from(Q15_ONE.to_bits());
    Q15::from_bits(x.to_bits().clamp(-one, one) as i16)
}

/// Multiply-accumulate pairs of Q15 values into a Q16.15 accumulator.
///
/// Additions wrap; nothing saturates. Up to [`MAC_SAFE_LEN`] terms cannot
/// overflow the accumulator.
#[must_use]
pub fn q15_mac_iter<I>(pairs: I) -> Q16_15
where
    I: IntoIterator<Item = (Q15, Q15)>,
{
    pairs
        .into_iter()
        .fold(Q16_15::ZERO, |acc, (a, b)| acc.wrapping_add(q15_mult(a, b)))
}

/// Multiply-accumulate two equal-length Q15 sequences.
///
/// # Panics
///
/// In debug builds, if the lengths differ or exceed [`MAC_SAFE_LEN`].
#[must_use]
pub fn q15_mac(a: &[Q15], b: &[Q15]) -> Q16_15 {
    debug_assert_eq!(a.len(), b.len(), "MAC operands differ in length");
    debug_assert!(a.len() <= MAC_SAFE_LEN, "MAC length exceeds overflow-safe bound");
    q15_mac_iter(a.iter().copied().zip(b.iter().copied()))
}
