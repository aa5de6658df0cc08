//! Fixed-Point Primitive Tests
//!
//! Tests for Q15 multiply, saturation and multiply-accumulate.
//! Run with: cargo test --features std --test fixed_point_tests

use fpdsp::prelude::*;

fn q15(bits: i16) -> Q15 {
    Q15::from_bits(bits)
}

// =============================================================================
// Multiply Tests
// =============================================================================

#[test]
fn mult_half_by_half_is_quarter() {
    assert_eq!(q15_mult(q15(0x4000), q15(0x4000)).to_bits(), 0x2000);
}

#[test]
fn mult_one_by_one_loses_one_lsb() {
    // 0x7FFF * 0x7FFF >> 15 = 0x7FFE
    assert_eq!(q15_mult(Q15_ONE, Q15_ONE).to_bits(), 0x7FFE);
}

#[test]
fn mult_is_commutative() {
    for &(a, b) in &[(123, -4567), (-32768, 32767), (1, -1), (0x2000, 0x7FFF)] {
        assert_eq!(q15_mult(q15(a), q15(b)), q15_mult(q15(b), q15(a)));
    }
}

#[test]
fn mult_truncates_toward_negative_infinity() {
    // -1 * 1 = -1 / 2^15, which is below zero and rounds down to -1 LSB
    assert_eq!(q15_mult(q15(-1), q15(1)).to_bits(), -1);
    assert_eq!(q15_mult(q15(1), q15(1)).to_bits(), 0);
}

#[test]
fn mult_min_by_min_overflows_q15() {
    let product = q15_mult(Q15::MIN, Q15::MIN);
    assert_eq!(product.to_bits(), 0x8000);
    assert_eq!(q15_saturate(product), Q15_ONE);
}

#[test]
fn mult_by_zero() {
    assert_eq!(q15_mult(Q15::MIN, Q15_ZERO).to_bits(), 0);
}

// =============================================================================
// Saturation Tests
// =============================================================================

#[test]
fn saturate_passes_in_range_values() {
    for bits in [-0x7FFF, -1, 0, 1, 0x1234, 0x7FFF] {
        assert_eq!(q15_saturate(Q16_15::from_bits(bits)).to_bits(), bits as i16);
    }
}

#[test]
fn saturate_is_symmetric() {
    assert_eq!(q15_saturate(Q16_15::from_bits(0x8000)).to_bits(), 0x7FFF);
    assert_eq!(q15_saturate(Q16_15::from_bits(-0x8000)).to_bits(), -0x7FFF);
    assert_eq!(q15_saturate(Q16_15::MAX).to_bits(), 0x7FFF);
    assert_eq!(q15_saturate(Q16_15::MIN).to_bits(), -0x7FFF);
}

// =============================================================================
// Multiply-Accumulate Tests
// =============================================================================

#[test]
fn mac_empty_is_zero() {
    assert_eq!(q15_mac(&[], &[]), Q16_15::ZERO);
}

#[test]
fn mac_sums_products() {
    let a = [q15(0x4000), q15(0x2000), q15(-0x4000)];
    let b = [q15(0x4000), q15(0x4000), q15(0x4000)];
    // 0x2000 + 0x1000 - 0x2000
    assert_eq!(q15_mac(&a, &b).to_bits(), 0x1000);
}

#[test]
fn mac_of_safe_length_does_not_overflow() {
    let ones = [Q15_ONE; MAC_SAFE_LEN];
    let expected = q15_mult(Q15_ONE, Q15_ONE).to_bits() * MAC_SAFE_LEN as i32;
    assert_eq!(q15_mac(&ones, &ones).to_bits(), expected);
    assert_eq!(expected, 8_388_096);
}

#[test]
fn mac_worst_case_fits_accumulator() {
    let mins = [Q15::MIN; MAC_SAFE_LEN];
    assert_eq!(q15_mac(&mins, &mins).to_bits(), 0x8000 * MAC_SAFE_LEN as i32);
}

#[test]
fn mac_iter_matches_slice_form() {
    let a: Vec<Q15> = (0..64).map(|k| q15((k * 511 - 16_000) as i16)).collect();
    let b: Vec<Q15> = (0..64).map(|k| q15((12_000 - k * 377) as i16)).collect();
    let from_iter = q15_mac_iter(a.iter().copied().zip(b.iter().copied()));
    assert_eq!(from_iter, q15_mac(&a, &b));
}

#[test]
fn mac_truncates_each_product() {
    // Each product truncates to -1 LSB before summing
    let a = [q15(-1); 8];
    let b = [q15(1); 8];
    assert_eq!(q15_mac(&a, &b).to_bits(), -8);
}
