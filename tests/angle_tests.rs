//! Binary Angle Tests
//!
//! Tests for BAM8/BAM16 encoding, wrapping arithmetic and quadrant predicates.
//! Run with: cargo test --features std --test angle_tests

use fpdsp::prelude::*;

fn all_angles() -> impl Iterator<Item = Bam16> {
    (0..=u16::MAX).map(Bam16::from_bits)
}

// =============================================================================
// Encoding Tests
// =============================================================================

#[test]
fn cardinal_constants() {
    assert_eq!(Bam16::DEG_0.to_bits(), 0x0000);
    assert_eq!(Bam16::DEG_90.to_bits(), 0x4000);
    assert_eq!(Bam16::DEG_180.to_bits(), 0x8000);
    assert_eq!(Bam16::DEG_270.to_bits(), 0xC000);
    assert_eq!(Bam16::PI_RADIANS, Bam16::DEG_180);
}

#[test]
fn from_degrees_wraps() {
    assert_eq!(Bam16::from_degrees(90), Bam16::DEG_90);
    assert_eq!(Bam16::from_degrees(-90), Bam16::DEG_270);
    assert_eq!(Bam16::from_degrees(360), Bam16::DEG_0);
    assert_eq!(Bam16::from_degrees(-360), Bam16::DEG_0);
    assert_eq!(Bam16::from_degrees(450), Bam16::DEG_90);
    assert_eq!(Bam16::from_degrees(30), Bam16::DEG_30);
}

#[test]
fn to_degrees_of_exact_angles() {
    assert_eq!(Bam16::DEG_0.to_degrees(), 0);
    assert_eq!(Bam16::DEG_45.to_degrees(), 45);
    assert_eq!(Bam16::DEG_180.to_degrees(), 180);
    assert_eq!(Bam16::DEG_270.to_degrees(), 270);
    assert_eq!(Bam16::from_bits(0xFFFF).to_degrees(), 359);
}

#[test]
fn signed_view() {
    assert_eq!(Bam16::DEG_90.to_signed(), 0x4000);
    assert_eq!(Bam16::DEG_270.to_signed(), -0x4000);
    assert_eq!(Bam16::DEG_180.to_signed(), i16::MIN);
}

#[test]
fn debug_output_is_hex() {
    assert_eq!(format!("{:?}", Bam16::DEG_90), "Bam16(0x4000)");
    assert_eq!(format!("{:?}", Bam8::QUARTER_TURN), "Bam8(0x40)");
}

// =============================================================================
// BAM8 / BAM16 Conversion Tests
// =============================================================================

#[test]
fn bam8_widens_into_high_byte() {
    for bits in 0..=u8::MAX {
        let wide = Bam8::from_bits(bits).to_bam16();
        assert_eq!(wide.to_bits(), u16::from(bits) << 8);
        assert_eq!(wide.to_bam8().to_bits(), bits);
    }
}

#[test]
fn bam16_narrowing_keeps_high_byte() {
    for angle in all_angles() {
        let narrow = angle.to_bam8();
        assert_eq!(narrow.to_bits(), (angle.to_bits() >> 8) as u8);
        assert_eq!(Bam16::from(narrow).to_bits(), angle.to_bits() & 0xFF00);
    }
}

#[test]
fn bam8_quarter_turn_matches_bam16() {
    assert_eq!(Bam16::from(Bam8::QUARTER_TURN), Bam16::DEG_90);
    assert_eq!(Bam16::from(Bam8::HALF_TURN), Bam16::DEG_180);
}

// =============================================================================
// Wrapping Arithmetic Tests
// =============================================================================

#[test]
fn addition_wraps_modulo_one_turn() {
    assert_eq!(Bam16::DEG_270 + Bam16::DEG_90, Bam16::DEG_0);
    assert_eq!(Bam16::DEG_0 - Bam16::DEG_90, Bam16::DEG_270);
    assert_eq!(Bam8::HALF_TURN + Bam8::HALF_TURN, Bam8::ZERO);
}

#[test]
fn multiply_by_count_accumulates_phase() {
    let step = Bam16::from_bits(0x1000);
    assert_eq!(step * 4, Bam16::DEG_90);
    assert_eq!(step * 16, Bam16::DEG_0);
}

#[test]
fn assign_operators() {
    let mut angle = Bam16::DEG_180;
    angle += Bam16::DEG_180;
    assert_eq!(angle, Bam16::DEG_0);
    angle -= Bam16::DEG_90;
    assert_eq!(angle, Bam16::DEG_270);
}

// =============================================================================
// Quadrant Tests
// =============================================================================

#[test]
fn exactly_one_quadrant_per_angle() {
    for a in all_angles() {
        let count = [a.is_quad1(), a.is_quad2(), a.is_quad3(), a.is_quad4()]
            .iter()
            .filter(|&&q| q)
            .count();
        assert_eq!(count, 1, "{a:?}");
    }
}

#[test]
fn paired_predicates_are_complements() {
    for a in all_angles() {
        assert_eq!(a.is_quad12(), !a.is_quad34(), "{a:?}");
        assert_eq!(a.is_quad13(), !a.is_quad24(), "{a:?}");
        assert_eq!(a.is_quad23(), !a.is_quad14(), "{a:?}");
    }
}

#[test]
fn paired_predicates_match_single_quadrants() {
    for a in all_angles() {
        assert_eq!(a.is_quad12(), a.is_quad1() || a.is_quad2(), "{a:?}");
        assert_eq!(a.is_quad13(), a.is_quad1() || a.is_quad3(), "{a:?}");
        assert_eq!(a.is_quad23(), a.is_quad2() || a.is_quad3(), "{a:?}");
        assert_eq!(a.is_quad14(), a.is_quad1() || a.is_quad4(), "{a:?}");
    }
}

#[test]
fn quadrant_boundaries_belong_to_the_next_quadrant() {
    assert_eq!(Bam16::from_bits(0x3FFF).quadrant(), Quadrant::First);
    assert_eq!(Bam16::from_bits(0x4000).quadrant(), Quadrant::Second);
    assert_eq!(Bam16::from_bits(0x8000).quadrant(), Quadrant::Third);
    assert_eq!(Bam16::from_bits(0xC000).quadrant(), Quadrant::Fourth);
    assert_eq!(Bam16::from_bits(0xFFFF).quadrant(), Quadrant::Fourth);
}

#[test]
fn quadrant_start_and_number() {
    for (n, q) in [Quadrant::First, Quadrant::Second, Quadrant::Third, Quadrant::Fourth]
        .into_iter()
        .enumerate()
    {
        assert_eq!(q.number() as usize, n + 1);
        assert_eq!(q.start().quadrant(), q);
    }
}

#[test]
fn quadrant_agrees_with_predicates() {
    for a in all_angles() {
        let expected = match a.quadrant() {
            Quadrant::First => a.is_quad1(),
            Quadrant::Second => a.is_quad2(),
            Quadrant::Third => a.is_quad3(),
            Quadrant::Fourth => a.is_quad4(),
        };
        assert!(expected, "{a:?}");
    }
}

// =============================================================================
// Frequency Conversion Tests
// =============================================================================

#[test]
fn hz_to_bam_quarter_rate() {
    assert_eq!(hz_to_bam16_per_sample(250, 1000), Bam16::DEG_90);
    assert_eq!(hz_to_bam16_per_sample(500, 1000), Bam16::DEG_180);
}

#[test]
fn hz_to_bam_truncates() {
    // (1000 << 16) / 8000 = 8192 exactly; 1 kHz at 6666 Hz is fractional
    assert_eq!(hz_to_bam16_per_sample(1000, 8000).to_bits(), 8192);
    assert_eq!(hz_to_bam16_per_sample(1000, 6666).to_bits(), 9831);
}

#[test]
fn hz_to_bam_dc_and_aliasing() {
    assert_eq!(hz_to_bam16_per_sample(0, 8000), Bam16::DEG_0);
    assert_eq!(hz_to_bam16_per_sample(8000, 8000), Bam16::DEG_0);
    assert_eq!(hz_to_bam16_per_sample(10_000, 8000), hz_to_bam16_per_sample(2000, 8000));
}
