//! Binary Angle Measurement (BAM)
//!
//! BAM uses every bit of an unsigned integer to encode an angle as a fraction
//! of one turn. Integer arithmetic modulo `2^N` wraps exactly the way angles
//! do, so 0°, 360° and -360° are all `0x0000` and no value is out of range.
//!
//! | Degrees | Turns | BAM16    |
//! |---------|-------|----------|
//! | -90     | -1/4  | `0xC000` |
//! | 0       | 0     | `0x0000` |
//! | 30      | 1/12  | `0x1555` |
//! | 45      | 1/8   | `0x2000` |
//! | 60      | 1/6   | `0x2AAB` |
//! | 90      | 1/4   | `0x4000` |
//! | 180     | 1/2   | `0x8000` |
//! | 270     | 3/4   | `0xC000` |
//!
//! Frequencies are expressed as a BAM16 phase increment per sample: 250 Hz
//! sampled at 1000 Hz is a quarter turn per sample, `0x4000`.

use core::fmt;
use core::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

/// 8-bit binary angle (1/256 of a turn per LSB)
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Bam8(u8);

impl Bam8 {
    /// Zero angle
    pub const ZERO: Self = Self(0);

    /// Quarter turn (90°)
    pub const QUARTER_TURN: Self = Self(0x40);

    /// Half turn (180°)
    pub const HALF_TURN: Self = Self(0x80);

    /// Create an angle from its raw encoding
    #[must_use]
    #[inline]
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    /// Get the raw encoding
    #[must_use]
    #[inline]
    pub const fn to_bits(self) -> u8 {
        self.0
    }

    /// Widen to BAM16 by placing this angle in the high byte
    #[must_use]
    #[inline]
    pub const fn to_bam16(self) -> Bam16 {
        Bam16((self.0 as u16) << 8)
    }
}

impl fmt::Debug for Bam8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bam8({:#04x})", self.0)
    }
}

/// 16-bit binary angle (1/65536 of a turn per LSB)
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Bam16(u16);

impl Bam16 {
    /// 0°
    pub const DEG_0: Self = Self(0x0000);

    /// 30°, `0x4000 / 3` rounded to nearest
    pub const DEG_30: Self = Self(0x8003 / 6);

    /// 45°
    pub const DEG_45: Self = Self(0x2000);

    /// 60°, `0x8000 / 3` rounded to nearest
    pub const DEG_60: Self = Self((0x1_0003_u32 / 6) as u16);

    /// 90°
    pub const DEG_90: Self = Self(0x4000);

    /// 180°
    pub const DEG_180: Self = Self(0x8000);

    /// 270°
    pub const DEG_270: Self = Self(0xC000);

    /// π radians
    pub const PI_RADIANS: Self = Self::DEG_180;

    /// Create an angle from its raw encoding
    #[must_use]
    #[inline]
    pub const fn from_bits(bits: u16) -> Self {
        Self(bits)
    }

    /// Get the raw encoding
    #[must_use]
    #[inline]
    pub const fn to_bits(self) -> u16 {
        self.0
    }

    /// Convert whole degrees to BAM16 as `deg * DEG_45 / 45`, truncating.
    ///
    /// Any integer is accepted; the result wraps to one turn.
    #[must_use]
    pub const fn from_degrees(deg: i32) -> Self {
        Self(((deg as i64 * Self::DEG_45.0 as i64) / 45) as u16)
    }

    /// Whole degrees in `[0, 360)`, truncating
    #[must_use]
    pub const fn to_degrees(self) -> u16 {
        ((self.0 as u32 * 45) / Self::DEG_45.0 as u32) as u16
    }

    /// The same angle read as a signed value in `[-180°, 180°)`
    #[must_use]
    #[inline]
    pub const fn to_signed(self) -> i16 {
        self.0 as i16
    }

    /// Narrow to BAM8 by keeping the high byte; the low byte is discarded.
    #[must_use]
    #[inline]
    pub const fn to_bam8(self) -> Bam8 {
        Bam8((self.0 >> 8) as u8)
    }

    /// Quadrant containing this angle
    #[must_use]
    pub const fn quadrant(self) -> Quadrant {
        match self.0 & 0xC000 {
            0x0000 => Quadrant::First,
            0x4000 => Quadrant::Second,
            0x8000 => Quadrant::Third,
            _ => Quadrant::Fourth,
        }
    }

    /// In quadrant 1, `[0°, 90°)`
    #[must_use]
    #[inline]
    pub const fn is_quad1(self) -> bool {
        self.0 & 0xC000 == 0x0000
    }

    /// In quadrant 2, `[90°, 180°)`
    #[must_use]
    #[inline]
    pub const fn is_quad2(self) -> bool {
        self.0 & 0xC000 == 0x4000
    }

    /// In quadrant 3, `[180°, 270°)`
    #[must_use]
    #[inline]
    pub const fn is_quad3(self) -> bool {
        self.0 & 0xC000 == 0x8000
    }

    /// In quadrant 4, `[270°, 360°)`
    #[must_use]
    #[inline]
    pub const fn is_quad4(self) -> bool {
        self.0 & 0xC000 == 0xC000
    }

    /// In quadrant 1 or 2 (sine non-negative)
    #[must_use]
    #[inline]
    pub const fn is_quad12(self) -> bool {
        self.0 & 0x8000 == 0
    }

    /// In quadrant 1 or 3
    #[must_use]
    #[inline]
    pub const fn is_quad13(self) -> bool {
        self.0 & 0x4000 == 0
    }

    /// In quadrant 3 or 4
    #[must_use]
    #[inline]
    pub const fn is_quad34(self) -> bool {
        !self.is_quad12()
    }

    /// In quadrant 2 or 4
    #[must_use]
    #[inline]
    pub const fn is_quad24(self) -> bool {
        !self.is_quad13()
    }

    /// In quadrant 2 or 3 (cosine negative)
    ///
    /// Rotating back by 90° maps quadrants 2 and 3 onto 1 and 2.
    #[must_use]
    #[inline]
    pub const fn is_quad23(self) -> bool {
        Self(self.0.wrapping_sub(0x4000)).is_quad12()
    }

    /// In quadrant 1 or 4 (cosine non-negative)
    ///
    /// Rotating forward by 90° maps quadrants 4 and 1 onto 1 and 2.
    #[must_use]
    #[inline]
    pub const fn is_quad14(self) -> bool {
        Self(self.0.wrapping_add(0x4000)).is_quad12()
    }
}

impl fmt::Debug for Bam16 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bam16({:#06x})", self.0)
    }
}

impl From<Bam8> for Bam16 {
    fn from(angle: Bam8) -> Self {
        angle.to_bam16()
    }
}

impl From<Bam16> for Bam8 {
    fn from(angle: Bam16) -> Self {
        angle.to_bam8()
    }
}

macro_rules! impl_wrapping_ops {
    ($ty:ident, $raw:ty) => {
        impl Add for $ty {
            type Output = Self;

            #[inline]
            fn add(self, rhs: Self) -> Self {
                Self(self.0.wrapping_add(rhs.0))
            }
        }

        impl Sub for $ty {
            type Output = Self;

            #[inline]
            fn sub(self, rhs: Self) -> Self {
                Self(self.0.wrapping_sub(rhs.0))
            }
        }

        impl Neg for $ty {
            type Output = Self;

            #[inline]
            fn neg(self) -> Self {
                Self(self.0.wrapping_neg())
            }
        }

        impl Mul<$raw> for $ty {
            type Output = Self;

            /// Scale an angle (or per-sample increment) by an integer count
            #[inline]
            fn mul(self, rhs: $raw) -> Self {
                Self(self.0.wrapping_mul(rhs))
            }
        }

        impl AddAssign for $ty {
            #[inline]
            fn add_assign(&mut self, rhs: Self) {
                *self = *self + rhs;
            }
        }

        impl SubAssign for $ty {
            #[inline]
            fn sub_assign(&mut self, rhs: Self) {
                *self = *self - rhs;
            }
        }
    };
}

impl_wrapping_ops!(Bam8, u8);
impl_wrapping_ops!(Bam16, u16);

#[cfg(feature = "defmt")]
impl defmt::Format for Bam8 {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Bam8({=u8:#x})", self.0);
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Bam16 {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Bam16({=u16:#x})", self.0);
    }
}

/// One of the four 90° sectors of the circle
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Quadrant {
    /// `[0°, 90°)`, top bits `00`
    First,
    /// `[90°, 180°)`, top bits `01`
    Second,
    /// `[180°, 270°)`, top bits `10`
    Third,
    /// `[270°, 360°)`, top bits `11`
    Fourth,
}

impl Quadrant {
    /// Quadrant number, 1 to 4
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::First => 1,
            Self::Second => 2,
            Self::Third => 3,
            Self::Fourth => 4,
        }
    }

    /// Angle at which this quadrant begins
    #[must_use]
    pub const fn start(self) -> Bam16 {
        match self {
            Self::First => Bam16::DEG_0,
            Self::Second => Bam16::DEG_90,
            Self::Third => Bam16::DEG_180,
            Self::Fourth => Bam16::DEG_270,
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Quadrant {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Q{}", self.number());
    }
}

/// Convert a frequency to a BAM16 phase increment per sample.
///
/// Computes `(hz << 16) / sample_rate`, truncating. Frequencies at or above
/// the sample rate alias back into one turn, as sampling would.
///
/// # Panics
///
/// If `sample_rate` is zero.
#[must_use]
pub const fn hz_to_bam16_per_sample(hz: u32, sample_rate: u32) -> Bam16 {
    Bam16((((hz as u64) << 16) / sample_rate as u64) as u16)
}
