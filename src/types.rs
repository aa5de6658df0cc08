//! Shared value types used across the DSP engine
//!
//! Plain `Copy` records with public fields. None of them own anything or
//! outlive the call that produced them.

use core::fmt;

use crate::dsp::angle::Bam16;
use crate::dsp::fixed_point::{Q15, Q16_15, Q15_ONE, Q15_ZERO};

/// Rectangular vector of two Q15 components
///
/// The same pair is read three ways depending on context: Cartesian
/// `x`/`y`, complex `real`/`imag` (`i`/`q` for baseband signals), or
/// `cos`/`sin` when it holds the result of [`sincos`](crate::dsp::cordic::sincos).
/// The accessors are views over the two stored fields.
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct Complex16 {
    /// Real / in-phase / x / cosine component
    pub real: Q15,
    /// Imaginary / quadrature / y / sine component
    pub imag: Q15,
}

/// Cosine and sine of one angle, packed as `(cos, sin)`
pub type SinCos16 = Complex16;

impl Complex16 {
    /// Zero vector
    pub const ZERO: Self = Self {
        real: Q15_ZERO,
        imag: Q15_ZERO,
    };

    /// Unit vector on the positive real axis
    pub const ONE: Self = Self {
        real: Q15_ONE,
        imag: Q15_ZERO,
    };

    /// Create a vector from its real and imaginary parts
    #[must_use]
    #[inline]
    pub const fn new(real: Q15, imag: Q15) -> Self {
        Self { real, imag }
    }

    /// Create a vector from raw Q15 bit patterns
    #[must_use]
    #[inline]
    pub const fn from_bits(real: i16, imag: i16) -> Self {
        Self {
            real: Q15::from_bits(real),
            imag: Q15::from_bits(imag),
        }
    }

    /// Create a vector from Cartesian coordinates
    #[must_use]
    #[inline]
    pub const fn from_xy(x: Q15, y: Q15) -> Self {
        Self::new(x, y)
    }

    /// Create a vector from in-phase and quadrature components
    #[must_use]
    #[inline]
    pub const fn from_iq(i: Q15, q: Q15) -> Self {
        Self::new(i, q)
    }

    /// Cartesian x coordinate
    #[must_use]
    #[inline]
    pub const fn x(self) -> Q15 {
        self.real
    }

    /// Cartesian y coordinate
    #[must_use]
    #[inline]
    pub const fn y(self) -> Q15 {
        self.imag
    }

    /// In-phase component
    #[must_use]
    #[inline]
    pub const fn i(self) -> Q15 {
        self.real
    }

    /// Quadrature component
    #[must_use]
    #[inline]
    pub const fn q(self) -> Q15 {
        self.imag
    }

    /// Cosine, when this vector is a [`SinCos16`]
    #[must_use]
    #[inline]
    pub const fn cos(self) -> Q15 {
        self.real
    }

    /// Sine, when this vector is a [`SinCos16`]
    #[must_use]
    #[inline]
    pub const fn sin(self) -> Q15 {
        self.imag
    }

    /// Complex conjugate
    #[must_use]
    pub fn conjugate(self) -> Self {
        Self {
            real: self.real,
            imag: self.imag.wrapping_neg(),
        }
    }
}

impl fmt::Debug for Complex16 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Complex16({}, {})", self.real.to_bits(), self.imag.to_bits())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Complex16 {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Complex16({=i16}, {=i16})", self.real.to_bits(), self.imag.to_bits());
    }
}

/// Polar vector: Q15 magnitude and BAM16 phase
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Polar16 {
    /// Magnitude
    pub mag: Q15,
    /// Phase angle
    pub phase: Bam16,
}

impl Polar16 {
    /// Create a polar vector
    #[must_use]
    #[inline]
    pub const fn new(mag: Q15, phase: Bam16) -> Self {
        Self { mag, phase }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Polar16 {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Polar16({=i16}, {})", self.mag.to_bits(), self.phase);
    }
}

/// Quotient and remainder of a fixed-point division
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Q15DivMod {
    /// Quotient
    pub quot: Q16_15,
    /// Remainder
    pub rem: Q15,
}

/// Correlation of a signal against one frequency
///
/// `magnitude` is phase invariant; `phase` is the signal's phase relative to
/// a cosine reference starting at 0.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ToneMeasurement {
    /// Accumulated correlation magnitude
    pub magnitude: Q16_15,
    /// Phase of the measured tone
    pub phase: Bam16,
}

#[cfg(feature = "defmt")]
impl defmt::Format for ToneMeasurement {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Tone(mag={=i32}, phase={})", self.magnitude.to_bits(), self.phase);
    }
}
