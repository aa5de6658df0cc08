//! Fixed-Point DSP Library
//!
//! Integer-only signal processing for microcontrollers without a
//! floating-point unit. Firmware uses it to detect the presence, phase and
//! magnitude of specific frequencies in a sampled analog signal, and to
//! convert between polar and rectangular coordinates.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    SPECTRAL ANALYZER                         │
//! │  In-phase power  │  Magnitude power  │  Power spectrum       │
//! ├─────────────────────────────────────────────────────────────┤
//! │         CORDIC ENGINE          │       COSINE TABLE          │
//! │  rotate │ polar <-> rect       │  256 x Q15, BAM8 indexed    │
//! ├─────────────────────────────────────────────────────────────┤
//! │   ANGLE ENCODING (BAM8/BAM16)  │  FIXED-POINT PRIMITIVES     │
//! ├─────────────────────────────────────────────────────────────┤
//! │                 ACQUISITION (collaborator)                   │
//! │  ADC conversion │ blocking sampler │ circular sample queue   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Design Principles
//!
//! - **No floating point**: every value is an integer with a fixed scale
//! - **Wrapping angles**: BAM types wrap modulo one turn by construction
//! - **Bounded time**: cost depends only on the sample or bin count
//! - **No allocation**: all operations work on caller-owned slices
//! - **Preconditions, not errors**: malformed sizes are caller bugs and are
//!   checked with `debug_assert!`

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

/// Digital Signal Processing
///
/// Fixed-point primitives, BAM angles, cosine table, CORDIC and spectral
/// analysis.
pub mod dsp;

/// Sample Acquisition
///
/// ADC sample conversion, blocking sampling and the circular sample queue.
pub mod acquisition;

/// Shared value types used across modules
pub mod types;

/// System configuration and constants
pub mod config;

pub use dsp::angle::{hz_to_bam16_per_sample, Bam16, Bam8, Quadrant};
pub use dsp::fixed_point::{Q15, Q16_15, Q15_ONE, Q15_ZERO, UQ16, UQ16_16, UQ17_15, UQ1_15};
pub use types::{Complex16, Polar16, Q15DivMod, SinCos16, ToneMeasurement};

/// Prelude module for common imports
pub mod prelude {
    //! Convenient re-exports for common types and functions.

    pub use crate::config::*;
    pub use crate::dsp::angle::{hz_to_bam16_per_sample, Bam16, Bam8, Quadrant};
    pub use crate::dsp::cordic::{polar_to_rect, rect_to_polar, rotate, sincos};
    pub use crate::dsp::cosine::{cosine, sine};
    pub use crate::dsp::fixed_point::*;
    pub use crate::dsp::spectrum::{
        fft_inphase, fft_magnitude, power_measurement_inphase, power_measurement_magnitude,
        tone_measurement,
    };
    pub use crate::types::*;
}
