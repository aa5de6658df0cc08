//! Digital Signal Processing
//!
//! Integer-only DSP building blocks, leaf-first:
//! - Fixed-point scalar types and multiply/saturate/MAC primitives
//! - Binary Angle Measurement (BAM) angles and quadrant tests
//! - Quantized cosine lookup table
//! - CORDIC rotation and polar/rectangular conversion
//! - Single-frequency power measurement and power spectra

pub mod fixed_point;
pub mod angle;
pub mod cosine;
pub mod cordic;
pub mod spectrum;
