//! Spectrum Analysis Module
//!
//! Single-frequency power measurement and power spectra computed by
//! correlating a real Q15 signal against cosine references.
//!
//! A frequency is a BAM16 phase increment per sample (see
//! [`hz_to_bam16_per_sample`](crate::dsp::angle::hz_to_bam16_per_sample)).
//! Every measurement costs one multiply-accumulate per sample and per
//! reference, so the execution time depends only on the sample count.

use super::angle::{Bam16, Bam8};
use super::cordic::rect_to_polar_wide;
use super::cosine::cosine;
use super::fixed_point::{q15_mac_iter, q15_saturate, Q15, Q16_15};
use crate::config::{MAC_SAFE_LEN, MAX_ORDER};
use crate::types::ToneMeasurement;

/// Cosine reference advancing by `freq` per sample, starting at `phase`.
///
/// The phase accumulates at BAM16 resolution and is truncated to BAM8 only
/// for the table lookup.
fn reference(freq: Bam16, phase: Bam16) -> impl Iterator<Item = Q15> {
    core::iter::successors(Some(phase), move |&p| Some(p + freq)).map(|p| cosine(p.to_bam8()))
}

fn correlate(src: &[Q15], freq: Bam16, phase: Bam16) -> Q16_15 {
    debug_assert!(src.len() <= MAC_SAFE_LEN, "measurement longer than the MAC safe length");
    q15_mac_iter(src.iter().copied().zip(reference(freq, phase)))
}

/// Measure the energy of `src` in phase with a reference sinusoid.
///
/// Returns `Σ src[k] * cos(phase + k * freq)`. A tone at `freq` that is in
/// phase with the reference scores about `N/2` times its amplitude; the same
/// tone 90° away scores near zero.
///
/// # Panics
///
/// In debug builds, if `src` is longer than [`MAC_SAFE_LEN`].
#[must_use]
pub fn power_measurement_inphase(src: &[Q15], freq: Bam16, phase: Bam16) -> Q16_15 {
    correlate(src, freq, phase)
}

/// Measure the magnitude and phase of the `freq` component of `src`.
///
/// The in-phase sum uses `cos(θ)` and the quadrature sum `cos(θ + 90°)`, so a
/// signal `A * cos(k * freq + φ)` reports phase `φ` and magnitude about
/// `A * N / 2`.
///
/// # Panics
///
/// In debug builds, if `src` is longer than [`MAC_SAFE_LEN`].
#[must_use]
pub fn tone_measurement(src: &[Q15], freq: Bam16) -> ToneMeasurement {
    let in_phase = correlate(src, freq, Bam16::DEG_0);
    let quadrature = correlate(src, freq, Bam16::DEG_90);
    let (magnitude, phase) = rect_to_polar_wide(in_phase, quadrature);
    ToneMeasurement { magnitude, phase }
}

/// Measure the energy of `src` at `freq` regardless of phase.
///
/// # Panics
///
/// In debug builds, if `src` is longer than [`MAC_SAFE_LEN`].
#[must_use]
pub fn power_measurement_magnitude(src: &[Q15], freq: Bam16) -> Q16_15 {
    tone_measurement(src, freq).magnitude
}

/// Frequency of transform bin `bin`: `bin` cycles per `2^order` samples.
///
/// # Panics
///
/// In debug builds, if `order` exceeds 16.
#[must_use]
pub fn bin_frequency(bin: usize, order: u8) -> Bam16 {
    debug_assert!(order <= 16, "transform order wider than BAM16");
    Bam16::from_bits(((bin as u32) << (16 - u32::from(order))) as u16)
}

fn transform_len(dst: &[Q15], src: &[Q15], order: u8) -> usize {
    debug_assert!(order <= MAX_ORDER, "transform order {} above {}", order, MAX_ORDER);
    let n = 1_usize << order;
    debug_assert!(src.len() >= n, "source shorter than the transform");
    debug_assert!(dst.len() >= n, "destination shorter than the transform");
    n
}

/// Normalise an accumulated bin by the transform size and fit it to Q15
fn scale_bin(acc: Q16_15, order: u8) -> Q15 {
    q15_saturate(Q16_15::from_bits(acc.to_bits() >> order))
}

/// Real power spectrum measured at a single reference phase.
///
/// Writes `2^order` bins to `dst`; bin `b` is the in-phase measurement of the
/// first `2^order` samples of `src` at [`bin_frequency(b, order)`](bin_frequency),
/// divided by the transform size. A full-scale cosine on bin `k` reads about
/// one half in `dst[k]` and in its mirror `dst[2^order - k]`.
///
/// # Panics
///
/// If `src` or `dst` holds fewer than `2^order` values; in debug builds also if
/// `order` exceeds [`MAX_ORDER`].
pub fn fft_inphase(dst: &mut [Q15], src: &[Q15], order: u8, phase: Bam8) {
    let n = transform_len(dst, src, order);
    let src = &src[..n];
    let phase = phase.to_bam16();
    for (bin, out) in dst[..n].iter_mut().enumerate() {
        let acc = power_measurement_inphase(src, bin_frequency(bin, order), phase);
        *out = scale_bin(acc, order);
    }
}

/// Real power spectrum keeping only the phase-invariant magnitude.
///
/// Same layout and scaling as [`fft_inphase`].
///
/// # Panics
///
/// If `src` or `dst` holds fewer than `2^order` values; in debug builds also if
/// `order` exceeds [`MAX_ORDER`].
pub fn fft_magnitude(dst: &mut [Q15], src: &[Q15], order: u8) {
    let n = transform_len(dst, src, order);
    let src = &src[..n];
    for (bin, out) in dst[..n].iter_mut().enumerate() {
        let acc = power_measurement_magnitude(src, bin_frequency(bin, order));
        *out = scale_bin(acc, order);
    }
}
