//! ADC Sampling
//!
//! Converts raw 10-bit converter counts to Q15 samples and provides a
//! blocking sampler for boards where interrupt-driven acquisition is not
//! available. The board supplies the converter and a free-running
//! microsecond counter through [`AnalogInput`] and [`MicrosClock`].

use crate::config::{ADC_HEADROOM_SHIFT, ADC_MIDSCALE, ADC_RAW_MASK, MIN_SAMPLE_PERIOD_US};
use crate::dsp::fixed_point::Q15;

/// An analog input that yields one raw converter count per read
pub trait AnalogInput {
    /// Read the most recent conversion (right-aligned, 10 significant bits)
    fn read_raw(&mut self) -> u16;
}

/// A free-running microsecond counter that wraps at `u32::MAX`
pub trait MicrosClock {
    /// Current time in microseconds
    fn micros(&mut self) -> u32;
}

/// ADC reading result
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AdcReading {
    /// Raw 10-bit ADC value (0-1023)
    raw: u16,
}

impl AdcReading {
    /// Create a new ADC reading from a raw value; bits above the converter
    /// resolution are dropped
    #[must_use]
    pub const fn from_raw(raw: u16) -> Self {
        Self {
            raw: raw & ADC_RAW_MASK,
        }
    }

    /// Get the raw 10-bit value
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.raw
    }

    /// Convert to a signed Q15 sample centred on mid-scale.
    ///
    /// `(raw - 0x200) << 4`: full converter swing maps to ±1/4, leaving
    /// 12 dB of headroom for processing gain.
    #[must_use]
    pub fn as_q15(self) -> Q15 {
        let centred = self.raw as i16 - ADC_MIDSCALE;
        Q15::from_bits(centred << ADC_HEADROOM_SHIFT)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for AdcReading {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "ADC({})", self.raw);
    }
}

/// Convert a raw 10-bit ADC count to a Q15 sample
#[must_use]
#[inline]
pub fn adc_to_q15(raw: u16) -> Q15 {
    AdcReading::from_raw(raw).as_q15()
}

/// Read and convert the current sample.
///
/// Intended to be called once per conversion-complete interrupt, typically
/// feeding a [`SampleProducer`](super::SampleProducer).
#[must_use]
pub fn read_current_sample<A: AnalogInput>(input: &mut A) -> Q15 {
    adc_to_q15(input.read_raw())
}

/// Fill `buf` with samples taken every `period_us` microseconds.
///
/// Busy-waits between samples. The schedule advances by exactly one period
/// per sample, so a late read does not delay the samples after it. The first
/// sample is taken immediately. Returns the number of samples read, or 0
/// without sampling if `period_us` is shorter than
/// [`PERIOD_US_8KHZ`](crate::config::PERIOD_US_8KHZ).
pub fn get_samples<A, C>(input: &mut A, clock: &mut C, buf: &mut [Q15], period_us: u32) -> usize
where
    A: AnalogInput,
    C: MicrosClock,
{
    if period_us < MIN_SAMPLE_PERIOD_US {
        #[cfg(feature = "defmt")]
        defmt::warn!("sample period {} us below minimum {} us", period_us, MIN_SAMPLE_PERIOD_US);
        return 0;
    }

    #[cfg(feature = "defmt")]
    defmt::trace!("sampling {} values every {} us", buf.len(), period_us);

    let mut timestamp = clock.micros().wrapping_sub(period_us);
    for slot in buf.iter_mut() {
        while clock.micros().wrapping_sub(timestamp) < period_us {
            core::hint::spin_loop();
        }
        *slot = read_current_sample(input);
        timestamp = timestamp.wrapping_add(period_us);
    }

    buf.len()
}
