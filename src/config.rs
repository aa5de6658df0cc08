//! System configuration and numeric constants
//!
//! Compile-time limits of the DSP engine and the sampling parameters of the
//! acquisition layer are centralized here.

/// Number of CORDIC iterations, one per bit of BAM16 angle precision
pub const CORDIC_ITERATIONS: usize = 16;

/// Longest sequence the Q15 multiply-accumulate is guaranteed not to overflow
pub const MAC_SAFE_LEN: usize = 256;

/// Largest supported transform order (`2^MAX_ORDER` = [`MAC_SAFE_LEN`] bins)
pub const MAX_ORDER: u8 = 8;

/// Number of slots in the circular sample buffer
pub const SAMPLE_BUFFER_SIZE: usize = 256;

/// Usable capacity of the sample buffer; one slot is kept free so that a
/// full buffer never looks empty
pub const SAMPLE_BUFFER_CAPACITY: usize = SAMPLE_BUFFER_SIZE - 1;

/// ADC resolution in bits
pub const ADC_BITS: u32 = 10;

/// Mask selecting the valid bits of a raw ADC count
pub const ADC_RAW_MASK: u16 = (1 << ADC_BITS) - 1;

/// Raw ADC count corresponding to 0 V AC (mid-scale)
pub const ADC_MIDSCALE: i16 = 1 << (ADC_BITS - 1);

/// Left shift applied to a centred ADC count; 4 bits leaves 12 dB of
/// headroom below Q15 full scale
pub const ADC_HEADROOM_SHIFT: u32 = 4;

/// Sampling period for 8 kHz, the fastest rate the blocking sampler supports
pub const PERIOD_US_8KHZ: u32 = 125;

/// Sampling period for 6.666 kHz
pub const PERIOD_US_6666HZ: u32 = 150;

/// Sampling period for 5 kHz
pub const PERIOD_US_5KHZ: u32 = 200;

/// Sampling period for 4 kHz
pub const PERIOD_US_4KHZ: u32 = 250;

/// Sampling period for 3.333 kHz
pub const PERIOD_US_3333HZ: u32 = 300;

/// Sampling period for 2 kHz
pub const PERIOD_US_2KHZ: u32 = 500;

/// Minimum sampling period accepted by the blocking sampler
pub const MIN_SAMPLE_PERIOD_US: u32 = PERIOD_US_8KHZ;

/// Sample rate in Hz for a sampling period in microseconds (truncated)
#[must_use]
pub const fn period_to_sample_rate(period_us: u32) -> u32 {
    if period_us == 0 {
        0
    } else {
        1_000_000 / period_us
    }
}
