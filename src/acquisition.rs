//! Sample Acquisition
//!
//! The hardware-independent half of getting samples into the DSP engine:
//! - ADC count to Q15 conversion and a blocking fixed-interval sampler,
//!   generic over the board's analog input and microsecond clock
//! - A fixed-capacity circular sample queue with all-or-nothing bulk
//!   transfers, splittable between an interrupt producer and a main-line
//!   consumer
//!
//! Timer and converter register setup stays with the board support code.

pub mod adc;
pub mod sample_buffer;

pub use adc::{adc_to_q15, get_samples, read_current_sample, AdcReading, AnalogInput, MicrosClock};
pub use sample_buffer::{SampleBuffer, SampleConsumer, SampleProducer};
