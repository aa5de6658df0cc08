//! Circular Sample Buffer
//!
//! Fixed-size single-producer single-consumer queue of Q15 samples between
//! the sampling interrupt and the processing loop, built on
//! [`heapless::spsc::Queue`].
//!
//! One of the [`SAMPLE_BUFFER_SIZE`] slots is always left free, so the read
//! and write cursors are equal only when the buffer is empty and a full
//! buffer is never mistaken for an empty one. Usable capacity is
//! [`SAMPLE_BUFFER_CAPACITY`].
//!
//! Bulk transfers are all-or-nothing: they move exactly the requested count
//! or, when there is not enough room (or data), move nothing and return 0.

use heapless::spsc::{Consumer, Producer, Queue};

use crate::config::{SAMPLE_BUFFER_CAPACITY, SAMPLE_BUFFER_SIZE};
use crate::dsp::fixed_point::Q15;

/// Circular buffer of Q15 samples
pub struct SampleBuffer {
    queue: Queue<Q15, SAMPLE_BUFFER_SIZE>,
}

impl SampleBuffer {
    /// Create a new empty sample buffer
    #[must_use]
    pub const fn new() -> Self {
        Self {
            queue: Queue::new(),
        }
    }

    /// Number of samples waiting to be read
    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Number of samples that can be written before the buffer is full
    #[must_use]
    pub fn free(&self) -> usize {
        SAMPLE_BUFFER_CAPACITY - self.queue.len()
    }

    /// Check if buffer is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Check if buffer is full
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.queue.is_full()
    }

    /// Append one sample.
    ///
    /// # Errors
    ///
    /// Returns the sample back if the buffer is full.
    pub fn push(&mut self, sample: Q15) -> Result<(), Q15> {
        self.queue.enqueue(sample)
    }

    /// Remove the oldest sample
    pub fn pop(&mut self) -> Option<Q15> {
        self.queue.dequeue()
    }

    /// Append all of `samples`, or nothing if they do not all fit.
    ///
    /// Returns the number of samples written: `samples.len()` or 0.
    pub fn push_all_or_nothing(&mut self, samples: &[Q15]) -> usize {
        if self.free() < samples.len() {
            #[cfg(feature = "defmt")]
            defmt::debug!("push of {} rejected, {} free", samples.len(), self.free());
            return 0;
        }
        for &sample in samples {
            // Room was checked above
            let _ = self.queue.enqueue(sample);
        }
        samples.len()
    }

    /// Fill all of `dst` with the oldest samples, or read nothing if fewer
    /// than `dst.len()` are waiting.
    ///
    /// Returns the number of samples read: `dst.len()` or 0.
    pub fn pop_all_or_nothing(&mut self, dst: &mut [Q15]) -> usize {
        if self.len() < dst.len() {
            return 0;
        }
        for slot in dst.iter_mut() {
            if let Some(sample) = self.queue.dequeue() {
                *slot = sample;
            }
        }
        dst.len()
    }

    /// Discard all waiting samples
    pub fn clear(&mut self) {
        while self.queue.dequeue().is_some() {}
    }

    /// Split into a producer for the sampling interrupt and a consumer for
    /// the processing loop
    pub fn split(&mut self) -> (SampleProducer<'_>, SampleConsumer<'_>) {
        let (producer, consumer) = self.queue.split();
        (SampleProducer { inner: producer }, SampleConsumer { inner: consumer })
    }
}

impl Default for SampleBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Write half of a split [`SampleBuffer`]
pub struct SampleProducer<'a> {
    inner: Producer<'a, Q15, SAMPLE_BUFFER_SIZE>,
}

impl SampleProducer<'_> {
    /// Number of samples that can be written before the buffer is full
    #[must_use]
    pub fn free(&self) -> usize {
        SAMPLE_BUFFER_CAPACITY - self.inner.len()
    }

    /// Append one sample.
    ///
    /// # Errors
    ///
    /// Returns the sample back if the buffer is full.
    pub fn push(&mut self, sample: Q15) -> Result<(), Q15> {
        self.inner.enqueue(sample)
    }

    /// Append all of `samples`, or nothing if they do not all fit.
    pub fn push_all_or_nothing(&mut self, samples: &[Q15]) -> usize {
        if self.free() < samples.len() {
            return 0;
        }
        for &sample in samples {
            let _ = self.inner.enqueue(sample);
        }
        samples.len()
    }
}

/// Read half of a split [`SampleBuffer`]
pub struct SampleConsumer<'a> {
    inner: Consumer<'a, Q15, SAMPLE_BUFFER_SIZE>,
}

impl SampleConsumer<'_> {
    /// Number of samples waiting to be read
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Check if no samples are waiting
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.len() == 0
    }

    /// Remove the oldest sample
    pub fn pop(&mut self) -> Option<Q15> {
        self.inner.dequeue()
    }

    /// Fill all of `dst`, or read nothing if fewer samples are waiting.
    pub fn pop_all_or_nothing(&mut self, dst: &mut [Q15]) -> usize {
        if self.len() < dst.len() {
            return 0;
        }
        for slot in dst.iter_mut() {
            if let Some(sample) = self.inner.dequeue() {
                *slot = sample;
            }
        }
        dst.len()
    }
}
