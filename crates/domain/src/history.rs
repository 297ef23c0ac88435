//! Rolling sample buffer: the fixed-capacity time series behind the chart.
//!
//! Samples are appended at the tail; once the length exceeds the capacity the
//! oldest sample is dropped from the head. Rows are stored whole, so the
//! label, temperature and humidity columns always have the same length.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::time::Timestamp;

/// Number of samples kept when no capacity is configured.
pub const DEFAULT_CAPACITY: usize = 20;

/// One chart point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Wall-clock label for the time axis.
    pub label: String,
    pub recorded_at: Timestamp,
    pub temperature: f64,
    pub humidity: f64,
}

/// Fixed-capacity FIFO of recent [`Sample`]s.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleBuffer {
    samples: VecDeque<Sample>,
    capacity: usize,
}

impl Default for SampleBuffer {
    fn default() -> Self {
        Self {
            samples: VecDeque::with_capacity(DEFAULT_CAPACITY + 1),
            capacity: DEFAULT_CAPACITY,
        }
    }
}

impl SampleBuffer {
    /// Create an empty buffer holding at most `capacity` samples.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::ZeroCapacity`] when `capacity` is zero.
    pub fn with_capacity(capacity: usize) -> Result<Self, ValidationError> {
        if capacity == 0 {
            return Err(ValidationError::ZeroCapacity);
        }
        Ok(Self {
            samples: VecDeque::with_capacity(capacity + 1),
            capacity,
        })
    }

    /// Append a sample, evicting from the head when over capacity.
    ///
    /// Returns the evicted sample, if any.
    pub fn push(&mut self, sample: Sample) -> Option<Sample> {
        self.samples.push_back(sample);
        if self.samples.len() > self.capacity {
            self.samples.pop_front()
        } else {
            None
        }
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Samples from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &Sample> {
        self.samples.iter()
    }

    #[must_use]
    pub fn latest(&self) -> Option<&Sample> {
        self.samples.back()
    }

    #[must_use]
    pub fn labels(&self) -> Vec<&str> {
        self.samples.iter().map(|s| s.label.as_str()).collect()
    }

    #[must_use]
    pub fn temperatures(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.temperature).collect()
    }

    #[must_use]
    pub fn humidities(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.humidity).collect()
    }

    /// Copy the samples out, oldest first.
    #[must_use]
    pub fn to_vec(&self) -> Vec<Sample> {
        self.samples.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::now;

    fn sample(value: f64) -> Sample {
        Sample {
            label: format!("t{value}"),
            recorded_at: now(),
            temperature: value,
            humidity: value * 2.0,
        }
    }

    #[test]
    fn should_default_to_twenty_samples() {
        let buffer = SampleBuffer::default();
        assert_eq!(buffer.capacity(), 20);
        assert!(buffer.is_empty());
    }

    #[test]
    fn should_reject_zero_capacity() {
        assert_eq!(
            SampleBuffer::with_capacity(0),
            Err(ValidationError::ZeroCapacity)
        );
    }

    #[test]
    fn should_append_at_tail_when_below_capacity() {
        let mut buffer = SampleBuffer::default();
        assert!(buffer.push(sample(1.0)).is_none());
        assert!(buffer.push(sample(2.0)).is_none());
        assert_eq!(buffer.temperatures(), vec![1.0, 2.0]);
        assert_eq!(buffer.latest().unwrap().temperature, 2.0);
    }

    #[test]
    fn should_evict_oldest_when_twenty_first_sample_is_pushed() {
        let mut buffer = SampleBuffer::default();
        for i in 1..=20 {
            buffer.push(sample(f64::from(i)));
        }
        assert_eq!(buffer.len(), 20);

        let evicted = buffer.push(sample(21.0)).unwrap();
        assert_eq!(evicted.temperature, 1.0);
        assert_eq!(buffer.len(), 20);
        assert_eq!(buffer.temperatures().first(), Some(&2.0));
        assert_eq!(buffer.labels().len(), buffer.temperatures().len());
        assert_eq!(buffer.humidities().len(), buffer.temperatures().len());
    }

    #[test]
    fn should_keep_last_twenty_values_in_order_after_twenty_five_pushes() {
        let mut buffer = SampleBuffer::default();
        for i in 1..=25 {
            buffer.push(sample(f64::from(i)));
        }
        let expected: Vec<f64> = (6..=25).map(f64::from).collect();
        assert_eq!(buffer.temperatures(), expected);
        assert_eq!(buffer.labels()[0], "t6");
    }

    #[test]
    fn should_never_exceed_custom_capacity() {
        let mut buffer = SampleBuffer::with_capacity(3).unwrap();
        for i in 0..10 {
            buffer.push(sample(f64::from(i)));
            assert!(buffer.len() <= 3);
            assert_eq!(buffer.labels().len(), buffer.len());
            assert_eq!(buffer.humidities().len(), buffer.len());
        }
        assert_eq!(buffer.temperatures(), vec![7.0, 8.0, 9.0]);
    }
}
