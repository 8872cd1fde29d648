//! Peak-train result pairs.

use crate::error::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A detected spike sequence for one unit: amplitude values paired with the
/// sample indices they occurred at.
///
/// The two sequences always have equal length; the constructor rejects
/// anything else.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PeakTrain {
    values: Vec<f32>,
    samples: Vec<u64>,
}

impl PeakTrain {
    /// Creates a peak train from matching value and sample-index sequences.
    ///
    /// # Errors
    /// Returns [`Error::LengthMismatch`] if the sequences differ in length.
    pub fn new(values: Vec<f32>, samples: Vec<u64>) -> Result<Self> {
        if values.len() != samples.len() {
            return Err(Error::LengthMismatch {
                values: values.len(),
                samples: samples.len(),
            });
        }
        Ok(Self { values, samples })
    }

    /// Creates an empty peak train.
    #[inline]
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Appends one (value, sample index) pair.
    #[inline]
    pub fn push(&mut self, value: f32, sample: u64) {
        self.values.push(value);
        self.samples.push(sample);
    }

    /// Number of detected peaks.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no peaks are recorded.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Amplitude values, one per peak.
    #[inline]
    #[must_use]
    pub fn values(&self) -> &[f32] {
        &self.values
    }

    /// Sample indices, one per peak.
    #[inline]
    #[must_use]
    pub fn samples(&self) -> &[u64] {
        &self.samples
    }

    /// Consumes the train, returning the underlying sequences.
    #[inline]
    #[must_use]
    pub fn into_parts(self) -> (Vec<f32>, Vec<u64>) {
        (self.values, self.samples)
    }
}
