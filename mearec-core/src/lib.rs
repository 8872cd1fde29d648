//! mearec-core: Core types for multi-electrode array recordings.
//!
//! This crate provides the container-independent building blocks: channel
//! descriptors, derived sampling frequency, and peak-train result pairs.
//!

pub mod channel;
pub mod error;
pub mod peak_train;

pub use channel::{sampling_frequency_hz, ChannelInfo};
pub use error::{Error, Result};
pub use peak_train::PeakTrain;
