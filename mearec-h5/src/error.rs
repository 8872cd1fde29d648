//! Error types for the HDF5 recording layer.

use thiserror::Error;

/// Result type for recording operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Recording error types.
///
/// Every failure is returned to the immediate caller; nothing is fatal or
/// retried internally, and no operation partially mutates observable state
/// on failure.
#[derive(Error, Debug)]
pub enum Error {
    /// A container resource could not be opened.
    #[error("cannot open {what} `{name}`: {source}")]
    Open {
        what: &'static str,
        name: String,
        #[source]
        source: hdf5::Error,
    },

    /// More than one channel group with several channels.
    #[error("recording has multiple raw data streams")]
    MultipleRawStreams,

    /// More than one channel group with a single channel.
    #[error("recording has multiple digital streams")]
    MultipleDigitalStreams,

    /// A channel group without channels is malformed.
    #[error("channel group `{label}` has no channels")]
    EmptyChannelGroup { label: String },

    /// Descriptor table and sample array disagree on the channel count.
    #[error("channel group `{label}` has {descriptors} channel descriptors but {rows} sample rows")]
    ChannelCountMismatch {
        label: String,
        descriptors: usize,
        rows: usize,
    },

    /// The sample array of a channel group is not 2-D.
    #[error("channel group `{label}` sample array has rank {rank}, expected 2")]
    BadSampleRank { label: String, rank: usize },

    /// Channels derive different sampling frequencies.
    #[error("multiple sampling frequencies: {found} Hz after {expected} Hz")]
    MismatchedSamplingFrequency { expected: f32, found: f32 },

    /// Channel groups report different sample-axis extents.
    #[error("multiple data lengths: {found} after {expected}")]
    MismatchedDataLength { expected: usize, found: usize },

    /// No channel group with several channels was found.
    #[error("recording has no raw data stream")]
    NoRawStream,

    /// More event entities than the supported maximum.
    #[error("recording has more than {max} event streams")]
    TooManyEventStreams { max: usize },

    /// An event entity dataset is not 2-D.
    #[error("event entity {index} has rank {rank}, expected 2")]
    BadEventRank { index: usize, rank: usize },

    /// Window end precedes its start.
    #[error("window end {end} is before start {start}")]
    EndBeforeStart { start: usize, end: usize },

    /// Window end reaches past the recorded samples.
    #[error("window end {end} is out of bounds for {datalen} samples")]
    EndOutOfBounds { end: usize, datalen: usize },

    /// Channel index past the channel count of the group.
    #[error("channel index {index} is out of bounds for {channels} channels")]
    ChannelOutOfBounds { index: usize, channels: usize },

    /// Write buffer does not cover the selected window.
    #[error("window of {expected} samples written with {provided} values")]
    WindowLengthMismatch { expected: usize, provided: usize },

    /// Event stream index past the registered streams.
    #[error("event stream index {index} is out of bounds for {count} streams")]
    EventIndexOutOfBounds { index: usize, count: usize },

    /// Digital access on a recording without a digital stream.
    #[error("recording has no digital stream")]
    NoDigitalStream,

    /// The peak-train results group is absent.
    #[error("recording has no peak train group")]
    PeakGroupMissing,

    /// No peak train stored under the requested label.
    #[error("no peak train stored for label `{0}`")]
    PeakTrainMissing(String),

    /// A stored peak train lacks one of its sibling datasets.
    #[error("peak train `{label}` has no `{dataset}` dataset")]
    PeakTrainDatasetMissing {
        label: String,
        dataset: &'static str,
    },

    /// The sibling datasets of a stored peak train differ in extent.
    #[error("peak train `{label}` length mismatch: {values} values vs {samples} samples")]
    PeakTrainLengthMismatch {
        label: String,
        values: usize,
        samples: usize,
    },

    /// An underlying container call failed.
    #[error("hdf5 error: {0}")]
    Hdf5(#[from] hdf5::Error),

    /// Resource release failed during teardown.
    #[error("close failed for {what}: {source}")]
    Close {
        what: &'static str,
        #[source]
        source: hdf5::Error,
    },
}
