//! Fixed on-disk layout of a recording container.
//!
//! Paths and dataset names are exact; anything that does not conform is
//! rejected by the loader.

/// Root data group.
pub const DATA_GROUP: &str = "/Data";
/// Recording date attribute on the root data group.
pub const DATE_ATTRIBUTE: &str = "Date";
/// Group holding one child group per analog stream.
pub const ANALOG_STREAM_GROUP: &str = "/Data/Recording_0/AnalogStream";
/// Optional event stream root.
pub const EVENT_STREAM_GROUP: &str = "/Data/Recording_0/EventStream";
/// The single event sub-stream holding the event entities.
pub const EVENT_STREAM_0_GROUP: &str = "/Data/Recording_0/EventStream/Stream_0";
/// Name prefix of event entity datasets.
pub const EVENT_ENTITY_PREFIX: &str = "EventEntity_";
/// Group holding one child group per stored peak train.
pub const PEAK_TRAIN_GROUP: &str = "/Data/Recording_0/Peak_Train";
/// Label attribute on each analog stream group.
pub const LABEL_ATTRIBUTE: &str = "Label";
/// Channel descriptor table within an analog stream group.
pub const INFO_CHANNEL_DATASET: &str = "InfoChannel";
/// 2-D sample array within an analog stream group (channel axis, sample axis).
pub const CHANNEL_DATA_DATASET: &str = "ChannelData";
/// Amplitude dataset of a stored peak train.
pub const PEAK_VALUES_DATASET: &str = "values";
/// Sample-index dataset of a stored peak train.
pub const PEAK_SAMPLES_DATASET: &str = "samples";
/// Upper bound on discovered event entity datasets.
pub const MAX_EVENT_STREAMS: usize = 16;
