//! mearec-h5: HDF5-backed access to multi-electrode array recordings.
//!
//! This crate loads one fixed recording schema (a raw-data channel group,
//! an optional digital channel group, optional event entities, and a
//! lazily-created peak-train results group), validates it, and exposes
//! bounds-checked windowed sample I/O plus label-keyed peak-train storage.
//!

mod channel_group;
mod error;
mod info_channel;
mod peaks;
mod recording;
pub mod schema;

pub use channel_group::ChannelGroup;
pub use error::{Error, Result};
pub use info_channel::InfoChannelRecord;
pub use recording::Recording;
