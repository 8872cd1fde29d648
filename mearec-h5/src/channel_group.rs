//! Channel group parsing and windowed sample access.

use hdf5::types::{H5Type, VarLenUnicode};
use hdf5::{Dataset, Group};
use mearec_core::ChannelInfo;
use ndarray::{s, ArrayView1};

use crate::error::{Error, Result};
use crate::info_channel::InfoChannelRecord;
use crate::schema;

/// One group of same-kind channels sharing a 2-D sample array.
///
/// A digital group has exactly one channel, a raw-data group has more than
/// one. The sample dataset handle stays open for windowed access and is
/// released when the group is dropped.
#[derive(Debug)]
pub struct ChannelGroup {
    label: String,
    channels: Vec<ChannelInfo>,
    data: Dataset,
    datalen: usize,
}

impl ChannelGroup {
    /// Parses one analog stream group into a channel group.
    pub(crate) fn open(group: &Group) -> Result<Self> {
        let label = read_label(group)?;

        let info = group
            .dataset(schema::INFO_CHANNEL_DATASET)
            .map_err(|source| Error::Open {
                what: "channel descriptor table",
                name: group.name(),
                source,
            })?;
        let records = info.read_raw::<InfoChannelRecord>()?;
        let channels: Vec<ChannelInfo> = records.into_iter().map(ChannelInfo::from).collect();

        let data = group
            .dataset(schema::CHANNEL_DATA_DATASET)
            .map_err(|source| Error::Open {
                what: "sample dataset",
                name: group.name(),
                source,
            })?;
        let shape = data.shape();
        if shape.len() != 2 {
            return Err(Error::BadSampleRank {
                label,
                rank: shape.len(),
            });
        }
        let (rows, datalen) = (shape[0], shape[1]);

        if channels.is_empty() {
            return Err(Error::EmptyChannelGroup { label });
        }
        if channels.len() != rows {
            return Err(Error::ChannelCountMismatch {
                label,
                descriptors: channels.len(),
                rows,
            });
        }

        Ok(Self {
            label,
            channels,
            data,
            datalen,
        })
    }

    /// Label of the group.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Channel descriptors in row order.
    #[must_use]
    pub fn channels(&self) -> &[ChannelInfo] {
        &self.channels
    }

    /// Number of channels.
    #[must_use]
    pub fn n_channels(&self) -> usize {
        self.channels.len()
    }

    /// Sample-axis extent of the group.
    #[must_use]
    pub fn datalen(&self) -> usize {
        self.datalen
    }

    /// Reads `end - start` samples of one channel as `T`.
    ///
    /// The element type is caller-chosen; the container layer verifies that
    /// the stored samples convert to it.
    ///
    /// # Errors
    /// Fails on an out-of-bounds window or channel, or when the underlying
    /// transfer fails. The whole window transfers or nothing does.
    pub fn read_window<T: H5Type + Clone>(
        &self,
        channel: usize,
        start: usize,
        end: usize,
    ) -> Result<Vec<T>> {
        self.check_window(channel, start, end)?;
        let window = self.data.read_slice_1d::<T, _>(s![channel, start..end])?;
        Ok(window.to_vec())
    }

    /// Writes `end - start` samples into one channel from `data`.
    ///
    /// # Errors
    /// Fails on an out-of-bounds window or channel, when `data` does not
    /// cover the window, or when the underlying transfer fails.
    pub fn write_window<T: H5Type>(
        &self,
        channel: usize,
        start: usize,
        end: usize,
        data: &[T],
    ) -> Result<()> {
        self.check_window(channel, start, end)?;
        if data.len() != end - start {
            return Err(Error::WindowLengthMismatch {
                expected: end - start,
                provided: data.len(),
            });
        }
        self.data
            .write_slice(ArrayView1::from(data), s![channel, start..end])?;
        Ok(())
    }

    fn check_window(&self, channel: usize, start: usize, end: usize) -> Result<()> {
        if channel >= self.channels.len() {
            return Err(Error::ChannelOutOfBounds {
                index: channel,
                channels: self.channels.len(),
            });
        }
        if end < start {
            return Err(Error::EndBeforeStart { start, end });
        }
        if end >= self.datalen {
            return Err(Error::EndOutOfBounds {
                end,
                datalen: self.datalen,
            });
        }
        Ok(())
    }
}

fn read_label(group: &Group) -> Result<String> {
    let attr = group
        .attr(schema::LABEL_ATTRIBUTE)
        .map_err(|source| Error::Open {
            what: "label attribute",
            name: group.name(),
            source,
        })?;
    let label: VarLenUnicode = attr.read_scalar()?;
    Ok(label.to_string())
}
