//! Recording lifecycle, validation, and sample access.

use std::path::Path;

use hdf5::types::{H5Type, VarLenUnicode};
use hdf5::{Dataset, File};
use ndarray::s;

use crate::channel_group::ChannelGroup;
use crate::error::{Error, Result};
use crate::schema;

/// A validated, randomly-addressable multi-electrode recording.
///
/// Owns the container handle and every dataset handle acquired during the
/// load; all of them are exclusively held by this instance, so concurrent
/// use from multiple threads must be serialized by the caller.
#[derive(Debug)]
pub struct Recording {
    pub(crate) file: File,
    date: String,
    datalen: usize,
    sampling_frequency: f32,
    raw: ChannelGroup,
    digital: Option<ChannelGroup>,
    events: Vec<Dataset>,
    pub(crate) peaks_group: bool,
}

impl Recording {
    /// Opens a recording container and validates its structure.
    ///
    /// Classification is by channel count only: a group with one channel is
    /// the digital stream, a group with several is the raw-data stream.
    /// Sampling frequency and sample extent must match exactly across every
    /// channel of every group. The peak-train results group is created when
    /// absent.
    ///
    /// # Errors
    /// Returns the first validation or I/O failure encountered; resources
    /// acquired by the failed attempt are released before returning.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open_rw(path).map_err(|source| Error::Open {
            what: "recording file",
            name: path.display().to_string(),
            source,
        })?;

        let date = read_date(&file)?;
        let (raw, digital, datalen, sampling_frequency) = load_analog_streams(&file)?;
        let events = load_event_entities(&file)?;

        let peaks_group = if file.link_exists(schema::PEAK_TRAIN_GROUP) {
            true
        } else {
            file.create_group(schema::PEAK_TRAIN_GROUP)?;
            true
        };

        Ok(Self {
            file,
            date,
            datalen,
            sampling_frequency,
            raw,
            digital,
            events,
            peaks_group,
        })
    }

    /// Recording date as stored in the container.
    #[must_use]
    pub fn date(&self) -> &str {
        &self.date
    }

    /// Total sample count per channel.
    #[must_use]
    pub fn datalen(&self) -> usize {
        self.datalen
    }

    /// Sampling frequency shared by every channel.
    #[must_use]
    pub fn sampling_frequency(&self) -> f32 {
        self.sampling_frequency
    }

    /// Whether the recording carries a digital stream.
    #[must_use]
    pub fn has_digital(&self) -> bool {
        self.digital.is_some()
    }

    /// Number of raw-data channels.
    #[must_use]
    pub fn n_channels(&self) -> usize {
        self.raw.n_channels()
    }

    /// Labels of the raw-data channels in row order.
    #[must_use]
    pub fn labels(&self) -> Vec<String> {
        self.raw
            .channels()
            .iter()
            .map(|info| info.label.clone())
            .collect()
    }

    /// The raw-data channel group.
    #[must_use]
    pub fn raw_group(&self) -> &ChannelGroup {
        &self.raw
    }

    /// The digital channel group, when present.
    #[must_use]
    pub fn digital_group(&self) -> Option<&ChannelGroup> {
        self.digital.as_ref()
    }

    /// Reads a window of raw samples from one channel.
    ///
    /// # Errors
    /// Fails on an out-of-bounds window or channel index, or when the
    /// transfer fails.
    pub fn raw_data<T: H5Type + Clone>(
        &self,
        channel: usize,
        start: usize,
        end: usize,
    ) -> Result<Vec<T>> {
        self.raw.read_window(channel, start, end)
    }

    /// Writes a window of raw samples into one channel.
    ///
    /// # Errors
    /// Fails on an out-of-bounds window or channel index, a buffer that does
    /// not cover the window, or a failed transfer.
    pub fn set_raw_data<T: H5Type>(
        &mut self,
        channel: usize,
        start: usize,
        end: usize,
        data: &[T],
    ) -> Result<()> {
        self.raw.write_window(channel, start, end, data)
    }

    /// Reads a window of digital samples.
    ///
    /// # Errors
    /// Fails when the recording has no digital stream, on an out-of-bounds
    /// window, or when the transfer fails.
    pub fn digital<T: H5Type + Clone>(&self, start: usize, end: usize) -> Result<Vec<T>> {
        let digital = self.digital.as_ref().ok_or(Error::NoDigitalStream)?;
        digital.read_window(0, start, end)
    }

    /// Writes a window of digital samples.
    ///
    /// # Errors
    /// Fails when the recording has no digital stream, on an out-of-bounds
    /// window, a buffer that does not cover the window, or a failed transfer.
    pub fn set_digital<T: H5Type>(&mut self, start: usize, end: usize, data: &[T]) -> Result<()> {
        let digital = self.digital.as_ref().ok_or(Error::NoDigitalStream)?;
        digital.write_window(0, start, end, data)
    }

    /// Number of registered event streams.
    #[must_use]
    pub fn n_events(&self) -> usize {
        self.events.len()
    }

    /// Number of events recorded by one event stream.
    ///
    /// # Errors
    /// Fails on an out-of-bounds stream index or a malformed entity dataset.
    pub fn events_len(&self, index: usize) -> Result<usize> {
        let entity = self.event_entity(index)?;
        let shape = entity.shape();
        if shape.len() != 2 {
            return Err(Error::BadEventRank {
                index,
                rank: shape.len(),
            });
        }
        Ok(shape[1])
    }

    /// Reads the full event sequence of one event stream.
    ///
    /// Event streams are always read whole; no partial windows.
    ///
    /// # Errors
    /// Fails on an out-of-bounds stream index or a failed transfer.
    pub fn events(&self, index: usize) -> Result<Vec<i64>> {
        let len = self.events_len(index)?;
        let entity = self.event_entity(index)?;
        let row = entity.read_slice_1d::<i64, _>(s![0, ..len])?;
        Ok(row.to_vec())
    }

    /// Closes the recording, releasing every acquired handle.
    ///
    /// Releases in order: event entity datasets, the raw sample dataset, the
    /// digital sample dataset when present, then the container handle.
    ///
    /// # Errors
    /// A failed release of the container handle is reported as a close
    /// failure; the remaining releases have already happened by then.
    pub fn close(self) -> Result<()> {
        let Self {
            file,
            events,
            raw,
            digital,
            ..
        } = self;
        drop(events);
        drop(raw);
        drop(digital);
        file.close().map_err(|source| Error::Close {
            what: "recording file",
            source,
        })
    }

    fn event_entity(&self, index: usize) -> Result<&Dataset> {
        self.events
            .get(index)
            .ok_or(Error::EventIndexOutOfBounds {
                index,
                count: self.events.len(),
            })
    }
}

fn read_date(file: &File) -> Result<String> {
    let data_group = file
        .group(schema::DATA_GROUP)
        .map_err(|source| Error::Open {
            what: "data group",
            name: schema::DATA_GROUP.to_string(),
            source,
        })?;
    let attr = data_group
        .attr(schema::DATE_ATTRIBUTE)
        .map_err(|source| Error::Open {
            what: "date attribute",
            name: schema::DATE_ATTRIBUTE.to_string(),
            source,
        })?;
    let date: VarLenUnicode = attr.read_scalar()?;
    Ok(date.to_string())
}

type AnalogStreams = (ChannelGroup, Option<ChannelGroup>, usize, f32);

// Sampling frequencies must match exactly across channels, not within a
// tolerance, so the derived values are compared as-is.
#[allow(clippy::float_cmp)]
fn load_analog_streams(file: &File) -> Result<AnalogStreams> {
    let analog_root = file
        .group(schema::ANALOG_STREAM_GROUP)
        .map_err(|source| Error::Open {
            what: "analog stream group",
            name: schema::ANALOG_STREAM_GROUP.to_string(),
            source,
        })?;

    let mut raw: Option<ChannelGroup> = None;
    let mut digital: Option<ChannelGroup> = None;
    let mut frequency: Option<f32> = None;
    let mut datalen: Option<usize> = None;

    for name in analog_root.member_names()? {
        let group = analog_root.group(&name).map_err(|source| Error::Open {
            what: "analog stream group",
            name: name.clone(),
            source,
        })?;
        let parsed = ChannelGroup::open(&group)?;

        let is_digital = parsed.n_channels() == 1;
        if is_digital && digital.is_some() {
            return Err(Error::MultipleDigitalStreams);
        }
        if !is_digital && raw.is_some() {
            return Err(Error::MultipleRawStreams);
        }

        for info in parsed.channels() {
            let derived = info.sampling_frequency();
            match frequency {
                None => frequency = Some(derived),
                Some(expected) if expected != derived => {
                    return Err(Error::MismatchedSamplingFrequency {
                        expected,
                        found: derived,
                    });
                }
                Some(_) => {}
            }
        }

        match datalen {
            None => datalen = Some(parsed.datalen()),
            Some(expected) if expected != parsed.datalen() => {
                return Err(Error::MismatchedDataLength {
                    expected,
                    found: parsed.datalen(),
                });
            }
            Some(_) => {}
        }

        if is_digital {
            digital = Some(parsed);
        } else {
            raw = Some(parsed);
        }
    }

    let Some(raw) = raw else {
        return Err(Error::NoRawStream);
    };
    let (Some(datalen), Some(sampling_frequency)) = (datalen, frequency) else {
        return Err(Error::NoRawStream);
    };
    Ok((raw, digital, datalen, sampling_frequency))
}

fn load_event_entities(file: &File) -> Result<Vec<Dataset>> {
    // Absence of the event stream root or its sub-stream is not an error.
    if !file.link_exists(schema::EVENT_STREAM_GROUP)
        || !file.link_exists(schema::EVENT_STREAM_0_GROUP)
    {
        return Ok(Vec::new());
    }

    let stream = file
        .group(schema::EVENT_STREAM_0_GROUP)
        .map_err(|source| Error::Open {
            what: "event stream group",
            name: schema::EVENT_STREAM_0_GROUP.to_string(),
            source,
        })?;

    let mut entities = Vec::new();
    for name in stream.member_names()? {
        if !name.starts_with(schema::EVENT_ENTITY_PREFIX) {
            continue;
        }
        if entities.len() == schema::MAX_EVENT_STREAMS {
            return Err(Error::TooManyEventStreams {
                max: schema::MAX_EVENT_STREAMS,
            });
        }
        let entity = stream.dataset(&name).map_err(|source| Error::Open {
            what: "event entity dataset",
            name: name.clone(),
            source,
        })?;
        entities.push(entity);
    }
    Ok(entities)
}
