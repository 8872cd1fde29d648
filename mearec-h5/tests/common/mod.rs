//! Shared builders for synthetic recording containers.

#![allow(dead_code)]

use std::path::Path;
use std::str::FromStr;

use hdf5::types::{VarLenAscii, VarLenUnicode};
use hdf5::File;
use mearec_h5::InfoChannelRecord;
use ndarray::{Array2, ArrayView1};

pub const DATE: &str = "2024-03-01T10:00:00";

pub fn unicode(value: &str) -> VarLenUnicode {
    VarLenUnicode::from_str(value).unwrap()
}

fn ascii(value: &str) -> VarLenAscii {
    VarLenAscii::from_ascii(value).unwrap()
}

pub fn info_record(channel_id: i32, row_index: i32, label: &str, tick: i64) -> InfoChannelRecord {
    InfoChannelRecord {
        channel_id,
        row_index,
        group_id: 0,
        electrode_group: 0,
        label: ascii(label),
        raw_data_type: ascii("Int"),
        unit: ascii("V"),
        exponent: -9,
        ad_zero: 0,
        tick,
        conversion_factor: 59_605,
        adc_bits: 24,
        high_pass_filter_type: ascii("Butterworth"),
        high_pass_filter_cutoff: ascii("0.1 Hz"),
        high_pass_filter_order: 2,
        low_pass_filter_type: ascii("Butterworth"),
        low_pass_filter_cutoff: ascii("3500 Hz"),
        low_pass_filter_order: 4,
    }
}

/// Creates the fixed group skeleton up to the analog stream root.
pub fn create_container(path: &Path, date: Option<&str>) -> File {
    let file = File::create(path).unwrap();
    let data = file.create_group("Data").unwrap();
    if let Some(date) = date {
        data.new_attr::<VarLenUnicode>()
            .create("Date")
            .unwrap()
            .write_scalar(&unicode(date))
            .unwrap();
    }
    let recording = data.create_group("Recording_0").unwrap();
    recording.create_group("AnalogStream").unwrap();
    file
}

/// Adds one analog stream group with a channel per tick entry.
///
/// Sample `[row, col]` holds `row * 1000 + col` as i32.
pub fn add_analog_stream(file: &File, name: &str, label: &str, ticks: &[i64], datalen: usize) {
    let analog = file.group("/Data/Recording_0/AnalogStream").unwrap();
    let group = analog.create_group(name).unwrap();
    group
        .new_attr::<VarLenUnicode>()
        .create("Label")
        .unwrap()
        .write_scalar(&unicode(label))
        .unwrap();

    let records: Vec<InfoChannelRecord> = ticks
        .iter()
        .enumerate()
        .map(|(row, &tick)| info_record(row as i32, row as i32, &format!("Ch_{row:02}"), tick))
        .collect();
    let info = group
        .new_dataset::<InfoChannelRecord>()
        .shape((records.len(),))
        .create("InfoChannel")
        .unwrap();
    if !records.is_empty() {
        info.write(ArrayView1::from(records.as_slice())).unwrap();
    }

    let samples =
        Array2::from_shape_fn((ticks.len(), datalen), |(row, col)| (row * 1_000 + col) as i32);
    let data = group
        .new_dataset::<i32>()
        .shape((ticks.len(), datalen))
        .create("ChannelData")
        .unwrap();
    if !ticks.is_empty() {
        data.write(samples.view()).unwrap();
    }
}

/// Adds an event stream with one entity per entry in `counts`.
///
/// Entity `i` records events `i * 100 + j` for `j` in `0..counts[i]`.
pub fn add_event_stream(file: &File, counts: &[usize]) {
    let recording = file.group("/Data/Recording_0").unwrap();
    let events = recording.create_group("EventStream").unwrap();
    let stream = events.create_group("Stream_0").unwrap();
    for (i, &count) in counts.iter().enumerate() {
        let data = Array2::from_shape_fn((1, count), |(_, j)| (i * 100 + j) as i64);
        let entity = stream
            .new_dataset::<i64>()
            .shape((1, count))
            .create(format!("EventEntity_{i}").as_str())
            .unwrap();
        entity.write(data.view()).unwrap();
    }
}

/// A raw group of four 10 kHz channels plus a digital stream, 1000 samples.
pub fn standard_recording(path: &Path) {
    let file = create_container(path, Some(DATE));
    add_analog_stream(&file, "Stream_0", "Electrode Raw Data", &[100; 4], 1000);
    add_analog_stream(&file, "Stream_1", "Digital Data", &[100], 1000);
}
