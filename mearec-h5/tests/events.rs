//! Event stream discovery and access.

mod common;

use common::{add_analog_stream, add_event_stream, create_container, DATE};
use mearec_h5::{Error, Recording};
use ndarray::Array2;

fn recording_with_events(path: &std::path::Path, counts: &[usize]) {
    let file = create_container(path, Some(DATE));
    add_analog_stream(&file, "Stream_0", "Electrode Raw Data", &[100; 4], 1000);
    add_event_stream(&file, counts);
}

#[test]
fn test_absent_event_stream_yields_zero_events() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rec.h5");
    let file = create_container(&path, Some(DATE));
    add_analog_stream(&file, "Stream_0", "Electrode Raw Data", &[100; 4], 1000);
    drop(file);

    let recording = Recording::open(&path).unwrap();
    assert_eq!(recording.n_events(), 0);
    recording.close().unwrap();
}

#[test]
fn test_event_entities_discovered_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rec.h5");
    recording_with_events(&path, &[5, 3]);

    let recording = Recording::open(&path).unwrap();
    assert_eq!(recording.n_events(), 2);
    assert_eq!(recording.events_len(0).unwrap(), 5);
    assert_eq!(recording.events_len(1).unwrap(), 3);
    assert_eq!(recording.events(0).unwrap(), vec![0, 1, 2, 3, 4]);
    assert_eq!(recording.events(1).unwrap(), vec![100, 101, 102]);
    recording.close().unwrap();
}

#[test]
fn test_event_index_out_of_bounds() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rec.h5");
    recording_with_events(&path, &[5]);

    let recording = Recording::open(&path).unwrap();
    assert!(matches!(
        recording.events_len(1).unwrap_err(),
        Error::EventIndexOutOfBounds { index: 1, count: 1 }
    ));
    assert!(matches!(
        recording.events(3).unwrap_err(),
        Error::EventIndexOutOfBounds { index: 3, count: 1 }
    ));
}

#[test]
fn test_too_many_event_entities_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rec.h5");
    recording_with_events(&path, &[1; 17]);

    let err = Recording::open(&path).unwrap_err();
    assert!(matches!(err, Error::TooManyEventStreams { max: 16 }));
}

#[test]
fn test_unrelated_datasets_are_ignored() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rec.h5");
    let file = create_container(&path, Some(DATE));
    add_analog_stream(&file, "Stream_0", "Electrode Raw Data", &[100; 4], 1000);
    add_event_stream(&file, &[4]);

    let stream = file.group("/Data/Recording_0/EventStream/Stream_0").unwrap();
    let extra = Array2::<i64>::zeros((1, 2));
    stream
        .new_dataset::<i64>()
        .shape((1, 2))
        .create("Bookmarks")
        .unwrap()
        .write(extra.view())
        .unwrap();
    drop(file);

    let recording = Recording::open(&path).unwrap();
    assert_eq!(recording.n_events(), 1);
    assert_eq!(recording.events_len(0).unwrap(), 4);
}
