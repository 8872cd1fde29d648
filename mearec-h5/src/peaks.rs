//! Label-keyed storage of derived peak trains.
//!
//! Each stored train lives under the results group as two sibling datasets
//! of equal length, `values` (f32) and `samples` (u64). Writes replace:
//! delete-if-exists, then create-and-write. There is no append, no resize,
//! and no delete-without-replace.

use hdf5::{Dataset, Group};
use mearec_core::PeakTrain;
use ndarray::ArrayView1;

use crate::error::{Error, Result};
use crate::recording::Recording;
use crate::schema;

impl Recording {
    /// Number of stored peaks for `label`.
    ///
    /// # Errors
    /// Fails distinctly when the results group, the label's group, or either
    /// sibling dataset is absent, and when the siblings differ in extent.
    pub fn peak_train_len(&self, label: &str) -> Result<usize> {
        let (values, samples) = self.peak_train_datasets(label)?;
        check_same_extent(label, &values, &samples)
    }

    /// Reads the stored peak train for `label`.
    ///
    /// # Errors
    /// Same resolution failures as [`Recording::peak_train_len`], plus any
    /// failed transfer.
    pub fn peak_train(&self, label: &str) -> Result<PeakTrain> {
        let (values_ds, samples_ds) = self.peak_train_datasets(label)?;
        check_same_extent(label, &values_ds, &samples_ds)?;
        let values = values_ds.read_raw::<f32>()?;
        let samples = samples_ds.read_raw::<u64>()?;
        PeakTrain::new(values, samples).map_err(|err| match err {
            mearec_core::Error::LengthMismatch { values, samples } => {
                Error::PeakTrainLengthMismatch {
                    label: label.to_string(),
                    values,
                    samples,
                }
            }
        })
    }

    /// Stores a peak train for `label`, fully superseding any previous one.
    ///
    /// If the label's group exists, whichever sibling datasets are present
    /// are deleted first (absence is tolerated); otherwise the group is
    /// created. Fresh datasets sized to the input are then created and
    /// written.
    ///
    /// # Errors
    /// Fails when the results group is absent or a container call fails.
    pub fn set_peak_train(&mut self, label: &str, train: &PeakTrain) -> Result<()> {
        let root = self.peak_root()?;

        let group = if root.link_exists(label) {
            let group = root.group(label).map_err(|source| Error::Open {
                what: "peak train group",
                name: label.to_string(),
                source,
            })?;
            if group.link_exists(schema::PEAK_VALUES_DATASET) {
                group.unlink(schema::PEAK_VALUES_DATASET)?;
            }
            if group.link_exists(schema::PEAK_SAMPLES_DATASET) {
                group.unlink(schema::PEAK_SAMPLES_DATASET)?;
            }
            group
        } else {
            root.create_group(label)?
        };

        let values = group
            .new_dataset::<f32>()
            .shape((train.len(),))
            .create(schema::PEAK_VALUES_DATASET)?;
        values.write(ArrayView1::from(train.values()))?;

        let samples = group
            .new_dataset::<u64>()
            .shape((train.len(),))
            .create(schema::PEAK_SAMPLES_DATASET)?;
        samples.write(ArrayView1::from(train.samples()))?;

        Ok(())
    }

    /// Labels with a stored peak train, in name order.
    ///
    /// # Errors
    /// Fails when the results group is absent or cannot be listed.
    pub fn peak_train_labels(&self) -> Result<Vec<String>> {
        let root = self.peak_root()?;
        Ok(root.member_names()?)
    }

    fn peak_root(&self) -> Result<Group> {
        if !self.peaks_group {
            return Err(Error::PeakGroupMissing);
        }
        self.file
            .group(schema::PEAK_TRAIN_GROUP)
            .map_err(|source| Error::Open {
                what: "peak train group",
                name: schema::PEAK_TRAIN_GROUP.to_string(),
                source,
            })
    }

    fn peak_train_datasets(&self, label: &str) -> Result<(Dataset, Dataset)> {
        let root = self.peak_root()?;
        if !root.link_exists(label) {
            return Err(Error::PeakTrainMissing(label.to_string()));
        }
        let group = root.group(label).map_err(|source| Error::Open {
            what: "peak train group",
            name: label.to_string(),
            source,
        })?;

        if !group.link_exists(schema::PEAK_VALUES_DATASET) {
            return Err(Error::PeakTrainDatasetMissing {
                label: label.to_string(),
                dataset: schema::PEAK_VALUES_DATASET,
            });
        }
        if !group.link_exists(schema::PEAK_SAMPLES_DATASET) {
            return Err(Error::PeakTrainDatasetMissing {
                label: label.to_string(),
                dataset: schema::PEAK_SAMPLES_DATASET,
            });
        }

        let values = group
            .dataset(schema::PEAK_VALUES_DATASET)
            .map_err(|source| Error::Open {
                what: "peak values dataset",
                name: label.to_string(),
                source,
            })?;
        let samples = group
            .dataset(schema::PEAK_SAMPLES_DATASET)
            .map_err(|source| Error::Open {
                what: "peak samples dataset",
                name: label.to_string(),
                source,
            })?;
        Ok((values, samples))
    }
}

fn check_same_extent(label: &str, values: &Dataset, samples: &Dataset) -> Result<usize> {
    let values_len = values.size();
    let samples_len = samples.size();
    if values_len != samples_len {
        return Err(Error::PeakTrainLengthMismatch {
            label: label.to_string(),
            values: values_len,
            samples: samples_len,
        });
    }
    Ok(values_len)
}
