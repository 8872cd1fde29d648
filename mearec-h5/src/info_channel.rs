//! On-disk channel descriptor records.

use hdf5::types::{StringError, VarLenAscii};
use hdf5::H5Type;
use mearec_core::ChannelInfo;

/// Fixed-layout compound record of the `InfoChannel` descriptor table.
///
/// Member names follow the container schema verbatim; one record describes
/// one physical channel.
#[derive(H5Type, Clone, Debug)]
#[repr(C)]
pub struct InfoChannelRecord {
    #[hdf5(rename = "ChannelID")]
    pub channel_id: i32,
    #[hdf5(rename = "RowIndex")]
    pub row_index: i32,
    #[hdf5(rename = "GroupId")]
    pub group_id: i32,
    #[hdf5(rename = "ElectrodeGroup")]
    pub electrode_group: i32,
    #[hdf5(rename = "Label")]
    pub label: VarLenAscii,
    #[hdf5(rename = "RawDataType")]
    pub raw_data_type: VarLenAscii,
    #[hdf5(rename = "Unit")]
    pub unit: VarLenAscii,
    #[hdf5(rename = "Exponent")]
    pub exponent: i32,
    #[hdf5(rename = "AdZero")]
    pub ad_zero: i32,
    #[hdf5(rename = "Tick")]
    pub tick: i64,
    #[hdf5(rename = "ConversionFactor")]
    pub conversion_factor: i64,
    #[hdf5(rename = "ADCBits")]
    pub adc_bits: i32,
    #[hdf5(rename = "HighPassFilterType")]
    pub high_pass_filter_type: VarLenAscii,
    #[hdf5(rename = "HighPassFilterCutOff")]
    pub high_pass_filter_cutoff: VarLenAscii,
    #[hdf5(rename = "HighPassFilterOrder")]
    pub high_pass_filter_order: i32,
    #[hdf5(rename = "LowPassFilterType")]
    pub low_pass_filter_type: VarLenAscii,
    #[hdf5(rename = "LowPassFilterCutOff")]
    pub low_pass_filter_cutoff: VarLenAscii,
    #[hdf5(rename = "LowPassFilterOrder")]
    pub low_pass_filter_order: i32,
}

impl From<InfoChannelRecord> for ChannelInfo {
    fn from(record: InfoChannelRecord) -> Self {
        Self {
            channel_id: record.channel_id,
            row_index: record.row_index,
            group_id: record.group_id,
            electrode_group: record.electrode_group,
            label: record.label.to_string(),
            raw_data_type: record.raw_data_type.to_string(),
            unit: record.unit.to_string(),
            exponent: record.exponent,
            ad_zero: record.ad_zero,
            tick: record.tick,
            conversion_factor: record.conversion_factor,
            adc_bits: record.adc_bits,
            high_pass_filter_type: record.high_pass_filter_type.to_string(),
            high_pass_filter_cutoff: record.high_pass_filter_cutoff.to_string(),
            high_pass_filter_order: record.high_pass_filter_order,
            low_pass_filter_type: record.low_pass_filter_type.to_string(),
            low_pass_filter_cutoff: record.low_pass_filter_cutoff.to_string(),
            low_pass_filter_order: record.low_pass_filter_order,
        }
    }
}

impl TryFrom<&ChannelInfo> for InfoChannelRecord {
    type Error = StringError;

    fn try_from(info: &ChannelInfo) -> std::result::Result<Self, StringError> {
        Ok(Self {
            channel_id: info.channel_id,
            row_index: info.row_index,
            group_id: info.group_id,
            electrode_group: info.electrode_group,
            label: VarLenAscii::from_ascii(&info.label)?,
            raw_data_type: VarLenAscii::from_ascii(&info.raw_data_type)?,
            unit: VarLenAscii::from_ascii(&info.unit)?,
            exponent: info.exponent,
            ad_zero: info.ad_zero,
            tick: info.tick,
            conversion_factor: info.conversion_factor,
            adc_bits: info.adc_bits,
            high_pass_filter_type: VarLenAscii::from_ascii(&info.high_pass_filter_type)?,
            high_pass_filter_cutoff: VarLenAscii::from_ascii(&info.high_pass_filter_cutoff)?,
            high_pass_filter_order: info.high_pass_filter_order,
            low_pass_filter_type: VarLenAscii::from_ascii(&info.low_pass_filter_type)?,
            low_pass_filter_cutoff: VarLenAscii::from_ascii(&info.low_pass_filter_cutoff)?,
            low_pass_filter_order: info.low_pass_filter_order,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_info() -> ChannelInfo {
        ChannelInfo {
            channel_id: 7,
            row_index: 3,
            group_id: 0,
            electrode_group: 1,
            label: "E-00047".to_string(),
            raw_data_type: "Int".to_string(),
            unit: "V".to_string(),
            exponent: -9,
            ad_zero: 0,
            tick: 100,
            conversion_factor: 59605,
            adc_bits: 24,
            high_pass_filter_type: "Butterworth".to_string(),
            high_pass_filter_cutoff: "0.1 Hz".to_string(),
            high_pass_filter_order: 2,
            low_pass_filter_type: "Butterworth".to_string(),
            low_pass_filter_cutoff: "3500 Hz".to_string(),
            low_pass_filter_order: 4,
        }
    }

    #[test]
    fn test_record_round_trip() {
        let info = sample_info();
        let record = InfoChannelRecord::try_from(&info).unwrap();
        let back = ChannelInfo::from(record);
        assert_eq!(back, info);
    }

    #[test]
    fn test_non_ascii_label_rejected() {
        let mut info = sample_info();
        info.label = "électrode".to_string();
        assert!(InfoChannelRecord::try_from(&info).is_err());
    }
}
