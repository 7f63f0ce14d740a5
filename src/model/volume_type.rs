use crate::error::ModelError;
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

/// Documented EBS volume types accepted by launch configurations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum VolumeType {
    /// Magnetic volume; the API default when no type is given
    #[default]
    Standard,
    /// Provisioned IOPS SSD; requires an IOPS value
    Io1,
    /// General purpose SSD
    Gp2,
}

impl VolumeType {
    pub const ALL: [VolumeType; 3] = [VolumeType::Standard, VolumeType::Io1, VolumeType::Gp2];

    pub fn as_str(self) -> &'static str {
        match self {
            VolumeType::Standard => "standard",
            VolumeType::Io1 => "io1",
            VolumeType::Gp2 => "gp2",
        }
    }

    /// Size range in GiB that the API accepts for this type.
    pub fn size_range_gib(self) -> RangeInclusive<i32> {
        match self {
            VolumeType::Standard => 1..=1024,
            VolumeType::Io1 => 4..=16384,
            VolumeType::Gp2 => 1..=16384,
        }
    }

    pub fn requires_iops(self) -> bool {
        matches!(self, VolumeType::Io1)
    }
}

impl fmt::Display for VolumeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VolumeType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VolumeType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| ModelError::UnknownVolumeType(s.to_string()))
    }
}

impl From<VolumeType> for String {
    fn from(t: VolumeType) -> Self {
        t.as_str().to_string()
    }
}
