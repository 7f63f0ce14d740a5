//! The EBS volume specification record.
//!
//! Every field is optional and absence is distinct from any value: an unset
//! `encrypted` is not `false`, an unset `volume_size` is not `0`. Absence takes
//! part in equality, hashing and rendering.
//!
//! Nothing here validates values; out-of-range sizes and unknown volume types
//! are stored as given. See [`crate::constraints`] for the documented limits.

use crate::constraints::{self, ConstraintViolation};
use crate::error::ModelError;
use crate::model::hash::HashCode;
use crate::model::volume_type::VolumeType;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Volume configuration attached to a block device mapping of a launch
/// configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VolumeSpec {
    /// Snapshot the volume is created from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snapshot_id: Option<String>,

    /// Size in GiB. Defaults to the snapshot size when a snapshot is given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume_size: Option<i32>,

    /// One of `standard`, `io1`, `gp2`; the API treats absence as `standard`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume_type: Option<String>,

    /// The API treats absence as `true`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delete_on_termination: Option<bool>,

    /// Provisioned IOPS, expected when the type is `io1`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iops: Option<i32>,

    /// No default; volumes restored from encrypted snapshots are encrypted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encrypted: Option<bool>,
}

/// Name used by the auto-scaling API for this shape.
pub type Ebs = VolumeSpec;

impl VolumeSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot_id(&self) -> Option<&str> {
        self.snapshot_id.as_deref()
    }

    pub fn volume_size(&self) -> Option<i32> {
        self.volume_size
    }

    pub fn volume_type(&self) -> Option<&str> {
        self.volume_type.as_deref()
    }

    pub fn delete_on_termination(&self) -> Option<bool> {
        self.delete_on_termination
    }

    pub fn iops(&self) -> Option<i32> {
        self.iops
    }

    pub fn encrypted(&self) -> Option<bool> {
        self.encrypted
    }

    pub fn set_snapshot_id(&mut self, snapshot_id: Option<String>) -> &mut Self {
        self.snapshot_id = snapshot_id;
        self
    }

    pub fn set_volume_size(&mut self, volume_size: Option<i32>) -> &mut Self {
        self.volume_size = volume_size;
        self
    }

    pub fn set_volume_type(&mut self, volume_type: Option<String>) -> &mut Self {
        self.volume_type = volume_type;
        self
    }

    pub fn set_delete_on_termination(&mut self, delete_on_termination: Option<bool>) -> &mut Self {
        self.delete_on_termination = delete_on_termination;
        self
    }

    pub fn set_iops(&mut self, iops: Option<i32>) -> &mut Self {
        self.iops = iops;
        self
    }

    pub fn set_encrypted(&mut self, encrypted: Option<bool>) -> &mut Self {
        self.encrypted = encrypted;
        self
    }

    pub fn with_snapshot_id(mut self, snapshot_id: impl Into<String>) -> Self {
        self.snapshot_id = Some(snapshot_id.into());
        self
    }

    pub fn with_volume_size(mut self, volume_size: i32) -> Self {
        self.volume_size = Some(volume_size);
        self
    }

    /// Accepts any string, or a [`VolumeType`].
    pub fn with_volume_type(mut self, volume_type: impl Into<String>) -> Self {
        self.volume_type = Some(volume_type.into());
        self
    }

    pub fn with_delete_on_termination(mut self, delete_on_termination: bool) -> Self {
        self.delete_on_termination = Some(delete_on_termination);
        self
    }

    pub fn with_iops(mut self, iops: i32) -> Self {
        self.iops = Some(iops);
        self
    }

    pub fn with_encrypted(mut self, encrypted: bool) -> Self {
        self.encrypted = Some(encrypted);
        self
    }

    /// Stored volume type, or `standard` when unset. Unknown strings are
    /// returned unchanged.
    pub fn effective_volume_type(&self) -> &str {
        self.volume_type()
            .unwrap_or_else(|| VolumeType::default().as_str())
    }

    pub fn effective_delete_on_termination(&self) -> bool {
        self.delete_on_termination.unwrap_or(true)
    }

    /// Interpret the stored volume type; `None` when unset.
    pub fn known_volume_type(&self) -> Option<Result<VolumeType, ModelError>> {
        self.volume_type().map(str::parse)
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Documented API limits this record does not meet.
    pub fn violations(&self) -> Vec<ConstraintViolation> {
        constraints::check(self)
    }

    /// Portable 32-bit hash, consistent with `==`.
    pub fn hash_code(&self) -> i32 {
        HashCode::new()
            .field(self.snapshot_id())
            .field(self.volume_size.as_ref())
            .field(self.volume_type())
            .field(self.delete_on_termination.as_ref())
            .field(self.iops.as_ref())
            .field(self.encrypted.as_ref())
            .finish()
    }
}

/// `{SnapshotId: snap-1,Encrypted: true}`: present fields only, fixed order.
///
/// Fields are joined with `,` and never followed by a trailing separator,
/// unlike the Java client's `toString`, which leaves `{SnapshotId: snap-1,}`.
impl fmt::Display for VolumeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields: [(&str, Option<&dyn fmt::Display>); 6] = [
            ("SnapshotId", self.snapshot_id.as_ref().map(|v| v as &dyn fmt::Display)),
            ("VolumeSize", self.volume_size.as_ref().map(|v| v as &dyn fmt::Display)),
            ("VolumeType", self.volume_type.as_ref().map(|v| v as &dyn fmt::Display)),
            (
                "DeleteOnTermination",
                self.delete_on_termination.as_ref().map(|v| v as &dyn fmt::Display),
            ),
            ("Iops", self.iops.as_ref().map(|v| v as &dyn fmt::Display)),
            ("Encrypted", self.encrypted.as_ref().map(|v| v as &dyn fmt::Display)),
        ];

        f.write_str("{")?;
        let mut first = true;
        for (name, value) in fields {
            let Some(value) = value else { continue };
            if !first {
                f.write_str(",")?;
            }
            write!(f, "{}: {}", name, value)?;
            first = false;
        }
        f.write_str("}")
    }
}
