//! Documented API limits for volume specifications.
//!
//! These are advisory: the record accepts anything and the service is the
//! final authority. [`check`] reports which documented limits a record misses
//! so callers can warn before sending a request.

use crate::error::ModelError;
use crate::model::{VolumeSpec, VolumeType};

use regex::Regex;
use std::ops::RangeInclusive;
use std::sync::LazyLock;
use thiserror::Error;

pub const SNAPSHOT_ID_LEN: RangeInclusive<usize> = 1..=255;
pub const VOLUME_SIZE_GIB: RangeInclusive<i32> = 1..=16384;
pub const IOPS: RangeInclusive<i32> = 100..=20000;

// Anything outside printable code points, tab, CR and LF.
static SNAPSHOT_ID_DISALLOWED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^\x{20}-\x{D7FF}\x{E000}-\x{FFFD}\x{10000}-\x{10FFFF}\r\n\t]")
        .expect("snapshot id pattern is valid")
});

/// A documented limit that a record does not meet.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstraintViolation {
    #[error("snapshot id must be 1-255 characters, got {0}")]
    SnapshotIdLength(usize),

    #[error("snapshot id contains a disallowed character {0:?}")]
    SnapshotIdCharacter(char),

    #[error("volume size must be 1-16384 GiB, got {0}")]
    VolumeSize(i32),

    #[error("volume size for {volume_type} volumes must be {min}-{max} GiB, got {size}")]
    VolumeSizeForType {
        volume_type: VolumeType,
        size: i32,
        min: i32,
        max: i32,
    },

    #[error("unknown volume type {0:?}, expected one of: standard, io1, gp2")]
    VolumeType(String),

    #[error("iops must be 100-20000, got {0}")]
    Iops(i32),

    #[error("iops is required for {0} volumes")]
    MissingIops(VolumeType),
}

/// Every documented limit `spec` misses, in field order. Absent fields are
/// only reported where the API requires them.
pub fn check(spec: &VolumeSpec) -> Vec<ConstraintViolation> {
    let mut out = Vec::new();
    let mut unknown_type = None;

    if let Some(id) = spec.snapshot_id() {
        let len = id.chars().count();
        if !SNAPSHOT_ID_LEN.contains(&len) {
            out.push(ConstraintViolation::SnapshotIdLength(len));
        }
        if let Some(c) = SNAPSHOT_ID_DISALLOWED
            .find(id)
            .and_then(|m| m.as_str().chars().next())
        {
            out.push(ConstraintViolation::SnapshotIdCharacter(c));
        }
    }

    let known_type = match spec.known_volume_type() {
        Some(Ok(t)) => Some(t),
        Some(Err(ModelError::UnknownVolumeType(raw))) => {
            unknown_type = Some(raw);
            None
        }
        None => None,
    };

    if let Some(size) = spec.volume_size() {
        if !VOLUME_SIZE_GIB.contains(&size) {
            out.push(ConstraintViolation::VolumeSize(size));
        } else if let Some(t) = known_type {
            let range = t.size_range_gib();
            if !range.contains(&size) {
                out.push(ConstraintViolation::VolumeSizeForType {
                    volume_type: t,
                    size,
                    min: *range.start(),
                    max: *range.end(),
                });
            }
        }
    }

    if let Some(raw) = unknown_type {
        out.push(ConstraintViolation::VolumeType(raw));
    }

    match (spec.iops(), known_type) {
        (Some(iops), _) if !IOPS.contains(&iops) => out.push(ConstraintViolation::Iops(iops)),
        (None, Some(t)) if t.requires_iops() => out.push(ConstraintViolation::MissingIops(t)),
        _ => {}
    }

    out
}

/// Violations found across a batch of records, keyed by record index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckReport {
    pub total: usize,
    pub failing: Vec<(usize, Vec<ConstraintViolation>)>,
}

impl CheckReport {
    pub fn is_clean(&self) -> bool {
        self.failing.is_empty()
    }

    /// Error naming `source` when any record misses a limit.
    pub fn ensure_clean(&self, source: &str) -> crate::Result<()> {
        if !self.is_clean() {
            anyhow::bail!(
                "{} of {} records in {} miss documented limits",
                self.failing.len(),
                self.total,
                source
            );
        }
        Ok(())
    }
}

pub fn check_all(specs: &[VolumeSpec]) -> CheckReport {
    let failing = specs
        .iter()
        .enumerate()
        .map(|(idx, spec)| (idx, check(spec)))
        .filter(|(_, violations)| !violations.is_empty())
        .collect();
    CheckReport {
        total: specs.len(),
        failing,
    }
}
