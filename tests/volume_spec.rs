//! Record-level properties exercised through the public API.

use ebs_volume_spec::{ConstraintViolation, Ebs, VolumeSpec, VolumeType, input};
use pretty_assertions::assert_eq;
use std::collections::HashSet;

fn variants() -> Vec<VolumeSpec> {
    vec![
        VolumeSpec::new(),
        VolumeSpec::new().with_snapshot_id("snap-1"),
        VolumeSpec::new().with_snapshot_id("snap-2"),
        VolumeSpec::new().with_volume_size(100),
        VolumeSpec::new().with_volume_size(101),
        VolumeSpec::new().with_volume_type(VolumeType::Gp2),
        VolumeSpec::new().with_volume_type(VolumeType::Io1),
        VolumeSpec::new().with_delete_on_termination(true),
        VolumeSpec::new().with_delete_on_termination(false),
        VolumeSpec::new().with_iops(100),
        VolumeSpec::new().with_encrypted(true),
        VolumeSpec::new().with_encrypted(false),
    ]
}

#[test]
fn equality_is_structural() {
    let all = variants();
    for (i, a) in all.iter().enumerate() {
        for (j, b) in all.iter().enumerate() {
            assert_eq!(a == b, i == j, "{} vs {}", a, b);
            assert_eq!(b == a, i == j);
            if i == j {
                assert_eq!(a.hash_code(), b.clone().hash_code());
            }
        }
    }
}

#[test]
fn usable_as_set_key() {
    let mut set: HashSet<VolumeSpec> = variants().into_iter().collect();
    assert_eq!(set.len(), variants().len());
    assert!(!set.insert(VolumeSpec::new().with_volume_size(100)));
}

#[test]
fn rendering_examples() {
    assert_eq!(VolumeSpec::new().to_string(), "{}");
    assert_eq!(
        VolumeSpec::new().with_snapshot_id("snap-1").to_string(),
        "{SnapshotId: snap-1}"
    );
    assert_eq!(
        VolumeSpec::new()
            .with_snapshot_id("snap-1")
            .with_encrypted(true)
            .to_string(),
        "{SnapshotId: snap-1,Encrypted: true}"
    );
}

#[test]
fn chained_and_setter_construction_agree() {
    let chained: Ebs = VolumeSpec::new().with_volume_size(100).with_volume_type("gp2");

    let mut set = VolumeSpec::new();
    set.set_volume_type(Some(VolumeType::Gp2.into()));
    set.set_volume_size(Some(100));

    assert_eq!(chained, set);
    assert_eq!(chained.hash_code(), set.hash_code());
    assert_eq!(chained.to_string(), "{VolumeSize: 100,VolumeType: gp2}");
}

#[test]
fn overwrite_then_clear() {
    let mut spec = VolumeSpec::new().with_iops(500).with_iops(900);
    assert_eq!(spec.iops(), Some(900));
    spec.set_iops(None);
    assert_eq!(spec, VolumeSpec::new());
    assert_eq!(spec.to_string(), "{}");
}

#[test]
fn json_round_trip_preserves_absence() {
    let spec = VolumeSpec::new()
        .with_volume_type("io1")
        .with_iops(2000)
        .with_encrypted(false);
    let json = serde_json::to_string(&spec).unwrap();
    assert_eq!(json, r#"{"VolumeType":"io1","Iops":2000,"Encrypted":false}"#);
    let back = input::parse_specs(&json).unwrap();
    assert_eq!(back, vec![spec]);
}

#[test]
fn advisory_constraints_do_not_block_storage() {
    let spec = VolumeSpec::new().with_volume_size(20000).with_volume_type("io1");
    assert_eq!(spec.volume_size(), Some(20000));
    assert_eq!(
        spec.violations(),
        vec![
            ConstraintViolation::VolumeSize(20000),
            ConstraintViolation::MissingIops(VolumeType::Io1),
        ]
    );
}
