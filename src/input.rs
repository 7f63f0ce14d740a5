//! Loading volume specifications from JSON.
//!
//! Accepted shapes:
//! {"SnapshotId": "snap-1", "VolumeSize": 100}
//! [{"VolumeType": "gp2"}, {"VolumeType": "io1", "Iops": 1000}]

use crate::Result;
use crate::model::VolumeSpec;

use anyhow::Context;
use serde::Deserialize;
use std::fs;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SpecFile {
    Many(Vec<VolumeSpec>),
    One(VolumeSpec),
}

/// Parse one record or an array of records.
pub fn parse_specs(text: &str) -> Result<Vec<VolumeSpec>> {
    let file: SpecFile = serde_json::from_str(text).context("parse volume spec JSON")?;
    Ok(match file {
        SpecFile::Many(specs) => specs,
        SpecFile::One(spec) => vec![spec],
    })
}

pub fn load_specs(path: &str) -> Result<Vec<VolumeSpec>> {
    let text = fs::read_to_string(path).with_context(|| format!("read spec file {}", path))?;
    parse_specs(&text).with_context(|| format!("bad spec file {}", path))
}

/// Load a file that must hold exactly one record.
pub fn load_single(path: &str) -> Result<VolumeSpec> {
    let mut specs = load_specs(path)?;
    if specs.len() != 1 {
        anyhow::bail!("{} holds {} records, expected exactly 1", path, specs.len());
    }
    Ok(specs.remove(0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_single_object() {
        let specs = parse_specs(r#"{"SnapshotId": "snap-1", "VolumeSize": 100}"#).unwrap();
        assert_eq!(
            specs,
            vec![VolumeSpec::new().with_snapshot_id("snap-1").with_volume_size(100)]
        );
    }

    #[test]
    fn parses_array() {
        let specs =
            parse_specs(r#"[{}, {"VolumeType": "io1", "Iops": 1000, "Encrypted": true}]"#).unwrap();
        assert_eq!(specs.len(), 2);
        assert!(specs[0].is_empty());
        assert_eq!(specs[1].to_string(), "{VolumeType: io1,Iops: 1000,Encrypted: true}");
    }

    #[test]
    fn explicit_null_is_absent() {
        let specs = parse_specs(r#"{"Encrypted": null}"#).unwrap();
        assert_eq!(specs, vec![VolumeSpec::new()]);
    }

    #[test]
    fn rejects_wrong_types() {
        assert!(parse_specs(r#"{"VolumeSize": "big"}"#).is_err());
        assert!(parse_specs("42").is_err());
    }

    fn write_temp(name: &str, text: &str) -> String {
        let path = std::env::temp_dir().join(format!("{}-{}", std::process::id(), name));
        fs::write(&path, text).unwrap();
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn load_single_accepts_lone_object() {
        let path = write_temp("single.json", r#"{"VolumeSize": 8, "Encrypted": true}"#);
        let spec = load_single(&path).unwrap();
        assert_eq!(spec, VolumeSpec::new().with_volume_size(8).with_encrypted(true));
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn load_single_rejects_empty_array() {
        let path = write_temp("empty.json", "[]");
        let err = format!("{:#}", load_single(&path).unwrap_err());
        assert!(err.contains(&path), "{}", err);
        assert!(err.contains("holds 0 records"), "{}", err);
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn load_single_rejects_many_records() {
        let path = write_temp("two.json", r#"[{}, {"Iops": 1}]"#);
        let err = format!("{:#}", load_single(&path).unwrap_err());
        assert!(err.contains(&path), "{}", err);
        assert!(err.contains("holds 2 records"), "{}", err);
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn missing_file_names_path() {
        let err = load_specs("/nonexistent/volume.json").unwrap_err();
        assert!(format!("{:#}", err).contains("/nonexistent/volume.json"));
    }
}
