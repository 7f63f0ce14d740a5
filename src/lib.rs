//! EBS volume specification record for auto-scaling launch configurations.
//!
//! The record itself lives in [`model`]; [`constraints`] reports the API's
//! documented limits without enforcing them, and [`input`] loads records from
//! JSON files for the CLI.

pub mod constraints;
pub mod error;
pub mod input;
pub mod model;

pub use constraints::{CheckReport, ConstraintViolation};
pub use error::ModelError;
pub use model::{Ebs, VolumeSpec, VolumeType};

pub type Result<T> = anyhow::Result<T>;
