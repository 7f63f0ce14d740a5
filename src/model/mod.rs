//! Record layer: the volume specification and its volume type vocabulary.

pub mod hash;
pub mod volume;
pub mod volume_type;

pub use volume::{Ebs, VolumeSpec};
pub use volume_type::VolumeType;
