pub mod bbox;
pub mod error;
pub mod sequence;

pub use bbox::BoundingBox;
pub use error::Error;
pub use sequence::{SequenceConfig, TimestampEntry};
