//! Data model for video embed descriptors.

mod attributes;
mod embed;

pub use attributes::{AttributeMap, AttributeValue};
pub use embed::{Dimension, VideoEmbed};
