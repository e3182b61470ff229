//! Video embed descriptors.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::{AttributeMap, AttributeValue};

/// An iframe dimension: a pixel count or free-form text such as `"100%"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Dimension {
    /// Dimension in pixels.
    Pixels(u32),
    /// Free-form dimension text.
    Text(String),
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pixels(px) => write!(f, "{}", px),
            Self::Text(text) => f.write_str(text),
        }
    }
}

impl From<u32> for Dimension {
    fn from(px: u32) -> Self {
        Self::Pixels(px)
    }
}

impl From<&str> for Dimension {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Dimension {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

/// A structured description of one video embed.
///
/// Descriptors are constructed by the calling rendering layer, typically
/// from an upstream shortcode already parsed into a source URL, dimensions,
/// and extra iframe attributes.
///
/// All fields are optional at the type level; whether an absent `source`,
/// `width`, or `height` is an error is decided at render time by
/// [`crate::config::MissingFieldMode`].
///
/// # Example
///
/// ```
/// use vidframe::VideoEmbed;
///
/// let embed = VideoEmbed::new("https://example.com/embed/1", 640, 360)
///     .with_attribute("class", vec!["media-hero"]);
/// assert_eq!(embed.attributes.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoEmbed {
    /// Embeddable URL of the video.
    #[serde(default)]
    pub source: Option<String>,

    /// Iframe width.
    #[serde(default)]
    pub width: Option<Dimension>,

    /// Iframe height.
    #[serde(default)]
    pub height: Option<Dimension>,

    /// Additional HTML attributes to merge onto the iframe tag.
    #[serde(default)]
    pub attributes: AttributeMap,
}

impl VideoEmbed {
    /// Create a descriptor with all required fields set.
    pub fn new(
        source: impl Into<String>,
        width: impl Into<Dimension>,
        height: impl Into<Dimension>,
    ) -> Self {
        Self {
            source: Some(source.into()),
            width: Some(width.into()),
            height: Some(height.into()),
            attributes: AttributeMap::new(),
        }
    }

    /// Replace the extra attribute mapping.
    pub fn with_attributes(mut self, attributes: AttributeMap) -> Self {
        self.attributes = attributes;
        self
    }

    /// Add one extra attribute, returning the descriptor for chaining.
    pub fn with_attribute(
        mut self,
        name: impl Into<String>,
        value: impl Into<AttributeValue>,
    ) -> Self {
        self.attributes.insert(name, value);
        self
    }

    /// Build a descriptor from a JSON value handed over by an upstream
    /// parsing layer.
    ///
    /// Fails with [`crate::Error::Descriptor`] when the value does not
    /// match the descriptor shape, e.g. a non-mapping `attributes` entry
    /// or a dimension that is neither a number nor a string.
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn dimension_displays_bare_value() {
        assert_eq!(Dimension::Pixels(640).to_string(), "640");
        assert_eq!(Dimension::from("100%").to_string(), "100%");
    }

    #[test]
    fn from_value_accepts_full_descriptor() {
        let embed = VideoEmbed::from_value(json!({
            "source": "https://example.com/embed/1",
            "width": 640,
            "height": "360",
            "attributes": {"class": ["extra-class"], "data-id": "42"}
        }))
        .unwrap();

        assert_eq!(embed.source.as_deref(), Some("https://example.com/embed/1"));
        assert_eq!(embed.width, Some(Dimension::Pixels(640)));
        assert_eq!(embed.height, Some(Dimension::Text("360".to_string())));
        assert_eq!(embed.attributes.len(), 2);
    }

    #[test]
    fn from_value_defaults_absent_fields() {
        let embed = VideoEmbed::from_value(json!({})).unwrap();
        assert_eq!(embed, VideoEmbed::default());
    }

    #[test]
    fn from_value_rejects_non_mapping_attributes() {
        let result = VideoEmbed::from_value(json!({
            "source": "https://example.com/embed/1",
            "width": 640,
            "height": 360,
            "attributes": "class=extra"
        }));

        assert!(matches!(result, Err(crate::Error::Descriptor(_))));
    }

    #[test]
    fn from_value_rejects_malformed_dimension() {
        let result = VideoEmbed::from_value(json!({
            "source": "https://example.com/embed/1",
            "width": {"px": 640},
            "height": 360
        }));

        assert!(matches!(result, Err(crate::Error::Descriptor(_))));
    }

    #[test]
    fn descriptor_serde_round_trip() {
        let embed = VideoEmbed::new("https://example.com/embed/1", 640, "100%")
            .with_attribute("class", vec!["extra-class"]);

        let json = serde_json::to_value(&embed).unwrap();
        let back = VideoEmbed::from_value(json).unwrap();
        assert_eq!(back, embed);
    }
}
