//! Responsive markup rendering.

use std::fmt::Write;

use crate::classify::{Classify, ProviderClassifier};
use crate::config::{MissingFieldMode, RenderConfig};
use crate::error::{Error, Result};
use crate::escape;
use crate::model::{AttributeMap, AttributeValue, Dimension, VideoEmbed};

/// Class appended to every rendered iframe.
pub const RESPONSIVE_ITEM_CLASS: &str = "embed-responsive-item";

/// Fixed classes of the outer wrapper div. Never altered by input.
const WRAPPER_CLASSES: &str =
    "video-filter-wrapper col-xs-12 col-sm-10 col-md-8 col-lg-8 padding-zero";

/// Fixed classes of the inner ratio div. Never altered by input.
const RATIO_CLASSES: &str = "video-filter embed-responsive embed-responsive-16by9";

/// Renders an attribute mapping into an HTML attribute string.
///
/// The output carries a single leading space before the first pair and is
/// empty for an empty mapping. Implementations must escape attribute
/// values; attribute names are emitted as given.
pub trait SerializeAttributes {
    /// Render the mapping as ` key="value"` pairs.
    fn serialize(&self, attributes: &AttributeMap) -> Result<String>;
}

/// Default attribute serializer.
///
/// Multi-valued entries (lists and nested mappings) are flattened to their
/// leaf values, deduplicated preserving first occurrence, and space-joined.
/// Every value is escaped for a double-quoted attribute context.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HtmlAttributes;

impl SerializeAttributes for HtmlAttributes {
    fn serialize(&self, attributes: &AttributeMap) -> Result<String> {
        let mut out = String::new();
        for (name, value) in attributes.iter() {
            let rendered = match value {
                AttributeValue::Value(v) => escape::attribute(v),
                multi => {
                    let mut seen: Vec<String> = Vec::new();
                    for leaf in multi.leaf_values() {
                        if !seen.contains(&leaf) {
                            seen.push(leaf);
                        }
                    }
                    let escaped: Vec<String> =
                        seen.iter().map(|v| escape::attribute(v)).collect();
                    escaped.join(" ")
                }
            };
            write!(out, " {}=\"{}\"", name, rendered).unwrap();
        }
        Ok(out)
    }
}

/// Responsive video markup renderer.
///
/// Wraps an iframe for the descriptor in the fixed responsive ratio
/// wrapper divs. The base-class computation and attribute serialization
/// collaborators are injectable; the defaults cover the common case.
///
/// # Example
///
/// ```
/// use vidframe::{Renderer, VideoEmbed};
///
/// let embed = VideoEmbed::new("https://example.com/embed/1", 640, 360);
/// let html = Renderer::new().render(&embed).unwrap();
/// assert!(html.contains("embed-responsive-16by9"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Renderer<C = ProviderClassifier, S = HtmlAttributes> {
    config: RenderConfig,
    classifier: C,
    serializer: S,
}

impl Renderer {
    /// Create a renderer with default collaborators and configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a renderer with default collaborators and the given
    /// configuration.
    pub fn with_config(config: RenderConfig) -> Self {
        Self {
            config,
            classifier: ProviderClassifier,
            serializer: HtmlAttributes,
        }
    }
}

impl<C, S> Renderer<C, S> {
    /// Replace the classifier collaborator.
    pub fn with_classifier<C2: Classify>(self, classifier: C2) -> Renderer<C2, S> {
        Renderer {
            config: self.config,
            classifier,
            serializer: self.serializer,
        }
    }

    /// Replace the attribute serializer collaborator.
    pub fn with_serializer<S2: SerializeAttributes>(self, serializer: S2) -> Renderer<C, S2> {
        Renderer {
            config: self.config,
            classifier: self.classifier,
            serializer,
        }
    }
}

impl<C: Classify, S: SerializeAttributes> Renderer<C, S> {
    /// Render the responsive markup fragment for a descriptor.
    ///
    /// The descriptor is not mutated; attribute merging builds a new
    /// mapping. Collaborator failures propagate unchanged.
    pub fn render(&self, embed: &VideoEmbed) -> Result<String> {
        let source = self.required_text(embed.source.as_deref(), "source")?;
        let width = self.required_dimension(embed.width.as_ref(), "width")?;
        let height = self.required_dimension(embed.height.as_ref(), "height")?;

        let mut classes = self.classifier.classes(embed)?;
        classes.push(RESPONSIVE_ITEM_CLASS.to_string());

        #[cfg(feature = "tracing")]
        tracing::trace!(
            classes = classes.len(),
            extra_attributes = embed.attributes.len(),
            "rendering video embed"
        );

        let computed = AttributeMap::new().with("class", classes);
        let merged = if embed.attributes.is_empty() {
            computed
        } else {
            // Caller attributes are the left operand: colliding keys
            // concatenate caller-first and caller keys lead the order.
            AttributeMap::merge_recursive(embed.attributes.clone(), computed)
        };

        let attrs = self.serializer.serialize(&merged)?;

        let mut out = String::new();
        writeln!(out, "<div class=\"{}\">", WRAPPER_CLASSES).unwrap();
        writeln!(out, "  <div class=\"{}\">", RATIO_CLASSES).unwrap();
        writeln!(
            out,
            "    <iframe src=\"{}\" width=\"{}\" height=\"{}\" frameborder=\"0\" allowfullscreen=\"true\"{}></iframe>",
            source, width, height, attrs
        )
        .unwrap();
        writeln!(out, "  </div>").unwrap();
        write!(out, "</div>").unwrap();

        Ok(out)
    }

    fn required_text(&self, value: Option<&str>, field: &'static str) -> Result<String> {
        match value {
            Some(v) => Ok(escape::attribute(v)),
            None => self.missing(field),
        }
    }

    fn required_dimension(
        &self,
        value: Option<&Dimension>,
        field: &'static str,
    ) -> Result<String> {
        match value {
            Some(v) => Ok(escape::attribute(&v.to_string())),
            None => self.missing(field),
        }
    }

    fn missing(&self, field: &'static str) -> Result<String> {
        match self.config.missing_fields {
            MissingFieldMode::Strict => Err(Error::MissingField(field)),
            MissingFieldMode::Lenient => Ok(String::new()),
        }
    }
}
