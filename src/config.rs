//! Renderer configuration.

use serde::{Deserialize, Serialize};

/// How to treat descriptors missing `source`, `width`, or `height`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MissingFieldMode {
    /// Fail with [`crate::Error::MissingField`].
    /// This is the default behavior.
    #[default]
    Strict,
    /// Substitute an empty string for the missing value.
    /// Compatibility mode reproducing the historical silent-blank output.
    Lenient,
}

/// Configuration for the renderer.
///
/// Use the builder pattern to create a configuration:
///
/// ```
/// use vidframe::config::{MissingFieldMode, RenderConfig};
///
/// let config = RenderConfig::builder()
///     .missing_fields(MissingFieldMode::Lenient)
///     .build();
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// How to treat missing required descriptor fields.
    /// Default: Strict
    pub missing_fields: MissingFieldMode,
}

impl RenderConfig {
    /// Create a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration builder.
    pub fn builder() -> RenderConfigBuilder {
        RenderConfigBuilder::default()
    }
}

/// Builder for `RenderConfig`.
#[derive(Debug, Clone, Default)]
pub struct RenderConfigBuilder {
    missing_fields: Option<MissingFieldMode>,
}

impl RenderConfigBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set how missing required descriptor fields are treated.
    pub fn missing_fields(mut self, mode: MissingFieldMode) -> Self {
        self.missing_fields = Some(mode);
        self
    }

    /// Build the configuration.
    pub fn build(self) -> RenderConfig {
        RenderConfig {
            missing_fields: self.missing_fields.unwrap_or_default(),
        }
    }
}
