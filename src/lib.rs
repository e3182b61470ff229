//! # vidframe
//!
//! Responsive HTML markup rendering for video embeds.
//!
//! This crate transforms a structured description of a video embed (source
//! URL, dimensions, extra HTML attributes) into an HTML fragment: an
//! `iframe` wrapped in fixed responsive ratio wrapper `div`s.
//!
//! ## Quick Start
//!
//! ```
//! use vidframe::VideoEmbed;
//!
//! let embed = VideoEmbed::new("https://example.com/embed/1", 640, 360);
//! let html = vidframe::render(&embed).unwrap();
//!
//! assert!(html.contains("src=\"https://example.com/embed/1\""));
//! assert!(html.contains("embed-responsive-item"));
//! ```
//!
//! ## Configurable Rendering
//!
//! ```
//! use vidframe::config::{MissingFieldMode, RenderConfig};
//! use vidframe::{Renderer, VideoEmbed};
//!
//! let config = RenderConfig::builder()
//!     .missing_fields(MissingFieldMode::Lenient)
//!     .build();
//!
//! let renderer = Renderer::with_config(config);
//! let html = renderer.render(&VideoEmbed::default()).unwrap();
//! assert!(html.contains("<iframe"));
//! ```

pub mod classify;
pub mod config;
pub mod error;
pub mod escape;
pub mod model;
pub mod render;

// Re-export main types for convenience
pub use classify::{Classify, Provider, ProviderClassifier};
pub use error::{Error, Result};
pub use model::{AttributeMap, AttributeValue, Dimension, VideoEmbed};
pub use render::{HtmlAttributes, Renderer, SerializeAttributes, RESPONSIVE_ITEM_CLASS};

/// Render the responsive markup fragment for a descriptor using default
/// settings.
///
/// This is the simplest entry point. For custom configuration or
/// collaborators, use [`Renderer`].
///
/// # Examples
///
/// ```
/// use vidframe::VideoEmbed;
///
/// let embed = VideoEmbed::new("https://example.com/embed/1", 640, 360);
/// let html = vidframe::render(&embed).unwrap();
/// assert!(html.contains("width=\"640\""));
/// ```
pub fn render(embed: &VideoEmbed) -> Result<String> {
    Renderer::new().render(embed)
}
