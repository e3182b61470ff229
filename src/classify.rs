//! Base CSS class computation for embed descriptors.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::Result;
use crate::model::VideoEmbed;

/// Computes the base CSS classes for a descriptor.
///
/// Implementations return the classes excluding `embed-responsive-item`;
/// the renderer appends that class itself. Classifiers must be
/// deterministic per descriptor.
pub trait Classify {
    /// Base CSS classes for the descriptor, in render order.
    fn classes(&self, embed: &VideoEmbed) -> Result<Vec<String>>;
}

/// Video hosting providers recognized by [`ProviderClassifier`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    /// youtube.com, youtube-nocookie.com, youtu.be
    Youtube,
    /// vimeo.com
    Vimeo,
    /// Any other host.
    Generic,
}

static YOUTUBE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^https?://([a-z0-9-]+\.)*(youtube(-nocookie)?\.com|youtu\.be)(/|$)")
        .expect("valid provider pattern")
});

static VIMEO: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^https?://([a-z0-9-]+\.)*vimeo\.com(/|$)").expect("valid provider pattern")
});

impl Provider {
    /// Detect the provider from an embed source URL.
    pub fn detect(source: &str) -> Provider {
        if YOUTUBE.is_match(source) {
            Provider::Youtube
        } else if VIMEO.is_match(source) {
            Provider::Vimeo
        } else {
            Provider::Generic
        }
    }

    /// CSS class suffix for this provider, if it has one.
    pub fn slug(&self) -> Option<&'static str> {
        match self {
            Self::Youtube => Some("youtube"),
            Self::Vimeo => Some("vimeo"),
            Self::Generic => None,
        }
    }
}

/// Default classifier: derives classes from the detected provider.
///
/// Every descriptor gets `video-embed`; descriptors whose source matches a
/// recognized provider also get `video-embed--<provider>`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProviderClassifier;

impl Classify for ProviderClassifier {
    fn classes(&self, embed: &VideoEmbed) -> Result<Vec<String>> {
        let mut classes = vec!["video-embed".to_string()];
        if let Some(source) = &embed.source {
            if let Some(slug) = Provider::detect(source).slug() {
                classes.push(format!("video-embed--{}", slug));
            }
        }
        Ok(classes)
    }
}
