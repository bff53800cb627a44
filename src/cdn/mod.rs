//! Image CDN capability.
//!
//! A provider turns attachment URLs into cache keys and thumbnail URLs.
//! Implementations are thread-safe so callers can inject one behind
//! `Arc<dyn ImageCdn>` and share it across tasks.

pub mod stream;

pub use stream::{STREAM_CDN_HOST, StreamImageCdn, is_stream_cdn_url};

use crate::types::{ImageCrop, ImageResize, ImageSize};

/// Capability for deriving cache keys and thumbnail URLs from image URLs.
///
/// Both operations are best-effort: an input the provider cannot decompose is
/// returned unchanged, never an error. Substituting a provider with a
/// different host marker and parameter scheme targets another CDN without
/// touching any caller.
pub trait ImageCdn: Send + Sync {
    /// Returns the key under which the image at `url` should be cached.
    ///
    /// Volatile query parameters (request signatures, expiry timestamps) are
    /// stripped from URLs served by the provider's CDN so that every request
    /// for the same image maps to one cache entry.
    #[must_use]
    fn caching_key(&self, url: &str) -> String;

    /// Returns a URL serving a resized variant of the image at `original_url`.
    ///
    /// Appends the sizing parameters understood by the CDN's resizing
    /// endpoint. Not idempotent: calling it on its own output appends a
    /// second parameter set, so derive thumbnails from the original URL only.
    #[must_use]
    fn thumbnail_url(
        &self,
        original_url: &str,
        preferred_size: ImageSize,
        crop: ImageCrop,
        resize: ImageResize,
    ) -> String;

    /// Returns a thumbnail URL with a centered crop and fill resize.
    #[must_use]
    fn thumbnail_url_with_defaults(&self, original_url: &str, preferred_size: ImageSize) -> String {
        self.thumbnail_url(
            original_url,
            preferred_size,
            ImageCrop::Center,
            ImageResize::Fill,
        )
    }
}
