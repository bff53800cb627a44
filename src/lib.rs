//! Image CDN URL transformation for chat clients.
//!
//! Chat attachments are served from a CDN that signs every request with
//! ephemeral query parameters and resizes images on the fly through query
//! parameters. This crate derives stable cache keys and thumbnail URLs from
//! attachment URLs; it performs no networking and no image processing.
//!
//! Both operations are pure and infallible. A URL that cannot be decomposed
//! is returned unchanged so image loading degrades to the original URL
//! instead of breaking.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// CDN capability trait and the Stream CDN provider.
pub mod cdn;
/// Value types for crop, resize, and sizing parameters.
pub mod types;

pub use cdn::{ImageCdn, STREAM_CDN_HOST, StreamImageCdn, is_stream_cdn_url};
pub use types::{ImageCrop, ImageResize, ImageSize, ParseImageEnumError};

/// Current version of the crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
