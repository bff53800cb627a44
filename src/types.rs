//! Value types for thumbnail requests.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Crop anchor used when the resizer has to discard pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageCrop {
    /// Keep the top edge.
    Top,
    /// Keep the bottom edge.
    Bottom,
    /// Keep the left edge.
    Left,
    /// Keep the right edge.
    Right,
    /// Keep the middle of the image.
    Center,
}

impl ImageCrop {
    /// Returns the wire name of the crop anchor.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Right => "right",
            Self::Center => "center",
        }
    }
}

impl fmt::Display for ImageCrop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ImageCrop {
    type Err = ParseImageEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "top" => Ok(Self::Top),
            "bottom" => Ok(Self::Bottom),
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            "center" => Ok(Self::Center),
            _ => Err(ParseImageEnumError::UnknownCrop(s.to_string())),
        }
    }
}

/// Strategy the resizer applies to reach the requested size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageResize {
    /// Cut the image down to the requested size.
    Crop,
    /// Scale, possibly changing the aspect ratio.
    Scale,
    /// Scale preserving the aspect ratio, filling the requested box.
    Fill,
}

impl ImageResize {
    /// Returns the wire name of the resize strategy.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Crop => "crop",
            Self::Scale => "scale",
            Self::Fill => "fill",
        }
    }
}

impl fmt::Display for ImageResize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ImageResize {
    type Err = ParseImageEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "crop" => Ok(Self::Crop),
            "scale" => Ok(Self::Scale),
            "fill" => Ok(Self::Fill),
            _ => Err(ParseImageEnumError::UnknownResize(s.to_string())),
        }
    }
}

/// Error returned when a crop or resize wire name cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseImageEnumError {
    /// Not a known crop anchor.
    #[error("unknown crop mode: {0}")]
    UnknownCrop(String),
    /// Not a known resize strategy.
    #[error("unknown resize mode: {0}")]
    UnknownResize(String),
}

/// Requested thumbnail size in pixels.
///
/// Dimensions are floating point because callers usually derive them from
/// view geometry in display points multiplied by a fractional scale factor.
/// They are rounded to whole pixels when rendered into a URL.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImageSize {
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl ImageSize {
    /// Creates a size from a width and a height.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Creates a square size.
    #[must_use]
    pub const fn square(dimension: f64) -> Self {
        Self::new(dimension, dimension)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(ImageCrop::Top, "top")]
    #[test_case(ImageCrop::Bottom, "bottom")]
    #[test_case(ImageCrop::Left, "left")]
    #[test_case(ImageCrop::Right, "right")]
    #[test_case(ImageCrop::Center, "center")]
    fn crop_wire_name(crop: ImageCrop, expected: &str) {
        assert_eq!(crop.as_str(), expected);
        assert_eq!(crop.to_string(), expected);
        assert_eq!(expected.parse::<ImageCrop>(), Ok(crop));
    }

    #[test_case(ImageResize::Crop, "crop")]
    #[test_case(ImageResize::Scale, "scale")]
    #[test_case(ImageResize::Fill, "fill")]
    fn resize_wire_name(resize: ImageResize, expected: &str) {
        assert_eq!(resize.as_str(), expected);
        assert_eq!(resize.to_string(), expected);
        assert_eq!(expected.parse::<ImageResize>(), Ok(resize));
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("CENTER".parse::<ImageCrop>(), Ok(ImageCrop::Center));
        assert_eq!("Fill".parse::<ImageResize>(), Ok(ImageResize::Fill));
    }

    #[test]
    fn parse_rejects_unknown_names() {
        assert_eq!(
            "middle".parse::<ImageCrop>(),
            Err(ParseImageEnumError::UnknownCrop("middle".to_string()))
        );
        assert_eq!(
            "stretch".parse::<ImageResize>(),
            Err(ParseImageEnumError::UnknownResize("stretch".to_string()))
        );
    }

    #[test]
    fn enums_serialize_as_lowercase_strings() {
        assert_eq!(
            serde_json::to_string(&ImageCrop::Bottom).unwrap(),
            "\"bottom\""
        );
        assert_eq!(
            serde_json::to_string(&ImageResize::Scale).unwrap(),
            "\"scale\""
        );
        assert_eq!(
            serde_json::from_str::<ImageCrop>("\"left\"").unwrap(),
            ImageCrop::Left
        );
    }

    #[test]
    fn square_size() {
        let size = ImageSize::square(128.0);
        assert_eq!(size, ImageSize::new(128.0, 128.0));
    }
}
