//! Error types for switch construction.
//!
//! Everything that can go wrong is caught while building a switch. Painting,
//! touch handling and animation never fail.

use crate::style::SwitchVariant;
use slideswitch_core::ColorParseError;
use thiserror::Error;

/// Errors raised while resolving attributes or validating a style.
#[derive(Debug, Error)]
pub enum SwitchError {
    /// A color attribute is not `#AARRGGBB` or `#RRGGBB`.
    #[error("invalid color for `{attribute}`: {value:?} ({source})")]
    InvalidColor {
        attribute: &'static str,
        value: String,
        #[source]
        source: ColorParseError,
    },

    /// An image attribute names an image the host does not know.
    #[error("image `{name}` referenced by `{attribute}` not found")]
    MissingImage { attribute: &'static str, name: String },

    /// A bitmap variant was configured without both thumb images.
    #[error("variant {variant:?} requires switch_on_background and switch_off_background")]
    MissingThumbImages { variant: SwitchVariant },

    /// A dimension is negative or not finite.
    #[error("invalid dimension for `{attribute}`: {value}")]
    InvalidDimension { attribute: &'static str, value: f32 },

    /// The attribute sheet could not be parsed.
    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),
}

/// Result alias for switch construction.
pub type Result<T> = std::result::Result<T, SwitchError>;
