//! Declarative attribute sheet for building a switch from configuration.
//!
//! ```toml
//! variant = "bordered_bitmap"
//! on_color = "#FF32C781"
//! switch_on_background = "thumb_on"
//! switch_off_background = "thumb_off"
//! border_size = 2
//! ```

use crate::error::{Result, SwitchError};
use crate::style::{check_dimension, Border, SwitchStyle, SwitchVariant, ThumbStyle};
use serde::{Deserialize, Serialize};
use slideswitch_core::{Color, ImageHandle, Insets};
use std::collections::HashMap;
use std::hash::BuildHasher;

/// Lookup of host images by name.
pub trait ImageSource {
    /// Find an image by name.
    fn image(&self, name: &str) -> Option<ImageHandle>;
}

impl<S: BuildHasher> ImageSource for HashMap<String, ImageHandle, S> {
    fn image(&self, name: &str) -> Option<ImageHandle> {
        self.get(name).copied()
    }
}

/// An [`ImageSource`] with no images.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoImages;

impl ImageSource for NoImages {
    fn image(&self, _name: &str) -> Option<ImageHandle> {
        None
    }
}

/// Raw switch attributes as written in configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SwitchAttributes {
    /// Rendering variant
    pub variant: SwitchVariant,
    /// Track color when on
    pub on_color: String,
    /// Track color when off
    pub off_color: String,
    /// Thumb color of the plain variant
    pub button_bg_color: String,
    /// Top-left thumb color of the gradient variant
    pub gradient_start_color: String,
    /// Bottom-right thumb color of the gradient variant
    pub gradient_end_color: String,
    /// Initial value
    pub switch_status: bool,
    /// Track border color of the bordered variant
    pub border_color: String,
    /// Track border width of the bordered variant, in pixels
    pub border_size: f32,
    /// Gap between the track edge and the thumb, in pixels
    pub inner_thick: f32,
    /// Image stretched over the track
    pub switch_background: Option<String>,
    /// Thumb image in the on half
    pub switch_on_background: Option<String>,
    /// Thumb image in the off half
    pub switch_off_background: Option<String>,
    /// Uniform padding around the track, in pixels
    pub padding: f32,
    /// Whether the switch accepts input
    pub enabled: bool,
}

impl Default for SwitchAttributes {
    fn default() -> Self {
        Self {
            variant: SwitchVariant::Plain,
            on_color: "#FF32C781".to_string(),
            off_color: "#FFC9C9C9".to_string(),
            button_bg_color: "#FFFFFFFF".to_string(),
            gradient_start_color: "#FFFFFFFF".to_string(),
            gradient_end_color: "#FFE0E0E0".to_string(),
            switch_status: true,
            border_color: "#FFFFFFFF".to_string(),
            border_size: 1.0,
            inner_thick: 8.0,
            switch_background: None,
            switch_on_background: None,
            switch_off_background: None,
            padding: 0.0,
            enabled: true,
        }
    }
}

impl SwitchAttributes {
    /// Parse attributes from TOML. Missing keys take their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Serialize attributes to TOML.
    pub fn to_toml_string(&self) -> std::result::Result<String, toml::ser::Error> {
        toml::to_string(self)
    }

    /// Resolve colors, dimensions and images into a style.
    ///
    /// Only the attributes the chosen variant uses are checked.
    pub fn resolve(&self, images: &impl ImageSource) -> Result<SwitchStyle> {
        check_dimension("inner_thick", self.inner_thick)?;
        check_dimension("padding", self.padding)?;

        let thumb = match self.variant {
            SwitchVariant::Plain => {
                ThumbStyle::Solid(parse_color("button_bg_color", &self.button_bg_color)?)
            }
            SwitchVariant::Gradient => ThumbStyle::Gradient {
                start: parse_color("gradient_start_color", &self.gradient_start_color)?,
                end: parse_color("gradient_end_color", &self.gradient_end_color)?,
            },
            SwitchVariant::Bitmap | SwitchVariant::BorderedBitmap => {
                let (Some(on), Some(off)) =
                    (&self.switch_on_background, &self.switch_off_background)
                else {
                    return Err(SwitchError::MissingThumbImages {
                        variant: self.variant,
                    });
                };
                ThumbStyle::Bitmap {
                    on: lookup(images, "switch_on_background", on)?,
                    off: lookup(images, "switch_off_background", off)?,
                }
            }
        };

        let border = if self.variant == SwitchVariant::BorderedBitmap {
            check_dimension("border_size", self.border_size)?;
            Some(Border {
                color: parse_color("border_color", &self.border_color)?,
                width: self.border_size,
            })
        } else {
            None
        };

        let track_image = self
            .switch_background
            .as_deref()
            .map(|name| lookup(images, "switch_background", name))
            .transpose()?;

        let style = SwitchStyle {
            on_color: parse_color("on_color", &self.on_color)?,
            off_color: parse_color("off_color", &self.off_color)?,
            thumb,
            border,
            track_image,
            inner_thick: self.inner_thick,
            padding: Insets::uniform(self.padding),
            ..SwitchStyle::default()
        };
        log::debug!("resolved {:?} switch style", style.variant());
        Ok(style)
    }
}

fn parse_color(attribute: &'static str, value: &str) -> Result<Color> {
    Color::from_argb_hex(value).map_err(|source| SwitchError::InvalidColor {
        attribute,
        value: value.to_string(),
        source,
    })
}

fn lookup(images: &impl ImageSource, attribute: &'static str, name: &str) -> Result<ImageHandle> {
    images.image(name).ok_or_else(|| SwitchError::MissingImage {
        attribute,
        name: name.to_string(),
    })
}
