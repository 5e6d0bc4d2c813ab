//! Format definitions keyed by semantic category.
//!
//! The default palette mirrors the colors the original Visual Studio
//! extension registered for light and dark themes.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use firefly_classify::Category;

/// Editor color theme the presentation layer is rendering for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Theme {
    /// Light backgrounds.
    Light,
    /// Dark backgrounds.
    Dark,
}

/// A 24-bit foreground color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Create a color from its channels.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Visual style of one semantic category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatDefinition {
    /// Human-readable name shown in configuration UIs.
    pub display_name: String,
    /// Foreground color on light themes.
    pub light: Rgb,
    /// Foreground color on dark themes.
    pub dark: Rgb,
}

impl FormatDefinition {
    fn new(display_name: &str, light: Rgb, dark: Rgb) -> Self {
        Self {
            display_name: display_name.to_string(),
            light,
            dark,
        }
    }

    /// The foreground color for `theme`.
    #[must_use]
    pub const fn color(&self, theme: Theme) -> Rgb {
        match theme {
            Theme::Light => self.light,
            Theme::Dark => self.dark,
        }
    }
}

/// Failed to load a format map.
#[derive(Debug, Error)]
pub enum FormatMapError {
    /// The file could not be read.
    #[error("cannot read format map: {0}")]
    Io(#[from] std::io::Error),
    /// The file is not a valid format map.
    #[error("invalid format map: {0}")]
    Parse(#[from] serde_json::Error),
}

/// The complete category-to-style mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatMap {
    /// Style for [`Category::Delimiter`].
    pub delimiter: FormatDefinition,
    /// Style for [`Category::Element`].
    pub element: FormatDefinition,
    /// Style for [`Category::AttributeName`].
    pub attribute_name: FormatDefinition,
    /// Style for [`Category::Quote`].
    pub quote: FormatDefinition,
    /// Style for [`Category::AttributeValue`].
    pub attribute_value: FormatDefinition,
    /// Style for [`Category::Text`].
    pub text: FormatDefinition,
    /// Style for [`Category::LitAttributeName`].
    pub lit_attribute_name: FormatDefinition,
    /// Style for [`Category::LitAttributeValue`].
    pub lit_attribute_value: FormatDefinition,
}

impl Default for FormatMap {
    fn default() -> Self {
        Self {
            delimiter: FormatDefinition::new(
                "Lit HTML Template Delimiter Character",
                Rgb::new(0, 0, 255),
                Rgb::new(192, 192, 192),
            ),
            element: FormatDefinition::new(
                "Lit HTML Template Element",
                Rgb::new(128, 0, 0),
                Rgb::new(86, 156, 214),
            ),
            attribute_name: FormatDefinition::new(
                "Lit HTML Template Normal Attribute Name",
                Rgb::new(255, 0, 0),
                Rgb::new(156, 220, 254),
            ),
            quote: FormatDefinition::new(
                "Lit HTML Template Quote",
                Rgb::new(0, 0, 0),
                Rgb::new(210, 210, 210),
            ),
            attribute_value: FormatDefinition::new(
                "Lit HTML Template Normal Attribute Value",
                Rgb::new(0, 0, 255),
                Rgb::new(200, 200, 200),
            ),
            text: FormatDefinition::new(
                "Lit HTML Template Text",
                Rgb::new(0, 0, 0),
                Rgb::new(214, 157, 133),
            ),
            lit_attribute_name: FormatDefinition::new(
                "Lit HTML Template Lit Special Attribute Name",
                Rgb::new(0, 100, 0),
                Rgb::new(173, 255, 47),
            ),
            lit_attribute_value: FormatDefinition::new(
                "Lit HTML Template Lit Special Attribute Value",
                Rgb::new(0, 100, 0),
                Rgb::new(173, 255, 47),
            ),
        }
    }
}

impl FormatMap {
    /// The style for one semantic category.
    #[must_use]
    pub const fn definition(&self, category: Category) -> &FormatDefinition {
        match category {
            Category::Delimiter => &self.delimiter,
            Category::Element => &self.element,
            Category::AttributeName => &self.attribute_name,
            Category::Quote => &self.quote,
            Category::AttributeValue => &self.attribute_value,
            Category::Text => &self.text,
            Category::LitAttributeName => &self.lit_attribute_name,
            Category::LitAttributeValue => &self.lit_attribute_value,
        }
    }

    /// Parse a format map from JSON.
    ///
    /// # Errors
    /// Returns [`FormatMapError::Parse`] if the JSON does not describe a
    /// complete map.
    pub fn from_json(json: &str) -> Result<Self, FormatMapError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a format map from a JSON file.
    ///
    /// # Errors
    /// Returns [`FormatMapError::Io`] if the file cannot be read and
    /// [`FormatMapError::Parse`] if it is not a valid map.
    pub fn load(path: &Path) -> Result<Self, FormatMapError> {
        Self::from_json(&fs::read_to_string(path)?)
    }
}
