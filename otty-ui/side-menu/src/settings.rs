use std::path::Path;
use std::time::Duration;

use iced::Color;
use serde::{Deserialize, Serialize};

use crate::error::SideMenuError;
use crate::model::SelectionKey;

/// Duration of every open/close and highlight transition.
pub const ANIMATION_DURATION: Duration = Duration::from_millis(240);
/// Delay between selecting a tab and closing the menu.
pub const CLOSE_DELAY: Duration = Duration::from_millis(100);

pub const DEFAULT_BACKGROUND_IMAGE: &str = "airplane";
pub const DEFAULT_BLUR_RADIUS: f32 = 32.0;
/// System blue (`#007aff`).
pub const DEFAULT_SELECTION_COLOR: Color =
    Color::from_rgb(0.0, 122.0 / 255.0, 1.0);
/// Base color painted under the background art (`#ff2d55`).
pub const MENU_BASE_COLOR: Color =
    Color::from_rgb(1.0, 45.0 / 255.0, 85.0 / 255.0);

/// Styling parameters fixed for the lifetime of a side menu.
#[derive(Debug, Clone, PartialEq)]
pub struct SideMenuSettings {
    background_image: String,
    selection_color: Color,
    blur_radius: f32,
    enable_3d: bool,
    selection_key: SelectionKey,
}

impl Default for SideMenuSettings {
    fn default() -> Self {
        Self {
            background_image: DEFAULT_BACKGROUND_IMAGE.to_string(),
            selection_color: DEFAULT_SELECTION_COLOR,
            blur_radius: DEFAULT_BLUR_RADIUS,
            enable_3d: true,
            selection_key: SelectionKey::default(),
        }
    }
}

impl SideMenuSettings {
    pub fn with_background_image(mut self, name: &str) -> Self {
        self.background_image = name.to_string();
        self
    }

    pub fn with_selection_color(mut self, color: Color) -> Self {
        self.selection_color = color;
        self
    }

    /// Negative and non-finite values are clamped to zero.
    pub fn with_blur_radius(mut self, radius: f32) -> Self {
        self.blur_radius = if radius.is_finite() {
            radius.max(0.0)
        } else {
            0.0
        };
        self
    }

    pub fn with_3d(mut self, enable: bool) -> Self {
        self.enable_3d = enable;
        self
    }

    pub fn with_selection_key(mut self, key: SelectionKey) -> Self {
        self.selection_key = key;
        self
    }

    pub fn background_image(&self) -> &str {
        &self.background_image
    }

    pub fn selection_color(&self) -> Color {
        self.selection_color
    }

    pub fn blur_radius(&self) -> f32 {
        self.blur_radius
    }

    pub fn enable_3d(&self) -> bool {
        self.enable_3d
    }

    pub fn selection_key(&self) -> SelectionKey {
        self.selection_key
    }

    /// Parse settings from a JSON document. Missing fields keep defaults.
    pub fn from_json(content: &str) -> Result<Self, SideMenuError> {
        let config: SideMenuConfig = serde_json::from_str(content)?;
        Self::try_from(config)
    }

    /// Load settings from a JSON file on disk.
    pub fn load(path: &Path) -> Result<Self, SideMenuError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Load settings from disk, falling back to defaults on any error.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(settings) => settings,
            Err(err) => {
                log::warn!(
                    "failed to load side menu settings from {}, \
                     using defaults: {err}",
                    path.display()
                );
                Self::default()
            },
        }
    }
}

/// Serialized form of [`SideMenuSettings`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SideMenuConfig {
    pub background_image: String,
    pub selection_color: String,
    pub blur_radius: f32,
    pub enable_3d: bool,
    pub selection_key: SelectionKey,
}

impl Default for SideMenuConfig {
    fn default() -> Self {
        Self {
            background_image: DEFAULT_BACKGROUND_IMAGE.to_string(),
            selection_color: String::from("#007aff"),
            blur_radius: DEFAULT_BLUR_RADIUS,
            enable_3d: true,
            selection_key: SelectionKey::default(),
        }
    }
}

impl TryFrom<SideMenuConfig> for SideMenuSettings {
    type Error = SideMenuError;

    fn try_from(config: SideMenuConfig) -> Result<Self, Self::Error> {
        if !config.blur_radius.is_finite() || config.blur_radius < 0.0 {
            return Err(SideMenuError::Validation {
                message: format!(
                    "blur_radius must be a non-negative number, got {}",
                    config.blur_radius
                ),
            });
        }

        if config.background_image.trim().is_empty() {
            return Err(SideMenuError::Validation {
                message: String::from("background_image must not be empty"),
            });
        }

        Ok(Self::default()
            .with_background_image(&config.background_image)
            .with_selection_color(parse_hex_color(&config.selection_color)?)
            .with_blur_radius(config.blur_radius)
            .with_3d(config.enable_3d)
            .with_selection_key(config.selection_key))
    }
}

/// Parse `#rgb`, `#rrggbb` or `#rrggbbaa` into a color.
pub fn parse_hex_color(value: &str) -> Result<Color, SideMenuError> {
    let invalid = || SideMenuError::InvalidColor {
        value: value.to_string(),
    };

    let hex = value.trim().strip_prefix('#').ok_or_else(invalid)?;
    if !hex.is_ascii() {
        return Err(invalid());
    }

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&hex[range], 16).map_err(|_| invalid())
    };

    match hex.len() {
        3 => {
            let short = |index: usize| {
                channel(index..index + 1).map(|value| value * 17)
            };
            Ok(Color::from_rgb8(short(0)?, short(1)?, short(2)?))
        },
        6 => Ok(Color::from_rgb8(
            channel(0..2)?,
            channel(2..4)?,
            channel(4..6)?,
        )),
        8 => Ok(Color::from_rgba8(
            channel(0..2)?,
            channel(2..4)?,
            channel(4..6)?,
            f32::from(channel(6..8)?) / 255.0,
        )),
        _ => Err(invalid()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_default_settings_when_inspected_then_match_documented_defaults() {
        let settings = SideMenuSettings::default();
        assert_eq!(settings.blur_radius(), 32.0);
        assert!(settings.enable_3d());
        assert_eq!(settings.selection_color(), DEFAULT_SELECTION_COLOR);
        assert_eq!(settings.background_image(), "airplane");
        assert_eq!(settings.selection_key(), SelectionKey::Title);
    }

    #[test]
    fn given_partial_json_when_parsed_then_missing_fields_use_defaults() {
        let settings = SideMenuSettings::from_json(
            r##"{ "selection_color": "#ff0000", "enable_3d": false }"##,
        )
        .expect("settings should parse");

        assert_eq!(settings.selection_color(), Color::from_rgb8(255, 0, 0));
        assert!(!settings.enable_3d());
        assert_eq!(settings.blur_radius(), DEFAULT_BLUR_RADIUS);
        assert_eq!(settings.background_image(), DEFAULT_BACKGROUND_IMAGE);
    }

    #[test]
    fn given_default_config_when_converted_then_equals_default_settings() {
        let settings = SideMenuSettings::try_from(SideMenuConfig::default())
            .expect("default config should be valid");
        assert_eq!(settings, SideMenuSettings::default());
    }

    #[test]
    fn given_negative_blur_in_json_when_parsed_then_validation_fails() {
        let result = SideMenuSettings::from_json(r#"{ "blur_radius": -4.0 }"#);
        assert!(matches!(result, Err(SideMenuError::Validation { .. })));
    }

    #[test]
    fn given_selection_key_in_json_when_parsed_then_key_is_applied() {
        let settings =
            SideMenuSettings::from_json(r#"{ "selection_key": "id" }"#)
                .expect("settings should parse");
        assert_eq!(settings.selection_key(), SelectionKey::Id);
    }

    #[test]
    fn given_malformed_json_when_parsed_then_json_error_is_returned() {
        let result = SideMenuSettings::from_json("{ not json");
        assert!(matches!(result, Err(SideMenuError::Json(_))));
    }

    #[test]
    fn given_builder_blur_when_negative_then_value_is_clamped() {
        let settings = SideMenuSettings::default().with_blur_radius(-3.0);
        assert_eq!(settings.blur_radius(), 0.0);
        let settings = SideMenuSettings::default().with_blur_radius(f32::NAN);
        assert_eq!(settings.blur_radius(), 0.0);
    }

    #[test]
    fn given_hex_strings_when_parsed_then_colors_match() {
        assert_eq!(
            parse_hex_color("#007aff").expect("valid color"),
            Color::from_rgb8(0, 122, 255)
        );
        assert_eq!(
            parse_hex_color("#fff").expect("valid color"),
            Color::from_rgb8(255, 255, 255)
        );
        let translucent = parse_hex_color("#00000080").expect("valid color");
        assert!((translucent.a - 128.0 / 255.0).abs() < f32::EPSILON);
    }

    #[test]
    fn given_invalid_hex_strings_when_parsed_then_error_is_returned() {
        for value in ["007aff", "#12345", "#zzzzzz", "#ééé", ""] {
            assert!(
                matches!(
                    parse_hex_color(value),
                    Err(SideMenuError::InvalidColor { .. })
                ),
                "{value} should be rejected"
            );
        }
    }
}
