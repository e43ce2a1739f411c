//! Serializable decoration profile.
//!
//! A [`DecorationProfile`] captures both directional styles in a JSON-friendly
//! form so decorations can be shipped as data instead of code.
//!
//! # Example
//!
//! ```
//! use swipe_decor::{
//!     Configurable, DecorationBuilder, DecorationProfile, DisplayMetrics, SwipeDirection,
//! };
//!
//! let json = r##"{
//!     "left": { "backgroundColor": "#F44336", "actionIcon": { "icon": "ic_delete" } },
//!     "right": { "backgroundColor": "#4CAF50", "label": { "text": "Archive" } }
//! }"##;
//!
//! let profile = DecorationProfile::from_json(json).unwrap();
//! let mut builder = DecorationBuilder::new();
//! builder.apply_profile(&profile).unwrap();
//!
//! let config = builder.build(&DisplayMetrics::new(2.0));
//! assert!(config.style(SwipeDirection::Right).label.is_some());
//! ```

use serde::{Deserialize, Serialize};

use crate::color::Argb;
use crate::config::DecorationBuilder;
use crate::error::ProfileError;
use crate::style::{ActionIcon, DirectionalStyle, IconRef, Label, SwipeDirection, Typeface};
use crate::units::SizeUnit;

// ============================================================================
// Configurable Trait
// ============================================================================

/// Trait for types that can be configured from a [`DecorationProfile`].
pub trait Configurable {
    /// Applies a profile's settings to this instance.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError::InvalidColor`] if a colour string does not parse.
    fn apply_profile(&mut self, profile: &DecorationProfile) -> Result<(), ProfileError>;

    /// Exports the current settings as a profile.
    fn export_profile(&self) -> DecorationProfile;
}

// ============================================================================
// Serializable Settings
// ============================================================================

/// Serializable version of [`SizeUnit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(rename_all = "kebab-case")]
pub enum SerializableUnit {
    Px,
    Dp,
    #[default]
    Sp,
}

impl From<SizeUnit> for SerializableUnit {
    fn from(unit: SizeUnit) -> Self {
        match unit {
            SizeUnit::Pixels => Self::Px,
            SizeUnit::Dp => Self::Dp,
            SizeUnit::Sp => Self::Sp,
        }
    }
}

impl From<SerializableUnit> for SizeUnit {
    fn from(unit: SerializableUnit) -> Self {
        match unit {
            SerializableUnit::Px => Self::Pixels,
            SerializableUnit::Dp => Self::Dp,
            SerializableUnit::Sp => Self::Sp,
        }
    }
}

/// Serializable action icon.
///
/// ```json
/// { "icon": "ic_delete", "tint": "#FFFFFF" }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct IconSettings {
    /// Host icon identifier.
    pub icon: String,

    /// Tint colour as `#RRGGBB` or `#AARRGGBB`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tint: Option<String>,
}

/// Serializable label. Everything but `text` has a default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct LabelSettings {
    pub text: String,

    #[serde(default = "default_label_size")]
    pub size: f32,

    #[serde(default)]
    pub unit: SerializableUnit,

    #[serde(default = "default_label_color")]
    pub color: String,

    /// `sans-serif`, `serif`, `monospace`, `default`, or any family name.
    #[serde(default = "default_typeface")]
    pub typeface: String,
}

fn default_label_size() -> f32 {
    Label::DEFAULT_SIZE
}

fn default_label_color() -> String {
    Argb::DARK_GRAY.to_string()
}

fn default_typeface() -> String {
    Typeface::SansSerif.family().to_string()
}

fn typeface_from_name(name: &str) -> Typeface {
    match name {
        "default" => Typeface::Default,
        "sans-serif" => Typeface::SansSerif,
        "serif" => Typeface::Serif,
        "monospace" => Typeface::Monospace,
        other => Typeface::Named(other.to_string()),
    }
}

fn typeface_name(typeface: &Typeface) -> String {
    match typeface {
        Typeface::Default => "default".to_string(),
        other => other.family().to_string(),
    }
}

/// Serializable settings for one swipe direction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct SwipeSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_icon: Option<IconSettings>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<LabelSettings>,
}

impl SwipeSettings {
    /// Converts to a directional style, validating colours.
    pub fn to_style(&self) -> Result<DirectionalStyle, ProfileError> {
        let background = self
            .background_color
            .as_deref()
            .map(str::parse::<Argb>)
            .transpose()?;

        let icon = self
            .action_icon
            .as_ref()
            .map(|settings| -> Result<ActionIcon, ProfileError> {
                let tint = settings.tint.as_deref().map(str::parse::<Argb>).transpose()?;
                Ok(ActionIcon::new(IconRef::new(settings.icon.clone()), tint))
            })
            .transpose()?;

        let label = self
            .label
            .as_ref()
            .map(|settings| -> Result<Label, ProfileError> {
                Ok(Label {
                    text: settings.text.clone(),
                    size: settings.size,
                    unit: settings.unit.into(),
                    color: settings.color.parse()?,
                    typeface: typeface_from_name(&settings.typeface),
                })
            })
            .transpose()?;

        Ok(DirectionalStyle {
            background,
            icon,
            label,
        })
    }
}

impl From<&DirectionalStyle> for SwipeSettings {
    fn from(style: &DirectionalStyle) -> Self {
        Self {
            background_color: style.background.map(|c| c.to_string()),
            action_icon: style.icon.as_ref().map(|icon| IconSettings {
                icon: icon.image.as_str().to_string(),
                tint: icon.tint.map(|c| c.to_string()),
            }),
            label: style.label.as_ref().map(|label| LabelSettings {
                text: label.text.clone(),
                size: label.size,
                unit: label.unit.into(),
                color: label.color.to_string(),
                typeface: typeface_name(&label.typeface),
            }),
        }
    }
}

// ============================================================================
// DecorationProfile
// ============================================================================

/// A serializable profile for both swipe directions.
///
/// # JSON Format
///
/// ```json
/// {
///   "left": {
///     "backgroundColor": "#FFF44336",
///     "actionIcon": { "icon": "ic_delete", "tint": "#FFFFFFFF" },
///     "label": { "text": "Delete", "size": 14.0, "unit": "sp" }
///   },
///   "right": null
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct DecorationProfile {
    /// Left swipe settings. `None` means nothing is drawn for left swipes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<SwipeSettings>,

    /// Right swipe settings. `None` means nothing is drawn for right swipes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: Option<SwipeSettings>,
}

impl DecorationProfile {
    /// Creates an empty profile.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets settings for one direction.
    pub fn with_direction(mut self, direction: SwipeDirection, settings: SwipeSettings) -> Self {
        match direction {
            SwipeDirection::Left => self.left = Some(settings),
            SwipeDirection::Right => self.right = Some(settings),
        }
        self
    }

    pub fn direction(&self, direction: SwipeDirection) -> Option<&SwipeSettings> {
        match direction {
            SwipeDirection::Left => self.left.as_ref(),
            SwipeDirection::Right => self.right.as_ref(),
        }
    }

    /// Serializes the profile to a JSON string.
    pub fn to_json(&self) -> Result<String, ProfileError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serializes the profile to a pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> Result<String, ProfileError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserializes a profile from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ProfileError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Configurable for DecorationBuilder {
    /// Replaces both directional styles with the profile's.
    ///
    /// Both directions are validated before either is written, so a bad
    /// colour leaves the builder untouched.
    fn apply_profile(&mut self, profile: &DecorationProfile) -> Result<(), ProfileError> {
        let mut styles = Vec::with_capacity(2);
        for direction in SwipeDirection::ALL {
            let style = match profile.direction(direction) {
                Some(settings) => settings.to_style()?,
                None => DirectionalStyle::default(),
            };
            styles.push((direction, style));
        }

        for (direction, style) in styles {
            *self.style_mut(direction) = style;
        }
        Ok(())
    }

    fn export_profile(&self) -> DecorationProfile {
        let export =
            |style: &DirectionalStyle| (!style.is_empty()).then(|| SwipeSettings::from(style));
        DecorationProfile {
            left: export(&self.left),
            right: export(&self.right),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::DisplayMetrics;

    #[test]
    fn profile_serialization_roundtrip() {
        let profile = DecorationProfile::new().with_direction(
            SwipeDirection::Left,
            SwipeSettings {
                background_color: Some("#FFF44336".into()),
                action_icon: Some(IconSettings {
                    icon: "ic_delete".into(),
                    tint: None,
                }),
                label: None,
            },
        );

        let json = profile.to_json().unwrap();
        let restored = DecorationProfile::from_json(&json).unwrap();

        assert_eq!(restored, profile);
        assert!(restored.right.is_none());
    }

    #[test]
    fn profile_json_format() {
        let profile = DecorationProfile::new().with_direction(
            SwipeDirection::Right,
            SwipeSettings {
                background_color: Some("#FF4CAF50".into()),
                ..Default::default()
            },
        );

        let json = profile.to_json_pretty().unwrap();

        assert!(json.contains("\"right\""));
        assert!(json.contains("\"backgroundColor\""));
        assert!(!json.contains("\"left\""));
        assert!(!json.contains("\"actionIcon\""));
    }

    #[test]
    fn label_defaults_fill_in() {
        let json = r#"{ "left": { "label": { "text": "Delete" } } }"#;
        let profile = DecorationProfile::from_json(json).unwrap();

        let label = profile.left.unwrap().label.unwrap();
        assert_eq!(label.size, 14.0);
        assert_eq!(label.unit, SerializableUnit::Sp);
        assert_eq!(label.color, "#FF444444");
        assert_eq!(label.typeface, "sans-serif");
    }

    #[test]
    fn apply_profile_to_builder() {
        let json = r##"{
            "left": {
                "backgroundColor": "#F44336",
                "actionIcon": { "icon": "ic_delete", "tint": "#80FFFFFF" },
                "label": { "text": "Delete", "size": 20, "unit": "dp", "typeface": "Roboto" }
            }
        }"##;
        let profile = DecorationProfile::from_json(json).unwrap();

        let mut builder =
            DecorationBuilder::new().with_background_color(SwipeDirection::Right, Argb::BLACK);
        builder.apply_profile(&profile).unwrap();
        let config = builder.build(&DisplayMetrics::default());

        let left = config.style(SwipeDirection::Left);
        assert_eq!(left.background, Some(Argb::new(0xFFF4_4336)));
        assert_eq!(
            left.icon,
            Some(ActionIcon::new("ic_delete", Some(Argb::new(0x80FF_FFFF))))
        );
        let label = left.label.as_ref().unwrap();
        assert_eq!(label.size, 20.0);
        assert_eq!(label.unit, SizeUnit::Dp);
        assert_eq!(label.typeface, Typeface::Named("Roboto".into()));

        // A profile replaces the builder's styles wholesale
        assert!(config.style(SwipeDirection::Right).is_empty());
    }

    #[test]
    fn invalid_color_leaves_builder_untouched() {
        let json = r##"{
            "left": { "backgroundColor": "#F44336" },
            "right": { "backgroundColor": "tomato" }
        }"##;
        let profile = DecorationProfile::from_json(json).unwrap();

        let mut builder = DecorationBuilder::new().with_shared_background_color(Argb::BLACK);
        let err = builder.apply_profile(&profile).unwrap_err();

        assert!(matches!(err, ProfileError::InvalidColor(ref c) if c == "tomato"));
        assert_eq!(builder.left.background, Some(Argb::BLACK));
        assert_eq!(builder.right.background, Some(Argb::BLACK));
    }

    #[test]
    fn export_profile_from_builder() {
        let builder = DecorationBuilder::new()
            .with_action_icon(SwipeDirection::Right, "ic_archive", Some(Argb::WHITE))
            .with_label(
                SwipeDirection::Right,
                "Archive",
                12.0,
                SizeUnit::Pixels,
                Argb::WHITE,
                Typeface::Default,
            );

        let profile = builder.export_profile();

        assert!(profile.left.is_none());
        let right = profile.right.as_ref().unwrap();
        assert_eq!(right.background_color, None);
        assert_eq!(right.action_icon.as_ref().unwrap().tint.as_deref(), Some("#FFFFFFFF"));
        let label = right.label.as_ref().unwrap();
        assert_eq!(label.unit, SerializableUnit::Px);
        assert_eq!(label.typeface, "default");

        // Exported profiles apply back to the same styles
        let mut restored = DecorationBuilder::new();
        restored.apply_profile(&profile).unwrap();
        assert_eq!(restored.right, builder.right);
    }

    #[test]
    fn malformed_json_is_an_error() {
        let err = DecorationProfile::from_json("{ \"left\": 3 }").unwrap_err();
        assert!(matches!(err, ProfileError::Json(_)));
    }

    #[test]
    fn empty_profile_deserializes() {
        let profile = DecorationProfile::from_json("{}").unwrap();
        assert!(profile.left.is_none());
        assert!(profile.right.is_none());
    }
}
