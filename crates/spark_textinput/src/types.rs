//! Value types shared by the style derivations and view-models

use serde::Deserialize;
use spark_core::EdgeInsets;
use spark_theme::{clear_color, AnyColorToken, ColorTokenExt};

/// Semantic styling category, selects the feedback color branch
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    #[default]
    Neutral,
    Error,
    Alert,
    Success,
}

/// Whether the input draws a rounded rectangle border
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BorderStyle {
    #[default]
    RoundedRect,
    None,
}

/// Policy for showing the clear-text button
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClearMode {
    #[default]
    Never,
    Always,
    WhileEditing,
    UnlessEditing,
}

impl ClearMode {
    /// Whether the clear button is visible for the given focus state
    pub fn should_show_clear_button(self, is_focused: bool) -> bool {
        match self {
            ClearMode::Never => false,
            ClearMode::Always => true,
            ClearMode::WhileEditing => is_focused,
            ClearMode::UnlessEditing => !is_focused,
        }
    }
}

/// Corner radius and stroke width of the input border
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BorderLayout {
    pub radius: f32,
    pub width: f32,
}

/// Colors of the input's text, placeholder, border and background
#[derive(Clone, Debug)]
pub struct ColorSet {
    pub text: AnyColorToken,
    pub placeholder: AnyColorToken,
    pub border: AnyColorToken,
    pub background: AnyColorToken,
}

impl Default for ColorSet {
    fn default() -> Self {
        Self {
            text: clear_color(),
            placeholder: clear_color(),
            border: clear_color(),
            background: clear_color(),
        }
    }
}

impl PartialEq for ColorSet {
    fn eq(&self, other: &Self) -> bool {
        self.text.token_eq(&other.text)
            && self.placeholder.token_eq(&other.placeholder)
            && self.border.token_eq(&other.border)
            && self.background.token_eq(&other.background)
    }
}

/// Horizontal spacing around the input and between its parts
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Spacings {
    pub horizontal: f32,
    pub content: f32,
}

/// Spacings expressed per edge, as laid out by addon containers
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EdgeSpacings {
    pub left: f32,
    pub content: f32,
    pub right: f32,
}

impl Spacings {
    pub fn edges(&self) -> EdgeSpacings {
        EdgeSpacings {
            left: self.horizontal,
            content: self.content,
            right: self.horizontal,
        }
    }
}

/// Insets of the text content inside the field
///
/// `input_trailing` is the gap between the text and the trailing edge; it is
/// zero when a clear button sits there.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ContentPadding {
    pub top: f32,
    pub leading: f32,
    pub bottom: f32,
    pub trailing: f32,
    pub input_trailing: f32,
}

impl ContentPadding {
    pub fn insets(&self) -> EdgeInsets {
        EdgeInsets::new(self.top, self.leading, self.bottom, self.trailing)
    }
}

/// Which side of the field an addon is attached to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AddonSide {
    Left,
    Right,
}

/// Layout options of a left or right addon
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AddonConfiguration {
    pub has_padding: bool,
    pub has_separator: bool,
    pub layout_priority: f32,
}

impl Default for AddonConfiguration {
    fn default() -> Self {
        Self {
            has_padding: false,
            has_separator: false,
            layout_priority: 1.0,
        }
    }
}

impl AddonConfiguration {
    pub fn with_padding(mut self, has_padding: bool) -> Self {
        self.has_padding = has_padding;
        self
    }

    pub fn with_separator(mut self, has_separator: bool) -> Self {
        self.has_separator = has_separator;
        self
    }

    pub fn with_layout_priority(mut self, layout_priority: f32) -> Self {
        self.layout_priority = layout_priority;
        self
    }
}
