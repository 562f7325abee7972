//! Inline style attributes for editor blocks.
//!
//! `BlockStyles` is sparse: an absent attribute inherits the default. The
//! renderer turns it into a fully populated [`ResolvedStyle`].

use serde::{Deserialize, Serialize};

// ════════════════════════════════════════════════════════════════════════════════
// Sparse per-block styles
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

impl TextAlign {
    pub fn as_css(&self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        }
    }
}

/// Style attributes set on a block. `None` means inherit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockStyles {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub italic: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub underline: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strikethrough: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_align: Option<TextAlign>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
}

/// Boolean styles driven by the toolbar toggle buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InlineStyle {
    Bold,
    Italic,
    Underline,
    Strikethrough,
    Code,
}

/// A single attribute assignment, as issued by the toolbar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleChange {
    Inline(InlineStyle, bool),
    TextAlign(TextAlign),
    FontFamily(String),
    FontSize(String),
    Color(String),
    BackgroundColor(String),
}

/// Empty strings clear a string attribute, matching the "Default" menu entries.
fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

impl BlockStyles {
    pub fn is_set(&self, style: InlineStyle) -> bool {
        self.flag(style).unwrap_or(false)
    }

    fn flag(&self, style: InlineStyle) -> Option<bool> {
        match style {
            InlineStyle::Bold => self.bold,
            InlineStyle::Italic => self.italic,
            InlineStyle::Underline => self.underline,
            InlineStyle::Strikethrough => self.strikethrough,
            InlineStyle::Code => self.code,
        }
    }

    fn flag_mut(&mut self, style: InlineStyle) -> &mut Option<bool> {
        match style {
            InlineStyle::Bold => &mut self.bold,
            InlineStyle::Italic => &mut self.italic,
            InlineStyle::Underline => &mut self.underline,
            InlineStyle::Strikethrough => &mut self.strikethrough,
            InlineStyle::Code => &mut self.code,
        }
    }

    /// Applies one attribute, leaving the others untouched.
    pub fn apply(&mut self, change: StyleChange) {
        match change {
            StyleChange::Inline(style, on) => *self.flag_mut(style) = Some(on),
            StyleChange::TextAlign(align) => self.text_align = Some(align),
            StyleChange::FontFamily(family) => self.font_family = non_empty(family),
            StyleChange::FontSize(size) => self.font_size = non_empty(size),
            StyleChange::Color(color) => self.color = non_empty(color),
            StyleChange::BackgroundColor(color) => self.background_color = non_empty(color),
        }
    }

    /// Flips a boolean style.
    pub fn toggle(&mut self, style: InlineStyle) {
        let on = !self.is_set(style);
        *self.flag_mut(style) = Some(on);
    }

    /// Overlays every attribute present in `other`.
    pub fn merge(&mut self, other: BlockStyles) {
        let BlockStyles {
            bold,
            italic,
            underline,
            strikethrough,
            code,
            text_align,
            font_family,
            font_size,
            color,
            background_color,
        } = other;

        self.bold = bold.or(self.bold);
        self.italic = italic.or(self.italic);
        self.underline = underline.or(self.underline);
        self.strikethrough = strikethrough.or(self.strikethrough);
        self.code = code.or(self.code);
        self.text_align = text_align.or(self.text_align);
        if let Some(family) = font_family {
            self.font_family = non_empty(family);
        }
        if let Some(size) = font_size {
            self.font_size = non_empty(size);
        }
        if let Some(color) = color {
            self.color = non_empty(color);
        }
        if let Some(background) = background_color {
            self.background_color = non_empty(background);
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Resolved styles
// ════════════════════════════════════════════════════════════════════════════════

pub const DEFAULT_FONT_FAMILY: &str = "inherit";
pub const DEFAULT_FONT_SIZE: &str = "16px";
pub const DEFAULT_COLOR: &str = "inherit";
pub const DEFAULT_BACKGROUND: &str = "transparent";
pub const CODE_FONT_FAMILY: &str = "monospace";
pub const CODE_BACKGROUND: &str = "#f1f5f9";

/// Every style attribute with defaults filled in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedStyle {
    pub font_family: String,
    pub font_size: String,
    pub color: String,
    pub background_color: String,
    pub text_align: TextAlign,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_style: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_decoration: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<&'static str>,
}

impl ResolvedStyle {
    pub fn resolve(styles: &BlockStyles) -> Self {
        let mut resolved = Self {
            font_family: styles
                .font_family
                .clone()
                .unwrap_or_else(|| DEFAULT_FONT_FAMILY.to_string()),
            font_size: styles
                .font_size
                .clone()
                .unwrap_or_else(|| DEFAULT_FONT_SIZE.to_string()),
            color: styles
                .color
                .clone()
                .unwrap_or_else(|| DEFAULT_COLOR.to_string()),
            background_color: styles
                .background_color
                .clone()
                .unwrap_or_else(|| DEFAULT_BACKGROUND.to_string()),
            text_align: styles.text_align.unwrap_or_default(),
            font_weight: None,
            font_style: None,
            text_decoration: None,
            padding: None,
            border_radius: None,
        };

        if styles.is_set(InlineStyle::Bold) {
            resolved.font_weight = Some("bold");
        }
        if styles.is_set(InlineStyle::Italic) {
            resolved.font_style = Some("italic");
        }
        if styles.is_set(InlineStyle::Underline) {
            resolved.text_decoration = Some("underline");
        }
        // Strikethrough wins over underline.
        if styles.is_set(InlineStyle::Strikethrough) {
            resolved.text_decoration = Some("line-through");
        }
        if styles.is_set(InlineStyle::Code) {
            resolved.font_family = CODE_FONT_FAMILY.to_string();
            resolved.background_color = CODE_BACKGROUND.to_string();
            resolved.padding = Some("2px 4px");
            resolved.border_radius = Some("4px");
        }

        resolved
    }

    /// Renders as an inline CSS declaration list.
    pub fn to_css(&self) -> String {
        let mut decls = vec![
            format!("font-family: {}", self.font_family),
            format!("font-size: {}", self.font_size),
            format!("color: {}", self.color),
            format!("background-color: {}", self.background_color),
            format!("text-align: {}", self.text_align.as_css()),
        ];
        let optional = [
            ("font-weight", self.font_weight),
            ("font-style", self.font_style),
            ("text-decoration", self.text_decoration),
            ("padding", self.padding),
            ("border-radius", self.border_radius),
        ];
        for (name, value) in optional {
            if let Some(value) = value {
                decls.push(format!("{}: {}", name, value));
            }
        }
        decls.join("; ")
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Toolbar choices
// ════════════════════════════════════════════════════════════════════════════════

/// A named value offered in a toolbar menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StyleOption {
    pub name: &'static str,
    pub value: &'static str,
}

const fn option(name: &'static str, value: &'static str) -> StyleOption {
    StyleOption { name, value }
}

pub const FONT_FAMILIES: [StyleOption; 7] = [
    option("Default", "inherit"),
    option("Inter", "Inter, sans-serif"),
    option("Roboto", "Roboto, sans-serif"),
    option("Open Sans", "Open Sans, sans-serif"),
    option("Lora", "Lora, serif"),
    option("Playfair Display", "Playfair Display, serif"),
    option("Fira Code", "Fira Code, monospace"),
];

pub const FONT_SIZES: [StyleOption; 4] = [
    option("Small", "14px"),
    option("Normal", "16px"),
    option("Large", "18px"),
    option("Extra Large", "20px"),
];

/// Text colors. The empty value resets to the default color.
pub const COLORS: [StyleOption; 8] = [
    option("Default", ""),
    option("Red", "#ef4444"),
    option("Orange", "#f97316"),
    option("Yellow", "#eab308"),
    option("Green", "#22c55e"),
    option("Blue", "#3b82f6"),
    option("Purple", "#a855f7"),
    option("Pink", "#ec4899"),
];
