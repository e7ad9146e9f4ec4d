//! Themed text factories: plain runs, headings, captions, body copy, links,
//! and frame-aligned text.
//!
//! # Example
//!
//! ```rust
//! use glint_kit::prelude::*;
//!
//! let theme = ThemeState::new(ColorScheme::Light);
//!
//! let title = heading("Dashboard", HeadingLevel::H1).build(&theme);
//! let hint = caption("Last synced 5 minutes ago").build(&theme);
//! let more = link("Show all").url("https://example.com").build(&theme);
//! let hero = centered_text("Welcome").size(30.0).build(&theme);
//! ```

use glint_core::{
    Alignment, Callback, Color, ContainerProps, FontWeight, TextAlign, TextDecoration, TextProps,
    Widget,
};
use glint_theme::{ColorRole, Palette, ThemeState};

/// Bold size-20 title node shared by the composite builders.
pub(crate) fn title_text(value: String, palette: &Palette) -> Widget {
    Widget::Text(TextProps {
        value,
        size: 20.0,
        weight: FontWeight::Bold,
        color: Some(palette.text_primary),
        ..Default::default()
    })
}

/// Heading levels with a fixed descending size table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
}

impl HeadingLevel {
    /// Font size for this level.
    pub fn size(self) -> f32 {
        match self {
            HeadingLevel::H1 => 32.0,
            HeadingLevel::H2 => 28.0,
            HeadingLevel::H3 => 24.0,
            HeadingLevel::H4 => 20.0,
            HeadingLevel::H5 => 16.0,
            HeadingLevel::H6 => 14.0,
        }
    }
}

/// Builder for a themed text run.
pub struct Text {
    value: String,
    size: f32,
    role: ColorRole,
    color: Option<Color>,
    align: TextAlign,
    weight: FontWeight,
    decoration: TextDecoration,
    url: Option<String>,
    on_click: Option<Callback>,
}

impl Text {
    pub fn size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    /// Override the color. Overrides always win over the role default.
    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    pub fn weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }

    /// Toggle the underline decoration (links default to underlined).
    pub fn underline(mut self, underline: bool) -> Self {
        self.decoration = if underline {
            TextDecoration::Underline
        } else {
            TextDecoration::None
        };
        self
    }

    /// Navigation target, for link text.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn on_click<F>(mut self, handler: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_click = Some(Callback::unit(handler));
        self
    }

    /// Resolve the color role against the current palette and build.
    pub fn build(self, theme: &ThemeState) -> Widget {
        let resolved = self.color.unwrap_or_else(|| theme.color(self.role));
        Widget::Text(TextProps {
            value: self.value,
            size: self.size,
            color: Some(resolved),
            align: self.align,
            weight: self.weight,
            decoration: self.decoration,
            url: self.url,
            on_click: self.on_click,
        })
    }
}

fn themed_text(value: impl Into<String>, size: f32, role: ColorRole) -> Text {
    Text {
        value: value.into(),
        size,
        role,
        color: None,
        align: TextAlign::Left,
        weight: FontWeight::Normal,
        decoration: TextDecoration::None,
        url: None,
        on_click: None,
    }
}

/// Plain text: size 16, `text_primary`.
pub fn text(value: impl Into<String>) -> Text {
    themed_text(value, 16.0, ColorRole::TextPrimary)
}

/// Bold heading text sized by [`HeadingLevel`].
pub fn heading(value: impl Into<String>, level: HeadingLevel) -> Text {
    themed_text(value, level.size(), ColorRole::TextPrimary).weight(FontWeight::Bold)
}

/// Small supporting text: size 12, `text_secondary`.
pub fn caption(value: impl Into<String>) -> Text {
    themed_text(value, 12.0, ColorRole::TextSecondary)
}

/// Body copy: size 14, `text_primary`.
pub fn body(value: impl Into<String>) -> Text {
    themed_text(value, 14.0, ColorRole::TextPrimary)
}

/// Link text: size 14, palette `primary`, underlined by default.
pub fn link(value: impl Into<String>) -> Text {
    let mut built = themed_text(value, 14.0, ColorRole::Primary);
    built.decoration = TextDecoration::Underline;
    built
}

/// Builder for text wrapped in an aligning frame.
///
/// The frame expands to fill its parent and paints the palette `surface`
/// color unless told otherwise.
pub struct FramedText {
    text: Text,
    alignment: Alignment,
    expand: bool,
    bgcolor: Option<Color>,
    padding: Option<f32>,
}

impl FramedText {
    fn new(text: Text, alignment: Alignment) -> Self {
        Self {
            text,
            alignment,
            expand: true,
            bgcolor: None,
            padding: None,
        }
    }

    pub fn size(mut self, size: f32) -> Self {
        self.text = self.text.size(size);
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.text = self.text.color(color);
        self
    }

    pub fn bgcolor(mut self, color: Color) -> Self {
        self.bgcolor = Some(color);
        self
    }

    pub fn padding(mut self, padding: f32) -> Self {
        self.padding = Some(padding);
        self
    }

    pub fn expand(mut self, expand: bool) -> Self {
        self.expand = expand;
        self
    }

    pub fn build(self, theme: &ThemeState) -> Widget {
        let surface = theme.color(ColorRole::Surface);
        Widget::Container(ContainerProps {
            content: Some(Box::new(self.text.build(theme))),
            alignment: Some(self.alignment),
            expand: self.expand,
            bgcolor: Some(self.bgcolor.unwrap_or(surface)),
            padding: self.padding,
            ..Default::default()
        })
    }
}

/// Text centered in an expanding frame.
pub fn centered_text(value: impl Into<String>) -> FramedText {
    FramedText::new(text(value).align(TextAlign::Center), Alignment::Center)
}

/// Text pinned to the left edge of an expanding frame.
pub fn left_text(value: impl Into<String>) -> FramedText {
    FramedText::new(text(value).align(TextAlign::Left), Alignment::CenterLeft)
}

/// Text pinned to the right edge of an expanding frame.
pub fn right_text(value: impl Into<String>) -> FramedText {
    FramedText::new(text(value).align(TextAlign::Right), Alignment::CenterRight)
}
