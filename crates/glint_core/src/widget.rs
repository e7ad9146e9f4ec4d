//! The widget descriptor tree.
//!
//! A [`Widget`] is a fully configured description of a toolkit primitive:
//! plain data, ready for an external rendering toolkit to instantiate. Nothing
//! here lays out, paints, or dispatches events — descriptors only carry the
//! parameters the toolkit's constructors accept.
//!
//! Unset `Option` fields mean "use the toolkit's own default".

use crate::event::Callback;
use crate::style::{
    Alignment, Border, CrossAxisAlignment, FontWeight, ImageFit, ImageRepeat, MainAxisAlignment,
    ScrollMode, TextAlign, TextDecoration, UrlTarget,
};
use crate::Color;

/// One descriptor per toolkit primitive.
#[derive(Clone, Debug)]
pub enum Widget {
    Text(TextProps),
    Button(ButtonProps),
    IconButton(IconButtonProps),
    TextField(TextFieldProps),
    Dropdown(DropdownProps),
    Checkbox(CheckboxProps),
    Image(ImageProps),
    Column(ColumnProps),
    Row(RowProps),
    Container(ContainerProps),
    Card(CardProps),
}

/// A run of text.
#[derive(Clone, Debug)]
pub struct TextProps {
    pub value: String,
    pub size: f32,
    pub color: Option<Color>,
    pub align: TextAlign,
    pub weight: FontWeight,
    pub decoration: TextDecoration,
    /// Navigation target when the text acts as a link.
    pub url: Option<String>,
    pub on_click: Option<Callback>,
}

impl Default for TextProps {
    fn default() -> Self {
        Self {
            value: String::new(),
            size: 16.0,
            color: None,
            align: TextAlign::default(),
            weight: FontWeight::default(),
            decoration: TextDecoration::default(),
            url: None,
            on_click: None,
        }
    }
}

/// A filled push button.
#[derive(Clone, Debug, Default)]
pub struct ButtonProps {
    pub label: String,
    pub on_click: Option<Callback>,
    pub width: Option<f32>,
    pub height: Option<f32>,
    /// Label color.
    pub color: Option<Color>,
    pub bgcolor: Option<Color>,
}

/// A borderless button showing only an icon.
#[derive(Clone, Debug, Default)]
pub struct IconButtonProps {
    /// Toolkit icon name.
    pub icon: String,
    pub on_click: Option<Callback>,
    pub tooltip: Option<String>,
    pub icon_color: Option<Color>,
    pub icon_size: Option<f32>,
}

/// A single-line text input.
#[derive(Clone, Debug, Default)]
pub struct TextFieldProps {
    pub label: String,
    pub hint_text: Option<String>,
    pub value: String,
    pub on_change: Option<Callback<String>>,
    pub width: Option<f32>,
    pub color: Option<Color>,
    pub border_color: Option<Color>,
}

/// A single-select dropdown.
#[derive(Clone, Debug, Default)]
pub struct DropdownProps {
    pub label: String,
    pub options: Vec<String>,
    pub on_change: Option<Callback<String>>,
    pub width: Option<f32>,
    pub color: Option<Color>,
    pub border_color: Option<Color>,
}

/// A labeled checkbox.
#[derive(Clone, Debug, Default)]
pub struct CheckboxProps {
    pub label: String,
    pub value: bool,
    pub on_change: Option<Callback<bool>>,
    pub fill_color: Option<Color>,
}

/// Where image bytes come from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ImageSource {
    Url(String),
    Base64(String),
}

impl From<&str> for ImageSource {
    fn from(url: &str) -> Self {
        ImageSource::Url(url.to_string())
    }
}

impl From<String> for ImageSource {
    fn from(url: String) -> Self {
        ImageSource::Url(url)
    }
}

/// An image.
#[derive(Clone, Debug)]
pub struct ImageProps {
    pub src: ImageSource,
    pub width: Option<f32>,
    pub height: Option<f32>,
    pub fit: ImageFit,
    pub repeat: ImageRepeat,
}

impl ImageProps {
    pub fn new(src: impl Into<ImageSource>) -> Self {
        Self {
            src: src.into(),
            width: None,
            height: None,
            fit: ImageFit::default(),
            repeat: ImageRepeat::default(),
        }
    }
}

/// A vertical stack, optionally scrollable.
#[derive(Clone, Debug, Default)]
pub struct ColumnProps {
    pub children: Vec<Widget>,
    pub spacing: f32,
    pub alignment: MainAxisAlignment,
    pub horizontal_alignment: CrossAxisAlignment,
    /// `Some` turns the column into a scroll container.
    pub scroll: Option<ScrollMode>,
    /// Keep the viewport pinned to the end as children are appended.
    pub auto_scroll: bool,
    pub expand: bool,
}

/// A horizontal stack.
#[derive(Clone, Debug, Default)]
pub struct RowProps {
    pub children: Vec<Widget>,
    pub spacing: f32,
    pub alignment: MainAxisAlignment,
}

/// The generic frame: padding, background, border, and event slots.
#[derive(Clone, Debug, Default)]
pub struct ContainerProps {
    pub content: Option<Box<Widget>>,
    pub padding: Option<f32>,
    pub width: Option<f32>,
    pub height: Option<f32>,
    pub bgcolor: Option<Color>,
    pub border_radius: Option<f32>,
    pub border: Option<Border>,
    pub alignment: Option<Alignment>,
    pub expand: bool,
    /// Background image drawn behind the content.
    pub image: Option<ImageProps>,
    pub url: Option<String>,
    pub url_target: Option<UrlTarget>,
    pub on_click: Option<Callback>,
    pub on_long_press: Option<Callback>,
    pub on_hover: Option<Callback<bool>>,
}

/// The elevation wrapper: casts a shadow and carries the outer margin.
#[derive(Clone, Debug)]
pub struct CardProps {
    pub content: Box<Widget>,
    pub elevation: f32,
    pub margin: f32,
    pub shadow_color: Option<Color>,
    pub expand: bool,
}
