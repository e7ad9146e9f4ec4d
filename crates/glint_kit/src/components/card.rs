//! Themed card factories.
//!
//! A card is assembled in fixed stages: body normalization, optional
//! title/action composition into a vertical stack, the padded frame, and the
//! elevation wrapper. The convenience factories ([`simple_card`],
//! [`titled_card`], [`image_card`], [`outlined_card`], [`clickable_card`])
//! are parameter presets over that one assembly.
//!
//! # Example
//!
//! ```rust
//! use glint_kit::prelude::*;
//!
//! let theme = ThemeState::new(ColorScheme::Light);
//!
//! let note = simple_card("Plain body").build(&theme);
//! let dialog = titled_card("Delete?", "This cannot be undone.")
//!     .action(button("Cancel").build(&theme))
//!     .action(button("Delete").variant(ButtonVariant::Error).build(&theme))
//!     .build(&theme);
//! let photo = image_card("https://example.com/cover.png")
//!     .title("Release notes")
//!     .build(&theme);
//! ```

use crate::components::text::title_text;
use crate::content::Content;
use glint_core::{
    Border, Callback, CardProps, Color, ColumnProps, ContainerProps, ImageFit, ImageProps,
    ImageRepeat, ImageSource, MainAxisAlignment, RowProps, UrlTarget, Widget,
};
use glint_theme::{Palette, ThemeState};

/// Spacing between title, body, and action row inside a composed card.
const STACK_SPACING: f32 = 8.0;

fn title_node(title: Content, palette: &Palette) -> Widget {
    match title {
        Content::Text(value) => title_text(value, palette),
        Content::Node(widget) => widget,
    }
}

fn action_row(actions: Vec<Widget>) -> Widget {
    Widget::Row(RowProps {
        children: actions,
        alignment: MainAxisAlignment::End,
        ..Default::default()
    })
}

/// Builder for a themed card.
pub struct Card {
    content: Content,
    title: Option<Content>,
    actions: Vec<Widget>,
    expand: bool,
    width: Option<f32>,
    height: Option<f32>,
    elevation: f32,
    border_radius: f32,
    padding: f32,
    margin: f32,
    bgcolor: Option<Color>,
    outlined: bool,
    image: Option<ImageProps>,
    shadow_color: Option<Color>,
    url: Option<String>,
    url_target: Option<UrlTarget>,
    on_click: Option<Callback>,
    on_long_press: Option<Callback>,
    on_hover: Option<Callback<bool>>,
}

impl Card {
    /// Card title, shown above the body. A plain string becomes a bold
    /// `text_primary` heading node.
    pub fn title(mut self, title: impl Into<Content>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Append one action to the end-aligned action row.
    pub fn action(mut self, action: Widget) -> Self {
        self.actions.push(action);
        self
    }

    /// Replace the action row contents.
    pub fn actions(mut self, actions: Vec<Widget>) -> Self {
        self.actions = actions;
        self
    }

    pub fn expand(mut self, expand: bool) -> Self {
        self.expand = expand;
        self
    }

    pub fn width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn height(mut self, height: f32) -> Self {
        self.height = Some(height);
        self
    }

    /// Shadow depth of the elevation wrapper (default 1).
    pub fn elevation(mut self, elevation: f32) -> Self {
        self.elevation = elevation;
        self
    }

    /// Corner radius of the frame (default 8).
    pub fn border_radius(mut self, radius: f32) -> Self {
        self.border_radius = radius;
        self
    }

    /// Inner padding of the frame (default 16).
    pub fn padding(mut self, padding: f32) -> Self {
        self.padding = padding;
        self
    }

    /// Outer margin carried by the elevation wrapper (default 8).
    pub fn margin(mut self, margin: f32) -> Self {
        self.margin = margin;
        self
    }

    /// Override the frame background. Overrides always win over the palette
    /// `surface` role.
    pub fn bgcolor(mut self, color: Color) -> Self {
        self.bgcolor = Some(color);
        self
    }

    /// Draw a 1-unit `text_secondary` border around the frame.
    pub fn outlined(mut self, outlined: bool) -> Self {
        self.outlined = outlined;
        self
    }

    /// Background image painted behind the card content.
    pub fn background_image(mut self, image: ImageProps) -> Self {
        self.image = Some(image);
        self
    }

    pub fn shadow_color(mut self, color: Color) -> Self {
        self.shadow_color = Some(color);
        self
    }

    /// Navigate to a url when the card is clicked.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn url_target(mut self, target: UrlTarget) -> Self {
        self.url_target = Some(target);
        self
    }

    pub fn on_click<F>(mut self, handler: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_click = Some(Callback::unit(handler));
        self
    }

    pub fn on_long_press<F>(mut self, handler: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_long_press = Some(Callback::unit(handler));
        self
    }

    /// Hover handler; the payload is true on enter, false on exit.
    pub fn on_hover<F>(mut self, handler: F) -> Self
    where
        F: Fn(bool) + Send + Sync + 'static,
    {
        self.on_hover = Some(Callback::new(handler));
        self
    }

    /// Assemble the card against the current palette.
    pub fn build(self, theme: &ThemeState) -> Widget {
        let palette = theme.palette();
        let bgcolor = self.bgcolor.unwrap_or(palette.surface);
        let body = self.content.into_widget();

        // Title or actions promote the body into a vertical stack; otherwise
        // the body is the frame content as-is.
        let content = if self.title.is_some() || !self.actions.is_empty() {
            let mut children = Vec::with_capacity(3);
            if let Some(title) = self.title {
                children.push(title_node(title, &palette));
            }
            children.push(body);
            if !self.actions.is_empty() {
                children.push(action_row(self.actions));
            }
            Widget::Column(ColumnProps {
                children,
                spacing: STACK_SPACING,
                expand: true,
                ..Default::default()
            })
        } else {
            body
        };

        let frame = Widget::Container(ContainerProps {
            content: Some(Box::new(content)),
            padding: Some(self.padding),
            width: self.width,
            height: self.height,
            bgcolor: Some(bgcolor),
            border_radius: Some(self.border_radius),
            border: self
                .outlined
                .then(|| Border::all(1.0, palette.text_secondary)),
            expand: self.expand,
            image: self.image,
            url: self.url,
            url_target: self.url_target,
            on_click: self.on_click,
            on_long_press: self.on_long_press,
            on_hover: self.on_hover,
            ..Default::default()
        });

        Widget::Card(CardProps {
            content: Box::new(frame),
            elevation: self.elevation,
            margin: self.margin,
            shadow_color: self.shadow_color,
            expand: self.expand,
        })
    }
}

/// Create a card builder with the stock defaults: elevation 1, corner
/// radius 8, padding 16, margin 8.
pub fn card(content: impl Into<Content>) -> Card {
    Card {
        content: content.into(),
        title: None,
        actions: Vec::new(),
        expand: false,
        width: None,
        height: None,
        elevation: 1.0,
        border_radius: 8.0,
        padding: 16.0,
        margin: 8.0,
        bgcolor: None,
        outlined: false,
        image: None,
        shadow_color: None,
        url: None,
        url_target: None,
        on_click: None,
        on_long_press: None,
        on_hover: None,
    }
}

/// A content-only card: no title, no actions.
pub fn simple_card(content: impl Into<Content>) -> Card {
    card(content)
}

/// A card with a title above the body.
pub fn titled_card(title: impl Into<Content>, content: impl Into<Content>) -> Card {
    card(content).title(title)
}

/// A bordered, shadowless card.
pub fn outlined_card(content: impl Into<Content>) -> Card {
    card(content).outlined(true).elevation(0.0)
}

/// A card with a click handler.
pub fn clickable_card<F>(content: impl Into<Content>, handler: F) -> Card
where
    F: Fn() + Send + Sync + 'static,
{
    card(content).on_click(handler)
}

/// Builder for an image-led card.
///
/// The image always comes first; title, body, and actions are optional
/// add-ons stacked below it, and the frame padding is forced to zero so the
/// image bleeds to the card edge.
pub struct ImageCard {
    src: ImageSource,
    title: Option<Content>,
    content: Option<Content>,
    actions: Vec<Widget>,
    image_height: f32,
    image_fit: ImageFit,
    width: Option<f32>,
    expand: bool,
    elevation: f32,
    margin: f32,
}

impl ImageCard {
    pub fn title(mut self, title: impl Into<Content>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn content(mut self, content: impl Into<Content>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn action(mut self, action: Widget) -> Self {
        self.actions.push(action);
        self
    }

    pub fn actions(mut self, actions: Vec<Widget>) -> Self {
        self.actions = actions;
        self
    }

    /// Height of the image slot (default 150).
    pub fn image_height(mut self, height: f32) -> Self {
        self.image_height = height;
        self
    }

    /// Image scaling mode (default [`ImageFit::Cover`]).
    pub fn image_fit(mut self, fit: ImageFit) -> Self {
        self.image_fit = fit;
        self
    }

    pub fn width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn expand(mut self, expand: bool) -> Self {
        self.expand = expand;
        self
    }

    pub fn elevation(mut self, elevation: f32) -> Self {
        self.elevation = elevation;
        self
    }

    pub fn margin(mut self, margin: f32) -> Self {
        self.margin = margin;
        self
    }

    /// Assemble [image, title?, body?, actions?] and run the generic card
    /// assembly over it with zero padding.
    pub fn build(self, theme: &ThemeState) -> Widget {
        let palette = theme.palette();
        let image = Widget::Image(ImageProps {
            src: self.src,
            width: self.width,
            height: Some(self.image_height),
            fit: self.image_fit,
            repeat: ImageRepeat::default(),
        });

        let assembled = if self.title.is_some() || self.content.is_some() || !self.actions.is_empty()
        {
            let mut children = vec![image];
            if let Some(title) = self.title {
                children.push(title_node(title, &palette));
            }
            if let Some(content) = self.content {
                children.push(content.into_widget());
            }
            if !self.actions.is_empty() {
                children.push(action_row(self.actions));
            }
            Widget::Column(ColumnProps {
                children,
                spacing: STACK_SPACING,
                ..Default::default()
            })
        } else {
            image
        };

        let mut preset = card(Content::Node(assembled))
            .padding(0.0)
            .elevation(self.elevation)
            .margin(self.margin)
            .expand(self.expand);
        if let Some(width) = self.width {
            preset = preset.width(width);
        }
        preset.build(theme)
    }
}

/// Create an image-card builder from an image source.
pub fn image_card(src: impl Into<ImageSource>) -> ImageCard {
    ImageCard {
        src: src.into(),
        title: None,
        content: None,
        actions: Vec::new(),
        image_height: 150.0,
        image_fit: ImageFit::Cover,
        width: None,
        expand: false,
        elevation: 1.0,
        margin: 8.0,
    }
}
