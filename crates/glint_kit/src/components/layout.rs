//! Page-level layout helpers: scrollable pages and responsive frames.
//!
//! These are pass-through configuration over the toolkit's scroll and frame
//! primitives; no colors are resolved here, so `build` takes no theme.

use glint_core::{
    Alignment, ColumnProps, ContainerProps, CrossAxisAlignment, MainAxisAlignment, ScrollMode,
    Widget,
};

/// Builder for a vertically scrolling page of content.
pub struct ScrollablePage {
    children: Vec<Widget>,
    scroll: ScrollMode,
    alignment: MainAxisAlignment,
    horizontal_alignment: CrossAxisAlignment,
    spacing: f32,
    padding: f32,
    auto_scroll: bool,
}

impl ScrollablePage {
    /// Append one child to the page.
    pub fn child(mut self, child: Widget) -> Self {
        self.children.push(child);
        self
    }

    /// Scroll-trigger mode (default [`ScrollMode::Auto`]).
    pub fn scroll(mut self, mode: ScrollMode) -> Self {
        self.scroll = mode;
        self
    }

    pub fn alignment(mut self, alignment: MainAxisAlignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn horizontal_alignment(mut self, alignment: CrossAxisAlignment) -> Self {
        self.horizontal_alignment = alignment;
        self
    }

    /// Spacing between children (default 10).
    pub fn spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    /// Outer padding (default 20). Zero returns the scroll column without a
    /// wrapping frame — callers must not assume a uniform wrapper shape.
    pub fn padding(mut self, padding: f32) -> Self {
        self.padding = padding;
        self
    }

    /// Keep the viewport pinned to the end as children are appended.
    pub fn auto_scroll(mut self, auto_scroll: bool) -> Self {
        self.auto_scroll = auto_scroll;
        self
    }

    pub fn build(self) -> Widget {
        let column = Widget::Column(ColumnProps {
            children: self.children,
            spacing: self.spacing,
            alignment: self.alignment,
            horizontal_alignment: self.horizontal_alignment,
            scroll: Some(self.scroll),
            auto_scroll: self.auto_scroll,
            expand: false,
        });

        if self.padding > 0.0 {
            Widget::Container(ContainerProps {
                content: Some(Box::new(column)),
                padding: Some(self.padding),
                ..Default::default()
            })
        } else {
            column
        }
    }
}

/// Create a scrollable page over an ordered sequence of children.
pub fn scrollable_page(children: Vec<Widget>) -> ScrollablePage {
    ScrollablePage {
        children,
        scroll: ScrollMode::Auto,
        alignment: MainAxisAlignment::Start,
        horizontal_alignment: CrossAxisAlignment::Start,
        spacing: 10.0,
        padding: 20.0,
        auto_scroll: false,
    }
}

/// Builder for a frame that sizes itself to the host surface.
///
/// Breakpoint behavior belongs to the toolkit's grid system; this frame only
/// carries explicit dimensions, expansion, and alignment.
pub struct ResponsiveLayout {
    content: Widget,
    width: Option<f32>,
    height: Option<f32>,
    expand: bool,
    alignment: Alignment,
}

impl ResponsiveLayout {
    pub fn width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn height(mut self, height: f32) -> Self {
        self.height = Some(height);
        self
    }

    /// Expand to fill the parent (default on).
    pub fn expand(mut self, expand: bool) -> Self {
        self.expand = expand;
        self
    }

    /// Content alignment within the frame (default top-left).
    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn build(self) -> Widget {
        Widget::Container(ContainerProps {
            content: Some(Box::new(self.content)),
            width: self.width,
            height: self.height,
            expand: self.expand,
            alignment: Some(self.alignment),
            ..Default::default()
        })
    }
}

/// Create a responsive frame around a single content node.
pub fn responsive_layout(content: Widget) -> ResponsiveLayout {
    ResponsiveLayout {
        content,
        width: None,
        height: None,
        expand: true,
        alignment: Alignment::TopLeft,
    }
}
