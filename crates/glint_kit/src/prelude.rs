//! One-stop imports for building themed pages.

pub use crate::components::button::{
    button, icon_button, primary_button, secondary_button, Button, ButtonVariant, IconButton,
};
pub use crate::components::card::{
    card, clickable_card, image_card, outlined_card, simple_card, titled_card, Card, ImageCard,
};
pub use crate::components::input::{
    checkbox, dropdown, text_field, Checkbox, Dropdown, TextField,
};
pub use crate::components::layout::{
    responsive_layout, scrollable_page, ResponsiveLayout, ScrollablePage,
};
pub use crate::components::text::{
    body, caption, centered_text, heading, left_text, link, right_text, text, FramedText,
    HeadingLevel, Text,
};
pub use crate::content::Content;

pub use glint_core::{
    Alignment, Border, Callback, Color, CrossAxisAlignment, FontWeight, ImageFit, ImageRepeat,
    ImageSource, MainAxisAlignment, ScrollMode, TextAlign, TextDecoration, UrlTarget, Widget,
};
pub use glint_theme::{ColorRole, ColorScheme, Palette, PaletteBundle, ThemeState};
