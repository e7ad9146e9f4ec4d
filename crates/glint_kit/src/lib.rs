//! Glint Component Kit
//!
//! Themed widget factories over the `glint_core` descriptor model. Every
//! factory reads the palette from an explicit
//! [`ThemeState`](glint_theme::ThemeState) at build time,
//! merges it with its own defaults, and lets explicit caller overrides win —
//! so the same builder call restyles itself when the scheme changes between
//! builds.
//!
//! # Quick Start
//!
//! ```rust
//! use glint_kit::prelude::*;
//!
//! let theme = ThemeState::detect();
//!
//! let page = scrollable_page(vec![
//!     heading("Settings", HeadingLevel::H1).build(&theme),
//!     titled_card("Appearance", "Follows the system scheme.")
//!         .action(button("Toggle").build(&theme))
//!         .build(&theme),
//!     caption("Changes apply immediately.").build(&theme),
//! ])
//! .build();
//! # let _ = page;
//! ```
//!
//! The returned [`Widget`](glint_core::Widget) tree is plain data; hand it to
//! your rendering toolkit to instantiate.

pub mod components;
mod content;
pub mod prelude;

pub use components::button::{
    button, icon_button, primary_button, secondary_button, Button, ButtonVariant, IconButton,
};
pub use components::card::{
    card, clickable_card, image_card, outlined_card, simple_card, titled_card, Card, ImageCard,
};
pub use components::input::{checkbox, dropdown, text_field, Checkbox, Dropdown, TextField};
pub use components::layout::{
    responsive_layout, scrollable_page, ResponsiveLayout, ScrollablePage,
};
pub use components::text::{
    body, caption, centered_text, heading, left_text, link, right_text, text, FramedText,
    HeadingLevel, Text,
};
pub use content::Content;
