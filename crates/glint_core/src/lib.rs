//! Glint Core
//!
//! Shared primitives for the glint component kit:
//!
//! - [`Color`] and hex literal parsing
//! - Style enums mirroring the rendering toolkit's visual vocabulary
//! - [`Callback`], the opaque event-handler slot
//! - The [`Widget`] descriptor tree that themed factories produce
//!
//! This crate is pure data. Instantiating, laying out, and painting widgets
//! is the rendering toolkit's job; glint only describes them.

mod color;
mod event;
mod style;
mod widget;

pub use color::{Color, ColorParseError};
pub use event::Callback;
pub use style::{
    Alignment, Border, CrossAxisAlignment, FontWeight, ImageFit, ImageRepeat, MainAxisAlignment,
    ScrollMode, TextAlign, TextDecoration, UrlTarget,
};
pub use widget::{
    ButtonProps, CardProps, CheckboxProps, ColumnProps, ContainerProps, DropdownProps,
    IconButtonProps, ImageProps, ImageSource, RowProps, TextFieldProps, TextProps, Widget,
};
