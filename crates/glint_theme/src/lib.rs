//! Glint Theme System
//!
//! Light/dark theming for the glint component kit:
//!
//! - **Color roles**: semantic names ([`ColorRole`]) decoupled from concrete
//!   values so they can vary by scheme
//! - **Palettes**: one [`Palette`] literal per scheme, paired in a
//!   [`PaletteBundle`]
//! - **Scheme detection**: automatic detection of the system's dark/light
//!   preference, falling back to light
//!
//! # Quick Start
//!
//! ```rust
//! use glint_theme::{ColorRole, ColorScheme, ThemeState};
//!
//! // Follow the OS preference at startup (or pin one with ThemeState::new).
//! let theme = ThemeState::detect();
//!
//! let primary = theme.color(ColorRole::Primary);
//! theme.set_scheme(ColorScheme::Dark);
//! assert_eq!(theme.color(ColorRole::Primary), primary);
//! ```
//!
//! # Architecture
//!
//! [`ThemeState`] is an explicit, injectable object: component factories take
//! it by reference and resolve colors at build time, so switching the scheme
//! between two builds restyles the second one without touching the first.

mod palette;
mod platform;
mod scheme;
mod state;

pub use palette::{material, ColorRole, Palette, PaletteBundle};
pub use platform::detect_system_color_scheme;
pub use scheme::ColorScheme;
pub use state::ThemeState;
