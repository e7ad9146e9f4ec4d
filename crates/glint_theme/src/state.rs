//! Theme state: the mutable appearance mode plus its palette pair.
//!
//! `ThemeState` is an explicit object constructed by the embedder and passed
//! into component factories, not a hidden global. Two instances are fully
//! independent, which keeps tests deterministic and lets one process host
//! differently themed surfaces.

use crate::palette::{ColorRole, Palette, PaletteBundle};
use crate::platform::detect_system_color_scheme;
use crate::ColorScheme;
use glint_core::Color;
use std::sync::RwLock;

/// The active color scheme and the palettes it resolves against.
///
/// Reads and writes of the scheme are serialized by a single `RwLock`;
/// builders only ever take a palette snapshot, so a scheme switch never
/// tears a half-built component.
#[derive(Debug)]
pub struct ThemeState {
    bundle: PaletteBundle,
    scheme: RwLock<ColorScheme>,
}

impl ThemeState {
    /// Create a theme state with the built-in palettes and an explicit scheme.
    pub fn new(scheme: ColorScheme) -> Self {
        Self::with_bundle(PaletteBundle::default(), scheme)
    }

    /// Create a theme state over custom palettes.
    pub fn with_bundle(bundle: PaletteBundle, scheme: ColorScheme) -> Self {
        Self {
            bundle,
            scheme: RwLock::new(scheme),
        }
    }

    /// Create a theme state following the operating system's preference.
    ///
    /// Falls back to light when the preference cannot be determined.
    pub fn detect() -> Self {
        Self::new(detect_system_color_scheme())
    }

    /// The palette pair this state resolves against.
    pub fn bundle(&self) -> &PaletteBundle {
        &self.bundle
    }

    /// Get the current color scheme.
    pub fn scheme(&self) -> ColorScheme {
        *self.scheme.read().unwrap()
    }

    /// Set the color scheme. Setting the current scheme again is a no-op.
    pub fn set_scheme(&self, scheme: ColorScheme) {
        let mut current = self.scheme.write().unwrap();
        if *current != scheme {
            tracing::debug!("switching color scheme from {} to {}", *current, scheme);
            *current = scheme;
        }
    }

    /// Flip between light and dark.
    pub fn toggle_scheme(&self) {
        let mut current = self.scheme.write().unwrap();
        *current = current.toggle();
    }

    /// Snapshot the palette for the current scheme.
    pub fn palette(&self) -> Palette {
        *self.bundle.for_scheme(self.scheme())
    }

    /// Resolve a single color role against the current palette.
    pub fn color(&self, role: ColorRole) -> Color {
        self.palette().get(role)
    }
}

impl Default for ThemeState {
    fn default() -> Self {
        Self::new(ColorScheme::Light)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_scheme_is_idempotent() {
        let theme = ThemeState::new(ColorScheme::Light);
        theme.set_scheme(ColorScheme::Light);
        theme.set_scheme(ColorScheme::Light);
        assert_eq!(theme.scheme(), ColorScheme::Light);
        assert_eq!(theme.palette(), Palette::light());
    }

    #[test]
    fn test_set_scheme_swaps_palette() {
        let theme = ThemeState::new(ColorScheme::Light);
        assert_eq!(theme.palette(), Palette::light());

        theme.set_scheme(ColorScheme::Dark);
        assert_eq!(theme.scheme(), ColorScheme::Dark);
        assert_eq!(theme.palette(), Palette::dark());
    }

    #[test]
    fn test_toggle_scheme_round_trips() {
        let theme = ThemeState::new(ColorScheme::Light);
        theme.toggle_scheme();
        assert_eq!(theme.scheme(), ColorScheme::Dark);
        theme.toggle_scheme();
        assert_eq!(theme.scheme(), ColorScheme::Light);
    }

    #[test]
    fn test_instances_are_isolated() {
        let light = ThemeState::new(ColorScheme::Light);
        let dark = ThemeState::new(ColorScheme::Dark);

        assert_eq!(light.color(ColorRole::TextPrimary), Palette::light().text_primary);
        assert_eq!(dark.color(ColorRole::TextPrimary), Palette::dark().text_primary);

        light.set_scheme(ColorScheme::Dark);
        assert_eq!(dark.scheme(), ColorScheme::Dark);
        assert_eq!(light.scheme(), ColorScheme::Dark);

        light.set_scheme(ColorScheme::Light);
        assert_eq!(dark.scheme(), ColorScheme::Dark, "instances must not share state");
    }

    #[test]
    fn test_custom_bundle_resolution() {
        let mut dark = Palette::dark();
        dark.surface = glint_core::Color::from_hex(0x101010);
        let theme = ThemeState::with_bundle(
            PaletteBundle::new(Palette::light(), dark),
            ColorScheme::Dark,
        );
        assert_eq!(
            theme.color(ColorRole::Surface),
            glint_core::Color::from_hex(0x101010)
        );
    }

    #[test]
    fn test_theme_state_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ThemeState>();
    }
}
