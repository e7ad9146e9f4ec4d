//! Semantic color roles and the built-in light/dark palettes.
//!
//! Components never reference raw color constants — they resolve a
//! [`ColorRole`] against the palette for the active scheme. The two built-in
//! palettes are derived from the Material color catalog in [`material`].

use crate::ColorScheme;
use glint_core::Color;

/// Material color catalog backing the built-in palettes.
pub mod material {
    use glint_core::Color;

    // Brand colors
    pub const PRIMARY: Color = Color::rgb(33.0 / 255.0, 150.0 / 255.0, 243.0 / 255.0);
    pub const SECONDARY: Color = Color::rgb(255.0 / 255.0, 152.0 / 255.0, 0.0 / 255.0);
    pub const ACCENT: Color = Color::rgb(255.0 / 255.0, 87.0 / 255.0, 34.0 / 255.0);

    // Status colors
    pub const SUCCESS: Color = Color::rgb(76.0 / 255.0, 175.0 / 255.0, 80.0 / 255.0);
    pub const WARNING: Color = Color::rgb(255.0 / 255.0, 235.0 / 255.0, 59.0 / 255.0);
    pub const ERROR: Color = Color::rgb(244.0 / 255.0, 67.0 / 255.0, 54.0 / 255.0);
    pub const INFO: Color = PRIMARY;

    // Neutral ramp
    pub const WHITE: Color = Color::WHITE;
    pub const BLACK: Color = Color::BLACK;
    pub const GRAY_50: Color = Color::rgb(250.0 / 255.0, 250.0 / 255.0, 250.0 / 255.0);
    pub const GRAY_100: Color = Color::rgb(245.0 / 255.0, 245.0 / 255.0, 245.0 / 255.0);
    pub const GRAY_200: Color = Color::rgb(238.0 / 255.0, 238.0 / 255.0, 238.0 / 255.0);
    pub const GRAY_300: Color = Color::rgb(224.0 / 255.0, 224.0 / 255.0, 224.0 / 255.0);
    pub const GRAY_400: Color = Color::rgb(189.0 / 255.0, 189.0 / 255.0, 189.0 / 255.0);
    pub const GRAY_500: Color = Color::rgb(158.0 / 255.0, 158.0 / 255.0, 158.0 / 255.0);
    pub const GRAY_600: Color = Color::rgb(117.0 / 255.0, 117.0 / 255.0, 117.0 / 255.0);
    pub const GRAY_700: Color = Color::rgb(97.0 / 255.0, 97.0 / 255.0, 97.0 / 255.0);
    pub const GRAY_800: Color = Color::rgb(66.0 / 255.0, 66.0 / 255.0, 66.0 / 255.0);
    pub const GRAY_900: Color = Color::rgb(33.0 / 255.0, 33.0 / 255.0, 33.0 / 255.0);
}

/// Semantic color role keys for dynamic access.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ColorRole {
    Background,
    Surface,
    Primary,
    OnPrimary,
    Secondary,
    OnSecondary,
    TextPrimary,
    TextSecondary,
}

impl ColorRole {
    /// Every role, in declaration order.
    pub fn all() -> &'static [ColorRole] {
        const ROLES: [ColorRole; 8] = [
            ColorRole::Background,
            ColorRole::Surface,
            ColorRole::Primary,
            ColorRole::OnPrimary,
            ColorRole::Secondary,
            ColorRole::OnSecondary,
            ColorRole::TextPrimary,
            ColorRole::TextSecondary,
        ];
        &ROLES
    }
}

/// Complete set of semantic colors for one scheme.
///
/// Every role is present in every palette; there is no inheritance or
/// interpolation between palettes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub background: Color,
    pub surface: Color,
    pub primary: Color,
    pub on_primary: Color,
    pub secondary: Color,
    pub on_secondary: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
}

impl Palette {
    /// Get a color by role key.
    pub fn get(&self, role: ColorRole) -> Color {
        match role {
            ColorRole::Background => self.background,
            ColorRole::Surface => self.surface,
            ColorRole::Primary => self.primary,
            ColorRole::OnPrimary => self.on_primary,
            ColorRole::Secondary => self.secondary,
            ColorRole::OnSecondary => self.on_secondary,
            ColorRole::TextPrimary => self.text_primary,
            ColorRole::TextSecondary => self.text_secondary,
        }
    }

    /// The built-in light palette.
    pub const fn light() -> Self {
        Self {
            background: material::WHITE,
            surface: material::WHITE,
            primary: material::PRIMARY,
            on_primary: material::WHITE,
            secondary: material::SECONDARY,
            on_secondary: material::WHITE,
            text_primary: material::GRAY_900,
            text_secondary: material::GRAY_600,
        }
    }

    /// The built-in dark palette.
    pub const fn dark() -> Self {
        Self {
            background: material::GRAY_900,
            surface: material::GRAY_800,
            primary: material::PRIMARY,
            on_primary: material::WHITE,
            secondary: material::SECONDARY,
            on_secondary: material::WHITE,
            text_primary: material::WHITE,
            text_secondary: material::GRAY_300,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::light()
    }
}

/// A light/dark palette pair.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PaletteBundle {
    pub light: Palette,
    pub dark: Palette,
}

impl PaletteBundle {
    pub const fn new(light: Palette, dark: Palette) -> Self {
        Self { light, dark }
    }

    /// Select the palette for a scheme.
    pub fn for_scheme(&self, scheme: ColorScheme) -> &Palette {
        match scheme {
            ColorScheme::Light => &self.light,
            ColorScheme::Dark => &self.dark,
        }
    }
}

impl Default for PaletteBundle {
    fn default() -> Self {
        Self::new(Palette::light(), Palette::dark())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_covers_every_role() {
        let palette = Palette::light();
        for role in ColorRole::all() {
            // No role panics or falls through to another field.
            let _ = palette.get(*role);
        }
        assert_eq!(palette.get(ColorRole::Primary), material::PRIMARY);
        assert_eq!(palette.get(ColorRole::TextSecondary), material::GRAY_600);
    }

    #[test]
    fn test_bundle_selects_by_scheme() {
        let bundle = PaletteBundle::default();
        assert_eq!(*bundle.for_scheme(ColorScheme::Light), Palette::light());
        assert_eq!(*bundle.for_scheme(ColorScheme::Dark), Palette::dark());
    }

    #[test]
    fn test_brand_roles_are_scheme_invariant() {
        assert_eq!(Palette::light().primary, Palette::dark().primary);
        assert_eq!(Palette::light().on_primary, Palette::dark().on_primary);
        assert_eq!(Palette::light().secondary, Palette::dark().secondary);
        assert_eq!(Palette::light().on_secondary, Palette::dark().on_secondary);
    }
}
