//! System color scheme detection.

use crate::ColorScheme;
use std::panic::catch_unwind;

/// Query the operating system for its preferred color scheme.
///
/// Returns [`ColorScheme::Dark`] when the OS reports dark mode and
/// [`ColorScheme::Light`] otherwise. A probe failure is logged and mapped to
/// light — it is never surfaced to the caller.
pub fn detect_system_color_scheme() -> ColorScheme {
    // The dark-light backends talk to platform services (registry, DBus,
    // user defaults); treat a panic there as an unknown scheme.
    match catch_unwind(dark_light::detect) {
        Ok(dark_light::Mode::Dark) => ColorScheme::Dark,
        Ok(dark_light::Mode::Light) => ColorScheme::Light,
        Err(_) => {
            tracing::warn!("system color scheme probe failed, defaulting to light");
            ColorScheme::Light
        }
    }
}
