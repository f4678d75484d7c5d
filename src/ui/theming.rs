// SPDX-License-Identifier: MPL-2.0
//! Light/dark mode detection and the header colors that depend on it.

use crate::ui::design_tokens::palette;
use iced::{Color, Theme};

/// Whether the desktop currently prefers a dark palette.
///
/// Detection failures count as light mode.
#[must_use]
pub fn is_dark_mode() -> bool {
    matches!(dark_light::detect(), Ok(dark_light::Mode::Dark))
}

/// Header background for the given mode.
#[must_use]
pub fn header_color(dark: bool) -> Color {
    if dark {
        palette::HEADER_BACKGROUND_DARK
    } else {
        palette::HEADER_BACKGROUND
    }
}

/// Iced theme matching the desktop's current mode.
#[must_use]
pub fn system_theme() -> Theme {
    if is_dark_mode() {
        Theme::Dark
    } else {
        Theme::Light
    }
}
