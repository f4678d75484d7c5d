// SPDX-License-Identifier: MPL-2.0
//! Container styles for panel headers and bodies.

use iced::widget::container;
use iced::{Background, Color, Theme};

/// Solid header bar in `background` with labels drawn in `text`.
pub fn header(background: Color, text: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(background)),
        text_color: Some(text),
        ..Default::default()
    }
}

/// Panel body using the theme's base background.
pub fn body(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(palette.background.base.color)),
        text_color: Some(palette.background.base.text),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_uses_given_colors() {
        let style = header(Color::BLACK, Color::WHITE)(&Theme::Light);
        assert_eq!(style.background, Some(Background::Color(Color::BLACK)));
        assert_eq!(style.text_color, Some(Color::WHITE));
    }
}
