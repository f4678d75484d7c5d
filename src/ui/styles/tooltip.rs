// SPDX-License-Identifier: MPL-2.0
//! Tooltip style for header controls.

use crate::ui::design_tokens::{radius, spacing, typography};
use iced::widget::{container, tooltip, Container, Text};
use iced::{Background, Border, Color, Element, Theme};

/// Tooltip container that contrasts with the current theme background.
pub fn tooltip_container(theme: &Theme) -> container::Style {
    let bg = theme.extended_palette().background.base.color;
    let is_dark = (bg.r + bg.g + bg.b) / 3.0 < 0.5;

    let (bg_color, text_color) = if is_dark {
        (Color::from_rgba(0.95, 0.95, 0.95, 0.98), Color::from_rgb(0.1, 0.1, 0.1))
    } else {
        (Color::from_rgba(0.15, 0.15, 0.15, 0.98), Color::from_rgb(0.95, 0.95, 0.95))
    };

    container::Style {
        background: Some(Background::Color(bg_color)),
        border: Border {
            radius: radius::SM.into(),
            width: 1.0,
            color: Color::from_rgba(0.5, 0.5, 0.5, 0.3),
        },
        text_color: Some(text_color),
        ..Default::default()
    }
}

/// Wraps `content` in a styled tooltip showing `tip` below it.
pub fn styled<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    tip: impl Into<String>,
) -> tooltip::Tooltip<'a, Message, Theme, iced::Renderer> {
    let tip_container = Container::new(Text::new(tip.into()).size(typography::BODY_SM))
        .padding(spacing::XS)
        .style(tooltip_container);

    tooltip(content, tip_container, tooltip::Position::Bottom).gap(spacing::XXS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tooltip_contrasts_with_theme() {
        let light = tooltip_container(&Theme::Light);
        let dark = tooltip_container(&Theme::Dark);

        assert_ne!(light.text_color, dark.text_color);
        assert!(light.background.is_some());
        assert!(dark.background.is_some());
    }
}
