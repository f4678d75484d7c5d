// SPDX-License-Identifier: MPL-2.0
//! On/off switch embedded in a panel header.
//!
//! The switch holds no state of its own: it draws whatever value its owner
//! passes in and reports the value the user asked for. The owner decides
//! whether to adopt it.

use crate::ui::design_tokens::sizing;
use crate::ui::styles::{container as container_styles, tooltip as tooltip_styles};
use iced::widget::{container, toggler};
use iced::{Color, Element};

/// Render-time description of a header switch.
#[derive(Debug, Clone, Copy)]
pub struct ToggleSwitch<'a> {
    pub is_on: bool,
    /// Drawn behind the switch so it blends into the header.
    pub background: Color,
    pub tooltip: Option<&'a str>,
}

impl<'a> ToggleSwitch<'a> {
    pub fn new(is_on: bool, background: Color) -> Self {
        Self {
            is_on,
            background,
            tooltip: None,
        }
    }

    pub fn tooltip(mut self, tooltip: Option<&'a str>) -> Self {
        self.tooltip = tooltip.filter(|tip| !tip.is_empty());
        self
    }

    /// Builds the switch, mapping user toggles through `on_toggle`.
    pub fn view<Message: 'a>(self, on_toggle: impl Fn(bool) -> Message + 'a) -> Element<'a, Message> {
        let switch = toggler(self.is_on)
            .on_toggle(on_toggle)
            .size(sizing::TOGGLE_SIZE);

        let switch = container(switch).style(container_styles::header(self.background, Color::WHITE));

        match self.tooltip {
            Some(tip) => tooltip_styles::styled(switch, tip).into(),
            None => switch.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_tooltip_is_dropped() {
        let switch = ToggleSwitch::new(true, Color::BLACK).tooltip(Some(""));
        assert!(switch.tooltip.is_none());
    }

    #[test]
    fn tooltip_is_kept() {
        let switch = ToggleSwitch::new(false, Color::BLACK).tooltip(Some("Turn on"));
        assert_eq!(switch.tooltip, Some("Turn on"));
    }
}
