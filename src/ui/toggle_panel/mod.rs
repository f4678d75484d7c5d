// SPDX-License-Identifier: MPL-2.0
//! Collapsible panel with an on/off switch in its header.
//!
//! When the switch is on the panel shows its content below the header; when
//! it is off the content is hidden and, if the panel was built with
//! `display_alternate`, a blank placeholder takes its place.
//!
//! Every state change goes through one transition routine, whether it comes
//! from the user flipping the switch, from [`TogglePanel::set_on`], from
//! attaching content or from construction. Each of them reports exactly one
//! [`Event::ValueChanged`], so observers never need a separate initial sync.
//!
//! ```ignore
//! let (mut panel, event) = TogglePanel::new(PanelConfig::new("Backup", "backupPanel").on(false));
//! let event = panel.attach_content(Size::new(240.0, 120.0));
//! assert_eq!(event, Event::ValueChanged(false));
//! ```

pub mod metrics;
mod view;

use crate::ui::design_tokens::{palette, sizing, spacing};
use crate::ui::theming;
use iced::{Color, Size};
use metrics::{LayoutCache, Slot};

/// Messages consumed by a toggle panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// The header switch reported a new value.
    Toggled(bool),
}

impl From<bool> for Message {
    fn from(value: bool) -> Self {
        Message::Toggled(value)
    }
}

impl From<i32> for Message {
    /// Integer payloads follow the usual convention: zero is off.
    fn from(value: i32) -> Self {
        Message::Toggled(value != 0)
    }
}

/// Events propagated to the parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    ValueChanged(bool),
}

/// Construction parameters for a [`TogglePanel`].
#[derive(Debug, Clone, PartialEq)]
pub struct PanelConfig {
    pub label: String,
    pub display_alternate: bool,
    pub object_name: String,
    pub toggle_tooltip: Option<String>,
    /// `None` picks the header color for the current light/dark mode.
    pub header_color: Option<Color>,
    pub header_font_color: Option<Color>,
    pub on: bool,
}

impl PanelConfig {
    pub fn new(label: impl Into<String>, object_name: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            display_alternate: false,
            object_name: object_name.into(),
            toggle_tooltip: None,
            header_color: None,
            header_font_color: None,
            on: true,
        }
    }

    pub fn display_alternate(mut self, display_alternate: bool) -> Self {
        self.display_alternate = display_alternate;
        self
    }

    pub fn toggle_tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.toggle_tooltip = Some(tooltip.into());
        self
    }

    pub fn header_color(mut self, color: Color) -> Self {
        self.header_color = Some(color);
        self
    }

    pub fn header_font_color(mut self, color: Color) -> Self {
        self.header_font_color = Some(color);
        self
    }

    pub fn on(mut self, on: bool) -> Self {
        self.on = on;
        self
    }
}

/// Header bar with a toggle switch over content that is switched on or off.
#[derive(Debug, Clone)]
pub struct TogglePanel {
    label: String,
    object_name: String,
    toggle_tooltip: Option<String>,
    header_color: Color,
    header_font_color: Option<Color>,
    on: bool,
    content: Option<Slot>,
    alternate: Option<Slot>,
    layout: LayoutCache,
}

impl TogglePanel {
    /// Builds the panel and applies its initial state.
    ///
    /// The returned event is the notification for that initial state.
    pub fn new(config: PanelConfig) -> (Self, Event) {
        Self::with_mode_detection(config, theming::is_dark_mode)
    }

    /// Like [`TogglePanel::new`], with `is_dark` consulted only when the
    /// config leaves the header color unset.
    fn with_mode_detection(config: PanelConfig, is_dark: impl FnOnce() -> bool) -> (Self, Event) {
        let header_color = config
            .header_color
            .unwrap_or_else(|| theming::header_color(is_dark()));

        let mut panel = Self {
            label: config.label,
            object_name: config.object_name,
            toggle_tooltip: config.toggle_tooltip.filter(|tip| !tip.is_empty()),
            header_color,
            header_font_color: config.header_font_color,
            on: config.on,
            content: None,
            alternate: config.display_alternate.then(Slot::blank),
            layout: LayoutCache::default(),
        };

        let event = panel.apply(config.on);
        (panel, event)
    }

    /// Attaches the content shown while the panel is on.
    ///
    /// `min_size` is the smallest size the content can be laid out in.
    /// Visibility is re-applied immediately.
    ///
    /// The panel is rendered at its [`size_hint`](Self::size_hint), so
    /// `min_size` must cover the content: anything taller is clipped.
    pub fn attach_content(&mut self, min_size: Size) -> Event {
        self.content = Some(Slot::new(min_size));
        self.apply(self.on)
    }

    /// Processes a message from the header switch.
    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::Toggled(value) => self.apply(value),
        }
    }

    /// Whether the panel is expanded.
    pub fn is_on(&self) -> bool {
        self.on
    }

    /// Expands or collapses the panel exactly as if the user used the switch.
    pub fn set_on(&mut self, on: bool) -> Event {
        self.update(Message::Toggled(on))
    }

    fn apply(&mut self, on: bool) -> Event {
        self.on = on;

        if let Some(content) = self.content.as_mut() {
            content.visible = on;
            if let Some(alternate) = self.alternate.as_mut() {
                alternate.visible = !on;
            }
        }

        self.layout.invalidate();
        tracing::trace!(panel = %self.object_name, on, "toggle panel state applied");
        Event::ValueChanged(on)
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn object_name(&self) -> &str {
        &self.object_name
    }

    pub fn toggle_tooltip(&self) -> Option<&str> {
        self.toggle_tooltip.as_deref()
    }

    pub fn header_color(&self) -> Color {
        self.header_color
    }

    pub fn header_font_color(&self) -> Color {
        self.header_font_color.unwrap_or(palette::HEADER_FONT)
    }

    pub fn has_content(&self) -> bool {
        self.content.is_some()
    }

    /// Whether the attached content is visible. `None` without content.
    pub fn content_visible(&self) -> Option<bool> {
        self.content.map(|slot| slot.visible)
    }

    /// Whether the blank placeholder is visible. `None` without placeholder.
    pub fn alternate_visible(&self) -> Option<bool> {
        self.alternate.map(|slot| slot.visible)
    }

    /// Minimum size of the header bar.
    pub fn header_size(&self) -> Size {
        Size::new(
            2.0 * spacing::HEADER_MARGIN_X + sizing::TOGGLE_WIDTH,
            sizing::HEADER_HEIGHT,
        )
    }

    /// Minimum height of the whole panel.
    ///
    /// Collapsed panels are exactly as tall as their header. Expanded panels
    /// are re-measured on every call.
    pub fn minimum_height(&self) -> f32 {
        if !self.on {
            return self.header_size().height;
        }
        self.layout.invalidate();
        self.measure().height
    }

    /// Minimum size: measured width, height as in [`Self::minimum_height`].
    ///
    /// Expanded panels are measured once, width and height coming from the
    /// same pass.
    pub fn minimum_size(&self) -> Size {
        if !self.on {
            return Size::new(self.measure().width, self.header_size().height);
        }
        self.layout.invalidate();
        self.measure()
    }

    /// Preferred size, which is always the minimum size.
    pub fn size_hint(&self) -> Size {
        self.minimum_size()
    }

    fn measure(&self) -> Size {
        self.layout.get_or_measure(|| {
            metrics::measure_column(
                self.header_size(),
                self.content.iter().chain(self.alternate.iter()),
            )
        })
    }

    #[cfg(test)]
    fn layout_passes(&self) -> u64 {
        self.layout.passes()
    }
}
