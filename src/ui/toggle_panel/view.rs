// SPDX-License-Identifier: MPL-2.0
//! Rendering of a toggle panel.

use super::{Message, TogglePanel};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles::container as container_styles;
use crate::ui::toggle_switch::ToggleSwitch;
use iced::alignment::Vertical;
use iced::widget::{container, Column, Row, Space, Text};
use iced::{Element, Length, Padding};

impl TogglePanel {
    /// Renders the header and, depending on the switch, `content` or the
    /// blank placeholder.
    ///
    /// `content` is ignored until [`TogglePanel::attach_content`] was called.
    /// The panel is given exactly its [`size_hint`](TogglePanel::size_hint)
    /// height; content taller than its declared minimum size is clipped.
    pub fn view<'a, M: 'a>(
        &'a self,
        content: impl Into<Element<'a, M>>,
        on_message: impl Fn(Message) -> M + 'a,
    ) -> Element<'a, M> {
        let switch = ToggleSwitch::new(self.on, self.header_color)
            .tooltip(self.toggle_tooltip())
            .view(move |value| on_message(Message::Toggled(value)));

        let header_row = Row::new()
            .align_y(Vertical::Center)
            .spacing(spacing::XS)
            .push(Text::new(self.label()).size(typography::BODY))
            .push(Space::new().width(Length::Fill))
            .push(switch);

        let header = container(header_row)
            .padding(Padding {
                top: spacing::HEADER_MARGIN_Y,
                right: spacing::HEADER_MARGIN_X,
                bottom: spacing::HEADER_MARGIN_Y,
                left: spacing::HEADER_MARGIN_X,
            })
            .width(Length::Fill)
            .height(Length::Fixed(sizing::HEADER_HEIGHT))
            .align_y(Vertical::Center)
            .style(container_styles::header(self.header_color, self.header_font_color()));

        let mut column = Column::new().width(Length::Fill).push(header);

        if self.content_visible() == Some(true) {
            column = column.push(container(content).width(Length::Fill).style(container_styles::body));
        }

        if self.alternate_visible() == Some(true) {
            column = column.push(Space::new().width(Length::Fill).height(Length::Fill));
        }

        container(column)
            .width(Length::Fill)
            .height(Length::Fixed(self.size_hint().height))
            .into()
    }
}
