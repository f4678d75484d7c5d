// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::{App, Message};
use crate::ui::design_tokens::{sizing, spacing, typography};
use iced::widget::{Column, Container, Text};
use iced::{Element, Length};

/// Renders the sidebar with both panels.
pub fn view(app: &App) -> Element<'_, Message> {
    let translator = &app.translator;
    let tr = move |msgid: &'static str| translator.tr(msgid);

    let timeline_content = Column::new()
        .spacing(spacing::XXS)
        .padding(spacing::XS)
        .push(Text::new(tr("Photos and videos are grouped by when they were taken.")).size(typography::BODY))
        .push(Text::new(tr("Select a time range to filter the thumbnails.")).size(typography::BODY_SM));

    let backup_content = Column::new()
        .spacing(spacing::XXS)
        .padding(spacing::XS)
        .push(Text::new(tr("Back up photos and videos while downloading.")).size(typography::BODY))
        .push(
            Text::new(
                translator
                    .trn(
                        "%d backup destination",
                        "%d backup destinations",
                        super::BACKUP_DESTINATIONS,
                    )
                    .replace("%d", &super::BACKUP_DESTINATIONS.to_string()),
            )
            .size(typography::BODY_SM),
        );

    let panels = Column::new()
        .spacing(spacing::XS)
        .push(app.timeline.view(timeline_content, Message::Timeline))
        .push(app.backup.view(backup_content, Message::Backup));

    Container::new(panels)
        .width(Length::Fixed(sizing::SIDEBAR_WIDTH))
        .height(Length::Fill)
        .padding(spacing::XS)
        .into()
}
