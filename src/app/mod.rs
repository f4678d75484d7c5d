// SPDX-License-Identifier: MPL-2.0
//! Application root state.
//!
//! The `App` owns the translator built at startup and the sidebar panels.
//! Panels report their state through [`toggle_panel::Event`]s; the app
//! mirrors the backup panel's state from those events alone, including the
//! one emitted when the panel is constructed.

mod message;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::i18n::Translator;
use crate::ui::design_tokens::sizing;
use crate::ui::theming;
use crate::ui::toggle_panel::{self, PanelConfig, TogglePanel};
use iced::{window, Element, Size, Task, Theme};

pub const WINDOW_DEFAULT_HEIGHT: f32 = 650.0;
pub const WINDOW_DEFAULT_WIDTH: f32 = 800.0;

/// Minimum size of the timeline panel's content.
const TIMELINE_CONTENT_SIZE: Size = Size::new(sizing::SIDEBAR_WIDTH, 160.0);

/// Minimum size of the backup panel's content.
const BACKUP_CONTENT_SIZE: Size = Size::new(sizing::SIDEBAR_WIDTH, 120.0);

/// Number of configured backup destinations shown in the backup panel.
const BACKUP_DESTINATIONS: u64 = 2;

/// Identifies which panel an event came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Timeline,
    Backup,
}

/// Root Iced application state.
#[derive(Debug)]
pub struct App {
    translator: Translator,
    timeline: TogglePanel,
    backup: TogglePanel,
    /// Mirrors the backup panel switch, fed only by panel events.
    backup_enabled: bool,
    theme: Theme,
}

impl App {
    /// Loads settings, bootstraps translations and builds the panels.
    pub fn new(flags: Flags) -> Self {
        let mut config = config::load().unwrap_or_else(|err| {
            tracing::warn!(error = %err, "failed to load settings, using defaults");
            Config::default()
        });
        if let Some(lang) = flags.lang {
            config.display.language = lang;
        }

        Self::with_translator(Translator::initialize(&config), theming::system_theme())
    }

    /// Builds the panels with an already initialized translator.
    pub fn with_translator(translator: Translator, theme: Theme) -> Self {
        let header_color = theming::header_color(theme.extended_palette().is_dark);

        let (mut timeline, _) = TogglePanel::new(
            PanelConfig::new(translator.tr("Timeline"), "timelinePanel")
                .display_alternate(true)
                .header_color(header_color)
                .toggle_tooltip(translator.tr("Show or hide the timeline"))
                .on(true),
        );
        timeline.attach_content(TIMELINE_CONTENT_SIZE);

        let (backup, initial) = TogglePanel::new(
            PanelConfig::new(translator.tr("Back Up"), "backupPanel")
                .header_color(header_color)
                .toggle_tooltip(translator.tr("Turn backups on or off"))
                .on(false),
        );

        let mut app = Self {
            translator,
            timeline,
            backup,
            backup_enabled: false,
            theme,
        };
        app.handle_event(Panel::Backup, initial);

        let event = app.backup.attach_content(BACKUP_CONTENT_SIZE);
        app.handle_event(Panel::Backup, event);
        app
    }

    pub fn translator(&self) -> &Translator {
        &self.translator
    }

    pub fn panel(&self, panel: Panel) -> &TogglePanel {
        match panel {
            Panel::Timeline => &self.timeline,
            Panel::Backup => &self.backup,
        }
    }

    pub fn backup_enabled(&self) -> bool {
        self.backup_enabled
    }

    fn title(&self) -> String {
        self.translator.tr("Rapid Photo Downloader").to_string()
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let (panel, event) = match message {
            Message::Timeline(msg) => (Panel::Timeline, self.timeline.update(msg)),
            Message::Backup(msg) => (Panel::Backup, self.backup.update(msg)),
        };
        self.handle_event(panel, event);
        Task::none()
    }

    fn handle_event(&mut self, panel: Panel, event: toggle_panel::Event) {
        let toggle_panel::Event::ValueChanged(on) = event;
        tracing::debug!(?panel, on, "panel switched");
        if panel == Panel::Backup {
            self.backup_enabled = on;
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    /// Smallest window that fits both panels at their preferred size.
    pub fn minimum_window_size(&self) -> Size {
        let timeline = self.timeline.size_hint();
        let backup = self.backup.size_hint();
        Size::new(
            timeline.width.max(backup.width),
            timeline.height + backup.height,
        )
    }
}

/// Builds the window settings for the given initial state.
pub fn window_settings(app: &App) -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(app.minimum_window_size()),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    let app = App::new(flags);
    let settings = window_settings(&app);

    // iced 0.14 requires Fn for boot; the state is handed over exactly once.
    let boot_state = RefCell::new(Some(app));
    let boot = move || {
        boot_state
            .borrow_mut()
            .take()
            .unwrap_or_else(|| App::with_translator(Translator::identity(), theming::system_theme()))
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(settings)
        .run()
}
