// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::toggle_panel;

/// Top-level messages consumed by `App::update`. Each variant forwards a
/// panel message to the panel it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Timeline(toggle_panel::Message),
    Backup(toggle_panel::Message),
}

/// Runtime flags passed from the command line to the application.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional language override for this run (e.g. `fr`, `pt_BR`).
    pub lang: Option<String>,
}
