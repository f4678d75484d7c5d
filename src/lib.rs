// SPDX-License-Identifier: MPL-2.0
//! Startup localization and collapsible toggle panels for Rapid Photo
//! Downloader, built with the Iced GUI framework.
//!
//! - [`i18n`] finds and loads gettext catalogs once at startup and hands out
//!   an immutable [`i18n::Translator`].
//! - [`ui::toggle_panel`] implements the header-with-switch panel whose
//!   content appears or disappears with the switch.

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod logging;
pub mod ui;
