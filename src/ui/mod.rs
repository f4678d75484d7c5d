// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Components follow the Elm-style "state down, messages up" pattern: state
//! structs own their data, `update` consumes messages and returns events for
//! the parent, and `view` borrows the state to build iced elements.
//!
//! - [`toggle_panel`] - Collapsible panel with a header switch
//! - [`toggle_switch`] - Stateless header switch
//! - [`styles`] - Centralized styling (headers, tooltips)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark detection and header colors

pub mod design_tokens;
pub mod styles;
pub mod theming;
pub mod toggle_panel;
pub mod toggle_switch;
