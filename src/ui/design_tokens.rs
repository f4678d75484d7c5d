// SPDX-License-Identifier: MPL-2.0
//! Design tokens shared by the panel widgets.
//!
//! - **Palette**: base and header colors
//! - **Spacing**: spacing scale (8px grid) and header margins
//! - **Sizing**: component sizes
//! - **Typography**: font size scale
//! - **Radius**: border radii

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    /// Panel header background in light mode (#5D6D7E).
    pub const HEADER_BACKGROUND: Color = Color::from_rgb(
        0x5D as f32 / 255.0,
        0x6D as f32 / 255.0,
        0x7E as f32 / 255.0,
    );

    /// Panel header background in dark mode (#393939).
    pub const HEADER_BACKGROUND_DARK: Color = Color::from_rgb(
        0x39 as f32 / 255.0,
        0x39 as f32 / 255.0,
        0x39 as f32 / 255.0,
    );

    /// Default header label color.
    pub const HEADER_FONT: Color = Color::WHITE;
}

// ============================================================================
// Spacing Scale (8px grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit

    /// Horizontal margin inside a toggle panel header.
    pub const HEADER_MARGIN_X: f32 = 5.0;

    /// Vertical margin inside a toggle panel header.
    pub const HEADER_MARGIN_Y: f32 = 0.0;
}

// ============================================================================
// Sizing
// ============================================================================

pub mod sizing {
    /// Height of a toggle panel header.
    pub const HEADER_HEIGHT: f32 = 32.0;

    /// Toggle switch track height.
    pub const TOGGLE_SIZE: f32 = 20.0;

    /// Toggle switch track width (iced draws the track twice as wide as tall).
    pub const TOGGLE_WIDTH: f32 = TOGGLE_SIZE * 2.0;

    pub const SIDEBAR_WIDTH: f32 = 290.0;
}

// ============================================================================
// Typography
// ============================================================================

pub mod typography {
    pub const BODY: f32 = 14.0;
    pub const BODY_SM: f32 = 13.0;
}

// ============================================================================
// Radius
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
}

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(sizing::HEADER_HEIGHT >= sizing::TOGGLE_SIZE + 2.0 * spacing::HEADER_MARGIN_Y);
    assert!(spacing::XS == spacing::XXS * 2.0);
};
