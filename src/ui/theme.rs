//! Color theme constants for the Foody UI
//!
//! Warm orange brand palette over a minimal dark base.

use ratatui::style::Color;

/// Brand accent - orange, used for the splash, headline and cursor
pub const COLOR_BRAND: Color = Color::Rgb(249, 115, 22);

/// Spinner color - tomato
pub const COLOR_SPINNER: Color = Color::Rgb(255, 99, 71);

/// Primary border color - dark gray for minimal aesthetic
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Headline and emphasized text - white
pub const COLOR_HEADER: Color = Color::White;

/// Body text - gray
pub const COLOR_TEXT: Color = Color::Gray;

/// Dim text for hints, placeholders and de-emphasized items
pub const COLOR_DIM: Color = Color::DarkGray;
