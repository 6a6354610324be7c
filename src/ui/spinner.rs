//! Loading spinner component.
//!
//! Renders the frame-indexed spinner line shown while a fetch is in
//! flight. The frame advances with the app's animation tick.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use super::theme::{COLOR_SPINNER, COLOR_TEXT};

/// Spinner animation frames
const SPINNER_FRAMES: [char; 4] = ['◐', '◓', '◑', '◒'];

/// Build the spinner line for the current animation tick.
pub fn spinner_line(tick: u64, message: &str) -> Line<'static> {
    let frame = SPINNER_FRAMES[(tick as usize) % SPINNER_FRAMES.len()];
    Line::from(vec![
        Span::styled(
            frame.to_string(),
            Style::default()
                .fg(COLOR_SPINNER)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(message.to_string(), Style::default().fg(COLOR_TEXT)),
    ])
}
