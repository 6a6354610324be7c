//! UI rendering for Foody.
//!
//! Two screens: the splash landing view and the home view. Rendering
//! never mutates state; the event loop decides when to redraw.

mod home;
mod spinner;
mod splash;
mod theme;

pub use spinner::spinner_line;
pub use theme::{COLOR_BORDER, COLOR_BRAND, COLOR_DIM, COLOR_HEADER, COLOR_SPINNER, COLOR_TEXT};

use ratatui::Frame;

use crate::app::{App, Screen};

/// Render the active screen.
pub fn render(frame: &mut Frame, app: &App) {
    match app.screen {
        Screen::Splash => splash::render(frame, app),
        Screen::Home => home::render(frame, app),
    }
}
