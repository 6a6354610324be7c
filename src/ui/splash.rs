//! Splash screen rendering.
//!
//! Block-glyph logo with a tick-driven entrance: the logo scales in
//! from its center over the first ticks, then the tagline brightens,
//! then the key hint starts blinking.

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::App;

use super::theme::{COLOR_BRAND, COLOR_DIM, COLOR_HEADER};

/// FOODY logo top line (19 chars wide)
const LOGO_TOP: &str = "█▀▀ █▀█ █▀█ █▀▄ █ █";

/// FOODY logo bottom line (19 chars wide)
const LOGO_BOT: &str = "█▀  █▄█ █▄█ █▄▀ ▀█▀";

/// Logo width in characters
const LOGO_WIDTH: u16 = 19;

const TAGLINE: &str = "Foody is always right!";

const HINT: &str = "press any key to start cooking · q quits";

/// Ticks for the logo to finish scaling in.
const LOGO_REVEAL_TICKS: u64 = 8;

/// Tick at which the tagline is fully bright.
const TAGLINE_BRIGHT_TICK: u64 = 16;

/// Blink period of the key hint, in ticks.
const HINT_BLINK_TICKS: u64 = 10;

/// Render the splash screen centered in `area`.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    if area.height < 6 || area.width < LOGO_WIDTH + 2 {
        return;
    }

    let tick = app.tick_count;
    let center_y = area.y + area.height / 2;

    // Logo scales in: columns are revealed outward from the center.
    let revealed = reveal_columns(tick);
    let logo_style = Style::default()
        .fg(COLOR_BRAND)
        .add_modifier(Modifier::BOLD);
    draw_centered(
        frame,
        area,
        center_y.saturating_sub(2),
        middle_columns(LOGO_TOP, revealed),
        logo_style,
    );
    draw_centered(
        frame,
        area,
        center_y.saturating_sub(1),
        middle_columns(LOGO_BOT, revealed),
        logo_style,
    );

    // Tagline fades in after the logo has landed.
    if let Some(color) = tagline_color(tick) {
        draw_centered(
            frame,
            area,
            center_y + 1,
            TAGLINE.to_string(),
            Style::default().fg(color),
        );
    }

    // Blinking key hint once the entrance is over.
    if tick >= TAGLINE_BRIGHT_TICK && (tick / HINT_BLINK_TICKS) % 2 == 0 {
        draw_centered(
            frame,
            area,
            center_y + 3,
            HINT.to_string(),
            Style::default().fg(COLOR_DIM),
        );
    }
}

/// How many logo columns are visible at `tick`.
fn reveal_columns(tick: u64) -> usize {
    let width = LOGO_WIDTH as u64;
    (width * tick.min(LOGO_REVEAL_TICKS) / LOGO_REVEAL_TICKS) as usize
}

/// Take the middle `count` columns of a single-width glyph line.
fn middle_columns(line: &str, count: usize) -> String {
    let total = line.chars().count();
    let count = count.min(total);
    let skip = (total - count) / 2;
    line.chars().skip(skip).take(count).collect()
}

/// Tagline fade: absent, then dim, then body gray, then white.
fn tagline_color(tick: u64) -> Option<Color> {
    if tick < LOGO_REVEAL_TICKS {
        None
    } else if tick < (LOGO_REVEAL_TICKS + TAGLINE_BRIGHT_TICK) / 2 {
        Some(COLOR_DIM)
    } else if tick < TAGLINE_BRIGHT_TICK {
        Some(Color::Gray)
    } else {
        Some(COLOR_HEADER)
    }
}

fn draw_centered(frame: &mut Frame, area: Rect, y: u16, text: String, style: Style) {
    if y >= area.y + area.height {
        return;
    }
    let row = Rect::new(area.x, y, area.width, 1);
    let line = Line::from(Span::styled(text, style));
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), row);
}
