//! Home screen rendering.
//!
//! While a fetch is in flight the screen is a centered spinner and
//! nothing else. Otherwise: greeting, decorative search bar, featured
//! meal card (when present), horizontal category strip, two-column meal
//! grid, key-hint footer. Everything here is a pure function of the
//! view-state.

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::app::App;
use crate::models::{Meal, MealSummary};
use crate::state::HomeState;

use super::spinner::spinner_line;
use super::theme::{COLOR_BORDER, COLOR_BRAND, COLOR_DIM, COLOR_HEADER, COLOR_TEXT};

/// Lines each grid row occupies (name + thumbnail URL + spacing).
const GRID_LINES_PER_ROW: u16 = 3;

/// Render the home screen.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    if area.height < 10 || area.width < 24 {
        return;
    }

    if app.home.loading {
        render_loading(frame, area, app.tick_count);
        return;
    }

    let home = &app.home;

    let mut constraints = vec![
        Constraint::Length(3), // greeting + headline
        Constraint::Length(3), // search bar
    ];
    if home.featured.is_some() {
        constraints.push(Constraint::Length(5));
    }
    constraints.push(Constraint::Length(3)); // category strip
    constraints.push(Constraint::Min(2)); // meal grid
    constraints.push(Constraint::Length(1)); // footer

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints(constraints)
        .split(area);

    let mut idx = 0;
    render_greeting(frame, chunks[idx]);
    idx += 1;
    render_search_bar(frame, chunks[idx]);
    idx += 1;
    if let Some(meal) = &home.featured {
        render_featured(frame, chunks[idx], meal);
        idx += 1;
    }
    render_categories(frame, chunks[idx], home);
    idx += 1;
    render_grid(frame, chunks[idx], home);
    idx += 1;
    render_footer(frame, chunks[idx]);
}

/// Centered spinner, shown exclusively while loading.
fn render_loading(frame: &mut Frame, area: Rect, tick: u64) {
    let y = area.y + area.height / 2;
    let row = Rect::new(area.x, y, area.width, 1);
    frame.render_widget(
        Paragraph::new(spinner_line(tick, "Loading...")).alignment(Alignment::Center),
        row,
    );
}

fn render_greeting(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "Hello, chef",
            Style::default().fg(COLOR_TEXT),
        )),
        Line::from(vec![
            Span::styled(
                "Discover new recipes and ",
                Style::default()
                    .fg(COLOR_HEADER)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                "cook!",
                Style::default()
                    .fg(COLOR_BRAND)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

/// Decorative search bar; no search operation is wired to it.
fn render_search_bar(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLOR_BORDER));
    let placeholder = Paragraph::new(Line::from(Span::styled(
        "Search for recipes",
        Style::default().fg(COLOR_DIM).add_modifier(Modifier::ITALIC),
    )))
    .block(block);
    frame.render_widget(placeholder, area);
}

fn render_featured(frame: &mut Frame, area: Rect, meal: &Meal) {
    let width = area.width as usize;
    let mut lines = vec![
        Line::from(Span::styled(
            "Featured Recipe",
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            truncate(&meal.name, width),
            Style::default()
                .fg(COLOR_BRAND)
                .add_modifier(Modifier::BOLD),
        )),
    ];

    let subtitle: Vec<&str> = [meal.category.as_deref(), meal.area.as_deref()]
        .into_iter()
        .flatten()
        .collect();
    if !subtitle.is_empty() {
        lines.push(Line::from(Span::styled(
            truncate(&subtitle.join(" · "), width),
            Style::default().fg(COLOR_TEXT),
        )));
    }
    lines.push(Line::from(Span::styled(
        truncate(&meal.thumbnail_url, width),
        Style::default().fg(COLOR_DIM),
    )));

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_categories(frame: &mut Frame, area: Rect, home: &HomeState) {
    let title = Rect::new(area.x, area.y, area.width, 1);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "Categories",
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ))),
        title,
    );
    if area.height < 2 {
        return;
    }
    let strip = Rect::new(area.x, area.y + 1, area.width, 1);

    if home.categories.is_empty() {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "No categories available",
                Style::default().fg(COLOR_DIM),
            ))),
            strip,
        );
        return;
    }

    let width = strip.width as usize;
    let start = strip_start(home, width);
    let mut spans: Vec<Span> = Vec::new();
    let mut used = 0;
    for (idx, category) in home.categories.iter().enumerate().skip(start) {
        let text = format!(" {} ", category.name);
        let item_width = UnicodeWidthStr::width(text.as_str()) + 2;
        if used + item_width > width && !spans.is_empty() {
            break;
        }
        used += item_width;

        let selected = home.selected_category.as_deref() == Some(category.name.as_str());
        let mut style = Style::default().fg(COLOR_TEXT);
        if selected {
            // De-emphasize the selected category, the toggle target.
            style = Style::default().fg(COLOR_DIM).add_modifier(Modifier::DIM);
        }
        if idx == home.cursor {
            style = style.fg(COLOR_BRAND).add_modifier(Modifier::BOLD);
        }
        spans.push(Span::styled(text, style));
        spans.push(Span::raw("  "));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), strip);
}

/// First category index that keeps the cursor inside the strip width.
fn strip_start(home: &HomeState, width: usize) -> usize {
    let item_width =
        |category: &crate::models::Category| UnicodeWidthStr::width(category.name.as_str()) + 4;

    let mut start = home.cursor.min(home.categories.len() - 1);
    let mut used = item_width(&home.categories[start]);
    while start > 0 {
        let next = item_width(&home.categories[start - 1]);
        if used + next > width {
            break;
        }
        used += next;
        start -= 1;
    }
    start
}

fn render_grid(frame: &mut Frame, area: Rect, home: &HomeState) {
    let title = Rect::new(area.x, area.y, area.width, 1);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "Recipes",
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ))),
        title,
    );
    if area.height < 2 {
        return;
    }
    let grid = Rect::new(area.x, area.y + 1, area.width, area.height - 1);

    if home.meals.is_empty() {
        let hint = if home.selected_category.is_none() {
            "Select a category to browse recipes"
        } else {
            "No recipes in this category"
        };
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                hint,
                Style::default().fg(COLOR_DIM),
            ))),
            Rect::new(grid.x, grid.y, grid.width, 1),
        );
        return;
    }

    let visible = (grid.height / GRID_LINES_PER_ROW) as usize;
    if visible == 0 || grid.width < 8 {
        return;
    }
    let total = home.grid_rows();
    let start = home.grid_scroll.min(total.saturating_sub(1));

    let cell_width = grid.width / 2;
    for (slot, row) in (start..total).take(visible).enumerate() {
        let y = grid.y + slot as u16 * GRID_LINES_PER_ROW;
        let left = Rect::new(grid.x, y, cell_width.saturating_sub(2), 2);
        render_meal_cell(frame, left, &home.meals[row * 2]);
        if let Some(meal) = home.meals.get(row * 2 + 1) {
            let right = Rect::new(
                grid.x + cell_width,
                y,
                grid.width - cell_width,
                2,
            );
            render_meal_cell(frame, right, meal);
        }
    }
}

/// One grid cell: meal name over its thumbnail URL, as returned by the
/// filter endpoint.
fn render_meal_cell(frame: &mut Frame, area: Rect, meal: &MealSummary) {
    let width = area.width as usize;
    let lines = vec![
        Line::from(Span::styled(
            truncate(&meal.name, width),
            Style::default().fg(COLOR_HEADER),
        )),
        Line::from(Span::styled(
            truncate(&meal.thumbnail_url, width),
            Style::default().fg(COLOR_DIM),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_footer(frame: &mut Frame, area: Rect) {
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "←/→ browse · enter select · ↑/↓ scroll · r new featured · q quit",
            Style::default().fg(COLOR_DIM),
        ))),
        area,
    );
}

/// Truncate to `max` display columns, appending "..." when cut.
fn truncate(s: &str, max: usize) -> String {
    if UnicodeWidthStr::width(s) <= max {
        return s.to_string();
    }
    if max <= 3 {
        return s.chars().take(max).collect();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > max - 3 {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push_str("...");
    out
}
