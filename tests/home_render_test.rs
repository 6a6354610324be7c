//! Rendering tests on a ratatui TestBackend.
//!
//! These pin the view as a pure function of the state: what the strip,
//! grid, featured card, and spinner show for a given `HomeState`.

use foody::api::MealDbClient;
use foody::app::{App, Screen};
use foody::models::{Category, Meal};
use foody::ui;
use ratatui::backend::TestBackend;
use ratatui::Terminal;

fn category(name: &str) -> Category {
    Category {
        id: format!("id-{name}"),
        name: name.to_string(),
        thumbnail_url: format!("https://example.com/{name}.png"),
    }
}

fn featured(name: &str) -> Meal {
    Meal {
        id: "9000".to_string(),
        name: name.to_string(),
        thumbnail_url: format!("https://example.com/{name}.jpg"),
        category: Some("Chicken".to_string()),
        area: Some("Japanese".to_string()),
    }
}

/// App on the home screen with the mount fetch already applied.
fn home_app(categories: Vec<Category>, meal: Option<Meal>) -> App {
    let mut app = App::new(MealDbClient::with_base_url("http://127.0.0.1:0".to_string()));
    app.screen = Screen::Home;
    app.home.set_categories(categories);
    if let Some(meal) = meal {
        app.home.set_featured(meal);
    }
    app.home.finish_initial_load();
    app
}

fn render_to_string(app: &App, width: u16, height: u16) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| ui::render(f, app)).unwrap();
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

#[test]
fn category_strip_shows_every_category_in_order() {
    let app = home_app(
        vec![category("Beef"), category("Pasta"), category("Vegan")],
        None,
    );
    let screen = render_to_string(&app, 100, 32);

    assert!(screen.contains("Categories"));
    for name in ["Beef", "Pasta", "Vegan"] {
        assert!(screen.contains(name), "missing category {name}");
    }
    // Order preserved left to right.
    let beef = screen.find("Beef").unwrap();
    let pasta = screen.find("Pasta").unwrap();
    let vegan = screen.find("Vegan").unwrap();
    assert!(beef < pasta && pasta < vegan);
}

#[test]
fn loading_shows_the_spinner_and_nothing_else() {
    let mut app = home_app(vec![category("Beef")], Some(featured("Katsu Curry")));
    app.home.loading = true;
    let screen = render_to_string(&app, 100, 32);

    assert!(screen.contains("Loading..."));
    assert!(!screen.contains("Categories"));
    assert!(!screen.contains("Featured Recipe"));
    assert!(!screen.contains("Katsu Curry"));
}

#[test]
fn featured_card_shows_name_subtitle_and_thumbnail() {
    let app = home_app(vec![category("Beef")], Some(featured("Katsu Curry")));
    let screen = render_to_string(&app, 100, 32);

    assert!(screen.contains("Featured Recipe"));
    assert!(screen.contains("Katsu Curry"));
    assert!(screen.contains("Chicken · Japanese"));
    assert!(screen.contains("https://example.com/Katsu Curry.jpg"));
}

#[test]
fn missing_featured_meal_omits_the_card() {
    let app = home_app(vec![category("Beef")], None);
    let screen = render_to_string(&app, 100, 32);

    assert!(!screen.contains("Featured Recipe"));
    // The rest of the screen still renders.
    assert!(screen.contains("Categories"));
    assert!(screen.contains("Beef"));
}

#[test]
fn grid_shows_fetched_meal_names_and_thumbnails() {
    let mut app = home_app(vec![category("Beef")], None);
    // Select the category through the real transition so the fetch
    // generation matches, then apply the "response".
    let action = app.home.toggle_at_cursor().unwrap();
    let generation = match action {
        foody::state::CategoryAction::Fetch { generation, .. } => generation,
        other => panic!("expected a fetch, got {other:?}"),
    };
    app.home.apply_meals(
        generation,
        vec![
            foody::models::MealSummary {
                id: "1".to_string(),
                name: "Beef Wellington".to_string(),
                thumbnail_url: "https://example.com/wellington.jpg".to_string(),
            },
            foody::models::MealSummary {
                id: "2".to_string(),
                name: "Beef Banh Mi".to_string(),
                thumbnail_url: "https://example.com/banhmi.jpg".to_string(),
            },
        ],
    );
    let screen = render_to_string(&app, 110, 36);

    assert!(screen.contains("Recipes"));
    assert!(screen.contains("Beef Wellington"));
    assert!(screen.contains("https://example.com/wellington.jpg"));
    assert!(screen.contains("Beef Banh Mi"));
    assert!(screen.contains("https://example.com/banhmi.jpg"));
}

#[test]
fn empty_grid_hints_at_category_selection() {
    let app = home_app(vec![category("Beef")], None);
    let screen = render_to_string(&app, 100, 32);
    assert!(screen.contains("Select a category to browse recipes"));
}

#[test]
fn splash_renders_tagline_after_the_entrance() {
    let mut app = App::new(MealDbClient::with_base_url("http://127.0.0.1:0".to_string()));
    app.tick_count = 30;
    let screen = render_to_string(&app, 80, 24);
    assert!(screen.contains("Foody is always right!"));
}

#[test]
fn splash_starts_with_a_bare_screen() {
    let app = App::new(MealDbClient::with_base_url("http://127.0.0.1:0".to_string()));
    // Tick zero: the logo has not started revealing, no tagline yet.
    let screen = render_to_string(&app, 80, 24);
    assert!(!screen.contains("Foody is always right!"));
}
