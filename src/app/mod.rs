//! Application state and fetch coordination.
//!
//! [`App`] owns the active screen, the home view-state, and the message
//! channel that spawned fetch tasks report back through. The event loop
//! in `main` drains the channel and forwards each message to
//! [`App::handle_message`].

mod handlers;
mod messages;
mod types;

pub use messages::AppMessage;
pub use types::Screen;

use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::api::MealDbClient;
use crate::state::{CategoryAction, HomeState};

/// Top-level application state.
pub struct App {
    /// Which screen is displayed
    pub screen: Screen,
    /// Home screen view-state
    pub home: HomeState,
    /// API client; fetch tasks clone it
    pub client: MealDbClient,
    /// Receiver half of the fetch-result channel (taken by the event loop)
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Sender half, cloned into fetch tasks
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Animation tick counter (spinner, splash entrance)
    pub tick_count: u64,
    /// Redraw gate for the event loop
    pub needs_redraw: bool,
    /// Set when the user quits
    pub should_quit: bool,
}

impl App {
    /// Create the application in its splash state.
    pub fn new(client: MealDbClient) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        Self {
            screen: Screen::Splash,
            home: HomeState::new(),
            client,
            message_rx: Some(message_rx),
            message_tx,
            tick_count: 0,
            needs_redraw: true,
            should_quit: false,
        }
    }

    /// Advance animations by one tick.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        // Only the splash entrance and the loading spinner animate.
        if self.screen == Screen::Splash || self.home.loading {
            self.mark_dirty();
        }
    }

    /// Request a redraw on the next loop iteration.
    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Ask the event loop to exit.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Leave the splash screen and start the mount fetch.
    pub fn enter_home(&mut self) {
        if self.screen == Screen::Home {
            return;
        }
        info!("entering home screen");
        self.screen = Screen::Home;
        self.home = HomeState::new();
        self.spawn_initial_fetch();
        self.mark_dirty();
    }

    /// Mount fetch: categories first, then the random meal.
    ///
    /// The calls run sequentially (the second does not start until the
    /// first resolves) but fail independently. A failed call produces
    /// no data message; the final marker always clears the loading
    /// flag, so the view comes up with whatever arrived.
    fn spawn_initial_fetch(&self) {
        let client = self.client.clone();
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            if let Ok(categories) = client.categories().await {
                let _ = tx.send(AppMessage::CategoriesLoaded { categories });
            }
            if let Ok(meal) = client.random_meal().await {
                let _ = tx.send(AppMessage::FeaturedMealLoaded { meal });
            }
            let _ = tx.send(AppMessage::InitialFetchFinished);
        });
    }

    /// Toggle the category under the cursor, spawning a filter fetch
    /// when a new category was selected.
    pub fn toggle_category(&mut self) {
        match self.home.toggle_at_cursor() {
            Some(CategoryAction::Fetch {
                category,
                generation,
            }) => {
                debug!(category = %category, generation, "category selected");
                self.spawn_meals_fetch(category, generation);
            }
            Some(CategoryAction::Cleared) => {
                debug!("category selection cleared");
            }
            None => {}
        }
        self.mark_dirty();
    }

    fn spawn_meals_fetch(&self, category: String, generation: u64) {
        let client = self.client.clone();
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            match client.meals_by_category(&category).await {
                Ok(meals) => {
                    let _ = tx.send(AppMessage::MealsLoaded { generation, meals });
                }
                Err(_) => {
                    let _ = tx.send(AppMessage::MealsFetchFailed { generation });
                }
            }
        });
    }

    /// Fetch a fresh featured meal without blocking the screen.
    pub fn reroll_featured(&self) {
        let client = self.client.clone();
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            if let Ok(meal) = client.random_meal().await {
                let _ = tx.send(AppMessage::FeaturedMealLoaded { meal });
            }
        });
    }

    /// Apply a fetch result to the view-state.
    pub fn handle_message(&mut self, message: AppMessage) {
        match message {
            AppMessage::CategoriesLoaded { categories } => {
                self.home.set_categories(categories);
            }
            AppMessage::FeaturedMealLoaded { meal } => {
                self.home.set_featured(meal);
            }
            AppMessage::InitialFetchFinished => {
                self.home.finish_initial_load();
            }
            AppMessage::MealsLoaded { generation, meals } => {
                if !self.home.apply_meals(generation, meals) {
                    debug!(generation, "discarding stale filter response");
                }
            }
            AppMessage::MealsFetchFailed { generation } => {
                if !self.home.fail_meals_fetch(generation) {
                    debug!(generation, "discarding stale filter failure");
                }
            }
        }
        self.mark_dirty();
    }
}
