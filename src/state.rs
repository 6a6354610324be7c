//! View-state for the home screen.
//!
//! Pure state and transitions, free of IO. Transitions that need a
//! network fetch return a [`CategoryAction`] and the `App` wires it to
//! a spawned task; fetch results come back through
//! [`HomeState::apply_meals`] / [`HomeState::fail_meals_fetch`] tagged
//! with the generation they were started under, so responses from an
//! abandoned selection are dropped instead of overwriting newer state.

use crate::models::{Category, Meal, MealSummary};

/// What a category toggle asks the caller to do next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryAction {
    /// Selection was cleared; no fetch needed.
    Cleared,
    /// A new category was selected; fetch its meals under this generation.
    Fetch { category: String, generation: u64 },
}

/// View-state for the home screen.
#[derive(Debug, Default)]
pub struct HomeState {
    /// True while the mount fetch or a filter fetch is in flight.
    pub loading: bool,
    /// Categories in API order.
    pub categories: Vec<Category>,
    /// Name of the selected category, if any.
    pub selected_category: Option<String>,
    /// Meal summaries for the selected category.
    pub meals: Vec<MealSummary>,
    /// Featured (random) meal, absent when its fetch failed.
    pub featured: Option<Meal>,
    /// Keyboard cursor on the category strip.
    pub cursor: usize,
    /// First visible row pair of the meal grid.
    pub grid_scroll: usize,
    /// Generation of the newest filter fetch.
    fetch_generation: u64,
}

impl HomeState {
    /// Initial state: loading until the mount fetch finishes.
    pub fn new() -> Self {
        Self {
            loading: true,
            ..Default::default()
        }
    }

    /// Generation the next filter response must carry to be applied.
    pub fn generation(&self) -> u64 {
        self.fetch_generation
    }

    /// Apply the category list from the mount fetch.
    pub fn set_categories(&mut self, categories: Vec<Category>) {
        self.categories = categories;
        if self.cursor >= self.categories.len() {
            self.cursor = self.categories.len().saturating_sub(1);
        }
    }

    /// Apply a featured meal (mount fetch or re-roll).
    pub fn set_featured(&mut self, meal: Meal) {
        self.featured = Some(meal);
    }

    /// The mount fetch chain finished, with or without data.
    pub fn finish_initial_load(&mut self) {
        self.loading = false;
    }

    /// Move the category cursor by `delta`, clamped to the strip.
    pub fn move_cursor(&mut self, delta: isize) {
        if self.categories.is_empty() {
            return;
        }
        let last = self.categories.len() - 1;
        let next = self.cursor as isize + delta;
        self.cursor = next.clamp(0, last as isize) as usize;
    }

    /// Toggle the category under the cursor.
    ///
    /// Toggling the selected category off clears the selection and the
    /// meal list without a fetch. Either direction bumps the
    /// generation, invalidating any filter fetch still in flight.
    pub fn toggle_at_cursor(&mut self) -> Option<CategoryAction> {
        let name = self.categories.get(self.cursor)?.name.clone();
        self.fetch_generation += 1;
        self.grid_scroll = 0;
        if self.selected_category.as_deref() == Some(name.as_str()) {
            self.selected_category = None;
            self.meals.clear();
            self.loading = false;
            Some(CategoryAction::Cleared)
        } else {
            self.selected_category = Some(name.clone());
            self.loading = true;
            Some(CategoryAction::Fetch {
                category: name,
                generation: self.fetch_generation,
            })
        }
    }

    /// Apply a filter fetch result.
    ///
    /// Returns false when `generation` is stale; the result is dropped
    /// and the state is untouched.
    pub fn apply_meals(&mut self, generation: u64, meals: Vec<MealSummary>) -> bool {
        if generation != self.fetch_generation {
            return false;
        }
        self.meals = meals;
        self.loading = false;
        true
    }

    /// A filter fetch failed: stop the spinner, keep whatever meals
    /// were on screen before.
    ///
    /// Returns false when `generation` is stale.
    pub fn fail_meals_fetch(&mut self, generation: u64) -> bool {
        if generation != self.fetch_generation {
            return false;
        }
        self.loading = false;
        true
    }

    /// Number of two-column rows in the meal grid.
    pub fn grid_rows(&self) -> usize {
        self.meals.len().div_ceil(2)
    }

    /// Scroll the meal grid by `delta` row pairs, clamped.
    pub fn scroll_grid(&mut self, delta: isize) {
        let last = self.grid_rows().saturating_sub(1);
        let next = self.grid_scroll as isize + delta;
        self.grid_scroll = next.clamp(0, last as isize) as usize;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(name: &str) -> Category {
        Category {
            id: format!("id-{name}"),
            name: name.to_string(),
            thumbnail_url: format!("https://example.com/{name}.png"),
        }
    }

    fn meal(name: &str) -> MealSummary {
        MealSummary {
            id: format!("id-{name}"),
            name: name.to_string(),
            thumbnail_url: format!("https://example.com/{name}.jpg"),
        }
    }

    fn state_with_categories(names: &[&str]) -> HomeState {
        let mut state = HomeState::new();
        state.set_categories(names.iter().map(|n| category(n)).collect());
        state.finish_initial_load();
        state
    }

    #[test]
    fn starts_loading_with_empty_state() {
        let state = HomeState::new();
        assert!(state.loading);
        assert!(state.categories.is_empty());
        assert!(state.selected_category.is_none());
        assert!(state.meals.is_empty());
        assert!(state.featured.is_none());
    }

    #[test]
    fn toggle_selects_then_clears() {
        let mut state = state_with_categories(&["Beef", "Chicken"]);

        let action = state.toggle_at_cursor().unwrap();
        assert_eq!(
            action,
            CategoryAction::Fetch {
                category: "Beef".to_string(),
                generation: 1,
            }
        );
        assert!(state.loading);
        assert_eq!(state.selected_category.as_deref(), Some("Beef"));

        state.apply_meals(1, vec![meal("Big Mac"), meal("Wellington")]);
        assert!(!state.loading);
        assert_eq!(state.meals.len(), 2);

        // Toggling the selected category clears everything, no fetch.
        let action = state.toggle_at_cursor().unwrap();
        assert_eq!(action, CategoryAction::Cleared);
        assert!(state.selected_category.is_none());
        assert!(state.meals.is_empty());
        assert!(!state.loading);
    }

    #[test]
    fn switching_category_replaces_selection() {
        let mut state = state_with_categories(&["Beef", "Chicken"]);

        state.toggle_at_cursor().unwrap();
        state.apply_meals(1, vec![meal("Wellington")]);

        state.move_cursor(1);
        let action = state.toggle_at_cursor().unwrap();
        assert_eq!(
            action,
            CategoryAction::Fetch {
                category: "Chicken".to_string(),
                generation: 2,
            }
        );
        assert_eq!(state.selected_category.as_deref(), Some("Chicken"));
        assert!(state.loading);
    }

    #[test]
    fn stale_responses_are_dropped() {
        let mut state = state_with_categories(&["Beef", "Chicken"]);

        state.toggle_at_cursor().unwrap();
        state.move_cursor(1);
        state.toggle_at_cursor().unwrap();

        // Beef's response (generation 1) arrives after Chicken was
        // selected (generation 2).
        assert!(!state.apply_meals(1, vec![meal("Wellington")]));
        assert!(state.meals.is_empty());
        assert!(state.loading);

        assert!(state.apply_meals(2, vec![meal("Kiev")]));
        assert!(!state.loading);
        assert_eq!(state.meals[0].name, "Kiev");
    }

    #[test]
    fn clearing_selection_invalidates_inflight_fetch() {
        let mut state = state_with_categories(&["Beef"]);

        state.toggle_at_cursor().unwrap();
        // Toggle off before the response lands.
        state.toggle_at_cursor().unwrap();

        assert!(!state.apply_meals(1, vec![meal("Wellington")]));
        assert!(state.meals.is_empty());
        assert!(state.selected_category.is_none());
    }

    #[test]
    fn failed_fetch_keeps_previous_meals() {
        let mut state = state_with_categories(&["Beef", "Chicken"]);

        state.toggle_at_cursor().unwrap();
        state.apply_meals(1, vec![meal("Wellington")]);

        state.move_cursor(1);
        state.toggle_at_cursor().unwrap();
        assert!(state.fail_meals_fetch(2));

        assert!(!state.loading);
        assert_eq!(state.meals[0].name, "Wellington");
        assert_eq!(state.selected_category.as_deref(), Some("Chicken"));
    }

    #[test]
    fn cursor_clamps_to_strip() {
        let mut state = state_with_categories(&["Beef", "Chicken", "Dessert"]);

        state.move_cursor(-1);
        assert_eq!(state.cursor, 0);
        state.move_cursor(5);
        assert_eq!(state.cursor, 2);
    }

    #[test]
    fn cursor_follows_shrinking_category_list() {
        let mut state = state_with_categories(&["Beef", "Chicken", "Dessert"]);
        state.move_cursor(2);
        state.set_categories(vec![category("Beef")]);
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn grid_scroll_clamps_to_rows() {
        let mut state = state_with_categories(&["Beef"]);
        state.toggle_at_cursor().unwrap();
        state.apply_meals(
            1,
            vec![meal("a"), meal("b"), meal("c"), meal("d"), meal("e")],
        );

        assert_eq!(state.grid_rows(), 3);
        state.scroll_grid(10);
        assert_eq!(state.grid_scroll, 2);
        state.scroll_grid(-10);
        assert_eq!(state.grid_scroll, 0);
    }
}
