//! AppMessage enum for async communication within the application.

use crate::models::{Category, Meal, MealSummary};

/// Messages received from spawned fetch tasks.
///
/// Fetches never mutate state directly; they report back through the
/// app's unbounded channel and the event loop applies the result.
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// Category list arrived during the mount fetch
    CategoriesLoaded { categories: Vec<Category> },
    /// Featured meal arrived (mount fetch or re-roll)
    FeaturedMealLoaded { meal: Meal },
    /// The mount fetch chain finished, possibly with partial data
    InitialFetchFinished,
    /// Filter fetch for the selected category resolved
    MealsLoaded {
        generation: u64,
        meals: Vec<MealSummary>,
    },
    /// Filter fetch failed; the error was already logged by the client
    MealsFetchFailed { generation: u64 },
}
