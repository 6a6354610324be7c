//! Data models for TheMealDB API payloads.
//!
//! The upstream API names its JSON fields with `id*`/`str*` prefixes;
//! the structs here rename them to idiomatic Rust names. Unknown fields
//! (the API sends many more than the UI consumes) are ignored by serde.

use serde::Deserialize;

/// A meal category from `/categories.php`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Category {
    /// Upstream category identifier
    #[serde(rename = "idCategory")]
    pub id: String,
    /// Display name, e.g. "Seafood"
    #[serde(rename = "strCategory")]
    pub name: String,
    /// Thumbnail image URL
    #[serde(rename = "strCategoryThumb")]
    pub thumbnail_url: String,
}

/// A meal summary from `/filter.php?c=<category>`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MealSummary {
    /// Upstream meal identifier
    #[serde(rename = "idMeal")]
    pub id: String,
    /// Display name
    #[serde(rename = "strMeal")]
    pub name: String,
    /// Thumbnail image URL
    #[serde(rename = "strMealThumb")]
    pub thumbnail_url: String,
}

/// A full meal record from `/random.php`.
///
/// The endpoint returns the complete recipe (ingredients, instructions,
/// links); only the fields the featured card consumes are modeled.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Meal {
    /// Upstream meal identifier
    #[serde(rename = "idMeal")]
    pub id: String,
    /// Display name
    #[serde(rename = "strMeal")]
    pub name: String,
    /// Thumbnail image URL
    #[serde(rename = "strMealThumb")]
    pub thumbnail_url: String,
    /// Category label, e.g. "Dessert"
    #[serde(rename = "strCategory", default)]
    pub category: Option<String>,
    /// Cuisine label, e.g. "Italian"
    #[serde(rename = "strArea", default)]
    pub area: Option<String>,
}

/// Envelope for `/categories.php`.
#[derive(Debug, Deserialize)]
pub struct CategoryListResponse {
    pub categories: Vec<Category>,
}

/// Envelope for `/filter.php`.
///
/// An unknown category is answered with `{"meals": null}` rather than
/// an empty array or an error status.
#[derive(Debug, Deserialize)]
pub struct MealListResponse {
    #[serde(default)]
    pub meals: Option<Vec<MealSummary>>,
}

/// Envelope for `/random.php`. The single server-side pick arrives as a
/// one-element `meals` array.
#[derive(Debug, Deserialize)]
pub struct RandomMealResponse {
    #[serde(default)]
    pub meals: Option<Vec<Meal>>,
}
