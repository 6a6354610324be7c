//! HTTP client for TheMealDB API.
//!
//! Wraps the three read-only endpoints the app consumes: the category
//! list, the per-category meal filter, and the server-side random meal.
//! Every failure is logged before it is propagated, so callers can
//! degrade silently without losing diagnostics.

use reqwest::Client;
use tracing::error;

use crate::models::{
    Category, CategoryListResponse, Meal, MealListResponse, MealSummary, RandomMealResponse,
};

/// Default base URL for TheMealDB JSON API (free tier).
pub const MEALDB_BASE_URL: &str = "https://www.themealdb.com/api/json/v1/1";

/// Error type for MealDB client operations
#[derive(Debug)]
pub enum MealDbError {
    /// HTTP request failed
    Http(reqwest::Error),
    /// JSON deserialization failed
    Json(serde_json::Error),
    /// Server returned an error status
    Status { status: u16, message: String },
    /// A 2xx body carried no meal where one was required
    EmptyResponse,
}

impl std::fmt::Display for MealDbError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MealDbError::Http(e) => write!(f, "HTTP error: {}", e),
            MealDbError::Json(e) => write!(f, "JSON error: {}", e),
            MealDbError::Status { status, message } => {
                write!(f, "Server error ({}): {}", status, message)
            }
            MealDbError::EmptyResponse => write!(f, "Server returned an empty meal list"),
        }
    }
}

impl std::error::Error for MealDbError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MealDbError::Http(e) => Some(e),
            MealDbError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for MealDbError {
    fn from(e: reqwest::Error) -> Self {
        MealDbError::Http(e)
    }
}

impl From<serde_json::Error> for MealDbError {
    fn from(e: serde_json::Error) -> Self {
        MealDbError::Json(e)
    }
}

/// Client for TheMealDB REST API.
///
/// Holds a reusable `reqwest::Client`; cloning is cheap, so spawned
/// fetch tasks take their own copy.
#[derive(Debug, Clone)]
pub struct MealDbClient {
    /// Base URL for the API
    pub base_url: String,
    /// Reusable HTTP client
    client: Client,
}

impl MealDbClient {
    /// Create a new MealDbClient with the default base URL.
    pub fn new() -> Self {
        Self::with_base_url(MEALDB_BASE_URL.to_string())
    }

    /// Create a new MealDbClient with a custom base URL.
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            base_url,
            client: Client::new(),
        }
    }

    /// Fetch the full category list.
    ///
    /// GET `/categories.php`
    pub async fn categories(&self) -> Result<Vec<Category>, MealDbError> {
        let url = format!("{}/categories.php", self.base_url);
        match self.get_json::<CategoryListResponse>(&url).await {
            Ok(body) => Ok(body.categories),
            Err(e) => {
                error!(error = %e, "failed to fetch meal categories");
                Err(e)
            }
        }
    }

    /// Fetch the meal summaries belonging to `category`.
    ///
    /// GET `/filter.php?c=<category>`. An unknown category yields an
    /// empty list (the API answers `{"meals": null}`), not an error.
    pub async fn meals_by_category(
        &self,
        category: &str,
    ) -> Result<Vec<MealSummary>, MealDbError> {
        let url = format!(
            "{}/filter.php?c={}",
            self.base_url,
            urlencoding::encode(category)
        );
        match self.get_json::<MealListResponse>(&url).await {
            Ok(body) => Ok(body.meals.unwrap_or_default()),
            Err(e) => {
                error!(category = %category, error = %e, "failed to fetch meals for category");
                Err(e)
            }
        }
    }

    /// Fetch one meal, chosen server-side at random.
    ///
    /// GET `/random.php`; the pick arrives as a one-element `meals`
    /// array and an empty array is treated as a malformed body.
    pub async fn random_meal(&self) -> Result<Meal, MealDbError> {
        let url = format!("{}/random.php", self.base_url);
        let result = match self.get_json::<RandomMealResponse>(&url).await {
            Ok(body) => body
                .meals
                .unwrap_or_default()
                .into_iter()
                .next()
                .ok_or(MealDbError::EmptyResponse),
            Err(e) => Err(e),
        };
        if let Err(ref e) = result {
            error!(error = %e, "failed to fetch random meal");
        }
        result
    }

    /// Issue a GET and decode the JSON body.
    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T, MealDbError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(MealDbError::Status {
                status: status.as_u16(),
                message,
            });
        }
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

impl Default for MealDbClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_uses_default_base_url() {
        let client = MealDbClient::new();
        assert_eq!(client.base_url, MEALDB_BASE_URL);
    }

    #[test]
    fn with_base_url_overrides_default() {
        let client = MealDbClient::with_base_url("http://localhost:9999".to_string());
        assert_eq!(client.base_url, "http://localhost:9999");
    }

    #[test]
    fn error_display_includes_status() {
        let err = MealDbError::Status {
            status: 503,
            message: "down".to_string(),
        };
        assert_eq!(err.to_string(), "Server error (503): down");
    }
}
