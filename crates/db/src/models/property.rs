//! Property entity model, search filter, and search result shape.

use lightbnb_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `properties` table.
///
/// `cost_per_night` is stored in cents.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Property {
    pub id: DbId,
    pub owner_id: DbId,
    pub title: String,
    pub description: String,
    pub thumbnail_photo_url: String,
    pub cover_photo_url: String,
    pub cost_per_night: i32,
    pub parking_spaces: i32,
    pub number_of_bathrooms: i32,
    pub number_of_bedrooms: i32,
    pub country: String,
    pub street: String,
    pub city: String,
    pub province: String,
    pub post_code: String,
    pub created_at: Timestamp,
}

/// DTO for listing a new property.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CreateProperty {
    pub owner_id: DbId,
    pub title: String,
    pub description: String,
    pub thumbnail_photo_url: String,
    pub cover_photo_url: String,
    pub cost_per_night: i32,
    pub parking_spaces: i32,
    pub number_of_bathrooms: i32,
    pub number_of_bedrooms: i32,
    pub country: String,
    pub street: String,
    pub city: String,
    pub province: String,
    pub post_code: String,
}

/// A property search result: the property plus its mean review rating.
///
/// `average_rating` is `None` for properties nobody has reviewed yet.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PropertyListing {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub property: Property,
    pub average_rating: Option<f64>,
}

/// Optional search constraints. An absent field places no constraint on
/// that dimension.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PropertySearchFilter {
    /// Case-insensitive substring of the city name.
    pub city: Option<String>,
    /// Restrict to listings owned by this user.
    pub owner_id: Option<DbId>,
    /// Inclusive lower bound on `cost_per_night`, in cents.
    pub minimum_price_per_night: Option<i32>,
    /// Inclusive upper bound on `cost_per_night`, in cents.
    pub maximum_price_per_night: Option<i32>,
    /// Inclusive lower bound on the average review rating.
    pub minimum_rating: Option<f64>,
}
