//! Repository for the `properties` table.

use lightbnb_core::types::DbId;
use sqlx::PgPool;

use crate::models::property::{CreateProperty, Property, PropertyListing};
use crate::search::PropertySearch;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, owner_id, title, description, thumbnail_photo_url, cover_photo_url, \
                       cost_per_night, parking_spaces, number_of_bathrooms, number_of_bedrooms, \
                       country, street, city, province, post_code, created_at";

/// Provides inserts, lookups, and filtered search for properties.
pub struct PropertyRepo;

impl PropertyRepo {
    /// Insert a new property, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateProperty) -> Result<Property, sqlx::Error> {
        let query = format!(
            "INSERT INTO properties (
                owner_id, title, description, thumbnail_photo_url, cover_photo_url,
                cost_per_night, parking_spaces, number_of_bathrooms, number_of_bedrooms,
                country, street, city, province, post_code)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Property>(&query)
            .bind(input.owner_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.thumbnail_photo_url)
            .bind(&input.cover_photo_url)
            .bind(input.cost_per_night)
            .bind(input.parking_spaces)
            .bind(input.number_of_bathrooms)
            .bind(input.number_of_bedrooms)
            .bind(&input.country)
            .bind(&input.street)
            .bind(&input.city)
            .bind(&input.province)
            .bind(&input.post_code)
            .fetch_one(pool)
            .await
    }

    /// Find a property by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Property>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM properties WHERE id = $1");
        sqlx::query_as::<_, Property>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Run a filtered property search, cheapest first, at most `limit` rows.
    ///
    /// See [`PropertySearch`] for how filters turn into predicates.
    pub async fn search(
        pool: &PgPool,
        search: &PropertySearch,
        limit: i64,
    ) -> Result<Vec<PropertyListing>, sqlx::Error> {
        let mut builder = search.build(limit);
        let rows = builder
            .build_query_as::<PropertyListing>()
            .fetch_all(pool)
            .await?;
        Ok(rows)
    }
}
