//! Repository for the `property_reviews` table.

use lightbnb_core::types::DbId;
use sqlx::PgPool;

use crate::models::review::{CreateReview, Review};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, guest_id, property_id, reservation_id, rating, message";

/// Provides review inserts and per-property listing.
pub struct ReviewRepo;

impl ReviewRepo {
    /// Insert a new review, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateReview) -> Result<Review, sqlx::Error> {
        let query = format!(
            "INSERT INTO property_reviews (guest_id, property_id, reservation_id, rating, message)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Review>(&query)
            .bind(input.guest_id)
            .bind(input.property_id)
            .bind(input.reservation_id)
            .bind(input.rating)
            .bind(&input.message)
            .fetch_one(pool)
            .await
    }

    /// List every review of a property, oldest first.
    pub async fn list_for_property(
        pool: &PgPool,
        property_id: DbId,
    ) -> Result<Vec<Review>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM property_reviews WHERE property_id = $1 ORDER BY id"
        );
        sqlx::query_as::<_, Review>(&query)
            .bind(property_id)
            .fetch_all(pool)
            .await
    }
}
