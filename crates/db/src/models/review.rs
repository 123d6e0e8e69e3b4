//! Property review model and DTOs.

use lightbnb_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `property_reviews` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Review {
    pub id: DbId,
    pub guest_id: DbId,
    pub property_id: DbId,
    pub reservation_id: DbId,
    pub rating: i16,
    pub message: String,
}

/// DTO for reviewing a completed stay.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateReview {
    pub guest_id: DbId,
    pub property_id: DbId,
    pub reservation_id: DbId,
    pub rating: i16,
    pub message: String,
}
