//! Reservation entity model and the guest-facing reservation view.

use lightbnb_core::types::{Date, DbId};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `reservations` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Reservation {
    pub id: DbId,
    pub start_date: Date,
    pub end_date: Date,
    pub property_id: DbId,
    pub guest_id: DbId,
}

/// DTO for booking a stay.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateReservation {
    pub start_date: Date,
    pub end_date: Date,
    pub property_id: DbId,
    pub guest_id: DbId,
}

/// A guest's reservation joined with the reserved property.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct GuestReservation {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub reservation: Reservation,
    pub title: String,
    pub thumbnail_photo_url: String,
    pub city: String,
    pub cost_per_night: i32,
    /// Mean rating across all reviews of the property, `None` if unreviewed.
    pub average_rating: Option<f64>,
}
