//! Repository for the `reservations` table.

use lightbnb_core::types::DbId;
use sqlx::PgPool;

use crate::models::reservation::{CreateReservation, GuestReservation, Reservation};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, start_date, end_date, property_id, guest_id";

/// Provides bookings and per-guest reservation history.
pub struct ReservationRepo;

impl ReservationRepo {
    /// Insert a new reservation, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateReservation,
    ) -> Result<Reservation, sqlx::Error> {
        let query = format!(
            "INSERT INTO reservations (start_date, end_date, property_id, guest_id)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Reservation>(&query)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(input.property_id)
            .bind(input.guest_id)
            .fetch_one(pool)
            .await
    }

    /// Find a reservation by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Reservation>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM reservations WHERE id = $1");
        sqlx::query_as::<_, Reservation>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a guest's reservations, earliest stay first.
    ///
    /// Each row carries the reserved property's headline fields and its
    /// average rating across every review of that property.
    pub async fn list_for_guest(
        pool: &PgPool,
        guest_id: DbId,
        limit: i64,
    ) -> Result<Vec<GuestReservation>, sqlx::Error> {
        sqlx::query_as::<_, GuestReservation>(
            "SELECT r.id, r.start_date, r.end_date, r.property_id, r.guest_id, \
                    p.title, p.thumbnail_photo_url, p.city, p.cost_per_night, \
                    AVG(pr.rating)::float8 AS average_rating \
             FROM reservations r \
             JOIN properties p ON p.id = r.property_id \
             LEFT JOIN property_reviews pr ON pr.property_id = p.id \
             WHERE r.guest_id = $1 \
             GROUP BY r.id, p.id \
             ORDER BY r.start_date ASC, r.id ASC \
             LIMIT $2",
        )
        .bind(guest_id)
        .bind(limit)
        .fetch_all(pool)
        .await
    }
}
