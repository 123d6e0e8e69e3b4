//! The data-access boundary handed to callers.
//!
//! [`Store`] owns a pool injected at construction. Every method validates its
//! input, runs one repository call, and reports either rows or a
//! [`StoreError`]. Driver errors are contained and logged here.

use lightbnb_core::error::CoreError;
use lightbnb_core::listing::{
    validate_non_negative, validate_required, validate_review_rating, validate_stay,
    validate_title,
};
use lightbnb_core::search::{
    resolve_limit, validate_minimum_rating, validate_price_bounds, DEFAULT_SEARCH_LIMIT,
    MAX_SEARCH_LIMIT,
};
use lightbnb_core::types::DbId;
use lightbnb_core::users::validate_new_user;

use crate::error::{StoreError, StoreResult};
use crate::models::property::{CreateProperty, Property, PropertyListing, PropertySearchFilter};
use crate::models::reservation::{CreateReservation, GuestReservation, Reservation};
use crate::models::review::{CreateReview, Review};
use crate::models::user::{CreateUser, User};
use crate::repositories::{PropertyRepo, ReservationRepo, ReviewRepo, UserRepo};
use crate::search::PropertySearch;
use crate::DbPool;

#[derive(Debug, Clone)]
pub struct Store {
    pool: DbPool,
}

impl Store {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    /// Verify the database answers a trivial query.
    pub async fn health_check(&self) -> StoreResult<()> {
        crate::health_check(&self.pool)
            .await
            .map_err(|e| StoreError::from_sqlx("health_check", e))
    }

    /// Close the pool, waiting for checked-out connections to come back.
    pub async fn close(&self) {
        self.pool.close().await;
        tracing::info!("Database pool closed");
    }

    // -----------------------------------------------------------------------
    // Users
    // -----------------------------------------------------------------------

    /// Look up a user by email, ignoring case.
    pub async fn get_user_with_email(&self, email: &str) -> StoreResult<Option<User>> {
        validate_required("email", email)?;
        UserRepo::find_by_email(&self.pool, email.trim())
            .await
            .map_err(|e| StoreError::from_sqlx("get_user_with_email", e))
    }

    pub async fn get_user_with_id(&self, id: DbId) -> StoreResult<Option<User>> {
        UserRepo::find_by_id(&self.pool, id)
            .await
            .map_err(|e| StoreError::from_sqlx("get_user_with_id", e))
    }

    /// Register a user. A second account with the same email (any case)
    /// yields [`StoreError::Conflict`].
    pub async fn add_user(&self, input: &CreateUser) -> StoreResult<User> {
        validate_new_user(&input.name, &input.email, &input.password)?;
        let user = UserRepo::create(&self.pool, input)
            .await
            .map_err(|e| StoreError::from_sqlx("add_user", e))?;
        tracing::debug!(user_id = user.id, "User created");
        Ok(user)
    }

    // -----------------------------------------------------------------------
    // Reservations
    // -----------------------------------------------------------------------

    /// A guest's reservations, earliest first, at most `limit` (default 10).
    pub async fn get_all_reservations(
        &self,
        guest_id: DbId,
        limit: Option<i64>,
    ) -> StoreResult<Vec<GuestReservation>> {
        let limit = resolve_limit(limit, DEFAULT_SEARCH_LIMIT, MAX_SEARCH_LIMIT)?;
        let rows = ReservationRepo::list_for_guest(&self.pool, guest_id, limit)
            .await
            .map_err(|e| StoreError::from_sqlx("get_all_reservations", e))?;
        tracing::debug!(guest_id, limit, count = rows.len(), "Listed guest reservations");
        Ok(rows)
    }

    pub async fn add_reservation(&self, input: &CreateReservation) -> StoreResult<Reservation> {
        validate_stay(input.start_date, input.end_date)?;
        ReservationRepo::create(&self.pool, input)
            .await
            .map_err(|e| StoreError::from_sqlx("add_reservation", e))
    }

    // -----------------------------------------------------------------------
    // Properties
    // -----------------------------------------------------------------------

    /// Search properties, cheapest first, at most `limit` rows (default 10).
    ///
    /// Every filter field is optional. Price bounds apply independently.
    /// Unreviewed properties are included with no average rating unless a
    /// minimum rating is requested.
    pub async fn get_all_properties(
        &self,
        filter: &PropertySearchFilter,
        limit: Option<i64>,
    ) -> StoreResult<Vec<PropertyListing>> {
        validate_price_bounds(filter.minimum_price_per_night, filter.maximum_price_per_night)?;
        validate_minimum_rating(filter.minimum_rating)?;
        let limit = resolve_limit(limit, DEFAULT_SEARCH_LIMIT, MAX_SEARCH_LIMIT)?;

        let search = PropertySearch::from_filter(filter);
        tracing::debug!(
            predicates = search.predicates().len(),
            minimum_rating = ?search.minimum_rating(),
            limit,
            "Searching properties"
        );

        let rows = PropertyRepo::search(&self.pool, &search, limit)
            .await
            .map_err(|e| StoreError::from_sqlx("get_all_properties", e))?;
        tracing::debug!(count = rows.len(), "Property search completed");
        Ok(rows)
    }

    pub async fn get_property(&self, id: DbId) -> StoreResult<Option<Property>> {
        PropertyRepo::find_by_id(&self.pool, id)
            .await
            .map_err(|e| StoreError::from_sqlx("get_property", e))
    }

    pub async fn add_property(&self, input: &CreateProperty) -> StoreResult<Property> {
        validate_property(input)?;
        let property = PropertyRepo::create(&self.pool, input)
            .await
            .map_err(|e| StoreError::from_sqlx("add_property", e))?;
        tracing::debug!(property_id = property.id, owner_id = property.owner_id, "Property created");
        Ok(property)
    }

    // -----------------------------------------------------------------------
    // Reviews
    // -----------------------------------------------------------------------

    /// Review a stay. The reservation must exist and belong to the same guest
    /// and property as the review.
    pub async fn add_review(&self, input: &CreateReview) -> StoreResult<Review> {
        validate_review_rating(input.rating)?;

        let reservation = ReservationRepo::find_by_id(&self.pool, input.reservation_id)
            .await
            .map_err(|e| StoreError::from_sqlx("add_review", e))?
            .ok_or(CoreError::NotFound {
                entity: "reservation",
                id: input.reservation_id,
            })?;
        if reservation.guest_id != input.guest_id || reservation.property_id != input.property_id
        {
            return Err(StoreError::InvalidArgument(format!(
                "reservation {} does not belong to guest {} at property {}",
                reservation.id, input.guest_id, input.property_id
            )));
        }

        ReviewRepo::create(&self.pool, input)
            .await
            .map_err(|e| StoreError::from_sqlx("add_review", e))
    }

    pub async fn get_reviews(&self, property_id: DbId) -> StoreResult<Vec<Review>> {
        ReviewRepo::list_for_property(&self.pool, property_id)
            .await
            .map_err(|e| StoreError::from_sqlx("get_reviews", e))
    }
}

fn validate_property(input: &CreateProperty) -> Result<(), CoreError> {
    validate_title(&input.title)?;
    for (field, value) in [
        ("thumbnail_photo_url", &input.thumbnail_photo_url),
        ("cover_photo_url", &input.cover_photo_url),
        ("country", &input.country),
        ("street", &input.street),
        ("city", &input.city),
        ("province", &input.province),
        ("post_code", &input.post_code),
    ] {
        validate_required(field, value)?;
    }
    for (field, value) in [
        ("cost_per_night", input.cost_per_night),
        ("parking_spaces", input.parking_spaces),
        ("number_of_bathrooms", input.number_of_bathrooms),
        ("number_of_bedrooms", input.number_of_bedrooms),
    ] {
        validate_non_negative(field, value)?;
    }
    Ok(())
}
