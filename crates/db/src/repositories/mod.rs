//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async query methods
//! that accept `&PgPool` as the first argument. Repositories return raw
//! `sqlx::Error`s; containment and logging happen in [`crate::store`].

pub mod property_repo;
pub mod reservation_repo;
pub mod review_repo;
pub mod user_repo;

pub use property_repo::PropertyRepo;
pub use reservation_repo::ReservationRepo;
pub use review_repo::ReviewRepo;
pub use user_repo::UserRepo;
