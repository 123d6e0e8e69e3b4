//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - Any joined/aggregated read shapes built on top of the entity

pub mod property;
pub mod reservation;
pub mod review;
pub mod user;
