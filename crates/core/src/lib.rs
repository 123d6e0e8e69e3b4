pub mod error;
pub mod listing;
pub mod search;
pub mod types;
pub mod users;
