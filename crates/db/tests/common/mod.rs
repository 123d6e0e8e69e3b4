//! Fixture builders shared by the integration tests.

#![allow(dead_code)]

use lightbnb_core::types::{Date, DbId};
use lightbnb_db::models::property::{CreateProperty, Property};
use lightbnb_db::models::reservation::{CreateReservation, Reservation};
use lightbnb_db::models::review::{CreateReview, Review};
use lightbnb_db::models::user::{CreateUser, User};
use lightbnb_db::Store;

pub fn date(y: i32, m: u32, d: u32) -> Date {
    Date::from_ymd_opt(y, m, d).unwrap()
}

pub fn new_user(name: &str) -> CreateUser {
    CreateUser {
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
        password: "$2a$10$FB/BOAVhpuLvpOREQVmvmezD4ED/.JBIDRh70tGevYzYzQgFId2u.".to_string(),
    }
}

pub fn new_property(owner_id: DbId, title: &str, city: &str, cost_per_night: i32) -> CreateProperty {
    CreateProperty {
        owner_id,
        title: title.to_string(),
        description: "description".to_string(),
        thumbnail_photo_url: "https://images.example.com/thumb.jpg".to_string(),
        cover_photo_url: "https://images.example.com/cover.jpg".to_string(),
        cost_per_night,
        parking_spaces: 1,
        number_of_bathrooms: 2,
        number_of_bedrooms: 3,
        country: "Canada".to_string(),
        street: "536 Namsub Highway".to_string(),
        city: city.to_string(),
        province: "Quebec".to_string(),
        post_code: "28142".to_string(),
    }
}

pub async fn user(store: &Store, name: &str) -> User {
    store.add_user(&new_user(name)).await.unwrap()
}

pub async fn property(
    store: &Store,
    owner_id: DbId,
    title: &str,
    city: &str,
    cost_per_night: i32,
) -> Property {
    store
        .add_property(&new_property(owner_id, title, city, cost_per_night))
        .await
        .unwrap()
}

pub async fn stay(store: &Store, guest_id: DbId, property_id: DbId, start: Date) -> Reservation {
    store
        .add_reservation(&CreateReservation {
            start_date: start,
            end_date: start + chrono::Days::new(3),
            property_id,
            guest_id,
        })
        .await
        .unwrap()
}

/// Book a stay and review it in one go.
pub async fn review(store: &Store, guest_id: DbId, property_id: DbId, rating: i16) -> Review {
    let reservation = stay(store, guest_id, property_id, date(2023, 5, 1)).await;
    store
        .add_review(&CreateReview {
            guest_id,
            property_id,
            reservation_id: reservation.id,
            rating,
            message: "messages".to_string(),
        })
        .await
        .unwrap()
}
