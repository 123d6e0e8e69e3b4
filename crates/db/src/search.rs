//! Dynamic property search.
//!
//! A [`PropertySearch`] is an ordered list of row predicates plus an optional
//! post-aggregation rating floor. Rendering emits `WHERE` before the first
//! predicate and `AND` before every later one, so any subset of filters
//! produces well-formed SQL. Every value is bound positionally.

use lightbnb_core::search::{contains_pattern, normalize_city};
use lightbnb_core::types::DbId;
use sqlx::{Postgres, QueryBuilder};

use crate::models::property::PropertySearchFilter;

/// Properties joined to their reviews. Grouping is by `p.id` alone; the
/// other property columns are functionally dependent on the primary key.
const SEARCH_SELECT: &str = "\
    SELECT p.id, p.owner_id, p.title, p.description, p.thumbnail_photo_url, \
           p.cover_photo_url, p.cost_per_night, p.parking_spaces, \
           p.number_of_bathrooms, p.number_of_bedrooms, p.country, p.street, \
           p.city, p.province, p.post_code, p.created_at, \
           AVG(pr.rating)::float8 AS average_rating \
    FROM properties p \
    LEFT JOIN property_reviews pr ON pr.property_id = p.id";

/// A single row-level condition on the property being searched.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// City contains the text, ignoring case.
    CityContains(String),
    /// Listing belongs to this owner.
    Owner(DbId),
    /// `cost_per_night >= value`.
    MinCost(i32),
    /// `cost_per_night <= value`.
    MaxCost(i32),
}

impl Predicate {
    /// SQL fragment preceding the bound value.
    fn template(&self) -> &'static str {
        match self {
            Predicate::CityContains(_) => "p.city ILIKE ",
            Predicate::Owner(_) => "p.owner_id = ",
            Predicate::MinCost(_) => "p.cost_per_night >= ",
            Predicate::MaxCost(_) => "p.cost_per_night <= ",
        }
    }

    fn push_onto(&self, builder: &mut QueryBuilder<'static, Postgres>) {
        builder.push(self.template());
        match self {
            Predicate::CityContains(city) => builder.push_bind(contains_pattern(city)),
            Predicate::Owner(id) => builder.push_bind(*id),
            Predicate::MinCost(cents) | Predicate::MaxCost(cents) => builder.push_bind(*cents),
        };
    }
}

/// A compiled property search, ready to render for a given limit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertySearch {
    predicates: Vec<Predicate>,
    minimum_rating: Option<f64>,
}

impl PropertySearch {
    /// Compile a filter into predicates.
    ///
    /// Predicate order is fixed: city, owner, minimum price, maximum price.
    /// Each price bound applies on its own when the other is absent.
    pub fn from_filter(filter: &PropertySearchFilter) -> Self {
        let mut predicates = Vec::new();

        if let Some(city) = normalize_city(filter.city.as_deref()) {
            predicates.push(Predicate::CityContains(city));
        }
        if let Some(owner_id) = filter.owner_id {
            predicates.push(Predicate::Owner(owner_id));
        }
        if let Some(min) = filter.minimum_price_per_night {
            predicates.push(Predicate::MinCost(min));
        }
        if let Some(max) = filter.maximum_price_per_night {
            predicates.push(Predicate::MaxCost(max));
        }

        Self {
            predicates,
            minimum_rating: filter.minimum_rating,
        }
    }

    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    pub fn minimum_rating(&self) -> Option<f64> {
        self.minimum_rating
    }

    /// Render the full query: predicates, grouping, rating floor, order, limit.
    pub fn build(&self, limit: i64) -> QueryBuilder<'static, Postgres> {
        let mut builder = QueryBuilder::new(SEARCH_SELECT);

        for (i, predicate) in self.predicates.iter().enumerate() {
            builder.push(if i == 0 { " WHERE " } else { " AND " });
            predicate.push_onto(&mut builder);
        }

        builder.push(" GROUP BY p.id");

        // A NULL average (no reviews) never satisfies this, so unreviewed
        // properties drop out whenever a rating floor is set.
        if let Some(rating) = self.minimum_rating {
            builder.push(" HAVING AVG(pr.rating)::float8 >= ");
            builder.push_bind(rating);
        }

        builder.push(" ORDER BY p.cost_per_night ASC, p.id ASC LIMIT ");
        builder.push_bind(limit);
        builder
    }
}
