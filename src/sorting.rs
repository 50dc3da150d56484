// Result ordering for the bundle list
use crate::bundle::Bundle;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
#[error("Unknown sort option: {0}")]
pub struct SortOptionError(pub String);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOption {
    // Cheapest total first
    #[default]
    PriceAsc,
    // Highest star rating first, unrated hotels last
    HotelRating,
}

impl FromStr for SortOption {
    type Err = SortOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "price-asc" => Ok(SortOption::PriceAsc),
            "hotel-rating" => Ok(SortOption::HotelRating),
            other => Err(SortOptionError(other.to_string())),
        }
    }
}

// Returns a sorted copy of `bundles`; ties keep their generated order.
pub fn sort_bundles(bundles: &[Bundle], sort_by: SortOption) -> Vec<Bundle> {
    let mut sorted = bundles.to_vec();
    match sort_by {
        SortOption::PriceAsc => sorted.sort_by(|a, b| {
            a.total_cost()
                .partial_cmp(&b.total_cost())
                .unwrap_or(Ordering::Equal)
        }),
        SortOption::HotelRating => sorted.sort_by(|a, b| {
            let rating_a = a.hotel().star_rating.unwrap_or(0.0);
            let rating_b = b.hotel().star_rating.unwrap_or(0.0);
            rating_b.partial_cmp(&rating_a).unwrap_or(Ordering::Equal)
        }),
    }
    sorted
}
