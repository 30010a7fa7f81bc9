use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::models::file::File;

pub const MIN_STAR_RATING: f64 = 0.0;
pub const MAX_STAR_RATING: f64 = 5.0;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Review {
    pub review_no: i64,
    pub product_no: i64,
    pub star_rating: f64,
    pub content: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A review paired with the files whose reference points at it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewWithFiles {
    pub review: Review,
    pub files: Vec<File>,
}

/// Inclusive `[0, 5]` check. NaN never satisfies it.
pub fn is_valid_star_rating(star_rating: f64) -> bool {
    (MIN_STAR_RATING..=MAX_STAR_RATING).contains(&star_rating)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_bounds_and_values_between() {
        for rating in [0.0, 0.5, 2.5, 4.5, 5.0] {
            assert!(is_valid_star_rating(rating), "{rating} should be valid");
        }
    }

    #[test]
    fn rejects_out_of_range_and_nan() {
        for rating in [-0.1, -5.0, 5.1, 10.0, f64::NAN, f64::INFINITY] {
            assert!(!is_valid_star_rating(rating), "{rating} should be invalid");
        }
    }
}
