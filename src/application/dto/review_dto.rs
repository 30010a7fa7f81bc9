use serde::{Deserialize, Serialize};

/// Writable fields of a review. The store fills in `review_no` and timestamps.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReviewDTO {
    #[serde(rename = "productNo")]
    pub product_no: i64,
    #[serde(rename = "starRating")]
    pub star_rating: f64,
    pub content: String,
    pub author: String,
}
