use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const MAX_PAGE_SIZE: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub size: u32,
}

impl PageRequest {
    /// Zero-based page; size is clamped to `1..=MAX_PAGE_SIZE`.
    pub fn new(page: u32, size: u32) -> Self {
        Self {
            page,
            size: size.clamp(1, MAX_PAGE_SIZE),
        }
    }

    pub fn offset(&self) -> u64 {
        self.page as u64 * self.size as u64
    }

    pub fn limit(&self) -> u64 {
        self.size as u64
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(0, DEFAULT_PAGE_SIZE)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub content: Vec<T>,
    pub page: u32,
    pub size: u32,
    #[serde(rename = "totalElements")]
    pub total_elements: u64,
    #[serde(rename = "totalPages")]
    pub total_pages: u64,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, request: PageRequest, total_elements: u64) -> Self {
        Self {
            content,
            page: request.page,
            size: request.size,
            total_elements,
            total_pages: total_elements.div_ceil(request.size as u64),
        }
    }

    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            content: self.content.into_iter().map(f).collect(),
            page: self.page,
            size: self.size,
            total_elements: self.total_elements,
            total_pages: self.total_pages,
        }
    }
}

/// Ordering of a product's review listing. Every order falls back to
/// `review_no` so a page boundary never splits ties unpredictably.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ReviewSort {
    #[default]
    #[serde(rename = "recent")]
    Recent,
    #[serde(rename = "oldest")]
    Oldest,
    #[serde(rename = "rating_high")]
    RatingHigh,
    #[serde(rename = "rating_low")]
    RatingLow,
}

impl ReviewSort {
    pub fn order_by_clause(&self) -> &'static str {
        match self {
            ReviewSort::Recent => "created_at DESC, review_no DESC",
            ReviewSort::Oldest => "created_at ASC, review_no ASC",
            ReviewSort::RatingHigh => "star_rating DESC, created_at DESC, review_no DESC",
            ReviewSort::RatingLow => "star_rating ASC, created_at DESC, review_no DESC",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_request_clamps_size() {
        assert_eq!(PageRequest::new(0, 0).size, 1);
        assert_eq!(PageRequest::new(0, 500).size, MAX_PAGE_SIZE);
        assert_eq!(PageRequest::new(3, 20).offset(), 60);
    }

    #[test]
    fn total_pages_rounds_up() {
        let request = PageRequest::new(0, 10);
        assert_eq!(Page::<()>::new(vec![], request, 0).total_pages, 0);
        assert_eq!(Page::<()>::new(vec![], request, 10).total_pages, 1);
        assert_eq!(Page::<()>::new(vec![], request, 11).total_pages, 2);
    }

    #[test]
    fn map_keeps_paging_fields() {
        let page = Page::new(vec![1, 2, 3], PageRequest::new(1, 3), 7).map(|n| n * 2);
        assert_eq!(page.content, vec![2, 4, 6]);
        assert_eq!(page.page, 1);
        assert_eq!(page.total_elements, 7);
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn sort_parses_from_query_values() {
        let sort: ReviewSort = serde_json::from_str("\"rating_high\"").unwrap();
        assert_eq!(sort, ReviewSort::RatingHigh);
        assert!(serde_json::from_str::<ReviewSort>("\"best\"").is_err());
    }
}
