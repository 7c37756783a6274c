use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: u64 = 50;
pub const MAX_PAGE_SIZE: u64 = 500;

/// Paging parameters for list endpoints (page is 0-based)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageRequest {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_page_size")]
    pub page_size: u64,
}

fn default_page_size() -> u64 {
    DEFAULT_PAGE_SIZE
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageRequest {
    pub fn new(page: u64, page_size: u64) -> Self {
        Self { page, page_size }.normalized()
    }

    /// Clamp page size into `1..=MAX_PAGE_SIZE`
    pub fn normalized(self) -> Self {
        Self {
            page: self.page,
            page_size: self.page_size.clamp(1, MAX_PAGE_SIZE),
        }
    }

    pub fn offset(&self) -> u64 {
        self.page.saturating_mul(self.page_size)
    }
}

/// Page of items plus totals for the pagination controls
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListResponse<T> {
    pub items: Vec<T>,
    pub total_count: u64,
    pub page: u64,
    pub page_size: u64,
    pub total_pages: u64,
}

impl<T> ListResponse<T> {
    pub fn new(items: Vec<T>, total_count: u64, request: PageRequest) -> Self {
        Self {
            items,
            total_count,
            page: request.page,
            page_size: request.page_size,
            total_pages: total_pages(total_count, request.page_size),
        }
    }

    /// Slice an in-memory list into a page
    pub fn from_vec(all: Vec<T>, request: PageRequest) -> Self {
        let request = request.normalized();
        let total_count = all.len() as u64;
        let items = all
            .into_iter()
            .skip(request.offset() as usize)
            .take(request.page_size as usize)
            .collect();
        Self::new(items, total_count, request)
    }
}

/// Number of pages, at least 1 so an empty list still shows "1 / 1"
pub fn total_pages(total_count: u64, page_size: u64) -> u64 {
    if total_count == 0 || page_size == 0 {
        1
    } else {
        total_count.div_ceil(page_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 50), 1);
        assert_eq!(total_pages(1, 50), 1);
        assert_eq!(total_pages(50, 50), 1);
        assert_eq!(total_pages(51, 50), 2);
        assert_eq!(total_pages(10, 0), 1);
    }

    #[test]
    fn test_page_size_is_clamped() {
        assert_eq!(PageRequest::new(0, 0).page_size, 1);
        assert_eq!(PageRequest::new(0, 10_000).page_size, MAX_PAGE_SIZE);
        assert_eq!(PageRequest::new(3, 20).offset(), 60);
    }

    #[test]
    fn test_from_vec_slices() {
        let all: Vec<u32> = (0..120).collect();
        let page = ListResponse::from_vec(all.clone(), PageRequest::new(2, 50));
        assert_eq!(page.items, (100..120).collect::<Vec<_>>());
        assert_eq!(page.total_count, 120);
        assert_eq!(page.total_pages, 3);

        let past_end = ListResponse::from_vec(all, PageRequest::new(9, 50));
        assert!(past_end.items.is_empty());
        assert_eq!(past_end.page, 9);
    }

    #[test]
    fn test_query_defaults() {
        let req: PageRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req, PageRequest::default());
    }
}
