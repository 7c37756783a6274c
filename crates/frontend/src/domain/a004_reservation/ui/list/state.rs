use contracts::domain::a004_reservation::aggregate::ReservationListQuery;
use contracts::enums::ReservationStatus;
use contracts::shared::list::DEFAULT_PAGE_SIZE;
use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct ReservationListState {
    pub status: Option<ReservationStatus>,
    pub search: String,
    pub page: usize,
    pub page_size: usize,
    pub total_count: usize,
    pub total_pages: usize,
}

impl Default for ReservationListState {
    fn default() -> Self {
        Self {
            status: None,
            search: String::new(),
            page: 0,
            page_size: DEFAULT_PAGE_SIZE as usize,
            total_count: 0,
            total_pages: 1,
        }
    }
}

impl ReservationListState {
    pub fn query(&self, property_id: Option<String>) -> ReservationListQuery {
        let search = self.search.trim();
        ReservationListQuery {
            property_id,
            status: self.status,
            search: (!search.is_empty()).then(|| search.to_string()),
            page: self.page as u64,
            page_size: self.page_size as u64,
        }
    }
}

pub fn create_state() -> RwSignal<ReservationListState> {
    RwSignal::new(ReservationListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_from_state() {
        let state = ReservationListState {
            status: Some(ReservationStatus::Confirmed),
            search: "  lovelace ".into(),
            page: 3,
            ..Default::default()
        };
        let q = state.query(Some("p1".into()));
        assert_eq!(q.property_id.as_deref(), Some("p1"));
        assert_eq!(q.status, Some(ReservationStatus::Confirmed));
        assert_eq!(q.search.as_deref(), Some("lovelace"));
        assert_eq!(q.page, 3);

        let empty = ReservationListState::default().query(None);
        assert_eq!(empty.search, None);
        assert_eq!(empty.page_size, DEFAULT_PAGE_SIZE);
    }
}
