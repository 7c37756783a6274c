use contracts::shared::list::DEFAULT_PAGE_SIZE;
use contracts::system::users::User;
use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct UsersListState {
    pub items: Vec<User>,
    pub search_query: String,
    pub sort_field: String,
    pub sort_ascending: bool,
    pub page: usize,
    pub page_size: usize,
    pub total_count: usize,
    pub total_pages: usize,
    pub is_loaded: bool,
}

impl Default for UsersListState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            search_query: String::new(),
            sort_field: "username".to_string(),
            sort_ascending: true,
            page: 0,
            page_size: DEFAULT_PAGE_SIZE as usize,
            total_count: 0,
            total_pages: 1,
            is_loaded: false,
        }
    }
}

impl UsersListState {
    /// Recompute page count and pull the current page back into range
    pub fn recalc_pagination(&mut self) {
        self.total_pages = if self.total_count == 0 || self.page_size == 0 {
            1
        } else {
            self.total_count.div_ceil(self.page_size)
        };
        if self.page >= self.total_pages {
            self.page = self.total_pages - 1;
        }
    }
}

pub fn create_state() -> RwSignal<UsersListState> {
    RwSignal::new(UsersListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recalc_pagination_clamps_page() {
        let mut state = UsersListState {
            total_count: 120,
            page_size: 50,
            page: 7,
            ..Default::default()
        };
        state.recalc_pagination();
        assert_eq!(state.total_pages, 3);
        assert_eq!(state.page, 2);

        state.total_count = 0;
        state.recalc_pagination();
        assert_eq!(state.total_pages, 1);
        assert_eq!(state.page, 0);
    }
}
