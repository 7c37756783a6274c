//! Shared helpers for list pages: sorting and search
use std::cmp::Ordering;

/// Row types that can be sorted by a named column
pub trait Sortable {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Row types that can be filtered by a free-text query
pub trait Searchable {
    fn matches_filter(&self, filter: &str) -> bool;
}

pub fn sort_list<T: Sortable>(items: &mut [T], field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// Keep rows matching `filter`; an empty filter keeps everything
pub fn filter_list<T: Searchable>(items: Vec<T>, filter: &str) -> Vec<T> {
    if filter.trim().is_empty() {
        return items;
    }
    items
        .into_iter()
        .filter(|item| item.matches_filter(filter))
        .collect()
}

/// Case-insensitive string ordering
pub fn cmp_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

pub fn get_sort_class(current_field: &str, field: &str) -> &'static str {
    if current_field == field {
        "table__sort-indicator table__sort-indicator--active"
    } else {
        "table__sort-indicator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Row(&'static str, i32);

    impl Sortable for Row {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "name" => cmp_text(self.0, other.0),
                _ => self.1.cmp(&other.1),
            }
        }
    }

    impl Searchable for Row {
        fn matches_filter(&self, filter: &str) -> bool {
            self.0.to_lowercase().contains(&filter.to_lowercase())
        }
    }

    #[test]
    fn test_sort_list() {
        let mut rows = vec![Row("b", 1), Row("A", 3), Row("c", 2)];
        sort_list(&mut rows, "name", true);
        assert_eq!(rows[0], Row("A", 3));
        sort_list(&mut rows, "n", false);
        assert_eq!(rows[0], Row("A", 3));
        assert_eq!(rows[2], Row("b", 1));
    }

    #[test]
    fn test_filter_list() {
        let rows = vec![Row("Seaside", 1), Row("Alpine", 2)];
        assert_eq!(filter_list(rows, "  ").len(), 2);
        let rows = vec![Row("Seaside", 1), Row("Alpine", 2)];
        assert_eq!(filter_list(rows, "SEA"), vec![Row("Seaside", 1)]);
    }

    #[test]
    fn test_sort_indicator() {
        assert_eq!(get_sort_indicator("code", "code", true), " ▲");
        assert_eq!(get_sort_indicator("code", "code", false), " ▼");
        assert_eq!(get_sort_indicator("code", "name", true), " ⇅");
    }
}
