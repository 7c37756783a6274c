//! Route-to-view resolver
//!
//! Maps a URL pathname to the dashboard context that owns it. The table is an
//! ordered list (first match wins), sections are matched on whole path
//! segments: `/properties` and `/properties/42/edit` belong to `properties`,
//! `/property` and `/properties-archive` do not.
//!
//! Query strings and fragments are not stripped. Callers pass the router
//! pathname, so `/reservations?page=2` resolves to nothing.

use super::view::DashboardView;
use once_cell::sync::Lazy;

/// Sections owned by the admin dashboard
pub const ADMIN_SECTIONS: &[&str] = &["properties", "customers"];

/// Sections owned by the user dashboard
pub const USER_SECTIONS: &[&str] = &[
    "about",
    "access-provider",
    "analytics",
    "checkin-page",
    "company",
    "devices",
    "events",
    "mobile-cms",
    "monitoring",
    "orders",
    "payment-provider",
    "payments",
    "pms-provider",
    "products",
    "profile",
    "registration-forms",
    "reservations",
    "rooms",
    "tv",
    "users",
];

/// Built-in table, admin entries first
pub static ROUTE_TABLE: Lazy<RoutePatternTable> = Lazy::new(|| {
    let patterns = ADMIN_SECTIONS
        .iter()
        .map(|s| RoutePattern::new(s, DashboardView::Admin))
        .chain(
            USER_SECTIONS
                .iter()
                .map(|s| RoutePattern::new(s, DashboardView::User)),
        )
        .collect();
    RoutePatternTable::new(patterns).expect("built-in route table must be unambiguous")
});

/// Resolve the dashboard view for a pathname using the built-in table.
///
/// Returns `None` for shared routes (`/`, unknown sections, empty input).
pub fn resolve_view(path: &str) -> Option<DashboardView> {
    ROUTE_TABLE.resolve(path)
}

// ============================================================================
// Pattern
// ============================================================================

/// A named application section and the view that owns it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoutePattern {
    pub section: &'static str,
    pub view: DashboardView,
}

impl RoutePattern {
    pub const fn new(section: &'static str, view: DashboardView) -> Self {
        Self { section, view }
    }

    /// `true` if `path` is `/<section>` or lies below it.
    ///
    /// The character right after the section name must be end of input or `/`.
    pub fn matches(&self, path: &str) -> bool {
        path.strip_prefix('/')
            .and_then(|rest| rest.strip_prefix(self.section))
            .map(|rest| rest.is_empty() || rest.starts_with('/'))
            .unwrap_or(false)
    }

    /// Root path of the section, e.g. `/rooms`
    pub fn root_path(&self) -> String {
        format!("/{}", self.section)
    }
}

// ============================================================================
// Table
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteTableError {
    /// Section name is empty or contains a path separator
    InvalidSection(&'static str),
    /// Two entries claim overlapping paths
    Ambiguous {
        first: RoutePattern,
        second: RoutePattern,
    },
}

impl std::fmt::Display for RouteTableError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RouteTableError::InvalidSection(section) => {
                write!(f, "invalid section name: {:?}", section)
            }
            RouteTableError::Ambiguous { first, second } => write!(
                f,
                "sections {:?} ({}) and {:?} ({}) match the same paths",
                first.section, first.view, second.section, second.view
            ),
        }
    }
}

impl std::error::Error for RouteTableError {}

/// Ordered, immutable list of route patterns
#[derive(Debug, Clone)]
pub struct RoutePatternTable {
    patterns: Vec<RoutePattern>,
}

impl RoutePatternTable {
    /// Build a table, rejecting entries that could claim the same path.
    pub fn new(patterns: Vec<RoutePattern>) -> Result<Self, RouteTableError> {
        for pattern in &patterns {
            if pattern.section.is_empty() || pattern.section.contains('/') {
                return Err(RouteTableError::InvalidSection(pattern.section));
            }
        }

        for (i, first) in patterns.iter().enumerate() {
            for second in &patterns[i + 1..] {
                if first.matches(&second.root_path()) || second.matches(&first.root_path()) {
                    return Err(RouteTableError::Ambiguous {
                        first: *first,
                        second: *second,
                    });
                }
            }
        }

        Ok(Self { patterns })
    }

    pub fn patterns(&self) -> &[RoutePattern] {
        &self.patterns
    }

    /// First pattern matching `path`
    pub fn find(&self, path: &str) -> Option<&RoutePattern> {
        self.patterns.iter().find(|p| p.matches(path))
    }

    pub fn resolve(&self, path: &str) -> Option<DashboardView> {
        self.find(path).map(|p| p.view)
    }

    /// Sections owned by `view`, in table order
    pub fn sections_for(&self, view: DashboardView) -> impl Iterator<Item = &'static str> + '_ {
        self.patterns
            .iter()
            .filter(move |p| p.view == view)
            .map(|p| p.section)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_sections_resolve_to_admin() {
        for section in ADMIN_SECTIONS {
            let root = format!("/{}", section);
            assert_eq!(resolve_view(&root), Some(DashboardView::Admin), "{}", root);
            for suffix in ["1", "123/edit", "new", "a/b/c/d"] {
                let nested = format!("/{}/{}", section, suffix);
                assert_eq!(
                    resolve_view(&nested),
                    Some(DashboardView::Admin),
                    "{}",
                    nested
                );
            }
        }
    }

    #[test]
    fn test_user_sections_resolve_to_user() {
        for section in USER_SECTIONS {
            let root = format!("/{}", section);
            assert_eq!(resolve_view(&root), Some(DashboardView::User), "{}", root);
            for suffix in ["1", "123/edit", "new", "a/b/c/d"] {
                let nested = format!("/{}/{}", section, suffix);
                assert_eq!(
                    resolve_view(&nested),
                    Some(DashboardView::User),
                    "{}",
                    nested
                );
            }
        }
    }

    #[test]
    fn test_shared_routes_have_no_view() {
        for path in ["/", "", "/unknown", "/dashboard", "/settings", "//", "properties"] {
            assert_eq!(resolve_view(path), None, "{:?}", path);
        }
    }

    #[test]
    fn test_partial_prefix_does_not_match() {
        for path in [
            "/property",
            "/customer",
            "/reservation",
            "/order",
            "/properties-archive",
            "/roomsx",
            "/user",
        ] {
            assert_eq!(resolve_view(path), None, "{:?}", path);
        }
    }

    #[test]
    fn test_trailing_slash() {
        assert_eq!(resolve_view("/properties/"), Some(DashboardView::Admin));
        assert_eq!(resolve_view("/reservations/"), Some(DashboardView::User));
    }

    #[test]
    fn test_query_and_fragment_are_not_stripped() {
        assert_eq!(resolve_view("/reservations?page=2"), None);
        assert_eq!(resolve_view("/reservations#section"), None);
        // Below the section boundary they are just part of a nested path
        assert_eq!(
            resolve_view("/reservations/1?tab=guest"),
            Some(DashboardView::User)
        );
    }

    #[test]
    fn test_deep_nesting() {
        assert_eq!(
            resolve_view("/reservations/123/edit"),
            Some(DashboardView::User)
        );
        let long = format!("/reservations/{}/edit", "a".repeat(100));
        assert_eq!(resolve_view(&long), Some(DashboardView::User));
        let very_long = format!("/properties/{}", "x/".repeat(10_000));
        assert_eq!(resolve_view(&very_long), Some(DashboardView::Admin));
    }

    #[test]
    fn test_odd_input_never_panics() {
        for path in [
            "/../properties",
            "/properties/../../etc/passwd",
            "/\u{0}",
            "/комнаты",
            "/rooms\u{1F3E8}",
            "\\properties",
            " /properties",
        ] {
            let _ = resolve_view(path);
        }
        assert_eq!(resolve_view("/../properties"), None);
        assert_eq!(resolve_view(" /properties"), None);
        assert_eq!(resolve_view("/rooms\u{1F3E8}"), None);
    }

    #[test]
    fn test_examples() {
        assert_eq!(resolve_view("/properties"), Some(DashboardView::Admin));
        assert_eq!(
            resolve_view("/properties/123/edit"),
            Some(DashboardView::Admin)
        );
        assert_eq!(
            resolve_view("/reservations/123"),
            Some(DashboardView::User)
        );
        assert_eq!(resolve_view("/"), None);
        assert_eq!(resolve_view("/property"), None);
        assert_eq!(resolve_view("/reservations?page=2"), None);
    }

    #[test]
    fn test_no_path_matches_two_patterns() {
        let patterns = ROUTE_TABLE.patterns();
        for pattern in patterns {
            for probe in [pattern.root_path(), format!("{}/x", pattern.root_path())] {
                let hits = patterns.iter().filter(|p| p.matches(&probe)).count();
                assert_eq!(hits, 1, "{} matched {} patterns", probe, hits);
            }
        }
    }

    #[test]
    fn test_order_does_not_change_results() {
        let mut reversed: Vec<RoutePattern> = ROUTE_TABLE.patterns().to_vec();
        reversed.reverse();
        let reversed = RoutePatternTable::new(reversed).unwrap();

        for pattern in ROUTE_TABLE.patterns() {
            for probe in [pattern.root_path(), format!("{}/7/edit", pattern.root_path())] {
                assert_eq!(ROUTE_TABLE.resolve(&probe), reversed.resolve(&probe));
            }
        }
    }

    #[test]
    fn test_table_order_is_admin_first() {
        let first_user = ROUTE_TABLE
            .patterns()
            .iter()
            .position(|p| p.view == DashboardView::User)
            .unwrap();
        assert!(ROUTE_TABLE.patterns()[..first_user]
            .iter()
            .all(|p| p.view == DashboardView::Admin));
        assert_eq!(first_user, ADMIN_SECTIONS.len());
    }

    #[test]
    fn test_sections_for() {
        let admin: Vec<_> = ROUTE_TABLE.sections_for(DashboardView::Admin).collect();
        assert_eq!(admin, ADMIN_SECTIONS.to_vec());
        let user: Vec<_> = ROUTE_TABLE.sections_for(DashboardView::User).collect();
        assert_eq!(user, USER_SECTIONS.to_vec());
    }

    #[test]
    fn test_duplicate_sections_are_rejected() {
        let result = RoutePatternTable::new(vec![
            RoutePattern::new("rooms", DashboardView::User),
            RoutePattern::new("rooms", DashboardView::Admin),
        ]);
        assert!(matches!(result, Err(RouteTableError::Ambiguous { .. })));
    }

    #[test]
    fn test_invalid_sections_are_rejected() {
        let empty = RoutePatternTable::new(vec![RoutePattern::new("", DashboardView::User)]);
        assert_eq!(empty.unwrap_err(), RouteTableError::InvalidSection(""));

        let nested = RoutePatternTable::new(vec![RoutePattern::new(
            "rooms/archive",
            DashboardView::User,
        )]);
        assert_eq!(
            nested.unwrap_err(),
            RouteTableError::InvalidSection("rooms/archive")
        );
    }

    #[test]
    fn test_prefix_sharing_sections_are_not_ambiguous() {
        let table = RoutePatternTable::new(vec![
            RoutePattern::new("pay", DashboardView::Admin),
            RoutePattern::new("payments", DashboardView::User),
        ])
        .unwrap();
        assert_eq!(table.resolve("/pay/1"), Some(DashboardView::Admin));
        assert_eq!(table.resolve("/payments/1"), Some(DashboardView::User));
        assert_eq!(table.resolve("/paym"), None);
    }
}
