use serde::{Deserialize, Serialize};

/// Dashboard context that owns a navigation path.
///
/// `User` is the day-to-day operational view (reservations, rooms, monitoring),
/// `Admin` is the administrative view (properties, customers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DashboardView {
    Admin,
    #[default]
    User,
}

impl DashboardView {
    /// Tag used for persistence and logging
    pub fn as_str(&self) -> &'static str {
        match self {
            DashboardView::Admin => "admin",
            DashboardView::User => "user",
        }
    }

    /// Human readable label for the UI
    pub fn display_name(&self) -> &'static str {
        match self {
            DashboardView::Admin => "Admin",
            DashboardView::User => "User",
        }
    }

    /// Parse a persisted tag. Unknown tags yield `None`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "admin" => Some(DashboardView::Admin),
            "user" => Some(DashboardView::User),
            _ => None,
        }
    }

    /// The other view
    pub fn toggled(&self) -> Self {
        match self {
            DashboardView::Admin => DashboardView::User,
            DashboardView::User => DashboardView::Admin,
        }
    }

    pub fn all() -> [DashboardView; 2] {
        [DashboardView::User, DashboardView::Admin]
    }
}

impl std::fmt::Display for DashboardView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_round_trip() {
        for view in DashboardView::all() {
            assert_eq!(DashboardView::from_tag(view.as_str()), Some(view));
        }
        assert_eq!(DashboardView::from_tag("Admin"), None);
        assert_eq!(DashboardView::from_tag(""), None);
    }

    #[test]
    fn test_serde_uses_lowercase_tags() {
        assert_eq!(
            serde_json::to_string(&DashboardView::Admin).unwrap(),
            "\"admin\""
        );
        let parsed: DashboardView = serde_json::from_str("\"user\"").unwrap();
        assert_eq!(parsed, DashboardView::User);
    }

    #[test]
    fn test_toggled() {
        assert_eq!(DashboardView::Admin.toggled(), DashboardView::User);
        assert_eq!(DashboardView::User.toggled(), DashboardView::Admin);
        assert_eq!(DashboardView::default(), DashboardView::User);
    }
}
