//! Presentation of route table sections: menu labels, icons, access

/// Sections shown only to administrators, whatever view owns them
const ADMIN_ONLY_SECTIONS: &[&str] = &["users", "customers"];

/// Words kept as acronyms in labels
const ACRONYMS: &[&str] = &["tv", "pms", "cms"];

/// Menu label from a section slug: `access-provider` -> `Access Provider`
pub fn section_label(section: &str) -> String {
    section
        .split('-')
        .filter(|w| !w.is_empty())
        .map(|word| {
            if ACRONYMS.contains(&word) {
                word.to_uppercase()
            } else {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect(),
                    None => String::new(),
                }
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn section_icon(section: &str) -> &'static str {
    match section {
        "properties" => "building",
        "customers" => "customers",
        "rooms" => "bed",
        "reservations" => "calendar",
        "users" => "users",
        "profile" => "user",
        "monitoring" | "analytics" | "events" => "activity",
        "payments" | "payment-provider" => "payments",
        "orders" => "orders",
        "products" => "products",
        "tv" | "devices" => "tv",
        _ => "item",
    }
}

pub fn is_admin_only(section: &str) -> bool {
    ADMIN_ONLY_SECTIONS.contains(&section)
}

/// Section slug of a pathname (`/rooms/12` -> `rooms`)
pub fn section_of(path: &str) -> Option<&str> {
    path.strip_prefix('/')?
        .split('/')
        .next()
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::dashboard_view::{DashboardView, ROUTE_TABLE};

    #[test]
    fn test_section_label() {
        assert_eq!(section_label("rooms"), "Rooms");
        assert_eq!(section_label("access-provider"), "Access Provider");
        assert_eq!(section_label("pms-provider"), "PMS Provider");
        assert_eq!(section_label("mobile-cms"), "Mobile CMS");
        assert_eq!(section_label("tv"), "TV");
        assert_eq!(section_label(""), "");
    }

    #[test]
    fn test_every_section_has_a_label() {
        for view in DashboardView::all() {
            for section in ROUTE_TABLE.sections_for(view) {
                assert!(!section_label(section).is_empty(), "{}", section);
            }
        }
    }

    #[test]
    fn test_section_of() {
        assert_eq!(section_of("/rooms/12"), Some("rooms"));
        assert_eq!(section_of("/tv"), Some("tv"));
        assert_eq!(section_of("/"), None);
        assert_eq!(section_of(""), None);
    }

    #[test]
    fn test_admin_only() {
        assert!(is_admin_only("users"));
        assert!(!is_admin_only("rooms"));
    }
}
