use serde::{Deserialize, Serialize};

/// Room category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomType {
    Single,
    #[default]
    Double,
    Twin,
    Suite,
    Family,
}

impl RoomType {
    pub fn code(&self) -> &'static str {
        match self {
            RoomType::Single => "single",
            RoomType::Double => "double",
            RoomType::Twin => "twin",
            RoomType::Suite => "suite",
            RoomType::Family => "family",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            RoomType::Single => "Single",
            RoomType::Double => "Double",
            RoomType::Twin => "Twin",
            RoomType::Suite => "Suite",
            RoomType::Family => "Family",
        }
    }

    /// Guests the category is normally sold for
    pub fn default_capacity(&self) -> i32 {
        match self {
            RoomType::Single => 1,
            RoomType::Double | RoomType::Twin => 2,
            RoomType::Suite => 3,
            RoomType::Family => 4,
        }
    }

    pub fn all() -> Vec<RoomType> {
        vec![
            RoomType::Single,
            RoomType::Double,
            RoomType::Twin,
            RoomType::Suite,
            RoomType::Family,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "single" => Some(RoomType::Single),
            "double" => Some(RoomType::Double),
            "twin" => Some(RoomType::Twin),
            "suite" => Some(RoomType::Suite),
            "family" => Some(RoomType::Family),
            _ => None,
        }
    }
}

impl std::fmt::Display for RoomType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_match_serde() {
        for room_type in RoomType::all() {
            let json = serde_json::to_string(&room_type).unwrap();
            assert_eq!(json, format!("\"{}\"", room_type.code()));
            assert_eq!(RoomType::from_code(room_type.code()), Some(room_type));
        }
        assert_eq!(RoomType::from_code("penthouse"), None);
    }
}
