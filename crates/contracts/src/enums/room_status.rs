use serde::{Deserialize, Serialize};

/// Housekeeping state of a room
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomStatus {
    #[default]
    Available,
    Occupied,
    Cleaning,
    OutOfService,
}

impl RoomStatus {
    pub fn code(&self) -> &'static str {
        match self {
            RoomStatus::Available => "available",
            RoomStatus::Occupied => "occupied",
            RoomStatus::Cleaning => "cleaning",
            RoomStatus::OutOfService => "out_of_service",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            RoomStatus::Available => "Available",
            RoomStatus::Occupied => "Occupied",
            RoomStatus::Cleaning => "Cleaning",
            RoomStatus::OutOfService => "Out of service",
        }
    }

    /// Can be handed to a new guest right now
    pub fn is_sellable(&self) -> bool {
        matches!(self, RoomStatus::Available)
    }

    pub fn all() -> Vec<RoomStatus> {
        vec![
            RoomStatus::Available,
            RoomStatus::Occupied,
            RoomStatus::Cleaning,
            RoomStatus::OutOfService,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "available" => Some(RoomStatus::Available),
            "occupied" => Some(RoomStatus::Occupied),
            "cleaning" => Some(RoomStatus::Cleaning),
            "out_of_service" => Some(RoomStatus::OutOfService),
            _ => None,
        }
    }
}

impl std::fmt::Display for RoomStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code() {
        for status in RoomStatus::all() {
            assert_eq!(RoomStatus::from_code(status.code()), Some(status));
        }
        assert_eq!(
            serde_json::to_string(&RoomStatus::OutOfService).unwrap(),
            "\"out_of_service\""
        );
        assert!(RoomStatus::Available.is_sellable());
        assert!(!RoomStatus::Cleaning.is_sellable());
    }
}
