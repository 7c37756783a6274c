use serde::{Deserialize, Serialize};

/// Request for the front desk dashboard
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrontDeskRequest {
    /// All properties when `None`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property_id: Option<String>,
    /// Business date in format "YYYY-MM-DD", today when `None`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

/// Today's operational picture of one or all properties
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrontDeskSummary {
    /// Business date in format "YYYY-MM-DD"
    pub date: String,
    pub property_id: Option<String>,
    pub total_rooms: u32,
    pub available_rooms: u32,
    pub occupied_rooms: u32,
    pub cleaning_rooms: u32,
    pub out_of_service_rooms: u32,
    /// Active reservations starting today
    pub arrivals: u32,
    /// Active reservations ending today
    pub departures: u32,
    /// Reservations covering tonight
    pub in_house: u32,
    pub pending_reservations: u32,
}

impl FrontDeskSummary {
    /// Share of sellable rooms occupied tonight, 0..=1
    pub fn occupancy_rate(&self) -> f64 {
        let sellable = self.total_rooms.saturating_sub(self.out_of_service_rooms);
        if sellable == 0 {
            return 0.0;
        }
        (self.in_house as f64 / sellable as f64).min(1.0)
    }

    /// Occupancy as "NN%"
    pub fn occupancy_label(&self) -> String {
        format!("{:.0}%", self.occupancy_rate() * 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_occupancy_rate() {
        let summary = FrontDeskSummary {
            total_rooms: 10,
            out_of_service_rooms: 2,
            in_house: 6,
            ..Default::default()
        };
        assert!((summary.occupancy_rate() - 0.75).abs() < f64::EPSILON);
        assert_eq!(summary.occupancy_label(), "75%");
    }

    #[test]
    fn test_occupancy_without_rooms() {
        let summary = FrontDeskSummary {
            in_house: 3,
            ..Default::default()
        };
        assert_eq!(summary.occupancy_rate(), 0.0);

        let overbooked = FrontDeskSummary {
            total_rooms: 2,
            in_house: 3,
            ..Default::default()
        };
        assert_eq!(overbooked.occupancy_rate(), 1.0);
    }
}
