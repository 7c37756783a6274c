use serde::{Deserialize, Serialize};

/// Reservation lifecycle
///
/// ```text
/// Pending -> Confirmed -> CheckedIn -> CheckedOut
///    |           |-> Cancelled
///    |           `-> NoShow
///    `-> Cancelled
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReservationStatus {
    #[default]
    Pending,
    Confirmed,
    CheckedIn,
    CheckedOut,
    Cancelled,
    NoShow,
}

impl ReservationStatus {
    pub fn code(&self) -> &'static str {
        match self {
            ReservationStatus::Pending => "pending",
            ReservationStatus::Confirmed => "confirmed",
            ReservationStatus::CheckedIn => "checked_in",
            ReservationStatus::CheckedOut => "checked_out",
            ReservationStatus::Cancelled => "cancelled",
            ReservationStatus::NoShow => "no_show",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ReservationStatus::Pending => "Pending",
            ReservationStatus::Confirmed => "Confirmed",
            ReservationStatus::CheckedIn => "Checked in",
            ReservationStatus::CheckedOut => "Checked out",
            ReservationStatus::Cancelled => "Cancelled",
            ReservationStatus::NoShow => "No-show",
        }
    }

    /// Holds the room (takes part in overlap checks)
    pub fn is_active(&self) -> bool {
        !matches!(self, ReservationStatus::Cancelled | ReservationStatus::NoShow)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            ReservationStatus::CheckedOut | ReservationStatus::Cancelled | ReservationStatus::NoShow
        )
    }

    pub fn can_transition_to(&self, next: ReservationStatus) -> bool {
        use ReservationStatus::*;
        if *self == next {
            return true;
        }
        matches!(
            (self, next),
            (Pending, Confirmed)
                | (Pending, Cancelled)
                | (Confirmed, CheckedIn)
                | (Confirmed, Cancelled)
                | (Confirmed, NoShow)
                | (CheckedIn, CheckedOut)
        )
    }

    /// Statuses reachable from this one, excluding itself
    pub fn next_statuses(&self) -> Vec<ReservationStatus> {
        Self::all()
            .into_iter()
            .filter(|s| s != self && self.can_transition_to(*s))
            .collect()
    }

    pub fn all() -> Vec<ReservationStatus> {
        vec![
            ReservationStatus::Pending,
            ReservationStatus::Confirmed,
            ReservationStatus::CheckedIn,
            ReservationStatus::CheckedOut,
            ReservationStatus::Cancelled,
            ReservationStatus::NoShow,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "pending" => Some(ReservationStatus::Pending),
            "confirmed" => Some(ReservationStatus::Confirmed),
            "checked_in" => Some(ReservationStatus::CheckedIn),
            "checked_out" => Some(ReservationStatus::CheckedOut),
            "cancelled" => Some(ReservationStatus::Cancelled),
            "no_show" => Some(ReservationStatus::NoShow),
            _ => None,
        }
    }
}

impl std::fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::ReservationStatus::*;
    use super::*;

    #[test]
    fn test_allowed_transitions() {
        assert!(Pending.can_transition_to(Confirmed));
        assert!(Pending.can_transition_to(Cancelled));
        assert!(Confirmed.can_transition_to(CheckedIn));
        assert!(Confirmed.can_transition_to(NoShow));
        assert!(CheckedIn.can_transition_to(CheckedOut));
    }

    #[test]
    fn test_rejected_transitions() {
        assert!(!Pending.can_transition_to(CheckedIn));
        assert!(!CheckedIn.can_transition_to(Cancelled));
        assert!(!CheckedOut.can_transition_to(Pending));
        assert!(!Cancelled.can_transition_to(Confirmed));
        assert!(!NoShow.can_transition_to(CheckedIn));
    }

    #[test]
    fn test_same_status_is_allowed() {
        for status in ReservationStatus::all() {
            assert!(status.can_transition_to(status));
        }
    }

    #[test]
    fn test_terminal_statuses_have_no_next() {
        for status in ReservationStatus::all() {
            assert_eq!(status.is_terminal(), status.next_statuses().is_empty());
        }
        assert_eq!(Confirmed.next_statuses(), vec![CheckedIn, Cancelled, NoShow]);
    }

    #[test]
    fn test_codes() {
        for status in ReservationStatus::all() {
            assert_eq!(ReservationStatus::from_code(status.code()), Some(status));
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.code()));
        }
    }
}
