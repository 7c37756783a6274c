use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use crate::enums::ReservationStatus;
use crate::shared::list::{DEFAULT_PAGE_SIZE, PageRequest};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReservationId(pub Uuid);

impl ReservationId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for ReservationId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(ReservationId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Guest stay. `base.code` is the confirmation number, `base.description`
/// is kept in sync with the guest name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reservation {
    #[serde(flatten)]
    pub base: BaseAggregate<ReservationId>,

    pub property_id: String,
    /// Unassigned until the front desk allocates a room
    pub room_id: Option<String>,
    pub guest_name: String,
    pub guest_email: String,
    pub guest_phone: String,
    pub check_in: NaiveDate,
    /// Departure day, not a night of the stay
    pub check_out: NaiveDate,
    pub adults: i32,
    pub children: i32,
    pub status: ReservationStatus,
    pub total_amount: f64,
    pub currency: String,
}

impl Reservation {
    pub fn new_for_insert(dto: &ReservationDto) -> Self {
        let base = BaseAggregate::new(ReservationId::new_v4(), String::new(), String::new());
        let mut reservation = Self {
            base,
            property_id: String::new(),
            room_id: None,
            guest_name: String::new(),
            guest_email: String::new(),
            guest_phone: String::new(),
            check_in: dto.check_in,
            check_out: dto.check_out,
            adults: 1,
            children: 0,
            status: ReservationStatus::Pending,
            total_amount: 0.0,
            currency: String::new(),
        };
        reservation.update(dto);
        reservation.status = dto.status.unwrap_or_default();
        reservation
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    /// Apply form values. Status changes go through [`Reservation::change_status`].
    pub fn update(&mut self, dto: &ReservationDto) {
        if let Some(code) = dto.code.as_ref().filter(|c| !c.trim().is_empty()) {
            self.base.code = code.trim().to_string();
        }
        self.guest_name = dto.guest_name.trim().to_string();
        self.base.description = self.guest_name.clone();
        self.base.set_comment(dto.comment.clone());
        self.property_id = dto.property_id.trim().to_string();
        self.room_id = dto.room_id.clone().filter(|r| !r.trim().is_empty());
        self.guest_email = dto.guest_email.trim().to_lowercase();
        self.guest_phone = dto.guest_phone.trim().to_string();
        self.check_in = dto.check_in;
        self.check_out = dto.check_out;
        self.adults = dto.adults;
        self.children = dto.children;
        self.total_amount = dto.total_amount;
        self.currency = dto.currency.trim().to_uppercase();
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.property_id.is_empty() {
            return Err("Reservation must belong to a property".into());
        }
        if self.guest_name.is_empty() {
            return Err("Guest name must not be empty".into());
        }
        if self.check_out <= self.check_in {
            return Err("Check-out must be after check-in".into());
        }
        if self.adults < 1 {
            return Err("At least one adult is required".into());
        }
        if self.children < 0 {
            return Err("Children must not be negative".into());
        }
        if !self.total_amount.is_finite() || self.total_amount < 0.0 {
            return Err("Total amount must not be negative".into());
        }
        if !self.guest_email.is_empty() && !self.guest_email.contains('@') {
            return Err("Guest email is not valid".into());
        }
        Ok(())
    }

    pub fn change_status(&mut self, next: ReservationStatus) -> Result<(), String> {
        if !self.status.can_transition_to(next) {
            return Err(format!(
                "Cannot change status from {} to {}",
                self.status.display_name(),
                next.display_name()
            ));
        }
        self.status = next;
        Ok(())
    }

    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days().max(0)
    }

    pub fn guests(&self) -> i32 {
        self.adults + self.children
    }

    /// Both reservations hold the same room on at least one night.
    ///
    /// Stays are half-open `[check_in, check_out)`: a departure and an arrival
    /// on the same day do not overlap. Cancelled and no-show reservations
    /// never overlap anything.
    pub fn overlaps(&self, other: &Reservation) -> bool {
        if self.base.id == other.base.id {
            return false;
        }
        if !self.status.is_active() || !other.status.is_active() {
            return false;
        }
        match (&self.room_id, &other.room_id) {
            (Some(a), Some(b)) if a == b => {
                self.check_in < other.check_out && other.check_in < self.check_out
            }
            _ => false,
        }
    }

    /// Stay covers `date` as a night
    pub fn is_in_house_on(&self, date: NaiveDate) -> bool {
        self.check_in <= date && date < self.check_out
    }

    /// Case-insensitive match on confirmation number, guest name and email
    pub fn matches_search(&self, needle: &str) -> bool {
        let needle = needle.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        self.base.code.to_lowercase().contains(&needle)
            || self.guest_name.to_lowercase().contains(&needle)
            || self.guest_email.contains(&needle)
    }
}

impl AggregateRoot for Reservation {
    type Id = ReservationId;

    fn id(&self) -> Self::Id {
        self.base.id
    }

    fn code(&self) -> &str {
        &self.base.code
    }

    fn description(&self) -> &str {
        &self.base.description
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.base.metadata
    }

    fn metadata_mut(&mut self) -> &mut EntityMetadata {
        &mut self.base.metadata
    }

    fn aggregate_index() -> &'static str {
        "a004"
    }

    fn collection_name() -> &'static str {
        "reservation"
    }

    fn element_name() -> &'static str {
        "Reservation"
    }

    fn list_name() -> &'static str {
        "Reservations"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationDto {
    pub id: Option<String>,
    /// Confirmation number, generated when empty
    pub code: Option<String>,
    pub comment: Option<String>,
    pub property_id: String,
    pub room_id: Option<String>,
    pub guest_name: String,
    pub guest_email: String,
    pub guest_phone: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub adults: i32,
    pub children: i32,
    /// Only honoured on create
    pub status: Option<ReservationStatus>,
    pub total_amount: f64,
    pub currency: String,
}

impl ReservationDto {
    /// Empty form: one adult, one night starting on `check_in`
    pub fn new_for(check_in: NaiveDate) -> Self {
        Self {
            id: None,
            code: None,
            comment: None,
            property_id: String::new(),
            room_id: None,
            guest_name: String::new(),
            guest_email: String::new(),
            guest_phone: String::new(),
            check_in,
            check_out: check_in.succ_opt().unwrap_or(check_in),
            adults: 1,
            children: 0,
            status: None,
            total_amount: 0.0,
            currency: String::new(),
        }
    }
}

impl From<&Reservation> for ReservationDto {
    fn from(r: &Reservation) -> Self {
        Self {
            id: Some(r.to_string_id()),
            code: Some(r.base.code.clone()),
            comment: r.base.comment.clone(),
            property_id: r.property_id.clone(),
            room_id: r.room_id.clone(),
            guest_name: r.guest_name.clone(),
            guest_email: r.guest_email.clone(),
            guest_phone: r.guest_phone.clone(),
            check_in: r.check_in,
            check_out: r.check_out,
            adults: r.adults,
            children: r.children,
            status: Some(r.status),
            total_amount: r.total_amount,
            currency: r.currency.clone(),
        }
    }
}

/// Body of `POST /api/reservations/:id/status`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusChangeRequest {
    pub status: ReservationStatus,
}

/// Query parameters of `GET /api/reservations`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationListQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ReservationStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_page_size")]
    pub page_size: u64,
}

fn default_page_size() -> u64 {
    DEFAULT_PAGE_SIZE
}

impl ReservationListQuery {
    pub fn page_request(&self) -> PageRequest {
        PageRequest::new(self.page, self.page_size)
    }
}

impl Default for ReservationListQuery {
    fn default() -> Self {
        Self {
            property_id: None,
            status: None,
            search: None,
            page: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn booking(room: Option<&str>, check_in: &str, check_out: &str) -> Reservation {
        let mut dto = ReservationDto::new_for(date(check_in));
        dto.check_out = date(check_out);
        dto.property_id = "p1".into();
        dto.room_id = room.map(str::to_string);
        dto.guest_name = "Ada Lovelace".into();
        dto.total_amount = 250.0;
        dto.currency = "eur".into();
        Reservation::new_for_insert(&dto)
    }

    #[test]
    fn test_valid_booking() {
        let r = booking(Some("r1"), "2025-03-10", "2025-03-13");
        assert!(r.validate().is_ok());
        assert_eq!(r.nights(), 3);
        assert_eq!(r.currency, "EUR");
        assert_eq!(r.base.description, "Ada Lovelace");
        assert_eq!(r.status, ReservationStatus::Pending);
    }

    #[test]
    fn test_dates_must_be_ordered() {
        let same_day = booking(None, "2025-03-10", "2025-03-10");
        assert_eq!(
            same_day.validate().unwrap_err(),
            "Check-out must be after check-in"
        );
        assert_eq!(same_day.nights(), 0);
    }

    #[test]
    fn test_other_validation() {
        let mut r = booking(None, "2025-03-10", "2025-03-11");
        r.adults = 0;
        assert!(r.validate().is_err());

        let mut r = booking(None, "2025-03-10", "2025-03-11");
        r.total_amount = -1.0;
        assert!(r.validate().is_err());

        let mut r = booking(None, "2025-03-10", "2025-03-11");
        r.guest_name.clear();
        assert!(r.validate().is_err());
    }

    #[test]
    fn test_overlap_is_half_open() {
        let a = booking(Some("r1"), "2025-03-10", "2025-03-13");
        let back_to_back = booking(Some("r1"), "2025-03-13", "2025-03-15");
        let inside = booking(Some("r1"), "2025-03-11", "2025-03-12");
        let other_room = booking(Some("r2"), "2025-03-11", "2025-03-12");
        let unassigned = booking(None, "2025-03-11", "2025-03-12");

        assert!(!a.overlaps(&back_to_back));
        assert!(a.overlaps(&inside));
        assert!(inside.overlaps(&a));
        assert!(!a.overlaps(&other_room));
        assert!(!a.overlaps(&unassigned));
        assert!(!a.overlaps(&a.clone()));
    }

    #[test]
    fn test_inactive_reservations_do_not_overlap() {
        let a = booking(Some("r1"), "2025-03-10", "2025-03-13");
        let mut cancelled = booking(Some("r1"), "2025-03-11", "2025-03-12");
        cancelled.change_status(ReservationStatus::Cancelled).unwrap();
        assert!(!a.overlaps(&cancelled));

        let mut no_show = booking(Some("r1"), "2025-03-11", "2025-03-12");
        no_show.status = ReservationStatus::NoShow;
        assert!(!no_show.overlaps(&a));
    }

    #[test]
    fn test_change_status() {
        let mut r = booking(Some("r1"), "2025-03-10", "2025-03-13");
        assert!(r.change_status(ReservationStatus::CheckedIn).is_err());
        r.change_status(ReservationStatus::Confirmed).unwrap();
        r.change_status(ReservationStatus::CheckedIn).unwrap();
        assert_eq!(
            r.change_status(ReservationStatus::Cancelled).unwrap_err(),
            "Cannot change status from Checked in to Cancelled"
        );
    }

    #[test]
    fn test_in_house_and_search() {
        let r = booking(Some("r1"), "2025-03-10", "2025-03-13");
        assert!(r.is_in_house_on(date("2025-03-10")));
        assert!(r.is_in_house_on(date("2025-03-12")));
        assert!(!r.is_in_house_on(date("2025-03-13")));

        assert!(r.matches_search("lovel"));
        assert!(r.matches_search(""));
        assert!(!r.matches_search("babbage"));
    }

    #[test]
    fn test_list_query_defaults() {
        let q: ReservationListQuery = serde_json::from_str(r#"{"status":"checked_in"}"#).unwrap();
        assert_eq!(q.status, Some(ReservationStatus::CheckedIn));
        assert_eq!(q.page_request(), PageRequest::default());
    }
}
