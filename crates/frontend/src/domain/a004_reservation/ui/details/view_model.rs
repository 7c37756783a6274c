use chrono::Local;
use contracts::domain::a003_room::aggregate::{Room, RoomListQuery};
use contracts::domain::a004_reservation::aggregate::{Reservation, ReservationDto};
use contracts::domain::common::AggregateId;
use contracts::enums::ReservationStatus;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::{a003_room, a004_reservation::api};
use crate::layout::notifications::NotificationService;

/// Picker label, e.g. "204 Double (2)"
pub fn room_label(room: &Room) -> String {
    let mut label = format!(
        "{} {} ({})",
        room.base.code,
        room.room_type.display_name(),
        room.capacity
    );
    if !room.status.is_sellable() {
        label.push_str(&format!(" - {}", room.status.display_name()));
    }
    label
}

/// Switch the booking to another property.
///
/// The room belongs to the old property and is dropped; the currency is taken
/// from the property unless one was typed in.
pub fn apply_property(form: &mut ReservationDto, property_id: String, currency: Option<&str>) {
    if form.property_id != property_id {
        form.room_id = None;
    }
    form.property_id = property_id;
    if form.currency.trim().is_empty() {
        if let Some(currency) = currency {
            form.currency = currency.to_string();
        }
    }
}

#[derive(Clone, Copy)]
pub struct ReservationDetailsViewModel {
    pub form: RwSignal<ReservationDto>,
    pub rooms: RwSignal<Vec<Room>>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl ReservationDetailsViewModel {
    pub fn new(default_property: Option<String>) -> Self {
        let mut dto = ReservationDto::new_for(Local::now().date_naive());
        dto.property_id = default_property.unwrap_or_default();
        Self {
            form: RwSignal::new(dto),
            rooms: RwSignal::new(Vec::new()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with(|f| f.id.is_some())
    }

    /// Persisted status, `None` for a booking not saved yet
    pub fn status(&self) -> Option<ReservationStatus> {
        self.form.with(|f| f.id.as_ref().and(f.status))
    }

    pub fn is_read_only(&self) -> bool {
        self.status().map(|s| s.is_terminal()).unwrap_or(false)
    }

    pub fn room_options(&self) -> Vec<(String, String)> {
        self.rooms.with(|rooms| {
            rooms
                .iter()
                .map(|r| (r.base.id.as_string(), room_label(r)))
                .collect()
        })
    }

    pub fn load_if_needed(&self, id: Option<String>) {
        let this = *self;
        let Some(id) = id else {
            this.load_rooms();
            return;
        };
        spawn_local(async move {
            match api::fetch_by_id(&id).await {
                Ok(reservation) => {
                    this.form.set(ReservationDto::from(&reservation));
                    this.load_rooms();
                }
                Err(e) => this.error.set(Some(format!("Failed to load: {}", e))),
            }
        });
    }

    /// Rooms of the property currently on the form
    pub fn load_rooms(&self) {
        let property_id = self.form.with_untracked(|f| f.property_id.clone());
        let rooms = self.rooms;
        if property_id.is_empty() {
            rooms.set(Vec::new());
            return;
        }
        spawn_local(async move {
            let query = RoomListQuery {
                property_id: Some(property_id),
                status: None,
            };
            match a003_room::api::fetch_list(&query).await {
                Ok(list) => rooms.set(list),
                Err(e) => log::warn!("Rooms not available: {}", e),
            }
        });
    }

    pub fn save_command(&self, on_saved: Callback<String>) {
        let current = self.form.get_untracked();
        if let Err(e) = Reservation::new_for_insert(&current).validate() {
            self.error.set(Some(e));
            return;
        }

        let this = *self;
        this.saving.set(true);
        this.error.set(None);
        spawn_local(async move {
            match api::save(&current).await {
                Ok(id) => on_saved.run(id),
                Err(e) => this.error.set(Some(e)),
            }
            this.saving.set(false);
        });
    }

    pub fn change_status_command(&self, next: ReservationStatus, notifications: NotificationService) {
        let Some(id) = self.form.with_untracked(|f| f.id.clone()) else {
            return;
        };
        let this = *self;
        this.saving.set(true);
        this.error.set(None);
        spawn_local(async move {
            match api::change_status(&id, next).await {
                Ok(reservation) => {
                    this.form.set(ReservationDto::from(&reservation));
                    notifications.success(format!(
                        "Reservation {} is now {}",
                        reservation.base.code,
                        next.display_name()
                    ));
                }
                Err(e) => this.error.set(Some(e)),
            }
            this.saving.set(false);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use contracts::domain::a003_room::aggregate::RoomDto;
    use contracts::enums::{RoomStatus, RoomType};

    fn dto() -> ReservationDto {
        let mut dto = ReservationDto::new_for(NaiveDate::from_ymd_opt(2025, 3, 10).unwrap());
        dto.property_id = "p1".into();
        dto.room_id = Some("r1".into());
        dto
    }

    #[test]
    fn test_apply_property_drops_room_and_fills_currency() {
        let mut form = dto();
        apply_property(&mut form, "p2".into(), Some("EUR"));
        assert_eq!(form.property_id, "p2");
        assert_eq!(form.room_id, None);
        assert_eq!(form.currency, "EUR");

        form.room_id = Some("r9".into());
        form.currency = "USD".into();
        apply_property(&mut form, "p2".into(), Some("EUR"));
        assert_eq!(form.room_id.as_deref(), Some("r9"));
        assert_eq!(form.currency, "USD");
    }

    #[test]
    fn test_room_label() {
        let mut room = Room::new_for_insert(&RoomDto {
            code: Some("204".into()),
            property_id: "p1".into(),
            room_type: RoomType::Double,
            capacity: 2,
            ..Default::default()
        });
        assert_eq!(room_label(&room), "204 Double (2)");

        room.status = RoomStatus::OutOfService;
        assert!(room_label(&room).ends_with(RoomStatus::OutOfService.display_name()));
    }
}
