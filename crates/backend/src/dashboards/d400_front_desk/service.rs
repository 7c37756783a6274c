use anyhow::Result;
use chrono::{Local, NaiveDate};
use contracts::dashboards::d400_front_desk::dto::{FrontDeskRequest, FrontDeskSummary};
use contracts::domain::a003_room::aggregate::{Room, RoomListQuery};
use contracts::domain::a004_reservation::aggregate::Reservation;
use contracts::enums::{ReservationStatus, RoomStatus};

use crate::domain::{a003_room, a004_reservation};

/// Build the front desk summary for one business date
pub async fn get_front_desk(request: FrontDeskRequest) -> Result<FrontDeskSummary> {
    let date = match request.date.as_deref() {
        Some(s) if !s.is_empty() => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map_err(|e| anyhow::anyhow!("Invalid date {:?}: {}", s, e))?,
        _ => Local::now().date_naive(),
    };
    let property_id = request.property_id.filter(|p| !p.is_empty());

    let rooms = a003_room::repository::list(&RoomListQuery {
        property_id: property_id.clone(),
        status: None,
    })
    .await?;
    let reservations =
        a004_reservation::repository::list_from_date(property_id.as_deref(), date).await?;

    Ok(summarize(date, property_id, &rooms, &reservations))
}

/// Count rooms by housekeeping state and reservations by their role on `date`
pub fn summarize(
    date: NaiveDate,
    property_id: Option<String>,
    rooms: &[Room],
    reservations: &[Reservation],
) -> FrontDeskSummary {
    let mut summary = FrontDeskSummary {
        date: date.format("%Y-%m-%d").to_string(),
        property_id,
        total_rooms: rooms.len() as u32,
        ..Default::default()
    };

    for room in rooms {
        match room.status {
            RoomStatus::Available => summary.available_rooms += 1,
            RoomStatus::Occupied => summary.occupied_rooms += 1,
            RoomStatus::Cleaning => summary.cleaning_rooms += 1,
            RoomStatus::OutOfService => summary.out_of_service_rooms += 1,
        }
    }

    for r in reservations.iter().filter(|r| r.status.is_active()) {
        if r.check_in == date {
            summary.arrivals += 1;
        }
        if r.check_out == date {
            summary.departures += 1;
        }
        if r.is_in_house_on(date) {
            summary.in_house += 1;
        }
        if r.status == ReservationStatus::Pending {
            summary.pending_reservations += 1;
        }
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a003_room::aggregate::RoomDto;
    use contracts::domain::a004_reservation::aggregate::ReservationDto;

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn room(number: &str, status: RoomStatus) -> Room {
        let mut room = Room::new_for_insert(&RoomDto {
            code: Some(number.into()),
            property_id: "p1".into(),
            ..Default::default()
        });
        room.status = status;
        room
    }

    fn stay(check_in: &str, check_out: &str, status: ReservationStatus) -> Reservation {
        let mut dto = ReservationDto::new_for(day(check_in));
        dto.check_out = day(check_out);
        dto.property_id = "p1".into();
        dto.guest_name = "Guest".into();
        dto.status = Some(status);
        Reservation::new_for_insert(&dto)
    }

    #[test]
    fn test_summarize_counts_rooms() {
        let rooms = vec![
            room("101", RoomStatus::Available),
            room("102", RoomStatus::Occupied),
            room("103", RoomStatus::Cleaning),
            room("104", RoomStatus::OutOfService),
            room("105", RoomStatus::Available),
        ];
        let s = summarize(day("2025-06-01"), None, &rooms, &[]);
        assert_eq!(s.total_rooms, 5);
        assert_eq!(s.available_rooms, 2);
        assert_eq!(s.occupied_rooms, 1);
        assert_eq!(s.cleaning_rooms, 1);
        assert_eq!(s.out_of_service_rooms, 1);
        assert_eq!(s.date, "2025-06-01");
    }

    #[test]
    fn test_summarize_counts_movements() {
        let today = day("2025-06-10");
        let reservations = vec![
            stay("2025-06-10", "2025-06-12", ReservationStatus::Confirmed),
            stay("2025-06-08", "2025-06-10", ReservationStatus::CheckedIn),
            stay("2025-06-09", "2025-06-11", ReservationStatus::CheckedIn),
            stay("2025-06-10", "2025-06-11", ReservationStatus::Pending),
            stay("2025-06-10", "2025-06-13", ReservationStatus::Cancelled),
        ];
        let s = summarize(today, Some("p1".into()), &[], &reservations);
        assert_eq!(s.arrivals, 2);
        assert_eq!(s.departures, 1);
        // The departing stay no longer covers tonight
        assert_eq!(s.in_house, 3);
        assert_eq!(s.pending_reservations, 1);
        assert_eq!(s.property_id.as_deref(), Some("p1"));
    }
}
