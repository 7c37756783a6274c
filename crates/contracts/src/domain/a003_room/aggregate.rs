use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use crate::enums::{RoomStatus, RoomType};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoomId(pub Uuid);

impl RoomId {
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

impl AggregateId for RoomId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(RoomId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Sellable room of a property. `base.code` is the room number.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    #[serde(flatten)]
    pub base: BaseAggregate<RoomId>,

    pub property_id: String,
    pub room_type: RoomType,
    pub floor: i32,
    pub capacity: i32,
    pub status: RoomStatus,
}

impl Room {
    pub fn new_for_insert(dto: &RoomDto) -> Self {
        let base = BaseAggregate::new(RoomId::new_v4(), String::new(), String::new());
        let mut room = Self {
            base,
            property_id: String::new(),
            room_type: RoomType::default(),
            floor: 0,
            capacity: 0,
            status: RoomStatus::default(),
        };
        room.update(dto);
        room
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    pub fn update(&mut self, dto: &RoomDto) {
        self.base.code = dto.code.clone().unwrap_or_default().trim().to_string();
        self.base.description = if dto.description.trim().is_empty() {
            // "204 Double" when no name is given
            format!("{} {}", self.base.code, dto.room_type.display_name())
                .trim()
                .to_string()
        } else {
            dto.description.trim().to_string()
        };
        self.base.set_comment(dto.comment.clone());
        self.property_id = dto.property_id.trim().to_string();
        self.room_type = dto.room_type;
        self.floor = dto.floor;
        self.capacity = dto.capacity;
        self.status = dto.status;
    }

    pub fn validate(&self) -> Result<(), String> {
        self.base.validate_base(Self::element_name())?;
        if self.base.code.is_empty() {
            return Err("Room number must not be empty".into());
        }
        if self.property_id.is_empty() {
            return Err("Room must belong to a property".into());
        }
        if self.capacity < 1 {
            return Err("Capacity must be at least 1".into());
        }
        Ok(())
    }

    /// Room can host `guests` people
    pub fn fits(&self, guests: i32) -> bool {
        guests <= self.capacity
    }
}

impl AggregateRoot for Room {
    type Id = RoomId;

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
        "a003"
    }

    fn collection_name() -> &'static str {
        "room"
    }

    fn element_name() -> &'static str {
        "Room"
    }

    fn list_name() -> &'static str {
        "Rooms"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomDto {
    pub id: Option<String>,
    /// Room number
    pub code: Option<String>,
    pub description: String,
    pub comment: Option<String>,
    pub property_id: String,
    pub room_type: RoomType,
    pub floor: i32,
    pub capacity: i32,
    pub status: RoomStatus,
}

impl Default for RoomDto {
    fn default() -> Self {
        let room_type = RoomType::default();
        Self {
            id: None,
            code: None,
            description: String::new(),
            comment: None,
            property_id: String::new(),
            room_type,
            floor: 1,
            capacity: room_type.default_capacity(),
            status: RoomStatus::default(),
        }
    }
}

impl From<&Room> for RoomDto {
    fn from(r: &Room) -> Self {
        Self {
            id: Some(r.to_string_id()),
            code: Some(r.base.code.clone()),
            description: r.base.description.clone(),
            comment: r.base.comment.clone(),
            property_id: r.property_id.clone(),
            room_type: r.room_type,
            floor: r.floor,
            capacity: r.capacity,
            status: r.status,
        }
    }
}

/// Query parameters of `GET /api/rooms`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoomListQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<RoomStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto() -> RoomDto {
        RoomDto {
            code: Some("204".into()),
            property_id: "p1".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_default_name() {
        let room = Room::new_for_insert(&dto());
        assert_eq!(room.base.description, "204 Double");
        assert_eq!(room.capacity, 2);
        assert!(room.validate().is_ok());
    }

    #[test]
    fn test_validation() {
        let mut d = dto();
        d.capacity = 0;
        assert!(Room::new_for_insert(&d).validate().is_err());

        let mut d = dto();
        d.property_id = " ".into();
        assert!(Room::new_for_insert(&d).validate().is_err());

        let mut d = dto();
        d.code = None;
        d.description = "Garden room".into();
        assert_eq!(
            Room::new_for_insert(&d).validate().unwrap_err(),
            "Room number must not be empty"
        );
    }

    #[test]
    fn test_fits() {
        let room = Room::new_for_insert(&dto());
        assert!(room.fits(2));
        assert!(!room.fits(3));
    }
}
