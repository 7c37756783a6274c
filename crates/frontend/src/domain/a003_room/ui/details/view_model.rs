use contracts::domain::a003_room::aggregate::{Room, RoomDto};
use contracts::enums::RoomType;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a003_room::api;

/// New form values after picking a room type.
///
/// A new room takes the type's usual capacity; an existing room keeps its own.
pub fn apply_room_type(form: &mut RoomDto, room_type: RoomType) {
    if form.id.is_none() {
        form.capacity = room_type.default_capacity();
    }
    form.room_type = room_type;
}

#[derive(Clone, Copy)]
pub struct RoomDetailsViewModel {
    pub form: RwSignal<RoomDto>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl RoomDetailsViewModel {
    pub fn new(default_property: Option<String>) -> Self {
        Self {
            form: RwSignal::new(RoomDto {
                property_id: default_property.unwrap_or_default(),
                ..Default::default()
            }),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with(|f| f.id.is_some())
    }

    pub fn load_if_needed(&self, id: Option<String>) {
        let Some(id) = id else { return };
        let this = *self;
        spawn_local(async move {
            match api::fetch_by_id(&id).await {
                Ok(room) => this.form.set(RoomDto::from(&room)),
                Err(e) => this.error.set(Some(format!("Failed to load: {}", e))),
            }
        });
    }

    pub fn save_command(&self, on_saved: Callback<String>) {
        let current = self.form.get_untracked();
        if let Err(e) = Room::new_for_insert(&current).validate() {
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
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_type_sets_capacity_for_new_rooms_only() {
        let mut form = RoomDto::default();
        apply_room_type(&mut form, RoomType::Family);
        assert_eq!(form.capacity, RoomType::Family.default_capacity());

        let mut existing = RoomDto {
            id: Some("r1".into()),
            capacity: 3,
            ..Default::default()
        };
        apply_room_type(&mut existing, RoomType::Single);
        assert_eq!(existing.capacity, 3);
        assert_eq!(existing.room_type, RoomType::Single);
    }
}
