pub mod reservation_status;
pub mod room_status;
pub mod room_type;

pub use reservation_status::ReservationStatus;
pub use room_status::RoomStatus;
pub use room_type::RoomType;
