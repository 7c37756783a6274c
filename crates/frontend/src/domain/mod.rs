pub mod a001_property;
pub mod a002_customer;
pub mod a003_room;
pub mod a004_reservation;
