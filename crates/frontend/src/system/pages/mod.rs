pub mod login;
pub mod profile;
