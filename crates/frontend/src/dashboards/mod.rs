pub mod d400_front_desk;

pub use d400_front_desk::ui::FrontDeskDashboard;
