pub mod admin;
pub mod app;
pub mod booking_detail;
pub mod layout;
pub mod login_screen;
pub mod manager;

pub use app::App;
