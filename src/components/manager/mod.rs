// Pantallas y diálogos del portal de operaciones (rol manager)

pub mod activities;
pub mod add_admin_dialog;
pub mod add_resource_dialog;
pub mod admin_detail;
pub mod admins;
pub mod all_bookings;
pub mod booking_management;
pub mod invoice_template;
pub mod pending_bookings;
pub mod resource_detail;
pub mod service_card;
pub mod service_dialog;
pub mod users;

pub use activities::Activities;
pub use admins::AdminManagement;
pub use all_bookings::AllBookings;
pub use booking_management::BookingManagement;
pub use invoice_template::InvoiceTemplates;
pub use pending_bookings::PendingBookings;
pub use users::UserManagement;
