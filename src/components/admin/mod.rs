// Pantallas del portal admin. De momento son maquetas estáticas:
// el backend todavía no expone los agregados que necesitan.

pub mod overview;
pub mod pricing;
pub mod resources;
pub mod users;

pub use overview::ExecutiveOverview;
pub use pricing::DynamicPricing;
pub use resources::ResourceManagement;
pub use users::UserWalletDirectory;
