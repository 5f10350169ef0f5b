pub mod admin;
pub mod auth;
pub mod booking;
pub mod invoice;
pub mod page;
pub mod pricing;
pub mod service;
pub mod user;

pub use admin::{AdminAccount, NewAdminAccount, ResourceRevenue, RevenueReport, ServiceRevenue};
pub use auth::{OtpRequest, TokenClaims, TokenResponse, VerifyOtpRequest};
pub use booking::{
    AmountBreakdown, BookingCustomer, BookingRecord, BookingStatus, PendingBooking,
    ResourceBooking, ResourceSlot, SlotStatus,
};
pub use invoice::{InvoiceTemplate, NewInvoiceTemplate};
pub use page::{Listing, Page};
pub use pricing::{
    DayType, NewPriceRule, PriceRule, PriceRuleUpdate, ResourceConfig, SlotConfigUpdate,
};
pub use service::{
    ActivityPayload, ActivityRef, FacilityService, NewResource, NewService, ServiceActivity,
    ServiceResource, ServiceUpdate,
};
pub use user::AppUser;
