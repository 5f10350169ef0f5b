pub mod api_client;
pub mod auth_api;
pub mod manager_api;
pub mod session_service;

pub use api_client::SESSION_EXPIRED_MESSAGE;
pub use session_service::{
    initialize_session, invalidate_session, login_with_token, logout, session_phase,
};
