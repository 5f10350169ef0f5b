pub mod use_children;
pub mod use_list;
pub mod use_session;

pub use use_children::{use_children, UseChildrenHandle};
pub use use_list::{use_list, UseListHandle};
pub use use_session::{use_session, UseSessionHandle};
