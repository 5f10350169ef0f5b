// ============================================================================
// STATE MODULE - Estado puro del panel, sin nada de navegador
// ============================================================================

pub mod children_state;
pub mod list_state;
pub mod session_state;

pub use children_state::ChildrenCache;
pub use list_state::{ListState, LoadTicket, MutationKind};
pub use session_state::{AuthError, Role, SessionPhase};
