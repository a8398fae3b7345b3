pub mod access;
pub mod mock;
pub mod sessions;

pub use access::{landing_for, resolve_view, ViewDecision};
pub use mock::MockAuthService;
pub use sessions::{clear_current_user, get_current_user, set_current_user, Role, User};
