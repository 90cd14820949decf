pub mod scope;
pub mod user;

pub use scope::{RecordingScopeLog, ScopeEvent, ScopeLog, TracingScopeLog};
pub use user::User;
