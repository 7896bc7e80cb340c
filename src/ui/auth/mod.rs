//! Authentication UI: the session context, the login form, and the gate
//! component wrapping protected views.

mod context;
mod login_form;
mod require_auth;

pub use context::{AuthContext, provide_auth_context, use_auth_context};
pub use login_form::LoginForm;
pub use require_auth::RequireAuth;
