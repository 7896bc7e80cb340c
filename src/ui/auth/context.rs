//! Reactive view of the stored session.
//!
//! The session itself lives in the platform [`SessionStore`]; this context
//! mirrors it into a signal so components can react to login and logout.

use leptos::prelude::*;

use crate::core::auth;
use crate::core::session::{Session, SessionStore, platform_store};

#[derive(Clone, Copy)]
pub struct AuthContext {
    pub session: RwSignal<Session>,
}

impl AuthContext {
    pub fn is_logged_in(&self) -> bool {
        self.session.get().has_access_token()
    }

    /// Re-read the session from storage
    pub fn reload(&self) {
        self.session.set(platform_store().get());
    }

    pub fn logout(&self) {
        auth::logout(&platform_store());
        self.session.set(Session::default());
        leptos::logging::log!("admin logged out");
    }
}

/// Provide auth context to the component tree
pub fn provide_auth_context() -> AuthContext {
    // Start empty on both server and client to avoid a hydration mismatch
    let ctx = AuthContext {
        session: RwSignal::new(Session::default()),
    };

    #[cfg(not(feature = "ssr"))]
    Effect::new(move |_| ctx.reload());

    provide_context(ctx);
    ctx
}

pub fn use_auth_context() -> AuthContext {
    expect_context::<AuthContext>()
}
