use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use super::use_auth_context;
use crate::core::auth::{AuthGate, GateMode, GateState};
use crate::core::routes;
use crate::core::session::platform_store;
use crate::ui::api_client;
use crate::ui::common::LoadingSpinner;

/// Renders `children` only once the session check settles as authenticated.
///
/// Every mount starts in [`GateState::Checking`] and shows a spinner; an
/// unauthenticated result redirects to the login page and renders nothing.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth_context();
    let state = RwSignal::new(GateState::Checking);
    let navigate = use_navigate();
    let location = use_location();

    Effect::new(move |_| {
        let from = location.pathname.get_untracked();
        let navigate = navigate.clone();
        spawn_local(async move {
            let gate = AuthGate::new(api_client(), platform_store(), GateMode::VerifyWithBackend);
            let settled = gate.check().await;
            state.set(settled);
            match settled {
                GateState::Authenticated => auth.reload(),
                GateState::Unauthenticated => {
                    auth.session.set(Default::default());
                    navigate(
                        &routes::login_redirect(&from),
                        NavigateOptions {
                            replace: true,
                            ..Default::default()
                        },
                    );
                }
                GateState::Checking => {}
            }
        });
    });

    move || match state.get() {
        GateState::Checking => {
            view! { <LoadingSpinner message="Verificando sesión...".to_string() /> }.into_any()
        }
        GateState::Authenticated => children().into_any(),
        GateState::Unauthenticated => ().into_any(),
    }
}
