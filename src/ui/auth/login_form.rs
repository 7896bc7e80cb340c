//! Login form component

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use super::use_auth_context;
use crate::core::auth::{LoginError, LoginFlow, redirect_target};
use crate::core::session::platform_store;
use crate::ui::api_client;
use crate::ui::common::{ErrorMessage, InlineSpinner};
use crate::ui::icon::{Icon, icons};

/// Username/password form. On success it navigates to `next` when that is an
/// admin path, otherwise to the admin home.
#[component]
pub fn LoginForm(
    #[prop(into)]
    next: Signal<Option<String>>,
) -> impl IntoView {
    let auth = use_auth_context();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() {
            return;
        }

        error.set(None);
        loading.set(true);

        let username_val = username.get_untracked();
        let password_val = password.get_untracked();
        let target = redirect_target(next.get_untracked().as_deref());
        let navigate = navigate.clone();

        spawn_local(async move {
            let flow = LoginFlow::new(api_client(), platform_store());
            let result = flow.submit(&username_val, &password_val).await;
            loading.set(false);
            match result {
                Ok(session) => {
                    auth.session.set(session);
                    navigate(
                        &target,
                        NavigateOptions {
                            replace: true,
                            ..Default::default()
                        },
                    );
                }
                Err(e) => {
                    if let LoginError::Unavailable(cause) = &e {
                        leptos::logging::warn!("login request failed: {}", cause);
                    }
                    password.set(String::new());
                    error.set(Some(e.to_string()));
                }
            }
        });
    };

    view! {
        <form on:submit=on_submit class="login-form">
            <h2 class="login-title">"Iniciar Sesión"</h2>

            <ErrorMessage error=error />

            <div>
                <label for="username" class="login-label">"Usuario"</label>
                <input
                    type="text"
                    id="username"
                    name="username"
                    autocomplete="username"
                    class="login-input"
                    prop:value=move || username.get()
                    on:input=move |ev| username.set(event_target_value(&ev))
                />
            </div>

            <div>
                <label for="password" class="login-label">"Contraseña"</label>
                <div class="relative">
                    <input
                        type=move || if show_password.get() { "text" } else { "password" }
                        id="password"
                        name="password"
                        autocomplete="current-password"
                        class="login-input pr-10"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button
                        type="button"
                        class="login-password-toggle"
                        on:click=move |_| show_password.update(|v| *v = !*v)
                    >
                        {move || {
                            if show_password.get() {
                                view! { <Icon name=icons::EYE_CLOSED class="h-5 w-5" /> }.into_any()
                            } else {
                                view! { <Icon name=icons::EYE class="h-5 w-5" /> }.into_any()
                            }
                        }}
                    </button>
                </div>
            </div>

            <button
                type="submit"
                class="login-submit"
                disabled=move || loading.get()
            >
                <Show
                    when=move || loading.get()
                    fallback=|| view! { <span>"Iniciar Sesión"</span> }
                >
                    <span class="flex items-center justify-center gap-2">
                        <InlineSpinner />
                        "Iniciando sesión..."
                    </span>
                </Show>
            </button>
        </form>
    }
}
