//! Login page. Honors `?next=` for admin paths.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;
use leptos_router::hooks::use_query_map;

use crate::core::routes;
use crate::ui::auth::{LoginForm, use_auth_context};
use crate::ui::icon::{Icon, icons};

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth_context();
    let query = use_query_map();
    let next = Signal::derive(move || query.get().get("next"));

    view! {
        <Title text="Iniciar Sesión - Vinilos"/>

        <div class="page-gradient flex flex-col">
            <header class="p-4">
                <A href=routes::HOME attr:class="back-link">
                    <Icon name=icons::ARROW_LEFT class="w-6 h-6" />
                </A>
            </header>

            <main class="flex-1 flex items-center justify-center p-4">
                <div class="w-full max-w-md card">
                    // A stored session is not proof of a valid one, so no automatic redirect here
                    <Show when=move || auth.is_logged_in()>
                        <p class="login-notice">
                            "Ya tienes una sesión abierta. "
                            <A href=routes::ADMIN attr:class="underline">"Ir al panel"</A>
                        </p>
                    </Show>
                    <LoginForm next=next />
                </div>
            </main>
        </div>
    }
}
