//! 404 page

use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::routes;
use crate::ui::icon::{Icon, icons};

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="page-gradient flex flex-col items-center justify-center p-4">
            <div class="text-center text-white">
                <div class="w-24 h-24 mx-auto mb-6 rounded-full flex items-center justify-center card">
                    <Icon name=icons::ALERT_CIRCLE class="w-12 h-12" />
                </div>

                <h1 class="text-6xl font-bold mb-4">"404"</h1>
                <h2 class="text-2xl font-semibold mb-2">"Página no encontrada"</h2>
                <p class="mb-8 max-w-md mx-auto">
                    "La página que buscas no existe o ha sido movida."
                </p>

                <div class="flex flex-col sm:flex-row items-center justify-center gap-4">
                    <A href=routes::HOME attr:class="primary-button">"Ir al inicio"</A>
                    <A href=routes::TATTOOS attr:class="secondary-button">"Ver tatuajes"</A>
                </div>
            </div>
        </div>
    }
}
