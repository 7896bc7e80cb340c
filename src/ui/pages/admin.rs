use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::routes;

/// Admin home with one card per catalog
#[component]
pub fn AdminHomePage() -> impl IntoView {
    view! {
        <div class="max-w-7xl mx-auto">
            <h1 class="text-4xl font-bold text-white mb-8">"Panel de Administración"</h1>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
                <div class="card p-6">
                    <h2 class="text-2xl font-semibold text-white mb-4">"Piercings"</h2>
                    <p class="text-gray-200 mb-4">"Administra el catálogo de piercings"</p>
                    <A href=routes::ADMIN_PIERCINGS attr:class="primary-button">"Gestionar Piercings"</A>
                </div>
                <div class="card p-6">
                    <h2 class="text-2xl font-semibold text-white mb-4">"Tatuajes"</h2>
                    <p class="text-gray-200 mb-4">"Administra el catálogo de tatuajes"</p>
                    <A href=routes::ADMIN_TATTOOS attr:class="primary-button">"Gestionar Tatuajes"</A>
                </div>
            </div>
        </div>
    }
}
