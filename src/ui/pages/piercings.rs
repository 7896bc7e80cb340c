//! Public piercing catalog with purchase links.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::core::catalog::Piercing;
use crate::core::routes;
use crate::ui::catalog::use_public_catalog;
use crate::ui::common::{LoadingSpinner, Pagination};
use crate::ui::contact::{PIERCER_PHONE_LABEL, piercing_appointment_link, piercing_purchase_link};
use crate::ui::icon::{Icon, icons};

const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

#[component]
pub fn PiercingsPage() -> impl IntoView {
    let catalog = use_public_catalog::<Piercing>();
    let pages = Signal::derive(move || catalog.pages());

    view! {
        <Title text="Catálogo de Piercings - Vinilos"/>

        <div class="page-gradient">
            {move || {
                let view = catalog.view.get();
                if view.is_loading() {
                    return view! { <LoadingSpinner /> }.into_any();
                }
                if let Some(error) = view.error() {
                    return view! { <PublicError message=error.to_string() /> }.into_any();
                }
                view! {
                    <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-12">
                        <div class="flex items-center justify-center mb-6">
                            <A href=routes::HOME attr:class="back-link mr-4">
                                <Icon name=icons::ARROW_LEFT class="w-6 h-6" />
                            </A>
                            <h1 class="text-4xl font-bold text-center text-white">"Catálogo de Piercings"</h1>
                        </div>

                        <Show
                            when=move || !catalog.view.with(|v| v.items().is_empty())
                            fallback=|| view! {
                                <p class="text-white text-center text-xl">
                                    "No se encontraron piercings disponibles."
                                </p>
                            }
                        >
                            <div class="catalog-grid">
                                <For
                                    each=move || catalog.current_items()
                                    key=|p| p.id
                                    children=|piercing| view! { <PiercingCard piercing=piercing /> }
                                />
                            </div>
                            <Pagination page=catalog.page pages=pages />
                        </Show>

                        <PiercerBio />
                    </div>
                }
                .into_any()
            }}
        </div>
    }
}

#[component]
fn PiercingCard(piercing: Piercing) -> impl IntoView {
    let src = piercing
        .image_src()
        .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string());
    let purchase = piercing_purchase_link(&piercing);

    view! {
        <div class="catalog-card flex flex-col">
            <img src=src alt=piercing.name.clone() class="catalog-card-image" />
            <div class="p-6 flex-grow flex flex-col">
                <h2 class="text-xl font-semibold text-white mb-2">{piercing.name.clone()}</h2>
                <p class="text-gray-200 mb-3 flex-grow">{piercing.description.clone()}</p>
                <p class="text-lg font-bold text-white mb-4">"Precio: " {piercing.price_label()}</p>
                <a href=purchase target="_blank" rel="noopener noreferrer" class="buy-button">
                    "Comprar"
                </a>
            </div>
        </div>
    }
}

#[component]
fn PiercerBio() -> impl IntoView {
    view! {
        <section class="card p-8 mt-12">
            <h2 class="text-3xl font-bold text-white mb-6">"Perforadora"</h2>
            <div class="flex flex-col md:flex-row items-center">
                <img src="/perforadora.jpg" alt="Perforadora" class="bio-portrait" />
                <div>
                    <h3 class="text-2xl font-semibold text-white mb-2">"Marisney Rivero Marquez"</h3>
                    <p class="text-gray-200 mb-4">
                        "Perforadora profesional con basta experiencia, trabaja con total higiene y con mucha delicadeza."
                    </p>
                    <p class="text-lg font-bold text-white mb-4">"Teléfono: " {PIERCER_PHONE_LABEL}</p>
                    <a
                        href=piercing_appointment_link()
                        target="_blank"
                        rel="noopener noreferrer"
                        class="whatsapp-button"
                    >
                        <Icon name=icons::WHATSAPP class="mr-2 w-4 h-4" />
                        "Agendar Cita"
                    </a>
                </div>
            </div>
        </section>
    }
}

/// Full-page error shown when a public catalog fails to load
#[component]
pub(super) fn PublicError(message: String) -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center">
            <div class="text-white text-center">
                <p class="text-2xl mb-4">"Se ha producido un error :c"</p>
                <p class="text-2xl mb-4">"Contacte con el Administrador"</p>
                <p class="text-lg">{message}</p>
            </div>
        </div>
    }
}
