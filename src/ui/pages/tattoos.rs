//! Public gallery of finished tattoos.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use super::piercings::PublicError;
use crate::core::catalog::Tattoo;
use crate::core::routes;
use crate::ui::catalog::use_public_catalog;
use crate::ui::common::{LoadingSpinner, Pagination};
use crate::ui::contact::{TATTOO_ARTIST_PHONE_LABEL, tattoo_appointment_link};
use crate::ui::icon::{Icon, icons};

#[component]
pub fn TattoosPage() -> impl IntoView {
    let catalog = use_public_catalog::<Tattoo>();
    let pages = Signal::derive(move || catalog.pages());

    view! {
        <Title text="Nuestros Trabajos - Vinilos"/>

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
                            <h1 class="text-4xl font-bold text-center text-white">"Nuestros Trabajos"</h1>
                        </div>

                        <div class="catalog-grid">
                            <For
                                each=move || catalog.current_items()
                                key=|t| t.id
                                children=|tattoo| view! { <TattooCard tattoo=tattoo /> }
                            />
                        </div>
                        <Pagination page=catalog.page pages=pages />

                        <ArtistBio />
                    </div>
                }
                .into_any()
            }}
        </div>
    }
}

#[component]
fn TattooCard(tattoo: Tattoo) -> impl IntoView {
    view! {
        <div class="catalog-card hover:scale-105">
            {tattoo.image_src().map(|src| view! {
                <img src=src alt=tattoo.name.clone() class="catalog-card-image" />
            })}
            <div class="p-6">
                <h2 class="text-xl font-semibold text-white mb-2">{tattoo.name.clone()}</h2>
                <p class="text-sm text-purple-200 mb-3">"Fecha: " {tattoo.date_label()}</p>
                <p class="text-gray-200">{tattoo.description.clone()}</p>
            </div>
        </div>
    }
}

#[component]
fn ArtistBio() -> impl IntoView {
    view! {
        <section class="card p-8 mt-12">
            <h2 class="text-3xl font-bold text-white mb-6">"Tatuador"</h2>
            <div class="flex flex-col md:flex-row items-center">
                <img src="/tatuador.jpg" alt="Tatuador" class="bio-portrait" />
                <div>
                    <h3 class="text-2xl font-semibold text-white mb-2">"Xavier Verdecie Ramos"</h3>
                    <p class="text-gray-200 mb-4">
                        "Artista Tatuador forjado por la vieja escuela, dibuja él mismo el diseño que quieras y es aficionado al BlackWork"
                    </p>
                    <p class="text-lg font-bold text-white mb-4">"Teléfono: " {TATTOO_ARTIST_PHONE_LABEL}</p>
                    <a
                        href=tattoo_appointment_link()
                        target="_blank"
                        rel="noopener noreferrer"
                        class="whatsapp-button"
                    >
                        <Icon name=icons::WHATSAPP class="mr-2 w-4 h-4" />
                        "Agenda una cita YA!"
                    </a>
                </div>
            </div>
        </section>
    }
}
