//! Welcome page: entry cards for both catalogs and the WhatsApp group.

use leptos::prelude::*;
use leptos_meta::{Meta, Title};
use leptos_router::components::A;

use crate::core::routes;
use crate::ui::contact::WHATSAPP_GROUP_URL;
use crate::ui::icon::{Icon, icons};

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <Title text="Vinilos - Tatuajes y Piercings"/>
        <Meta
            name="description"
            content="Catálogo de piercings y trabajos de tatuaje. Agenda tu cita por WhatsApp."
        />

        <div class="page-gradient">
            <header class="p-2">
                <div class="max-w-7xl mx-auto flex justify-end items-center">
                    <a
                        href=WHATSAPP_GROUP_URL
                        target="_blank"
                        rel="noopener noreferrer"
                        class="whatsapp-button"
                    >
                        <Icon name=icons::WHATSAPP class="mr-2 w-4 h-4" />
                        "Unirse al grupo de WhatsApp"
                    </a>
                </div>
            </header>

            <main class="max-w-7xl mx-auto px-4 py-12 sm:px-6 lg:px-8">
                <div class="flex flex-col md:flex-row gap-8">
                    <EntryCard
                        href=routes::PIERCINGS
                        icon=icons::RING
                        title="Piercings"
                        text="Explora nuestra amplia selección de piercings de alta calidad y encuentra el que mejor se adapte a tu estilo."
                    />
                    <EntryCard
                        href=routes::TATTOOS
                        icon=icons::PEN
                        title="Tatuajes"
                        text="Descubre nuestros diseños exclusivos y deja que nuestros artistas plasmen tu visión en tu piel."
                    />
                </div>
            </main>
        </div>
    }
}

#[component]
fn EntryCard(
    href: &'static str,
    icon: &'static str,
    title: &'static str,
    text: &'static str,
) -> impl IntoView {
    view! {
        <A href=href attr:class="entry-card group">
            <div>
                <div class="flex items-center mb-4">
                    <Icon name=icon class="w-10 h-10 mr-2" />
                    <h2 class="text-3xl font-bold">{title}</h2>
                </div>
                <p class="mb-4">{text}</p>
            </div>
            <Icon name=icons::ARROW_RIGHT class="entry-card-arrow" />
        </A>
    }
}
