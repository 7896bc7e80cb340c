//! Tattoo administration. "Add" creates a dated draft and opens it for editing.

use chrono::NaiveDate;
use leptos::prelude::*;

use crate::core::catalog::{CatalogView, Tattoo, TattooFields};
use crate::ui::catalog::{AdminCatalog, CatalogToolbar, use_admin_catalog};
use crate::ui::common::{ErrorMessage, LoadingSpinner};
use crate::ui::confirm;
use crate::ui::icon::{Icon, icons};
use crate::ui::upload::ImageInput;

const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

#[component]
pub fn AdminTattoosPage() -> impl IntoView {
    let catalog = use_admin_catalog::<Tattoo>();
    let search = RwSignal::new(String::new());
    let error = Signal::derive(move || catalog.view.with(|v| v.error().map(str::to_string)));

    view! {
        <div class="space-y-6 p-4">
            <h2 class="text-3xl font-bold text-white">"Administración de Tatuajes"</h2>

            <CatalogToolbar
                search=search
                placeholder="Buscar tatuajes..."
                add_label="Añadir Tatuaje"
                busy=catalog.saving
                on_add=Callback::new(move |_| catalog.add())
            />

            <ErrorMessage
                error=error
                on_dismiss=Callback::new(move |_| catalog.view.update(CatalogView::clear_error))
            />

            <Show
                when=move || !catalog.view.with(CatalogView::is_loading)
                fallback=|| view! { <LoadingSpinner message="Cargando tatuajes...".to_string() /> }
            >
                <div class="admin-grid">
                    {move || {
                        catalog
                            .view
                            .with(|v| v.search(&search.get()))
                            .into_iter()
                            .map(|tattoo| view! { <TattooRow catalog=catalog tattoo=tattoo /> })
                            .collect_view()
                    }}
                </div>
            </Show>
        </div>
    }
}

#[component]
fn TattooRow(catalog: AdminCatalog<Tattoo>, tattoo: Tattoo) -> impl IntoView {
    let id = tattoo.id;

    move || {
        if catalog.is_editing(id) {
            return view! { <TattooEditor catalog=catalog /> }.into_any();
        }

        let tattoo = tattoo.clone();
        let on_edit = {
            let tattoo = tattoo.clone();
            move |_| catalog.edit(&tattoo)
        };
        let on_delete = move |_| {
            if confirm("¿Estás seguro de que quieres eliminar este tatuaje?") {
                catalog.delete(id);
            }
        };
        view! {
            <div class="admin-card">
                {tattoo.image_src().map(|src| view! {
                    <img src=src alt=tattoo.name.clone() class="admin-card-image" />
                })}
                <h3 class="text-xl font-bold text-white mt-2">{tattoo.name.clone()}</h3>
                <p class="text-purple-200">{tattoo.description.clone()}</p>
                <p class="text-white font-bold mt-2">"Fecha: " {tattoo.date_label()}</p>
                <div class="admin-card-actions">
                    <button type="button" class="admin-button-edit" title="Editar" on:click=on_edit>
                        <Icon name=icons::EDIT class="w-4 h-4" />
                    </button>
                    <button type="button" class="admin-button-delete" title="Eliminar" on:click=on_delete>
                        <Icon name=icons::TRASH class="w-4 h-4" />
                    </button>
                </div>
            </div>
        }
        .into_any()
    }
}

#[component]
fn TattooEditor(catalog: AdminCatalog<Tattoo>) -> impl IntoView {
    let field = move |read: fn(&TattooFields) -> String| {
        move || {
            catalog
                .editing
                .with(|e| e.as_ref().map(|(_, f)| read(f)).unwrap_or_default())
        }
    };

    view! {
        <div class="admin-card space-y-2">
            <input
                type="text"
                class="admin-input"
                prop:value=field(|f| f.name.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    catalog.update_fields(|f| f.name = value);
                }
            />
            <textarea
                class="admin-input"
                prop:value=field(|f| f.description.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    catalog.update_fields(|f| f.description = value);
                }
            />
            <input
                type="date"
                class="admin-input"
                prop:value=field(|f| f.date.format(DATE_INPUT_FORMAT).to_string())
                on:input=move |ev| {
                    if let Ok(date) = NaiveDate::parse_from_str(&event_target_value(&ev), DATE_INPUT_FORMAT) {
                        catalog.update_fields(|f| f.date = date);
                    }
                }
            />
            <ImageInput on_pick=Callback::new(move |upload| {
                catalog.update_fields(|f| f.image = Some(upload));
            }) />
            <div class="flex gap-2">
                <button
                    type="button"
                    class="admin-button-save"
                    disabled=move || catalog.saving.get()
                    on:click=move |_| catalog.save()
                >
                    "Guardar"
                </button>
                <button type="button" class="admin-button-cancel" on:click=move |_| catalog.cancel_edit()>
                    "Cancelar"
                </button>
            </div>
        </div>
    }
}
