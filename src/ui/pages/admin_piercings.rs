//! Piercing administration: search, in-place editing, add and delete.

use leptos::prelude::*;

use crate::core::catalog::{CatalogView, Piercing, PiercingFields};
use crate::ui::catalog::{AdminCatalog, CatalogToolbar, use_admin_catalog};
use crate::ui::common::{ErrorMessage, LoadingSpinner};
use crate::ui::confirm;
use crate::ui::icon::{Icon, icons};
use crate::ui::upload::ImageInput;

#[component]
pub fn AdminPiercingsPage() -> impl IntoView {
    let catalog = use_admin_catalog::<Piercing>();
    let search = RwSignal::new(String::new());
    let error = Signal::derive(move || catalog.view.with(|v| v.error().map(str::to_string)));

    view! {
        <div class="space-y-6 p-4">
            <h2 class="text-3xl font-bold text-white">"Administración de Piercings"</h2>

            <CatalogToolbar
                search=search
                placeholder="Buscar piercings..."
                add_label="Añadir Piercing"
                busy=catalog.saving
                on_add=Callback::new(move |_| catalog.add())
            />

            <ErrorMessage
                error=error
                on_dismiss=Callback::new(move |_| catalog.view.update(CatalogView::clear_error))
            />

            <Show
                when=move || !catalog.view.with(CatalogView::is_loading)
                fallback=|| view! { <LoadingSpinner message="Cargando piercings...".to_string() /> }
            >
                <div class="admin-grid">
                    {move || {
                        catalog
                            .view
                            .with(|v| v.search(&search.get()))
                            .into_iter()
                            .map(|piercing| view! { <PiercingRow catalog=catalog piercing=piercing /> })
                            .collect_view()
                    }}
                </div>
            </Show>
        </div>
    }
}

#[component]
fn PiercingRow(catalog: AdminCatalog<Piercing>, piercing: Piercing) -> impl IntoView {
    let id = piercing.id;

    move || {
        if catalog.is_editing(id) {
            view! { <PiercingEditor catalog=catalog /> }.into_any()
        } else {
            let piercing = piercing.clone();
            let on_edit = {
                let piercing = piercing.clone();
                move |_| catalog.edit(&piercing)
            };
            let on_delete = move |_| {
                if confirm("¿Estás seguro de que quieres eliminar este piercing?") {
                    catalog.delete(id);
                }
            };
            view! {
                <div class="admin-card">
                    {piercing.image_src().map(|src| view! {
                        <img src=src alt=piercing.name.clone() class="admin-card-image" />
                    })}
                    <h3 class="text-xl font-bold text-white mt-2">{piercing.name.clone()}</h3>
                    <p class="text-purple-200">{piercing.description.clone()}</p>
                    <p class="text-white font-bold mt-2">"Precio: " {piercing.price_label()}</p>
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
}

#[component]
fn PiercingEditor(catalog: AdminCatalog<Piercing>) -> impl IntoView {
    let field = move |read: fn(&PiercingFields) -> String| {
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
                type="number"
                min="0"
                step="0.01"
                class="admin-input"
                prop:value=field(|f| f.price.clone())
                on:input=move |ev| {
                    // Kept as typed; unparseable input fails validation on save
                    let price = event_target_value(&ev);
                    catalog.update_fields(|f| f.price = price);
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
