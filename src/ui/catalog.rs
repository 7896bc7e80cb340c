//! Reactive catalog state for the admin and public pages.
//!
//! Each hook owns a [`CatalogView`] signal and drives it from the backend.
//! Mutations only touch the local collection after the backend confirmed them.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::core::catalog::{
    CatalogClient, CatalogFields, CatalogItem, CatalogView, ItemId, PUBLIC_PAGE_SIZE,
    PublicCatalog, page_count, page_items,
};
use crate::core::error::ApiError;
use crate::core::http::HttpClient;
use crate::core::routes;
use crate::core::session::{SessionStore, platform_store};
use crate::ui::api_client;
use crate::ui::auth::use_auth_context;
use crate::ui::icon::{Icon, icons};

fn admin_client<T: CatalogItem>() -> CatalogClient<T, impl HttpClient, impl SessionStore> {
    CatalogClient::new(api_client(), platform_store())
}

/// Admin-side state of one catalog page
pub struct AdminCatalog<T: CatalogItem> {
    pub view: RwSignal<CatalogView<T>>,
    /// Item being edited in place and its working copy
    pub editing: RwSignal<Option<(ItemId, T::Fields)>>,
    pub saving: RwSignal<bool>,
    editing_id: Memo<Option<ItemId>>,
    expired: RwSignal<bool>,
}

impl<T: CatalogItem> Clone for AdminCatalog<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: CatalogItem> Copy for AdminCatalog<T> {}

/// Load the catalog on mount. A session that cannot be refreshed sends the
/// user back to the login page.
pub fn use_admin_catalog<T: CatalogItem>() -> AdminCatalog<T> {
    let auth = use_auth_context();
    let navigate = use_navigate();
    let location = use_location();

    let editing = RwSignal::new(None::<(ItemId, T::Fields)>);
    // Rows only re-render when the edited item changes, not on every keystroke
    let editing_id = Memo::new(move |_| editing.with(|e| e.as_ref().map(|(id, _)| *id)));

    let catalog = AdminCatalog {
        view: RwSignal::new(CatalogView::new()),
        editing,
        saving: RwSignal::new(false),
        editing_id,
        expired: RwSignal::new(false),
    };

    Effect::new(move |_| catalog.load());

    Effect::new(move |_| {
        if catalog.expired.get() {
            auth.session.set(Default::default());
            navigate(
                &routes::login_redirect(&location.pathname.get_untracked()),
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        }
    });

    catalog
}

impl<T: CatalogItem> AdminCatalog<T> {
    fn watch<R>(&self, result: &Result<R, ApiError>) {
        if matches!(result, Err(ApiError::SessionExpired)) {
            self.expired.set(true);
        }
    }

    pub fn load(self) {
        self.view.update(CatalogView::begin_load);
        spawn_local(async move {
            let result = admin_client::<T>().list().await;
            self.watch(&result);
            self.view.update(|v| v.apply_list(result));
        });
    }

    /// Create a draft record and open it for editing
    pub fn add(self) {
        let today = chrono::Local::now().date_naive();
        self.saving.set(true);
        spawn_local(async move {
            let result = admin_client::<T>().create(T::Fields::draft(today)).await;
            self.watch(&result);
            let mut created = None;
            self.view.update(|v| created = v.apply_created(result));
            if let Some(item) = created {
                self.edit(&item);
            }
            self.saving.set(false);
        });
    }

    pub fn edit(&self, item: &T) {
        self.view.update(CatalogView::clear_error);
        self.editing.set(Some((item.id(), T::Fields::from(item))));
    }

    pub fn cancel_edit(&self) {
        self.editing.set(None);
    }

    /// Change the working copy of the item being edited
    pub fn update_fields(&self, f: impl FnOnce(&mut T::Fields)) {
        self.editing.update(|editing| {
            if let Some((_, fields)) = editing {
                f(fields);
            }
        });
    }

    /// Send the working copy; the editor closes only when the backend accepted it.
    pub fn save(self) {
        let Some((id, fields)) = self.editing.get_untracked() else {
            return;
        };
        self.saving.set(true);
        spawn_local(async move {
            let result = admin_client::<T>().update(id, fields).await;
            self.watch(&result);
            let mut saved = false;
            self.view.update(|v| saved = v.apply_updated(result));
            if saved {
                self.editing.set(None);
            }
            self.saving.set(false);
        });
    }

    pub fn delete(self, id: ItemId) {
        spawn_local(async move {
            let result = admin_client::<T>().delete(id).await;
            self.watch(&result);
            let mut deleted = false;
            self.view.update(|v| deleted = v.apply_deleted(id, result));
            let was_editing = self
                .editing
                .try_get_untracked()
                .flatten()
                .is_some_and(|(editing, _)| editing == id);
            if deleted && was_editing {
                self.editing.set(None);
            }
        });
    }

    pub fn is_editing(&self, id: ItemId) -> bool {
        self.editing_id.get() == Some(id)
    }
}

/// Public, paginated state of one catalog
pub struct PublicCatalogState<T: CatalogItem> {
    pub view: RwSignal<CatalogView<T>>,
    /// 1-based current page
    pub page: RwSignal<usize>,
}

impl<T: CatalogItem> Clone for PublicCatalogState<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: CatalogItem> Copy for PublicCatalogState<T> {}

pub fn use_public_catalog<T: CatalogItem>() -> PublicCatalogState<T> {
    let state = PublicCatalogState {
        view: RwSignal::new(CatalogView::new()),
        page: RwSignal::new(1),
    };

    Effect::new(move |_| {
        spawn_local(async move {
            let result = PublicCatalog::<T, _>::new(api_client()).list().await;
            state.view.update(|v| v.apply_list(result));
        });
    });

    state
}

impl<T: CatalogItem> PublicCatalogState<T> {
    pub fn pages(&self) -> usize {
        self.view.with(|v| page_count(v.items().len(), PUBLIC_PAGE_SIZE))
    }

    pub fn current_items(&self) -> Vec<T> {
        let page = self.page.get();
        self.view.with(|v| page_items(v.items(), page, PUBLIC_PAGE_SIZE))
    }
}

/// Search box and "add" button above an admin catalog
#[component]
pub fn CatalogToolbar(
    search: RwSignal<String>,
    placeholder: &'static str,
    add_label: &'static str,
    #[prop(into)]
    busy: Signal<bool>,
    on_add: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="admin-toolbar">
            <div class="admin-search">
                <Icon name=icons::SEARCH class="admin-search-icon" />
                <input
                    type="text"
                    class="admin-input pl-10"
                    placeholder=placeholder
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
            </div>
            <button
                type="button"
                class="admin-button-add"
                disabled=move || busy.get()
                on:click=move |_| on_add.run(())
            >
                <Icon name=icons::PLUS class="inline mr-2 w-4 h-4" />
                {add_label}
            </button>
        </div>
    }
}
