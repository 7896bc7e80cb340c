//! Admin layout: the session gate, the sidebar, and the nested admin page.

use leptos::prelude::*;
use leptos_router::components::{A, Outlet};
use leptos_router::hooks::{use_location, use_navigate};

use crate::core::routes;
use crate::ui::auth::{RequireAuth, use_auth_context};
use crate::ui::icon::{Icon, icons};

/// Parent route for everything under `/admin`
#[component]
pub fn AdminLayout() -> impl IntoView {
    view! {
        <RequireAuth>
            <div class="admin-layout">
                <AdminSidebar />
                <main class="admin-content">
                    <Outlet />
                </main>
            </div>
        </RequireAuth>
    }
}

#[component]
fn AdminSidebar() -> impl IntoView {
    let auth = use_auth_context();
    let navigate = use_navigate();
    let location = use_location();

    let link_class = move |path: &'static str| {
        move || {
            if location.pathname.get() == path {
                "admin-nav-link admin-nav-link-active"
            } else {
                "admin-nav-link"
            }
        }
    };

    let on_logout = move |_| {
        auth.logout();
        navigate(routes::LOGIN, Default::default());
    };

    view! {
        <aside class="admin-sidebar">
            <A href=routes::ADMIN attr:class="admin-sidebar-title">
                <h1>"Admin Panel"</h1>
            </A>
            <nav>
                <ul class="space-y-4">
                    <li>
                        <A href=routes::ADMIN_PIERCINGS attr:class=link_class(routes::ADMIN_PIERCINGS)>
                            <Icon name=icons::RING class="w-4 h-4" />
                            <span>"Piercings"</span>
                        </A>
                    </li>
                    <li>
                        <A href=routes::ADMIN_TATTOOS attr:class=link_class(routes::ADMIN_TATTOOS)>
                            <Icon name=icons::PEN class="w-4 h-4" />
                            <span>"Tatuajes"</span>
                        </A>
                    </li>
                    <li>
                        <button type="button" class="admin-nav-link" on:click=on_logout>
                            <Icon name=icons::LOGOUT class="w-4 h-4" />
                            <span>"Cerrar Sesión"</span>
                        </button>
                    </li>
                </ul>
            </nav>
        </aside>
    }
}
