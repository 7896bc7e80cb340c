use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{ParentRoute, Route, Router, Routes};
use leptos_router::path;

use crate::ui::AdminLayout;
use crate::ui::auth::provide_auth_context;
use crate::ui::pages::{
    AdminHomePage, AdminPiercingsPage, AdminTattoosPage, LandingPage, LoginPage, NotFoundPage,
    PiercingsPage, TattoosPage,
};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="es">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    provide_auth_context();

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/vinilos.css"/>

        <Title text="Vinilos"/>

        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=path!("/") view=LandingPage/>
                <Route path=path!("/piercings") view=PiercingsPage/>
                <Route path=path!("/tattoos") view=TattoosPage/>
                <Route path=path!("/login") view=LoginPage/>
                <ParentRoute path=path!("/admin") view=AdminLayout>
                    <Route path=path!("") view=AdminHomePage/>
                    <Route path=path!("piercings") view=AdminPiercingsPage/>
                    <Route path=path!("tattoos") view=AdminTattoosPage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}
