use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::config::AppConfig;
use crate::features::kanban::hooks::provide_query_client;
use crate::features::notifications::{provide_toasts, ToastRegion};
use crate::pages::{NotFound, ProjectBoard};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    provide_query_client();
    provide_toasts(&config);
    provide_context(config);

    view! {
        <Router>
            <main class="app">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/projects/:projectId") view=ProjectBoard />
                </Routes>
            </main>
            <ToastRegion />
        </Router>
    }
}
