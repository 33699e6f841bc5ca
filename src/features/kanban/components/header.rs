use leptos::prelude::*;

use crate::models::ProjectDetail;

#[component]
pub fn KanbanHeader(project: ProjectDetail, #[prop(into)] refreshing: Signal<bool>) -> impl IntoView {
    view! {
        <header class="kanban-header">
            <div>
                <h1>{project.project_name}</h1>
                <p class="kanban-header__client">{project.client_name}</p>
                <p class="kanban-header__description">{project.description}</p>
            </div>
            <span class="kanban-header__sync" class:active=move || refreshing.get()>"Syncing…"</span>
        </header>
    }
}
