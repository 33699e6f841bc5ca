use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_location, use_params_map, use_query_map};
use std::rc::Rc;

use crate::components::{EditTaskModal, TaskDetailsModal};
use crate::core::routing::requested_panel;
use crate::core::services::TauriTaskApi;
use crate::core::{QueryKey, TaskApi, TaskPanel, ViewContext};
use crate::features::kanban::hooks::{use_card_actions, use_query};
use crate::features::kanban::{KanbanBoard, KanbanHeader};
use crate::models::{ProjectDetail, User};

/// Route page for `/projects/:projectId`.
#[component]
pub fn ProjectBoard() -> impl IntoView {
    let params = use_params_map();
    let location = use_location();

    move || {
        let route_ctx = ViewContext::from_route(
            |name| params.with(|p| p.get(name).map(|v| v.to_string())),
            location.pathname.get(),
        );
        match route_ctx {
            Ok(ctx) => view! { <BoardView ctx=ctx /> }.into_any(),
            Err(e) => {
                tracing::error!(error = %e, "project board mounted on a route without a project");
                view! { <div class="error-panel">{e.to_string()}</div> }.into_any()
            }
        }
    }
}

#[component]
fn BoardView(ctx: ViewContext) -> impl IntoView {
    provide_context(ctx.clone());

    let api = TauriTaskApi;
    let project_id = ctx.project_id.clone();
    let project = use_query(QueryKey::edit_project(&ctx.project_id), move || {
        let project_id = project_id.clone();
        async move { api.get_project(&project_id).await }
    });
    let user = use_query(QueryKey::user(), move || async move { api.get_user().await });

    let query = use_query_map();
    let panel = Memo::new(move |_| {
        query.with(|q| requested_panel(|key| q.get(key).map(|v| v.to_string())))
    });

    let board = {
        let ctx = ctx.clone();
        move || {
            if let Some(e) = project.error.get() {
                if project.data.with(Option::is_none) {
                    return view! { <div class="error-panel">{e.to_string()}</div> }.into_any();
                }
            }
            let Some(detail) = project.data.get() else {
                return view! { <div class="loading">"Loading project..."</div> }.into_any();
            };
            let can_edit = user.data.with(|u| u.as_ref().is_some_and(|u: &User| detail.can_edit(u)));
            view! {
                <KanbanHeader project=detail.clone() refreshing=project.fetching />
                <KanbanBoard project=detail can_edit=can_edit ctx=ctx.clone() />
            }
            .into_any()
        }
    };

    let task_panel = move || {
        let (kind, task_id) = panel.get()?;
        let task = project
            .data
            .with(|p| p.as_ref().and_then(|p: &ProjectDetail| p.find_task(&task_id).cloned()));
        let Some(task) = task else {
            tracing::debug!(%task_id, "query names an unknown task");
            return None;
        };

        // built per render: the actions hold the router's non-Send navigate
        let actions = use_card_actions();
        let on_close: Rc<dyn Fn()> = {
            let actions = actions.clone();
            let ctx = ctx.clone();
            Rc::new(move || actions.close_panel(&ctx))
        };
        Some(match kind {
            TaskPanel::View => view! { <TaskDetailsModal task=task on_close=on_close /> }.into_any(),
            TaskPanel::Edit => {
                let on_save: Rc<dyn Fn(String, String)> = {
                    let actions = actions.clone();
                    let ctx = ctx.clone();
                    let task_id = task.id.clone();
                    Rc::new(move |name: String, description: String| {
                        let actions = actions.clone();
                        let ctx = ctx.clone();
                        let task_id = task_id.clone();
                        spawn_local(async move {
                            actions.save_edits(&ctx, &task_id, &name, &description).await
                        });
                    })
                };
                view! { <EditTaskModal task=task on_save=on_save on_close=on_close /> }.into_any()
            }
        })
    };

    view! {
        <div class="kanban-page">
            {board}
            {task_panel}
        </div>
    }
}
