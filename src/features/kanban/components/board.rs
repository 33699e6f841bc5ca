use std::collections::HashMap;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::core::ViewContext;
use crate::features::kanban::components::KanbanColumn;
use crate::features::kanban::hooks::{provide_drag_context, use_card_actions};
use crate::models::{ProjectDetail, TaskStatus};

/// Status columns of a project. Owns the drag session: dropping a card on
/// another column moves the task to that status.
#[component]
pub fn KanbanBoard(project: ProjectDetail, can_edit: bool, ctx: ViewContext) -> impl IntoView {
    let drag = provide_drag_context();
    let actions = use_card_actions();

    let current_status: HashMap<String, TaskStatus> =
        project.tasks.iter().map(|t| (t.id.clone(), t.status)).collect();
    let drops = drag.drops();
    Effect::new(move |_| {
        let Some(drop) = drops.get() else {
            return;
        };
        let Some(target) = drop.droppable_id.as_deref().and_then(TaskStatus::from_key) else {
            return;
        };
        if !can_edit || current_status.get(&drop.draggable_id) == Some(&target) {
            return;
        }

        let actions = actions.clone();
        let ctx = ctx.clone();
        spawn_local(async move { actions.move_to(&ctx, &drop.draggable_id, target).await });
    });

    let columns = TaskStatus::all()
        .into_iter()
        .map(|status| {
            let tasks: Vec<_> =
                project.tasks.iter().filter(|t| t.status == status).cloned().collect();
            view! { <KanbanColumn status=status tasks=tasks can_edit=can_edit /> }
        })
        .collect_view();

    view! { <div class="kanban-board">{columns}</div> }
}
