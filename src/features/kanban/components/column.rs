use leptos::prelude::*;

use crate::features::kanban::components::TaskCard;
use crate::models::{Task, TaskStatus};

/// One status column; also the drop target for that status.
#[component]
pub fn KanbanColumn(status: TaskStatus, tasks: Vec<Task>, can_edit: bool) -> impl IntoView {
    let count = tasks.len();
    let cards = if tasks.is_empty() {
        view! { <li class="column-empty">"No tasks"</li> }.into_any()
    } else {
        tasks
            .into_iter()
            .map(|task| view! { <TaskCard task=task can_edit=can_edit /> })
            .collect_view()
            .into_any()
    };

    view! {
        <div class=format!("kanban-column kanban-column--{}", status.key()) data-droppable-id=status.key()>
            <div class="column-header">
                <h3>{status.as_str()}</h3>
                <span class="task-count">{count}</span>
            </div>
            <ul class="column-content">{cards}</ul>
        </div>
    }
}
