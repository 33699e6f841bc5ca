use chrono::{DateTime, Utc};
use leptos::html::Dialog;
use leptos::prelude::*;
use std::rc::Rc;

use crate::models::Task;

fn format_date(date: Option<DateTime<Utc>>) -> String {
    date.map(|d| d.format("%B %-d, %Y").to_string())
        .unwrap_or_else(|| "—".to_string())
}

/// Read-only view of a task, opened by `?viewTask=<id>`.
#[component]
pub fn TaskDetailsModal(task: Task, on_close: Rc<dyn Fn() + 'static>) -> impl IntoView {
    let dialog_ref: NodeRef<Dialog> = NodeRef::new();

    Effect::new(move |_| {
        if let Some(dialog) = dialog_ref.get() {
            let _ = dialog.show_modal();
        }
    });

    let close_x = {
        let on_close = on_close.clone();
        move |_| on_close()
    };

    view! {
        <dialog node_ref=dialog_ref class="task-modal" on:close=move |_| on_close()>
            <div class="modal-content">
                <div class="modal-header">
                    <h3>{task.name}</h3>
                    <button type="button" class="modal-close" on:click=close_x>"×"</button>
                </div>
                <p class="task-modal__meta">"Created: " {format_date(task.created_at)}</p>
                <p class="task-modal__meta">"Last update: " {format_date(task.updated_at)}</p>
                <p class="task-modal__description">{task.description}</p>
                <p class="task-modal__status">"Status: " {task.status.as_str()}</p>
            </div>
        </dialog>
    }
}
