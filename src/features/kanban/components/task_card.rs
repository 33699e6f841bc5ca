use leptos::prelude::*;
use leptos::task::spawn_local;
use std::rc::Rc;

use crate::core::drag::CardStyle;
use crate::core::menu::CardAction;
use crate::core::ViewContext;
use crate::features::kanban::components::TaskMenu;
use crate::features::kanban::hooks::{use_card_actions, use_drag_context, DragSessionProvider};
use crate::models::Task;

/// A task on the board: draggable summary plus its action menu.
///
/// Needs a [`ViewContext`] and a drag session from the enclosing board.
#[component]
pub fn TaskCard(task: Task, can_edit: bool) -> impl IntoView {
    let (Some(ctx), Some(drag)) = (use_context::<ViewContext>(), use_drag_context()) else {
        tracing::error!(task_id = %task.id, "task card rendered outside of a board");
        return view! { <li class="task-card task-card--broken">{task.name}</li> }.into_any();
    };

    // drag identity and task identity are the same value
    let handle = drag.register_draggable(&task.id);
    let snapshot = handle.snapshot;
    let attributes = handle.attributes;
    let actions = use_card_actions();

    let on_action: Rc<dyn Fn(CardAction)> = {
        let task_id = task.id.clone();
        let ctx = ctx.clone();
        let actions = actions.clone();
        Rc::new(move |action: CardAction| {
            let actions = actions.clone();
            let ctx = ctx.clone();
            let task_id = task_id.clone();
            spawn_local(async move { actions.perform(&ctx, &task_id, action).await });
        })
    };

    let open_view = {
        let listeners = handle.listeners.clone();
        let task_id = task.id.clone();
        move |_| {
            if listeners.swallow_click() {
                return;
            }
            actions.open_view(&ctx, &task_id);
        }
    };
    let pointer_listeners = handle.listeners.clone();
    let key_listeners = handle.listeners;

    view! {
        <li
            class="task-card"
            style=move || CardStyle::from_snapshot(&snapshot.get()).to_css()
            data-task-id=task.id.clone()
        >
            <div
                class="task-card__drag"
                role=attributes.role
                tabindex=attributes.tab_index
                aria-roledescription=attributes.role_description
                aria-pressed=move || snapshot.get().is_dragging.to_string()
                on:pointerdown=move |ev| pointer_listeners.on_pointer_down(&ev)
                on:keydown=move |ev| key_listeners.on_key_down(&ev)
            >
                <button type="button" class="task-card__title" on:click=open_view>
                    {task.name.clone()}
                </button>
                <p class="task-card__description">{task.description.clone()}</p>
            </div>
            <div class="task-card__menu">
                <TaskMenu can_edit=can_edit on_action=on_action />
            </div>
        </li>
    }
    .into_any()
}
