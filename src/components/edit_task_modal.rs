use leptos::prelude::*;
use leptos::{ev, html::Dialog};
use std::rc::Rc;

use crate::models::Task;

#[component]
pub fn EditTaskModal(
    task: Task,
    on_save: Rc<dyn Fn(String, String) + 'static>, // name, description
    on_close: Rc<dyn Fn() + 'static>,
) -> impl IntoView {
    let dialog_ref: NodeRef<Dialog> = NodeRef::new();
    let (name, set_name) = signal(task.name.clone());
    let (description, set_description) = signal(task.description.clone());

    Effect::new(move |_| {
        if let Some(dialog) = dialog_ref.get() {
            let _ = dialog.show_modal();
        }
    });

    let handle_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let name = name.get_untracked();
        if name.trim().is_empty() {
            return;
        }
        // the modal stays open until the save succeeds and the panel is closed
        on_save(name, description.get_untracked());
    };

    let close_x = {
        let on_close = on_close.clone();
        move |_| on_close()
    };
    let close_cancel = {
        let on_close = on_close.clone();
        move |_| on_close()
    };

    view! {
        <dialog node_ref=dialog_ref class="task-modal" on:close=move |_| on_close()>
            <div class="modal-content">
                <div class="modal-header">
                    <h3>"EDIT TASK"</h3>
                    <button type="button" class="modal-close" on:click=close_x>"×"</button>
                </div>
                <form on:submit=handle_submit>
                    <div class="form-group">
                        <label>"NAME"</label>
                        <input
                            type="text"
                            placeholder="Task name..."
                            on:input=move |ev| set_name.set(event_target_value(&ev))
                            prop:value=move || name.get()
                            required
                        />
                    </div>
                    <div class="form-group">
                        <label>"DESCRIPTION"</label>
                        <textarea
                            placeholder="Task description..."
                            rows="4"
                            on:input=move |ev| set_description.set(event_target_value(&ev))
                            prop:value=move || description.get()
                        ></textarea>
                    </div>
                    <div class="modal-actions">
                        <button type="button" class="btn-secondary" on:click=close_cancel>"CANCEL"</button>
                        <button type="submit" class="btn-primary">"SAVE CHANGES"</button>
                    </div>
                </form>
            </div>
        </dialog>
    }
}
