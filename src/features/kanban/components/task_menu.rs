use leptos::ev;
use leptos::html::Div;
use leptos::prelude::*;
use std::rc::Rc;
use wasm_bindgen::JsCast;

use crate::core::menu::{menu_actions, CardAction, MenuEvent, MenuState};

/// Overflow menu of a task card. Closed until its button is clicked; closes on
/// selection, Escape, or a pointer press outside of it.
#[component]
pub fn TaskMenu(can_edit: bool, on_action: Rc<dyn Fn(CardAction) + 'static>) -> impl IntoView {
    let (state, set_state) = signal(MenuState::Closed);
    let root: NodeRef<Div> = NodeRef::new();
    let dispatch = move |event: MenuEvent| set_state.update(|s| *s = s.on(event));

    let outside = window_event_listener(ev::pointerdown, move |ev| {
        if !state.get_untracked().is_open() {
            return;
        }
        let inside = match (root.get_untracked(), ev.target()) {
            (Some(menu), Some(target)) => menu.contains(target.dyn_ref::<web_sys::Node>()),
            _ => false,
        };
        if !inside {
            dispatch(MenuEvent::OutsideInteraction);
        }
    });
    let escape = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" && state.get_untracked().is_open() {
            dispatch(MenuEvent::Escape);
        }
    });
    on_cleanup(move || {
        outside.remove();
        escape.remove();
    });

    let items = menu_actions(can_edit)
        .iter()
        .copied()
        .map(|action| {
            let on_action = on_action.clone();
            let class = if action.is_destructive() {
                "task-menu__item task-menu__item--danger"
            } else {
                "task-menu__item"
            };
            view! {
                <button
                    type="button"
                    role="menuitem"
                    class=class
                    on:click=move |_| {
                        dispatch(MenuEvent::Select);
                        on_action(action);
                    }
                >
                    {action.label()}
                </button>
            }
        })
        .collect_view();

    view! {
        <div class="task-menu" node_ref=root>
            <button
                type="button"
                class="task-menu__button"
                aria-haspopup="menu"
                aria-expanded=move || state.get().is_open().to_string()
                on:click=move |_| dispatch(MenuEvent::Trigger)
            >
                <span class="sr-only">"Options"</span>
                "⋮"
            </button>
            <div
                class=move || state.get().panel_class()
                role="menu"
                aria-hidden=move || (!state.get().is_open()).to_string()
            >
                {items}
            </div>
        </div>
    }
}
