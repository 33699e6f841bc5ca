use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::config::AppConfig;
use crate::core::drag::{
    hit_test, DragKey, DragSession, DragSnapshot, DraggableAttributes, DropEvent, DropResult,
    Point, Rect,
};

/// Attribute marking an element as a drop target; its value is the droppable id.
pub const DROPPABLE_ATTR: &str = "data-droppable-id";

/// Source of draggable registrations. Cards only depend on this.
pub trait DragSessionProvider {
    fn register_draggable(&self, id: &str) -> DraggableHandle;
}

pub struct DraggableHandle {
    pub attributes: DraggableAttributes,
    pub snapshot: Signal<DragSnapshot>,
    pub listeners: DragListeners,
}

/// Pointer/keyboard handlers to attach to the draggable region.
#[derive(Clone)]
pub struct DragListeners {
    ctx: DragContext,
    id: String,
}

impl DragListeners {
    pub fn on_pointer_down(&self, ev: &ev::PointerEvent) {
        if ev.button() != 0 {
            return;
        }
        let at = Point::new(ev.client_x() as f64, ev.client_y() as f64);
        self.ctx.session.update(|s| s.pointer_down(&self.id, at));
    }

    pub fn on_key_down(&self, ev: &ev::KeyboardEvent) {
        // keys pressed on nested controls (the title button) keep their meaning
        if ev.target() != ev.current_target() {
            return;
        }
        let Some(key) = DragKey::from_key(&ev.key()) else {
            return;
        };
        let owns = self.ctx.session.with_untracked(|s| s.active_id() == Some(self.id.as_str()));
        if !owns && key != DragKey::Activate {
            return;
        }

        ev.prevent_default();
        let center = element_center(ev.current_target());
        let dropped = self
            .ctx
            .session
            .try_update(|s| s.key_down(&self.id, key, center))
            .flatten();
        if let Some(drop) = dropped {
            self.ctx.dispatch(drop);
        }
    }

    /// Whether a click on the region should be ignored because it ends a drag.
    pub fn swallow_click(&self) -> bool {
        self.ctx
            .session
            .try_update_untracked(|s| s.consume_click(&self.id))
            .unwrap_or(false)
    }
}

#[derive(Clone, Copy)]
pub struct DragContext {
    session: RwSignal<DragSession>,
    drops: RwSignal<Option<DropResult>>,
}

impl DragContext {
    /// Latest completed drop.
    pub fn drops(&self) -> ReadSignal<Option<DropResult>> {
        self.drops.read_only()
    }

    fn dispatch(&self, drop: DropEvent) {
        let droppables = droppable_rects();
        let droppable_id = hit_test(drop.point, &droppables).map(str::to_string);
        tracing::debug!(
            draggable_id = %drop.draggable_id,
            droppable_id = ?droppable_id,
            "drag ended"
        );
        self.drops.set(Some(DropResult { draggable_id: drop.draggable_id, droppable_id }));
    }
}

impl DragSessionProvider for DragContext {
    fn register_draggable(&self, id: &str) -> DraggableHandle {
        let session = self.session;
        let snapshot_id = id.to_string();
        let snapshot = Memo::new(move |_| session.with(|s| s.snapshot(&snapshot_id)));

        DraggableHandle {
            attributes: DraggableAttributes::default(),
            snapshot: snapshot.into(),
            listeners: DragListeners { ctx: *self, id: id.to_string() },
        }
    }
}

/// Creates the drag session for a board and wires the window-level pointer
/// listeners that track an active drag.
pub fn provide_drag_context() -> DragContext {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let ctx = DragContext {
        session: RwSignal::new(DragSession::new(
            config.drag_activation_distance,
            config.keyboard_step,
        )),
        drops: RwSignal::new(None),
    };

    let session = ctx.session;
    let on_move = window_event_listener(ev::pointermove, move |ev| {
        let at = Point::new(ev.client_x() as f64, ev.client_y() as f64);
        session.maybe_update(|s| s.pointer_move(at));
    });
    let on_up = window_event_listener(ev::pointerup, move |_| {
        if let Some(drop) = session.try_update(|s| s.pointer_up()).flatten() {
            ctx.dispatch(drop);
        }
    });
    let on_cancel = window_event_listener(ev::pointercancel, move |_| {
        session.update(|s| s.cancel());
    });
    on_cleanup(move || {
        on_move.remove();
        on_up.remove();
        on_cancel.remove();
    });

    provide_context(ctx);
    ctx
}

pub fn use_drag_context() -> Option<DragContext> {
    use_context::<DragContext>()
}

fn element_center(target: Option<web_sys::EventTarget>) -> Point {
    target
        .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        .map(|el| {
            let r = el.get_bounding_client_rect();
            Point::new(r.left() + r.width() / 2.0, r.top() + r.height() / 2.0)
        })
        .unwrap_or_default()
}

fn droppable_rects() -> Vec<(String, Rect)> {
    let Ok(nodes) = document().query_selector_all(&format!("[{DROPPABLE_ATTR}]")) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
        .filter_map(|el| {
            let id = el.get_attribute(DROPPABLE_ATTR)?;
            let r = el.get_bounding_client_rect();
            Some((id, Rect { left: r.left(), top: r.top(), width: r.width(), height: r.height() }))
        })
        .collect()
}
