//! Drag session state, independent of any DOM binding.
//!
//! A session tracks at most one active draggable. Pointer presses arm a
//! pending drag that only activates once the pointer travels past the
//! activation distance, so a plain click on the card never becomes a drop.

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    fn offset(self, delta: Transform) -> Point {
        Point::new(self.x + delta.x, self.y + delta.y)
    }
}

/// Offset of the dragged item from where the drag started.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Transform {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sensor {
    Pointer,
    Keyboard,
}

#[derive(Debug, Clone, PartialEq)]
enum Phase {
    Idle,
    Pending { id: String, origin: Point },
    Dragging { id: String, origin: Point, delta: Transform, sensor: Sensor },
}

/// What a draggable needs to render itself.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DragSnapshot {
    pub transform: Option<Transform>,
    pub is_dragging: bool,
}

/// Emitted when an active drag is released.
#[derive(Debug, Clone, PartialEq)]
pub struct DropEvent {
    pub draggable_id: String,
    pub point: Point,
    pub delta: Transform,
}

/// Keys understood by the keyboard sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragKey {
    Activate,
    Cancel,
    Up,
    Down,
    Left,
    Right,
}

impl DragKey {
    pub fn from_key(key: &str) -> Option<DragKey> {
        match key {
            " " | "Enter" => Some(DragKey::Activate),
            "Escape" => Some(DragKey::Cancel),
            "ArrowUp" => Some(DragKey::Up),
            "ArrowDown" => Some(DragKey::Down),
            "ArrowLeft" => Some(DragKey::Left),
            "ArrowRight" => Some(DragKey::Right),
            _ => None,
        }
    }
}

/// Drop reported to the board once the target under the drop point is known.
#[derive(Debug, Clone, PartialEq)]
pub struct DropResult {
    pub draggable_id: String,
    pub droppable_id: Option<String>,
}

/// Accessibility attributes a draggable region carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DraggableAttributes {
    pub role: &'static str,
    pub tab_index: &'static str,
    pub role_description: &'static str,
}

impl Default for DraggableAttributes {
    fn default() -> Self {
        Self { role: "button", tab_index: "0", role_description: "draggable" }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    phase: Phase,
    activation_distance: f64,
    keyboard_step: f64,
    // the click that follows a pointer drop must not open the card
    swallow_click: Option<String>,
}

impl Default for DragSession {
    fn default() -> Self {
        Self::new(5.0, 25.0)
    }
}

impl DragSession {
    pub fn new(activation_distance: f64, keyboard_step: f64) -> Self {
        Self { phase: Phase::Idle, activation_distance, keyboard_step, swallow_click: None }
    }

    pub fn active_id(&self) -> Option<&str> {
        match &self.phase {
            Phase::Dragging { id, .. } => Some(id),
            _ => None,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.phase, Phase::Idle)
    }

    pub fn pointer_down(&mut self, id: &str, at: Point) {
        if self.active_id().is_some() {
            return;
        }
        self.swallow_click = None;
        self.phase = Phase::Pending { id: id.to_string(), origin: at };
    }

    /// Returns true when the move changed what draggables render.
    pub fn pointer_move(&mut self, at: Point) -> bool {
        match &mut self.phase {
            Phase::Idle => false,
            Phase::Pending { id, origin } => {
                let (dx, dy) = (at.x - origin.x, at.y - origin.y);
                if (dx * dx + dy * dy).sqrt() < self.activation_distance {
                    return false;
                }
                let id = std::mem::take(id);
                let origin = *origin;
                self.phase = Phase::Dragging {
                    id,
                    origin,
                    delta: Transform { x: dx, y: dy },
                    sensor: Sensor::Pointer,
                };
                true
            }
            Phase::Dragging { origin, delta, sensor: Sensor::Pointer, .. } => {
                *delta = Transform { x: at.x - origin.x, y: at.y - origin.y };
                true
            }
            Phase::Dragging { .. } => false,
        }
    }

    pub fn pointer_up(&mut self) -> Option<DropEvent> {
        match &self.phase {
            Phase::Dragging { sensor: Sensor::Pointer, .. } => {
                let drop = self.finish();
                self.swallow_click = drop.as_ref().map(|d| d.draggable_id.clone());
                drop
            }
            Phase::Pending { .. } => {
                self.phase = Phase::Idle;
                None
            }
            _ => None,
        }
    }

    /// Feeds a key press for draggable `id`, whose centre is `center`.
    /// Returns a drop when the key released the item.
    pub fn key_down(&mut self, id: &str, key: DragKey, center: Point) -> Option<DropEvent> {
        // a pending swallow only covers the click that trails a pointer drop
        self.swallow_click = None;
        if self.is_idle() {
            if key == DragKey::Activate {
                self.phase = Phase::Dragging {
                    id: id.to_string(),
                    origin: center,
                    delta: Transform::default(),
                    sensor: Sensor::Keyboard,
                };
            }
            return None;
        }

        let owns_session = matches!(
            &self.phase,
            Phase::Dragging { id: active, sensor: Sensor::Keyboard, .. } if active == id
        );
        if !owns_session {
            return None;
        }

        match key {
            DragKey::Activate => return self.finish(),
            DragKey::Cancel => self.cancel(),
            _ => {
                let step = self.keyboard_step;
                if let Phase::Dragging { delta, .. } = &mut self.phase {
                    match key {
                        DragKey::Up => delta.y -= step,
                        DragKey::Down => delta.y += step,
                        DragKey::Left => delta.x -= step,
                        DragKey::Right => delta.x += step,
                        DragKey::Activate | DragKey::Cancel => {}
                    }
                }
            }
        }
        None
    }

    /// True once for the click event that trails a pointer drop of `id`.
    pub fn consume_click(&mut self, id: &str) -> bool {
        if self.swallow_click.as_deref() == Some(id) {
            self.swallow_click = None;
            return true;
        }
        false
    }

    pub fn cancel(&mut self) {
        self.phase = Phase::Idle;
    }

    fn finish(&mut self) -> Option<DropEvent> {
        match std::mem::replace(&mut self.phase, Phase::Idle) {
            Phase::Dragging { id, origin, delta, .. } => Some(DropEvent {
                draggable_id: id,
                point: origin.offset(delta),
                delta,
            }),
            _ => None,
        }
    }

    pub fn snapshot(&self, id: &str) -> DragSnapshot {
        match &self.phase {
            Phase::Dragging { id: active, delta, .. } if active == id => DragSnapshot {
                transform: Some(*delta),
                is_dragging: true,
            },
            _ => DragSnapshot::default(),
        }
    }
}

/// Screen rectangle of a drop target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left
            && point.x <= self.left + self.width
            && point.y >= self.top
            && point.y <= self.top + self.height
    }
}

/// First droppable whose rectangle contains `point`.
pub fn hit_test<'a>(point: Point, droppables: &'a [(String, Rect)]) -> Option<&'a str> {
    droppables
        .iter()
        .find(|(_, rect)| rect.contains(point))
        .map(|(id, _)| id.as_str())
}

pub const DRAG_TRANSITION: &str = "transform 0.2s ease";
pub const DRAG_SHADOW: &str = "0px 4px 12px rgba(0, 0, 0, 0.15)";
pub const DRAG_Z_INDEX: u32 = 1000;
pub const REST_Z_INDEX: u32 = 1;

/// Inline style a card derives from its drag snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct CardStyle {
    pub transform: Option<String>,
    pub transition: &'static str,
    pub z_index: u32,
    pub box_shadow: Option<&'static str>,
    pub position: Option<&'static str>,
}

impl CardStyle {
    pub fn from_snapshot(snapshot: &DragSnapshot) -> Self {
        let dragging = snapshot.is_dragging;
        Self {
            transform: snapshot
                .transform
                .map(|t| format!("translate3d({}px, {}px, 0)", t.x, t.y)),
            transition: if dragging { "none" } else { DRAG_TRANSITION },
            z_index: if dragging { DRAG_Z_INDEX } else { REST_Z_INDEX },
            box_shadow: dragging.then_some(DRAG_SHADOW),
            position: dragging.then_some("relative"),
        }
    }

    pub fn to_css(&self) -> String {
        let mut css = String::new();
        if let Some(transform) = &self.transform {
            css.push_str(&format!("transform: {transform}; "));
        }
        css.push_str(&format!("transition: {}; z-index: {};", self.transition, self.z_index));
        if let Some(shadow) = self.box_shadow {
            css.push_str(&format!(" box-shadow: {shadow};"));
        }
        if let Some(position) = self.position {
            css.push_str(&format!(" position: {position};"));
        }
        css
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_without_travel_is_a_click() {
        let mut session = DragSession::new(5.0, 25.0);
        session.pointer_down("t1", Point::new(100.0, 100.0));
        assert!(!session.pointer_move(Point::new(102.0, 101.0)));
        assert!(!session.snapshot("t1").is_dragging);
        assert_eq!(session.pointer_up(), None);
        assert!(session.is_idle());
    }

    #[test]
    fn test_pointer_drag_reports_offset_and_drop() {
        let mut session = DragSession::new(5.0, 25.0);
        session.pointer_down("t1", Point::new(100.0, 100.0));
        assert!(session.pointer_move(Point::new(110.0, 120.0)));

        let snapshot = session.snapshot("t1");
        assert!(snapshot.is_dragging);
        assert_eq!(snapshot.transform, Some(Transform { x: 10.0, y: 20.0 }));

        let drop = session.pointer_up().unwrap();
        assert_eq!(drop.draggable_id, "t1");
        assert_eq!(drop.point, Point::new(110.0, 120.0));
        assert!(session.is_idle());
    }

    #[test]
    fn test_click_after_drop_is_swallowed_once() {
        let mut session = DragSession::default();
        session.pointer_down("t1", Point::default());
        session.pointer_move(Point::new(30.0, 0.0));
        session.pointer_up();
        assert!(session.consume_click("t1"));
        assert!(!session.consume_click("t1"));

        // plain clicks are never swallowed
        session.pointer_down("t1", Point::default());
        session.pointer_up();
        assert!(!session.consume_click("t1"));
    }

    #[test]
    fn test_key_press_after_pointer_drop_keeps_title_click() {
        let mut session = DragSession::default();
        session.pointer_down("t1", Point::default());
        session.pointer_move(Point::new(40.0, 0.0));
        session.pointer_up();

        // the drop's trailing click landed elsewhere; Enter on the title must still open it
        session.key_down("t1", DragKey::Activate, Point::default());
        session.key_down("t1", DragKey::Activate, Point::default());
        assert!(!session.consume_click("t1"));
        assert!(session.is_idle());
    }

    #[test]
    fn test_only_active_item_is_transformed() {
        let mut session = DragSession::default();
        session.pointer_down("t1", Point::default());
        session.pointer_move(Point::new(40.0, 0.0));
        assert_eq!(session.snapshot("t2"), DragSnapshot::default());

        // a second press while dragging does not steal the session
        session.pointer_down("t2", Point::default());
        assert_eq!(session.active_id(), Some("t1"));
    }

    #[test]
    fn test_keyboard_pick_move_drop() {
        let mut session = DragSession::new(5.0, 25.0);
        let center = Point::new(50.0, 50.0);
        assert_eq!(session.key_down("t1", DragKey::Activate, center), None);
        session.key_down("t1", DragKey::Right, center);
        session.key_down("t1", DragKey::Right, center);
        session.key_down("t1", DragKey::Down, center);
        assert_eq!(
            session.snapshot("t1").transform,
            Some(Transform { x: 50.0, y: 25.0 })
        );

        let drop = session.key_down("t1", DragKey::Activate, center).unwrap();
        assert_eq!(drop.point, Point::new(100.0, 75.0));
        assert!(session.is_idle());
    }

    #[test]
    fn test_keyboard_escape_cancels() {
        let mut session = DragSession::default();
        session.key_down("t1", DragKey::Activate, Point::default());
        session.key_down("t1", DragKey::Left, Point::default());
        assert_eq!(session.key_down("t1", DragKey::Cancel, Point::default()), None);
        assert!(session.is_idle());
        assert_eq!(session.snapshot("t1"), DragSnapshot::default());
    }

    #[test]
    fn test_keys_for_other_items_are_ignored() {
        let mut session = DragSession::default();
        session.key_down("t1", DragKey::Activate, Point::default());
        session.key_down("t2", DragKey::Down, Point::default());
        assert_eq!(session.snapshot("t1").transform, Some(Transform::default()));
    }

    #[test]
    fn test_drag_key_mapping() {
        assert_eq!(DragKey::from_key(" "), Some(DragKey::Activate));
        assert_eq!(DragKey::from_key("Escape"), Some(DragKey::Cancel));
        assert_eq!(DragKey::from_key("Tab"), None);
    }

    #[test]
    fn test_hit_test_picks_containing_rect() {
        let columns = vec![
            ("pending".to_string(), Rect { left: 0.0, top: 0.0, width: 200.0, height: 600.0 }),
            ("completed".to_string(), Rect { left: 220.0, top: 0.0, width: 200.0, height: 600.0 }),
        ];
        assert_eq!(hit_test(Point::new(300.0, 50.0), &columns), Some("completed"));
        assert_eq!(hit_test(Point::new(210.0, 50.0), &columns), None);
    }

    #[test]
    fn test_style_while_dragging() {
        let style = CardStyle::from_snapshot(&DragSnapshot {
            transform: Some(Transform { x: 10.0, y: 20.0 }),
            is_dragging: true,
        });
        assert_eq!(style.transform.as_deref(), Some("translate3d(10px, 20px, 0)"));
        assert_eq!(style.transition, "none");
        assert_eq!(style.z_index, 1000);
        assert_eq!(style.box_shadow, Some(DRAG_SHADOW));
        assert_eq!(
            style.to_css(),
            "transform: translate3d(10px, 20px, 0); transition: none; z-index: 1000; \
             box-shadow: 0px 4px 12px rgba(0, 0, 0, 0.15); position: relative;"
        );
    }

    #[test]
    fn test_style_at_rest() {
        let style = CardStyle::from_snapshot(&DragSnapshot::default());
        assert_eq!(style.transform, None);
        assert_eq!(style.transition, "transform 0.2s ease");
        assert_eq!(style.z_index, 1);
        assert_eq!(style.to_css(), "transition: transform 0.2s ease; z-index: 1;");
    }
}
