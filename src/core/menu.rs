//! Disclosure menu state and the actions a task card offers.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    /// Click on the menu button.
    Trigger,
    /// Pointer down anywhere outside the menu.
    OutsideInteraction,
    /// An entry was chosen.
    Select,
    Escape,
}

impl MenuState {
    pub fn on(self, event: MenuEvent) -> MenuState {
        match (self, event) {
            (MenuState::Closed, MenuEvent::Trigger) => MenuState::Open,
            _ => MenuState::Closed,
        }
    }

    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }

    /// CSS classes for the items panel; the enter/leave transitions key off
    /// the `--open` modifier.
    pub fn panel_class(self) -> &'static str {
        match self {
            MenuState::Open => "task-menu__items task-menu__items--open",
            MenuState::Closed => "task-menu__items",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardAction {
    View,
    Edit,
    Delete,
}

impl CardAction {
    pub fn label(&self) -> &'static str {
        match self {
            CardAction::View => "View task",
            CardAction::Edit => "Edit task",
            CardAction::Delete => "Delete task",
        }
    }

    pub fn is_destructive(&self) -> bool {
        matches!(self, CardAction::Delete)
    }
}

/// Entries shown in a card's menu. Editing actions require `can_edit`.
pub fn menu_actions(can_edit: bool) -> &'static [CardAction] {
    if can_edit {
        &[CardAction::View, CardAction::Edit, CardAction::Delete]
    } else {
        &[CardAction::View]
    }
}
