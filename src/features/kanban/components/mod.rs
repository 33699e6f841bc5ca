pub mod board;
pub mod column;
pub mod header;
pub mod task_card;
pub mod task_menu;

pub use board::KanbanBoard;
pub use column::KanbanColumn;
pub use header::KanbanHeader;
pub use task_card::TaskCard;
pub use task_menu::TaskMenu;
