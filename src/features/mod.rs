pub mod kanban;
pub mod notifications;
