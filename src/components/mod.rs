pub mod edit_task_modal;
pub mod task_details_modal;

pub use edit_task_modal::EditTaskModal;
pub use task_details_modal::TaskDetailsModal;
