pub mod project;
pub mod task;

pub use project::{ProjectDetail, User};
pub use task::{Task, TaskStatus};
