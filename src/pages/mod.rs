pub mod not_found;
pub mod project_board;

pub use not_found::NotFound;
pub use project_board::ProjectBoard;
