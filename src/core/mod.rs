pub mod card_actions;
pub mod drag;
pub mod menu;
pub mod notifications;
pub mod query_cache;
pub mod routing;
pub mod services;

pub use card_actions::{CacheInvalidator, CardActions, Navigator, Notifier, TaskApi};
pub use query_cache::{QueryCache, QueryKey};
pub use routing::{TaskPanel, ViewContext};
