pub mod toasts;

pub use toasts::{provide_toasts, use_toasts, ToastRegion, Toasts};
