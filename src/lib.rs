//! Project board front-end: draggable task cards with contextual actions,
//! backed by a Tauri task store.

pub mod app;
pub mod components;
pub mod config;
pub mod core;
pub mod error;
pub mod features;
pub mod logging;
pub mod models;
pub mod pages;
pub mod tauri_bridge;
