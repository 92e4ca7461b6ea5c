pub mod app;
pub mod charts;
pub mod cli;
pub mod error;
pub mod event;
pub mod format;
pub mod snapshot;
pub mod source;
pub mod surface;
pub mod ui;

pub use app::{App, AppMode};
