//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod entry;
pub mod menu;
pub mod view;

pub use entry::{handle_add_command, AddArgs};
pub use menu::run_menu;
pub use view::{export_outcome, handle_view_command, plot_outcome, ViewArgs};
