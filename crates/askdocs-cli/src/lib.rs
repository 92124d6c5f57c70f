//! Interactive chat interface for askdocs

mod chat;
mod ui;

pub use chat::{ChatSession, is_exit_command};
pub use ui::{UserInput, display_banner, read_user_input};

// Re-export core types
pub use askdocs_core::{Error, Result};
