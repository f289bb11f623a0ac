//! Shared layout and presentational components.

pub mod admin_shell;
pub mod footer;
pub mod loading;
pub mod public_header;
