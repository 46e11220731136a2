//! HTML rendering. Every function here is a pure `view -> String` pass over
//! session data; handlers re-render the whole page on each interaction.

pub mod chart;
pub mod components;
pub mod dashboard;
pub mod home;
pub mod layout;
pub mod progress;
pub mod quiz;

pub use layout::page_shell;
