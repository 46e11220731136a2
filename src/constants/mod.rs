pub mod content;
pub mod questions;
