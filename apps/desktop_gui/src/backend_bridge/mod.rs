//! Bridge between the UI thread and the backend upload worker.

pub mod commands;
pub mod runtime;
