//! UI layer for the upload form window.

pub mod app;

pub use app::{StartupConfig, UploadFormApp};
