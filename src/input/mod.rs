//! Input processing module
//! Handles candidate resolution, file detection and text extraction

pub mod file_detector;
pub mod text_extractor;
pub mod manager;

pub use manager::InputManager;
